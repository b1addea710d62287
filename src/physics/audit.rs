// src/physics/audit.rs

use crate::data::Catalog;
use crate::model::material::COMPOSITION_TOLERANCE;
use crate::model::{CrystalStructure, Material, StructureType};
use crate::physics::lattice::cell_volume;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

const APF_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Finding {
    CompositionSum { sum: f64 },
    AtomsPerCell { declared: u32, expected: u32 },
    Coordination { declared: u32, expected: u32 },
    PackingFactor { declared: f64, expected: f64 },
    SpaceGroup { declared: &'static str, expected: &'static str },
    DistinctSites { declared: u32, distinct: usize },
    OrthogonalApproximation { gamma: f64 },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::OrthogonalApproximation { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Finding::CompositionSum { sum } => write!(
                f,
                "composition sums to {:.3} (outside 1.0 ± {})",
                sum, COMPOSITION_TOLERANCE
            ),
            Finding::AtomsPerCell { declared, expected } => {
                write!(f, "atoms per cell is {}, structure type implies {}", declared, expected)
            }
            Finding::Coordination { declared, expected } => {
                write!(f, "coordination number is {}, structure type implies {}", declared, expected)
            }
            Finding::PackingFactor { declared, expected } => {
                write!(f, "packing factor is {}, structure type implies {}", declared, expected)
            }
            Finding::SpaceGroup { declared, expected } => {
                write!(f, "space group {} does not match structure type ({})", declared, expected)
            }
            Finding::DistinctSites { declared, distinct } => write!(
                f,
                "declares {} atoms per cell but lists {} distinct sites",
                declared, distinct
            ),
            Finding::OrthogonalApproximation { gamma } => {
                write!(f, "γ = {}°, 3D view uses orthogonal axes", gamma)
            }
        }
    }
}

/// Scan result for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordAudit {
    pub key: &'static str,
    pub name: &'static str,
    /// Å³, from the full crystallographic basis
    pub cell_volume: Option<f64>,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub records: Vec<RecordAudit>,
}

impl AuditReport {
    pub fn checked(&self) -> usize {
        self.records.len()
    }

    pub fn flagged(&self) -> impl Iterator<Item = &RecordAudit> {
        self.records.iter().filter(|r| !r.findings.is_empty())
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.records
            .iter()
            .flat_map(|r| r.findings.iter())
            .filter(|f| f.severity() == severity)
            .count()
    }

    pub fn findings_for(&self, key: &str) -> &[Finding] {
        self.records
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.findings.as_slice())
            .unwrap_or(&[])
    }
}

fn check_structure(cs: &CrystalStructure, findings: &mut Vec<Finding>) {
    let st = cs.structure_type;

    if let Some((apc, cn, apf)) = st.ideal_geometry() {
        if cs.atoms_per_unit_cell != apc {
            findings.push(Finding::AtomsPerCell { declared: cs.atoms_per_unit_cell, expected: apc });
        }
        if cs.coordination_number != cn {
            findings.push(Finding::Coordination { declared: cs.coordination_number, expected: cn });
        }
        if (cs.atomic_packing_factor - apf).abs() > APF_TOLERANCE {
            findings.push(Finding::PackingFactor { declared: cs.atomic_packing_factor, expected: apf });
        }
    } else if st == StructureType::Hcp {
        if cs.coordination_number != 12 {
            findings.push(Finding::Coordination { declared: cs.coordination_number, expected: 12 });
        }
        if (cs.atomic_packing_factor - 0.74).abs() > APF_TOLERANCE {
            findings.push(Finding::PackingFactor { declared: cs.atomic_packing_factor, expected: 0.74 });
        }
    }

    let expected_sg = st.expected_space_group();
    if cs.space_group != expected_sg {
        findings.push(Finding::SpaceGroup { declared: cs.space_group, expected: expected_sg });
    }

    let distinct = cs.distinct_sites().len();
    if distinct != cs.atoms_per_unit_cell as usize {
        findings.push(Finding::DistinctSites { declared: cs.atoms_per_unit_cell, distinct });
    }

    if !cs.lattice.is_orthogonal() {
        findings.push(Finding::OrthogonalApproximation { gamma: cs.lattice.gamma });
    }
}

pub fn audit_material(m: &Material) -> RecordAudit {
    let mut findings = Vec::new();

    let sum = m.composition_sum();
    if (sum - 1.0).abs() > COMPOSITION_TOLERANCE {
        findings.push(Finding::CompositionSum { sum });
    }

    if let Some(cs) = &m.crystal_structure {
        check_structure(cs, &mut findings);
    }

    RecordAudit {
        key: m.key,
        name: m.name,
        cell_volume: m.crystal_structure.as_ref().map(|cs| cell_volume(&cs.lattice)),
        findings,
    }
}

/// Checks every record in parallel; results stay in catalog order.
pub fn audit(catalog: &Catalog) -> AuditReport {
    let records: Vec<RecordAudit> = catalog.records().par_iter().map(audit_material).collect();

    let report = AuditReport { records };
    log::info!(
        "Audit: {} records, {} warning(s), {} note(s)",
        report.checked(),
        report.count(Severity::Warning),
        report.count(Severity::Info)
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    #[test]
    fn test_brass_composition_flagged() {
        let report = audit(catalog());
        let brass = report.findings_for("brass_360");
        assert!(brass
            .iter()
            .any(|f| matches!(f, Finding::CompositionSum { sum } if (sum - 0.648).abs() < 1e-9)));
        assert!(report.findings_for("aisi_1020").is_empty());
    }

    #[test]
    fn test_cubic_invariants_hold() {
        let report = audit(catalog());
        for m in catalog().iter() {
            let Some(cs) = &m.crystal_structure else { continue };
            if cs.structure_type.ideal_geometry().is_none() {
                continue;
            }
            let geometric = report.findings_for(m.key).iter().any(|f| {
                matches!(
                    f,
                    Finding::AtomsPerCell { .. }
                        | Finding::Coordination { .. }
                        | Finding::PackingFactor { .. }
                        | Finding::SpaceGroup { .. }
                        | Finding::DistinctSites { .. }
                )
            });
            assert!(!geometric, "{} breaks its structure-type invariants", m.key);
        }
    }

    #[test]
    fn test_graphite_site_count() {
        let report = audit(catalog());
        assert!(report
            .findings_for("carbon_graphite")
            .contains(&Finding::DistinctSites { declared: 4, distinct: 6 }));
    }

    #[test]
    fn test_hexagonal_noted() {
        let report = audit(catalog());
        let mg = report.findings_for("magnesium");
        assert_eq!(mg, &[Finding::OrthogonalApproximation { gamma: 120.0 }]);
        assert_eq!(mg[0].severity(), Severity::Info);
    }

    #[test]
    fn test_order_and_volume() {
        let report = audit(catalog());
        assert_eq!(report.checked(), catalog().len());
        assert_eq!(report.records[0].key, "aisi_1020");
        let v = report.records[0].cell_volume.unwrap();
        assert!((v - 2.866f64.powi(3)).abs() < 1e-9);
        assert!(report.records.iter().find(|r| r.key == "nylon_66").unwrap().cell_volume.is_none());
    }
}
