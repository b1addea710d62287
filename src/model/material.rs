// src/model/material.rs

use super::crystal::CrystalStructure;
use super::properties::{Properties, PropertyKey};
use serde::Serialize;
use std::fmt;

/// Tolerance for the composition-sum data-quality check.
pub const COMPOSITION_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialClass {
    Metal,
    Polymer,
    Semiconductor,
    NonMetal,
    Ceramic,
}

impl MaterialClass {
    pub const ALL: [MaterialClass; 5] = [
        MaterialClass::Metal,
        MaterialClass::Polymer,
        MaterialClass::Semiconductor,
        MaterialClass::NonMetal,
        MaterialClass::Ceramic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MaterialClass::Metal => "metal",
            MaterialClass::Polymer => "polymer",
            MaterialClass::Semiconductor => "semiconductor",
            MaterialClass::NonMetal => "non_metal",
            MaterialClass::Ceramic => "ceramic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase().replace('-', "_");
        MaterialClass::ALL.iter().copied().find(|c| c.name() == s)
    }
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ManufacturingNotes {
    pub machinability: &'static str,
    pub weldability: &'static str,
    pub formability: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_treatment: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub castability: Option<&'static str>,
}

/// One record of the reference database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub key: &'static str,
    pub name: &'static str,
    pub class: MaterialClass,
    pub category: &'static str,
    /// (element or constituent, mass fraction)
    pub composition: &'static [(&'static str, f64)],
    pub properties: Properties,
    pub crystal_structure: Option<CrystalStructure>,
    pub applications: &'static [&'static str],
    pub characteristics: &'static [&'static str],
    pub educational_insights: &'static [&'static str],
    pub manufacturing_notes: Option<ManufacturingNotes>,
    /// (process, recipe)
    pub heat_treatment: &'static [(&'static str, &'static str)],
    pub sources: &'static [&'static str],
}

/// A broken invariant found while validating a record.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    FractionOutOfRange { element: &'static str, fraction: f64 },
    CompositionSum { sum: f64 },
    NonFiniteProperty(PropertyKey),
    NonPositiveEdge { axis: char, length: f64 },
    CoordinateOutOfRange { element: &'static str, frac: [f64; 3] },
}

impl ValidationIssue {
    /// Soft issues are reported as data-quality warnings; everything else
    /// keeps the record out of the catalog.
    pub fn is_soft(&self) -> bool {
        matches!(self, ValidationIssue::CompositionSum { .. })
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationIssue::FractionOutOfRange { element, fraction } => {
                write!(f, "fraction of {} is {}, outside [0, 1]", element, fraction)
            }
            ValidationIssue::CompositionSum { sum } => write!(
                f,
                "composition sums to {:.4} (expected 1.0 ± {})",
                sum, COMPOSITION_TOLERANCE
            ),
            ValidationIssue::NonFiniteProperty(key) => write!(f, "{} is not a finite number", key),
            ValidationIssue::NonPositiveEdge { axis, length } => {
                write!(f, "lattice edge {} = {} is not positive", axis, length)
            }
            ValidationIssue::CoordinateOutOfRange { element, frac } => write!(
                f,
                "{} site ({}, {}, {}) lies outside the unit cell",
                element, frac[0], frac[1], frac[2]
            ),
        }
    }
}

impl Material {
    pub fn composition_sum(&self) -> f64 {
        self.composition.iter().map(|(_, f)| f).sum()
    }

    pub fn property(&self, key: PropertyKey) -> Option<f64> {
        self.properties.get(key)
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for &(element, fraction) in self.composition {
            if !(0.0..=1.0).contains(&fraction) {
                issues.push(ValidationIssue::FractionOutOfRange { element, fraction });
            }
        }
        let sum = self.composition_sum();
        if (sum - 1.0).abs() > COMPOSITION_TOLERANCE {
            issues.push(ValidationIssue::CompositionSum { sum });
        }

        for (key, value) in self.properties.entries() {
            if !value.is_finite() {
                issues.push(ValidationIssue::NonFiniteProperty(key));
            }
        }

        if let Some(cs) = &self.crystal_structure {
            for (axis, length) in ['a', 'b', 'c'].into_iter().zip(cs.lattice.edges()) {
                if !(length > 0.0) {
                    issues.push(ValidationIssue::NonPositiveEdge { axis, length });
                }
            }
            for site in &cs.sites {
                if site.frac.iter().any(|v| !(0.0..=1.0).contains(v)) {
                    issues.push(ValidationIssue::CoordinateOutOfRange {
                        element: site.element,
                        frac: site.frac,
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::crystal::CrystalStructure;

    pub(crate) fn fixture(key: &'static str, name: &'static str, density: f64) -> Material {
        Material {
            key,
            name,
            class: MaterialClass::Metal,
            category: "test",
            composition: &[("Fe", 1.0)],
            properties: Properties {
                density,
                youngs_modulus: 200.0,
                yield_strength: 350.0,
                tensile_strength: 420.0,
                elongation: 25.0,
                hardness: 121.0,
                thermal_conductivity: 51.9,
                melting_point: 1520.0,
                electrical_resistivity: 1.59e-7,
                fatigue_strength: 210.0,
                cost_index: 1.0,
                reduction_area: None,
                specific_heat: None,
                thermal_expansion: None,
                poissons_ratio: None,
                fracture_toughness: None,
            },
            crystal_structure: Some(CrystalStructure::bcc("Fe", 2.866, "")),
            applications: &[],
            characteristics: &[],
            educational_insights: &[],
            manufacturing_notes: None,
            heat_treatment: &[],
            sources: &[],
        }
    }

    #[test]
    fn test_valid_fixture() {
        assert!(fixture("fe", "Iron", 7.87).validate().is_empty());
    }

    #[test]
    fn test_composition_sum_is_soft() {
        let mut m = fixture("brass", "Brass", 8.5);
        m.composition = &[("Cu", 0.61), ("Pb", 0.003), ("Zn", 0.035)];
        let issues = m.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_soft());
    }

    #[test]
    fn test_hard_issues() {
        let mut m = fixture("bad", "Bad", f64::NAN);
        if let Some(cs) = m.crystal_structure.as_mut() {
            cs.lattice.b = 0.0;
            cs.sites[0].frac = [1.2, 0.0, 0.0];
        }
        let issues = m.validate();
        assert!(issues.contains(&ValidationIssue::NonFiniteProperty(PropertyKey::Density)));
        assert!(issues.contains(&ValidationIssue::NonPositiveEdge { axis: 'b', length: 0.0 }));
        assert!(issues.iter().any(|i| matches!(i, ValidationIssue::CoordinateOutOfRange { .. })));
        assert!(issues.iter().all(|i| !i.is_soft()));
    }
}
