// src/ui/details.rs

use crate::model::{CrystalStructure, Material, PropertyKey};
use crate::utils::report::{bullets, heading, metric, table};

const MECHANICAL: [PropertyKey; 9] = [
    PropertyKey::Density,
    PropertyKey::YoungsModulus,
    PropertyKey::YieldStrength,
    PropertyKey::TensileStrength,
    PropertyKey::Hardness,
    PropertyKey::Elongation,
    PropertyKey::ReductionArea,
    PropertyKey::FatigueStrength,
    PropertyKey::FractureToughness,
];

const THERMAL_ELECTRICAL: [PropertyKey; 7] = [
    PropertyKey::MeltingPoint,
    PropertyKey::ThermalConductivity,
    PropertyKey::SpecificHeat,
    PropertyKey::ThermalExpansion,
    PropertyKey::ElectricalResistivity,
    PropertyKey::PoissonsRatio,
    PropertyKey::CostIndex,
];

fn metric_block(m: &Material, keys: &[PropertyKey]) -> String {
    let mut out = String::new();
    for &key in keys {
        if let Some(v) = m.property(key) {
            out.push_str(&metric(key.label(), &key.format_value(v)));
        }
    }
    out
}

pub fn crystal_info(cs: &CrystalStructure) -> String {
    let lat = &cs.lattice;
    let mut out = String::new();
    out.push_str(&metric("Crystal System", &cs.crystal_system.to_string()));
    out.push_str(&metric("Structure Type", cs.structure_type.label()));
    out.push_str(&metric("Space Group", cs.space_group));
    if lat.is_orthogonal() && lat.a == lat.b && lat.b == lat.c {
        out.push_str(&metric("Lattice Parameter", &format!("{} Å", lat.a)));
    } else {
        out.push_str(&metric(
            "Lattice Parameters",
            &format!("a={} b={} c={} Å, γ={}°", lat.a, lat.b, lat.c, lat.gamma),
        ));
    }
    out.push_str(&metric("Coordination Number", &cs.coordination_number.to_string()));
    out.push_str(&metric("Atomic Packing Factor", &cs.atomic_packing_factor.to_string()));
    out.push_str(&metric("Atoms per Unit Cell", &cs.atoms_per_unit_cell.to_string()));
    if !cs.description.is_empty() {
        out.push_str(&format!("  {}\n", cs.description));
    }

    let slip = cs.structure_type.slip_systems();
    if !slip.is_empty() {
        out.push_str(&metric("Slip Systems", &slip.join(", ")));
    }

    let insights = cs.structure_type.insights();
    if !insights.is_empty() {
        out.push_str("\nStructure Insights\n");
        out.push_str(&bullets(insights, "•"));
    }
    out
}

/// Listed sites of the unit cell, redundant corner copies included.
pub fn site_table(cs: &CrystalStructure) -> String {
    let rows: Vec<Vec<String>> = cs
        .sites
        .iter()
        .map(|s| {
            vec![
                s.element.to_string(),
                s.role.label().to_string(),
                format!("({:.3}, {:.3}, {:.3})", s.frac[0], s.frac[1], s.frac[2]),
            ]
        })
        .collect();
    let mut out = heading(&format!("{} unit cell ({} sites)", cs.structure_type, rows.len()));
    out.push_str(&table(&["Element", "Role", "Fractional"], &rows));
    out
}

/// Full text view of one record.
pub fn material_details(m: &Material) -> String {
    let mut out = String::new();
    out.push_str(&format!("📚 {}\n", m.name));
    out.push_str(&format!("   key: {}   class: {}   category: {}\n\n", m.key, m.class, m.category));

    out.push_str(&heading("Mechanical Properties"));
    out.push_str(&metric_block(m, &MECHANICAL));
    out.push('\n');

    out.push_str(&heading("Thermal & Electrical Properties"));
    out.push_str(&metric_block(m, &THERMAL_ELECTRICAL));
    out.push('\n');

    out.push_str(&heading("Crystal Structure"));
    match &m.crystal_structure {
        Some(cs) => out.push_str(&crystal_info(cs)),
        None => out.push_str("  Crystal structure data not available\n"),
    }
    out.push('\n');

    out.push_str(&heading("Chemical Composition"));
    for (element, fraction) in m.composition {
        out.push_str(&metric(element, &format!("{:.2}%", fraction * 100.0)));
    }
    out.push('\n');

    if !m.applications.is_empty() {
        out.push_str(&heading("Real-World Applications"));
        out.push_str(&bullets(m.applications, "•"));
        out.push('\n');
    }

    if !m.characteristics.is_empty() {
        out.push_str(&heading("Key Characteristics"));
        out.push_str(&bullets(m.characteristics, "•"));
        out.push('\n');
    }

    if let Some(notes) = &m.manufacturing_notes {
        out.push_str(&heading("Manufacturing Notes"));
        out.push_str(&metric("Machinability", notes.machinability));
        out.push_str(&metric("Weldability", notes.weldability));
        out.push_str(&metric("Formability", notes.formability));
        if let Some(ht) = notes.heat_treatment {
            out.push_str(&metric("Heat Treatment", ht));
        }
        if let Some(c) = notes.castability {
            out.push_str(&metric("Castability", c));
        }
        out.push('\n');
    }

    if !m.heat_treatment.is_empty() {
        out.push_str(&heading("Heat Treatment"));
        for (process, recipe) in m.heat_treatment {
            out.push_str(&metric(&process.replace('_', " "), recipe));
        }
        out.push('\n');
    }

    if !m.educational_insights.is_empty() {
        out.push_str(&heading("Educational Insights"));
        out.push_str(&bullets(m.educational_insights, "💡"));
        out.push('\n');
    }

    if !m.sources.is_empty() {
        out.push_str(&format!("Sources: {}\n", m.sources.join("; ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    #[test]
    fn test_details_sections() {
        let text = material_details(catalog().get("aisi_1020").unwrap());
        assert!(text.starts_with("📚 AISI 1020 Steel\n"));
        assert!(text.contains("Mechanical Properties"));
        assert!(text.contains(&metric("Density", "7.87 g/cm³")));
        assert!(text.contains(&metric("Space Group", "Im-3m")));
        assert!(text.contains(&metric("Fe", "99.00%")));
        assert!(text.contains("💡 BCC structure has 8 nearest neighbors"));
    }

    #[test]
    fn test_details_without_crystal() {
        let text = material_details(catalog().get("abs_plastic").unwrap());
        assert!(text.contains("Crystal structure data not available"));
        assert!(text.contains("Manufacturing Notes"));
        // Older records carry no optional properties
        assert!(!text.contains("Fracture Toughness"));
    }

    #[test]
    fn test_site_table_roles() {
        let cs = catalog().get("aisi_1020").unwrap().crystal_structure.as_ref().unwrap();
        let text = site_table(cs);
        assert!(text.starts_with("BCC unit cell (9 sites)\n"));
        assert!(text.contains("body_center"));
        assert!(text.contains("(0.500, 0.500, 0.500)"));
    }

    #[test]
    fn test_structure_insights() {
        let text = material_details(catalog().get("al_6061").unwrap());
        assert!(text.contains("• FCC structures have multiple slip systems"));
        let hex = material_details(catalog().get("magnesium").unwrap());
        assert!(hex.contains("Lattice Parameters"));
        assert!(hex.contains("• HCP structures have limited slip systems"));
    }
}
