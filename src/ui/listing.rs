// src/ui/listing.rs

use crate::model::{Material, PropertyKey};
use crate::physics::search::SearchCriteria;
use crate::utils::report::table;

const HEADERS: [&str; 6] = ["Key", "Name", "Class", "Density", "Yield", "Structure"];

fn row(m: &Material) -> Vec<String> {
    let structure = m
        .crystal_structure
        .as_ref()
        .map(|cs| cs.structure_type.label())
        .unwrap_or("-");
    vec![
        m.key.to_string(),
        m.name.to_string(),
        m.class.to_string(),
        PropertyKey::Density.format_value(m.properties.density),
        PropertyKey::YieldStrength.format_value(m.properties.yield_strength),
        structure.to_string(),
    ]
}

/// Browse table of every record.
pub fn browse<'a>(materials: impl IntoIterator<Item = &'a Material>) -> String {
    let rows: Vec<Vec<String>> = materials.into_iter().map(row).collect();
    format!("📚 Materials Database ({} records)\n\n{}", rows.len(), table(&HEADERS, &rows))
}

fn describe(criteria: &SearchCriteria) -> String {
    let mut parts = Vec::new();
    parts.push(format!(
        "class: {}",
        criteria.class.map(|c| c.to_string()).unwrap_or_else(|| "All".into())
    ));
    if criteria.min_yield.is_finite() {
        parts.push(format!("yield ≥ {} MPa", criteria.min_yield));
    }
    if criteria.max_density.is_finite() {
        parts.push(format!("density ≤ {} g/cm³", criteria.max_density));
    }
    parts.push(format!(
        "structure: {}",
        criteria.structure.map(|s| s.label()).unwrap_or("All")
    ));
    parts.join(", ")
}

pub fn search_results(criteria: &SearchCriteria, hits: &[&Material]) -> String {
    let mut out = format!("🔍 {}\n\n", describe(criteria));
    if hits.is_empty() {
        out.push_str("No materials found matching your criteria. Try adjusting filters.\n");
        return out;
    }
    out.push_str(&format!("Found {} Materials\n\n", hits.len()));
    let rows: Vec<Vec<String>> = hits.iter().map(|m| row(m)).collect();
    out.push_str(&table(&HEADERS, &rows));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::model::MaterialClass;
    use crate::physics::search::search;

    #[test]
    fn test_browse_lists_every_record() {
        let text = browse(catalog().iter());
        assert!(text.starts_with("📚 Materials Database (38 records)"));
        assert!(text.contains("aisi_1020"));
        assert!(text.contains("nylon_66"));
    }

    #[test]
    fn test_search_results_header() {
        let criteria = SearchCriteria {
            class: Some(MaterialClass::Polymer),
            ..SearchCriteria::any()
        };
        let hits = search(catalog(), &criteria);
        let text = search_results(&criteria, &hits);
        assert!(text.contains("Found 2 Materials"));
        assert!(text.contains("ABS Plastic"));
        assert!(text.starts_with("🔍 class: polymer, structure: All"));
    }

    #[test]
    fn test_empty_search() {
        let criteria = SearchCriteria {
            min_yield: 1.0e6,
            ..SearchCriteria::default()
        };
        let text = search_results(&criteria, &[]);
        assert!(text.contains("No materials found matching your criteria. Try adjusting filters."));
        assert!(text.contains("yield ≥ 1000000 MPa"));
    }
}
