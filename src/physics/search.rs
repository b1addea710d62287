// src/physics/search.rs

use crate::data::Catalog;
use crate::model::{Material, MaterialClass, StructureType};

/// Filter settings of the search view. `None` means "All".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchCriteria {
    pub class: Option<MaterialClass>,
    /// MPa, inclusive
    pub min_yield: f64,
    /// g/cm³, inclusive
    pub max_density: f64,
    pub structure: Option<StructureType>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            class: None,
            min_yield: 100.0,
            max_density: 10.0,
            structure: None,
        }
    }
}

impl SearchCriteria {
    /// No filtering at all.
    pub fn any() -> Self {
        Self {
            class: None,
            min_yield: f64::NEG_INFINITY,
            max_density: f64::INFINITY,
            structure: None,
        }
    }

    pub fn matches(&self, m: &Material) -> bool {
        if let Some(class) = self.class {
            if m.class != class {
                return false;
            }
        }
        if m.properties.yield_strength < self.min_yield {
            return false;
        }
        if m.properties.density > self.max_density {
            return false;
        }
        match (self.structure, &m.crystal_structure) {
            (None, _) => true,
            (Some(wanted), Some(cs)) => cs.structure_type == wanted,
            (Some(_), None) => false,
        }
    }
}

/// Matching records in catalog order.
pub fn search<'a>(catalog: &'a Catalog, criteria: &SearchCriteria) -> Vec<&'a Material> {
    let hits: Vec<&Material> = catalog.iter().filter(|m| criteria.matches(m)).collect();
    log::debug!("Search {:?}: {} of {} materials", criteria, hits.len(), catalog.len());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    #[test]
    fn test_any_returns_everything() {
        assert_eq!(search(catalog(), &SearchCriteria::any()).len(), catalog().len());
    }

    #[test]
    fn test_default_filters() {
        let hits = search(catalog(), &SearchCriteria::default());
        assert!(hits.iter().all(|m| m.properties.yield_strength >= 100.0));
        assert!(hits.iter().all(|m| m.properties.density <= 10.0));
        // Tungsten and gold are too dense, lithium too weak
        for key in ["tungsten", "gold", "lithium"] {
            assert!(hits.iter().all(|m| m.key != key), "{} should be filtered", key);
        }
    }

    #[test]
    fn test_structure_filter_needs_crystal_data() {
        let criteria = SearchCriteria {
            structure: Some(StructureType::Fcc),
            ..SearchCriteria::any()
        };
        let hits = search(catalog(), &criteria);
        assert!(hits.iter().any(|m| m.key == "al_6061"));
        // 7075 carries no crystal data
        assert!(hits.iter().all(|m| m.key != "al_7075"));
        assert!(hits
            .iter()
            .all(|m| m.crystal_structure.as_ref().map(|c| c.structure_type) == Some(StructureType::Fcc)));
    }

    #[test]
    fn test_class_filter_keeps_order() {
        let criteria = SearchCriteria {
            class: Some(MaterialClass::Polymer),
            ..SearchCriteria::any()
        };
        let keys: Vec<_> = search(catalog(), &criteria).iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["abs_plastic", "nylon_66"]);
    }
}
