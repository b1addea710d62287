// src/physics/comparison.rs

use crate::data::{Catalog, CatalogError};
use crate::model::{Material, PropertyKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The compare view asks for at least this many materials.
pub const MIN_COMPARE: usize = 2;

// --- ERRORS ---

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonError {
    EmptySelection,
    TooFewMaterials { required: usize, got: usize },
    UnknownMaterial(String),
    MissingProperty { material: &'static str, property: PropertyKey },
    NoAxes,
    AllZero(PropertyKey),
    NegativeValue(PropertyKey),
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComparisonError::EmptySelection => write!(f, "No materials selected"),
            ComparisonError::TooFewMaterials { required, got } => write!(
                f,
                "Select at least {} materials to compare (got {})",
                required, got
            ),
            ComparisonError::UnknownMaterial(k) => write!(f, "Unknown material '{}'", k),
            ComparisonError::MissingProperty { material, property } => {
                write!(f, "{} has no value for {}", material, property.label())
            }
            ComparisonError::NoAxes => write!(f, "Every radar axis was dropped"),
            ComparisonError::AllZero(p) => {
                write!(f, "Cannot normalize {}: every selected value is zero", p.label())
            }
            ComparisonError::NegativeValue(p) => {
                write!(f, "Cannot normalize {}: radar axes run from 0 to 1", p.label())
            }
        }
    }
}

impl std::error::Error for ComparisonError {}

impl From<CatalogError> for ComparisonError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::UnknownKey(k) => ComparisonError::UnknownMaterial(k),
            other => ComparisonError::UnknownMaterial(other.to_string()),
        }
    }
}

// --- CONFIGURATION ---

/// What to do with a radar axis on which every selected value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroAxisPolicy {
    /// Plot 0 for every material on that axis.
    #[default]
    ShowZero,
    /// Drop the axis from the chart.
    SkipAxis,
    /// Fail the comparison.
    Error,
}

// --- RESULTS ---

/// Raw values of one property, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub property: PropertyKey,
    pub keys: Vec<&'static str>,
    pub names: Vec<&'static str>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarTrace {
    pub key: &'static str,
    pub name: &'static str,
    /// Normalized values, one per axis, first value repeated at the end.
    pub values: Vec<f64>,
    /// Raw values, one per axis.
    pub raw: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub axes: Vec<PropertyKey>,
    /// Axes dropped under [`ZeroAxisPolicy::SkipAxis`].
    pub skipped: Vec<PropertyKey>,
    pub traces: Vec<RadarTrace>,
}

// --- OPERATIONS ---

/// Resolves keys or display names against the catalog, keeping order.
pub fn resolve_selection<'a>(
    catalog: &'a Catalog,
    selection: &[&str],
) -> Result<Vec<&'a Material>, ComparisonError> {
    if selection.is_empty() {
        return Err(ComparisonError::EmptySelection);
    }
    selection
        .iter()
        .map(|q| catalog.resolve(q).map_err(ComparisonError::from))
        .collect()
}

/// Gate used by the compare view.
pub fn require_at_least(count: usize, required: usize) -> Result<(), ComparisonError> {
    if count < required {
        return Err(ComparisonError::TooFewMaterials { required, got: count });
    }
    Ok(())
}

fn value_of(m: &Material, property: PropertyKey) -> Result<f64, ComparisonError> {
    m.property(property).ok_or(ComparisonError::MissingProperty {
        material: m.name,
        property,
    })
}

pub fn bar_series(materials: &[&Material], property: PropertyKey) -> Result<BarSeries, ComparisonError> {
    if materials.is_empty() {
        return Err(ComparisonError::EmptySelection);
    }
    let values = materials
        .iter()
        .map(|m| value_of(m, property))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BarSeries {
        property,
        keys: materials.iter().map(|m| m.key).collect(),
        names: materials.iter().map(|m| m.name).collect(),
        values,
    })
}

/// Divides every value by the largest one. `None` means the axis is all
/// zero and the policy asked to skip it. Negative values have no place on a
/// 0..1 axis and are rejected.
pub fn normalize_axis(
    property: PropertyKey,
    values: &[f64],
    policy: ZeroAxisPolicy,
) -> Result<Option<Vec<f64>>, ComparisonError> {
    if values.iter().any(|v| *v < 0.0) {
        return Err(ComparisonError::NegativeValue(property));
    }

    if !values.iter().all(|v| *v == 0.0) {
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        return Ok(Some(values.iter().map(|v| v / max).collect()));
    }

    match policy {
        ZeroAxisPolicy::ShowZero => Ok(Some(vec![0.0; values.len()])),
        ZeroAxisPolicy::SkipAxis => Ok(None),
        ZeroAxisPolicy::Error => Err(ComparisonError::AllZero(property)),
    }
}

/// Multi-property comparison with every axis scaled to the selection maximum.
pub fn radar_series(
    materials: &[&Material],
    properties: &[PropertyKey],
    policy: ZeroAxisPolicy,
) -> Result<RadarSeries, ComparisonError> {
    if materials.is_empty() {
        return Err(ComparisonError::EmptySelection);
    }

    let mut axes = Vec::with_capacity(properties.len());
    let mut skipped = Vec::new();
    // columns[axis][material]
    let mut normalized: Vec<Vec<f64>> = Vec::with_capacity(properties.len());
    let mut raw: Vec<Vec<f64>> = Vec::with_capacity(properties.len());

    for &property in properties {
        let column = materials
            .iter()
            .map(|m| value_of(m, property))
            .collect::<Result<Vec<_>, _>>()?;

        match normalize_axis(property, &column, policy)? {
            Some(scaled) => {
                axes.push(property);
                normalized.push(scaled);
                raw.push(column);
            }
            None => {
                log::info!("Radar axis {} skipped: all values are zero", property);
                skipped.push(property);
            }
        }
    }

    if axes.is_empty() {
        return Err(ComparisonError::NoAxes);
    }

    let traces = materials
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let mut values: Vec<f64> = normalized.iter().map(|col| col[i]).collect();
            values.push(values[0]);
            RadarTrace {
                key: m.key,
                name: m.name,
                values,
                raw: raw.iter().map(|col| col[i]).collect(),
            }
        })
        .collect();

    Ok(RadarSeries { axes, skipped, traces })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::model::material::tests::fixture;

    #[test]
    fn test_bar_density() {
        let sel = resolve_selection(catalog(), &["AISI 1020 Steel", "6061 Aluminum"]).unwrap();
        let bar = bar_series(&sel, PropertyKey::Density).unwrap();
        assert_eq!(bar.values, vec![7.87, 2.70]);
        assert_eq!(bar.keys, vec!["aisi_1020", "al_6061"]);
    }

    #[test]
    fn test_radar_yield_normalization() {
        let sel = resolve_selection(catalog(), &["aisi_1020", "ss_304"]).unwrap();
        let radar = radar_series(&sel, &[PropertyKey::YieldStrength], ZeroAxisPolicy::default()).unwrap();
        let steel = &radar.traces[0].values;
        let stainless = &radar.traces[1].values;
        assert_eq!(steel[0], 1.0);
        assert!((stainless[0] - 0.614).abs() < 1e-3);
        // closed polygon
        assert_eq!(steel.len(), 2);
        assert_eq!(steel[0], steel[1]);
    }

    #[test]
    fn test_radar_max_is_exactly_one() {
        let sel = resolve_selection(catalog(), &["aisi_1020", "al_6061", "ti_6al_4v", "silicon"]).unwrap();
        let radar = radar_series(&sel, &PropertyKey::RADAR_DEFAULT, ZeroAxisPolicy::ShowZero).unwrap();
        assert_eq!(radar.axes.len(), 5);
        for axis in 0..radar.axes.len() {
            let max = radar
                .traces
                .iter()
                .map(|t| t.values[axis])
                .fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(max, 1.0);
        }
    }

    #[test]
    fn test_zero_axis_policies() {
        let mut a = fixture("a", "A", 7.0);
        let mut b = fixture("b", "B", 8.0);
        a.properties.elongation = 0.0;
        b.properties.elongation = 0.0;
        let sel = vec![&a, &b];
        let props = [PropertyKey::Density, PropertyKey::Elongation];

        let shown = radar_series(&sel, &props, ZeroAxisPolicy::ShowZero).unwrap();
        assert_eq!(shown.traces[0].values, vec![0.875, 0.0, 0.875]);

        let skipped = radar_series(&sel, &props, ZeroAxisPolicy::SkipAxis).unwrap();
        assert_eq!(skipped.axes, vec![PropertyKey::Density]);
        assert_eq!(skipped.skipped, vec![PropertyKey::Elongation]);

        assert_eq!(
            radar_series(&sel, &props, ZeroAxisPolicy::Error),
            Err(ComparisonError::AllZero(PropertyKey::Elongation))
        );
        assert_eq!(
            radar_series(&sel, &[PropertyKey::Elongation], ZeroAxisPolicy::SkipAxis),
            Err(ComparisonError::NoAxes)
        );
    }

    #[test]
    fn test_negative_axis_rejected() {
        let policies = [ZeroAxisPolicy::ShowZero, ZeroAxisPolicy::SkipAxis, ZeroAxisPolicy::Error];
        for policy in policies {
            assert_eq!(
                normalize_axis(PropertyKey::ThermalExpansion, &[-2.0, -4.0], policy),
                Err(ComparisonError::NegativeValue(PropertyKey::ThermalExpansion))
            );
        }
        assert_eq!(
            normalize_axis(PropertyKey::Density, &[0.0, 0.0], ZeroAxisPolicy::ShowZero),
            Ok(Some(vec![0.0, 0.0]))
        );
        assert_eq!(
            normalize_axis(PropertyKey::Density, &[0.0, 4.0], ZeroAxisPolicy::Error),
            Ok(Some(vec![0.0, 1.0]))
        );
    }

    #[test]
    fn test_selection_errors() {
        assert_eq!(
            resolve_selection(catalog(), &[]),
            Err(ComparisonError::EmptySelection)
        );
        assert_eq!(
            resolve_selection(catalog(), &["aisi_1020", "mithril"]),
            Err(ComparisonError::UnknownMaterial("mithril".into()))
        );
        assert!(require_at_least(1, MIN_COMPARE).is_err());
        assert!(require_at_least(2, MIN_COMPARE).is_ok());

        // Older records have no fracture toughness
        let sel = resolve_selection(catalog(), &["aisi_1020", "brass_360"]).unwrap();
        assert!(matches!(
            bar_series(&sel, PropertyKey::FractureToughness),
            Err(ComparisonError::MissingProperty { material: "Brass C36000", .. })
        ));
    }
}
