// src/ui/compare.rs

use crate::physics::comparison::{BarSeries, RadarSeries};
use crate::utils::report::{heading, table};

pub fn bar_summary(series: &BarSeries) -> String {
    let p = series.property;
    let mut out = heading(&format!("⚖️ Comparison: {}", p.label()));
    let rows: Vec<Vec<String>> = series
        .names
        .iter()
        .zip(series.values.iter())
        .map(|(name, &v)| vec![name.to_string(), p.format_value(v)])
        .collect();
    out.push_str(&table(&["Material", p.label()], &rows));
    out
}

/// Normalized scores per axis, with the raw value in brackets.
pub fn radar_summary(series: &RadarSeries) -> String {
    let mut out = heading("⚖️ Material Properties Radar Chart");

    let mut headers = vec!["Property"];
    headers.extend(series.traces.iter().map(|t| t.name));

    let rows: Vec<Vec<String>> = series
        .axes
        .iter()
        .enumerate()
        .map(|(k, axis)| {
            let mut row = vec![axis.label().to_string()];
            for t in &series.traces {
                row.push(format!("{:.3} ({})", t.values[k], axis.format_value(t.raw[k])));
            }
            row
        })
        .collect();
    out.push_str(&table(&headers, &rows));

    for axis in &series.skipped {
        out.push_str(&format!("  ⚠ {} omitted: every selected value is zero\n", axis.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::model::PropertyKey;
    use crate::physics::comparison::{bar_series, radar_series, resolve_selection, ZeroAxisPolicy};

    #[test]
    fn test_bar_summary() {
        let mats = resolve_selection(catalog(), &["aisi_1020", "al_6061"]).unwrap();
        let series = bar_series(&mats, PropertyKey::Density).unwrap();
        let text = bar_summary(&series);
        assert!(text.starts_with("⚖️ Comparison: Density\n"));
        assert!(text.contains("7.87 g/cm³"));
        assert!(text.contains("6061 Aluminum"));
    }

    #[test]
    fn test_radar_summary() {
        let mats = resolve_selection(catalog(), &["aisi_1020", "ss_304"]).unwrap();
        let series = radar_series(&mats, &[PropertyKey::YieldStrength], ZeroAxisPolicy::ShowZero).unwrap();
        let text = radar_summary(&series);
        assert!(text.contains("Yield Strength"));
        assert!(text.contains("1.000 (350 MPa)"));
        assert!(text.contains("0.614 (215 MPa)"));
    }
}
