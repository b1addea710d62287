// src/rendering/charts.rs
//
// Backend-independent chart descriptions. Builders here only shape data;
// `painter` turns them into pixels and `export` into files.

use crate::model::{Material, PropertyKey};
use crate::physics::comparison::{BarSeries, RadarSeries};
use crate::rendering::scene::CrystalScene;
use plotters::prelude::{Color, Palette, Palette99, ViridisRGB};
use serde::Serialize;

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Pie(PieChart),
    Bar(BarChart),
    Radar(RadarChart),
    Crystal(CrystalScene),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Pie(c) => &c.title,
            Chart::Bar(c) => &c.title,
            Chart::Radar(c) => &c.title,
            Chart::Crystal(c) => &c.title,
        }
    }
}

/// What a view hands to the display host: a chart, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "body", rename_all = "snake_case")]
pub enum View {
    Ready(Chart),
    Unavailable(String),
}

// --- PIE ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: &'static str,
    pub fraction: f64,
    /// Share of the listed total, 0-100.
    pub percent: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

pub fn composition_pie(m: &Material) -> View {
    let total = m.composition_sum();
    if m.composition.is_empty() || total <= 0.0 {
        return View::Unavailable(format!("No composition data for {}", m.name));
    }

    let slices = m
        .composition
        .iter()
        .enumerate()
        .map(|(i, &(label, fraction))| {
            let c = Palette99::pick(i).to_rgba();
            PieSlice {
                label,
                fraction,
                percent: fraction / total * 100.0,
                color: (c.0, c.1, c.2),
            }
        })
        .collect();

    View::Ready(Chart::Pie(PieChart {
        title: format!("Composition of {}", m.name),
        slices,
    }))
}

// --- BAR ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub property: PropertyKey,
    pub bars: Vec<Bar>,
}

/// Bars colored on a viridis scale by value.
pub fn property_bar(series: &BarSeries) -> BarChart {
    let lo = series.values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = series.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let bars = series
        .names
        .iter()
        .zip(series.values.iter())
        .map(|(&label, &value)| {
            let h = if hi - lo > f64::EPSILON { (value - lo) / (hi - lo) } else { 0.5 };
            let c = ViridisRGB::get_color(h);
            Bar { label, value, color: (c.0, c.1, c.2) }
        })
        .collect();

    BarChart {
        title: format!("Comparison: {}", series.property.label()),
        x_label: "Material".to_string(),
        y_label: series.property.axis_label(),
        property: series.property,
        bars,
    }
}

// --- RADAR ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPolygon {
    pub name: &'static str,
    /// Closed: first value repeated at the end.
    pub values: Vec<f64>,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub title: String,
    /// One per axis, e.g. "Density (g/cm³)"
    pub axis_labels: Vec<String>,
    pub polygons: Vec<RadarPolygon>,
    pub notes: Vec<String>,
}

pub fn radar_chart(series: &RadarSeries) -> RadarChart {
    let polygons = series
        .traces
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let c = Palette99::pick(i).to_rgba();
            RadarPolygon { name: t.name, values: t.values.clone(), color: (c.0, c.1, c.2) }
        })
        .collect();

    let notes = series
        .skipped
        .iter()
        .map(|p| format!("{} omitted: every selected value is zero", p.label()))
        .collect();

    RadarChart {
        title: "Material Properties Radar Chart".to_string(),
        axis_labels: series.axes.iter().map(|p| p.axis_label()).collect(),
        polygons,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::physics::comparison::{bar_series, radar_series, resolve_selection, ZeroAxisPolicy};

    #[test]
    fn test_composition_pie() {
        let m = catalog().get("ti_6al_4v").unwrap();
        let View::Ready(Chart::Pie(pie)) = composition_pie(m) else {
            panic!("expected a pie chart");
        };
        assert_eq!(pie.title, "Composition of Ti-6Al-4V Titanium");
        assert_eq!(pie.slices.len(), 3);
        let total: f64 = pie.slices.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_without_data() {
        let mut m = crate::model::material::tests::fixture("x", "Mystery", 1.0);
        m.composition = &[];
        assert_eq!(
            composition_pie(&m),
            View::Unavailable("No composition data for Mystery".into())
        );
    }

    #[test]
    fn test_bar_chart_labels_and_colors() {
        let sel = resolve_selection(catalog(), &["aisi_1020", "al_6061", "ss_304"]).unwrap();
        let chart = property_bar(&bar_series(&sel, PropertyKey::YieldStrength).unwrap());
        assert_eq!(chart.title, "Comparison: Yield Strength");
        assert_eq!(chart.y_label, "Yield Strength (MPa)");
        assert_eq!(chart.bars[0].label, "AISI 1020 Steel");
        // Highest value gets the bright end of the scale
        assert_eq!(chart.bars[0].color, (254, 232, 37));
        // Lowest gets the dark end
        assert_eq!(chart.bars[2].color, (68, 1, 84));
    }

    #[test]
    fn test_radar_chart_shape() {
        let sel = resolve_selection(catalog(), &["aisi_1020", "ss_304"]).unwrap();
        let series = radar_series(&sel, &PropertyKey::RADAR_DEFAULT, ZeroAxisPolicy::ShowZero).unwrap();
        let chart = radar_chart(&series);
        assert_eq!(chart.axis_labels[0], "Density (g/cm³)");
        assert_eq!(chart.polygons.len(), 2);
        assert_eq!(chart.polygons[0].values.len(), 6);
        assert!(chart.notes.is_empty());
    }
}
