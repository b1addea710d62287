// src/rendering/export.rs

use super::charts::View;
use super::painter;
use crate::config::ExportFormat;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Draw(String),
    Serialize(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "Could not write chart: {}", e),
            RenderError::Draw(e) => write!(f, "Chart rendering failed: {}", e),
            RenderError::Serialize(e) => write!(f, "Chart serialization failed: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

/// "AISI 1020 Steel" -> "aisi_1020_steel"
pub fn file_stem(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

/// Renders a view into `<dir>/<stem>.<svg|png>` and returns the path.
/// Placeholders become an image holding their message.
pub fn export_view(
    view: &View,
    dir: &Path,
    stem: &str,
    format: ExportFormat,
    size: (u32, u32),
) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}", stem, format.extension()));

    match format {
        ExportFormat::Svg => {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            paint(&root, view)?;
            root.present().map_err(|e| RenderError::Draw(e.to_string()))?;
        }
        ExportFormat::Png => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            paint(&root, view)?;
            root.present().map_err(|e| RenderError::Draw(e.to_string()))?;
        }
    }

    match view {
        View::Ready(chart) => log::info!("'{}' written to {}", chart.title(), path.display()),
        View::Unavailable(_) => log::info!("Placeholder written to {}", path.display()),
    }
    Ok(path)
}

fn paint<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, view: &View) -> Result<(), RenderError>
where
    DB::ErrorType: 'static,
{
    let drawn = match view {
        View::Ready(chart) => painter::draw_chart(root, chart),
        View::Unavailable(msg) => painter::draw_unavailable(root, msg),
    };
    drawn.map_err(|e| RenderError::Draw(e.to_string()))
}

/// Writes the chart description itself as pretty JSON, for external plotting.
pub fn export_json(view: &View, dir: &Path, stem: &str) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", stem));
    let text = serde_json::to_string_pretty(view).map_err(|e| RenderError::Serialize(e.to_string()))?;
    fs::write(&path, text)?;
    log::info!("Chart JSON written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderStyle;
    use crate::data::catalog;
    use crate::model::PropertyKey;
    use crate::physics::comparison::{bar_series, radar_series, resolve_selection, ZeroAxisPolicy};
    use crate::rendering::charts::{composition_pie, property_bar, radar_chart, Chart};
    use crate::rendering::scene::crystal_scene;

    fn every_view() -> Vec<(&'static str, View)> {
        let cat = catalog();
        let style = RenderStyle::default();
        let sel = resolve_selection(cat, &["aisi_1020", "al_6061"]).unwrap();
        let bar = bar_series(&sel, PropertyKey::Density).unwrap();
        let radar = radar_series(&sel, &PropertyKey::RADAR_DEFAULT, ZeroAxisPolicy::ShowZero).unwrap();
        vec![
            ("pie", composition_pie(cat.get("ti_6al_4v").unwrap())),
            ("bar", View::Ready(Chart::Bar(property_bar(&bar)))),
            ("radar", View::Ready(Chart::Radar(radar_chart(&radar)))),
            ("crystal", crystal_scene(cat.get("titanium").unwrap(), &style)),
            ("placeholder", crystal_scene(cat.get("abs_plastic").unwrap(), &style)),
        ]
    }

    #[test]
    fn test_every_view_renders_in_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        for (stem, view) in every_view() {
            for format in [ExportFormat::Svg, ExportFormat::Png] {
                let path = export_view(&view, dir.path(), stem, format, (640, 480)).unwrap();
                assert_eq!(path.extension().and_then(|e| e.to_str()), Some(format.extension()));
                let size = fs::metadata(&path).unwrap().len();
                assert!(size > 0, "{} is empty", path.display());
            }
        }
    }

    #[test]
    fn test_svg_carries_titles_and_notes() {
        let dir = tempfile::tempdir().unwrap();
        let views = every_view();
        let svg = |stem: &str| {
            let (_, view) = views.iter().find(|(s, _)| *s == stem).unwrap();
            let path = export_view(view, dir.path(), stem, ExportFormat::Svg, (640, 480)).unwrap();
            fs::read_to_string(path).unwrap()
        };

        assert!(svg("pie").contains("Composition of Ti-6Al-4V Titanium"));
        assert!(svg("bar").contains("Comparison: Density"));
        assert!(svg("radar").contains("Material Properties Radar Chart"));
        assert!(svg("crystal").contains("Non-orthogonal cell"));
        assert!(svg("placeholder").contains("Crystal structure data not available for ABS Plastic"));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("AISI 1020 Steel"), "aisi_1020_steel");
        assert_eq!(file_stem("Carbon (Graphite)"), "carbon_graphite");
        assert_eq!(file_stem("Nylon 6/6"), "nylon_6_6");
    }

    #[test]
    fn test_json_chart_export() {
        let dir = tempfile::tempdir().unwrap();
        let view = crystal_scene(catalog().get("silicon").unwrap(), &RenderStyle::default());

        let path = export_json(&view, &dir.path().join("out"), "crystal_silicon").unwrap();
        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["status"], "ready");
        assert_eq!(v["body"]["kind"], "crystal");
        assert_eq!(v["body"]["wireframe"].as_array().unwrap().len(), 16);
        assert_eq!(v["body"]["atoms"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_json_placeholder_export() {
        let dir = tempfile::tempdir().unwrap();
        let view = crystal_scene(catalog().get("nylon_66").unwrap(), &RenderStyle::default());
        let path = export_json(&view, dir.path(), "crystal_nylon").unwrap();
        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["status"], "unavailable");
        assert_eq!(v["body"], "Crystal structure data not available for Nylon 6/6");
    }
}
