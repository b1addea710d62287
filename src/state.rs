// src/state.rs
use crate::config::Config;
use crate::data::{catalog, Catalog};
use crate::model::{Material, PropertyKey};
use crate::physics::comparison::{
    bar_series, radar_series, require_at_least, resolve_selection, BarSeries, ComparisonError,
    RadarSeries, MIN_COMPARE,
};
use crate::rendering::{export_json, export_view, RenderError, View};
use std::path::PathBuf;

/// Everything a command needs: user settings plus the read-only catalog.
pub struct AppState {
    pub config: Config,
    /// Message from the last config load, shown at debug level.
    pub config_status: String,
    pub catalog: &'static Catalog,
    /// Also write the chart description as JSON next to the image.
    pub write_json: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            config_status: String::new(),
            catalog: catalog(),
            write_json: false,
        }
    }

    pub fn load_config(&mut self) {
        let (cfg, msg) = Config::load();
        self.config = cfg;
        self.config_status = msg;
    }

    /// Materials named on the command line, or the first two catalog
    /// records when none were given.
    pub fn compare_selection(&self, args: &[String]) -> Result<Vec<&'static Material>, ComparisonError> {
        let chosen: Vec<&str> = if args.is_empty() {
            self.catalog.keys().into_iter().take(MIN_COMPARE).collect()
        } else {
            args.iter().map(String::as_str).collect()
        };
        let materials = resolve_selection(self.catalog, &chosen)?;
        require_at_least(materials.len(), MIN_COMPARE)?;
        Ok(materials)
    }

    pub fn compare(&self, property: PropertyKey, args: &[String]) -> Result<BarSeries, ComparisonError> {
        let materials = self.compare_selection(args)?;
        bar_series(&materials, property)
    }

    pub fn radar(&self, args: &[String]) -> Result<RadarSeries, ComparisonError> {
        let materials = self.compare_selection(args)?;
        radar_series(&materials, &self.config.radar_properties, self.config.zero_axis_policy)
    }

    /// Writes a view into the output directory, plus its JSON when asked for.
    pub fn export(&self, view: &View, stem: &str) -> Result<Vec<PathBuf>, RenderError> {
        let dir = self.config.output_dir();
        let size = (self.config.style.chart_width, self.config.style.chart_height);

        if let View::Unavailable(msg) = view {
            log::warn!("{}", msg);
        }
        let mut written = vec![export_view(view, &dir, stem, self.config.export_format, size)?];

        if self.write_json {
            written.push(export_json(view, &dir, stem)?);
        }
        Ok(written)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::crystal_scene;

    #[test]
    fn test_default_selection_is_first_two_records() {
        let state = AppState::new();
        let mats = state.compare_selection(&[]).unwrap();
        let keys: Vec<&str> = mats.iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["aisi_1020", "ss_304"]);
    }

    #[test]
    fn test_single_material_rejected() {
        let state = AppState::new();
        let err = state.compare_selection(&["aisi_1020".to_string()]).unwrap_err();
        assert_eq!(err, ComparisonError::TooFewMaterials { required: 2, got: 1 });
    }

    #[test]
    fn test_compare_by_name() {
        let state = AppState::new();
        let args = vec!["AISI 1020 Steel".to_string(), "6061 Aluminum".to_string()];
        let series = state.compare(PropertyKey::Density, &args).unwrap();
        assert_eq!(series.values, vec![7.87, 2.70]);
    }

    #[test]
    fn test_json_export_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new();
        state.config.output_dir = Some(dir.path().to_path_buf());
        state.write_json = true;

        let view = crystal_scene(state.catalog.get("abs_plastic").unwrap(), &state.config.style);
        let json = export_json(&view, &state.config.output_dir(), "crystal_abs").unwrap();
        assert_eq!(json, dir.path().join("crystal_abs.json"));
        assert!(json.exists());
    }
}
