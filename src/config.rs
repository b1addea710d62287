// src/config.rs

use crate::model::elements::is_element_symbol;
use crate::model::{get_atom_properties, PropertyKey};
use crate::physics::comparison::ZeroAxisPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExportFormat {
  #[default]
  Svg,
  Png,
}

impl ExportFormat {
  pub fn extension(&self) -> &'static str {
    match self {
      ExportFormat::Svg => "svg",
      ExportFormat::Png => "png",
    }
  }

  pub fn parse(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "svg" => Some(ExportFormat::Svg),
      "png" => Some(ExportFormat::Png),
      _ => None,
    }
  }
}

// --- RenderStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
  pub chart_width: u32,
  pub chart_height: u32,
  pub atom_scale: f64,
  pub unit_cell_color: (f64, f64, f64),
  /// Per-element overrides, e.g. "Fe" -> (0.5, 0.5, 0.5)
  pub element_colors: HashMap<String, (f64, f64, f64)>,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      chart_width: 900,
      chart_height: 600,
      atom_scale: 0.4,
      unit_cell_color: (0.0, 0.0, 0.0),
      element_colors: HashMap::new(),
    }
  }
}

impl RenderStyle {
  /// User override first, CPK default otherwise.
  pub fn atom_color(&self, element: &str) -> (f64, f64, f64) {
    self
      .element_colors
      .get(element)
      .copied()
      .unwrap_or_else(|| get_atom_properties(element).1)
  }

  /// Override keys that cannot name an element ("iron", "FE").
  pub fn unknown_color_keys(&self) -> Vec<&str> {
    let mut keys: Vec<&str> = self
      .element_colors
      .keys()
      .map(String::as_str)
      .filter(|k| !is_element_symbol(k))
      .collect();
    keys.sort_unstable();
    keys
  }

  /// Marker radius in Å: covalent radius times `atom_scale`.
  pub fn atom_radius(&self, element: &str) -> f64 {
    get_atom_properties(element).0 * self.atom_scale
  }
}

// --- Main Config Struct ---

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "Mavens Group";
const APPLICATION: &str = "matview";

fn default_radar_properties() -> Vec<PropertyKey> {
  PropertyKey::RADAR_DEFAULT.to_vec()
}

fn default_log_level() -> String {
  "info".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub export_format: ExportFormat,

  /// Where charts and JSON dumps go. Current directory when unset.
  #[serde(default)]
  pub output_dir: Option<PathBuf>,

  #[serde(default = "default_radar_properties")]
  pub radar_properties: Vec<PropertyKey>,

  #[serde(default)]
  pub zero_axis_policy: ZeroAxisPolicy,

  #[serde(default)]
  pub style: RenderStyle,

  /// error | warn | info | debug | trace
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      export_format: ExportFormat::default(),
      output_dir: None,
      radar_properties: default_radar_properties(),
      zero_axis_policy: ZeroAxisPolicy::default(),
      style: RenderStyle::default(),
      log_level: default_log_level(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/matview/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader::<_, Self>(reader) {
            Ok(cfg) => {
              for key in cfg.style.unknown_color_keys() {
                log::warn!("Color override '{}' is not an element symbol", key);
              }
              (cfg, format!("Config loaded from {:?}", path))
            }
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  pub fn output_dir(&self) -> PathBuf {
    self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
  }

  /// Unknown level names fall back to Info.
  pub fn log_level_filter(&self) -> log::LevelFilter {
    self.log_level.parse().unwrap_or(log::LevelFilter::Info)
  }

  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut cfg = Config::default();
    cfg.export_format = ExportFormat::Png;
    cfg.zero_axis_policy = ZeroAxisPolicy::SkipAxis;
    cfg.radar_properties = vec![PropertyKey::Density, PropertyKey::CostIndex];
    cfg.style.element_colors.insert("Fe".into(), (0.1, 0.2, 0.3));

    let msg = cfg.save_to(&path);
    assert!(msg.starts_with("Config saved"), "{}", msg);

    let (loaded, msg) = Config::load_from(&path);
    assert!(msg.starts_with("Config loaded"), "{}", msg);
    assert_eq!(loaded, cfg);
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "export_format": "Png", "style": { "atom_scale": 0.6 } }"#).unwrap();

    let (cfg, _) = Config::load_from(&path);
    assert_eq!(cfg.export_format, ExportFormat::Png);
    assert_eq!(cfg.style.atom_scale, 0.6);
    assert_eq!(cfg.style.chart_width, 900);
    assert_eq!(cfg.radar_properties, PropertyKey::RADAR_DEFAULT.to_vec());
    assert_eq!(cfg.zero_axis_policy, ZeroAxisPolicy::ShowZero);
  }

  #[test]
  fn test_unknown_color_keys() {
    let mut style = RenderStyle::default();
    style.element_colors.insert("Fe".into(), (0.5, 0.5, 0.5));
    style.element_colors.insert("iron".into(), (0.5, 0.5, 0.5));
    style.element_colors.insert("CU".into(), (0.5, 0.5, 0.5));
    assert_eq!(style.unknown_color_keys(), vec!["CU", "iron"]);
  }

  #[test]
  fn test_config_path_names_the_app() {
    let path = Config::get_path();
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("settings.json"));
    assert!(!path.to_string_lossy().contains("example"));
  }

  #[test]
  fn test_bad_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));

    let (_, msg) = Config::load_from(&dir.path().join("missing.json"));
    assert_eq!(msg, "No config found. Using defaults.");
  }

  #[test]
  fn test_style_lookups() {
    let mut style = RenderStyle::default();
    assert_eq!(style.atom_color("Cu"), get_atom_properties("Cu").1);
    style.element_colors.insert("Cu".into(), (1.0, 0.0, 0.0));
    assert_eq!(style.atom_color("Cu"), (1.0, 0.0, 0.0));
    assert!((style.atom_radius("Fe") - 1.25 * 0.4).abs() < 1e-12);
  }

  #[test]
  fn test_log_level() {
    let mut cfg = Config::default();
    assert_eq!(cfg.log_level_filter(), log::LevelFilter::Info);
    cfg.log_level = "debug".into();
    assert_eq!(cfg.log_level_filter(), log::LevelFilter::Debug);
    cfg.log_level = "chatty".into();
    assert_eq!(cfg.log_level_filter(), log::LevelFilter::Info);
  }
}
