// src/main.rs
use clap::{Parser, Subcommand};
use matview::config::{Config, ExportFormat};
use matview::data::{to_json, CatalogError};
use matview::model::properties::UnknownProperty;
use matview::model::{MaterialClass, PropertyKey, StructureType};
use matview::physics::audit::audit;
use matview::physics::comparison::ComparisonError;
use matview::physics::search::{search, SearchCriteria};
use matview::rendering::{
    composition_pie, crystal_scene, file_stem, property_bar, radar_chart, Chart, RenderError, View,
};
use matview::state::AppState;
use matview::ui;
use matview::utils::logger;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

// --- ERRORS ---

#[derive(Debug)]
enum CliError {
    Json(serde_json::Error),
    Catalog(CatalogError),
    Comparison(ComparisonError),
    Render(RenderError),
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "Could not serialize settings: {}", e),
            CliError::Catalog(e) => write!(f, "{}", e),
            CliError::Comparison(e) => write!(f, "{}", e),
            CliError::Render(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        CliError::Catalog(e)
    }
}

impl From<ComparisonError> for CliError {
    fn from(e: ComparisonError) -> Self {
        CliError::Comparison(e)
    }
}

impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        CliError::Render(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

// --- ARGUMENTS ---

/// Mechanical engineering materials reference.
///
/// Materials are given by key (aisi_1020) or by name ("AISI 1020 Steel").
/// Compare and radar use the first two materials when none are given.
#[derive(Parser, Debug)]
#[command(name = "matview", version, about)]
struct Cli {
    /// Also write each chart description as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Image format for charts (svg or png)
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<ExportFormat>,

    /// Output directory for charts and dumps
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse every material
    List {
        /// Print display name -> key pairs instead
        #[arg(long)]
        names: bool,
    },
    /// Full details of one material
    Show { material: String },
    /// Bar chart of one property
    Compare {
        #[arg(value_parser = parse_property)]
        property: PropertyKey,
        materials: Vec<String>,
    },
    /// Normalized multi-property chart
    Radar { materials: Vec<String> },
    /// 3D unit cell
    Crystal { material: String },
    /// Composition pie chart
    Composition { material: String },
    /// Filter the catalog; omitted filters match everything
    Search {
        #[arg(long, value_parser = parse_class)]
        class: Option<MaterialClass>,
        /// MPa
        #[arg(long, default_value_t = 100.0)]
        min_yield: f64,
        /// g/cm³
        #[arg(long, default_value_t = 10.0)]
        max_density: f64,
        #[arg(long, value_parser = parse_structure)]
        structure: Option<StructureType>,
    },
    /// Data-quality report
    Audit,
    /// Dump the catalog as JSON
    ExportJson,
    /// Show the effective settings
    Config {
        /// Write them to the config file
        #[arg(long)]
        save: bool,
    },
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("unknown export format '{}'", s))
}

fn parse_property(s: &str) -> Result<PropertyKey, String> {
    s.parse().map_err(|e: UnknownProperty| e.to_string())
}

fn parse_class(s: &str) -> Result<MaterialClass, String> {
    MaterialClass::parse(s).ok_or_else(|| format!("unknown material class '{}'", s))
}

fn parse_structure(s: &str) -> Result<StructureType, String> {
    StructureType::parse(s).ok_or_else(|| format!("unknown structure type '{}'", s))
}

// --- COMMANDS ---

fn report_written(state: &AppState, view: &View, stem: &str) -> Result<(), CliError> {
    for path in state.export(view, stem)? {
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn run(state: &AppState, command: Command) -> Result<(), CliError> {
    let catalog = state.catalog;
    match command {
        Command::List { names: false } => print!("{}", ui::browse(catalog.iter())),
        Command::List { names: true } => {
            for (name, key) in catalog.name_options() {
                println!("{:<28} {}", name, key);
            }
        }
        Command::Show { material } => {
            print!("{}", ui::material_details(catalog.resolve(&material)?));
        }
        Command::Compare { property, materials } => {
            let series = state.compare(property, &materials)?;
            print!("{}", ui::bar_summary(&series));
            let view = View::Ready(Chart::Bar(property_bar(&series)));
            report_written(state, &view, &format!("compare_{}", property.name()))?;
        }
        Command::Radar { materials } => {
            let series = state.radar(&materials)?;
            print!("{}", ui::radar_summary(&series));
            let view = View::Ready(Chart::Radar(radar_chart(&series)));
            report_written(state, &view, "radar")?;
        }
        Command::Crystal { material } => {
            let m = catalog.resolve(&material)?;
            if let Some(cs) = &m.crystal_structure {
                print!("{}", ui::site_table(cs));
            }
            let view = crystal_scene(m, &state.config.style);
            report_written(state, &view, &format!("crystal_{}", file_stem(m.key)))?;
        }
        Command::Composition { material } => {
            let m = catalog.resolve(&material)?;
            let view = composition_pie(m);
            report_written(state, &view, &format!("composition_{}", file_stem(m.key)))?;
        }
        Command::Search { class, min_yield, max_density, structure } => {
            let criteria = SearchCriteria { class, min_yield, max_density, structure };
            let hits = search(catalog, &criteria);
            print!("{}", ui::search_results(&criteria, &hits));
        }
        Command::Audit => print!("{}", ui::audit_report(&audit(catalog))),
        Command::ExportJson => {
            let dir = state.config.output_dir();
            std::fs::create_dir_all(&dir)?;
            let path = dir.join("materials.json");
            std::fs::write(&path, to_json(catalog)?)?;
            println!("Saved {}", path.display());
        }
        Command::Config { save } => {
            println!("# {}", Config::get_path().display());
            println!("{}", serde_json::to_string_pretty(&state.config)?);
            if save {
                log::info!("{}", state.config.save());
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut state = AppState::new();
    state.load_config();
    // Ignored when a logger is already set
    let _ = logger::init(state.config.log_level_filter());
    log::debug!("{}", state.config_status);

    state.write_json = cli.json;
    if let Some(format) = cli.format {
        state.config.export_format = format;
    }
    if cli.out.is_some() {
        state.config.output_dir = cli.out;
    }

    match run(&state, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_command() {
        let cli = Cli::try_parse_from([
            "matview", "compare", "density", "aisi_1020", "al_6061", "--format", "png", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.format, Some(ExportFormat::Png));
        match cli.command {
            Command::Compare { property, materials } => {
                assert_eq!(property, PropertyKey::Density);
                assert_eq!(materials, vec!["aisi_1020", "al_6061"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_search_options() {
        let cli = Cli::try_parse_from([
            "matview", "search", "--class", "metal", "--min-yield", "200", "--structure", "fcc",
        ])
        .unwrap();
        let Command::Search { class, min_yield, max_density, structure } = cli.command else {
            panic!("expected search");
        };
        assert_eq!(class, Some(MaterialClass::Metal));
        assert_eq!(min_yield, 200.0);
        assert_eq!(max_density, 10.0);
        assert_eq!(structure, Some(StructureType::Fcc));

        assert!(Cli::try_parse_from(["matview", "search", "--min-yield", "lots"]).is_err());
        assert!(Cli::try_parse_from(["matview", "search", "--class", "wood"]).is_err());
        assert!(Cli::try_parse_from(["matview", "compare", "colour"]).is_err());
    }

    #[test]
    fn test_unknown_material_fails() {
        let state = AppState::new();
        let err = run(&state, Command::Show { material: "mithril".into() }).unwrap_err();
        assert!(matches!(err, CliError::Catalog(CatalogError::UnknownKey(_))));
    }
}
