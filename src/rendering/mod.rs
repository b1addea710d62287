pub mod charts;
pub mod export;
pub mod painter;
pub mod scene;

pub use charts::{composition_pie, property_bar, radar_chart, Chart, View};
pub use export::{export_json, export_view, file_stem, RenderError};
pub use scene::crystal_scene;
