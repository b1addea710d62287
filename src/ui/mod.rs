// src/ui/mod.rs
//
// Plain-text views printed by the CLI.

pub mod audit;
pub mod compare;
pub mod details;
pub mod listing;

pub use audit::audit_report;
pub use compare::{bar_summary, radar_summary};
pub use details::{material_details, site_table};
pub use listing::{browse, search_results};
