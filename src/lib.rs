// src/lib.rs
pub mod config;
pub mod data;
pub mod model;
pub mod physics;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;
