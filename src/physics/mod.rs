// src/physics/mod.rs
pub mod audit;
pub mod comparison;
pub mod lattice;
pub mod search;
