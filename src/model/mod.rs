//src/model/mod.rs
pub mod crystal;
pub mod elements;
pub mod material;
pub mod properties;

// Re-exports for cleaner imports
pub use crystal::{AtomSite, CrystalStructure, CrystalSystem, LatticeParameters, SiteRole, StructureType};
pub use elements::get_atom_properties;
pub use material::{ManufacturingNotes, Material, MaterialClass, ValidationIssue};
pub use properties::{Properties, PropertyKey};
