// src/data/nonferrous.rs
//
// Aluminum, titanium and copper alloys.

use crate::model::{CrystalStructure, ManufacturingNotes, Material, MaterialClass, Properties};

pub(super) fn al_6061() -> Material {
    Material {
        key: "al_6061",
        name: "6061 Aluminum",
        class: MaterialClass::Metal,
        category: "aluminum",
        composition: &[("Al", 0.98), ("Mg", 0.01), ("Si", 0.006), ("Cr", 0.0025), ("Cu", 0.0025)],
        properties: Properties {
            density: 2.7,
            youngs_modulus: 68.9,
            yield_strength: 276.0,
            tensile_strength: 310.0,
            elongation: 17.0,
            hardness: 95.0,
            thermal_conductivity: 167.0,
            melting_point: 660.0,
            electrical_resistivity: 3.7e-8,
            fatigue_strength: 96.0,
            cost_index: 3.2,
            reduction_area: Some(45.0),
            specific_heat: Some(896.0),
            thermal_expansion: Some(23.6),
            poissons_ratio: Some(0.33),
            fracture_toughness: Some(29.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Al", 4.05, "Face-Centered Cubic: Close-packed structure with high ductility")),
        applications: &[
            "Aircraft fittings",
            "Bicycle frames",
            "Marine hardware",
            "Automotive parts",
            "Structural components",
        ],
        characteristics: &[
            "Good strength-to-weight ratio",
            "Excellent corrosion resistance",
            "Good weldability and machinability",
            "Heat treatable via precipitation hardening",
        ],
        educational_insights: &[
            "FCC structure enables excellent formability",
            "Close-packed planes allow easy dislocation movement",
            "Alloying elements form strengthening precipitates",
            "Ideal for lightweight structural applications",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "MatWeb",
            "Aluminum Association",
        ],
    }
}

pub(super) fn al_7075() -> Material {
    Material {
        key: "al_7075",
        name: "7075 Aluminum",
        class: MaterialClass::Metal,
        category: "aluminum",
        composition: &[("Al", 0.9), ("Zn", 0.06), ("Mg", 0.025), ("Cu", 0.016), ("Cr", 0.002)],
        properties: Properties {
            density: 2.81,
            youngs_modulus: 71.7,
            yield_strength: 503.0,
            tensile_strength: 572.0,
            elongation: 11.0,
            hardness: 150.0,
            thermal_conductivity: 130.0,
            melting_point: 660.0,
            electrical_resistivity: 5.2e-8,
            fatigue_strength: 159.0,
            cost_index: 4.8,
            reduction_area: Some(30.0),
            specific_heat: Some(960.0),
            thermal_expansion: Some(23.4),
            poissons_ratio: Some(0.33),
            fracture_toughness: Some(28.0),
        },
        crystal_structure: None,
        applications: &[
            "Aircraft structures",
            "High-performance bicycle components",
            "Rock climbing equipment",
            "Racing components",
            "Military applications",
        ],
        characteristics: &[
            "Very high strength for aluminum",
            "Good fatigue strength",
            "Poor corrosion resistance",
            "Excellent strength-to-weight ratio",
        ],
        educational_insights: &[
            "Aerospace standard aluminum alloy - represents high-strength aluminum",
            "Demonstrates tradeoff between strength and corrosion resistance",
            "Shows Zn-Mg-Cu precipitation hardening system",
            "Important for understanding material selection in aerospace",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "MatWeb",
            "Aerospace Standards",
        ],
    }
}

pub(super) fn ti_6al_4v() -> Material {
    Material {
        key: "ti_6al_4v",
        name: "Ti-6Al-4V Titanium",
        class: MaterialClass::Metal,
        category: "titanium",
        composition: &[("Ti", 0.9), ("Al", 0.06), ("V", 0.04)],
        properties: Properties {
            density: 4.43,
            youngs_modulus: 113.8,
            yield_strength: 828.0,
            tensile_strength: 895.0,
            elongation: 10.0,
            hardness: 334.0,
            thermal_conductivity: 6.7,
            melting_point: 1660.0,
            electrical_resistivity: 1.7e-6,
            fatigue_strength: 620.0,
            cost_index: 18.5,
            reduction_area: Some(20.0),
            specific_heat: Some(526.0),
            thermal_expansion: Some(8.6),
            poissons_ratio: Some(0.34),
            fracture_toughness: Some(75.0),
        },
        crystal_structure: Some(CrystalStructure::hcp("Ti", 2.95, 4.68, "Hexagonal Close-Packed: ABAB stacking sequence")),
        applications: &[
            "Aerospace components",
            "Medical implants and prosthetics",
            "High-performance automotive",
            "Marine applications",
            "Chemical processing",
        ],
        characteristics: &[
            "Excellent strength-to-weight ratio",
            "Outstanding corrosion resistance",
            "Biocompatible",
            "High temperature capability",
        ],
        educational_insights: &[
            "HCP structure has limited slip systems at room temperature",
            "Transforms to BCC above 882°C (beta phase)",
            "Anisotropic properties due to hexagonal symmetry",
            "Alloying elements stabilize alpha or beta phases",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "ASTM B265",
            "MatWeb",
        ],
    }
}

pub(super) fn copper_etp() -> Material {
    Material {
        key: "copper_etp",
        name: "Copper C11000",
        class: MaterialClass::Metal,
        category: "copper",
        composition: &[("Cu", 0.999)],
        properties: Properties {
            density: 8.96,
            youngs_modulus: 110.0,
            yield_strength: 69.0,
            tensile_strength: 210.0,
            elongation: 45.0,
            hardness: 89.0,
            thermal_conductivity: 391.0,
            melting_point: 1085.0,
            electrical_resistivity: 1.72e-8,
            fatigue_strength: 62.0,
            cost_index: 8.5,
            reduction_area: Some(70.0),
            specific_heat: Some(385.0),
            thermal_expansion: Some(16.5),
            poissons_ratio: Some(0.34),
            fracture_toughness: Some(95.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Cu", 3.61, "Face-Centered Cubic: Atoms at cube corners and face centers")),
        applications: &[
            "Electrical wiring and conductors",
            "Heat exchangers and radiators",
            "Plumbing systems",
            "Electronics and circuit boards",
            "Roofing and architectural",
        ],
        characteristics: &[
            "Excellent electrical conductivity",
            "Superior thermal conductivity",
            "Good corrosion resistance",
            "Antimicrobial properties",
        ],
        educational_insights: &[
            "Standard for electrical conductivity - IACS 100%",
            "FCC structure enables high ductility and conductivity",
            "Demonstrates work hardening behavior and annealing",
            "Important for understanding thermal and electrical applications",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "ASTM B152",
            "MatWeb",
        ],
    }
}

pub(super) fn brass_360() -> Material {
    Material {
        key: "brass_360",
        name: "Brass C36000",
        class: MaterialClass::Metal,
        category: "copper",
        composition: &[("Cu", 0.61), ("Zn", 0.035), ("Pb", 0.003)],
        properties: Properties {
            density: 8.5,
            youngs_modulus: 97.0,
            yield_strength: 124.0,
            tensile_strength: 338.0,
            elongation: 53.0,
            hardness: 78.0,
            thermal_conductivity: 115.0,
            melting_point: 930.0,
            electrical_resistivity: 6.2e-8,
            fatigue_strength: 125.0,
            cost_index: 4.5,
            reduction_area: None,
            specific_heat: None,
            thermal_expansion: None,
            poissons_ratio: None,
            fracture_toughness: None,
        },
        crystal_structure: None,
        applications: &[
            "Fittings and valves",
            "Decorative hardware",
            "Gears and bearings",
            "Electrical connectors",
            "Musical instruments",
        ],
        characteristics: &[
            "Excellent machinability",
            "Good corrosion resistance",
            "Attractive gold-like appearance",
            "Good strength and ductility",
        ],
        educational_insights: &[
            "Free-machining brass with lead addition",
            "Demonstrates alpha-beta brass microstructure",
            "Shows how alloying improves manufacturability",
            "Important for understanding non-ferrous alloys",
        ],
        manufacturing_notes: Some(ManufacturingNotes {
            machinability: "Excellent",
            weldability: "Fair",
            formability: "Good",
            heat_treatment: Some("Stress relief only"),
            castability: None,
        }),
        heat_treatment: &[],
        sources: &[],
    }
}
