// src/data/steels.rs
//
// Carbon, alloy and stainless steels plus gray cast iron.

use crate::model::{CrystalStructure, ManufacturingNotes, Material, MaterialClass, Properties};

pub(super) fn aisi_1020() -> Material {
    Material {
        key: "aisi_1020",
        name: "AISI 1020 Steel",
        class: MaterialClass::Metal,
        category: "carbon_steel",
        composition: &[("Fe", 0.99), ("C", 0.002), ("Mn", 0.003), ("P", 0.0004), ("S", 0.0005)],
        properties: Properties {
            density: 7.87,
            youngs_modulus: 200.0,
            yield_strength: 350.0,
            tensile_strength: 420.0,
            elongation: 25.0,
            hardness: 121.0,
            thermal_conductivity: 51.9,
            melting_point: 1520.0,
            electrical_resistivity: 1.59e-7,
            fatigue_strength: 210.0,
            cost_index: 1.0,
            reduction_area: Some(50.0),
            specific_heat: Some(486.0),
            thermal_expansion: Some(11.7),
            poissons_ratio: Some(0.29),
            fracture_toughness: Some(50.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("Fe", 2.866, "Body-Centered Cubic: Atoms at cube corners and body center")),
        applications: &[
            "Structural frames and supports",
            "Automotive body panels",
            "Machine frames and bases",
            "Pipes and tubing",
            "Bolts and fasteners",
        ],
        characteristics: &[
            "Excellent weldability and formability",
            "Good machinability in cold-drawn condition",
            "Can be case hardened via carburizing",
            "Most common structural steel",
        ],
        educational_insights: &[
            "BCC structure has 8 nearest neighbors",
            "Less dense packing than FCC (68% vs 74%)",
            "Exhibits ductile-to-brittle transition",
            "Foundation for understanding ferritic steels",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 1",
            "MatWeb",
            "CES EduPack 2023",
        ],
    }
}

pub(super) fn aisi_1040() -> Material {
    Material {
        key: "aisi_1040",
        name: "AISI 1040 Steel",
        class: MaterialClass::Metal,
        category: "carbon_steel",
        composition: &[("Fe", 0.98), ("C", 0.004), ("Mn", 0.006), ("P", 0.0004), ("S", 0.0005)],
        properties: Properties {
            density: 7.85,
            youngs_modulus: 200.0,
            yield_strength: 415.0,
            tensile_strength: 620.0,
            elongation: 25.0,
            hardness: 149.0,
            thermal_conductivity: 51.2,
            melting_point: 1520.0,
            electrical_resistivity: 1.72e-7,
            fatigue_strength: 240.0,
            cost_index: 1.1,
            reduction_area: Some(50.0),
            specific_heat: Some(486.0),
            thermal_expansion: Some(11.3),
            poissons_ratio: Some(0.29),
            fracture_toughness: Some(55.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("Fe", 2.866, "Body-Centered Cubic: Atoms at cube corners and body center")),
        applications: &[
            "Shafts and axles",
            "Gears and sprockets",
            "Machine parts",
            "High-strength bolts",
            "Automotive components",
        ],
        characteristics: &[
            "Good balance of strength and ductility",
            "Responds well to heat treatment",
            "Good wear resistance when hardened",
            "Versatile for many applications",
        ],
        educational_insights: &[
            "Classic example of medium-carbon steel for heat-treated components",
            "Shows pearlite-ferrite microstructure with more pearlite than 1020",
            "Demonstrates quench and temper heat treatment principles",
            "Ideal for understanding machine component design",
        ],
        manufacturing_notes: None,
        heat_treatment: &[
            ("normalizing", "870-920°C, air cool"),
            ("quench_temper", "830-850°C oil quench, 540-650°C temper"),
        ],
        sources: &[
            "ASM Handbook Vol. 1",
            "MatWeb",
        ],
    }
}

pub(super) fn aisi_4140() -> Material {
    Material {
        key: "aisi_4140",
        name: "AISI 4140 Steel",
        class: MaterialClass::Metal,
        category: "alloy_steel",
        composition: &[("Fe", 0.96), ("C", 0.004), ("Cr", 0.01), ("Mo", 0.002), ("Mn", 0.008)],
        properties: Properties {
            density: 7.85,
            youngs_modulus: 200.0,
            yield_strength: 655.0,
            tensile_strength: 1020.0,
            elongation: 17.0,
            hardness: 302.0,
            thermal_conductivity: 42.7,
            melting_point: 1427.0,
            electrical_resistivity: 2.2e-7,
            fatigue_strength: 480.0,
            cost_index: 2.2,
            reduction_area: Some(58.0),
            specific_heat: Some(460.0),
            thermal_expansion: Some(12.2),
            poissons_ratio: Some(0.29),
            fracture_toughness: Some(75.0),
        },
        crystal_structure: None,
        applications: &[
            "High-strength shafts and axles",
            "Gears and sprockets",
            "Bolts and fasteners",
            "Machine tool components",
            "Aircraft landing gear",
        ],
        characteristics: &[
            "Excellent strength-toughness combination",
            "Deep hardenability due to Cr and Mo",
            "Good fatigue resistance",
            "Oil-hardenable",
        ],
        educational_insights: &[
            "Industry standard for high-strength components - the 'workhorse' alloy steel",
            "Demonstrates effects of Cr and Mo on hardenability and temper resistance",
            "Shows tempered martensite microstructure after heat treatment",
            "Important for understanding alloy design principles",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 1",
            "MatWeb",
            "AISI Standards",
        ],
    }
}

pub(super) fn high_carbon_steel() -> Material {
    Material {
        key: "high_carbon_steel",
        name: "High Carbon Steel (AISI 1095)",
        class: MaterialClass::Metal,
        category: "steel",
        composition: &[("Fe", 0.98), ("C", 0.0095), ("Mn", 0.003)],
        properties: Properties {
            density: 7.85,
            youngs_modulus: 200.0,
            yield_strength: 550.0,
            tensile_strength: 980.0,
            elongation: 9.0,
            hardness: 248.0,
            thermal_conductivity: 49.8,
            melting_point: 1520.0,
            electrical_resistivity: 1.7e-7,
            fatigue_strength: 350.0,
            cost_index: 1.2,
            reduction_area: None,
            specific_heat: None,
            thermal_expansion: None,
            poissons_ratio: None,
            fracture_toughness: None,
        },
        crystal_structure: None,
        applications: &[
            "Cutting tools and blades",
            "Springs and high-stress components",
            "Wear-resistant parts",
            "Knives and tools",
            "Ball bearings",
        ],
        characteristics: &[
            "Very high strength and hardness",
            "Poor ductility and toughness",
            "Excellent wear resistance",
            "Can be heat treated to high hardness",
        ],
        educational_insights: &[
            "Demonstrates strength-ductility tradeoff clearly",
            "Shows pearlite-cementite microstructure",
            "Foundation for understanding tool steels",
            "Important for wear and cutting applications",
        ],
        manufacturing_notes: Some(ManufacturingNotes {
            machinability: "Fair (annealed state)",
            weldability: "Poor (cracking risk)",
            formability: "Poor",
            heat_treatment: Some("Full hardening"),
            castability: None,
        }),
        heat_treatment: &[],
        sources: &[],
    }
}

pub(super) fn ss_304() -> Material {
    Material {
        key: "ss_304",
        name: "304 Stainless Steel",
        class: MaterialClass::Metal,
        category: "stainless_steel",
        composition: &[("Fe", 0.68), ("Cr", 0.18), ("Ni", 0.08), ("C", 0.0008), ("Mn", 0.02)],
        properties: Properties {
            density: 8.0,
            youngs_modulus: 193.0,
            yield_strength: 215.0,
            tensile_strength: 505.0,
            elongation: 70.0,
            hardness: 170.0,
            thermal_conductivity: 16.2,
            melting_point: 1400.0,
            electrical_resistivity: 7.2e-7,
            fatigue_strength: 240.0,
            cost_index: 3.8,
            reduction_area: Some(70.0),
            specific_heat: Some(500.0),
            thermal_expansion: Some(17.2),
            poissons_ratio: Some(0.29),
            fracture_toughness: Some(100.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Fe", 3.6, "Face-Centered Cubic: Atoms at cube corners and face centers")),
        applications: &[
            "Food processing equipment",
            "Chemical containers",
            "Kitchen equipment and sinks",
            "Architectural panels",
            "Medical instruments",
        ],
        characteristics: &[
            "Excellent corrosion resistance",
            "Non-magnetic when annealed",
            "Good formability and weldability",
            "Hygienic and easy to clean",
        ],
        educational_insights: &[
            "FCC structure has 12 nearest neighbors",
            "Highest packing density (74%) for monatomic crystals",
            "Multiple slip systems enable excellent ductility",
            "Austenitic structure stabilized by nickel",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 1",
            "ASTM A240",
            "MatWeb",
        ],
    }
}

pub(super) fn stainless_316() -> Material {
    Material {
        key: "stainless_316",
        name: "316 Stainless Steel",
        class: MaterialClass::Metal,
        category: "stainless_steel",
        composition: &[("Fe", 0.665), ("Cr", 0.17), ("Ni", 0.12), ("Mo", 0.025), ("C", 0.0008)],
        properties: Properties {
            density: 8.0,
            youngs_modulus: 193.0,
            yield_strength: 240.0,
            tensile_strength: 550.0,
            elongation: 50.0,
            hardness: 217.0,
            thermal_conductivity: 16.3,
            melting_point: 1400.0,
            electrical_resistivity: 7.4e-7,
            fatigue_strength: 260.0,
            cost_index: 4.5,
            reduction_area: None,
            specific_heat: None,
            thermal_expansion: None,
            poissons_ratio: None,
            fracture_toughness: None,
        },
        crystal_structure: None,
        applications: &[
            "Marine components and fittings",
            "Chemical processing equipment",
            "Pharmaceutical equipment",
            "Medical implants",
            "Coastal architecture",
        ],
        characteristics: &[
            "Superior corrosion resistance (especially to chlorides)",
            "Marine grade stainless",
            "Good high-temperature strength",
            "Excellent pitting resistance",
        ],
        educational_insights: &[
            "Molybdenum addition improves chloride resistance",
            "Demonstrates alloying effects on corrosion resistance",
            "Shows how small composition changes create property differences",
            "Important for chemical and marine applications",
        ],
        manufacturing_notes: Some(ManufacturingNotes {
            machinability: "Poor",
            weldability: "Excellent",
            formability: "Excellent",
            heat_treatment: Some("Solution annealing"),
            castability: None,
        }),
        heat_treatment: &[],
        sources: &[],
    }
}

pub(super) fn gray_cast_iron() -> Material {
    Material {
        key: "gray_cast_iron",
        name: "Gray Cast Iron",
        class: MaterialClass::Metal,
        category: "cast_iron",
        composition: &[("Fe", 0.96), ("C", 0.035), ("Si", 0.018), ("Mn", 0.006)],
        properties: Properties {
            density: 7.2,
            youngs_modulus: 110.0,
            yield_strength: 275.0,
            tensile_strength: 275.0,
            elongation: 0.6,
            hardness: 210.0,
            thermal_conductivity: 46.0,
            melting_point: 1200.0,
            electrical_resistivity: 9.5e-7,
            fatigue_strength: 124.0,
            cost_index: 1.2,
            reduction_area: Some(0.0),
            specific_heat: Some(420.0),
            thermal_expansion: Some(12.0),
            poissons_ratio: Some(0.26),
            fracture_toughness: Some(20.0),
        },
        crystal_structure: None,
        applications: &[
            "Engine blocks and cylinders",
            "Machine tool bases",
            "Brake rotors and drums",
            "Pump housings",
            "Manifolds and pipes",
        ],
        characteristics: &[
            "Excellent damping capacity",
            "Good compressive strength",
            "Brittle in tension",
            "Good wear resistance",
            "Low cost casting",
        ],
        educational_insights: &[
            "Foundation material for casting applications",
            "Graphite flakes provide damping and machinability",
            "Demonstrates brittle fracture behavior in tension",
            "Important for understanding cast materials and their limitations",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 1",
            "ASTM A48",
            "MatWeb",
        ],
    }
}
