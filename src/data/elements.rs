// src/data/elements.rs
//
// Pure metallic elements.

use crate::model::{CrystalStructure, Material, MaterialClass, Properties};

pub(super) fn lithium() -> Material {
    Material {
        key: "lithium",
        name: "Lithium",
        class: MaterialClass::Metal,
        category: "alkali_metal",
        composition: &[("Li", 1.0)],
        properties: Properties {
            density: 0.534,
            youngs_modulus: 4.9,
            yield_strength: 0.17,
            tensile_strength: 1.5,
            elongation: 50.0,
            hardness: 0.6,
            thermal_conductivity: 84.7,
            melting_point: 180.5,
            electrical_resistivity: 9.4e-8,
            fatigue_strength: 0.0,
            cost_index: 65.0,
            reduction_area: Some(0.0),
            specific_heat: Some(3582.0),
            thermal_expansion: Some(46.0),
            poissons_ratio: Some(0.36),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("Li", 3.51, "Body-Centered Cubic: Lightest metal with BCC structure")),
        applications: &[
            "Batteries and energy storage",
            "Alloying agent",
            "Nuclear fusion applications",
            "Psychiatric medications",
            "Heat transfer applications",
        ],
        characteristics: &[
            "Lightest of all metals",
            "Highly reactive with water and air",
            "Soft and silvery-white",
            "Low melting point",
        ],
        educational_insights: &[
            "BCC structure despite being very light",
            "Extremely low density affects mechanical properties",
            "High electrochemical potential makes it ideal for batteries",
            "Requires special handling due to reactivity",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "CRC Handbook",
            "ASM Handbook Vol. 2",
            "NIST Database",
        ],
    }
}

pub(super) fn sodium() -> Material {
    Material {
        key: "sodium",
        name: "Sodium",
        class: MaterialClass::Metal,
        category: "alkali_metal",
        composition: &[("Na", 1.0)],
        properties: Properties {
            density: 0.968,
            youngs_modulus: 10.0,
            yield_strength: 0.06,
            tensile_strength: 0.9,
            elongation: 80.0,
            hardness: 0.7,
            thermal_conductivity: 142.0,
            melting_point: 97.8,
            electrical_resistivity: 4.2e-8,
            fatigue_strength: 0.0,
            cost_index: 2.5,
            reduction_area: Some(0.0),
            specific_heat: Some(1230.0),
            thermal_expansion: Some(71.0),
            poissons_ratio: Some(0.34),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("Na", 4.29, "Body-Centered Cubic: Soft alkali metal with BCC structure")),
        applications: &[
            "Sodium-cooled nuclear reactors",
            "Street lighting",
            "Chemical synthesis",
            "Heat transfer medium",
            "Organic chemistry reagent",
        ],
        characteristics: &[
            "Very soft and easily cut",
            "Highly reactive with water",
            "Good electrical and thermal conductivity",
            "Low melting point",
        ],
        educational_insights: &[
            "BCC structure typical for alkali metals",
            "Extremely ductile due to metallic bonding",
            "Large atomic radius affects lattice parameters",
            "Important for understanding metallic bonding",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "CRC Handbook",
            "ASM Handbook Vol. 2",
            "NIST Database",
        ],
    }
}

pub(super) fn potassium() -> Material {
    Material {
        key: "potassium",
        name: "Potassium",
        class: MaterialClass::Metal,
        category: "alkali_metal",
        composition: &[("K", 1.0)],
        properties: Properties {
            density: 0.862,
            youngs_modulus: 3.1,
            yield_strength: 0.03,
            tensile_strength: 0.8,
            elongation: 100.0,
            hardness: 0.4,
            thermal_conductivity: 102.4,
            melting_point: 63.5,
            electrical_resistivity: 6.1e-8,
            fatigue_strength: 0.0,
            cost_index: 15.0,
            reduction_area: Some(0.0),
            specific_heat: Some(757.0),
            thermal_expansion: Some(83.3),
            poissons_ratio: Some(0.33),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("K", 5.23, "Body-Centered Cubic: Very soft and reactive alkali metal")),
        applications: &[
            "Fertilizers",
            "Heat transfer alloys",
            "Chemical reagents",
            "Biological applications",
            "Laboratory uses",
        ],
        characteristics: &[
            "Extremely soft and ductile",
            "Highly reactive with air and water",
            "Low density",
            "Very low melting point",
        ],
        educational_insights: &[
            "BCC structure with large lattice parameter",
            "Demonstrates trend in alkali metal properties",
            "Very weak metallic bonding",
            "Important for understanding periodic trends",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "CRC Handbook",
            "ASM Handbook Vol. 2",
            "NIST Database",
        ],
    }
}

pub(super) fn beryllium() -> Material {
    Material {
        key: "beryllium",
        name: "Beryllium",
        class: MaterialClass::Metal,
        category: "alkaline_earth",
        composition: &[("Be", 1.0)],
        properties: Properties {
            density: 1.85,
            youngs_modulus: 287.0,
            yield_strength: 240.0,
            tensile_strength: 370.0,
            elongation: 3.0,
            hardness: 150.0,
            thermal_conductivity: 190.0,
            melting_point: 1287.0,
            electrical_resistivity: 3.6e-8,
            fatigue_strength: 140.0,
            cost_index: 850.0,
            reduction_area: Some(0.0),
            specific_heat: Some(1820.0),
            thermal_expansion: Some(11.3),
            poissons_ratio: Some(0.03),
            fracture_toughness: Some(4.0),
        },
        crystal_structure: Some(CrystalStructure::hcp("Be", 2.29, 3.58, "Hexagonal Close-Packed: Lightweight metal with high stiffness")),
        applications: &[
            "Aerospace structures",
            "Nuclear reactors",
            "X-ray windows",
            "Precision instruments",
            "Military applications",
        ],
        characteristics: &[
            "Very high stiffness-to-weight ratio",
            "Good thermal conductivity",
            "Toxic in powder form",
            "Brittle at room temperature",
        ],
        educational_insights: &[
            "HCP structure with ideal c/a ratio",
            "Exceptionally high Young's modulus for light metal",
            "Limited slip systems cause brittleness",
            "Important for understanding stiffness-density relationships",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn magnesium() -> Material {
    Material {
        key: "magnesium",
        name: "Magnesium",
        class: MaterialClass::Metal,
        category: "alkaline_earth",
        composition: &[("Mg", 1.0)],
        properties: Properties {
            density: 1.74,
            youngs_modulus: 45.0,
            yield_strength: 70.0,
            tensile_strength: 165.0,
            elongation: 12.0,
            hardness: 44.0,
            thermal_conductivity: 156.0,
            melting_point: 650.0,
            electrical_resistivity: 4.2e-8,
            fatigue_strength: 50.0,
            cost_index: 4.2,
            reduction_area: Some(0.0),
            specific_heat: Some(1024.0),
            thermal_expansion: Some(24.8),
            poissons_ratio: Some(0.29),
            fracture_toughness: Some(15.0),
        },
        crystal_structure: Some(CrystalStructure::hcp("Mg", 3.21, 5.21, "Hexagonal Close-Packed: Lightest structural metal")),
        applications: &[
            "Automotive wheels",
            "Aerospace components",
            "Laptop cases",
            "Power tools",
            "Biomedical implants",
        ],
        characteristics: &[
            "Very lightweight",
            "Good machinability",
            "Flammable in powder form",
            "Good damping capacity",
        ],
        educational_insights: &[
            "HCP structure affects deformation behavior",
            "Limited room temperature ductility",
            "Important for lightweight structural design",
            "Demonstrates hexagonal crystal anisotropy",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn calcium() -> Material {
    Material {
        key: "calcium",
        name: "Calcium",
        class: MaterialClass::Metal,
        category: "alkaline_earth",
        composition: &[("Ca", 1.0)],
        properties: Properties {
            density: 1.55,
            youngs_modulus: 20.0,
            yield_strength: 40.0,
            tensile_strength: 110.0,
            elongation: 50.0,
            hardness: 17.0,
            thermal_conductivity: 200.0,
            melting_point: 842.0,
            electrical_resistivity: 3.4e-8,
            fatigue_strength: 0.0,
            cost_index: 12.0,
            reduction_area: Some(0.0),
            specific_heat: Some(647.0),
            thermal_expansion: Some(22.3),
            poissons_ratio: Some(0.31),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Ca", 5.59, "Face-Centered Cubic: Relatively soft alkaline earth metal")),
        applications: &[
            "Steel deoxidizer",
            "Alloying agent",
            "Chemical production",
            "Reducing agent",
            "Nutritional supplements",
        ],
        characteristics: &[
            "Soft and silvery-white",
            "Reactive with water",
            "Good electrical conductivity",
            "Ductile and malleable",
        ],
        educational_insights: &[
            "FCC structure unlike other alkaline earth metals",
            "Large atomic radius affects properties",
            "Demonstrates metallic bonding trends",
            "Important for understanding crystal structure variations",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "CRC Handbook",
            "ASM Handbook Vol. 2",
            "NIST Database",
        ],
    }
}

pub(super) fn titanium() -> Material {
    Material {
        key: "titanium",
        name: "Titanium",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Ti", 1.0)],
        properties: Properties {
            density: 4.51,
            youngs_modulus: 116.0,
            yield_strength: 140.0,
            tensile_strength: 235.0,
            elongation: 54.0,
            hardness: 70.0,
            thermal_conductivity: 21.9,
            melting_point: 1668.0,
            electrical_resistivity: 4.2e-7,
            fatigue_strength: 85.0,
            cost_index: 25.0,
            reduction_area: Some(0.0),
            specific_heat: Some(523.0),
            thermal_expansion: Some(8.6),
            poissons_ratio: Some(0.32),
            fracture_toughness: Some(70.0),
        },
        crystal_structure: Some(CrystalStructure::hcp("Ti", 2.95, 4.68, "Hexagonal Close-Packed: Alpha phase at room temperature")),
        applications: &[
            "Aerospace components",
            "Chemical processing",
            "Medical implants",
            "Marine applications",
            "Sports equipment",
        ],
        characteristics: &[
            "Excellent corrosion resistance",
            "High strength-to-weight ratio",
            "Biocompatible",
            "Good high-temperature properties",
        ],
        educational_insights: &[
            "HCP structure transforms to BCC at 882°C",
            "Allotropic transformation important for heat treatment",
            "Excellent corrosion resistance due to oxide layer",
            "Important for understanding phase transformations",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn chromium() -> Material {
    Material {
        key: "chromium",
        name: "Chromium",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Cr", 1.0)],
        properties: Properties {
            density: 7.19,
            youngs_modulus: 279.0,
            yield_strength: 290.0,
            tensile_strength: 415.0,
            elongation: 0.0,
            hardness: 112.0,
            thermal_conductivity: 93.9,
            melting_point: 1907.0,
            electrical_resistivity: 1.3e-7,
            fatigue_strength: 0.0,
            cost_index: 8.5,
            reduction_area: Some(0.0),
            specific_heat: Some(449.0),
            thermal_expansion: Some(4.9),
            poissons_ratio: Some(0.21),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("Cr", 2.88, "Body-Centered Cubic: Hard, brittle transition metal")),
        applications: &[
            "Stainless steel production",
            "Chrome plating",
            "Alloying agent",
            "Refractory materials",
            "Pigments",
        ],
        characteristics: &[
            "Very hard and brittle",
            "Excellent corrosion resistance",
            "High melting point",
            "Good wear resistance",
        ],
        educational_insights: &[
            "BCC structure with high strength",
            "Brittle behavior at room temperature",
            "Important alloying element for corrosion resistance",
            "Demonstrates transition metal properties",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn manganese() -> Material {
    Material {
        key: "manganese",
        name: "Manganese",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Mn", 1.0)],
        properties: Properties {
            density: 7.21,
            youngs_modulus: 198.0,
            yield_strength: 150.0,
            tensile_strength: 230.0,
            elongation: 40.0,
            hardness: 210.0,
            thermal_conductivity: 7.8,
            melting_point: 1246.0,
            electrical_resistivity: 1.4e-6,
            fatigue_strength: 0.0,
            cost_index: 3.2,
            reduction_area: Some(0.0),
            specific_heat: Some(479.0),
            thermal_expansion: Some(21.7),
            poissons_ratio: Some(0.24),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("Mn", 8.91, "Body-Centered Cubic: Complex allotropic behavior")),
        applications: &[
            "Steel production",
            "Aluminum alloys",
            "Batteries",
            "Chemical industry",
            "Fertilizers",
        ],
        characteristics: &[
            "Brittle in pure form",
            "Essential steel alloying element",
            "Multiple allotropic forms",
            "Paramagnetic",
        ],
        educational_insights: &[
            "Complex allotropic transformations",
            "Important for steel strengthening mechanisms",
            "Demonstrates transition metal complexity",
            "Large unit cell affects properties",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn iron() -> Material {
    Material {
        key: "iron",
        name: "Iron",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Fe", 1.0)],
        properties: Properties {
            density: 7.87,
            youngs_modulus: 211.0,
            yield_strength: 50.0,
            tensile_strength: 200.0,
            elongation: 45.0,
            hardness: 50.0,
            thermal_conductivity: 80.2,
            melting_point: 1538.0,
            electrical_resistivity: 9.7e-8,
            fatigue_strength: 30.0,
            cost_index: 0.8,
            reduction_area: Some(0.0),
            specific_heat: Some(449.0),
            thermal_expansion: Some(11.8),
            poissons_ratio: Some(0.29),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("Fe", 2.87, "Body-Centered Cubic: Alpha iron at room temperature")),
        applications: &[
            "Structural steel",
            "Machinery and tools",
            "Automotive industry",
            "Construction",
            "Infrastructure",
        ],
        characteristics: &[
            "Ferromagnetic",
            "Relatively soft in pure form",
            "Reactive with oxygen",
            "Allotropic transformation",
        ],
        educational_insights: &[
            "BCC structure transforms to FCC at 912°C",
            "Foundation of steel metallurgy",
            "Demonstrates allotropic behavior",
            "Important for understanding phase diagrams",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 1",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn cobalt() -> Material {
    Material {
        key: "cobalt",
        name: "Cobalt",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Co", 1.0)],
        properties: Properties {
            density: 8.86,
            youngs_modulus: 209.0,
            yield_strength: 180.0,
            tensile_strength: 240.0,
            elongation: 5.0,
            hardness: 125.0,
            thermal_conductivity: 100.0,
            melting_point: 1495.0,
            electrical_resistivity: 6.2e-8,
            fatigue_strength: 0.0,
            cost_index: 35.0,
            reduction_area: Some(0.0),
            specific_heat: Some(421.0),
            thermal_expansion: Some(13.0),
            poissons_ratio: Some(0.31),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::hcp("Co", 2.51, 4.07, "Hexagonal Close-Packed: Ferromagnetic transition metal")),
        applications: &[
            "Superalloys",
            "Magnets",
            "Cutting tools",
            "Medical implants",
            "Pigments",
        ],
        characteristics: &[
            "Ferromagnetic",
            "Good high-temperature strength",
            "Wear resistant",
            "Corrosion resistant",
        ],
        educational_insights: &[
            "HCP structure with allotropic transformation",
            "Important for high-temperature alloys",
            "Demonstrates magnetic properties",
            "Key element in superalloy development",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn nickel() -> Material {
    Material {
        key: "nickel",
        name: "Nickel",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Ni", 1.0)],
        properties: Properties {
            density: 8.91,
            youngs_modulus: 200.0,
            yield_strength: 59.0,
            tensile_strength: 317.0,
            elongation: 30.0,
            hardness: 80.0,
            thermal_conductivity: 90.9,
            melting_point: 1455.0,
            electrical_resistivity: 6.9e-8,
            fatigue_strength: 0.0,
            cost_index: 18.0,
            reduction_area: Some(0.0),
            specific_heat: Some(444.0),
            thermal_expansion: Some(13.4),
            poissons_ratio: Some(0.31),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Ni", 3.52, "Face-Centered Cubic: Ductile ferromagnetic metal")),
        applications: &[
            "Stainless steel production",
            "Batteries",
            "Electroplating",
            "Catalysts",
            "Coinage",
        ],
        characteristics: &[
            "Good corrosion resistance",
            "Ferromagnetic",
            "Ductile and malleable",
            "Good high-temperature properties",
        ],
        educational_insights: &[
            "FCC structure enables good ductility",
            "Important alloying element for corrosion resistance",
            "Demonstrates ferromagnetic behavior",
            "Key for understanding austenitic stainless steels",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn copper() -> Material {
    Material {
        key: "copper",
        name: "Copper",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Cu", 1.0)],
        properties: Properties {
            density: 8.96,
            youngs_modulus: 110.0,
            yield_strength: 33.0,
            tensile_strength: 210.0,
            elongation: 45.0,
            hardness: 40.0,
            thermal_conductivity: 401.0,
            melting_point: 1085.0,
            electrical_resistivity: 1.7e-8,
            fatigue_strength: 0.0,
            cost_index: 7.5,
            reduction_area: Some(0.0),
            specific_heat: Some(385.0),
            thermal_expansion: Some(16.5),
            poissons_ratio: Some(0.34),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Cu", 3.61, "Face-Centered Cubic: Excellent electrical and thermal conductivity")),
        applications: &[
            "Electrical wiring",
            "Plumbing",
            "Electronics",
            "Heat exchangers",
            "Architectural applications",
        ],
        characteristics: &[
            "Excellent electrical conductivity",
            "High thermal conductivity",
            "Good corrosion resistance",
            "Antimicrobial properties",
        ],
        educational_insights: &[
            "FCC structure enables high ductility",
            "Excellent conductivity due to electron configuration",
            "Important for understanding metallic bonding",
            "Demonstrates work hardening behavior",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn zinc() -> Material {
    Material {
        key: "zinc",
        name: "Zinc",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Zn", 1.0)],
        properties: Properties {
            density: 7.14,
            youngs_modulus: 108.0,
            yield_strength: 35.0,
            tensile_strength: 120.0,
            elongation: 40.0,
            hardness: 30.0,
            thermal_conductivity: 116.0,
            melting_point: 420.0,
            electrical_resistivity: 5.9e-8,
            fatigue_strength: 0.0,
            cost_index: 2.8,
            reduction_area: Some(0.0),
            specific_heat: Some(388.0),
            thermal_expansion: Some(30.2),
            poissons_ratio: Some(0.25),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::hcp("Zn", 2.66, 4.95, "Hexagonal Close-Packed: Relatively low melting point metal")),
        applications: &[
            "Galvanizing steel",
            "Die casting alloys",
            "Batteries",
            "Brass production",
            "Corrosion protection",
        ],
        characteristics: &[
            "Good corrosion resistance",
            "Low melting point",
            "Brittle at room temperature",
            "Self-healing oxide layer",
        ],
        educational_insights: &[
            "HCP structure with non-ideal c/a ratio",
            "Demonstrates anisotropic properties",
            "Important for corrosion protection applications",
            "Shows brittle-to-ductile transition",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn molybdenum() -> Material {
    Material {
        key: "molybdenum",
        name: "Molybdenum",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Mo", 1.0)],
        properties: Properties {
            density: 10.22,
            youngs_modulus: 329.0,
            yield_strength: 415.0,
            tensile_strength: 565.0,
            elongation: 35.0,
            hardness: 153.0,
            thermal_conductivity: 138.0,
            melting_point: 2623.0,
            electrical_resistivity: 5.2e-8,
            fatigue_strength: 0.0,
            cost_index: 45.0,
            reduction_area: Some(0.0),
            specific_heat: Some(251.0),
            thermal_expansion: Some(4.8),
            poissons_ratio: Some(0.31),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("Mo", 3.15, "Body-Centered Cubic: High melting point refractory metal")),
        applications: &[
            "High-temperature furnaces",
            "Aerospace components",
            "Electrical contacts",
            "Alloying agent",
            "Nuclear applications",
        ],
        characteristics: &[
            "Very high melting point",
            "Good high-temperature strength",
            "Excellent thermal conductivity",
            "Corrosion resistant",
        ],
        educational_insights: &[
            "BCC structure maintains strength at high temperatures",
            "Important refractory metal",
            "Demonstrates high-temperature material behavior",
            "Key for understanding refractory metal properties",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn silver() -> Material {
    Material {
        key: "silver",
        name: "Silver",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Ag", 1.0)],
        properties: Properties {
            density: 10.49,
            youngs_modulus: 83.0,
            yield_strength: 55.0,
            tensile_strength: 125.0,
            elongation: 50.0,
            hardness: 25.0,
            thermal_conductivity: 429.0,
            melting_point: 961.0,
            electrical_resistivity: 1.6e-8,
            fatigue_strength: 0.0,
            cost_index: 850.0,
            reduction_area: Some(0.0),
            specific_heat: Some(235.0),
            thermal_expansion: Some(18.9),
            poissons_ratio: Some(0.37),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Ag", 4.09, "Face-Centered Cubic: Highest electrical and thermal conductivity")),
        applications: &[
            "Jewelry and silverware",
            "Electrical contacts",
            "Photography",
            "Medical applications",
            "Catalysts",
        ],
        characteristics: &[
            "Highest electrical conductivity",
            "Highest thermal conductivity",
            "Excellent reflectivity",
            "Antimicrobial properties",
        ],
        educational_insights: &[
            "FCC structure enables maximum conductivity",
            "Demonstrates optimal metallic bonding",
            "Important for understanding conductivity mechanisms",
            "Shows noble metal behavior",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn tungsten() -> Material {
    Material {
        key: "tungsten",
        name: "Tungsten",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("W", 1.0)],
        properties: Properties {
            density: 19.25,
            youngs_modulus: 411.0,
            yield_strength: 550.0,
            tensile_strength: 980.0,
            elongation: 2.0,
            hardness: 300.0,
            thermal_conductivity: 173.0,
            melting_point: 3422.0,
            electrical_resistivity: 5.3e-8,
            fatigue_strength: 0.0,
            cost_index: 35.0,
            reduction_area: Some(0.0),
            specific_heat: Some(132.0),
            thermal_expansion: Some(4.5),
            poissons_ratio: Some(0.28),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::bcc("W", 3.16, "Body-Centered Cubic: Highest melting point of all metals")),
        applications: &[
            "Incandescent light bulbs",
            "Electrical contacts",
            "Radiation shielding",
            "Cutting tools",
            "Aerospace components",
        ],
        characteristics: &[
            "Highest melting point",
            "Very high density",
            "Excellent high-temperature strength",
            "Brittle at low temperatures",
        ],
        educational_insights: &[
            "BCC structure maintains properties at extreme temperatures",
            "Demonstrates refractory metal behavior",
            "Important for understanding high-temperature materials",
            "Shows ductile-to-brittle transition",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn platinum() -> Material {
    Material {
        key: "platinum",
        name: "Platinum",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Pt", 1.0)],
        properties: Properties {
            density: 21.45,
            youngs_modulus: 168.0,
            yield_strength: 125.0,
            tensile_strength: 150.0,
            elongation: 40.0,
            hardness: 40.0,
            thermal_conductivity: 71.6,
            melting_point: 1768.0,
            electrical_resistivity: 1.1e-7,
            fatigue_strength: 0.0,
            cost_index: 28000.0,
            reduction_area: Some(0.0),
            specific_heat: Some(133.0),
            thermal_expansion: Some(8.8),
            poissons_ratio: Some(0.38),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Pt", 3.92, "Face-Centered Cubic: Dense, corrosion-resistant noble metal")),
        applications: &[
            "Catalytic converters",
            "Jewelry",
            "Laboratory equipment",
            "Electrical contacts",
            "Medical devices",
        ],
        characteristics: &[
            "Excellent corrosion resistance",
            "Catalytic properties",
            "Ductile and malleable",
            "High density",
        ],
        educational_insights: &[
            "FCC structure enables good formability",
            "Demonstrates noble metal behavior",
            "Important for catalytic applications",
            "Shows high-temperature stability",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn gold() -> Material {
    Material {
        key: "gold",
        name: "Gold",
        class: MaterialClass::Metal,
        category: "transition_metal",
        composition: &[("Au", 1.0)],
        properties: Properties {
            density: 19.32,
            youngs_modulus: 78.0,
            yield_strength: 100.0,
            tensile_strength: 120.0,
            elongation: 45.0,
            hardness: 25.0,
            thermal_conductivity: 318.0,
            melting_point: 1064.0,
            electrical_resistivity: 2.2e-8,
            fatigue_strength: 0.0,
            cost_index: 55000.0,
            reduction_area: Some(0.0),
            specific_heat: Some(129.0),
            thermal_expansion: Some(14.2),
            poissons_ratio: Some(0.42),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Au", 4.08, "Face-Centered Cubic: Most malleable and ductile metal")),
        applications: &[
            "Jewelry",
            "Electronics",
            "Dental work",
            "Financial investment",
            "Spacecraft components",
        ],
        characteristics: &[
            "Most malleable metal",
            "Excellent corrosion resistance",
            "Good electrical conductivity",
            "Biocompatible",
        ],
        educational_insights: &[
            "FCC structure enables extreme ductility",
            "Demonstrates noble metal corrosion resistance",
            "Important for understanding metallic bonding",
            "Shows work hardening characteristics",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}

pub(super) fn lead() -> Material {
    Material {
        key: "lead",
        name: "Lead",
        class: MaterialClass::Metal,
        category: "post_transition_metal",
        composition: &[("Pb", 1.0)],
        properties: Properties {
            density: 11.34,
            youngs_modulus: 16.0,
            yield_strength: 12.0,
            tensile_strength: 18.0,
            elongation: 50.0,
            hardness: 5.0,
            thermal_conductivity: 35.3,
            melting_point: 327.0,
            electrical_resistivity: 2.1e-7,
            fatigue_strength: 0.0,
            cost_index: 2.2,
            reduction_area: Some(0.0),
            specific_heat: Some(129.0),
            thermal_expansion: Some(28.9),
            poissons_ratio: Some(0.44),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::fcc("Pb", 4.95, "Face-Centered Cubic: Very soft, dense, low melting point metal")),
        applications: &[
            "Batteries",
            "Radiation shielding",
            "Solders",
            "Construction",
            "Ammunition",
        ],
        characteristics: &[
            "Very soft and malleable",
            "High density",
            "Low melting point",
            "Toxic",
        ],
        educational_insights: &[
            "FCC structure with very low strength",
            "Demonstrates creep behavior at room temperature",
            "Important for understanding heavy metal properties",
            "Shows recrystallization behavior",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "CRC Handbook",
            "NIST Database",
        ],
    }
}
