// src/data/nonmetals.rs
//
// Semiconductors, carbon allotropes and engineering polymers.

use crate::model::crystal::hexagonal_sites;
use crate::model::{
    CrystalStructure, CrystalSystem, LatticeParameters, ManufacturingNotes, Material, MaterialClass,
    Properties, StructureType,
};

pub(super) fn silicon() -> Material {
    Material {
        key: "silicon",
        name: "Silicon",
        class: MaterialClass::Semiconductor,
        category: "semiconductor",
        composition: &[("Si", 1.0)],
        properties: Properties {
            density: 2.33,
            youngs_modulus: 112.0,
            yield_strength: 7000.0,
            tensile_strength: 165.0,
            elongation: 0.0,
            hardness: 1150.0,
            thermal_conductivity: 149.0,
            melting_point: 1414.0,
            electrical_resistivity: 2300.0,
            fatigue_strength: 0.0,
            cost_index: 1.8,
            reduction_area: Some(0.0),
            specific_heat: Some(705.0),
            thermal_expansion: Some(2.6),
            poissons_ratio: Some(0.28),
            fracture_toughness: Some(0.9),
        },
        crystal_structure: Some(CrystalStructure::diamond_cubic("Si", 5.43, "Diamond Cubic: Two interpenetrating FCC lattices offset by (1/4,1/4,1/4)")),
        applications: &[
            "Integrated circuits",
            "Solar cells",
            "Semiconductor devices",
            "Optical windows",
            "Microelectromechanical systems (MEMS)",
        ],
        characteristics: &[
            "Semiconductor properties",
            "Brittle at room temperature",
            "Forms protective oxide layer",
            "Directional covalent bonding",
        ],
        educational_insights: &[
            "Diamond cubic has tetrahedral coordination",
            "Low packing factor due to directional bonding",
            "Covalent bonds make it hard and brittle",
            "Band gap of 1.1 eV enables semiconductor behavior",
        ],
        manufacturing_notes: None,
        heat_treatment: &[],
        sources: &[
            "ASM Handbook Vol. 2",
            "MatWeb",
            "Semiconductor data sheets",
        ],
    }
}

pub(super) fn germanium() -> Material {
    Material {
        key: "germanium",
        name: "Germanium",
        class: MaterialClass::Semiconductor,
        category: "metalloid",
        composition: &[("Ge", 1.0)],
        properties: Properties {
            density: 5.32,
            youngs_modulus: 103.0,
            yield_strength: 0.0,
            tensile_strength: 0.0,
            elongation: 0.0,
            hardness: 780.0,
            thermal_conductivity: 60.2,
            melting_point: 938.0,
            electrical_resistivity: 1.0,
            fatigue_strength: 0.0,
            cost_index: 1200.0,
            reduction_area: Some(0.0),
            specific_heat: Some(322.0),
            thermal_expansion: Some(6.0),
            poissons_ratio: Some(0.26),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::diamond_cubic("Ge", 5.66, "Diamond Cubic: Semiconductor with tetrahedral coordination")),
        applications: &[
            "Transistors",
            "Infrared optics",
            "Fiber optics",
            "Solar cells",
            "Gamma-ray detectors",
        ],
        characteristics: &[
            "Semiconductor properties",
            "Brittle",
            "Transparent to infrared",
            "Forms stable oxides",
        ],
        educational_insights: &[
            "Diamond cubic structure like silicon",
            "Smaller band gap than silicon (0.67 eV)",
            "Important early semiconductor material",
            "Demonstrates covalent bonding characteristics",
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

pub(super) fn carbon_diamond() -> Material {
    Material {
        key: "carbon_diamond",
        name: "Carbon (Diamond)",
        class: MaterialClass::NonMetal,
        category: "non_metal",
        composition: &[("C", 1.0)],
        properties: Properties {
            density: 3.51,
            youngs_modulus: 1050.0,
            yield_strength: 0.0,
            tensile_strength: 0.0,
            elongation: 0.0,
            hardness: 10000.0,
            thermal_conductivity: 900.0,
            melting_point: 3550.0,
            electrical_resistivity: 1e12,
            fatigue_strength: 0.0,
            cost_index: 500000.0,
            reduction_area: Some(0.0),
            specific_heat: Some(509.0),
            thermal_expansion: Some(1.1),
            poissons_ratio: Some(0.1),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure::diamond_cubic("C", 3.57, "Diamond Cubic: Hardest known natural material")),
        applications: &[
            "Cutting tools",
            "Jewelry",
            "Heat sinks",
            "Optical windows",
            "High-pressure experiments",
        ],
        characteristics: &[
            "Hardest known material",
            "Excellent thermal conductivity",
            "Electrical insulator",
            "Extremely brittle",
        ],
        educational_insights: &[
            "Diamond cubic structure with strong covalent bonds",
            "Highest thermal conductivity of any material",
            "Demonstrates extreme hardness from covalent bonding",
            "Important for understanding carbon allotropes",
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

pub(super) fn carbon_graphite() -> Material {
    Material {
        key: "carbon_graphite",
        name: "Carbon (Graphite)",
        class: MaterialClass::NonMetal,
        category: "non_metal",
        composition: &[("C", 1.0)],
        properties: Properties {
            density: 2.09,
            youngs_modulus: 8.0,
            yield_strength: 0.0,
            tensile_strength: 15.0,
            elongation: 0.0,
            hardness: 5.0,
            thermal_conductivity: 150.0,
            melting_point: 3650.0,
            electrical_resistivity: 1e-5,
            fatigue_strength: 0.0,
            cost_index: 2.5,
            reduction_area: Some(0.0),
            specific_heat: Some(710.0),
            thermal_expansion: Some(7.9),
            poissons_ratio: Some(0.2),
            fracture_toughness: Some(0.0),
        },
        crystal_structure: Some(CrystalStructure {
            crystal_system: CrystalSystem::Hexagonal,
            structure_type: StructureType::Hexagonal,
            space_group: "P6₃/mmc",
            lattice: LatticeParameters::hexagonal(2.46, 6.7),
            sites: hexagonal_sites("C"),
            coordination_number: 3,
            atomic_packing_factor: 0.17,
            atoms_per_unit_cell: 4,
            description: "Hexagonal: Layered structure with strong in-plane bonds",
        }),
        applications: &[
            "Pencils and lubricants",
            "Electrodes",
            "Refractories",
            "Nuclear reactors",
            "Composite materials",
        ],
        characteristics: &[
            "Excellent lubricant",
            "Good electrical conductor",
            "Anisotropic properties",
            "Thermally stable",
        ],
        educational_insights: &[
            "Layered structure with weak interlayer bonding",
            "Strong in-plane covalent bonds, weak van der Waals between layers",
            "Demonstrates carbon allotropy",
            "Important for understanding anisotropic materials",
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

pub(super) fn abs_plastic() -> Material {
    Material {
        key: "abs_plastic",
        name: "ABS Plastic",
        class: MaterialClass::Polymer,
        category: "thermoplastic",
        composition: &[("Acrylonitrile", 0.2), ("Butadiene", 0.25), ("Styrene", 0.55)],
        properties: Properties {
            density: 1.05,
            youngs_modulus: 2.3,
            yield_strength: 45.0,
            tensile_strength: 40.0,
            elongation: 25.0,
            hardness: 105.0,
            thermal_conductivity: 0.25,
            melting_point: 105.0,
            electrical_resistivity: 1e14,
            fatigue_strength: 28.0,
            cost_index: 2.0,
            reduction_area: None,
            specific_heat: None,
            thermal_expansion: None,
            poissons_ratio: None,
            fracture_toughness: None,
        },
        crystal_structure: None,
        applications: &[
            "Automotive trim and dashboards",
            "Electronic enclosures",
            "Consumer products and toys",
            "Pipes and fittings",
            "Protective headgear",
        ],
        characteristics: &[
            "Good impact strength and toughness",
            "Easily injection molded",
            "Good surface finish",
            "Moderate temperature resistance",
        ],
        educational_insights: &[
            "Common engineering thermoplastic",
            "Demonstrates polymer toughness from rubber particles",
            "Shows amorphous polymer structure",
            "Important for injection molding applications",
        ],
        manufacturing_notes: Some(ManufacturingNotes {
            machinability: "Good",
            weldability: "Good (ultrasonic/solvent)",
            formability: "Good (injection molding)",
            heat_treatment: Some("None"),
            castability: None,
        }),
        heat_treatment: &[],
        sources: &[],
    }
}

pub(super) fn nylon_66() -> Material {
    Material {
        key: "nylon_66",
        name: "Nylon 6/6",
        class: MaterialClass::Polymer,
        category: "thermoplastic",
        composition: &[("Polyamide", 1.0)],
        properties: Properties {
            density: 1.14,
            youngs_modulus: 3.0,
            yield_strength: 70.0,
            tensile_strength: 80.0,
            elongation: 60.0,
            hardness: 118.0,
            thermal_conductivity: 0.25,
            melting_point: 265.0,
            electrical_resistivity: 1e13,
            fatigue_strength: 35.0,
            cost_index: 3.5,
            reduction_area: None,
            specific_heat: None,
            thermal_expansion: None,
            poissons_ratio: None,
            fracture_toughness: None,
        },
        crystal_structure: None,
        applications: &[
            "Gears and bearings",
            "Fasteners and screws",
            "Bushings and wear pads",
            "Electrical insulators",
            "Textile fibers",
        ],
        characteristics: &[
            "Good strength and stiffness",
            "Excellent wear resistance",
            "Absorbs moisture (dimensional changes)",
            "Good fatigue resistance",
        ],
        educational_insights: &[
            "Crystalline thermoplastic with good mechanical properties",
            "Demonstrates polymer wear applications",
            "Shows moisture absorption effects on properties",
            "Important for understanding engineering plastics",
        ],
        manufacturing_notes: Some(ManufacturingNotes {
            machinability: "Excellent",
            weldability: "Good",
            formability: "Good (injection molding)",
            heat_treatment: Some("None"),
            castability: None,
        }),
        heat_treatment: &[],
        sources: &[],
    }
}
