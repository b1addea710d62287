// src/model/properties.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical properties of one material.
///
/// Units are fixed per field (see [`PropertyKey::unit`]). The five optional
/// fields only exist on the verified records; older records never carried them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Properties {
    pub density: f64,                // g/cm³
    pub youngs_modulus: f64,         // GPa
    pub yield_strength: f64,         // MPa
    pub tensile_strength: f64,       // MPa
    pub elongation: f64,             // %
    pub hardness: f64,               // Brinell
    pub thermal_conductivity: f64,   // W/m·K
    pub melting_point: f64,          // °C
    pub electrical_resistivity: f64, // Ω·m
    pub fatigue_strength: f64,       // MPa @ 10^7 cycles
    pub cost_index: f64,             // relative to AISI 1020 = 1.0

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduction_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_heat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermal_expansion: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poissons_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fracture_toughness: Option<f64>,
}

impl Properties {
    /// Value of a property, `None` when the record does not carry it.
    pub fn get(&self, key: PropertyKey) -> Option<f64> {
        match key {
            PropertyKey::Density => Some(self.density),
            PropertyKey::YoungsModulus => Some(self.youngs_modulus),
            PropertyKey::YieldStrength => Some(self.yield_strength),
            PropertyKey::TensileStrength => Some(self.tensile_strength),
            PropertyKey::Elongation => Some(self.elongation),
            PropertyKey::Hardness => Some(self.hardness),
            PropertyKey::ThermalConductivity => Some(self.thermal_conductivity),
            PropertyKey::MeltingPoint => Some(self.melting_point),
            PropertyKey::ElectricalResistivity => Some(self.electrical_resistivity),
            PropertyKey::FatigueStrength => Some(self.fatigue_strength),
            PropertyKey::CostIndex => Some(self.cost_index),
            PropertyKey::ReductionArea => self.reduction_area,
            PropertyKey::SpecificHeat => self.specific_heat,
            PropertyKey::ThermalExpansion => self.thermal_expansion,
            PropertyKey::PoissonsRatio => self.poissons_ratio,
            PropertyKey::FractureToughness => self.fracture_toughness,
        }
    }

    /// All (key, value) pairs this record carries, in [`PropertyKey::ALL`] order.
    pub fn entries(&self) -> Vec<(PropertyKey, f64)> {
        PropertyKey::ALL
            .iter()
            .filter_map(|&k| self.get(k).map(|v| (k, v)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKey {
    Density,
    YoungsModulus,
    YieldStrength,
    TensileStrength,
    Elongation,
    ReductionArea,
    Hardness,
    ThermalConductivity,
    SpecificHeat,
    ThermalExpansion,
    MeltingPoint,
    ElectricalResistivity,
    PoissonsRatio,
    FatigueStrength,
    FractureToughness,
    CostIndex,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 16] = [
        PropertyKey::Density,
        PropertyKey::YoungsModulus,
        PropertyKey::YieldStrength,
        PropertyKey::TensileStrength,
        PropertyKey::Elongation,
        PropertyKey::ReductionArea,
        PropertyKey::Hardness,
        PropertyKey::ThermalConductivity,
        PropertyKey::SpecificHeat,
        PropertyKey::ThermalExpansion,
        PropertyKey::MeltingPoint,
        PropertyKey::ElectricalResistivity,
        PropertyKey::PoissonsRatio,
        PropertyKey::FatigueStrength,
        PropertyKey::FractureToughness,
        PropertyKey::CostIndex,
    ];

    /// Axes of the multi-property radar comparison.
    pub const RADAR_DEFAULT: [PropertyKey; 5] = [
        PropertyKey::Density,
        PropertyKey::YoungsModulus,
        PropertyKey::YieldStrength,
        PropertyKey::ThermalConductivity,
        PropertyKey::Hardness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PropertyKey::Density => "density",
            PropertyKey::YoungsModulus => "youngs_modulus",
            PropertyKey::YieldStrength => "yield_strength",
            PropertyKey::TensileStrength => "tensile_strength",
            PropertyKey::Elongation => "elongation",
            PropertyKey::ReductionArea => "reduction_area",
            PropertyKey::Hardness => "hardness",
            PropertyKey::ThermalConductivity => "thermal_conductivity",
            PropertyKey::SpecificHeat => "specific_heat",
            PropertyKey::ThermalExpansion => "thermal_expansion",
            PropertyKey::MeltingPoint => "melting_point",
            PropertyKey::ElectricalResistivity => "electrical_resistivity",
            PropertyKey::PoissonsRatio => "poissons_ratio",
            PropertyKey::FatigueStrength => "fatigue_strength",
            PropertyKey::FractureToughness => "fracture_toughness",
            PropertyKey::CostIndex => "cost_index",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyKey::Density => "Density",
            PropertyKey::YoungsModulus => "Young's Modulus",
            PropertyKey::YieldStrength => "Yield Strength",
            PropertyKey::TensileStrength => "Tensile Strength",
            PropertyKey::Elongation => "Elongation",
            PropertyKey::ReductionArea => "Reduction of Area",
            PropertyKey::Hardness => "Hardness",
            PropertyKey::ThermalConductivity => "Thermal Conductivity",
            PropertyKey::SpecificHeat => "Specific Heat",
            PropertyKey::ThermalExpansion => "Thermal Expansion",
            PropertyKey::MeltingPoint => "Melting Point",
            PropertyKey::ElectricalResistivity => "Electrical Resistivity",
            PropertyKey::PoissonsRatio => "Poisson's Ratio",
            PropertyKey::FatigueStrength => "Fatigue Strength",
            PropertyKey::FractureToughness => "Fracture Toughness",
            PropertyKey::CostIndex => "Relative Cost",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            PropertyKey::Density => "g/cm³",
            PropertyKey::YoungsModulus => "GPa",
            PropertyKey::YieldStrength
            | PropertyKey::TensileStrength
            | PropertyKey::FatigueStrength => "MPa",
            PropertyKey::Elongation | PropertyKey::ReductionArea => "%",
            PropertyKey::Hardness => "Brinell",
            PropertyKey::ThermalConductivity => "W/m·K",
            PropertyKey::SpecificHeat => "J/kg·K",
            PropertyKey::ThermalExpansion => "µm/m·K",
            PropertyKey::MeltingPoint => "°C",
            PropertyKey::ElectricalResistivity => "Ω·m",
            PropertyKey::PoissonsRatio => "-",
            PropertyKey::FractureToughness => "MPa·√m",
            PropertyKey::CostIndex => "×",
        }
    }

    /// "Yield Strength (MPa)"
    pub fn axis_label(&self) -> String {
        format!("{} ({})", self.label(), self.unit())
    }

    /// Human-readable value with unit. Resistivity spans 20 orders of
    /// magnitude across the catalog, so it is always shown in scientific form.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            PropertyKey::ElectricalResistivity => format!("{:.1e} {}", value, self.unit()),
            PropertyKey::PoissonsRatio => format!("{:.2}", value),
            PropertyKey::CostIndex => format!("{}{}", value, self.unit()),
            _ => format!("{} {}", value, self.unit()),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownProperty(pub String);

impl fmt::Display for UnknownProperty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown property '{}'", self.0)
    }
}

impl std::error::Error for UnknownProperty {}

impl FromStr for PropertyKey {
    type Err = UnknownProperty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(|c: char| c == ' ' || c == '-', "_");
        // The older records used "cost" for the same relative index.
        let wanted = if wanted == "cost" { "cost_index".to_string() } else { wanted };
        PropertyKey::ALL
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| UnknownProperty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Properties {
        Properties {
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
            reduction_area: None,
            specific_heat: Some(896.0),
            thermal_expansion: None,
            poissons_ratio: None,
            fracture_toughness: None,
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("density".parse::<PropertyKey>(), Ok(PropertyKey::Density));
        assert_eq!("Yield Strength".parse::<PropertyKey>(), Ok(PropertyKey::YieldStrength));
        assert_eq!("cost".parse::<PropertyKey>(), Ok(PropertyKey::CostIndex));
        assert!("colour".parse::<PropertyKey>().is_err());

        for key in PropertyKey::ALL {
            assert_eq!(key.name().parse::<PropertyKey>(), Ok(key));
        }
    }

    #[test]
    fn test_optional_fields() {
        let p = sample();
        assert_eq!(p.get(PropertyKey::SpecificHeat), Some(896.0));
        assert_eq!(p.get(PropertyKey::FractureToughness), None);
        // 11 core + 1 optional present
        assert_eq!(p.entries().len(), 12);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(PropertyKey::Density.format_value(2.7), "2.7 g/cm³");
        assert_eq!(
            PropertyKey::ElectricalResistivity.format_value(1.59e-7),
            "1.6e-7 Ω·m"
        );
        assert_eq!(PropertyKey::YieldStrength.axis_label(), "Yield Strength (MPa)");
    }
}
