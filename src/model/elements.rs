// src/model/elements.rs

/// Returns (covalent radius in Å, CPK color) used for the 3D cell markers.
/// Unknown symbols (including polymer constituents) fall back to hot pink.
pub fn get_atom_properties(element: &str) -> (f64, (f64, f64, f64)) {
    match element {
        // --- Period 2 ---
        "Li" => (1.34, (0.80, 0.50, 1.00)), // Violet
        "Be" => (0.90, (0.76, 1.00, 0.00)), // Yellow-Green
        "C"  => (0.77, (0.20, 0.20, 0.20)), // Dark Grey

        // --- Period 3 ---
        "Na" => (1.54, (0.67, 0.36, 0.95)),
        "Mg" => (1.30, (0.54, 1.00, 0.00)),
        "Al" => (1.18, (0.75, 0.65, 0.65)), // Silver-Grey
        "Si" => (1.11, (0.94, 0.78, 0.63)), // Tan
        "P"  => (1.06, (1.00, 0.50, 0.00)),
        "S"  => (1.02, (1.00, 1.00, 0.19)),

        // --- Period 4 ---
        "K"  => (1.96, (0.56, 0.25, 0.83)),
        "Ca" => (1.74, (0.24, 1.00, 0.00)),
        "Ti" => (1.36, (0.75, 0.76, 0.78)), // Silver
        "V"  => (1.25, (0.65, 0.65, 0.67)),
        "Cr" => (1.27, (0.54, 0.60, 0.78)), // Blue-Grey
        "Mn" => (1.39, (0.61, 0.48, 0.78)),
        "Fe" => (1.25, (0.88, 0.40, 0.20)), // Rust
        "Co" => (1.26, (0.94, 0.56, 0.63)),
        "Ni" => (1.21, (0.31, 0.82, 0.31)),
        "Cu" => (1.38, (0.78, 0.50, 0.20)), // Copper
        "Zn" => (1.31, (0.49, 0.50, 0.69)),
        "Ge" => (1.22, (0.40, 0.56, 0.56)),

        // --- Period 5/6 ---
        "Mo" => (1.45, (0.33, 0.71, 0.71)),
        "Ag" => (1.53, (0.75, 0.75, 0.75)),
        "W"  => (1.46, (0.13, 0.58, 0.84)),
        "Pt" => (1.36, (0.82, 0.82, 0.88)),
        "Au" => (1.44, (1.00, 0.82, 0.14)), // Gold
        "Pb" => (1.46, (0.34, 0.35, 0.38)),

        _    => (1.00, (1.00, 0.08, 0.58)),
    }
}

/// True for symbols the periodic table knows about. Polymer records list
/// monomers ("Styrene", "Polyamide") instead of elements.
pub fn is_element_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), None, _) => a.is_ascii_uppercase(),
        (Some(a), Some(b), None) => a.is_ascii_uppercase() && b.is_ascii_lowercase(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_fallback() {
        let (r, _) = get_atom_properties("Fe");
        assert!((r - 1.25).abs() < 1e-9);
        assert_eq!(get_atom_properties("Styrene").1, (1.00, 0.08, 0.58));
    }

    #[test]
    fn test_symbol_shape() {
        assert!(is_element_symbol("C"));
        assert!(is_element_symbol("Fe"));
        assert!(!is_element_symbol("Polyamide"));
        assert!(!is_element_symbol("fe"));
    }
}
