// src/physics/lattice.rs

use crate::model::{AtomSite, CrystalStructure, LatticeParameters, SiteRole};
use nalgebra::{Matrix3, Vector3};
use serde::Serialize;

/// Closed polyline over the 12 cell edges in fractional space:
/// bottom face, top face, then the four verticals as back-and-forth hops.
pub const UNIT_CELL_PATH: [[f64; 3]; 16] = [
    [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
];

/// Lattice vectors as rows, ignoring the cell angles: diag(a, b, c).
///
/// This is the basis used for drawing. It is exact for cubic and other
/// orthogonal cells only.
pub fn orthogonal_basis(lat: &LatticeParameters) -> Matrix3<f64> {
    Matrix3::from_diagonal(&Vector3::new(lat.a, lat.b, lat.c))
}

/// Full triclinic basis (a along x, b in the xy plane), rows are lattice vectors.
/// Used for analysis (volumes), never for drawing.
pub fn crystallographic_basis(lat: &LatticeParameters) -> Matrix3<f64> {
    let (alpha, beta, gamma) = (
        lat.alpha.to_radians(),
        lat.beta.to_radians(),
        lat.gamma.to_radians(),
    );

    let bx = lat.b * gamma.cos();
    let by = lat.b * gamma.sin();

    let cx = lat.c * beta.cos();
    let cy = lat.c * (alpha.cos() - beta.cos() * gamma.cos()) / gamma.sin();
    let cz = (lat.c * lat.c - cx * cx - cy * cy).max(0.0).sqrt();

    Matrix3::from_row_slice(&[
        lat.a, 0.0, 0.0,
        bx, by, 0.0,
        cx, cy, cz,
    ])
}

/// Cell volume in Å³ from the crystallographic basis.
pub fn cell_volume(lat: &LatticeParameters) -> f64 {
    crystallographic_basis(lat).determinant().abs()
}

/// Convert fractional coordinates to Cartesian using a row-vector basis
///
/// # Formula
/// ```text
/// Cartesian = Basis^T × Fractional
/// ```
pub fn frac_to_cart(frac: [f64; 3], basis: &Matrix3<f64>) -> [f64; 3] {
    let cart = basis.transpose() * Vector3::from(frac);
    [cart.x, cart.y, cart.z]
}

/// One site placed in Cartesian space (Å).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedSite {
    pub element: &'static str,
    pub frac: [f64; 3],
    pub cart: [f64; 3],
    pub role: SiteRole,
}

/// Everything the 3D view needs: atom positions and the cell outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellGeometry {
    pub sites: Vec<PlacedSite>,
    pub wireframe: Vec<[f64; 3]>,
    /// True when the cell has a non-90° angle that the drawing ignores.
    pub orthogonal_approximation: bool,
}

pub fn place_sites(sites: &[AtomSite], lat: &LatticeParameters) -> CellGeometry {
    let basis = orthogonal_basis(lat);

    let placed = sites
        .iter()
        .map(|s| PlacedSite {
            element: s.element,
            frac: s.frac,
            cart: frac_to_cart(s.frac, &basis),
            role: s.role,
        })
        .collect();

    let wireframe = UNIT_CELL_PATH
        .iter()
        .map(|&p| frac_to_cart(p, &basis))
        .collect();

    CellGeometry {
        sites: placed,
        wireframe,
        orthogonal_approximation: !lat.is_orthogonal(),
    }
}

/// Places a record's sites, warning when the cell angles are dropped.
pub fn place_structure(cs: &CrystalStructure) -> CellGeometry {
    let geometry = place_sites(&cs.sites, &cs.lattice);
    if geometry.orthogonal_approximation {
        let [alpha, beta, gamma] = cs.lattice.angles();
        log::warn!(
            "{} cell (α={}°, β={}°, γ={}°) drawn with orthogonal axes",
            cs.structure_type, alpha, beta, gamma
        );
    }
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_body_center() {
        let l = 2.866;
        let lat = LatticeParameters::cubic(l);
        let cart = frac_to_cart([0.5, 0.5, 0.5], &orthogonal_basis(&lat));
        for v in cart {
            assert!((v - l / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_axes_scale_independently() {
        let lat = LatticeParameters { a: 2.0, b: 3.0, c: 5.0, alpha: 90.0, beta: 90.0, gamma: 90.0 };
        let cart = frac_to_cart([1.0, 0.5, 0.2], &orthogonal_basis(&lat));
        assert!((cart[0] - 2.0).abs() < 1e-12);
        assert!((cart[1] - 1.5).abs() < 1e-12);
        assert!((cart[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_wireframe_covers_cell() {
        let cs = CrystalStructure::fcc("Cu", 3.61, "");
        let geo = place_structure(&cs);
        assert_eq!(geo.wireframe.len(), 16);
        assert_eq!(geo.sites.len(), 14);
        assert!(!geo.orthogonal_approximation);
        assert!(geo.wireframe.contains(&[3.61, 3.61, 3.61]));
        assert_eq!(geo.wireframe[0], geo.wireframe[4]);
    }

    #[test]
    fn test_hexagonal_is_flagged() {
        let cs = CrystalStructure::hcp("Mg", 3.21, 5.21, "");
        let geo = place_structure(&cs);
        assert!(geo.orthogonal_approximation);
        // Drawing still scales by edge length only
        assert!((geo.sites[2].cart[2] - 0.25 * 5.21).abs() < 1e-12);
    }

    #[test]
    fn test_cell_volume() {
        assert!((cell_volume(&LatticeParameters::cubic(2.0)) - 8.0).abs() < 1e-10);

        let hex = LatticeParameters::hexagonal(3.21, 5.21);
        let expected = 3.21 * 3.21 * 5.21 * (3.0f64).sqrt() / 2.0;
        assert!((cell_volume(&hex) - expected).abs() < 1e-9);
    }
}
