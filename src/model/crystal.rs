// src/model/crystal.rs

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CrystalSystem {
    Cubic,
    Hexagonal,
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CrystalSystem::Cubic => f.write_str("Cubic"),
            CrystalSystem::Hexagonal => f.write_str("Hexagonal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StructureType {
    #[serde(rename = "BCC")]
    Bcc,
    #[serde(rename = "FCC")]
    Fcc,
    #[serde(rename = "HCP")]
    Hcp,
    #[serde(rename = "Diamond Cubic")]
    DiamondCubic,
    /// Layered hexagonal (graphite)
    Hexagonal,
}

impl StructureType {
    pub const ALL: [StructureType; 5] = [
        StructureType::Bcc,
        StructureType::Fcc,
        StructureType::Hcp,
        StructureType::DiamondCubic,
        StructureType::Hexagonal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StructureType::Bcc => "BCC",
            StructureType::Fcc => "FCC",
            StructureType::Hcp => "HCP",
            StructureType::DiamondCubic => "Diamond Cubic",
            StructureType::Hexagonal => "Hexagonal",
        }
    }

    /// Accepts "BCC", "bcc", "Diamond Cubic", "diamond_cubic", ...
    pub fn parse(s: &str) -> Option<Self> {
        let norm: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        StructureType::ALL.iter().copied().find(|t| {
            t.label()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
                == norm
        })
    }

    /// Space group label every record of this type should carry.
    pub fn expected_space_group(&self) -> &'static str {
        match self {
            StructureType::Bcc => "Im-3m",
            StructureType::Fcc => "Fm-3m",
            StructureType::DiamondCubic => "Fd-3m",
            StructureType::Hcp | StructureType::Hexagonal => "P6₃/mmc",
        }
    }

    /// (atoms per cell, coordination number, packing factor) fixed by the
    /// lattice type. `None` for types whose counts depend on the material.
    pub fn ideal_geometry(&self) -> Option<(u32, u32, f64)> {
        match self {
            StructureType::Bcc => Some((2, 8, 0.68)),
            StructureType::Fcc => Some((4, 12, 0.74)),
            StructureType::DiamondCubic => Some((8, 4, 0.34)),
            StructureType::Hcp | StructureType::Hexagonal => None,
        }
    }

    /// Dominant slip systems as (plane{}direction<>) pairs.
    pub fn slip_systems(&self) -> &'static [&'static str] {
        match self {
            StructureType::Bcc => &["{110}<111>", "{112}<111>"],
            StructureType::Fcc => &["{111}<110>"],
            StructureType::Hcp => &["{0001}<1120>", "{1010}<1120>"],
            StructureType::DiamondCubic | StructureType::Hexagonal => &[],
        }
    }

    pub fn insights(&self) -> &'static [&'static str] {
        match self {
            StructureType::Fcc => &[
                "FCC structures have multiple slip systems",
                "This enables good ductility and formability",
                "Close-packed planes allow dislocation movement",
            ],
            StructureType::DiamondCubic => &[
                "Diamond cubic has directional covalent bonding",
                "This makes materials hard but brittle",
                "Four-fold coordination enables semiconductor properties",
            ],
            StructureType::Hcp => &[
                "HCP structures have limited slip systems",
                "This can lead to anisotropic properties",
                "Close-packed basal planes enable specific deformation",
            ],
            StructureType::Bcc | StructureType::Hexagonal => &[],
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit cell edge lengths (Å) and angles (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatticeParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl LatticeParameters {
    pub fn cubic(a: f64) -> Self {
        Self { a, b: a, c: a, alpha: 90.0, beta: 90.0, gamma: 90.0 }
    }

    pub fn hexagonal(a: f64, c: f64) -> Self {
        Self { a, b: a, c, alpha: 90.0, beta: 90.0, gamma: 120.0 }
    }

    pub fn edges(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn angles(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// All three angles are 90° (within 1e-6 degrees).
    pub fn is_orthogonal(&self) -> bool {
        self.angles().iter().all(|ang| (ang - 90.0).abs() < 1e-6)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteRole {
    Corner,
    FaceCenter,
    BodyCenter,
    FccCorner,
    FccFace,
    Internal,
    BasePlane,
    MidPlane,
}

impl SiteRole {
    pub fn label(&self) -> &'static str {
        match self {
            SiteRole::Corner => "corner",
            SiteRole::FaceCenter => "face_center",
            SiteRole::BodyCenter => "body_center",
            SiteRole::FccCorner => "fcc_corner",
            SiteRole::FccFace => "fcc_face",
            SiteRole::Internal => "internal",
            SiteRole::BasePlane => "base_plane",
            SiteRole::MidPlane => "mid_plane",
        }
    }
}

/// One atom of the unit cell in fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtomSite {
    pub element: &'static str,
    pub frac: [f64; 3],
    pub role: SiteRole,
}

impl AtomSite {
    pub const fn new(element: &'static str, x: f64, y: f64, z: f64, role: SiteRole) -> Self {
        Self { element, frac: [x, y, z], role }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrystalStructure {
    pub crystal_system: CrystalSystem,
    pub structure_type: StructureType,
    pub space_group: &'static str,
    pub lattice: LatticeParameters,
    pub sites: Vec<AtomSite>,
    pub coordination_number: u32,
    pub atomic_packing_factor: f64,
    pub atoms_per_unit_cell: u32,
    pub description: &'static str,
}

impl CrystalStructure {
    pub fn bcc(element: &'static str, a: f64, description: &'static str) -> Self {
        Self {
            crystal_system: CrystalSystem::Cubic,
            structure_type: StructureType::Bcc,
            space_group: "Im-3m",
            lattice: LatticeParameters::cubic(a),
            sites: bcc_sites(element),
            coordination_number: 8,
            atomic_packing_factor: 0.68,
            atoms_per_unit_cell: 2,
            description,
        }
    }

    pub fn fcc(element: &'static str, a: f64, description: &'static str) -> Self {
        Self {
            crystal_system: CrystalSystem::Cubic,
            structure_type: StructureType::Fcc,
            space_group: "Fm-3m",
            lattice: LatticeParameters::cubic(a),
            sites: fcc_sites(element),
            coordination_number: 12,
            atomic_packing_factor: 0.74,
            atoms_per_unit_cell: 4,
            description,
        }
    }

    pub fn diamond_cubic(element: &'static str, a: f64, description: &'static str) -> Self {
        Self {
            crystal_system: CrystalSystem::Cubic,
            structure_type: StructureType::DiamondCubic,
            space_group: "Fd-3m",
            lattice: LatticeParameters::cubic(a),
            sites: diamond_sites(element),
            coordination_number: 4,
            atomic_packing_factor: 0.34,
            atoms_per_unit_cell: 8,
            description,
        }
    }

    /// HCP records list six sites on two planes and count all six per cell.
    pub fn hcp(element: &'static str, a: f64, c: f64, description: &'static str) -> Self {
        Self {
            crystal_system: CrystalSystem::Hexagonal,
            structure_type: StructureType::Hcp,
            space_group: "P6₃/mmc",
            lattice: LatticeParameters::hexagonal(a, c),
            sites: hexagonal_sites(element),
            coordination_number: 12,
            atomic_packing_factor: 0.74,
            atoms_per_unit_cell: 6,
            description,
        }
    }

    /// Sites with coordinates folded into [0, 1) and duplicates removed,
    /// i.e. the atoms that actually belong to one cell.
    pub fn distinct_sites(&self) -> Vec<AtomSite> {
        let mut out: Vec<AtomSite> = Vec::new();
        for site in &self.sites {
            let folded = site.frac.map(|v| {
                let w = v.rem_euclid(1.0);
                if (1.0 - w) < 1e-6 { 0.0 } else { w }
            });
            let seen = out.iter().any(|o| {
                o.element == site.element
                    && o.frac.iter().zip(folded.iter()).all(|(p, q)| (p - q).abs() < 1e-6)
            });
            if !seen {
                out.push(AtomSite { frac: folded, ..*site });
            }
        }
        out
    }
}

// --- Site templates (conventional cells, with redundant edge atoms) ---

const CUBE_CORNERS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

fn corners(element: &'static str) -> Vec<AtomSite> {
    CUBE_CORNERS
        .iter()
        .map(|p| AtomSite::new(element, p[0], p[1], p[2], SiteRole::Corner))
        .collect()
}

/// 8 corners + body center (2 atoms per cell).
pub fn bcc_sites(element: &'static str) -> Vec<AtomSite> {
    let mut sites = corners(element);
    sites.push(AtomSite::new(element, 0.5, 0.5, 0.5, SiteRole::BodyCenter));
    sites
}

/// 8 corners + 6 face centers (4 atoms per cell).
pub fn fcc_sites(element: &'static str) -> Vec<AtomSite> {
    let mut sites = corners(element);
    let faces = [
        [0.5, 0.5, 0.0],
        [0.5, 0.0, 0.5],
        [0.0, 0.5, 0.5],
        [0.5, 0.5, 1.0],
        [0.5, 1.0, 0.5],
        [1.0, 0.5, 0.5],
    ];
    sites.extend(
        faces
            .iter()
            .map(|p| AtomSite::new(element, p[0], p[1], p[2], SiteRole::FaceCenter)),
    );
    sites
}

/// Two interpenetrating FCC lattices offset by (1/4, 1/4, 1/4).
pub fn diamond_sites(element: &'static str) -> Vec<AtomSite> {
    vec![
        AtomSite::new(element, 0.0, 0.0, 0.0, SiteRole::FccCorner),
        AtomSite::new(element, 0.5, 0.5, 0.0, SiteRole::FccFace),
        AtomSite::new(element, 0.5, 0.0, 0.5, SiteRole::FccFace),
        AtomSite::new(element, 0.0, 0.5, 0.5, SiteRole::FccFace),
        AtomSite::new(element, 0.25, 0.25, 0.25, SiteRole::Internal),
        AtomSite::new(element, 0.75, 0.75, 0.25, SiteRole::Internal),
        AtomSite::new(element, 0.75, 0.25, 0.75, SiteRole::Internal),
        AtomSite::new(element, 0.25, 0.75, 0.75, SiteRole::Internal),
    ]
}

/// Three sites on each of the z = 1/4 and z = 3/4 planes.
pub fn hexagonal_sites(element: &'static str) -> Vec<AtomSite> {
    let mut sites = Vec::with_capacity(6);
    for (z, role) in [(0.25, SiteRole::BasePlane), (0.75, SiteRole::MidPlane)] {
        sites.push(AtomSite::new(element, 0.333, 0.667, z, role));
        sites.push(AtomSite::new(element, 0.667, 0.333, z, role));
        sites.push(AtomSite::new(element, 0.0, 0.0, z, role));
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_sites_fold_corners() {
        let bcc = CrystalStructure::bcc("Fe", 2.866, "");
        assert_eq!(bcc.sites.len(), 9);
        assert_eq!(bcc.distinct_sites().len(), 2);

        let fcc = CrystalStructure::fcc("Cu", 3.61, "");
        assert_eq!(fcc.sites.len(), 14);
        assert_eq!(fcc.distinct_sites().len(), 4);

        let dia = CrystalStructure::diamond_cubic("Si", 5.43, "");
        assert_eq!(dia.distinct_sites().len(), 8);
    }

    #[test]
    fn test_parse_structure_type() {
        assert_eq!(StructureType::parse("bcc"), Some(StructureType::Bcc));
        assert_eq!(StructureType::parse("Diamond Cubic"), Some(StructureType::DiamondCubic));
        assert_eq!(StructureType::parse("diamond_cubic"), Some(StructureType::DiamondCubic));
        assert_eq!(StructureType::parse("rocksalt"), None);
    }

    #[test]
    fn test_orthogonality() {
        assert!(LatticeParameters::cubic(4.05).is_orthogonal());
        assert!(!LatticeParameters::hexagonal(2.95, 4.68).is_orthogonal());
    }
}
