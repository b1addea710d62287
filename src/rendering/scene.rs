// src/rendering/scene.rs

use crate::config::RenderStyle;
use crate::model::Material;
use crate::physics::lattice::place_structure;
use crate::rendering::charts::{Chart, Rgb, View};
use serde::Serialize;

// One marker of the 3D scatter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneAtom {
  pub element: &'static str,
  pub frac: [f64; 3],
  pub cart: [f64; 3],
  pub radius: f64,
  pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrystalScene {
  pub title: String,
  pub axis_labels: [&'static str; 3],
  pub atoms: Vec<SceneAtom>,
  /// 16-vertex polyline over the cell edges, Å
  pub wireframe: Vec<[f64; 3]>,
  pub cell_color: Rgb,
  /// Cell edge lengths (a, b, c), used as axis ranges
  pub extent: [f64; 3],
  /// Set for hexagonal cells drawn with 90° axes.
  pub orthogonal_approximation: bool,
  /// (element, color) in order of first appearance
  pub legend: Vec<(&'static str, Rgb)>,
}

pub fn to_rgb8(c: (f64, f64, f64)) -> Rgb {
  let ch = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
  (ch(c.0), ch(c.1), ch(c.2))
}

/// 3D unit-cell view of a record, or a placeholder when it has no crystal data.
pub fn crystal_scene(m: &Material, style: &RenderStyle) -> View {
  let cs = match &m.crystal_structure {
    Some(cs) => cs,
    None => {
      return View::Unavailable(format!(
        "Crystal structure data not available for {}",
        m.name
      ))
    }
  };

  let geometry = place_structure(cs);

  let mut legend: Vec<(&'static str, Rgb)> = Vec::new();
  let atoms = geometry
    .sites
    .iter()
    .map(|s| {
      let color = to_rgb8(style.atom_color(s.element));
      if !legend.iter().any(|(el, _)| *el == s.element) {
        legend.push((s.element, color));
      }
      SceneAtom {
        element: s.element,
        frac: s.frac,
        cart: s.cart,
        radius: style.atom_radius(s.element),
        color,
      }
    })
    .collect();

  View::Ready(Chart::Crystal(CrystalScene {
    title: format!("{} - {} Crystal Structure", m.name, cs.structure_type),
    axis_labels: ["X (Å)", "Y (Å)", "Z (Å)"],
    atoms,
    wireframe: geometry.wireframe,
    cell_color: to_rgb8(style.unit_cell_color),
    extent: cs.lattice.edges(),
    orthogonal_approximation: geometry.orthogonal_approximation,
    legend,
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::catalog;

  fn scene_for(key: &str) -> View {
    crystal_scene(catalog().get(key).unwrap(), &RenderStyle::default())
  }

  #[test]
  fn test_bcc_scene() {
    let View::Ready(Chart::Crystal(scene)) = scene_for("aisi_1020") else {
      panic!("expected a crystal scene");
    };
    assert_eq!(scene.title, "AISI 1020 Steel - BCC Crystal Structure");
    assert_eq!(scene.atoms.len(), 9);
    assert_eq!(scene.wireframe.len(), 16);
    assert_eq!(scene.legend.len(), 1);
    let center = scene.atoms[8].cart;
    assert!((center[0] - 2.866 / 2.0).abs() < 1e-12);
    assert!(!scene.orthogonal_approximation);
  }

  #[test]
  fn test_missing_crystal_data() {
    assert_eq!(
      scene_for("abs_plastic"),
      View::Unavailable("Crystal structure data not available for ABS Plastic".into())
    );
  }

  #[test]
  fn test_hexagonal_flag_carried() {
    let View::Ready(Chart::Crystal(scene)) = scene_for("titanium") else {
      panic!("expected a crystal scene");
    };
    assert!(scene.orthogonal_approximation);
    assert_eq!(scene.extent, [2.95, 2.95, 4.68]);
  }

  #[test]
  fn test_color_conversion() {
    assert_eq!(to_rgb8((1.0, 0.0, 0.5)), (255, 0, 128));
    assert_eq!(to_rgb8((2.0, -1.0, 0.0)), (255, 0, 0));
  }
}
