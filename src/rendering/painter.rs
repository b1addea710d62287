// src/rendering/painter.rs

use crate::rendering::charts::{BarChart, Chart, PieChart, RadarChart, Rgb};
use crate::rendering::scene::CrystalScene;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::f64::consts::PI;

const GREY: RGBColor = RGBColor(120, 120, 120);
const GRID: RGBColor = RGBColor(200, 200, 200);
const AMBER: RGBColor = RGBColor(160, 80, 0);

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Draws any chart onto ANY plotters backend (SVG, bitmap, ...).
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    match chart {
        Chart::Pie(pie) => draw_pie(root, pie),
        Chart::Bar(bar) => draw_bar(root, bar),
        Chart::Radar(radar) => draw_radar(root, radar),
        Chart::Crystal(scene) => draw_crystal(root, scene),
    }
}

/// Placeholder panel with a single centered message.
pub fn draw_unavailable<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    message: &str,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let (w, h) = root.dim_in_pixel();
    let style = ("sans-serif", 20)
        .into_font()
        .color(&GREY)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(message.to_string(), (w as i32 / 2, h as i32 / 2), style))?;
    Ok(())
}

// ============================================================================
// PIE
// ============================================================================

fn draw_pie<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    pie: &PieChart,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let area = root.titled(&pie.title, ("sans-serif", 22))?;

    // Pie ignores the area offset, so the center is in backend pixels
    let (xr, yr) = area.get_pixel_range();
    let center = ((xr.start + xr.end) / 2, (yr.start + yr.end) / 2);
    let radius = (xr.end - xr.start).min(yr.end - yr.start) as f64 * 0.35;

    let sizes: Vec<f64> = pie.slices.iter().map(|s| s.fraction).collect();
    let colors: Vec<RGBColor> = pie.slices.iter().map(|s| rgb(s.color)).collect();
    let labels: Vec<&str> = pie.slices.iter().map(|s| s.label).collect();

    let mut chart = Pie::new(&center, &radius, &sizes, &colors, &labels);
    chart.start_angle(-90.0);
    chart.label_style(("sans-serif", 16).into_font().color(&BLACK));
    chart.percentages(("sans-serif", radius * 0.08).into_font().color(&WHITE));
    area.draw(&chart)?;
    Ok(())
}

// ============================================================================
// BAR
// ============================================================================

fn draw_bar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    bar: &BarChart,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let n = bar.bars.len() as i32;
    let y_max = bar.bars.iter().map(|b| b.value).fold(0.0f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let names: Vec<&str> = bar.bars.iter().map(|b| b.label).collect();
    let label_of = |v: &SegmentValue<i32>| match v {
        SegmentValue::CenterOf(i) => names.get(*i as usize).map(|s| s.to_string()).unwrap_or_default(),
        _ => String::new(),
    };

    let mut chart = ChartBuilder::on(root)
        .caption(&bar.title, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..n).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bar.bars.len().max(1))
        .x_label_formatter(&label_of)
        .x_desc(bar.x_label.as_str())
        .y_desc(bar.y_label.as_str())
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    chart.draw_series(bar.bars.iter().enumerate().map(|(i, b)| {
        let i = i as i32;
        let mut r = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), b.value)],
            rgb(b.color).filled(),
        );
        r.set_margin(0, 0, 10, 10);
        r
    }))?;

    Ok(())
}

// ============================================================================
// RADAR
// ============================================================================

fn draw_radar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    radar: &RadarChart,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let area = root.titled(&radar.title, ("sans-serif", 22))?;
    let (w, h) = area.dim_in_pixel();
    let center = (w as f64 / 2.0, h as f64 / 2.0);
    let radius = (w.min(h) as f64) * 0.33;
    let axes = radar.axis_labels.len();
    if axes == 0 {
        return Ok(());
    }

    // Axis k points straight up for k = 0 and walks clockwise.
    let point = |k: usize, r: f64| -> (i32, i32) {
        let theta = -PI / 2.0 + 2.0 * PI * k as f64 / axes as f64;
        (
            (center.0 + radius * r * theta.cos()).round() as i32,
            (center.1 + radius * r * theta.sin()).round() as i32,
        )
    };

    // Grid rings at 0.25 steps, range fixed to [0, 1]
    for ring in [0.25, 0.5, 0.75, 1.0] {
        let mut pts: Vec<(i32, i32)> = (0..axes).map(|k| point(k, ring)).collect();
        pts.push(pts[0]);
        area.draw(&PathElement::new(pts, GRID.stroke_width(1)))?;
    }

    let label_font = ("sans-serif", 14).into_font().color(&BLACK);
    for (k, label) in radar.axis_labels.iter().enumerate() {
        area.draw(&PathElement::new(vec![point(k, 0.0), point(k, 1.0)], GRID.stroke_width(1)))?;
        let (x, y) = point(k, 1.12);
        let style = label_font.pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(label.clone(), (x, y), style))?;
    }

    for poly in &radar.polygons {
        let color = rgb(poly.color);
        let pts: Vec<(i32, i32)> = poly
            .values
            .iter()
            .enumerate()
            .map(|(k, &v)| point(k % axes, v.clamp(0.0, 1.0)))
            .collect();
        area.draw(&Polygon::new(pts.clone(), color.mix(0.2).filled()))?;
        area.draw(&PathElement::new(pts, color.stroke_width(2)))?;
    }

    // Legend, top-left
    for (i, poly) in radar.polygons.iter().enumerate() {
        let y = 20 + 22 * i as i32;
        area.draw(&Rectangle::new([(15, y - 6), (27, y + 6)], rgb(poly.color).filled()))?;
        area.draw(&Text::new(poly.name.to_string(), (35, y - 8), ("sans-serif", 14).into_font()))?;
    }

    for (i, note) in radar.notes.iter().enumerate() {
        let y = h as i32 - 20 - 18 * i as i32;
        area.draw(&Text::new(note.clone(), (15, y), ("sans-serif", 12).into_font().color(&GREY)))?;
    }

    Ok(())
}

// ============================================================================
// CRYSTAL
// ============================================================================

fn draw_crystal<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &CrystalScene,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let [a, b, c] = scene.extent;
    let pad = 0.1 * a.max(b).max(c);

    let mut chart = ChartBuilder::on(root)
        .caption(&scene.title, ("sans-serif", 22))
        .margin(20)
        .build_cartesian_3d(-pad..a + pad, -pad..c + pad, -pad..b + pad)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()?;

    // plotters' 3D y axis is vertical, so crystal z goes there
    let to_plot = |p: &[f64; 3]| (p[0], p[2], p[1]);

    chart.draw_series(LineSeries::new(
        scene.wireframe.iter().map(to_plot),
        rgb(scene.cell_color).stroke_width(2),
    ))?;

    let (w, h) = root.dim_in_pixel();
    let px_per_angstrom = w.min(h) as f64 * 0.5 / (a.max(b).max(c) + 2.0 * pad);

    for (element, color) in &scene.legend {
        let color = rgb(*color);
        let atoms: Vec<_> = scene.atoms.iter().filter(|at| at.element == *element).collect();
        chart
            .draw_series(atoms.iter().map(|at| {
                let size = (at.radius * px_per_angstrom).max(3.0) as i32;
                Circle::new(to_plot(&at.cart), size, color.mix(0.85).filled())
            }))?
            .label(*element)
            .legend(move |(x, y)| Circle::new((x + 8, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    if scene.orthogonal_approximation {
        root.draw(&Text::new(
            "Non-orthogonal cell drawn with 90° axes".to_string(),
            (20, h as i32 - 24),
            ("sans-serif", 13).into_font().color(&AMBER),
        ))?;
    }

    Ok(())
}
