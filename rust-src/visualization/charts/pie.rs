use std::f64::consts::TAU;

use super::ChartDatum;
use crate::visualization::geometry::{arc_path, prepare_surface, render_empty_state, EMPTY_STATE_MESSAGE};
use crate::visualization::palette::{palette_color, SLICE_STROKE};
use crate::visualization::scene::{translate, Element, Mount};
use crate::visualization::tooltip::Emphasis;


/// Hole size of the doughnut variant, relative to the outer radius.
pub const DOUGHNUT_INNER_RATIO: f64 = 0.55;

const RADIUS_INSET: f64 = 8.0;


/// Pie (`inner_ratio == 0`) or doughnut chart with slices in input order.
pub fn render_pie_chart(mount: Option<&mut Mount>, data: &[ChartDatum], inner_ratio: f64) {
    let Some(mount) = mount else {
        return;
    };
    if data.is_empty() {
        render_empty_state(mount, EMPTY_STATE_MESSAGE);
        return;
    }

    let surface = prepare_surface(mount);
    let size = surface.size();
    let radius = (size.width.min(size.height) / 2.0 - RADIUS_INSET).max(0.0);
    let inner_radius = radius * inner_ratio.max(0.0);

    let mut center = Element::new("g").attr("transform", translate(size.width / 2.0, size.height / 2.0));
    let angles = slice_angles(data.iter().map(|d| d.value));

    for (index, (datum, (start, end))) in data.iter().zip(angles).enumerate() {
        let slice = Emphasis::SLICE
            .at_rest(Element::new("path"))
            .attr("d", arc_path(inner_radius, radius, start, end))
            .attr("fill", palette_color(index))
            .attr("stroke", SLICE_STROKE)
            .attr("stroke-width", 1);
        center.push(surface.bind_hover(slice, &datum.tooltip_text(), Emphasis::SLICE));
    }

    surface.root.push(center);
}


/// Consecutive `(start, end)` angles proportional to each value.
///
/// Non-positive values get a zero-width slice; an all-zero total collapses every slice.
fn slice_angles(values: impl Iterator<Item = f64>) -> Vec<(f64, f64)> {
    let weights: Vec<f64> = values
        .map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 })
        .collect();
    let total: f64 = weights.iter().sum();
    let scale = if total > 0.0 { TAU / total } else { 0.0 };

    let mut start = 0.0;
    weights
        .into_iter()
        .map(|w| {
            let end = start + w * scale;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}
