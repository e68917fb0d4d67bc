use std::f64::consts::TAU;

use super::ChartDatum;
use crate::visualization::geometry::{
    arc_path, prepare_surface, reference_rings, render_empty_state, EMPTY_STATE_MESSAGE,
};
use crate::visualization::palette::{palette_color, SLICE_STROKE};
use crate::visualization::scale::{radial_domain, LinearScale};
use crate::visualization::scene::{translate, Element, Mount};
use crate::visualization::tooltip::Emphasis;


const RADIUS_INSET: f64 = 12.0;
const RING_LEVELS: usize = 3;


/// Equal-angle wedges whose radius encodes the value.
pub fn render_polar_area_chart(mount: Option<&mut Mount>, data: &[ChartDatum]) {
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
    let r = LinearScale::new(radial_domain(data.iter().map(|d| d.value)), (0.0, radius));

    let mut center = Element::new("g").attr("transform", translate(size.width / 2.0, size.height / 2.0));
    for ring in reference_rings(radius, RING_LEVELS) {
        center.push(ring);
    }

    let step = TAU / data.len() as f64;
    for (index, datum) in data.iter().enumerate() {
        let start = step * index as f64;
        let outer = if datum.value.is_finite() { r.apply(datum.value).max(0.0) } else { 0.0 };

        let wedge = Emphasis::SLICE
            .at_rest(Element::new("path"))
            .attr("d", arc_path(0.0, outer, start, start + step))
            .attr("fill", palette_color(index))
            .attr("stroke", SLICE_STROKE)
            .attr("stroke-width", 1);
        center.push(surface.bind_hover(wedge, &datum.tooltip_text(), Emphasis::SLICE));
    }

    surface.root.push(center);
}
