use std::f64::consts::TAU;

use crate::visualization::geometry::{
    closed_path, polar_point, prepare_surface, reference_rings, render_empty_state, Point,
    EMPTY_STATE_MESSAGE,
};
use crate::visualization::palette::{AXIS_DOMAIN, MUTED_TEXT};
use crate::visualization::scale::{radial_domain, LinearScale};
use crate::visualization::scene::{num, translate, Element, Mount};
use crate::visualization::tooltip::Emphasis;


const RADIUS_INSET: f64 = 28.0;
const RING_LEVELS: usize = 4;
const LABEL_GAP: f64 = 12.0;
const LEGEND_ORIGIN: (f64, f64) = (12.0, 12.0);
const LEGEND_SWATCH: f64 = 10.0;
const LEGEND_ROW: f64 = 14.0;


/// One named polygon on a radar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub name: String,
    /// One value per axis, in axis order.
    pub values: Vec<f64>,
    pub stroke: String,
    pub fill: String,
}


impl RadarSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>, stroke: &str, fill: &str) -> Self {
        Self {
            name: name.into(),
            values,
            stroke: stroke.to_string(),
            fill: fill.to_string(),
        }
    }

    fn value_at(&self, axis: usize) -> f64 {
        self.values
            .get(axis)
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}


/// Axis labels, series and per-axis hover text for a radar chart.
///
/// `tooltips[i]` describes axis `i` and is shared by every series' marker on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarData {
    pub labels: Vec<String>,
    pub series: Vec<RadarSeries>,
    pub tooltips: Vec<String>,
}


impl RadarData {
    fn tooltip(&self, axis: usize) -> &str {
        self.tooltips
            .get(axis)
            .or_else(|| self.labels.get(axis))
            .map(String::as_str)
            .unwrap_or_default()
    }
}


/// Radar chart: one spoke per label, first at twelve o'clock and running clockwise.
pub fn render_radar_chart(mount: Option<&mut Mount>, data: &RadarData) {
    let Some(mount) = mount else {
        return;
    };
    if data.labels.is_empty() {
        render_empty_state(mount, EMPTY_STATE_MESSAGE);
        return;
    }

    let surface = prepare_surface(mount);
    let size = surface.size();
    let radius = (size.width.min(size.height) / 2.0 - RADIUS_INSET).max(0.0);
    let axes = data.labels.len();
    let step = TAU / axes as f64;

    let all_values = data
        .series
        .iter()
        .flat_map(|s| (0..axes).map(move |i| s.value_at(i)));
    let r = LinearScale::new(radial_domain(all_values), (0.0, radius));

    surface.root.push(legend(&data.series));

    let mut center = Element::new("g").attr("transform", translate(size.width / 2.0, size.height / 2.0));
    for ring in reference_rings(radius, RING_LEVELS) {
        center.push(ring);
    }

    for (axis, label) in data.labels.iter().enumerate() {
        let tip = polar_point(step * axis as f64, radius);
        let anchor = polar_point(step * axis as f64, radius + LABEL_GAP);
        center.push(
            Element::new("line")
                .attr("x1", 0)
                .attr("y1", 0)
                .attr("x2", num(tip.x))
                .attr("y2", num(tip.y))
                .attr("stroke", AXIS_DOMAIN),
        );
        center.push(
            Element::new("text")
                .attr("x", num(anchor.x))
                .attr("y", num(anchor.y))
                .attr("text-anchor", "middle")
                .attr("dominant-baseline", "middle")
                .attr("font-size", 10)
                .attr("fill", MUTED_TEXT)
                .text(label.as_str()),
        );
    }

    for series in &data.series {
        let points: Vec<Point> = (0..axes)
            .map(|axis| polar_point(step * axis as f64, r.apply(series.value_at(axis)).max(0.0)))
            .collect();

        center.push(
            Element::new("path")
                .attr("d", closed_path(&points))
                .attr("fill", &series.fill)
                .attr("stroke", &series.stroke)
                .attr("stroke-width", 2)
                .attr("opacity", 0.9),
        );

        for (axis, point) in points.iter().enumerate() {
            let marker = Emphasis::RADAR_MARKER
                .at_rest(Element::new("circle"))
                .attr("cx", num(point.x))
                .attr("cy", num(point.y))
                .attr("fill", &series.stroke);
            center.push(surface.bind_hover(marker, data.tooltip(axis), Emphasis::RADAR_MARKER));
        }
    }

    surface.root.push(center);
}


fn legend(series: &[RadarSeries]) -> Element {
    let mut legend = Element::new("g").attr("transform", translate(LEGEND_ORIGIN.0, LEGEND_ORIGIN.1));
    for (row, s) in series.iter().enumerate() {
        legend.push(
            Element::new("g")
                .attr("transform", translate(0.0, row as f64 * LEGEND_ROW))
                .child(
                    Element::new("rect")
                        .attr("width", LEGEND_SWATCH)
                        .attr("height", LEGEND_SWATCH)
                        .attr("fill", &s.stroke),
                )
                .child(
                    Element::new("text")
                        .attr("x", LEGEND_ROW)
                        .attr("y", LEGEND_SWATCH - 1.0)
                        .attr("fill", MUTED_TEXT)
                        .text(s.name.as_str()),
                ),
        );
    }
    legend
}
