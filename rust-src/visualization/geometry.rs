//! Sizing, empty states, axes and path helpers shared by every chart.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use super::palette::{AXIS_DOMAIN, GRID_LINE, MUTED_TEXT, TEXT_COLOR};
use super::scale::LinearScale;
use super::scene::{num, translate, Element, Mount, Surface};


/// Canvas size used when a mount reports a zero layout box.
pub const FALLBACK_WIDTH: f64 = 320.0;
pub const FALLBACK_HEIGHT: f64 = 240.0;

pub const FONT_FAMILY: &str = "'Space Grotesk', sans-serif";
pub const FONT_SIZE: &str = "11px";

/// Placeholder shown when a chart has no data.
pub const EMPTY_STATE_MESSAGE: &str = "No category data.";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const EPSILON: f64 = 1e-9;


#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}


impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}


#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}


impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}


/// Space reserved around a cartesian plot for its axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}


impl Margin {
    /// Plot area left inside `size`, never negative.
    pub fn inner(&self, width: f64, height: f64) -> Size {
        Size::new(
            (width - self.left - self.right).max(0.0),
            (height - self.top - self.bottom).max(0.0),
        )
    }
}


/// Canvas size for a mount, substituting the fallback for zero dimensions.
pub fn measure(mount: &Mount) -> Size {
    let layout = mount.layout();
    let width = if layout.width > 0.0 { layout.width } else { FALLBACK_WIDTH };
    let height = if layout.height > 0.0 { layout.height } else { FALLBACK_HEIGHT };
    Size::new(width, height)
}


/// Clear the mount and install a fresh, styled SVG surface.
pub fn prepare_surface(mount: &mut Mount) -> &mut Surface {
    let size = measure(mount);
    mount.clear();
    mount.install_surface(Surface::new(size, svg_root(size)))
}


/// Clear the mount and show a centered placeholder message instead of a chart.
pub fn render_empty_state(mount: &mut Mount, message: &str) {
    mount.clear();
    mount.show_placeholder(message);
}


/// Standalone SVG for an empty-state placeholder.
pub fn placeholder_svg(size: Size, message: &str) -> Element {
    svg_root(size).child(
        Element::new("text")
            .attr("x", num(size.width / 2.0))
            .attr("y", num(size.height / 2.0))
            .attr("text-anchor", "middle")
            .attr("dominant-baseline", "middle")
            .attr("font-size", 12)
            .attr("fill", MUTED_TEXT)
            .text(message),
    )
}


fn svg_root(size: Size) -> Element {
    Element::new("svg")
        .attr("xmlns", SVG_NAMESPACE)
        .attr("width", num(size.width))
        .attr("height", num(size.height))
        .attr("viewBox", format!("0 0 {} {}", num(size.width), num(size.height)))
        .attr("preserveAspectRatio", "xMidYMid meet")
        .attr(
            "style",
            format!("font-family: {FONT_FAMILY}; font-size: {FONT_SIZE}; color: {TEXT_COLOR}"),
        )
}


/// Apply the shared axis colors to every path, line and label under `axis`.
pub fn style_axis(axis: &mut Element) {
    axis.for_each_descendant_mut(&mut |el| match el.name() {
        "path" => el.set_attr("stroke", AXIS_DOMAIN),
        "line" => el.set_attr("stroke", GRID_LINE),
        "text" => el.set_attr("fill", MUTED_TEXT),
        _ => {}
    });
}


/// Labelled vertical axis on the left edge of the plot.
pub fn axis_left(scale: &LinearScale, tick_count: usize) -> Element {
    let (r0, r1) = scale.range();
    let mut axis = Element::new("g")
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("text-anchor", "end")
        .child(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", format!("M{},{}H0V{}H{}", num(-TICK_SIZE), num(r0), num(r1), num(-TICK_SIZE))),
        );

    for tick in scale.ticks(tick_count) {
        axis.push(
            Element::new("g")
                .attr("class", "tick")
                .attr("transform", translate(0.0, scale.apply(tick)))
                .child(Element::new("line").attr("stroke", "currentColor").attr("x2", num(-TICK_SIZE)))
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", num(-(TICK_SIZE + TICK_PADDING)))
                        .attr("dy", "0.32em")
                        .text(scale.format_tick(tick_count, tick)),
                ),
        );
    }
    axis
}


/// Horizontal grid lines spanning `width`, drawn behind the marks.
pub fn grid_left(scale: &LinearScale, tick_count: usize, width: f64) -> Element {
    let mut grid = Element::new("g").attr("class", "grid");
    for tick in scale.ticks(tick_count) {
        grid.push(
            Element::new("g")
                .attr("class", "tick")
                .attr("transform", translate(0.0, scale.apply(tick)))
                .child(Element::new("line").attr("stroke", GRID_LINE).attr("x2", num(width))),
        );
    }
    grid
}


/// Categorical axis along the bottom edge, labels tilted to fit.
///
/// `ticks` holds the horizontal center and label of each category.
pub fn axis_bottom(ticks: &[(f64, &str)], width: f64, offset_y: f64) -> Element {
    let mut axis = Element::new("g")
        .attr("transform", translate(0.0, offset_y))
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("text-anchor", "middle")
        .child(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", format!("M0,{}V0H{}V{}", num(TICK_SIZE), num(width), num(TICK_SIZE))),
        );

    for (x, label) in ticks {
        axis.push(
            Element::new("g")
                .attr("class", "tick")
                .attr("transform", translate(*x, 0.0))
                .child(Element::new("line").attr("stroke", "currentColor").attr("y2", num(TICK_SIZE)))
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("y", num(TICK_SIZE + TICK_PADDING))
                        .attr("dy", "0.71em")
                        .attr("transform", "rotate(-15)")
                        .attr("style", "text-anchor: end")
                        .text(*label),
                ),
        );
    }
    axis
}


/// Dashed concentric reference rings at even fractions of `radius`.
pub fn reference_rings(radius: f64, levels: usize) -> Vec<Element> {
    (1..=levels)
        .map(|level| {
            Element::new("circle")
                .attr("r", num(radius / levels as f64 * level as f64))
                .attr("fill", "none")
                .attr("stroke", GRID_LINE)
                .attr("stroke-dasharray", "2,2")
        })
        .collect()
}


/// Point at `radius` along `angle`, measured clockwise from twelve o'clock.
pub fn polar_point(angle: f64, radius: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}


/// SVG path for an annular sector between two clockwise angles.
///
/// `inner == 0` yields a pie wedge.
pub fn arc_path(inner: f64, outer: f64, start: f64, end: f64) -> String {
    if outer <= EPSILON {
        return "M0,0Z".to_string();
    }

    let sweep = end - start;
    let mut d = String::new();

    if sweep >= TAU - EPSILON {
        // Full circle: two half arcs, the hole wound the opposite way.
        let o = num(outer);
        let _ = write!(d, "M0,{}A{o},{o},0,1,1,0,{}A{o},{o},0,1,1,0,{}", num(-outer), num(outer), num(-outer));
        if inner > EPSILON {
            let i = num(inner);
            let _ = write!(d, "M0,{}A{i},{i},0,1,0,0,{}A{i},{i},0,1,0,0,{}", num(-inner), num(inner), num(-inner));
        }
        d.push('Z');
        return d;
    }

    let large_arc = u8::from(sweep > PI);
    let o = num(outer);
    let p0 = polar_point(start, outer);
    let p1 = polar_point(end, outer);
    let _ = write!(d, "M{},{}A{o},{o},0,{large_arc},1,{},{}", num(p0.x), num(p0.y), num(p1.x), num(p1.y));

    if inner > EPSILON {
        let i = num(inner);
        let q1 = polar_point(end, inner);
        let q0 = polar_point(start, inner);
        let _ = write!(d, "L{},{}A{i},{i},0,{large_arc},0,{},{}Z", num(q1.x), num(q1.y), num(q0.x), num(q0.y));
    } else {
        d.push_str("L0,0Z");
    }
    d
}


/// Open polyline through `points`.
pub fn line_path(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{command}{},{}", num(p.x), num(p.y));
    }
    d
}


/// Closed polygon through `points`.
pub fn closed_path(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = line_path(points);
    d.push('Z');
    d
}


/// Area between a top line and a horizontal baseline.
pub fn area_path(points: &[Point], baseline: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut outline = points.to_vec();
    outline.extend(points.iter().rev().map(|p| Point::new(p.x, baseline)));
    closed_path(&outline)
}
