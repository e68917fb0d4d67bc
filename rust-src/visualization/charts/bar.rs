use super::{CartesianFrame, ChartDatum};
use crate::visualization::geometry::{prepare_surface, render_empty_state, Margin, EMPTY_STATE_MESSAGE};
use crate::visualization::palette::palette_color;
use crate::visualization::scale::BandScale;
use crate::visualization::scene::{num, Element, Mount};
use crate::visualization::tooltip::Emphasis;


const MARGIN: Margin = Margin { top: 16.0, right: 16.0, bottom: 36.0, left: 42.0 };
const BAND_PADDING: f64 = 0.2;
const GROW_DURATION: &str = "600ms";


/// Vertical bars, one per datum, colored by position.
pub fn render_bar_chart(mount: Option<&mut Mount>, data: &[ChartDatum]) {
    let Some(mount) = mount else {
        return;
    };
    if data.is_empty() {
        render_empty_state(mount, EMPTY_STATE_MESSAGE);
        return;
    }

    let surface = prepare_surface(mount);
    let size = surface.size();
    let mut frame = CartesianFrame::new(size, MARGIN, data);
    let x = BandScale::new(data.len(), (0.0, frame.inner.width), BAND_PADDING);
    frame.push_category_axis(data, (0..data.len()).map(|i| x.center(i)));

    let baseline = frame.y.apply(0.0);
    for (index, datum) in data.iter().enumerate() {
        let end = frame.y.apply(datum.value);
        let top = end.min(baseline);
        let height = (end - baseline).abs();

        let bar = Emphasis::BAR
            .at_rest(Element::new("rect"))
            .attr("x", num(x.position(index)))
            .attr("y", num(top))
            .attr("width", num(x.bandwidth()))
            .attr("height", num(height))
            .attr("fill", palette_color(index))
            .child(grow("y", baseline, top))
            .child(grow("height", 0.0, height));

        let bar = surface.bind_hover(bar, &datum.tooltip_text(), Emphasis::BAR);
        frame.plot.push(bar);
    }

    surface.root.push(frame.plot);
}


fn grow(attribute: &str, from: f64, to: f64) -> Element {
    Element::new("animate")
        .attr("attributeName", attribute)
        .attr("from", num(from))
        .attr("to", num(to))
        .attr("dur", GROW_DURATION)
        .attr("fill", "freeze")
}
