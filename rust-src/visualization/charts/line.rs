use super::{CartesianFrame, ChartDatum};
use crate::visualization::geometry::{
    area_path, line_path, prepare_surface, render_empty_state, Margin, Point, EMPTY_STATE_MESSAGE,
};
use crate::visualization::palette::{ACCENT, ACCENT_AREA};
use crate::visualization::scale::PointScale;
use crate::visualization::scene::{num, Element, Mount};
use crate::visualization::tooltip::Emphasis;


const MARGIN: Margin = Margin { top: 16.0, right: 24.0, bottom: 36.0, left: 42.0 };
const POINT_PADDING: f64 = 0.5;


/// Filled line through one point per datum, with a hoverable marker on each point.
pub fn render_line_chart(mount: Option<&mut Mount>, data: &[ChartDatum]) {
    let Some(mount) = mount else {
        return;
    };
    if data.is_empty() {
        render_empty_state(mount, EMPTY_STATE_MESSAGE);
        return;
    }

    let surface = prepare_surface(mount);
    let mut frame = CartesianFrame::new(surface.size(), MARGIN, data);
    let x = PointScale::new(data.len(), (0.0, frame.inner.width), POINT_PADDING);
    frame.push_category_axis(data, (0..data.len()).map(|i| x.position(i)));

    let points: Vec<Point> = data
        .iter()
        .enumerate()
        .map(|(i, d)| Point::new(x.position(i), frame.y.apply(d.value)))
        .collect();

    frame.plot.push(
        Element::new("path")
            .attr("fill", ACCENT_AREA)
            .attr("d", area_path(&points, frame.inner.height)),
    );
    frame.plot.push(
        Element::new("path")
            .attr("fill", "none")
            .attr("stroke", ACCENT)
            .attr("stroke-width", 2)
            .attr("d", line_path(&points)),
    );

    for (point, datum) in points.iter().zip(data) {
        let marker = Emphasis::LINE_MARKER
            .at_rest(Element::new("circle"))
            .attr("cx", num(point.x))
            .attr("cy", num(point.y))
            .attr("fill", ACCENT);
        let marker = surface.bind_hover(marker, &datum.tooltip_text(), Emphasis::LINE_MARKER);
        frame.plot.push(marker);
    }

    surface.root.push(frame.plot);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::geometry::Size;
    use crate::visualization::tooltip::{PointerEvent, Tooltip};

    fn sample() -> Vec<ChartDatum> {
        vec![ChartDatum::new("A", 15.0), ChartDatum::new("B", 5.0)]
    }

    #[test]
    fn test_empty_data_shows_placeholder() {
        let mut mount = Mount::new("line", Size::new(400.0, 300.0));
        render_line_chart(Some(&mut mount), &[]);
        assert_eq!(mount.placeholder(), Some(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn test_area_line_and_markers() {
        let mut mount = Mount::new("line", Size::new(400.0, 300.0));
        render_line_chart(Some(&mut mount), &sample());

        let surface = mount.surface().unwrap();
        assert_eq!(surface.root.count("circle"), 2);
        assert_eq!(surface.targets().len(), 2);

        let area = surface
            .root
            .find(&|el| el.get_attr("fill") == Some(ACCENT_AREA))
            .unwrap();
        assert!(area.get_attr("d").unwrap().ends_with('Z'));

        let line = surface
            .root
            .find(&|el| el.name() == "path" && el.get_attr("stroke") == Some(ACCENT))
            .unwrap();
        assert_eq!(line.get_attr("stroke-width"), Some("2"));
    }

    #[test]
    fn test_points_are_evenly_padded() {
        let mut mount = Mount::new("line", Size::new(400.0, 300.0));
        render_line_chart(Some(&mut mount), &sample());

        // Plot width 400 - 42 - 24 = 334, two points with half-step outer padding.
        let surface = mount.surface().unwrap();
        let first = surface.target_element(0).unwrap();
        let second = surface.target_element(1).unwrap();
        assert_eq!(first.get_attr("cx"), Some("83.5"));
        assert_eq!(second.get_attr("cx"), Some("250.5"));
    }

    #[test]
    fn test_marker_grows_on_hover() {
        let mut mount = Mount::new("line", Size::new(400.0, 300.0));
        let mut tooltip = Tooltip::new();
        render_line_chart(Some(&mut mount), &sample());

        mount.dispatch(0, PointerEvent::Enter(Point::new(0.0, 0.0)), &mut tooltip);
        assert_eq!(mount.surface().unwrap().target_element(0).unwrap().get_attr("r"), Some("5"));
        assert_eq!(tooltip.text(), "A: 15");

        mount.dispatch(0, PointerEvent::Leave, &mut tooltip);
        assert_eq!(mount.surface().unwrap().target_element(0).unwrap().get_attr("r"), Some("3.5"));
    }
}
