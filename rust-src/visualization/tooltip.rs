//! Shared hover tooltip and per-element hover controllers.

use super::geometry::Point;
use super::scene::Element;


/// Distance between the pointer and the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f64 = 12.0;


/// The dashboard-wide floating tooltip.
///
/// Created once per dashboard and lent to every hover dispatch, so at most one
/// tooltip is ever visible and a new `show` replaces the previous content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    text: String,
    position: Point,
    visible: bool,
}


impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text, move next to the pointer and make visible.
    pub fn show(&mut self, pointer: Point, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.move_to(pointer);
        self.visible = true;
    }

    /// Follow the pointer without changing the text.
    pub fn move_to(&mut self, pointer: Point) {
        self.position = Point::new(pointer.x + TOOLTIP_OFFSET, pointer.y + TOOLTIP_OFFSET);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-left corner in page coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }
}


/// Pointer input routed to a hover target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter(Point),
    Move(Point),
    Leave,
}


/// Reacts to pointer input on one chart element.
pub trait HoverController {
    fn on_enter(&self, element: &mut Element, text: &str, pointer: Point, tooltip: &mut Tooltip);
    fn on_move(&self, text: &str, pointer: Point, tooltip: &mut Tooltip);
    fn on_leave(&self, element: &mut Element, tooltip: &mut Tooltip);
}


/// Visual emphasis applied to the hovered element only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Emphasis {
    /// Dim the element (bars and slices).
    Opacity { rest: f64, hover: f64 },
    /// Grow a circle marker (line and radar points).
    Radius { rest: f64, hover: f64 },
}


impl Emphasis {
    pub const BAR: Self = Self::Opacity { rest: 1.0, hover: 0.85 };
    pub const SLICE: Self = Self::Opacity { rest: 1.0, hover: 0.85 };
    pub const LINE_MARKER: Self = Self::Radius { rest: 3.5, hover: 5.0 };
    pub const RADAR_MARKER: Self = Self::Radius { rest: 2.5, hover: 4.0 };

    /// Write the resting state onto a freshly built element.
    pub fn at_rest(self, element: Element) -> Element {
        match self {
            Self::Opacity { rest, .. } => element.attr("opacity", rest),
            Self::Radius { rest, .. } => element.attr("r", rest),
        }
    }

    fn apply(self, element: &mut Element, hovered: bool) {
        match self {
            Self::Opacity { rest, hover } => element.set_attr("opacity", if hovered { hover } else { rest }),
            Self::Radius { rest, hover } => element.set_attr("r", if hovered { hover } else { rest }),
        }
    }
}


impl HoverController for Emphasis {
    fn on_enter(&self, element: &mut Element, text: &str, pointer: Point, tooltip: &mut Tooltip) {
        self.apply(element, true);
        tooltip.show(pointer, text);
    }

    fn on_move(&self, text: &str, pointer: Point, tooltip: &mut Tooltip) {
        tooltip.show(pointer, text);
    }

    fn on_leave(&self, element: &mut Element, tooltip: &mut Tooltip) {
        self.apply(element, false);
        tooltip.hide();
    }
}


/// Hover binding for one element of a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub text: String,
    pub emphasis: Emphasis,
}
