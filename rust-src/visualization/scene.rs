//! Retained SVG scene: elements, drawing surfaces and mount points.

use std::fmt::{Display, Write};

use super::geometry::Size;
use super::tooltip::{Emphasis, HoverController, HoverTarget, PointerEvent, Tooltip};


/// Attribute that links an element to its hover target.
pub const HOVER_ATTR: &str = "data-hover";


/// A node in the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}


/// An SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}


impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, key: &'static str, value: impl Display) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, key: &'static str, value: impl Display) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Direct element children.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    /// All descendants in document order, excluding `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// Number of descendants with the given tag name.
    pub fn count(&self, name: &str) -> usize {
        self.descendants().iter().filter(|el| el.name == name).count()
    }

    /// First element (self included) matching the predicate.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children().find_map(|child| child.find(pred))
    }

    pub fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        for node in &mut self.children {
            if let Node::Element(el) = node {
                if let Some(found) = el.find_mut(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Visit every descendant mutably, excluding `self`.
    pub fn for_each_descendant_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        for node in &mut self.children {
            if let Node::Element(el) = node {
                visit(el);
                el.for_each_descendant_mut(visit);
            }
        }
    }

    /// Serialize as SVG/XML markup.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.name);
        for (key, value) in &self.attrs {
            let _ = write!(out, r#" {}="{}""#, key, escape_xml(value));
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_markup(out),
                Node::Text(text) => out.push_str(&escape_xml(text)),
            }
        }
        let _ = write!(out, "</{}>", self.name);
    }
}


/// A fresh drawing surface created for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub root: Element,
    targets: Vec<HoverTarget>,
}


impl Surface {
    pub fn new(size: Size, root: Element) -> Self {
        Self {
            width: size.width,
            height: size.height,
            root,
            targets: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Register `element` as a hover target with precomputed tooltip text.
    ///
    /// The element gets a `<title>` child so static viewers still show the text.
    pub fn bind_hover(&mut self, element: Element, text: &str, emphasis: Emphasis) -> Element {
        let index = self.targets.len();
        self.targets.push(HoverTarget {
            text: text.to_string(),
            emphasis,
        });

        element
            .attr(HOVER_ATTR, index)
            .child(Element::new("title").text(text))
    }

    pub fn targets(&self) -> &[HoverTarget] {
        &self.targets
    }

    /// The element bound to hover target `index`.
    pub fn target_element(&self, index: usize) -> Option<&Element> {
        let key = index.to_string();
        self.root.find(&|el| el.get_attr(HOVER_ATTR) == Some(key.as_str()))
    }

    /// Route a pointer event to hover target `index`. Returns false for unknown targets.
    pub fn dispatch(&mut self, index: usize, event: PointerEvent, tooltip: &mut Tooltip) -> bool {
        let Some(target) = self.targets.get(index) else {
            return false;
        };
        let key = index.to_string();
        let Some(element) = self
            .root
            .find_mut(&|el| el.get_attr(HOVER_ATTR) == Some(key.as_str()))
        else {
            return false;
        };

        match event {
            PointerEvent::Enter(pointer) => target.emphasis.on_enter(element, &target.text, pointer, tooltip),
            PointerEvent::Move(pointer) => target.emphasis.on_move(&target.text, pointer, tooltip),
            PointerEvent::Leave => target.emphasis.on_leave(element, tooltip),
        }
        true
    }
}


/// A named render target with a layout box.
///
/// Holds either a chart surface, an empty-state message, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Mount {
    id: String,
    layout: Size,
    surface: Option<Surface>,
    placeholder: Option<String>,
}


impl Mount {
    pub fn new(id: impl Into<String>, layout: Size) -> Self {
        Self {
            id: id.into(),
            layout,
            surface: None,
            placeholder: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The container's current layout box; may be zero when hidden.
    pub fn layout(&self) -> Size {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Size) {
        self.layout = layout;
    }

    /// Remove all prior content.
    pub fn clear(&mut self) {
        self.surface = None;
        self.placeholder = None;
    }

    /// Replace the content with a new surface.
    pub fn install_surface(&mut self, surface: Surface) -> &mut Surface {
        self.placeholder = None;
        self.surface.insert(surface)
    }

    /// Replace the content with an empty-state message.
    pub fn show_placeholder(&mut self, message: &str) {
        self.surface = None;
        self.placeholder = Some(message.to_string());
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn is_blank(&self) -> bool {
        self.surface.is_none() && self.placeholder.is_none()
    }

    pub fn dispatch(&mut self, target: usize, event: PointerEvent, tooltip: &mut Tooltip) -> bool {
        match self.surface.as_mut() {
            Some(surface) => surface.dispatch(target, event, tooltip),
            None => false,
        }
    }
}


/// Format a coordinate with at most three decimals.
pub fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}


/// `translate(x,y)` transform value.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", num(x), num(y))
}


/// Escape text for XML attribute values and content.
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_trims_trailing_zeros() {
        assert_eq!(num(320.0), "320");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.333");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(-4.25), "-4.25");
    }

    #[test]
    fn test_markup_serialization() {
        let svg = Element::new("g")
            .attr("transform", translate(10.0, 4.5))
            .child(Element::new("rect").attr("width", 5))
            .child(Element::new("text").text("A & B"));

        assert_eq!(
            svg.to_svg_string(),
            r#"<g transform="translate(10,4.5)"><rect width="5"/><text>A &amp; B</text></g>"#
        );
    }

    #[test]
    fn test_set_attr_replaces_value() {
        let mut el = Element::new("circle").attr("r", 3.5);
        el.set_attr("r", 5);
        assert_eq!(el.get_attr("r"), Some("5"));
        assert_eq!(el.to_svg_string(), r#"<circle r="5"/>"#);
    }

    #[test]
    fn test_descendants_and_count() {
        let mut g = Element::new("g");
        g.push(Element::new("rect"));
        g.push(Element::new("rect"));
        let mut root = Element::new("svg").child(g);
        root.push(Element::new("circle"));

        assert_eq!(root.descendants().len(), 4);
        assert_eq!(root.count("rect"), 2);
        assert_eq!(root.count("svg"), 0);
    }

    #[test]
    fn test_mount_content_is_exclusive() {
        let mut mount = Mount::new("chart", Size::new(100.0, 50.0));
        assert!(mount.is_blank());

        mount.show_placeholder("nothing");
        assert_eq!(mount.placeholder(), Some("nothing"));

        mount.install_surface(Surface::new(Size::new(100.0, 50.0), Element::new("svg")));
        assert!(mount.placeholder().is_none());
        assert!(mount.surface().is_some());

        mount.clear();
        assert!(mount.is_blank());
    }

    #[test]
    fn test_bind_hover_adds_title() {
        let mut surface = Surface::new(Size::new(10.0, 10.0), Element::new("svg"));
        let rect = surface.bind_hover(Element::new("rect"), "hello", Emphasis::BAR);
        surface.root.push(rect);

        let bound = surface.target_element(0).unwrap();
        assert_eq!(bound.get_attr(HOVER_ATTR), Some("0"));
        assert_eq!(bound.text_content(), "hello");
        assert_eq!(surface.targets().len(), 1);
        assert!(surface.target_element(1).is_none());
    }
}
