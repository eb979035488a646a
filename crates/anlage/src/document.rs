//! In-memory binding to the externally-authored SVG diagram.
//!
//! The diagram is parsed once into an owned element tree ([`SvgDocument`]).
//! The engine addresses elements only by id, mutates nothing but class
//! lists on original elements, and keeps all annotation shapes in a
//! dedicated layer (see [`overlay`](crate::overlay)). The decorated tree
//! serializes back to SVG text for export.
//!
//! Attributes in foreign namespaces (editor metadata such as `inkscape:*`
//! or `sodipodi:*`) are dropped during parsing; the annotated output is a
//! plain SVG document.

mod bounds;

use std::collections::BTreeMap;

use log::debug;
use svg::Node;

use anlage_core::geometry::Rect;

use crate::error::AnlageError;

/// The SVG namespace, re-declared on the serialized root element.
const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A single element of the diagram tree: tag name, attributes, optional
/// text content, and child elements.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Element {
    pub(crate) name: String,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) text: Option<String>,
    pub(crate) children: Vec<Element>,
}

impl Element {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub(crate) fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub(crate) fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Adds `class` to the class list. Adding an already-present class is
    /// a no-op, so the marker stays binary.
    pub(crate) fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let value = match self.attr("class") {
            Some(existing) => format!("{existing} {class}"),
            None => class.to_string(),
        };
        self.set_attr("class", value);
    }

    /// Removes `class` from the class list, dropping the attribute when it
    /// becomes empty. Removing an absent class is a no-op.
    pub(crate) fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        let remaining = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        if remaining.is_empty() {
            self.attrs.remove("class");
        } else {
            self.set_attr("class", remaining);
        }
    }
}

/// The engine's view of the externally-owned diagram document.
///
/// The document may be unavailable for as long as the caller likes; all
/// engine operations requiring it degrade to logged no-ops until a parsed
/// document is bound (see [`Viewer::bind_diagram`](crate::Viewer::bind_diagram)).
///
/// # Examples
///
/// ```
/// use anlage::SvgDocument;
///
/// let doc = SvgDocument::parse(
///     r#"<svg xmlns="http://www.w3.org/2000/svg">
///            <g id="testes"><rect x="10" y="10" width="80" height="30"/></g>
///        </svg>"#,
/// )
/// .expect("valid SVG");
///
/// assert!(doc.contains("testes"));
/// let bounds = doc.bounds("testes").unwrap();
/// assert_eq!(bounds.width(), 80.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    root: Element,
}

impl SvgDocument {
    /// Parses SVG text into an owned document tree.
    ///
    /// # Errors
    ///
    /// Returns [`AnlageError::Parse`] for malformed XML and
    /// [`AnlageError::NotSvg`] when the root element is not `<svg>`.
    pub fn parse(source: &str) -> Result<Self, AnlageError> {
        let parsed = roxmltree::Document::parse(source)?;
        let root_node = parsed.root_element();
        if root_node.tag_name().name() != "svg" {
            return Err(AnlageError::NotSvg(root_node.tag_name().name().to_string()));
        }
        let mut root = build_element(root_node);
        // Namespace declarations are not carried through as attributes.
        root.set_attr("xmlns", SVG_NS);
        Ok(Self { root })
    }

    /// Returns true if an element with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Returns true if the element exists and carries the given class.
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.find(id).is_some_and(|el| el.has_class(class))
    }

    /// Adds a class to the element's class list (idempotent).
    ///
    /// Returns false when no element with the given id exists; absence is
    /// a tolerated runtime condition, never an error.
    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.find_mut(id) {
            Some(el) => {
                el.add_class(class);
                true
            }
            None => false,
        }
    }

    /// Removes a class from the element's class list (idempotent).
    ///
    /// Returns false when no element with the given id exists.
    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        match self.find_mut(id) {
            Some(el) => {
                el.remove_class(class);
                true
            }
            None => false,
        }
    }

    /// Computes the bounding geometry of the element's primary shape.
    ///
    /// The primary shape is the first drawable primitive (`rect`, `path`,
    /// `polygon`, `ellipse`) inside the element in document order, falling
    /// back to the union of the element's own drawable geometry when none
    /// is found. Ancestor `translate(..)` transforms are accumulated;
    /// other transform components are skipped with a debug log.
    ///
    /// Returns `None` when the element is absent or carries no measurable
    /// geometry.
    pub fn bounds(&self, id: &str) -> Option<Rect> {
        bounds::element_bounds(&self.root, id)
    }

    /// Serializes the document (including any annotations) to SVG text.
    pub fn to_svg_string(&self) -> String {
        to_svg_node(&self.root).to_string()
    }

    pub(crate) fn find(&self, id: &str) -> Option<&Element> {
        find_in(&self.root, id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_in_mut(&mut self.root, id)
    }

    pub(crate) fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}

fn find_in<'a>(el: &'a Element, id: &str) -> Option<&'a Element> {
    if el.id() == Some(id) {
        return Some(el);
    }
    el.children.iter().find_map(|child| find_in(child, id))
}

fn find_in_mut<'a>(el: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if el.id() == Some(id) {
        return Some(el);
    }
    el.children
        .iter_mut()
        .find_map(|child| find_in_mut(child, id))
}

fn build_element(node: roxmltree::Node<'_, '_>) -> Element {
    let mut el = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        if attr.namespace().is_none() {
            el.set_attr(attr.name(), attr.value());
        } else {
            debug!(attribute = attr.name(); "Dropping foreign-namespace attribute");
        }
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            el.children.push(build_element(child));
        } else if let Some(t) = child.text() {
            text.push_str(t);
        }
    }
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        el.text = Some(trimmed.to_string());
    }
    el
}

fn to_svg_node(el: &Element) -> svg::node::element::Element {
    let mut node = svg::node::element::Element::new(el.name.clone());
    for (name, value) in &el.attrs {
        node.assign(name.clone(), value.clone());
    }
    if let Some(text) = &el.text {
        node.append(svg::node::Text::new(escape_text(text)));
    }
    for child in &el.children {
        node.append(to_svg_node(child));
    }
    node
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
