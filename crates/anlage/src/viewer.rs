//! Reset/apply orchestration over the catalog, registry, and diagram.

use log::{debug, info};

use anlage_core::catalog::{BASELINE_KEY, Catalog};
use anlage_core::effect::AnnotationStyle;
use anlage_core::registry::NodeRegistry;

use crate::document::SvgDocument;
use crate::engine;
use crate::overlay::{self, SUPPRESSED_CLASS};
use crate::panel::PanelUpdate;

/// Orchestrates disorder selection against an optionally-bound diagram.
///
/// The viewer has two observable states: diagram unbound and diagram
/// bound, with a single transition when [`bind_diagram`](Self::bind_diagram)
/// is called. While unbound, [`select_disorder`](Self::select_disorder)
/// only produces the text-panel payload; once bound it additionally runs
/// the full visual cycle. Every cycle starts from a clean reset, so
/// re-applying or switching disorders never accumulates state.
///
/// # Examples
///
/// ```
/// use anlage::{SvgDocument, Viewer};
///
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
///     <g id="testes"><rect x="0" y="0" width="40" height="20"/></g>
/// </svg>"#;
///
/// let mut viewer = Viewer::new();
///
/// // Text updates work before the diagram is available.
/// let panel = viewer.select_disorder("AIS");
/// assert_eq!(panel.title(), "Androgen insensitivity syndrome (AIS)");
///
/// // Binding re-applies the current selection to the diagram.
/// viewer.bind_diagram(SvgDocument::parse(svg).unwrap());
/// assert!(viewer.overlay_style_for("TESTES").is_some());
/// ```
#[derive(Debug)]
pub struct Viewer {
    registry: NodeRegistry,
    catalog: Catalog,
    document: Option<SvgDocument>,
    selected: String,
}

impl Viewer {
    /// Creates a viewer over the built-in registry and catalog, with no
    /// diagram bound and the baseline entry selected.
    pub fn new() -> Self {
        Self::with_tables(NodeRegistry::builtin(), Catalog::builtin())
    }

    /// Creates a viewer over custom tables. Useful for diagrams with a
    /// different id scheme or a reduced teaching catalog.
    pub fn with_tables(registry: NodeRegistry, catalog: Catalog) -> Self {
        Self {
            registry,
            catalog,
            document: None,
            selected: BASELINE_KEY.to_string(),
        }
    }

    /// Returns true once a diagram document has been bound.
    pub fn is_bound(&self) -> bool {
        self.document.is_some()
    }

    /// Returns the currently selected disorder key.
    pub fn selected_key(&self) -> &str {
        &self.selected
    }

    /// Binds the diagram document and performs one-time setup (stylesheet
    /// and overlay-layer injection, both idempotent).
    ///
    /// The currently selected disorder is re-applied immediately so the
    /// diagram is never out of sync with the already-displayed text.
    /// Binding again simply replaces the document.
    pub fn bind_diagram(&mut self, mut document: SvgDocument) {
        overlay::ensure_stylesheet(&mut document);
        overlay::ensure_layer(&mut document);
        self.document = Some(document);
        info!(selected = self.selected; "Diagram bound");
        self.apply_selected();
    }

    /// Selects a disorder and returns the text-panel payload.
    ///
    /// Unknown keys fall back to the baseline "no disorder" entry. The
    /// text payload is produced unconditionally; the visual cycle runs
    /// only when a diagram is bound. This partial completion while
    /// unbound is expected, not an error.
    pub fn select_disorder(&mut self, key: &str) -> PanelUpdate {
        self.selected = key.to_string();
        let panel = PanelUpdate::for_disorder(self.catalog.lookup(key));
        self.apply_selected();
        panel
    }

    /// Returns the bound document, if any.
    pub fn document(&self) -> Option<&SvgDocument> {
        self.document.as_ref()
    }

    /// Serializes the annotated diagram, or `None` while unbound.
    pub fn render_svg(&self) -> Option<String> {
        self.document.as_ref().map(SvgDocument::to_svg_string)
    }

    /// Returns true if the entity (logical name or raw id) currently
    /// carries the suppression marker.
    pub fn is_suppressed(&self, key: &str) -> bool {
        let id = self.registry.resolve(key);
        self.document
            .as_ref()
            .is_some_and(|doc| doc.has_class(id, SUPPRESSED_CLASS))
    }

    /// Returns the style of the overlay currently decorating the entity,
    /// if any.
    pub fn overlay_style_for(&self, key: &str) -> Option<AnnotationStyle> {
        let id = self.registry.resolve(key);
        overlay::style_for(self.document.as_ref()?, id)
    }

    /// Returns the total number of overlays on the diagram.
    pub fn overlay_count(&self) -> usize {
        self.document
            .as_ref()
            .map_or(0, |doc| overlay::overlay_count(doc))
    }

    /// Runs the full visual cycle for the current selection: reset, then
    /// apply every effect in declared order. No-op while unbound.
    fn apply_selected(&mut self) {
        let Some(document) = self.document.as_mut() else {
            debug!(selected = self.selected; "Diagram not bound, text-only update");
            return;
        };
        let disorder = self.catalog.lookup(&self.selected);

        engine::reset_all(&self.registry, document);
        for effect in disorder.effects() {
            engine::apply_effect(&self.registry, document, effect);
        }
        info!(
            selected = self.selected,
            effects = disorder.effects().len();
            "Applied disorder to diagram"
        );
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg">"#,
        r#"<g id="testes"><rect x="0" y="0" width="40" height="20"/></g>"#,
        r#"<g id="dht"><rect x="0" y="30" width="40" height="20"/></g>"#,
        r#"</svg>"#,
    );

    #[test]
    fn test_starts_unbound_on_baseline() {
        let viewer = Viewer::new();
        assert!(!viewer.is_bound());
        assert_eq!(viewer.selected_key(), BASELINE_KEY);
        assert_eq!(viewer.render_svg(), None);
    }

    #[test]
    fn test_select_while_unbound_is_text_only() {
        let mut viewer = Viewer::new();
        let panel = viewer.select_disorder("CAH");
        assert!(panel.title().contains("adrenal hyperplasia"));
        assert_eq!(viewer.selected_key(), "CAH");
        assert_eq!(viewer.overlay_count(), 0);
        assert!(!viewer.is_suppressed("CORTISOL"));
    }

    #[test]
    fn test_bind_reapplies_current_selection() {
        let mut viewer = Viewer::new();
        viewer.select_disorder("AIS");
        viewer.bind_diagram(SvgDocument::parse(SVG).unwrap());

        // AIS emphasizes TESTES and DHT among others; both exist here.
        assert!(viewer.overlay_style_for("TESTES").is_some());
        assert!(viewer.overlay_style_for("DHT").is_some());
    }

    #[test]
    fn test_rebinding_does_not_duplicate_setup() {
        let mut viewer = Viewer::new();
        viewer.bind_diagram(SvgDocument::parse(SVG).unwrap());
        viewer.bind_diagram(SvgDocument::parse(SVG).unwrap());
        let out = viewer.render_svg().unwrap();
        assert_eq!(out.matches("effect-styles").count(), 1);
        assert_eq!(out.matches("effect-overlays").count(), 1);
    }

    #[test]
    fn test_unknown_key_selects_baseline_visuals() {
        let mut viewer = Viewer::new();
        viewer.bind_diagram(SvgDocument::parse(SVG).unwrap());
        viewer.select_disorder("AIS");
        let panel = viewer.select_disorder("not-a-real-key");
        assert_eq!(panel.title(), "Normal development");
        assert_eq!(viewer.overlay_count(), 0);
        assert!(!viewer.is_suppressed("DHT"));
    }
}
