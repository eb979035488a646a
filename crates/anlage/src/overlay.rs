//! Overlay rendering: annotation shapes layered above the diagram.
//!
//! All annotations live in a single dedicated `<g>` layer appended after
//! the diagram's original content, so they render on top without touching
//! any original element. Each overlay is a rounded rectangle tagged with
//! the id of the element it decorates via a `data-target` attribute; the
//! invariant is at most one overlay per target. Resetting the visual state
//! is then just clearing the layer, which cannot drift from the diagram's
//! true original markup.
//!
//! Overlay styling (and the suppression style applied by the effect
//! engine) comes from a stylesheet injected once into the document when
//! the diagram is bound. `pointer-events: none` keeps overlays from
//! intercepting input meant for the elements below them.

use log::{debug, warn};

use anlage_core::effect::AnnotationStyle;

use crate::document::{Element, SvgDocument};

/// Id of the dedicated overlay layer group.
pub(crate) const OVERLAY_LAYER_ID: &str = "effect-overlays";

/// Id of the injected stylesheet element, used as the rebinding guard.
pub(crate) const STYLE_BLOCK_ID: &str = "effect-styles";

/// Class marking a suppressed ("blocked/absent") original element.
pub(crate) const SUPPRESSED_CLASS: &str = "blocked";

/// Margin added on all sides of a target's bounds for a tight outline.
const OVERLAY_PADDING: f32 = 3.0;

const TARGET_ATTR: &str = "data-target";

/// CSS for the suppression marker and the two overlay styles. Exact colors
/// are a presentation choice, not part of the engine contract.
const STYLESHEET: &str = "
    /* blocked = almost gone, greyed out in place */
    .blocked {
      opacity: 0.08;
      filter: grayscale(1);
    }

    /* overlays live in their own layer and never alter original elements */
    .highlight-overlay {
      fill: #ffb0fae9;
      fill-opacity: 0.6;
      stroke: #ff00f2ff;
      stroke-width: 3;
      rx: 4;
      ry: 4;
      pointer-events: none;
    }

    .upregulated-overlay {
      fill: #ede0ffff;
      fill-opacity: 0.6;
      stroke: #582fd3ff;
      stroke-width: 3;
      rx: 4;
      ry: 4;
      pointer-events: none;
    }
";

/// Injects the effect stylesheet into the document. Idempotent: rebinding
/// a document that already carries the style block changes nothing.
pub(crate) fn ensure_stylesheet(document: &mut SvgDocument) {
    if document.contains(STYLE_BLOCK_ID) {
        debug!("Stylesheet already present, skipping injection");
        return;
    }
    let mut style = Element::new("style");
    style.set_attr("id", STYLE_BLOCK_ID);
    style.text = Some(STYLESHEET.to_string());
    document.root_mut().children.push(style);
}

/// Creates the overlay layer on first use; later calls find the existing
/// layer. Must run before any overlay mutation.
pub(crate) fn ensure_layer(document: &mut SvgDocument) {
    if document.contains(OVERLAY_LAYER_ID) {
        return;
    }
    let mut layer = Element::new("g");
    layer.set_attr("id", OVERLAY_LAYER_ID);
    document.root_mut().children.push(layer);
}

/// Removes any overlay tagged with the target's id. No-op if none exists.
pub(crate) fn clear_overlays_for(document: &mut SvgDocument, target_id: &str) {
    if let Some(layer) = document.find_mut(OVERLAY_LAYER_ID) {
        layer
            .children
            .retain(|overlay| overlay.attr(TARGET_ATTR) != Some(target_id));
    }
}

/// Adds an overlay of the given style above the target element, replacing
/// any prior overlay for the same target.
///
/// Returns false (with a warning) when the target has no measurable
/// geometry; the caller continues with its remaining targets.
pub(crate) fn add_overlay(
    document: &mut SvgDocument,
    target_id: &str,
    style: AnnotationStyle,
) -> bool {
    let Some(bounds) = document.bounds(target_id) else {
        warn!(id = target_id; "No measurable geometry for overlay target");
        return false;
    };
    let bounds = bounds.padded(OVERLAY_PADDING);

    ensure_layer(document);
    clear_overlays_for(document, target_id);

    let mut overlay = Element::new("rect");
    overlay.set_attr("x", bounds.x().to_string());
    overlay.set_attr("y", bounds.y().to_string());
    overlay.set_attr("width", bounds.width().to_string());
    overlay.set_attr("height", bounds.height().to_string());
    overlay.set_attr("class", style.css_class());
    overlay.set_attr(TARGET_ATTR, target_id);

    if let Some(layer) = document.find_mut(OVERLAY_LAYER_ID) {
        layer.children.push(overlay);
        true
    } else {
        // ensure_layer above guarantees the layer exists
        false
    }
}

/// Removes every overlay unconditionally. Start of every apply cycle.
pub(crate) fn clear_all(document: &mut SvgDocument) {
    if let Some(layer) = document.find_mut(OVERLAY_LAYER_ID) {
        layer.children.clear();
    }
}

/// Returns the style of the overlay currently decorating the target, if any.
pub(crate) fn style_for(document: &SvgDocument, target_id: &str) -> Option<AnnotationStyle> {
    let layer = document.find(OVERLAY_LAYER_ID)?;
    layer
        .children
        .iter()
        .rev()
        .find(|overlay| overlay.attr(TARGET_ATTR) == Some(target_id))
        .and_then(|overlay| AnnotationStyle::from_css_class(overlay.attr("class")?))
}

/// Returns the total number of overlays in the layer.
pub(crate) fn overlay_count(document: &SvgDocument) -> usize {
    document
        .find(OVERLAY_LAYER_ID)
        .map_or(0, |layer| layer.children.len())
}
