//! Effect interpretation against a bound diagram document.
//!
//! Suppression mutates the original element in place (a class on its class
//! list) so the pathway reads as gone; annotation never touches the
//! original and goes through the overlay layer instead. Keep the asymmetry:
//! a suppressed element must look absent, not decorated.

use log::warn;

use anlage_core::effect::{Effect, EffectKind};
use anlage_core::registry::NodeRegistry;

use crate::document::SvgDocument;
use crate::overlay::{self, SUPPRESSED_CLASS};

/// Applies one effect to the document.
///
/// Each target is resolved through the registry (unknown names pass
/// through as raw ids) and then looked up in the document. Targets with
/// no live element are skipped with a warning; they never abort the
/// remaining targets or effects.
pub(crate) fn apply_effect(
    registry: &NodeRegistry,
    document: &mut SvgDocument,
    effect: &Effect,
) {
    match effect.kind() {
        EffectKind::Suppress => {
            for target in effect.targets() {
                let id = registry.resolve(target);
                if !document.add_class(id, SUPPRESSED_CLASS) {
                    warn!(entity = target, id = id; "No diagram element for suppression target");
                }
            }
        }
        EffectKind::Annotate(style) => {
            for target in effect.targets() {
                let id = registry.resolve(target);
                if !document.contains(id) {
                    warn!(entity = target, id = id; "No diagram element for annotation target");
                    continue;
                }
                overlay::add_overlay(document, id, style);
            }
        }
    }
}

/// Clears every suppression marker the engine could have set and removes
/// all overlays. The sole state-clearing path; runs before any new
/// disorder is applied so effects never accumulate across selections.
pub(crate) fn reset_all(registry: &NodeRegistry, document: &mut SvgDocument) {
    for id in registry.element_ids() {
        document.remove_class(id, SUPPRESSED_CLASS);
    }
    overlay::clear_all(document);
}

#[cfg(test)]
mod tests {
    use anlage_core::effect::AnnotationStyle;

    use super::*;

    fn sample() -> SvgDocument {
        SvgDocument::parse(concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg">"#,
            r#"<g id="testes"><rect x="0" y="0" width="40" height="20"/></g>"#,
            r#"<g id="dht"><rect x="0" y="30" width="40" height="20"/></g>"#,
            r#"<g id="raw_node"><rect x="0" y="60" width="40" height="20"/></g>"#,
            r#"</svg>"#,
        ))
        .unwrap()
    }

    #[test]
    fn test_suppress_marks_resolved_targets() {
        let registry = NodeRegistry::builtin();
        let mut doc = sample();
        apply_effect(&registry, &mut doc, &Effect::suppress(["TESTES", "DHT"]));
        assert!(doc.has_class("testes", SUPPRESSED_CLASS));
        assert!(doc.has_class("dht", SUPPRESSED_CLASS));
    }

    #[test]
    fn test_suppress_twice_leaves_single_marker() {
        let registry = NodeRegistry::builtin();
        let mut doc = sample();
        apply_effect(&registry, &mut doc, &Effect::suppress(["DHT"]));
        apply_effect(&registry, &mut doc, &Effect::suppress(["DHT"]));
        assert_eq!(doc.find("dht").unwrap().attr("class"), Some(SUPPRESSED_CLASS));
    }

    #[test]
    fn test_raw_id_escape_hatch() {
        let registry = NodeRegistry::builtin();
        let mut doc = sample();
        apply_effect(&registry, &mut doc, &Effect::emphasize(["raw_node"]));
        assert_eq!(
            overlay::style_for(&doc, "raw_node"),
            Some(AnnotationStyle::Emphasize)
        );
    }

    #[test]
    fn test_unresolvable_target_does_not_abort_the_rest() {
        let registry = NodeRegistry::builtin();
        let mut doc = sample();
        // OVARIES resolves but has no element; TESTES must still apply.
        apply_effect(
            &registry,
            &mut doc,
            &Effect::emphasize(["OVARIES", "TESTES"]),
        );
        assert_eq!(overlay::style_for(&doc, "ovaries"), None);
        assert_eq!(
            overlay::style_for(&doc, "testes"),
            Some(AnnotationStyle::Emphasize)
        );
    }

    #[test]
    fn test_reset_all_clears_markers_and_overlays() {
        let registry = NodeRegistry::builtin();
        let mut doc = sample();
        apply_effect(&registry, &mut doc, &Effect::suppress(["TESTES"]));
        apply_effect(&registry, &mut doc, &Effect::elevate(["DHT"]));

        reset_all(&registry, &mut doc);
        assert!(!doc.has_class("testes", SUPPRESSED_CLASS));
        assert_eq!(overlay::overlay_count(&doc), 0);
    }

    #[test]
    fn test_reset_all_is_idempotent() {
        let registry = NodeRegistry::builtin();
        let mut doc = sample();
        reset_all(&registry, &mut doc);
        let first = doc.clone();
        reset_all(&registry, &mut doc);
        assert_eq!(doc, first);
    }
}
