//! Integration tests for the Viewer API.
//!
//! These exercise the full select/bind cycle against a diagram that
//! carries every element id the built-in registry knows about.

use anlage::registry::NodeRegistry;
use anlage::{SvgDocument, Viewer};
use anlage_core::effect::AnnotationStyle;

/// Builds a diagram with one group per registered element id.
fn full_diagram() -> SvgDocument {
    let registry = NodeRegistry::builtin();
    let mut body = String::new();
    for (i, id) in registry.element_ids().enumerate() {
        let y = 10 + i * 30;
        body.push_str(&format!(
            r#"<g id="{id}"><rect x="10" y="{y}" width="120" height="24"/><text x="16" y="{}">{id}</text></g>"#,
            y + 16
        ));
    }
    SvgDocument::parse(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="900">{body}</svg>"#
    ))
    .expect("generated diagram is valid SVG")
}

fn bound_viewer() -> Viewer {
    let mut viewer = Viewer::new();
    viewer.bind_diagram(full_diagram());
    viewer
}

#[test]
fn test_ais_scenario() {
    let mut viewer = bound_viewer();
    viewer.select_disorder("AIS");

    let suppressed = ["WOLFFIAN", "MALE_TRACT", "MALE_EXTERNAL"];
    let emphasized = [
        "TESTES",
        "LEYDIG",
        "TESTOSTERONE",
        "DHT",
        "SERTOLI",
        "MIH",
        "MULLERIAN_SUPPRESS",
        "NO_FEMALE_TRACT",
    ];

    for key in suppressed {
        assert!(viewer.is_suppressed(key), "{key} should be suppressed");
        assert_eq!(viewer.overlay_style_for(key), None);
    }
    for key in emphasized {
        assert_eq!(
            viewer.overlay_style_for(key),
            Some(AnnotationStyle::Emphasize),
            "{key} should carry an emphasize overlay"
        );
        assert!(!viewer.is_suppressed(key));
    }
    assert_eq!(viewer.overlay_count(), emphasized.len());

    // Every other known element carries neither marker nor overlay.
    let registry = NodeRegistry::builtin();
    let touched: Vec<&str> = suppressed
        .iter()
        .chain(emphasized.iter())
        .map(|key| registry.resolve(key))
        .collect();
    for id in registry.element_ids() {
        if !touched.contains(&id) {
            assert!(!viewer.is_suppressed(id), "{id} unexpectedly suppressed");
            assert_eq!(viewer.overlay_style_for(id), None);
        }
    }
}

#[test]
fn test_reapplication_is_idempotent() {
    // D1, then D2, then D1 again must equal applying D1 directly.
    let mut direct = bound_viewer();
    direct.select_disorder("AIS");

    let mut roundabout = bound_viewer();
    roundabout.select_disorder("AIS");
    roundabout.select_disorder("CAH");
    roundabout.select_disorder("AIS");

    assert_eq!(direct.render_svg(), roundabout.render_svg());
}

#[test]
fn test_selecting_none_clears_all_annotations() {
    let mut baseline = bound_viewer();

    let mut viewer = bound_viewer();
    viewer.select_disorder("XX_SRY_TRANSLOCATION");
    assert!(viewer.overlay_count() > 0);
    viewer.select_disorder("NONE");

    assert_eq!(viewer.overlay_count(), 0);
    let registry = NodeRegistry::builtin();
    for id in registry.element_ids() {
        assert!(!viewer.is_suppressed(id));
    }
    assert_eq!(viewer.render_svg(), baseline.select_and_render("NONE"));
}

// Small extension trait to keep the comparison sites readable.
trait SelectAndRender {
    fn select_and_render(&mut self, key: &str) -> Option<String>;
}

impl SelectAndRender for Viewer {
    fn select_and_render(&mut self, key: &str) -> Option<String> {
        self.select_disorder(key);
        self.render_svg()
    }
}

#[test]
fn test_unknown_key_behaves_like_none() {
    let mut with_none = bound_viewer();
    let mut with_unknown = bound_viewer();
    assert_eq!(
        with_none.select_and_render("NONE"),
        with_unknown.select_and_render("not-a-real-key")
    );
}

#[test]
fn test_text_and_diagram_are_decoupled() {
    let mut viewer = Viewer::new();

    // Unbound: text output only, zero diagram mutations possible.
    let panel = viewer.select_disorder("CAH");
    assert!(panel.body_html().contains("cortisol"));
    assert!(!viewer.is_bound());
    assert_eq!(viewer.overlay_count(), 0);

    // Binding catches the diagram up with the already-displayed text.
    viewer.bind_diagram(full_diagram());
    assert!(viewer.is_suppressed("CORTISOL"));
    for key in ["CRH", "ACTH", "DHEA"] {
        assert_eq!(
            viewer.overlay_style_for(key),
            Some(AnnotationStyle::Elevate)
        );
    }
    for key in ["XX", "OVARIES"] {
        assert_eq!(
            viewer.overlay_style_for(key),
            Some(AnnotationStyle::Emphasize)
        );
    }
}

#[test]
fn test_overlay_count_matches_unique_targets() {
    let mut viewer = bound_viewer();
    viewer.select_disorder("FIVE_ALPHA_DEF");
    // Five annotation targets across two effects, no repeats.
    assert_eq!(viewer.overlay_count(), 5);
    assert!(viewer.is_suppressed("FIVE_AR"));
    assert!(viewer.is_suppressed("DHT"));
}

#[test]
fn test_trisomy_entries_render_clean_diagrams() {
    let mut xxy = bound_viewer();
    let mut xyy = bound_viewer();
    let a = xxy.select_and_render("XXY");
    let b = xyy.select_and_render("XYY");
    assert_eq!(a, b);
    assert_eq!(xxy.overlay_count(), 0);
}
