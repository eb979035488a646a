//! Text-panel output for the external info-box collaborator.

use serde::Serialize;

use anlage_core::catalog::Disorder;

/// Payload for the external text panel: the disorder's label plus its
/// rich-text description.
///
/// The body is opaque, pre-sanitized HTML. Inline markup (`<strong>`,
/// `<br>`) from the catalog is passed through verbatim, never escaped;
/// newlines are converted to `<br>` so multi-line descriptions keep their
/// line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelUpdate {
    title: String,
    body_html: String,
}

impl PanelUpdate {
    pub(crate) fn for_disorder(disorder: &Disorder) -> Self {
        Self {
            title: disorder.label().to_string(),
            body_html: disorder.description().replace('\n', "<br>"),
        }
    }

    /// Returns the panel title (the disorder's label).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the panel body as HTML.
    pub fn body_html(&self) -> &str {
        &self.body_html
    }
}

#[cfg(test)]
mod tests {
    use anlage_core::catalog::Catalog;

    use super::*;

    #[test]
    fn test_markup_is_passed_through_verbatim() {
        let catalog = Catalog::builtin();
        let panel = PanelUpdate::for_disorder(catalog.lookup("AIS"));
        assert_eq!(panel.title(), "Androgen insensitivity syndrome (AIS)");
        assert!(panel.body_html().contains("<strong>"));
        assert!(!panel.body_html().contains("&lt;"));
    }

    #[test]
    fn test_trisomy_line_breaks_survive() {
        let catalog = Catalog::builtin();
        let panel = PanelUpdate::for_disorder(catalog.lookup("XXY"));
        assert!(panel.body_html().contains("<br>"));
    }
}
