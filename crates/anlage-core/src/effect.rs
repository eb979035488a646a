//! Declarative visual effects applied to diagram elements.
//!
//! An [`Effect`] names a visual change and the ordered set of targets it
//! applies to. Targets are logical entity names (resolved through the
//! [`registry`](crate::registry)) or raw diagram element ids. Effects are
//! immutable value objects owned by the catalog entry that declares them.

use serde::Serialize;

/// Visual style of an annotation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnnotationStyle {
    /// Marks a pathway as active or noteworthy (magenta-family highlight).
    Emphasize,
    /// Marks a hormone or signal as upregulated (purple-family highlight).
    Elevate,
}

impl AnnotationStyle {
    /// Returns the CSS class applied to overlay shapes of this style.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Emphasize => "highlight-overlay",
            Self::Elevate => "upregulated-overlay",
        }
    }

    /// Parses the style back from its CSS class name.
    pub fn from_css_class(class: &str) -> Option<Self> {
        match class {
            "highlight-overlay" => Some(Self::Emphasize),
            "upregulated-overlay" => Some(Self::Elevate),
            _ => None,
        }
    }
}

/// The kind of visual change an effect performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EffectKind {
    /// The pathway is blocked or absent: the original element is greyed
    /// out in place. This is the only mutation ever made to an original
    /// diagram element.
    Suppress,
    /// A non-interactive overlay shape is layered above the element,
    /// leaving the original untouched.
    Annotate(AnnotationStyle),
}

/// A single visual effect: a kind plus the targets it applies to.
///
/// Target order is preserved; within one disorder, a later overlay for the
/// same target replaces the earlier one. Semantically each target is
/// processed independently; a target that cannot be resolved is skipped
/// without affecting the rest.
///
/// # Examples
///
/// ```
/// use anlage_core::effect::{AnnotationStyle, Effect, EffectKind};
///
/// let effect = Effect::emphasize(["TESTES", "LEYDIG"]);
/// assert_eq!(effect.kind(), EffectKind::Annotate(AnnotationStyle::Emphasize));
/// assert_eq!(effect.targets(), ["TESTES", "LEYDIG"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Effect {
    kind: EffectKind,
    targets: Vec<String>,
}

impl Effect {
    /// Creates an effect of the given kind for the given targets.
    pub fn new<I, S>(kind: EffectKind, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a suppression effect ("this pathway is blocked/absent").
    pub fn suppress<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(EffectKind::Suppress, targets)
    }

    /// Creates a highlight annotation effect.
    pub fn emphasize<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(EffectKind::Annotate(AnnotationStyle::Emphasize), targets)
    }

    /// Creates an upregulation annotation effect.
    pub fn elevate<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(EffectKind::Annotate(AnnotationStyle::Elevate), targets)
    }

    /// Returns the kind of this effect.
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Returns the ordered targets of this effect.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_round_trip() {
        for style in [AnnotationStyle::Emphasize, AnnotationStyle::Elevate] {
            assert_eq!(AnnotationStyle::from_css_class(style.css_class()), Some(style));
        }
        assert_eq!(AnnotationStyle::from_css_class("blocked"), None);
    }

    #[test]
    fn test_builders_set_kind() {
        assert_eq!(Effect::suppress(["A"]).kind(), EffectKind::Suppress);
        assert_eq!(
            Effect::elevate(["A"]).kind(),
            EffectKind::Annotate(AnnotationStyle::Elevate)
        );
    }

    #[test]
    fn test_target_order_is_preserved() {
        let effect = Effect::emphasize(["C", "A", "B"]);
        assert_eq!(effect.targets(), ["C", "A", "B"]);
    }
}
