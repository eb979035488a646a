//! Anlage - an effect-application engine for teaching diagrams of human
//! sexual differentiation.
//!
//! A caller selects a disorder (androgen insensitivity, congenital adrenal
//! hyperplasia, 5-alpha reductase deficiency, ...) and the engine decorates
//! a pre-existing, externally-authored SVG diagram to depict its
//! pathophysiology: blocked pathways are suppressed in place, active or
//! upregulated entities get non-interactive overlay highlights in a
//! dedicated layer above the original content.
//!
//! The two entry points are [`Viewer::bind_diagram`] and
//! [`Viewer::select_disorder`]; everything else (catalog, registry, effect
//! model) is static data from [`anlage_core`].
//!
//! # Examples
//!
//! ```
//! use anlage::{SvgDocument, Viewer};
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
//!     <g id="testes"><rect x="0" y="0" width="40" height="20"/></g>
//!     <g id="wolffian_duct"><rect x="0" y="30" width="40" height="20"/></g>
//! </svg>"#;
//!
//! let mut viewer = Viewer::new();
//! viewer.bind_diagram(SvgDocument::parse(svg).unwrap());
//!
//! let panel = viewer.select_disorder("AIS");
//! assert_eq!(panel.title(), "Androgen insensitivity syndrome (AIS)");
//! assert!(viewer.overlay_style_for("TESTES").is_some());
//! assert!(viewer.is_suppressed("WOLFFIAN"));
//! ```

mod document;
mod engine;
mod error;
mod overlay;
mod panel;
mod viewer;

pub use anlage_core::{catalog, effect, geometry, registry};

pub use document::SvgDocument;
pub use error::AnlageError;
pub use panel::PanelUpdate;
pub use viewer::Viewer;
