//! Error types for Anlage operations.
//!
//! Hard errors exist only at the I/O and SVG-parse boundary. Recoverable
//! conditions (unresolvable identifiers, an unbound diagram, unknown
//! disorder keys) are logged and degraded, never surfaced through
//! [`AnlageError`].

use std::io;

use thiserror::Error;

/// The main error type for Anlage operations.
#[derive(Debug, Error)]
pub enum AnlageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SVG parse error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("not an SVG document: root element is <{0}>")]
    NotSvg(String),
}
