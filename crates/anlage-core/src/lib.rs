//! Anlage Core Types and Definitions
//!
//! This crate provides the foundational types for the Anlage teaching-diagram
//! engine. It includes:
//!
//! - **Registry**: the fixed mapping from logical biological entities to
//!   diagram element ids ([`registry::NodeRegistry`])
//! - **Effects**: declarative visual effects applied to the diagram
//!   ([`effect`] module)
//! - **Catalog**: the static table of disorders and their effect lists
//!   ([`catalog`] module)
//! - **Geometry**: basic geometric types ([`geometry`] module)

pub mod catalog;
pub mod effect;
pub mod geometry;
pub mod registry;
