//! Identifier registry mapping logical biological entities to diagram ids.
//!
//! The diagram is externally authored; its element ids are stable but
//! abbreviated and occasionally truncated by the drawing tool. This module
//! provides the [`NodeRegistry`] that maps the logical entity names used by
//! the disorder catalog (e.g. `TESTOSTERONE`) to the element ids actually
//! present in the SVG (e.g. `testosterone`, `5_alpha_red`).
//!
//! Resolution never fails: a key that is not in the registry is returned
//! unchanged, so callers may pass raw diagram ids directly as an escape
//! hatch. Whether the resolved id exists in the live diagram is a separate,
//! tolerated runtime condition handled by the diagram accessor.

use std::collections::HashMap;

/// Logical entity name → SVG element id table for the built-in diagram.
///
/// Grouped the way the diagram reads: genotype switches, gonads, the
/// ovarian and testicular hormone branches, ducts/tracts, and the adrenal
/// axis used by CAH.
const BUILTIN_NODES: &[(&str, &str)] = &[
    // Genotype / master switches
    ("XX", "xx"),
    ("XY", "xy"),
    ("SRY", "sry_gene"),
    ("NO_SRY", "no_sry_gene"),
    // Gonads
    ("OVARIES", "ovaries"),
    ("TESTES", "testes"),
    // Ovarian side
    ("THECAL", "thecal"),
    ("GRANULOSA", "granulo"),
    ("ESTROGEN", "estrogen"),
    ("PROGESTERONE", "progesterone"),
    ("INHIBIN_F", "inhibin"),
    // Testicular side
    ("SERTOLI", "sertoli"),
    ("LEYDIG", "leydig"),
    ("INHIBIN_M", "inhibin_2"),
    ("MIH", "mih"),
    ("TESTOSTERONE", "testosterone"),
    ("DHT", "dht"),
    ("FIVE_AR", "5_alpha_red"),
    // Ducts / tracts
    ("WOLFFIAN", "wolffian_duct"),
    ("MALE_TRACT", "male_reproductiv"),
    ("MULLERIAN_SUPPRESS", "suppress_mullerian_d"),
    ("NO_FEMALE_TRACT", "no_female_reproducti"),
    ("MALE_EXTERNAL", "male_external_g"),
    // Adrenal axis (CAH)
    ("CRH", "crh"),
    ("ACTH", "acth"),
    ("CORTISOL", "cortisol"),
    ("DHEA", "dhea"),
];

/// Immutable mapping from logical entity names to diagram element ids.
///
/// Constructed once at startup and never mutated. Every key referenced by a
/// catalog entry resolves to exactly one id; ids absent from the live
/// diagram are skipped later at application time.
///
/// # Examples
///
/// ```
/// use anlage_core::registry::NodeRegistry;
///
/// let registry = NodeRegistry::builtin();
/// assert_eq!(registry.resolve("TESTOSTERONE"), "testosterone");
///
/// // Unknown keys pass through unchanged (raw-id escape hatch).
/// assert_eq!(registry.resolve("custom_arrow_3"), "custom_arrow_3");
/// ```
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: HashMap<&'static str, &'static str>,
}

impl NodeRegistry {
    /// Creates the registry for the built-in sexual-differentiation diagram.
    pub fn builtin() -> Self {
        Self {
            nodes: BUILTIN_NODES.iter().copied().collect(),
        }
    }

    /// Resolves a logical entity name to its diagram element id.
    ///
    /// Returns the input unchanged when the name is not in the registry,
    /// which permits callers to address diagram elements by raw id. Pure
    /// lookup; absence is not an error.
    pub fn resolve<'a>(&self, key: &'a str) -> &'a str {
        self.nodes.get(key).copied().unwrap_or(key)
    }

    /// Returns true if `key` is a known logical entity name.
    pub fn contains(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    /// Iterates over every diagram element id known to the registry.
    ///
    /// Used by the reset cycle to strip suppression markers from all nodes
    /// the engine could ever have touched.
    pub fn element_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.nodes.values().copied()
    }

    /// Returns the number of registered entities.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
