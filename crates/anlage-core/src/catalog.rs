//! Static catalog of disorders of sexual differentiation.
//!
//! Each [`Disorder`] pairs a human-readable label and description with the
//! ordered list of visual [`Effect`]s that depict its pathophysiology on
//! the diagram. The catalog is read-only; unknown keys fall back to the
//! baseline "no disorder" entry rather than erroring.
//!
//! Descriptions are pre-sanitized rich text: simple inline markup
//! (`<strong>`, `<br>`) is passed through verbatim to the text panel and is
//! never parsed or escaped by the engine.

use log::debug;
use serde::Serialize;

use crate::effect::Effect;

/// Catalog key of the baseline "no disorder" entry.
pub const BASELINE_KEY: &str = "NONE";

/// A named condition and the visual effects that depict it.
///
/// Defined statically, never mutated at runtime. Effect order matters only
/// for overlay layering: a later overlay for the same target replaces the
/// earlier one.
#[derive(Debug, Clone, Serialize)]
pub struct Disorder {
    key: &'static str,
    label: &'static str,
    description: &'static str,
    effects: Vec<Effect>,
}

impl Disorder {
    fn new(
        key: &'static str,
        label: &'static str,
        description: &'static str,
        effects: Vec<Effect>,
    ) -> Self {
        Self {
            key,
            label,
            description,
            effects,
        }
    }

    /// Returns the catalog key of this disorder.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the rich-text description (opaque, pre-sanitized HTML).
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the ordered effect list.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

/// Read-only table of disorders, keyed by disorder key.
///
/// # Examples
///
/// ```
/// use anlage_core::catalog::{Catalog, BASELINE_KEY};
///
/// let catalog = Catalog::builtin();
/// let ais = catalog.lookup("AIS");
/// assert_eq!(ais.key(), "AIS");
///
/// // Unknown keys fall back to the baseline entry.
/// assert_eq!(catalog.lookup("not-a-real-key").key(), BASELINE_KEY);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    disorders: Vec<Disorder>,
}

impl Catalog {
    /// Creates the built-in catalog of sexual-differentiation disorders.
    pub fn builtin() -> Self {
        Self {
            disorders: builtin_disorders(),
        }
    }

    /// Looks up a disorder by key, falling back to the baseline entry.
    ///
    /// An unknown key is not an error; it behaves exactly like selecting
    /// the baseline "no disorder" entry.
    pub fn lookup(&self, key: &str) -> &Disorder {
        match self.get(key) {
            Some(disorder) => disorder,
            None => {
                debug!(key; "Unknown disorder key, using baseline entry");
                self.baseline()
            }
        }
    }

    /// Looks up a disorder by key, returning `None` on a miss.
    pub fn get(&self, key: &str) -> Option<&Disorder> {
        self.disorders.iter().find(|d| d.key == key)
    }

    /// Returns the baseline "no disorder" entry.
    pub fn baseline(&self) -> &Disorder {
        self.get(BASELINE_KEY)
            .expect("builtin catalog always contains the baseline entry")
    }

    /// Iterates over all entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Disorder> {
        self.disorders.iter()
    }

    /// Returns the number of catalog entries.
    pub fn len(&self) -> usize {
        self.disorders.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.disorders.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// Both trisomy entries share one conceptual category and identical text.
// They are kept as two keys because the selection control exposes both.
const TRISOMY_DESCRIPTION: &str = concat!(
    "XXY: small testes, sterile, breast<br>",
    "XYY: extremely tall<br>",
    "Both low IQ",
);

fn builtin_disorders() -> Vec<Disorder> {
    vec![
        Disorder::new(
            BASELINE_KEY,
            "Normal development",
            "Baseline XX / XY development with no disorder selected.",
            vec![],
        ),
        Disorder::new(
            "FIVE_ALPHA_DEF",
            "5-alpha reductase deficiency",
            concat!(
                "XY with normal testes and Wolffian ducts. 5-alpha reductase is missing, ",
                "so testosterone cannot be converted to DHT. Internal male tract is present, ",
                "but male <strong>external genitalia are under-masculinized or female</strong>.",
            ),
            vec![
                Effect::suppress(["FIVE_AR"]),
                Effect::suppress(["DHT", "MALE_EXTERNAL"]),
                Effect::emphasize(["TESTOSTERONE", "WOLFFIAN", "MALE_TRACT"]),
                Effect::emphasize(["TESTES", "LEYDIG"]),
            ],
        ),
        Disorder::new(
            "AIS",
            "Androgen insensitivity syndrome (AIS)",
            concat!(
                "XY individual with testes producing testosterone and DHT, but androgen receptors ",
                "are nonfunctional. MIH still suppresses Müllerian ducts (no female internal tract). ",
                "Wolffian ducts and male external genitalia fail to develop: <strong>phenotypic female with ",
                "no internal reproductive tract.</strong>",
            ),
            vec![
                Effect::emphasize(["TESTES", "LEYDIG", "TESTOSTERONE", "DHT"]),
                Effect::suppress(["WOLFFIAN", "MALE_TRACT", "MALE_EXTERNAL"]),
                Effect::emphasize(["SERTOLI", "MIH", "MULLERIAN_SUPPRESS", "NO_FEMALE_TRACT"]),
            ],
        ),
        Disorder::new(
            "CAH",
            "Congenital adrenal hyperplasia (CAH, 21-hydroxylase deficiency)",
            concat!(
                "Defective cortisol synthesis: low cortisol, high CRH and ACTH, and excess adrenal DHEA (androgens). ",
                "In XX individuals, this leads to virilization and <strong>masculinized external genitalia</strong> ",
                "while internal female structures remain.",
            ),
            vec![
                Effect::suppress(["CORTISOL"]),
                Effect::elevate(["CRH", "ACTH", "DHEA"]),
                Effect::emphasize(["XX", "OVARIES"]),
            ],
        ),
        Disorder::new(
            "XX_SRY_TRANSLOCATION",
            "XX with SRY translocation (46,XX testicular DSD)",
            concat!(
                "Genotypic XX but SRY is present (translocated), so testes develop instead of ovaries. ",
                "MIH and testosterone are produced → male internal and external reproductive tracts. ",
                "No ovaries or female internal tract. <strong>Complete male phenotype</strong>. ",
            ),
            vec![
                Effect::suppress([
                    "OVARIES",
                    "THECAL",
                    "GRANULOSA",
                    "ESTROGEN",
                    "PROGESTERONE",
                    "INHIBIN_F",
                ]),
                Effect::emphasize(["XX", "SRY", "TESTES", "SERTOLI", "LEYDIG"]),
                Effect::emphasize(["MIH", "MULLERIAN_SUPPRESS", "NO_FEMALE_TRACT"]),
                Effect::emphasize([
                    "TESTOSTERONE",
                    "DHT",
                    "WOLFFIAN",
                    "MALE_TRACT",
                    "MALE_EXTERNAL",
                ]),
            ],
        ),
        Disorder::new(
            "XY_NO_SRY",
            "XY with SRY mutation/deletion",
            concat!(
                "Genotypic XY but SRY is absent or nonfunctional. Testes fail to form, so there is no MIH and no testosterone. ",
                "Müllerian ducts persist (female internal tract), and external genitalia are female. ",
                "<strong>Complete female phenotype</strong>.",
            ),
            vec![
                // SRY pathway and testicular hormones offline
                Effect::suppress(["SRY", "TESTES", "SERTOLI", "LEYDIG"]),
                Effect::suppress([
                    "MIH",
                    "TESTOSTERONE",
                    "DHT",
                    "WOLFFIAN",
                    "MALE_TRACT",
                    "MALE_EXTERNAL",
                ]),
                // The Müllerian-suppression branch is also off this path
                Effect::suppress(["MULLERIAN_SUPPRESS", "NO_FEMALE_TRACT"]),
                Effect::emphasize(["XY", "NO_SRY", "OVARIES"]),
            ],
        ),
        Disorder::new(
            "HERMAPHRODITISM",
            "Hermaphroditism (true gonadal, ovotestis)",
            concat!(
                "Both ovarian and testicular tissue are present (ovotestis or one ovary and one testis). ",
                "Estrogen and testosterone may both be produced, leading to <strong>mixed or ambiguous internal </strong>",
                "<strong>and external genitalia, or both presents</strong>.",
            ),
            vec![
                Effect::emphasize([
                    "OVARIES",
                    "TESTES",
                    "THECAL",
                    "GRANULOSA",
                    "SERTOLI",
                    "LEYDIG",
                ]),
                Effect::emphasize(["ESTROGEN", "PROGESTERONE", "TESTOSTERONE", "DHT"]),
            ],
        ),
        Disorder::new("XXY", "Trisomes (XXY/XYY)", TRISOMY_DESCRIPTION, vec![]),
        Disorder::new("XYY", "Trisomes (XXY/XYY)", TRISOMY_DESCRIPTION, vec![]),
    ]
}
