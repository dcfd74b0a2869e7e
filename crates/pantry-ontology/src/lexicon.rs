//! Fixed modifier word tables.
//!
//! One lexicon per modifier category, passed by reference into the enricher.
//! Tables are sorted so classification is a binary search; keep them sorted
//! when adding words.

/// Static word tables for modifier classification.
#[derive(Debug, Clone, Copy)]
pub struct ModifierLexicon {
    pub color: &'static [&'static str],
    pub form: &'static [&'static str],
    pub prep: &'static [&'static str],
    pub size: &'static [&'static str],
}

const COLOR_WORDS: &[&str] = &[
    "black", "brown", "golden", "green", "orange", "purple", "red", "white", "yellow",
];

const FORM_WORDS: &[&str] = &[
    "canned", "cooked", "dried", "fresh", "frozen", "ground", "powdered", "raw", "whole",
];

const PREP_WORDS: &[&str] = &[
    "blanched",
    "chopped",
    "crushed",
    "cubed",
    "diced",
    "grated",
    "julienned",
    "mashed",
    "melted",
    "minced",
    "peeled",
    "pureed",
    "roasted",
    "sauteed",
    "seeded",
    "shredded",
    "sliced",
    "smoked",
    "softened",
    "toasted",
];

const SIZE_WORDS: &[&str] = &["baby", "large", "medium", "mini", "small", "thick", "thin"];

impl ModifierLexicon {
    /// The built-in lexicon used by every production run.
    pub const fn builtin() -> Self {
        Self {
            color: COLOR_WORDS,
            form: FORM_WORDS,
            prep: PREP_WORDS,
            size: SIZE_WORDS,
        }
    }
}

impl Default for ModifierLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
