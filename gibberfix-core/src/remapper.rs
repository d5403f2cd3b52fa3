//! Applies a substitution table to text.
//!
//! Text is processed one extended grapheme cluster at a time. A cluster is
//! replaced only when it is a single scalar value present in the table, so a
//! letter carrying combining marks (niqqud, for example) is left untouched.
//! Matching is exact: characters the table does not list, including
//! uppercase or shifted variants, pass through unchanged.

use crate::table::SubstitutionTable;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Stateless converter over an immutable [`SubstitutionTable`]
#[derive(Debug, Clone)]
pub struct LayoutRemapper {
    table: Cow<'static, SubstitutionTable>,
}

/// Result of [`LayoutRemapper::convert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    text: String,
    length: usize,
    substituted: usize,
}

impl Conversion {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of characters (grapheme clusters) in the input and output
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether there is anything worth copying
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// How many characters were replaced through the table
    pub fn substituted(&self) -> usize {
        self.substituted
    }
}

impl Default for LayoutRemapper {
    fn default() -> Self {
        Self::hebrew_qwerty()
    }
}

impl LayoutRemapper {
    pub fn new(table: SubstitutionTable) -> Self {
        Self {
            table: Cow::Owned(table),
        }
    }

    /// Remapper over the built-in Hebrew to QWERTY table
    pub fn hebrew_qwerty() -> Self {
        Self {
            table: Cow::Borrowed(SubstitutionTable::hebrew_qwerty()),
        }
    }

    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Convert `input` character by character.
    ///
    /// Never fails. The output has as many characters as the input and the
    /// same input always produces the same output.
    pub fn transform(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        self.remap_into(input, &mut output);
        output
    }

    /// Like [`LayoutRemapper::transform`], but also reports what happened
    pub fn convert(&self, input: &str) -> Conversion {
        let mut text = String::with_capacity(input.len());
        let (length, substituted) = self.remap_into(input, &mut text);
        log::debug!(
            "Converted {} characters, {} substituted",
            length,
            substituted
        );
        Conversion {
            text,
            length,
            substituted,
        }
    }

    fn remap_into(&self, input: &str, output: &mut String) -> (usize, usize) {
        let mut length = 0;
        let mut substituted = 0;

        for grapheme in input.graphemes(true) {
            length += 1;
            match self.lookup(grapheme) {
                Some(target) => {
                    output.push(target);
                    substituted += 1;
                }
                None => output.push_str(grapheme),
            }
        }

        (length, substituted)
    }

    fn lookup(&self, grapheme: &str) -> Option<char> {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.table.get(c),
            _ => None,
        }
    }
}
