//! Substitution tables
//!
//! A table maps one source-layout character to one target-layout character.
//! Keys are unique and a table never changes after it is built.

mod builtin;
pub mod lexer;
pub mod parser;
pub mod token;

use crate::error::{Result, TableError};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::OnceLock;

pub use builtin::HEBREW_QWERTY;
pub use parser::TableParser;

/// Immutable one-to-one character mapping
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubstitutionTable {
    entries: BTreeMap<char, char>,
}

impl SubstitutionTable {
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Builds a table from `(source, target)` pairs, rejecting repeated sources
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        pairs
            .into_iter()
            .fold(Self::builder(), |builder, (source, target)| builder.map(source, target))
            .build()
    }

    /// The built-in Hebrew to US QWERTY table, shared by the whole process
    pub fn hebrew_qwerty() -> &'static SubstitutionTable {
        static TABLE: OnceLock<SubstitutionTable> = OnceLock::new();
        TABLE.get_or_init(|| SubstitutionTable {
            entries: HEBREW_QWERTY.iter().copied().collect(),
        })
    }

    /// Parse a table definition
    pub fn parse(definition: &str) -> Result<Self> {
        TableParser::new(definition).parse()
    }

    /// Load a table definition file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let definition = std::fs::read_to_string(path)?;
        let table = Self::parse(&definition)?;
        log::debug!("Loaded {} mappings from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn get(&self, source: char) -> Option<char> {
        self.entries.get(&source).copied()
    }

    pub fn contains(&self, source: char) -> bool {
        self.entries.contains_key(&source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(source, target)` pairs ordered by source character
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(&source, &target)| (source, target))
    }

    /// Render the table in the definition format accepted by [`SubstitutionTable::parse`]
    pub fn to_definition(&self) -> String {
        let mut out = String::new();
        for (source, target) in self.iter() {
            let _ = writeln!(out, "{} => {}", render_char(source), render_char(target));
        }
        out
    }
}

fn render_char(c: char) -> String {
    match c {
        '"' => r#""\"""#.to_string(),
        '\\' => r#""\\""#.to_string(),
        c if c.is_control() || c.is_whitespace() => format!("U{:04X}", c as u32),
        c => format!("\"{}\"", c),
    }
}

/// Collects mappings and validates key uniqueness on [`TableBuilder::build`]
#[derive(Debug, Default)]
pub struct TableBuilder {
    pairs: Vec<(char, char)>,
}

impl TableBuilder {
    pub fn map(mut self, source: char, target: char) -> Self {
        self.pairs.push((source, target));
        self
    }

    pub fn build(self) -> Result<SubstitutionTable> {
        let mut entries = BTreeMap::new();
        for (source, target) in self.pairs {
            if entries.insert(source, target).is_some() {
                return Err(TableError::DuplicateKey(source));
            }
        }
        Ok(SubstitutionTable { entries })
    }
}
