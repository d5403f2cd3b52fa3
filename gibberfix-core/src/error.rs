//! Error types for building and loading substitution tables

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Expected a single character at line {line}, got \"{text}\"")]
    NotSingleCharacter { line: usize, text: String },

    #[error("Invalid Unicode escape: U{0:04X}")]
    InvalidUnicode(u32),

    #[error("Duplicate source character {0:?}")]
    DuplicateKey(char),

    #[error("Duplicate source character {key:?} at line {line} (first mapped at line {first_line})")]
    DuplicateRule { key: char, line: usize, first_line: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;
