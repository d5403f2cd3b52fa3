//! Parser for table definitions
//!
//! A definition is a list of `source => target` rules. Each side is a quoted
//! string holding exactly one character or a `UXXXX` escape:
//!
//! ```text
//! // Hebrew top row
//! "ק" => "e"
//! U05E8 => 'r'
//! ```

use super::lexer::Lexer;
use super::token::Token;
use super::SubstitutionTable;
use crate::error::{Result, TableError};
use std::collections::HashMap;

pub struct TableParser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> TableParser<'a> {
    pub fn new(input: &'a str) -> Self {
        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        Self {
            lexer: Lexer::new(input),
        }
    }

    pub fn parse(mut self) -> Result<SubstitutionTable> {
        let mut builder = SubstitutionTable::builder();
        let mut seen: HashMap<char, usize> = HashMap::new();

        while let Some(token) = self.lexer.next_token()? {
            let line = self.lexer.current_line();
            let source = self.parse_char(token)?;
            self.expect_arrow()?;
            let target = match self.lexer.next_token()? {
                Some(token) => self.parse_char(token)?,
                None => {
                    return Err(TableError::Parse {
                        line: self.lexer.current_line(),
                        message: "Expected target character after '=>'".to_string(),
                    })
                }
            };

            if let Some(&first_line) = seen.get(&source) {
                return Err(TableError::DuplicateRule {
                    key: source,
                    line,
                    first_line,
                });
            }
            seen.insert(source, line);
            builder = builder.map(source, target);
        }

        builder.build()
    }

    fn expect_arrow(&mut self) -> Result<()> {
        match self.lexer.next_token()? {
            Some(Token::Arrow) => Ok(()),
            found => Err(TableError::Parse {
                line: self.lexer.current_line(),
                message: format!("Expected '=>', found {:?}", found),
            }),
        }
    }

    fn parse_char(&self, token: Token) -> Result<char> {
        let line = self.lexer.current_line();
        match token {
            Token::String(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(TableError::NotSingleCharacter { line, text }),
                }
            }
            Token::Unicode(code) => {
                char::from_u32(code).ok_or(TableError::InvalidUnicode(code))
            }
            other => Err(TableError::Parse {
                line,
                message: format!("Expected a character, found {:?}", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules() {
        let table = TableParser::new("\"ק\" => \"e\"\nU05E8 => 'r'\n").parse().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get('ק'), Some('e'));
        assert_eq!(table.get('ר'), Some('r'));
    }

    #[test]
    fn test_empty_definition() {
        let table = TableParser::new("// nothing here\n").parse().unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_byte_order_mark_skipped() {
        let table = TableParser::new("\u{FEFF}\"ש\" => \"a\"").parse().unwrap();
        assert_eq!(table.get('ש'), Some('a'));
    }

    #[test]
    fn test_missing_arrow() {
        let err = TableParser::new("\"a\" \"b\"").parse().unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_missing_target() {
        let err = TableParser::new("\"a\" =>").parse().unwrap_err();
        assert!(matches!(err, TableError::Parse { .. }));
    }

    #[test]
    fn test_multi_character_side() {
        let err = TableParser::new("\"ab\" => \"c\"").parse().unwrap_err();
        match err {
            TableError::NotSingleCharacter { line, text } => {
                assert_eq!(line, 1);
                assert_eq!(text, "ab");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = TableParser::new("\"a\" => \"\"").parse().unwrap_err();
        assert!(matches!(err, TableError::NotSingleCharacter { .. }));
    }

    #[test]
    fn test_surrogate_escape_rejected() {
        let err = TableParser::new("UD800 => \"x\"").parse().unwrap_err();
        assert!(matches!(err, TableError::InvalidUnicode(0xD800)));
    }

    #[test]
    fn test_multiline_literal_keeps_line_numbers() {
        let err = TableParser::new("\"\n\" => \"x\"\n\"a\" => \"b\"\n\"a\" => \"c\"")
            .parse()
            .unwrap_err();
        match err {
            TableError::DuplicateRule { key, line, first_line } => {
                assert_eq!(key, 'a');
                assert_eq!(line, 4);
                assert_eq!(first_line, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_rule_reports_both_lines() {
        let err = TableParser::new("\"a\" => \"b\"\n\n\"a\" => \"c\"").parse().unwrap_err();
        match err {
            TableError::DuplicateRule { key, line, first_line } => {
                assert_eq!(key, 'a');
                assert_eq!(line, 3);
                assert_eq!(first_line, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
