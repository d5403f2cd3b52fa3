use super::token::Token;
use crate::error::TableError;
use logos::{Lexer as LogosLexer, Logos};

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            current_line: 1,
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, TableError> {
        // Starting from the previous token's start also counts newlines inside it
        let before_pos = self.inner.span().start;

        match self.inner.next() {
            Some(Ok(token)) => {
                let skipped = &self.input[before_pos..self.inner.span().start];
                self.current_line += skipped.chars().filter(|&c| c == '\n').count();
                Ok(Some(token))
            }
            Some(Err(_)) => {
                let span = self.inner.span();
                let skipped = &self.input[before_pos..span.start];
                self.current_line += skipped.chars().filter(|&c| c == '\n').count();
                Err(TableError::Parse {
                    line: self.current_line,
                    message: format!("Unexpected token: '{}'", &self.input[span.start..span.end]),
                })
            }
            None => Ok(None),
        }
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }
}
