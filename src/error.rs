use std::fmt;

use thiserror::Error;

use crate::token::{Token, TokenKind};

/// The ERROR token a lexer stopped on. Its text is the diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .token.text)]
pub struct LexError {
    token: Token,
}

impl LexError {
    pub(crate) fn new(token: Token) -> Self {
        debug_assert_eq!(token.kind, TokenKind::Error);
        Self { token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn message(&self) -> &str {
        &self.token.text
    }
}

/// A grammar rule met a token outside its acceptable set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Expected [{}] but got [{}]", ExpectedList(.expected), .actual.name())]
pub struct SyntaxError {
    pub rule: &'static str,
    pub expected: &'static [TokenKind],
    pub actual: TokenKind,
}

struct ExpectedList<'a>(&'a [TokenKind]);

impl fmt::Display for ExpectedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Scanning error: {0}")]
    Scan(#[from] LexError),

    #[error("Parse error: {rule}, {0}", rule = .0.rule)]
    Syntax(#[from] SyntaxError),

    #[error("Parse error: factor, parentheses nested deeper than {limit}")]
    TooDeep { limit: usize },
}

impl ParserError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ParserError::Scan(_) => "Scanning error",
            ParserError::Syntax(_) | ParserError::TooDeep { .. } => "Parse error",
        }
    }

    /// The grammar rule that failed, or `scan` for lexical failures.
    pub fn context(&self) -> &'static str {
        match self {
            ParserError::Scan(_) => "scan",
            ParserError::Syntax(err) => err.rule,
            ParserError::TooDeep { .. } => "factor",
        }
    }

    pub fn description(&self) -> String {
        match self {
            ParserError::Scan(err) => err.message().to_owned(),
            ParserError::Syntax(err) => err.to_string(),
            ParserError::TooDeep { limit } => {
                format!("parentheses nested deeper than {limit}")
            }
        }
    }
}
