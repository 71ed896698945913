use minivec::MiniVec;
use tracing::{debug, trace};

use crate::{
    error::LexError,
    lexer::{
        Scanner,
        table::{State, char_class},
    },
    token::{KEYWORDS, Token, TokenKind},
};

/// Lexer driven by the transition table in [`table`](super::table).
///
/// Every token is the longest prefix the DFA accepts. Whitespace and comments
/// are dropped after recognition, and an `Id` is turned into `Read`/`Write`
/// only when the whole word is a keyword.
#[derive(Debug)]
pub struct TableLexer<'a> {
    inner: &'a [u8],
    position: usize,
    tokens: MiniVec<Token>,
}

impl<'a> TableLexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            inner: input,
            position: 0,
            tokens: MiniVec::new(),
        }
    }

    fn next_token(&mut self) -> Token {
        let start = self.position;
        let Some(&first) = self.inner.get(start) else {
            return Token::end();
        };

        let mut state = State::Start;
        let mut current = first;
        while let Some(next) = state.next(char_class(current)) {
            state = next;
            self.position += 1;
            match self.inner.get(self.position) {
                Some(&c) => current = c,
                None => break,
            }
        }

        match state.accepts() {
            TokenKind::Error => Token::error(format!(
                "character '{}' not recognised",
                current.escape_ascii()
            )),
            kind => Token::new(
                kind,
                String::from_utf8_lossy(&self.inner[start..self.position]).into_owned(),
            ),
        }
    }
}

impl Scanner for TableLexer<'_> {
    fn scan(&mut self) -> Result<(), LexError> {
        debug!(len = self.inner.len(), "table lexer: scanning");
        loop {
            let mut token = self.next_token();
            match token.kind {
                TokenKind::End => break,
                TokenKind::Error => {
                    debug!(position = self.position, message = %token.text, "table lexer: error");
                    return Err(LexError::new(token));
                }
                TokenKind::Space | TokenKind::Comment => continue,
                TokenKind::Id => {
                    if let Some(keyword) = KEYWORDS.get(token.text.as_str()) {
                        token.kind = *keyword;
                    }
                }
                _ => {}
            }
            trace!(kind = %token.kind, text = %token.text, "token");
            self.tokens.push(token);
        }
        debug!(tokens = self.tokens.len(), "table lexer: done");
        Ok(())
    }

    fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
