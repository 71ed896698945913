use minivec::MiniVec;
use tracing::{debug, trace};

use crate::{
    error::LexError,
    lexer::Scanner,
    token::{Token, TokenKind, is_digit, is_letter},
};

/// Hand-written lexer that inspects bytes directly, without a state table.
///
/// Keywords are recognised as soon as the letters read so far spell `read` or
/// `write`, so `readme` lexes as `Read "read"` followed by `Id "me"`.
#[derive(Debug)]
pub struct SwitchLexer<'a> {
    inner: &'a [u8],
    position: usize,
    tokens: MiniVec<Token>,
}

impl<'a> SwitchLexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            inner: input,
            position: 0,
            tokens: MiniVec::new(),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.inner.get(self.position).copied()
    }

    #[inline]
    fn text_from(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.inner[start..self.position]).into_owned()
    }

    // 跳过空白符
    #[inline]
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\n' | b'\t')) {
            self.position += 1;
        }
    }

    fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let Some(c) = self.peek() else {
                return Token::end();
            };

            let kind = match c {
                b'+' => TokenKind::Plus,
                b'-' => TokenKind::Minus,
                b'*' => TokenKind::Times,
                b'(' => TokenKind::LParen,
                b')' => TokenKind::RParen,
                b':' => return self.match_assign(),
                b'/' => match self.match_slash() {
                    Some(token) => return token,
                    None => continue,
                },
                b'.' => return self.match_fraction(),
                c if is_digit(c) => return self.match_number(),
                c if is_letter(c) => return self.match_identifier(),
                c => {
                    self.position += 1;
                    return Token::error(format!("character '{}' not recognised", c.escape_ascii()));
                }
            };

            self.position += 1;
            return Token::new(kind, char::from(c).to_string());
        }
    }

    fn match_assign(&mut self) -> Token {
        self.position += 1;
        if self.peek() == Some(b'=') {
            self.position += 1;
            Token::new(TokenKind::Assign, ":=")
        } else {
            Token::error("symbol not recognised")
        }
    }

    /// `None` when a comment was skipped and lexing should resume.
    fn match_slash(&mut self) -> Option<Token> {
        self.position += 1;
        match self.peek() {
            Some(b'*') => {
                self.position += 1;
                let rest = &self.inner[self.position..];
                match rest.windows(2).position(|w| w == b"*/") {
                    Some(offset) => {
                        self.position += offset + 2;
                        None
                    }
                    None => {
                        self.position = self.inner.len();
                        Some(Token::error("block comment not escaped"))
                    }
                }
            }
            Some(b'/') => {
                let rest = &self.inner[self.position..];
                self.position = match rest.iter().position(|c| *c == b'\n') {
                    Some(offset) => self.position + offset + 1,
                    None => self.inner.len(),
                };
                None
            }
            _ => Some(Token::new(TokenKind::Div, "/")),
        }
    }

    // 匹配以 '.' 开头的小数
    fn match_fraction(&mut self) -> Token {
        let start = self.position;
        self.position += 1;
        if !self.peek().is_some_and(is_digit) {
            return Token::error("expected a number following '.'");
        }
        while self.peek().is_some_and(is_digit) {
            self.position += 1;
        }
        Token::new(TokenKind::Number, self.text_from(start))
    }

    // 匹配数字, 最多一个小数点
    fn match_number(&mut self) -> Token {
        let start = self.position;
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c == b'.' && !seen_dot {
                seen_dot = true;
            } else if !is_digit(c) {
                break;
            }
            self.position += 1;
        }
        Token::new(TokenKind::Number, self.text_from(start))
    }

    // 匹配标识符
    fn match_identifier(&mut self) -> Token {
        let start = self.position;
        while self.peek().is_some_and(is_letter) {
            self.position += 1;
            match &self.inner[start..self.position] {
                b"read" => return Token::new(TokenKind::Read, "read"),
                b"write" => return Token::new(TokenKind::Write, "write"),
                _ => {}
            }
        }
        Token::new(TokenKind::Id, self.text_from(start))
    }
}

impl Scanner for SwitchLexer<'_> {
    fn scan(&mut self) -> Result<(), LexError> {
        debug!(len = self.inner.len(), "switch lexer: scanning");
        loop {
            let token = self.next_token();
            match token.kind {
                TokenKind::End => break,
                TokenKind::Error => {
                    debug!(position = self.position, message = %token.text, "switch lexer: error");
                    return Err(LexError::new(token));
                }
                _ => {
                    trace!(kind = %token.kind, text = %token.text, "token");
                    self.tokens.push(token);
                }
            }
        }
        debug!(tokens = self.tokens.len(), "switch lexer: done");
        Ok(())
    }

    fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
