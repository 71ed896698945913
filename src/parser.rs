//! Predictive recursive-descent parser for the calculator language.
//!
//! ```text
//! program    := stmtList END
//! stmtList   := stmt stmtList | ε
//! stmt       := ID ASSIGN expr | READ ID | WRITE expr
//! expr       := term termTail
//! termTail   := addOp term termTail | ε
//! term       := factor factorTail
//! factorTail := multOp factor factorTail | ε
//! factor     := ID | NUMBER | LPAREN expr RPAREN
//! addOp      := PLUS | MINUS
//! multOp     := TIMES | DIV
//! ```
//!
//! The parser only validates; no tree is built. One procedure per rule picks a
//! production from the current token alone and the first mismatch is returned
//! unchanged to the caller of [`Parser::parse`].

use tracing::{debug, trace};

use crate::{
    error::{ParserError, SyntaxError},
    lexer::Scanner,
    token::TokenKind::{self, *},
};

const PROGRAM: &[TokenKind] = &[Id, Read, Write, End];
const STMT: &[TokenKind] = &[Id, Read, Write];
const EXPR: &[TokenKind] = &[Id, Number, LParen];
const TERM_TAIL: &[TokenKind] = &[Plus, Minus, RParen, Id, Read, Write, End];
const FACTOR_TAIL: &[TokenKind] = &[Times, Div, Plus, Minus, RParen, Id, Read, Write, End];
const ADD_OP: &[TokenKind] = &[Plus, Minus];
const MULT_OP: &[TokenKind] = &[Times, Div];

/// Deepest parenthesis nesting `factor` accepts before giving up.
pub const MAX_NESTING: usize = 256;

type ParseResult = Result<(), ParserError>;

/// Borrows a lexer, scans it and checks the token buffer against the grammar.
#[derive(Debug)]
pub struct Parser<'s, S: Scanner + ?Sized> {
    scanner: &'s mut S,
    position: isize,
    lookahead: TokenKind,
    depth: usize,
}

impl<'s, S: Scanner + ?Sized> Parser<'s, S> {
    pub fn new(scanner: &'s mut S) -> Self {
        Self {
            scanner,
            position: 0,
            lookahead: End,
            depth: 0,
        }
    }

    /// Scans the input, then parses it as a `program`.
    ///
    /// `Ok(())` means the whole input is a valid program. A lexical failure is
    /// reported as [`ParserError::Scan`], a grammar failure as
    /// [`ParserError::Syntax`] naming the rule that rejected the token.
    pub fn parse(&mut self) -> ParseResult {
        self.scanner.scan()?;
        debug!(tokens = self.scanner.tokens().len(), "parser: start");

        self.position = 0;
        self.depth = 0;
        self.lookahead = self.read_kind();

        let result = self.program();
        match &result {
            Ok(()) => debug!("parser: accepted"),
            Err(err) => debug!(position = self.position, %err, "parser: rejected"),
        }
        result
    }

    #[inline]
    fn read_kind(&self) -> TokenKind {
        self.scanner
            .get_token(self.position)
            .map_or(End, |token| token.kind)
    }

    fn error(&self, rule: &'static str, expected: &'static [TokenKind]) -> ParseResult {
        Err(SyntaxError {
            rule,
            expected,
            actual: self.lookahead,
        }
        .into())
    }

    /// Consumes the current token if it is `expected`.
    fn match_kind(&mut self, rule: &'static str, expected: TokenKind) -> ParseResult {
        if self.lookahead != expected {
            return self.error(rule, expected.as_slice());
        }
        trace!(position = self.position, kind = %expected, rule, "match");
        self.position += 1;
        self.lookahead = self.read_kind();
        Ok(())
    }

    fn program(&mut self) -> ParseResult {
        match self.lookahead {
            Id | Read | Write | End => {
                self.stmt_list()?;
                self.match_kind("program", End)
            }
            _ => self.error("program", PROGRAM),
        }
    }

    // The ε-tailed rules loop instead of recursing on themselves. The set of
    // accepted programs and the first reported error are the same.

    fn stmt_list(&mut self) -> ParseResult {
        loop {
            match self.lookahead {
                Id | Read | Write => self.stmt()?,
                End => return Ok(()),
                _ => return self.error("stmtList", PROGRAM),
            }
        }
    }

    fn stmt(&mut self) -> ParseResult {
        match self.lookahead {
            Id => {
                self.match_kind("stmt", Id)?;
                self.match_kind("stmt", Assign)?;
                self.expr()
            }
            Read => {
                self.match_kind("stmt", Read)?;
                self.match_kind("stmt", Id)
            }
            Write => {
                self.match_kind("stmt", Write)?;
                self.expr()
            }
            _ => self.error("stmt", STMT),
        }
    }

    fn expr(&mut self) -> ParseResult {
        match self.lookahead {
            Id | Number | LParen => {
                self.term()?;
                self.term_tail()
            }
            _ => self.error("expr", EXPR),
        }
    }

    /// The grammar groups `+`/`-` to the right (`a - b - c` is `a - (b - c)`);
    /// an evaluator built on it has to regroup for the usual left association.
    fn term_tail(&mut self) -> ParseResult {
        loop {
            match self.lookahead {
                Plus | Minus => {
                    self.add_op()?;
                    self.term()?;
                }
                RParen | Id | Read | Write | End => return Ok(()),
                _ => return self.error("termTail", TERM_TAIL),
            }
        }
    }

    fn term(&mut self) -> ParseResult {
        match self.lookahead {
            Id | Number | LParen => {
                self.factor()?;
                self.factor_tail()
            }
            _ => self.error("term", EXPR),
        }
    }

    fn factor_tail(&mut self) -> ParseResult {
        loop {
            match self.lookahead {
                Times | Div => {
                    self.mult_op()?;
                    self.factor()?;
                }
                Plus | Minus | RParen | Id | Read | Write | End => return Ok(()),
                _ => return self.error("factorTail", FACTOR_TAIL),
            }
        }
    }

    fn factor(&mut self) -> ParseResult {
        match self.lookahead {
            Id => self.match_kind("factor", Id),
            Number => self.match_kind("factor", Number),
            LParen => {
                if self.depth == MAX_NESTING {
                    debug!(position = self.position, "parser: nesting limit");
                    return Err(ParserError::TooDeep { limit: MAX_NESTING });
                }
                self.match_kind("factor", LParen)?;
                self.depth += 1;
                let inner = self.expr();
                self.depth -= 1;
                inner?;
                self.match_kind("factor", RParen)
            }
            _ => self.error("factor", EXPR),
        }
    }

    fn add_op(&mut self) -> ParseResult {
        match self.lookahead {
            Plus => self.match_kind("addOp", Plus),
            Minus => self.match_kind("addOp", Minus),
            _ => self.error("addOp", ADD_OP),
        }
    }

    fn mult_op(&mut self) -> ParseResult {
        match self.lookahead {
            Times => self.match_kind("multOp", Times),
            Div => self.match_kind("multOp", Div),
            _ => self.error("multOp", MULT_OP),
        }
    }
}
