mod error;
pub mod lexer;
pub mod parser;
mod token;

pub use {
    error::{LexError, ParserError, SyntaxError},
    lexer::{Scanner, SwitchLexer, TableLexer},
    parser::Parser,
    token::{Token, TokenKind, UNDEFINED_TOKEN, is_digit, is_letter, token_kind_name},
};
