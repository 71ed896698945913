mod switch_lexer;
mod table;
mod table_lexer;

pub use switch_lexer::SwitchLexer;
pub use table::{CharClass, char_class};
pub use table_lexer::TableLexer;

use crate::{error::LexError, token::Token};

/// Capability shared by the lexers: tokenize the whole input up front, then
/// hand out tokens by position.
pub trait Scanner {
    /// Tokenizes the remaining input into the token buffer. Stops at the first
    /// ERROR token and returns it; tokens produced before it stay buffered.
    fn scan(&mut self) -> Result<(), LexError>;

    fn tokens(&self) -> &[Token];

    /// Token at `index`, `None` when out of bounds (including negatives).
    fn get_token(&self, index: isize) -> Option<&Token> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.tokens().get(index))
    }
}
