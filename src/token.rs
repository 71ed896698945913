use phf::phf_map;
use strum::{Display, EnumCount, FromRepr, IntoStaticStr, VariantArray};

pub const UNDEFINED_TOKEN: &str = "undefined token";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumCount, FromRepr, VariantArray,
)]
#[repr(u8)]
pub enum TokenKind {
    Assign,
    Plus,
    Minus,
    Times,
    Div,
    #[strum(serialize = "Lparen")]
    LParen,
    #[strum(serialize = "Rparen")]
    RParen,
    Id,
    Read,
    Write,
    Number,
    // never leave the table-driven lexer
    #[strum(serialize = "undefined token")]
    Space,
    #[strum(serialize = "undefined token")]
    Comment,
    Error,
    End,
}

impl TokenKind {
    /// Diagnostic name of the kind, e.g. `Lparen` or `Id`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// A one-element slice holding `self`, borrowed from the variant table so
    /// it can be stored in a `SyntaxError` without allocating.
    pub fn as_slice(self) -> &'static [TokenKind] {
        let index = self as usize;
        &Self::VARIANTS[index..=index]
    }
}

/// Name lookup over raw kind codes. Codes outside the enumeration map to
/// [`UNDEFINED_TOKEN`].
pub fn token_kind_name(code: usize) -> &'static str {
    u8::try_from(code)
        .ok()
        .and_then(TokenKind::from_repr)
        .map_or(UNDEFINED_TOKEN, TokenKind::name)
}

pub(crate) static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "read" => TokenKind::Read,
    "write" => TokenKind::Write,
};

#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub(crate) fn end() -> Self {
        Self::new(TokenKind::End, "")
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self::new(TokenKind::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Assign.name(), "Assign");
        assert_eq!(TokenKind::LParen.name(), "Lparen");
        assert_eq!(TokenKind::RParen.to_string(), "Rparen");
        assert_eq!(TokenKind::Id.name(), "Id");
        assert_eq!(TokenKind::End.name(), "End");
        assert_eq!(TokenKind::Space.name(), UNDEFINED_TOKEN);
        assert_eq!(TokenKind::Comment.name(), UNDEFINED_TOKEN);
    }

    #[test]
    fn test_kind_name_by_code() {
        assert_eq!(token_kind_name(0), "Assign");
        assert_eq!(token_kind_name(10), "Number");
        assert_eq!(token_kind_name(14), "End");
        assert_eq!(token_kind_name(TokenKind::COUNT), UNDEFINED_TOKEN);
        assert_eq!(token_kind_name(usize::MAX), UNDEFINED_TOKEN);
    }

    #[test]
    fn test_as_slice() {
        for kind in TokenKind::VARIANTS {
            assert_eq!(kind.as_slice(), &[*kind]);
        }
    }

    #[test]
    fn test_char_predicates() {
        assert!((b'0'..=b'9').all(is_digit));
        assert!((b'a'..=b'z').chain(b'A'..=b'Z').all(is_letter));
        for c in 0..=u8::MAX {
            assert!(!(is_digit(c) && is_letter(c)));
        }
        assert!(!is_letter(b'_'));
        assert!(!is_digit(b'.'));
        assert!(!is_letter(0xE9));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(KEYWORDS.get("read"), Some(&TokenKind::Read));
        assert_eq!(KEYWORDS.get("write"), Some(&TokenKind::Write));
        assert_eq!(KEYWORDS.get("readme"), None);
        assert_eq!(KEYWORDS.get("READ"), None);
    }
}
