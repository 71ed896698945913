//! DFA used by [`TableLexer`](super::TableLexer).
//!
//! Rows are states, columns are character classes and a cell holds the next
//! state, or `None` where the longest match ends. Keywords, whitespace and
//! comments are plain token kinds here; filtering them is left to the lexer.

use strum::{EnumCount, VariantArray};

use crate::token::{TokenKind, is_digit, is_letter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, VariantArray)]
#[repr(u8)]
pub enum CharClass {
    Space,
    Newline,
    Slash,
    Star,
    LParen,
    RParen,
    Plus,
    Minus,
    Colon,
    Equal,
    Dot,
    Digit,
    Letter,
    Other,
}

/// Classifies every byte; anything unrecognised is [`CharClass::Other`].
pub fn char_class(c: u8) -> CharClass {
    match c {
        b' ' | b'\t' => CharClass::Space,
        b'\n' => CharClass::Newline,
        b'/' => CharClass::Slash,
        b'*' => CharClass::Star,
        b'(' => CharClass::LParen,
        b')' => CharClass::RParen,
        b'+' => CharClass::Plus,
        b'-' => CharClass::Minus,
        b':' => CharClass::Colon,
        b'=' => CharClass::Equal,
        b'.' => CharClass::Dot,
        c if is_digit(c) => CharClass::Digit,
        c if is_letter(c) => CharClass::Letter,
        _ => CharClass::Other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, VariantArray)]
#[repr(u8)]
pub(crate) enum State {
    Start,
    Slash,
    LineComment,
    BlockComment,
    BlockCommentStar,
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Colon,
    Assign,
    Dot,
    Integer,
    Fraction,
    Identifier,
    Space,
    CommentEnd,
}

impl State {
    /// Token kind produced when the longest match ends in this state.
    pub(crate) const fn accepts(self) -> TokenKind {
        match self {
            State::Slash => TokenKind::Div,
            State::LineComment | State::CommentEnd => TokenKind::Comment,
            State::LParen => TokenKind::LParen,
            State::RParen => TokenKind::RParen,
            State::Plus => TokenKind::Plus,
            State::Minus => TokenKind::Minus,
            State::Star => TokenKind::Times,
            State::Assign => TokenKind::Assign,
            State::Integer | State::Fraction => TokenKind::Number,
            State::Identifier => TokenKind::Id,
            State::Space => TokenKind::Space,
            State::Start
            | State::BlockComment
            | State::BlockCommentStar
            | State::Colon
            | State::Dot => TokenKind::Error,
        }
    }

    #[inline]
    pub(crate) fn next(self, class: CharClass) -> Option<State> {
        TRANSITIONS[self as usize][class as usize]
    }
}

type Table = [[Option<State>; CharClass::COUNT]; State::COUNT];

const fn set(table: &mut Table, from: State, class: CharClass, to: State) {
    table[from as usize][class as usize] = Some(to);
}

const fn fill(table: &mut Table, from: State, to: State) {
    let mut class = 0;
    while class < CharClass::COUNT {
        table[from as usize][class] = Some(to);
        class += 1;
    }
}

const fn build() -> Table {
    use CharClass as C;

    let mut t: Table = [[None; CharClass::COUNT]; State::COUNT];

    set(&mut t, State::Start, C::Space, State::Space);
    set(&mut t, State::Start, C::Newline, State::Space);
    set(&mut t, State::Start, C::Slash, State::Slash);
    set(&mut t, State::Start, C::Star, State::Star);
    set(&mut t, State::Start, C::LParen, State::LParen);
    set(&mut t, State::Start, C::RParen, State::RParen);
    set(&mut t, State::Start, C::Plus, State::Plus);
    set(&mut t, State::Start, C::Minus, State::Minus);
    set(&mut t, State::Start, C::Colon, State::Colon);
    set(&mut t, State::Start, C::Dot, State::Dot);
    set(&mut t, State::Start, C::Digit, State::Integer);
    set(&mut t, State::Start, C::Letter, State::Identifier);

    // `//` and `/*`
    set(&mut t, State::Slash, C::Slash, State::LineComment);
    set(&mut t, State::Slash, C::Star, State::BlockComment);

    fill(&mut t, State::LineComment, State::LineComment);
    set(&mut t, State::LineComment, C::Newline, State::CommentEnd);

    fill(&mut t, State::BlockComment, State::BlockComment);
    set(&mut t, State::BlockComment, C::Star, State::BlockCommentStar);

    fill(&mut t, State::BlockCommentStar, State::BlockComment);
    set(&mut t, State::BlockCommentStar, C::Star, State::BlockCommentStar);
    set(&mut t, State::BlockCommentStar, C::Slash, State::CommentEnd);

    set(&mut t, State::Colon, C::Equal, State::Assign);

    set(&mut t, State::Dot, C::Digit, State::Fraction);
    set(&mut t, State::Integer, C::Digit, State::Integer);
    set(&mut t, State::Integer, C::Dot, State::Fraction);
    set(&mut t, State::Fraction, C::Digit, State::Fraction);

    set(&mut t, State::Identifier, C::Letter, State::Identifier);

    set(&mut t, State::Space, C::Space, State::Space);
    set(&mut t, State::Space, C::Newline, State::Space);

    t
}

static TRANSITIONS: Table = build();

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;

    fn reachable() -> HashSet<State> {
        let mut seen = HashSet::from([State::Start]);
        let mut queue = VecDeque::from([State::Start]);
        while let Some(state) = queue.pop_front() {
            for class in CharClass::VARIANTS {
                if let Some(next) = state.next(*class) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn test_every_state_is_reachable() {
        let seen = reachable();
        for state in State::VARIANTS {
            assert!(seen.contains(state), "{state:?} is unreachable");
        }
    }

    #[test]
    fn test_start_is_never_reentered() {
        for state in State::VARIANTS {
            for class in CharClass::VARIANTS {
                assert_ne!(state.next(*class), Some(State::Start), "{state:?} --{class:?}-->");
            }
        }
    }

    #[test]
    fn test_states_never_accept_keywords_or_end() {
        for state in State::VARIANTS {
            assert_ne!(state.accepts(), TokenKind::End, "{state:?}");
            assert_ne!(state.accepts(), TokenKind::Read, "{state:?}");
            assert_ne!(state.accepts(), TokenKind::Write, "{state:?}");
        }
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        let terminal = [
            State::LParen,
            State::RParen,
            State::Plus,
            State::Minus,
            State::Star,
            State::Assign,
            State::CommentEnd,
        ];
        for state in terminal {
            for class in CharClass::VARIANTS {
                assert_eq!(state.next(*class), None, "{state:?} --{class:?}-->");
            }
        }
    }

    #[test]
    fn test_comment_states_consume_everything() {
        for class in CharClass::VARIANTS {
            assert!(State::LineComment.next(*class).is_some());
            assert!(State::BlockComment.next(*class).is_some());
            assert!(State::BlockCommentStar.next(*class).is_some());
        }
    }

    #[test]
    fn test_char_class_partition() {
        let mut counts = [0usize; CharClass::COUNT];
        for c in 0..=u8::MAX {
            counts[char_class(c) as usize] += 1;
        }
        assert_eq!(counts[CharClass::Digit as usize], 10);
        assert_eq!(counts[CharClass::Letter as usize], 52);
        assert_eq!(counts[CharClass::Space as usize], 2);
        assert_eq!(counts.iter().sum::<usize>(), 256);
        assert_eq!(char_class(b'@'), CharClass::Other);
        assert_eq!(char_class(b'\r'), CharClass::Other);
        assert_eq!(char_class(0xFF), CharClass::Other);
    }
}
