//! # MoA Notation Syntax
//!
//! Token-level view of TeX math source, shared by macro templates and the
//! formulas that invoke them.
//!
//! The [`Lexer`](lexer::Lexer) never fails: every byte of the input belongs to
//! exactly one token, so concatenating the token texts reproduces the input.

pub mod lexer;

pub use lexer::Lexer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Command,   // \rho, \,
    Parameter, // #1 .. #9, ##
    Dollar,
    Whitespace,
    Comment, // % ...
    Text,
    Error, // stray '#'

    Eof,
}

impl SyntaxKind {
    /// Returns true for tokens that carry no meaning for TeX argument scanning.
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }
}

/// Returns the argument index referenced by a `#n` parameter token.
///
/// `##` (an escaped hash) and malformed text return `None`.
pub fn parameter_index(text: &str) -> Option<u8> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('#'), Some(d @ '1'..='9'), None) => Some(d as u8 - b'0'),
        _ => None,
    }
}
