use crate::SyntaxKind;

/// A lexer for TeX math source and macro templates.
///
/// ## Overview
///
/// The lexer performs **character-level scanning**, producing a stream of
/// ([`SyntaxKind`], `&str`) tuples. It handles:
///
/// - **Commands**: `\rho`, `\mathbb`, and single-symbol commands like `\,` or `\;`
/// - **Parameters**: `#1` through `#9`, and the escaped hash `##`
/// - **Delimiters**: `{`, `}`, `[`, `]`
/// - **Math shift**: `$`
/// - **Comments**: `%` through end of line
/// - **Whitespace**: consecutive whitespace collapsed into single tokens
/// - **Text**: everything else, consumed greedily until a special character
///
/// Command names are ASCII letters only, matching the letter category codes
/// MathJax and KaTeX use when scanning control sequences.
///
/// ## Examples
///
/// ```
/// use moa_notation_syntax::lexer::Lexer;
/// use moa_notation_syntax::SyntaxKind;
///
/// let tokens: Vec<_> = Lexer::new(r"<#1\;#2>").collect();
///
/// assert_eq!(tokens[0], (SyntaxKind::Text, "<"));
/// assert_eq!(tokens[1], (SyntaxKind::Parameter, "#1"));
/// assert_eq!(tokens[2], (SyntaxKind::Command, r"\;"));
/// ```
pub struct Lexer<'a> {
    /// The input source text being lexed.
    input: &'a str,
    /// Current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Returns the next token (kind, text).
    /// If EOF, returns (SyntaxKind::Eof, "").
    pub fn next_token(&mut self) -> (SyntaxKind, &'a str) {
        let start = self.position;
        let rest = &self.input[start..];
        let mut chars = rest.chars();
        let Some(c) = chars.next() else {
            return (SyntaxKind::Eof, "");
        };

        let kind = match c {
            '\\' => {
                self.position += c.len_utf8();
                if let Some(next) = chars.next() {
                    if next.is_ascii_alphabetic() {
                        // Multi-letter command: \mathbb
                        self.position += next.len_utf8();
                        while let Some(n) = self.input[self.position..].chars().next() {
                            if n.is_ascii_alphabetic() {
                                self.position += n.len_utf8();
                            } else {
                                break;
                            }
                        }
                    } else {
                        // Single-symbol command: \, or \{
                        self.position += next.len_utf8();
                    }
                }
                SyntaxKind::Command
            }
            '#' => {
                self.position += c.len_utf8();
                match chars.next() {
                    Some(n @ ('#' | '1'..='9')) => {
                        self.position += n.len_utf8();
                        SyntaxKind::Parameter
                    }
                    _ => SyntaxKind::Error,
                }
            }
            '{' => {
                self.position += c.len_utf8();
                SyntaxKind::LBrace
            }
            '}' => {
                self.position += c.len_utf8();
                SyntaxKind::RBrace
            }
            '[' => {
                self.position += c.len_utf8();
                SyntaxKind::LBracket
            }
            ']' => {
                self.position += c.len_utf8();
                SyntaxKind::RBracket
            }
            '$' => {
                self.position += c.len_utf8();
                SyntaxKind::Dollar
            }
            '%' => {
                self.position += c.len_utf8();
                while let Some(n) = self.input[self.position..].chars().next() {
                    if n == '\n' || n == '\r' {
                        break;
                    }
                    self.position += n.len_utf8();
                }
                SyntaxKind::Comment
            }
            c if c.is_whitespace() => {
                self.position += c.len_utf8();
                while let Some(n) = self.input[self.position..].chars().next() {
                    if n.is_whitespace() {
                        self.position += n.len_utf8();
                    } else {
                        break;
                    }
                }
                SyntaxKind::Whitespace
            }
            _ => {
                self.position += c.len_utf8();
                while let Some(n) = self.input[self.position..].chars().next() {
                    match n {
                        '\\' | '#' | '{' | '}' | '[' | ']' | '%' | '$' => break,
                        c if c.is_whitespace() => break,
                        _ => self.position += n.len_utf8(),
                    }
                }
                SyntaxKind::Text
            }
        };

        (kind, &self.input[start..self.position])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (SyntaxKind, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, text) = self.next_token();
        if kind == SyntaxKind::Eof {
            None
        } else {
            Some((kind, text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<(SyntaxKind, &str)> {
        Lexer::new(input).collect()
    }

    #[test]
    fn test_template_tokens() {
        let tokens = tokenize(r"{}_{#1}\!\red\,");
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::LBrace, "{"),
                (SyntaxKind::RBrace, "}"),
                (SyntaxKind::Text, "_"),
                (SyntaxKind::LBrace, "{"),
                (SyntaxKind::Parameter, "#1"),
                (SyntaxKind::RBrace, "}"),
                (SyntaxKind::Command, r"\!"),
                (SyntaxKind::Command, r"\red"),
                (SyntaxKind::Command, r"\,"),
            ]
        );
    }

    #[test]
    fn test_escaped_hash() {
        let tokens = tokenize("a##b");
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::Text, "a"),
                (SyntaxKind::Parameter, "##"),
                (SyntaxKind::Text, "b"),
            ]
        );
    }

    #[test]
    fn test_stray_hash() {
        assert_eq!(tokenize("#"), vec![(SyntaxKind::Error, "#")]);
        assert_eq!(
            tokenize("#0"),
            vec![(SyntaxKind::Error, "#"), (SyntaxKind::Text, "0")]
        );
    }

    #[test]
    fn test_multi_digit_parameter_is_split() {
        // TeX only ever reads one digit after '#'.
        assert_eq!(
            tokenize("#12"),
            vec![(SyntaxKind::Parameter, "#1"), (SyntaxKind::Text, "2")]
        );
    }

    #[test]
    fn test_command_stops_at_non_ascii_letter() {
        assert_eq!(
            tokenize(r"\rhoé"),
            vec![(SyntaxKind::Command, r"\rho"), (SyntaxKind::Text, "é")]
        );
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(tokenize("x\\"), vec![
            (SyntaxKind::Text, "x"),
            (SyntaxKind::Command, "\\"),
        ]);
    }

    #[test]
    fn test_hash_before_whitespace_is_error() {
        assert_eq!(
            tokenize("# 1"),
            vec![
                (SyntaxKind::Error, "#"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Text, "1"),
            ]
        );
        assert_eq!(
            tokenize("##\n#"),
            vec![
                (SyntaxKind::Parameter, "##"),
                (SyntaxKind::Whitespace, "\n"),
                (SyntaxKind::Error, "#"),
            ]
        );
    }

    #[test]
    fn test_parameters_around_comment() {
        assert_eq!(
            tokenize("#1 % #2\n#3"),
            vec![
                (SyntaxKind::Parameter, "#1"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Comment, "% #2"),
                (SyntaxKind::Whitespace, "\n"),
                (SyntaxKind::Parameter, "#3"),
            ]
        );
        // A stray hash inside a comment is not an error
        assert_eq!(
            tokenize("%#\r#"),
            vec![
                (SyntaxKind::Comment, "%#"),
                (SyntaxKind::Whitespace, "\r"),
                (SyntaxKind::Error, "#"),
            ]
        );
    }

    #[test]
    fn test_parameter_after_command_and_space() {
        assert_eq!(
            tokenize(r"\vc #1"),
            vec![
                (SyntaxKind::Command, r"\vc"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Parameter, "#1"),
            ]
        );
        assert_eq!(
            tokenize(r"\##1"),
            vec![(SyntaxKind::Command, r"\#"), (SyntaxKind::Parameter, "#1")]
        );
    }

    #[test]
    fn test_parameter_inside_math_shift() {
        assert_eq!(
            tokenize("$#1$#"),
            vec![
                (SyntaxKind::Dollar, "$"),
                (SyntaxKind::Parameter, "#1"),
                (SyntaxKind::Dollar, "$"),
                (SyntaxKind::Error, "#"),
            ]
        );
    }

    #[test]
    fn test_offset_tracks_bytes() {
        let mut lexer = Lexer::new(r"é\rho");
        assert_eq!(lexer.offset(), 0);
        lexer.next_token();
        assert_eq!(lexer.offset(), 2);
        lexer.next_token();
        assert_eq!(lexer.offset(), 6);
        assert_eq!(lexer.next_token(), (SyntaxKind::Eof, ""));
    }
}
