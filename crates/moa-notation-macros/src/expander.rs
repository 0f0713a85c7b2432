//! Rewrites macro invocations inside formula source.
//!
//! ## Argument scanning
//!
//! Arguments follow TeX's rules for undelimited parameters:
//!
//! - leading whitespace and comments are skipped,
//! - a brace group supplies its contents (outer braces removed),
//! - anything else supplies a single token; a text run gives up only its
//!   first character (`\vc xy` passes `x`, leaving `y`).
//!
//! Arguments are rendered before substitution. The substituted body is then
//! pushed back in front of the remaining input, so templates may invoke
//! other macros (`\id` uses `\op`) and a body ending in an argument-taking
//! macro reads its arguments from the text after the invocation.
//! Control sequences the table does not know pass through unchanged.
//!
//! Every token remembers the expansion that produced it. A macro invoked
//! from within its own expansion fails with
//! [`MacroError::RecursiveMacro`]; expansion and argument nesting together
//! are bounded by the maximum depth.

use crate::error::{MacroError, Result};
use crate::table::MacroTable;
use crate::template::push_tex;
use moa_notation_syntax::{Lexer, SyntaxKind};

/// Default bound on nested expansions.
pub const DEFAULT_MAX_DEPTH: usize = 64;

pub struct Expander<'t> {
    table: &'t MacroTable,
    max_depth: usize,
}

/// One macro expansion in progress.
struct Frame {
    name: String,
    parent: Option<usize>,
    depth: usize,
}

struct Token {
    kind: SyntaxKind,
    text: String,
    /// Expansion the token came from; `None` for the caller's input.
    frame: Option<usize>,
}

fn tokenize(source: &str, frame: Option<usize>) -> Vec<Token> {
    Lexer::new(source)
        .map(|(kind, text)| Token {
            kind,
            text: text.to_string(),
            frame,
        })
        .collect()
}

impl<'t> Expander<'t> {
    pub fn new(table: &'t MacroTable) -> Self {
        Self {
            table,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Expands every registered macro invocation in `formula`.
    pub fn render(&self, formula: &str) -> Result<String> {
        let mut out = String::with_capacity(formula.len());
        let mut frames = Vec::new();
        self.render_into(formula, None, 0, &mut frames, &mut out)?;
        Ok(out)
    }

    fn render_into(
        &self,
        source: &str,
        origin: Option<usize>,
        nesting: usize,
        frames: &mut Vec<Frame>,
        out: &mut String,
    ) -> Result<()> {
        let mut tokens = tokenize(source, origin);
        let mut pos = 0;

        while pos < tokens.len() {
            let entry = match tokens[pos].kind {
                SyntaxKind::Command => self.table.lookup(&tokens[pos].text),
                _ => None,
            };
            let Some(entry) = entry else {
                push_tex(out, &tokens[pos].text);
                pos += 1;
                continue;
            };
            let frame = tokens[pos].frame;
            pos += 1;

            let frame_depth = frame.map_or(0, |f| frames[f].depth);
            if nesting + frame_depth >= self.max_depth {
                return Err(MacroError::RecursionLimit {
                    name: entry.name().to_string(),
                    depth: self.max_depth,
                });
            }
            if is_expanding(frames, frame, entry.name()) {
                return Err(MacroError::RecursiveMacro {
                    name: entry.name().to_string(),
                });
            }

            let mut args = Vec::with_capacity(entry.arity());
            for index in 1..=entry.arity() {
                let (raw, arg_frame) = take_argument(&mut tokens, &mut pos).ok_or_else(|| {
                    MacroError::MissingArgument {
                        name: entry.name().to_string(),
                        index,
                    }
                })?;
                let mut rendered = String::with_capacity(raw.len());
                self.render_into(&raw, arg_frame, nesting + 1, frames, &mut rendered)?;
                args.push(rendered);
            }

            let body = entry.expand(&args)?;
            log::trace!("\\{} -> {}", entry.name(), body);

            frames.push(Frame {
                name: entry.name().to_string(),
                parent: frame,
                depth: frame_depth + 1,
            });
            let mut spliced = tokenize(&body, Some(frames.len() - 1));
            spliced.extend(tokens.drain(pos..));
            tokens = spliced;
            pos = 0;
        }

        Ok(())
    }
}

/// True if `name` is `frame` or one of the expansions it is nested in.
fn is_expanding(frames: &[Frame], mut frame: Option<usize>, name: &str) -> bool {
    while let Some(f) = frame {
        if frames[f].name == name {
            return true;
        }
        frame = frames[f].parent;
    }
    false
}

/// Consumes one undelimited argument starting at `pos`, returning its text
/// and the expansion its first token came from.
///
/// Returns `None` when the input ends, or a closing brace arrives, before an
/// argument is complete.
fn take_argument(tokens: &mut [Token], pos: &mut usize) -> Option<(String, Option<usize>)> {
    while *pos < tokens.len() && tokens[*pos].kind.is_trivia() {
        *pos += 1;
    }
    let token = tokens.get_mut(*pos)?;
    let frame = token.frame;

    match token.kind {
        SyntaxKind::LBrace => {
            let mut depth = 1usize;
            let mut arg = String::new();
            *pos += 1;
            while let Some(token) = tokens.get(*pos) {
                *pos += 1;
                match token.kind {
                    SyntaxKind::LBrace => depth += 1,
                    SyntaxKind::RBrace => {
                        depth -= 1;
                        if depth == 0 {
                            return Some((arg, frame));
                        }
                    }
                    _ => {}
                }
                push_tex(&mut arg, &token.text);
            }
            None
        }
        SyntaxKind::RBrace => None,
        SyntaxKind::Text => {
            let first = token.text.chars().next()?;
            let rest = token.text.split_off(first.len_utf8());
            if rest.is_empty() {
                *pos += 1;
                Some((std::mem::take(&mut token.text), frame))
            } else {
                let head = std::mem::replace(&mut token.text, rest);
                Some((head, frame))
            }
        }
        _ => {
            *pos += 1;
            Some((token.text.clone(), frame))
        }
    }
}
