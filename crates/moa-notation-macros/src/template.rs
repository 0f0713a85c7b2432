//! Expansion templates: literal notation interleaved with `#n` placeholders.

use crate::error::{AritySite, MacroError, Result};
use moa_notation_syntax::{Lexer, SyntaxKind, parameter_index};
use std::collections::BTreeSet;
use std::fmt;

/// Highest placeholder index TeX can address.
pub const MAX_ARITY: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// 1-based argument index.
    Placeholder(usize),
}

/// A parsed macro body.
///
/// Parsing only checks that every `#` forms a valid parameter token; arity
/// checks live in [`MacroEntry::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source`, reporting malformed placeholders against `name`.
    pub fn parse(name: &str, source: &str) -> Result<Self> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut lexer = Lexer::new(source);

        loop {
            let offset = lexer.offset();
            let (kind, text) = lexer.next_token();
            let literal = match kind {
                SyntaxKind::Eof => break,
                SyntaxKind::Error => {
                    return Err(MacroError::InvalidPlaceholder {
                        name: name.to_string(),
                        offset,
                    });
                }
                SyntaxKind::Parameter => match parameter_index(text) {
                    Some(index) => {
                        segments.push(Segment::Placeholder(index as usize));
                        continue;
                    }
                    // `##` stands for a literal hash, but `##1` would read
                    // back as a placeholder once expanded
                    None if source[lexer.offset()..].starts_with(|c: char| c.is_ascii_digit()) => {
                        return Err(MacroError::InvalidPlaceholder {
                            name: name.to_string(),
                            offset,
                        });
                    }
                    None => "#",
                },
                _ => text,
            };
            match segments.last_mut() {
                Some(Segment::Literal(buf)) => buf.push_str(literal),
                _ => segments.push(Segment::Literal(literal.to_string())),
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template exactly as authored.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct placeholder indices, ascending.
    pub fn placeholders(&self) -> BTreeSet<usize> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(index) => Some(*index),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Number of distinct placeholders referenced by the template.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders().len()
    }

    /// Substitutes `args` positionally. Callers must have checked the count.
    fn substitute<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => push_tex(&mut out, text),
                Segment::Placeholder(index) => push_tex(&mut out, args[*index - 1].as_ref()),
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Appends `text` to `out` without letting a trailing control word in `out`
/// absorb leading letters of `text`: `\rho` followed by `b` becomes
/// `\rho b`, not `\rhob`.
pub(crate) fn push_tex(out: &mut String, text: &str) {
    if text.starts_with(|c: char| c.is_ascii_alphabetic()) && ends_with_control_word(out) {
        out.push(' ');
    }
    out.push_str(text);
}

/// True if `text` ends in `\` followed by ASCII letters, where that backslash
/// is not itself escaped.
fn ends_with_control_word(text: &str) -> bool {
    let head = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if head.len() == text.len() {
        return false;
    }
    let backslashes = head.len() - head.trim_end_matches('\\').len();
    backslashes % 2 == 1
}

/// Returns true if `name` can be invoked as a TeX control sequence.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// A single registered macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroEntry {
    name: String,
    arity: usize,
    template: Template,
}

impl MacroEntry {
    /// Builds a validated entry.
    ///
    /// The distinct placeholders of `template` must be exactly `#1..#arity`.
    pub fn new(name: impl Into<String>, arity: usize, template: &str) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(MacroError::InvalidName { name });
        }
        if arity > MAX_ARITY {
            return Err(MacroError::ArityOutOfRange { name, arity });
        }

        let template = Template::parse(&name, template)?;
        let placeholders = template.placeholders();
        let highest = placeholders.last().copied().unwrap_or(0);
        if placeholders.len() != arity || highest != arity {
            let found = if highest > arity {
                highest
            } else {
                placeholders.len()
            };
            return Err(MacroError::ArityMismatch {
                name,
                expected: arity,
                found,
                site: AritySite::Template,
            });
        }

        Ok(Self {
            name,
            arity,
            template,
        })
    }

    /// Convenience constructor for arity-0 entries.
    pub fn constant(name: impl Into<String>, template: &str) -> Result<Self> {
        Self::new(name, 0, template)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// True for fixed strings.
    pub fn is_constant(&self) -> bool {
        self.arity == 0
    }

    /// Substitutes `args` into the template.
    pub fn expand<S: AsRef<str>>(&self, args: &[S]) -> Result<String> {
        if args.len() != self.arity {
            return Err(MacroError::ArityMismatch {
                name: self.name.clone(),
                expected: self.arity,
                found: args.len(),
                site: AritySite::CallSite,
            });
        }
        Ok(self.template.substitute(args))
    }
}
