//! Authoring checks for macro tables.
//!
//! Registration only guarantees that placeholders agree with the arity. The
//! checks here catch templates that register fine but typeset badly:
//!
//! - unbalanced `{` / `}` (the engine rejects the whole formula),
//! - unbalanced `[` / `]` (usually a typo for the closing bracket),
//! - control sequences that neither the table nor the engine define.

use crate::table::MacroTable;
use crate::template::MacroEntry;
use moa_notation_syntax::{Lexer, SyntaxKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Math-mode commands MathJax and KaTeX provide out of the box.
const KNOWN_COMMANDS: &[&str] = &[
    // Greek
    "alpha", "beta", "gamma", "delta", "epsilon", "varepsilon", "zeta", "eta", "theta",
    "vartheta", "iota", "kappa", "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau",
    "upsilon", "phi", "varphi", "chi", "psi", "omega", "Gamma", "Delta", "Theta", "Lambda",
    "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi", "Omega",
    // Fonts and text
    "mathbb", "mathbf", "mathit", "mathrm", "mathsf", "mathtt", "mathcal", "mathfrak",
    "boldsymbol", "mbox", "text", "operatorname",
    // Accents and decorations
    "hat", "widehat", "tilde", "widetilde", "bar", "overline", "underline", "vec", "dot",
    "ddot",
    // Operators and symbols
    "nabla", "bigcirc", "circ", "bullet", "times", "cdot", "backslash", "setminus",
    "langle", "rangle", "lfloor", "rfloor", "lceil", "rceil", "ldots", "cdots", "sum",
    "prod", "frac", "sqrt", "left", "right", "in", "notin", "not", "forall", "exists",
    "leq", "geq", "neq", "to", "mapsto", "quad", "qquad",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A problem found in one macro's template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFinding {
    /// Macro the finding belongs to.
    pub name: String,
    pub severity: Severity,
    pub message: String,
    /// Byte offset into the template.
    pub offset: usize,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: \\{} (byte {}): {}",
            self.severity, self.name, self.offset, self.message
        )
    }
}

/// Checks every entry of `table`.
pub fn lint(table: &MacroTable) -> Vec<LintFinding> {
    table
        .iter()
        .flat_map(|entry| lint_entry(table, entry))
        .collect()
}

/// Checks a single entry against the table it lives in.
pub fn lint_entry(table: &MacroTable, entry: &MacroEntry) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    let mut report = |severity, message: String, offset| {
        findings.push(LintFinding {
            name: entry.name().to_string(),
            severity,
            message,
            offset,
        });
    };

    let mut braces: Vec<usize> = Vec::new();
    let mut brackets: Vec<usize> = Vec::new();
    let mut lexer = Lexer::new(entry.template().source());

    loop {
        let offset = lexer.offset();
        let (kind, text) = lexer.next_token();
        match kind {
            SyntaxKind::Eof => break,
            SyntaxKind::LBrace => braces.push(offset),
            SyntaxKind::RBrace => {
                if braces.pop().is_none() {
                    report(Severity::Error, "Unmatched '}'".to_string(), offset);
                }
            }
            SyntaxKind::LBracket => brackets.push(offset),
            SyntaxKind::RBracket => {
                if brackets.pop().is_none() {
                    report(Severity::Warning, "Unmatched ']'".to_string(), offset);
                }
            }
            SyntaxKind::Command => {
                let name = &text[1..];
                let is_word = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic());
                if is_word
                    && !table.contains(name)
                    && !KNOWN_COMMANDS.contains(&name)
                {
                    report(
                        Severity::Warning,
                        format!("Undefined control sequence '\\{}'", name),
                        offset,
                    );
                }
            }
            _ => {}
        }
    }

    for offset in braces {
        report(Severity::Error, "Unclosed '{'".to_string(), offset);
    }
    for offset in brackets {
        report(Severity::Warning, "Unclosed '['".to_string(), offset);
    }

    findings
}

/// True if any finding is severe enough to reject the table.
pub fn has_errors(findings: &[LintFinding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn test_builtin_has_no_errors() {
        let findings = lint(builtin::table());
        assert!(!has_errors(&findings), "{:?}", findings);
    }

    #[test]
    fn test_builtin_warnings_are_engine_extensions() {
        // \notslash and \notbackslash need a MathJax extension.
        let names: Vec<_> = lint(builtin::table())
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["compress", "expand"]);
    }

    #[test]
    fn test_stray_closing_brace() {
        let mut table = MacroTable::new();
        table.register("op", 1, r"\,\mathrm{#1}\,}").unwrap();
        let findings = lint(&table);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].message, "Unmatched '}'");
        assert_eq!(findings[0].offset, 15);
    }

    #[test]
    fn test_unclosed_bracket() {
        let mut table = MacroTable::new();
        table.register("acc", 2, r"[\;#1\;#2\;>").unwrap();
        let findings = lint(&table);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].message, "Unclosed '['");
        assert_eq!(findings[0].offset, 0);
    }

    #[test]
    fn test_undefined_control_sequence() {
        let mut table = MacroTable::new();
        table.register("ravel", 0, r"\rav\,").unwrap();
        let findings = lint(&table);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains(r"\rav"));

        table.register("rav", 0, r"\operatorname{rav}").unwrap();
        assert!(lint(&table).is_empty());
    }

    #[test]
    fn test_single_symbol_commands_accepted() {
        let mut table = MacroTable::new();
        table.register("gap", 0, r"\,\;\!\{\}").unwrap();
        assert!(lint(&table).is_empty());
    }

    #[test]
    fn test_finding_display() {
        let finding = LintFinding {
            name: "op".to_string(),
            severity: Severity::Error,
            message: "Unmatched '}'".to_string(),
            offset: 15,
        };
        assert_eq!(finding.to_string(), "error: \\op (byte 15): Unmatched '}'");
    }
}
