//! Serializes a table into the configuration snippets each engine loads.

use crate::config::MathConfig;
use crate::error::Result;
use crate::table::MacroTable;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// `MathJax.Hub.Config({ TeX: { Macros: ... } });`
    #[default]
    MathJax2,
    /// `window.MathJax = { tex: { macros: ... } };`
    MathJax3,
    /// KaTeX `macros` option; arity is implied by the template.
    Katex,
    /// The bare `{"Macros": ...}` object.
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::MathJax2,
        ExportFormat::MathJax3,
        ExportFormat::Katex,
        ExportFormat::Json,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::MathJax2 => "mathjax2",
            ExportFormat::MathJax3 => "mathjax3",
            ExportFormat::Katex => "katex",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown export format '{}', expected one of: mathjax2, mathjax3, katex, json",
                    s
                )
            })
    }
}

/// Renders `table` in the requested format.
pub fn export(table: &MacroTable, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::MathJax2 => Ok(format!(
            "MathJax.Hub.Config({{\n    TeX: {{\n        Macros: {{\n{}\n        }}\n    }}\n}});\n",
            js_macro_entries(table)?
        )),
        ExportFormat::MathJax3 => Ok(format!(
            "window.MathJax = {{\n    tex: {{\n        macros: {{\n{}\n        }}\n    }}\n}};\n",
            js_macro_entries(table)?
        )),
        ExportFormat::Katex => Ok(serde_json::to_string_pretty(&KatexMacros(table))? + "\n"),
        ExportFormat::Json => Ok(MathConfig::from_table(table).to_json_string()? + "\n"),
    }
}

/// `name: "template"` / `name: ["template", n]` lines for a JS object
/// literal. Names are bare identifiers since they are ASCII letters.
fn js_macro_entries(table: &MacroTable) -> Result<String> {
    let mut lines = Vec::with_capacity(table.len());
    for entry in table {
        let template = serde_json::to_string(entry.template().source())?;
        let value = if entry.is_constant() {
            template
        } else {
            format!("[{}, {}]", template, entry.arity())
        };
        lines.push(format!("            {}: {}", entry.name(), value));
    }
    Ok(lines.join(",\n"))
}

struct KatexMacros<'a>(&'a MacroTable);

impl Serialize for KatexMacros<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|entry| (format!("\\{}", entry.name()), entry.template().source())),
        )
    }
}
