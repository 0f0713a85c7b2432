//! Error types for macro registration, expansion and configuration loading.

use std::fmt;
use thiserror::Error;

/// Where an arity disagreement was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AritySite {
    /// The template's placeholders disagree with the declared arity.
    Template,
    /// A call supplied the wrong number of arguments.
    CallSite,
}

impl fmt::Display for AritySite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySite::Template => f.write_str("template"),
            AritySite::CallSite => f.write_str("call site"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MacroError {
    #[error("macro '\\{name}' is already registered")]
    DuplicateName { name: String },

    #[error("arity mismatch for '\\{name}' at {site}: expected {expected}, got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
        site: AritySite,
    },

    #[error("invalid macro name {name:?}: expected ASCII letters only")]
    InvalidName { name: String },

    #[error("macro '\\{name}' declares arity {arity}, at most 9 arguments are supported")]
    ArityOutOfRange { name: String, arity: usize },

    #[error("macro '\\{name}' has a malformed placeholder at byte {offset}")]
    InvalidPlaceholder { name: String, offset: usize },

    #[error("unknown macro '\\{name}'")]
    UnknownMacro { name: String },

    #[error("macro '\\{name}' is missing argument #{index}")]
    MissingArgument { name: String, index: usize },

    #[error("macro '\\{name}' expands into itself")]
    RecursiveMacro { name: String },

    #[error("expansion of '\\{name}' exceeded the maximum depth of {depth}")]
    RecursionLimit { name: String, depth: usize },

    #[error("invalid macro configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for macro table operations
pub type Result<T> = std::result::Result<T, MacroError>;
