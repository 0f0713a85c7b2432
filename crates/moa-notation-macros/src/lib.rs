//! # MoA Notation Macros
//!
//! Macro table for typesetting Mathematics of Arrays (MoA) notation with
//! client-side TeX engines such as MathJax and KaTeX.
//!
//! ## Overview
//!
//! A [`MacroTable`] maps a macro name (`shape`, `reduce`, `getitem`, ...) to
//! an expansion template. A template is either constant notation or carries
//! `#1`..`#9` placeholders together with a declared arity:
//!
//! ```text
//!   name        arity   template
//!   ─────────   ─────   ───────────────────────
//!   shape       0       \rho\,
//!   vcc         2       <#1\;#2>
//!   getitem     2       {#2}\,\psi\,{#1}
//! ```
//!
//! Tables are validated while they are built: a duplicate name or a template
//! whose placeholders disagree with its arity is rejected before the table
//! can be handed to an engine. After that the table is read-only.
//!
//! ## Modules
//!
//! - [`table`] - registration, lookup and positional expansion
//! - [`template`] - placeholder parsing and per-entry validation
//! - [`builtin`] - the MoA notation shipped with the documentation
//! - [`expander`] - expands invocations inside whole formulas
//! - [`lint`] - authoring checks (brace balance, undefined commands)
//! - [`config`] - the `{"Macros": ...}` configuration object as JSON
//! - [`export`] - MathJax 2, MathJax 3 and KaTeX configuration snippets
//!
//! ## Examples
//!
//! ### Building a table
//!
//! ```
//! use moa_notation_macros::MacroTable;
//!
//! let mut table = MacroTable::new();
//! table.register("vc", 1, "<#1>")?;
//! table.register("Z", 0, r"\mathbb{Z}")?;
//!
//! assert_eq!(table.expand("vc", &["x"])?, "<x>");
//! assert!(table.lookup("missing").is_none());
//! assert!(table.expand("vc", &["x", "y"]).is_err());
//! # Ok::<(), moa_notation_macros::MacroError>(())
//! ```
//!
//! ### Rendering a formula with the built-in notation
//!
//! ```
//! use moa_notation_macros::{builtin, Expander};
//!
//! let out = Expander::new(builtin::table()).render(r"\shape \vcc{2}{3}")?;
//! assert_eq!(out, r"\rho\, <2\;3>");
//! # Ok::<(), moa_notation_macros::MacroError>(())
//! ```
//!
//! ### Exporting for MathJax
//!
//! ```
//! use moa_notation_macros::{builtin, export, ExportFormat};
//!
//! let js = export(builtin::table(), ExportFormat::MathJax2)?;
//! assert!(js.starts_with("MathJax.Hub.Config({"));
//! # Ok::<(), moa_notation_macros::MacroError>(())
//! ```

pub mod builtin;
pub mod config;
pub mod error;
pub mod expander;
pub mod export;
pub mod lint;
pub mod table;
pub mod template;

pub use config::{MacroDefinition, MathConfig};
pub use error::{AritySite, MacroError, Result};
pub use expander::Expander;
pub use export::{ExportFormat, export};
pub use lint::{LintFinding, Severity, lint};
pub use table::MacroTable;
pub use template::{MacroEntry, Template};
