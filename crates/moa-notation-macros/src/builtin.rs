//! The Mathematics of Arrays notation used throughout the documentation.

use crate::error::Result;
use crate::table::MacroTable;
use once_cell::sync::Lazy;

/// `(name, arity, template)` for every built-in macro, in export order.
pub const MOA_MACROS: &[(&str, usize, &str)] = &[
    // Math notation
    ("Z", 0, r"\mathbb{Z}"), // set of integers
    // MoA notation
    ("minus", 0, r"{}^{\boldsymbol{\mbox{-}}\!}"), // scalar negation
    ("rop", 1, r"\,\mathrm{#1}^*\,"),              // relational operation
    ("op", 1, r"\,\mathrm{#1}\,"),                 // binary operation
    ("uop", 1, r"\mathrm{#1}\,"),                  // unary operation
    ("hop", 2, r"{{}_{#1}\!\Omega_{#2}}\,"),       // higher order operation
    ("id", 1, r"\mathrm{id}(\op{#1})"),            // identity of an operation
    ("dims", 0, r"\delta\,"),
    ("shape", 0, r"\rho\,"),
    ("size", 0, r"\tau\,"),
    ("reshape", 0, r"\,\widehat{\rho}\,"),
    ("drop", 0, r"\,\nabla\,"),
    ("take", 0, r"\,\Delta\,"),
    ("product", 0, r"\pi\,"),
    ("rav", 0, r"\operatorname{rav}"),
    ("red", 0, r"\operatorname{red}"),
    ("ravel", 0, r"\rav\,"),
    ("range", 0, r"\iota\,"),
    ("transpose", 0, r"\bigcirc\!\!\!\!\!\backslash\;"),
    // Vectors
    ("vc", 1, r"<#1>"),
    ("vcc", 2, r"<#1\;#2>"),
    ("vccc", 3, r"<#1\;#2\;#3>"),
    ("vcccc", 4, r"<#1\;#2\;#3\;#4>"),
    // Arrays
    ("ac", 1, r"[\;#1\;]"),
    ("acc", 2, r"[\;#1\;#2\;]"),
    ("accc", 3, r"[\;#1\;#2\;#3\;]"),
    ("acccc", 4, r"[\;#1\;#2\;#3\;#4\;]"),
    ("avcc", 2, r"[\;<#1>\;<#2>\;]"),
    ("aacc", 2, r"[\;[\;#1\;]\;[\;#2\;]\;]"),
    ("aaccIcc", 4, r"[\;[\;#1\;#2\;]\;[\;#3\;#4\;]\;]"),
    // Operations
    ("outerprod", 1, r"\,\bullet_{#1}\,"),
    ("innerprod", 2, r"\,{}_{#1}\!\!\bullet_{#2}\,"),
    ("reduce", 1, r"{}_{#1}\!\red\,"),
    ("getitem", 2, r"{#2}\,\psi\,{#1}"), // psi: index #1 into #2
    ("scan", 1, r"{}_{\op{#1}\!}\mathrm{scan}\,"),
    ("kron", 0, r"\bigcirc\,\!\!\!\!\!\!\times\;"),
    ("cat", 0, r"+\!\!\!+"),
    ("gu", 0, r"\mathrm{gu}\,"),
    ("gd", 0, r"\mathrm{gd}\,"),
    ("compress", 0, r"\,\notslash\,"),
    ("expand", 0, r"\,\notbackslash\,"),
    ("reverse", 0, r"\phi\,"),
    ("rotate", 1, r"{#1}\theta\,"),
];

static MOA_TABLE: Lazy<MacroTable> =
    Lazy::new(|| build().expect("built-in MoA macro definitions are valid"));

/// Builds a fresh, owned copy of the built-in table.
pub fn build() -> Result<MacroTable> {
    let mut table = MacroTable::new();
    for &(name, arity, template) in MOA_MACROS {
        table.register(name, arity, template)?;
    }
    Ok(table)
}

/// The shared built-in table.
pub fn table() -> &'static MacroTable {
    &MOA_TABLE
}
