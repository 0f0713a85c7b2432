use crate::error::{MacroError, Result};
use crate::template::MacroEntry;
use std::collections::HashMap;

/// Name to expansion bindings handed to a rendering engine.
///
/// Entries keep their registration order, which is also the order every
/// export writes them in. Once built, a table is only ever read; share it by
/// reference across threads.
#[derive(Debug, Clone, Default)]
pub struct MacroTable {
    entries: Vec<MacroEntry>,
    index: HashMap<String, usize>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from pre-validated entries, rejecting duplicate names.
    pub fn from_entries(entries: impl IntoIterator<Item = MacroEntry>) -> Result<Self> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    /// Validates and adds a macro.
    ///
    /// Fails with [`MacroError::DuplicateName`] if `name` is taken and with
    /// [`MacroError::ArityMismatch`] if the template does not reference
    /// exactly `#1..#arity`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        template: &str,
    ) -> Result<&MacroEntry> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(MacroError::DuplicateName { name });
        }
        let entry = MacroEntry::new(name, arity, template)?;
        self.insert(entry)?;
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Adds an already validated entry.
    pub fn insert(&mut self, entry: MacroEntry) -> Result<()> {
        if self.index.contains_key(entry.name()) {
            return Err(MacroError::DuplicateName {
                name: entry.name().to_string(),
            });
        }
        log::debug!(
            "Registered macro \\{} with arity {}",
            entry.name(),
            entry.arity()
        );
        self.index.insert(entry.name().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Finds a macro by name. A leading backslash is ignored.
    pub fn lookup(&self, name: &str) -> Option<&MacroEntry> {
        let name = name.strip_prefix('\\').unwrap_or(name);
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Substitutes `args` into the named macro's template.
    pub fn expand<S: AsRef<str>>(&self, name: &str, args: &[S]) -> Result<String> {
        let entry = self.lookup(name).ok_or_else(|| MacroError::UnknownMacro {
            name: name.trim_start_matches('\\').to_string(),
        })?;
        entry.expand(args)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, MacroEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(MacroEntry::name)
    }
}

impl<'a> IntoIterator for &'a MacroTable {
    type Item = &'a MacroEntry;
    type IntoIter = std::slice::Iter<'a, MacroEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
