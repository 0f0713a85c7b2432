//! The configuration object rendering engines consume:
//! `{"Macros": {name: "template" | ["template", arity]}}`.
//!
//! Definitions are kept as an ordered list rather than a map so that a key
//! repeated in the source JSON reaches [`MathConfig::to_table`] and fails
//! there as a duplicate instead of silently replacing the earlier entry.

use crate::error::Result;
use crate::table::MacroTable;
use crate::template::MacroEntry;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single value in the `Macros` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MacroDefinition {
    /// Constant notation.
    Fixed(String),
    /// `[template, arity]`
    Parameterized(String, usize),
}

impl MacroDefinition {
    pub fn template(&self) -> &str {
        match self {
            MacroDefinition::Fixed(template) | MacroDefinition::Parameterized(template, _) => {
                template
            }
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            MacroDefinition::Fixed(_) => 0,
            MacroDefinition::Parameterized(_, arity) => *arity,
        }
    }
}

impl From<&MacroEntry> for MacroDefinition {
    fn from(entry: &MacroEntry) -> Self {
        let template = entry.template().source().to_string();
        if entry.is_constant() {
            MacroDefinition::Fixed(template)
        } else {
            MacroDefinition::Parameterized(template, entry.arity())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathConfig {
    #[serde(rename = "Macros", with = "ordered_macros")]
    pub macros: Vec<(String, MacroDefinition)>,
}

impl MathConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::info!(
            "Loaded {} macro definitions from {:?}",
            config.macros.len(),
            path
        );
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_string()?)?;
        log::info!("Saved {} macro definitions to {:?}", self.macros.len(), path);
        Ok(())
    }

    /// Validates every definition and builds the table, failing on the
    /// first duplicate or arity mismatch.
    pub fn to_table(&self) -> Result<MacroTable> {
        let mut table = MacroTable::new();
        for (name, definition) in &self.macros {
            table.register(name.as_str(), definition.arity(), definition.template())?;
        }
        Ok(table)
    }

    pub fn from_table(table: &MacroTable) -> Self {
        Self {
            macros: table
                .iter()
                .map(|entry| (entry.name().to_string(), MacroDefinition::from(entry)))
                .collect(),
        }
    }
}

mod ordered_macros {
    use super::MacroDefinition;
    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(macros: &[(String, MacroDefinition)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(macros.iter().map(|(name, definition)| (name, definition)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, MacroDefinition)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = Vec<(String, MacroDefinition)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of macro names to templates or [template, arity] pairs")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut macros = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, MacroDefinition>()? {
                    macros.push(entry);
                }
                Ok(macros)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
