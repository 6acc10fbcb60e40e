// Fixture type definitions

use std::path::Path;

use serde::Deserialize;

use crate::error::RowpickError;

/// Page addresses a scenario runs against
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageFixtures {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for PageFixtures {
    fn default() -> Self {
        PageFixtures {
            base_url: default_base_url(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://demo.example.com/practice".to_string()
}

fn default_api_base_url() -> String {
    "https://books.example.com/api".to_string()
}

/// CSS selectors shared across scenarios
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectorFixtures {
    #[serde(default = "default_autocomplete_input")]
    pub autocomplete_input: String,
    #[serde(default = "default_suggestion_item")]
    pub suggestion_item: String,
    #[serde(default = "default_table_row")]
    pub table_row: String,
    #[serde(default = "default_table_cell")]
    pub table_cell: String,
}

impl Default for SelectorFixtures {
    fn default() -> Self {
        SelectorFixtures {
            autocomplete_input: default_autocomplete_input(),
            suggestion_item: default_suggestion_item(),
            table_row: default_table_row(),
            table_cell: default_table_cell(),
        }
    }
}

fn default_autocomplete_input() -> String {
    "#autocomplete".to_string()
}

fn default_suggestion_item() -> String {
    "#ui-id-1 li".to_string()
}

fn default_table_row() -> String {
    "table[name='courses'] tr".to_string()
}

fn default_table_cell() -> String {
    "td".to_string()
}

/// Root fixture structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub pages: PageFixtures,
    #[serde(default)]
    pub selectors: SelectorFixtures,
}

impl Fixtures {
    /// Parse fixtures from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RowpickError> {
        Ok(toml::from_str(text)?)
    }

    /// Load fixtures from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RowpickError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
