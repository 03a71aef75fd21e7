use crate::config::error::ConfigError;
use crate::units::{ConversionEngine, Unit, UnitTable, LENGTH};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Which unit table to convert with
    #[serde(default = "default_table")]
    pub table: String,

    // Preselected units, by label or symbol
    #[serde(default)]
    pub defaults: DefaultUnits,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultUnits {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

fn default_table() -> String {
    LENGTH.name.to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        // Surface a bad table name at load time rather than at first use
        config.unit_table()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            table: default_table(),
            defaults: DefaultUnits::default(),
        }
    }

    pub fn unit_table(&self) -> Result<&'static UnitTable, ConfigError> {
        UnitTable::by_name(&self.table).ok_or_else(|| ConfigError::UnknownTable(self.table.clone()))
    }

    pub fn engine(&self) -> Result<ConversionEngine, ConfigError> {
        Ok(ConversionEngine::new(self.unit_table()?))
    }

    /// Configured source and target, falling back to the table's defaults
    pub fn default_units(&self) -> Result<(Unit, Unit), ConfigError> {
        let table = self.unit_table()?;
        let (table_from, table_to) = table.default_units();

        let from = match &self.defaults.from {
            Some(name) => resolve_unit(table, name)?,
            None => table_from,
        };
        let to = match &self.defaults.to {
            Some(name) => resolve_unit(table, name)?,
            None => table_to,
        };

        Ok((from, to))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

/// Look up a unit by label or symbol within `table`
pub fn resolve_unit(table: &UnitTable, name: &str) -> Result<Unit, ConfigError> {
    table.find(name).ok_or_else(|| ConfigError::UnknownUnit {
        unit: name.to_string(),
        table: table.name.to_string(),
    })
}
