use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Unknown unit table: {0}")]
    UnknownTable(String),
    #[error("Unit '{unit}' is not part of the '{table}' table")]
    UnknownUnit { unit: String, table: String },
}
