use thiserror::Error;

use crate::agent::AgentId;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    #[error("Agent not found: {0}")]
    AgentNotFound(AgentId),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
