use std::path::PathBuf;
use thiserror::Error;

/// Failure to parse a demo script. `index` is the 1-based position of the command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("command {index}: unknown command '{command}'")]
    UnknownCommand { index: usize, command: String },

    #[error("command {index}: '{command}' needs an argument")]
    MissingArgument { index: usize, command: String },

    #[error("command {index}: '{value}' is not an integer")]
    InvalidValue { index: usize, value: String },

    #[error("command {index}: unexpected argument '{extra}'")]
    UnexpectedArgument { index: usize, extra: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
