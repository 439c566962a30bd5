//! Error types for fstyle

use thiserror::Error;

/// Result type alias for fstyle operations
pub type Result<T> = std::result::Result<T, FstyleError>;

/// Errors from the fallible edges of the crate (config files, terminal output).
///
/// Directive parsing never fails; see [`DirectiveWarning`] instead.
#[derive(Error, Debug)]
pub enum FstyleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),
}

/// A directive word that was ignored while parsing a line.
///
/// Warnings are informational: the attribute produced for the line is the
/// same whether or not they are collected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveWarning {
    #[error("unknown directive word '{0}'")]
    UnknownWord(String),

    #[error("malformed color '{spec}' after '{side}'")]
    MalformedColor { side: &'static str, spec: String },

    #[error("'{0}' is missing a color")]
    MissingColor(&'static str),

    #[error("unterminated quote or escape, split on whitespace instead")]
    UnterminatedQuote,
}
