//! Errors raised while loading `brickwork.toml`.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("config is not valid TOML")]
    Parse(#[from] toml::de::Error),

    // no #[from]: the problems already print themselves
    #[error("{0}")]
    Invalid(InvalidFields),
}

/// One rejected field value.
#[derive(Debug, Clone)]
struct Problem {
    field: &'static str,
    message: String,
    hint: Option<&'static str>,
}

/// Every rejected field of one config, reported together.
#[derive(Debug, Default)]
pub struct InvalidFields(Vec<Problem>);

impl InvalidFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn reject_with_hint(&mut self, field: &'static str, message: impl Into<String>, hint: &'static str) {
        self.push(field, message.into(), Some(hint));
    }

    fn push(&mut self, field: &'static str, message: String, hint: Option<&'static str>) {
        self.0.push(Problem { field, message, hint });
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self))
        }
    }
}

impl fmt::Display for InvalidFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "invalid brickwork config:".red().bold())?;
        for problem in &self.0 {
            write!(f, "\n  {} {}", problem.field.cyan(), problem.message)?;
            if let Some(hint) = problem.hint {
                write!(f, "\n    {} {}", "hint:".yellow(), hint)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for InvalidFields {}
