//! Configuration management for `brickwork.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── analytics  # [analytics]
//! │   ├── block      # [block]
//! │   ├── libs       # [libs]
//! │   └── page       # [page]
//! ├── error          # ConfigError, InvalidFields
//! └── mod.rs         # BrickConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[block]`     | Which class marks a brick block                  |
//! | `[libs]`      | Collaborator base path and per-page override     |
//! | `[page]`      | Page URL and landmark classes                    |
//! | `[analytics]` | Link analytics annotation                        |
//!
//! The file is optional: without one, every section uses its defaults.

pub mod error;
pub mod section;
mod util;

pub use error::{ConfigError, InvalidFields};
pub use section::{AnalyticsConfig, BlockConfig, LibsConfig, PageConfig};

use crate::cli::{Cli, Commands};
use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing brickwork.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickConfig {
    #[serde(default)]
    pub block: BlockConfig,

    #[serde(default)]
    pub libs: LibsConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl BrickConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file; falls back to defaults
    /// when none exists. CLI options are applied on top, then validated.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(&path)?
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.apply_command_options(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Parse)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply command-specific CLI options over file values.
    fn apply_command_options(&mut self, cli: &Cli) {
        let (url, block) = match &cli.command {
            Commands::Decorate { args } => (args.url.as_ref(), args.block.as_ref()),
            Commands::Inspect { args } => (args.url.as_ref(), args.block.as_ref()),
        };
        if let Some(url) = url {
            self.page.url = Some(url.clone());
        }
        Self::update_option(&mut self.block.class, block);
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate field values, collecting every problem before failing.
    pub fn validate(&self) -> Result<()> {
        let mut invalid = InvalidFields::new();

        let class = self.block.class.trim();
        if class.is_empty() || class.contains(char::is_whitespace) {
            invalid.reject_with_hint(
                "block.class",
                format!("`{}` is not a single class name", self.block.class),
                "use one class, e.g. \"homepage-brick\"",
            );
        }

        if self.libs.base.trim().is_empty() {
            invalid.reject("libs.base", "must not be empty");
        }

        if let Some(url) = &self.page.url
            && let Err(err) = url::Url::parse(url)
        {
            invalid.reject_with_hint(
                "page.url",
                format!("`{url}` is not a valid URL: {err}"),
                "use an absolute URL such as \"https://www.example.com/\"",
            );
        }

        if self.analytics.label_length == 0 {
            invalid.reject("analytics.label_length", "must be greater than 0");
        }

        invalid.into_result()?;
        Ok(())
    }
}

/// Parse a config snippet for tests, rejecting unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BrickConfig {
    let (parsed, ignored) = BrickConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
