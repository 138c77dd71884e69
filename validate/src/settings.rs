//! Optional TOML settings for the validator. Command-line flags win over
//! anything read from the file.

use std::path::Path;

use serde::Deserialize;
use threatline_types::Edition;

use crate::error::{Result, ValidateError};

pub const DEFAULT_TOP: usize = 5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Force a rule set instead of resolving one from report metadata.
    pub edition: Option<Edition>,
    /// Rows printed per enemy.
    pub top: usize,
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            edition: None,
            top: DEFAULT_TOP,
            json: false,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub edition: Option<Edition>,
    pub top: Option<usize>,
    pub json: bool,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ValidateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&text).map_err(|source| ValidateError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.edition.is_some() {
            self.edition = overrides.edition;
        }
        if let Some(top) = overrides.top {
            self.top = top;
        }
        self.json |= overrides.json;
        self
    }
}
