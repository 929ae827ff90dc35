//! Parser selection options and their configuration file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ParseError;

const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

/// Config file names looked up by [`ParserOptions::discover`], in priority order.
pub const CONFIG_FILES: &[&str] = &[".lintconv.jsonc", ".lintconv.json"];

/// Selects which parser [`new_parser`](crate::new_parser) builds.
///
/// Exactly one of `format_name` and `errorformat` should be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// A built-in format (`checkstyle`, `rdjsonl`) or a catalog entry name.
    #[serde(rename = "format", default, skip_serializing_if = "Option::is_none")]
    pub format_name: Option<String>,

    /// Explicit errorformat rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errorformat: Vec<String>,
}

impl ParserOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a format by name.
    pub fn with_format(mut self, name: impl Into<String>) -> Self {
        self.format_name = Some(name.into());
        self
    }

    /// Appends an errorformat rule.
    pub fn with_errorformat(mut self, rule: impl Into<String>) -> Self {
        self.errorformat.push(rule.into());
        self
    }

    /// Returns true if neither a format name nor rules are set.
    pub fn is_empty(&self) -> bool {
        self.format_name.as_deref().is_none_or(str::is_empty) && self.errorformat.is_empty()
    }

    /// Loads options from a `.lintconv.json` or `.lintconv.jsonc` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ParseError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!("Loading parser options from {}", path.display());
        Self::from_json(&content)
    }

    /// Parses options from JSON (comments and trailing commas allowed).
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ParseError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA
            .get_or_init(|| {
                let schema_json: serde_json::Value =
                    serde_json::from_str(SCHEMA_JSON).map_err(|e| e.to_string())?;
                Validator::new(&schema_json).map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|e| ParseError::config(format!("Invalid embedded config schema: {}", e)))?;

        if let Err(e) = schema.validate(&value) {
            return Err(ParseError::config(format!(
                "Config validation failed: {} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| ParseError::config(format!("Invalid config: {}", e)))
    }

    /// Finds the first config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }
}
