use crate::core::error::PmTokenError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Key of the single entry this tool inserts or updates.
pub const TOKEN_KEY: &str = "token";

/// One entry in a Postman variable set.
///
/// Only `key`, `value` and `enabled` are interpreted. Everything else a
/// Postman export carries on an entry (`type`, timestamps, ...) lands in
/// `extra` and round-trips to the output file untouched. `value` and
/// `enabled` are optional in some exports, so they default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A parsed Postman variable-set file (environment or globals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSet {
    pub values: Vec<Variable>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VariableSet {
    /// Finds a variable by exact key match, first match wins. The `enabled`
    /// flag plays no part in lookups.
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.values.iter().find(|v| v.key == key)
    }

    /// Updates the `token` variable in place, or appends one if the set has
    /// none. The resulting entry is always enabled.
    pub fn set_token(&mut self, token: &str) {
        match self.values.iter_mut().find(|v| v.key == TOKEN_KEY) {
            Some(existing) => {
                existing.value = token.to_string();
                existing.enabled = true;
            }
            None => self.values.push(Variable {
                key: TOKEN_KEY.to_string(),
                value: token.to_string(),
                enabled: true,
                extra: Map::new(),
            }),
        }
    }
}

/// Reads and validates a variable-set file, keeping entries in file order.
pub fn read_variable_set(path: &Path) -> Result<VariableSet, PmTokenError> {
    let content =
        fs::read_to_string(path).map_err(|e| PmTokenError::Read(path.to_path_buf(), e))?;
    parse_variable_set(&content, path)
}

fn parse_variable_set(content: &str, path: &Path) -> Result<VariableSet, PmTokenError> {
    let json: Value =
        serde_json::from_str(content).map_err(|e| PmTokenError::Parse(path.to_path_buf(), e))?;

    if !json.get("values").map(Value::is_array).unwrap_or(false) {
        return Err(PmTokenError::Shape(path.to_path_buf()));
    }

    serde_json::from_value(json).map_err(|e| PmTokenError::Parse(path.to_path_buf(), e))
}

/// Merges `token` into the environment set and writes it to `output_path`,
/// replacing any existing file there.
pub fn merge_and_write(
    environment: &mut VariableSet,
    output_path: &Path,
    token: &str,
) -> Result<(), PmTokenError> {
    environment.set_token(token);
    write_variable_set(environment, output_path)
}

/// Serializes the set with 2-space indentation. The parent directory is
/// created when missing, one level only.
pub fn write_variable_set(set: &VariableSet, path: &Path) -> Result<(), PmTokenError> {
    ensure_parent_dir(path)?;

    let json = serde_json::to_string_pretty(set)
        .map_err(|e| PmTokenError::Write(path.to_path_buf(), e.into()))?;
    fs::write(path, json).map_err(|e| PmTokenError::Write(path.to_path_buf(), e))
}

fn ensure_parent_dir(path: &Path) -> Result<(), PmTokenError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };

    match parent.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => fs::create_dir(parent).map_err(|e| PmTokenError::Write(path.to_path_buf(), e)),
        Err(e) => Err(PmTokenError::Write(path.to_path_buf(), e)),
    }
}
