use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MAX_PUSH_BUDGET, MIN_TEMPLATE_COLS, MIN_TEMPLATE_ROWS};
use crate::error::GameError;

pub const CONFIG_ENV_VAR: &str = "BLOCK_PUSH_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum number of blocks moved by a single push.
    pub max_push_budget: usize,
    pub min_rows: usize,
    pub min_cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_push_budget: DEFAULT_MAX_PUSH_BUDGET,
            min_rows: MIN_TEMPLATE_ROWS,
            min_cols: MIN_TEMPLATE_COLS,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<GameConfig, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<GameConfig, GameError> {
        let text = std::fs::read_to_string(path)?;
        GameConfig::from_json_str(&text)
    }

    /// Reads the file named by `BLOCK_PUSH_CONFIG`, falling back to defaults when unset.
    pub fn from_env() -> Result<GameConfig, GameError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => GameConfig::load(path),
            None => Ok(GameConfig::default()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = GameConfig::from_json_str(r#"{ "max_push_budget": 2 }"#).unwrap();

        assert_eq!(config.max_push_budget, 2);
        assert_eq!(config.min_rows, 6);
        assert_eq!(config.min_cols, 6);
    }

    #[test]
    fn test_bad_json_is_reported() {
        let result = GameConfig::from_json_str(r#"{ "max_push_budget": "lots" }"#);
        assert!(matches!(result, Err(GameError::Json(_))));
    }
}
