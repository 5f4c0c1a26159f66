use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTemplate {
    pub name: String,
    pub rows: Vec<String>,
}

impl LevelTemplate {
    pub fn new(name: &str, rows: &[&str]) -> LevelTemplate {
        LevelTemplate {
            name: name.to_string(),
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// The fixed, named set of levels a game draws from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<LevelTemplate>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<LevelTemplate>) -> LevelCatalog {
        LevelCatalog { levels }
    }

    pub fn builtin() -> LevelCatalog {
        LevelCatalog::new(vec![
            LevelTemplate::new("tiny", TINY),
            LevelTemplate::new("small", SMALL),
            LevelTemplate::new("medium", MEDIUM),
            LevelTemplate::new("large", LARGE),
        ])
    }

    pub fn from_json_str(json: &str) -> Result<LevelCatalog, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<LevelCatalog, GameError> {
        let text = std::fs::read_to_string(path)?;
        LevelCatalog::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelTemplate> {
        self.levels.iter()
    }

    /// Panics if `index` is out of range.
    pub fn template(&self, index: usize) -> &LevelTemplate {
        &self.levels[index]
    }
}

const TINY: &[&str] = &[
    "+====+",
    "| *  |",
    "| X  |",
    "|* X |",
    "| o  |",
    "+====+",
];

const SMALL: &[&str] = &[
    "|======|",
    "| *|   |",
    "|* | | |",
    "|*X|X| |",
    "|      |",
    "|*X  X |",
    "| o|   |",
    "|======|",
];

const MEDIUM: &[&str] = &[
    "==========",
    "|   *|   |",
    "|*== | | |",
    "|*  X|X| |",
    "|       *|",
    "|*==X=X= |",
    "|        |",
    "|*  X  X |",
    "|   o|   |",
    "==========",
];

const LARGE: &[&str] = &[
    "                   ",
    "                   ",
    "                   ",
    "    +===+          ",
    "    |   |          ",
    "    |X  |          ",
    "  +=+  X+|         ",
    "  |  X X |         ",
    "+=+ + || |   += ==+",
    "|   | || +===+  **|",
    "| X  X          **|",
    "+===+ === =o==  **|",
    "    |     ========+",
    "    +=====+        ",
    "                   ",
    "                   ",
];
