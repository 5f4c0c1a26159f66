use serde::{Deserialize, Serialize};

use crate::core::{Grid, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Active,
    Success,
    Resigned,
}

/// One play-through of a level.
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) level_index: usize,
    pub(crate) level_name: String,
    pub(crate) grid: Grid,
    pub(crate) actor: Vec2,
    pub(crate) move_count: u32,
    pub(crate) status: SessionStatus,
}

/// What is kept of a session once it leaves play; the board itself is dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedSession {
    pub level_index: usize,
    pub level_name: String,
    pub move_count: u32,
    pub status: SessionStatus,
}
