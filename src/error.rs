use thiserror::Error;

/// A template that cannot be turned into a grid at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown char code {ch:?} in template at row {row}, column {col}")]
    UnknownChar { ch: char, row: usize, col: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("the template should have exactly one actor, found {found}")]
    ActorCount { found: usize },
}

/// A template that breaks one of the structural rules every level must follow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("there should be at least {min} rows, found {found}")]
    TooFewRows { min: usize, found: usize },
    #[error("there should be at least {min} columns, row {row} has {found}")]
    TooFewColumns { min: usize, row: usize, found: usize },
    #[error("rows should all have {expected} columns, row {row} has {found}")]
    UnequalRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown char code {ch:?} in template at row {row}, column {col}")]
    UnknownChar { ch: char, row: usize, col: usize },
    #[error("there should be exactly one actor, found {found}")]
    ActorCount { found: usize },
    #[error("targets should match blocks, found {blocks} blocks and {targets} targets")]
    BlockTargetMismatch { blocks: usize, targets: usize },
    #[error("there should be at least one target and one block")]
    NoBlocks,
}

/// Everything that can stop a level from being loaded.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("the level catalog is empty")]
    EmptyCatalog,
    #[error("invalid level template {name:?}: {source}")]
    InvalidTemplate {
        name: String,
        #[source]
        source: ValidationError,
    },
    #[error("cannot parse level template {name:?}: {source}")]
    UnparsableTemplate {
        name: String,
        #[source]
        source: ParseError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
