use crate::config::GameConfig;
use crate::core::{Occupant, Terrain};
use crate::error::{GameError, ValidationError};
use crate::level::catalog::LevelCatalog;
use crate::level::legend::legend_entry;

/// Shape and contents of a template that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateCounts {
    pub rows: usize,
    pub cols: usize,
    pub blocks: usize,
    pub targets: usize,
}

/// Structural checks only; a template that passes may still be unsolvable.
pub fn validate_template<S: AsRef<str>>(
    rows: &[S],
    config: &GameConfig,
) -> Result<TemplateCounts, ValidationError> {
    if rows.len() < config.min_rows {
        return Err(ValidationError::TooFewRows {
            min: config.min_rows,
            found: rows.len(),
        });
    }

    let mut cols = None;
    let mut actors = 0;
    let mut blocks = 0;
    let mut targets = 0;
    for (i, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        let expected = *cols.get_or_insert(found);
        if found < config.min_cols {
            return Err(ValidationError::TooFewColumns {
                min: config.min_cols,
                row: i,
                found,
            });
        }
        if found != expected {
            return Err(ValidationError::UnequalRows {
                row: i,
                expected,
                found,
            });
        }

        for (j, ch) in line.chars().enumerate() {
            let Some(cell) = legend_entry(ch) else {
                return Err(ValidationError::UnknownChar { ch, row: i, col: j });
            };
            match cell.occupant {
                Occupant::Actor => actors += 1,
                Occupant::Block => blocks += 1,
                Occupant::Empty => {}
            }
            if cell.terrain == Terrain::Target {
                targets += 1;
            }
        }
    }

    if actors != 1 {
        return Err(ValidationError::ActorCount { found: actors });
    }
    if blocks != targets {
        return Err(ValidationError::BlockTargetMismatch { blocks, targets });
    }
    if blocks == 0 {
        return Err(ValidationError::NoBlocks);
    }

    Ok(TemplateCounts {
        rows: rows.len(),
        cols: cols.unwrap_or(0),
        blocks,
        targets,
    })
}

/// Checks every template, stopping at the first bad one.
pub fn validate_catalog(
    catalog: &LevelCatalog,
    config: &GameConfig,
) -> Result<Vec<TemplateCounts>, GameError> {
    if catalog.is_empty() {
        return Err(GameError::EmptyCatalog);
    }
    catalog
        .iter()
        .map(|template| {
            validate_template(&template.rows, config).map_err(|source| GameError::InvalidTemplate {
                name: template.name.clone(),
                source,
            })
        })
        .collect()
}
