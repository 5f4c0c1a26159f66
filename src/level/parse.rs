use crate::core::{BoundedGrid, Grid, Occupant, Vec2};
use crate::error::ParseError;
use crate::level::legend::legend_entry;

pub struct ParsedLevel {
    pub grid: Grid,
    pub actor: Vec2,
}

/// Turns template rows into a grid using the fixed legend.
pub fn parse_template<S: AsRef<str>>(rows: &[S]) -> Result<ParsedLevel, ParseError> {
    let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
    let mut terrain_rows = Vec::with_capacity(rows.len());
    let mut occupant_rows = Vec::with_capacity(rows.len());
    let mut actors = Vec::new();

    for (i, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != width {
            return Err(ParseError::RaggedRow {
                row: i,
                expected: width,
                found,
            });
        }

        let mut terrain_row = Vec::with_capacity(width);
        let mut occupant_row = Vec::with_capacity(width);
        for (j, ch) in line.chars().enumerate() {
            let Some(cell) = legend_entry(ch) else {
                return Err(ParseError::UnknownChar { ch, row: i, col: j });
            };
            if cell.occupant == Occupant::Actor {
                actors.push(Vec2::new(i as i32, j as i32));
            }
            terrain_row.push(cell.terrain);
            occupant_row.push(cell.occupant);
        }
        terrain_rows.push(terrain_row);
        occupant_rows.push(occupant_row);
    }

    let &[actor] = actors.as_slice() else {
        return Err(ParseError::ActorCount {
            found: actors.len(),
        });
    };

    let grid = Grid::new(
        BoundedGrid::from_rows(terrain_rows),
        BoundedGrid::from_rows(occupant_rows),
    );
    Ok(ParsedLevel { grid, actor })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Terrain;
    use crate::test::test_util::parse_level;

    #[test]
    fn test_parses_row_into_terrain_and_occupants() {
        let parsed = parse_template(&["|* X |", "|  o |"]).unwrap();
        let row: Vec<Vec2> = (0..6).map(|j| Vec2::new(0, j)).collect();

        let terrain: Vec<Terrain> = row.iter().map(|p| parsed.grid.terrain_at(p)).collect();
        let occupants: Vec<Occupant> = row.iter().map(|p| parsed.grid.occupant_at(p)).collect();

        use Occupant as O;
        use Terrain as T;
        assert_eq!(terrain, vec![T::Wall, T::Target, T::Empty, T::Empty, T::Empty, T::Wall]);
        assert_eq!(occupants, vec![O::Empty, O::Empty, O::Empty, O::Block, O::Empty, O::Empty]);
        assert_eq!(parsed.actor, Vec2::new(1, 3));
        assert_eq!(parsed.grid.terrain_at(&Vec2::new(1, 3)), T::Empty);
    }

    #[test]
    fn test_unknown_char_fails() {
        let result = parse_template(&["|o #|"]);
        assert_eq!(
            result.err(),
            Some(ParseError::UnknownChar { ch: '#', row: 0, col: 3 })
        );
    }

    #[test]
    fn test_ragged_rows_fail() {
        let result = parse_template(&["|o |", "|  "]);
        assert_eq!(
            result.err(),
            Some(ParseError::RaggedRow { row: 1, expected: 4, found: 3 })
        );
    }

    #[test]
    fn test_actor_required() {
        let result = parse_template(&["| X*|"]);
        assert_eq!(result.err(), Some(ParseError::ActorCount { found: 0 }));

        let result = parse_template(&["|oXo*|"]);
        assert_eq!(result.err(), Some(ParseError::ActorCount { found: 2 }));
    }

    #[test]
    fn test_parse_level_skips_blank_lines() {
        let parsed = parse_level(
            r#"
|o X*|
"#,
        )
        .unwrap();

        assert_eq!(parsed.grid.rows(), 1);
        assert_eq!(parsed.grid.cols(), 6);
        assert_eq!(parsed.actor, Vec2::new(0, 1));
    }
}
