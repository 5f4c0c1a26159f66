use crate::core::{CellChange, Direction, Grid, Occupant, StepOutcome, Terrain, Vec2};

/// Moves the actor one cell, pushing at most `max_push_budget` blocks ahead of it.
/// Either the whole chain shifts or the grid is left exactly as it was.
pub fn step(
    grid: &mut Grid,
    actor: Vec2,
    direction: Direction,
    max_push_budget: usize,
) -> StepOutcome {
    let Some(target) = grid.neighbor(&actor, direction) else {
        tracing::debug!(?actor, ?direction, "move blocked by board edge");
        return StepOutcome::Blocked;
    };

    let mut touched = Vec::new();
    if !try_push(grid, actor, direction, max_push_budget, &mut touched) {
        tracing::debug!(?actor, ?direction, max_push_budget, "move blocked");
        return StepOutcome::Blocked;
    }

    // recorded deepest first, report from the actor outward
    let changes = touched
        .into_iter()
        .rev()
        .map(|(pos, before)| CellChange {
            pos,
            before,
            after: grid.occupant_at(&pos),
            direction,
        })
        .collect();

    StepOutcome::Moved {
        actor: target,
        changes,
    }
}

/// Shifts whatever stands on `pos` one cell in `direction`, recursively making room
/// for it first. Nothing is written unless the rest of the chain already moved.
fn try_push(
    grid: &mut Grid,
    pos: Vec2,
    direction: Direction,
    remaining_budget: usize,
    touched: &mut Vec<(Vec2, Occupant)>,
) -> bool {
    let Some(next) = grid.neighbor(&pos, direction) else {
        return false;
    };
    if grid.terrain_at(&next) == Terrain::Wall {
        return false;
    }

    match grid.occupant_at(&next) {
        // only one actor exists, so this only guards against malformed grids
        Occupant::Actor => false,
        Occupant::Empty => {
            record(touched, next, Occupant::Empty);
            shift(grid, pos, next, touched);
            true
        }
        Occupant::Block => {
            if remaining_budget == 0 {
                return false;
            }
            if !try_push(grid, next, direction, remaining_budget - 1, touched) {
                return false;
            }
            shift(grid, pos, next, touched);
            true
        }
    }
}

fn shift(grid: &mut Grid, from: Vec2, to: Vec2, touched: &mut Vec<(Vec2, Occupant)>) {
    let moving = grid.occupant_at(&from);
    record(touched, from, moving);
    grid.set_occupant(&to, moving);
    grid.set_occupant(&from, Occupant::Empty);
}

fn record(touched: &mut Vec<(Vec2, Occupant)>, pos: Vec2, before: Occupant) {
    if !touched.iter().any(|(p, _)| *p == pos) {
        touched.push((pos, before));
    }
}
