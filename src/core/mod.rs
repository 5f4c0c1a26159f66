mod bounded_grid;
mod bounds;
mod consts;
mod grid;
mod model_helpers;
mod models;
mod update;

pub use bounded_grid::BoundedGrid;
pub use consts::*;
pub use grid::Grid;
pub use models::{
    CellChange, Direction, MoveResult, Occupant, StepOutcome, Terrain, UserAction, Vec2,
};
pub use update::step;
