use crate::core::{Direction, Grid, MoveResult, StepOutcome, Vec2, step};
use crate::session::{ArchivedSession, GameObserver, Session, SessionStatus};

impl Session {
    pub fn new(level_index: usize, level_name: String, grid: Grid, actor: Vec2) -> Session {
        Session {
            level_index,
            level_name,
            grid,
            actor,
            move_count: 0,
            status: SessionStatus::Active,
        }
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actor_position(&self) -> Vec2 {
        self.actor
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.status == SessionStatus::Success
    }

    /// Solved or resigned; either way the board is frozen.
    pub fn is_done(&self) -> bool {
        self.status != SessionStatus::Active
    }

    /// Resolves one move, then notifies `observer` of every rewritten cell, or of the
    /// blocked attempt. A done session ignores the request without notifying.
    pub fn attempt_move(
        &mut self,
        direction: Direction,
        max_push_budget: usize,
        observer: &mut dyn GameObserver,
    ) -> MoveResult {
        if self.is_done() {
            return MoveResult {
                solved: self.is_solved(),
                ..MoveResult::default()
            };
        }

        match step(&mut self.grid, self.actor, direction, max_push_budget) {
            StepOutcome::Blocked => {
                observer.move_blocked(direction);
                MoveResult {
                    blocked: true,
                    ..MoveResult::default()
                }
            }
            StepOutcome::Moved { actor, changes } => {
                self.actor = actor;
                self.move_count += 1;
                for change in &changes {
                    observer.occupant_changed(change);
                }

                if self.grid.is_solved() {
                    self.status = SessionStatus::Success;
                    tracing::info!(
                        level = %self.level_name,
                        moves = self.move_count,
                        "level solved"
                    );
                    observer.level_solved(self);
                }

                MoveResult {
                    moved: true,
                    blocked: false,
                    cell_changes: changes,
                    solved: self.is_solved(),
                }
            }
        }
    }

    /// Gives up on an active session. Returns false if it was already done.
    pub fn resign(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.status = SessionStatus::Resigned;
        true
    }

    pub fn archive(&self) -> ArchivedSession {
        ArchivedSession {
            level_index: self.level_index,
            level_name: self.level_name.clone(),
            move_count: self.move_count,
            status: self.status,
        }
    }
}
