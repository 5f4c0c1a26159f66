use crate::core::{CellChange, Direction};
use crate::session::models::Session;

/// Receives notifications after the engine mutates state. Every method defaults to
/// doing nothing, so a presentation layer only overrides what it renders.
pub trait GameObserver {
    fn level_started(&mut self, _session: &Session) {}

    fn occupant_changed(&mut self, _change: &CellChange) {}

    fn move_blocked(&mut self, _direction: Direction) {}

    fn level_solved(&mut self, _session: &Session) {}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    LevelStarted { level_index: usize, level_name: String },
    OccupantChanged(CellChange),
    MoveBlocked(Direction),
    LevelSolved { level_name: String, move_count: u32 },
}

/// Queues every notification until the owner drains them.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventLog {
    fn level_started(&mut self, session: &Session) {
        self.events.push(GameEvent::LevelStarted {
            level_index: session.level_index(),
            level_name: session.level_name().to_string(),
        });
    }

    fn occupant_changed(&mut self, change: &CellChange) {
        self.events.push(GameEvent::OccupantChanged(*change));
    }

    fn move_blocked(&mut self, direction: Direction) {
        self.events.push(GameEvent::MoveBlocked(direction));
    }

    fn level_solved(&mut self, session: &Session) {
        self.events.push(GameEvent::LevelSolved {
            level_name: session.level_name().to_string(),
            move_count: session.move_count(),
        });
    }
}
