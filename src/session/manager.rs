use crate::config::GameConfig;
use crate::core::{Direction, MoveResult};
use crate::error::GameError;
use crate::level::{LevelCatalog, RandomSource, parse_template, select_next, validate_catalog};
use crate::session::{ArchivedSession, GameObserver, Session};

/// Owns the one live session, the history of finished ones, and the catalog they come from.
pub struct SessionManager<R, O> {
    catalog: LevelCatalog,
    config: GameConfig,
    rng: R,
    observer: O,
    validated: bool,
    current: Option<Session>,
    history: Vec<ArchivedSession>,
}

impl<R: RandomSource, O: GameObserver> SessionManager<R, O> {
    pub fn new(catalog: LevelCatalog, config: GameConfig, rng: R, observer: O) -> Self {
        SessionManager {
            catalog,
            config,
            rng,
            observer,
            validated: false,
            current: None,
            history: Vec::new(),
        }
    }

    /// Replaces the current session with a fresh one on a different level.
    /// On error the current session is left exactly as it was.
    pub fn start_new_level(&mut self) -> Result<&Session, GameError> {
        if !self.validated {
            if let Err(err) = validate_catalog(&self.catalog, &self.config) {
                tracing::warn!(error = %err, "level catalog rejected");
                return Err(err);
            }
            tracing::debug!(levels = self.catalog.len(), "level catalog validated");
            self.validated = true;
        }

        let previous = self.current.as_ref().map(Session::level_index);
        let index = select_next(self.catalog.len(), previous, &mut self.rng);
        let template = self.catalog.template(index);
        let parsed =
            parse_template(&template.rows).map_err(|source| GameError::UnparsableTemplate {
                name: template.name.clone(),
                source,
            })?;
        let session = Session::new(index, template.name.clone(), parsed.grid, parsed.actor);

        if let Some(previous) = self.current.take() {
            let archived = previous.archive();
            tracing::info!(
                level = %archived.level_name,
                moves = archived.move_count,
                status = ?archived.status,
                "session archived"
            );
            self.history.push(archived);
        }

        tracing::info!(level = %session.level_name(), index, "level started");
        let session = self.current.insert(session);
        self.observer.level_started(session);
        Ok(&*session)
    }

    /// Moves the actor in the current session. Without a session nothing happens.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        let Some(session) = self.current.as_mut() else {
            return MoveResult::default();
        };
        session.attempt_move(direction, self.config.max_push_budget, &mut self.observer)
    }

    /// Ends the current session without solving it.
    pub fn resign(&mut self) -> bool {
        let Some(session) = self.current.as_mut() else {
            return false;
        };
        let resigned = session.resign();
        if resigned {
            tracing::info!(
                level = %session.level_name(),
                moves = session.move_count(),
                "session resigned"
            );
        }
        resigned
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn level_history(&self) -> &[ArchivedSession] {
        &self.history
    }

    pub fn history_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(&self.history)?)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
