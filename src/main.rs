// Block-pushing puzzle in the terminal with ratatui
// Controls: arrow keys or W/A/S/D to move, Enter/N for a new level, R to resign, Q to quit.
// Templates: '=' '|' '+' wall, 'o' actor, 'X' block, '*' target, ' ' floor.

mod config;
mod console_interface;
mod core;
mod error;
mod level;
mod models;
mod session;
#[cfg(test)]
mod test;

use crate::config::GameConfig;
use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{
    cleanup_terminal, feedback_from, handle_input, render_game, render_grid_to_string,
    setup_terminal,
};
use crate::core::UserAction as Action;
use crate::level::{LevelCatalog, RngSource, parse_template, validate_catalog};
use crate::models::GameRenderState;
use crate::session::{EventLog, GameEvent, Session, SessionManager};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "block_push.log";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());
    let catalog = match std::env::args().nth(2) {
        Some(path) => LevelCatalog::load(path)?,
        None => LevelCatalog::builtin(),
    };
    let config = GameConfig::from_env()?;
    init_tracing()?;

    match switch.as_str() {
        "validate" => {
            run_validate(&catalog, &config)?;
        }
        "interactive" => {
            run_interactive(catalog, config)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'validate'. defaulting to interactive",
                switch
            );
            run_interactive(catalog, config)?;
        }
    }

    Ok(())
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    // stdout belongs to the terminal UI
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(LOG_FILE)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_out))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run_validate(
    catalog: &LevelCatalog,
    config: &GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let counts = validate_catalog(catalog, config)?;
    for (template, counts) in catalog.iter().zip(counts) {
        println!(
            "{:<12} {:>3} x {:<3} {} blocks, {} targets",
            template.name, counts.rows, counts.cols, counts.blocks, counts.targets
        );
        let parsed = parse_template(&template.rows)?;
        println!("{}", render_grid_to_string(&parsed.grid));
    }
    println!("{} levels OK", catalog.len());
    Ok(())
}

fn run_interactive(
    catalog: LevelCatalog,
    config: GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = SessionManager::new(catalog, config, RngSource::thread(), EventLog::new());
    let mut error = manager.start_new_level().err().map(|err| err.to_string());

    let mut terminal = setup_terminal()?;
    let result = play(&mut manager, &mut terminal, &mut error);
    cleanup_terminal()?;
    result?;

    if let Some(err) = error {
        println!("Error: {}", err);
    }
    if let Some(session) = manager.current_session() {
        println!("{}", render_grid_to_string(session.grid()));
    }
    println!("{}", manager.history_json()?);
    Ok(())
}

fn play(
    manager: &mut SessionManager<RngSource<rand::rngs::ThreadRng>, EventLog>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    error: &mut Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut feedback = None;
    loop {
        render_game(
            terminal,
            &GameRenderState {
                session: manager.current_session(),
                levels_played: manager.level_history().len(),
                error: error.clone(),
                feedback,
            },
        )?;

        match handle_input() {
            Ok(Quit) => break,
            Ok(UserAction(action)) => {
                match action {
                    Action::Move(direction) => {
                        let result = manager.attempt_move(direction);
                        tracing::debug!(
                            ?direction,
                            moved = result.moved,
                            blocked = result.blocked,
                            changed = result.cell_changes.len(),
                            solved = result.solved,
                            actor = ?manager.current_session().map(Session::actor_position),
                            "move handled"
                        );
                    }
                    Action::NewLevel => {
                        *error = manager.start_new_level().err().map(|err| err.to_string());
                    }
                    Action::Resign => {
                        manager.resign();
                    }
                }
                feedback = feedback_from(manager.observer().events());
                for event in manager.observer_mut().drain() {
                    log_event(&event);
                }
            }
            Ok(Timeout) | Ok(Unknown) => {
                // No input, continue polling
            }
            Err(err) => {
                tracing::error!(error = %err, "error reading input");
                break;
            }
        }
    }
    Ok(())
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::LevelStarted {
            level_index,
            level_name,
        } => tracing::debug!(level_index, %level_name, "level shown"),
        GameEvent::OccupantChanged(change) => tracing::trace!(
            pos = ?change.pos,
            before = ?change.before,
            after = ?change.after,
            direction = ?change.direction,
            "cell redrawn"
        ),
        GameEvent::MoveBlocked(direction) => tracing::debug!(?direction, "bump"),
        GameEvent::LevelSolved {
            level_name,
            move_count,
        } => tracing::debug!(%level_name, move_count, "cheer"),
    }
}
