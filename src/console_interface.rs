use crate::core::{Direction, Grid, Occupant, Terrain, UserAction, Vec2};
use crate::models::{Feedback, GameRenderState};
use crate::session::{GameEvent, Session, SessionStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout};

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, Box<dyn std::error::Error>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        // Board
        let (title, board) = match state.session {
            Some(session) => (
                format!(
                    "Level: {} ({}/{} on target)",
                    session.level_name(),
                    session.grid().count_blocks_on_targets(),
                    session.grid().count_terrain(Terrain::Target)
                ),
                grid_lines(session.grid()),
            ),
            None => ("No level".to_string(), Vec::new()),
        };
        let board_paragraph = Paragraph::new(board)
            .block(Block::default().borders(Borders::ALL).title(title))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        // Status
        let status = match &state.error {
            Some(err) => format!("Error: {}", err),
            None => status_text(state.session),
        };
        let status = match state.feedback {
            Some(Feedback::Bump) => format!("{} | Bump!", status),
            Some(Feedback::Cheer) => format!("{} | Yay!", status),
            None => status,
        };
        let status_color = if state.error.is_some() {
            Color::Red
        } else {
            Color::Yellow
        };
        let status_paragraph = Paragraph::new(status)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Status ({} levels played)", state.levels_played)),
            )
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        let instructions = "Arrows/WASD move | Enter/N new level | R resign | Q quit";
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn status_text(session: Option<&Session>) -> String {
    let Some(session) = session else {
        return "No active game".to_string();
    };
    match session.status() {
        SessionStatus::Success => format!(
            "Success!! You finished the game in {} moves!!",
            session.move_count()
        ),
        SessionStatus::Active => format!("{} moves so far", session.move_count()),
        SessionStatus::Resigned => format!("Resigned after {} moves", session.move_count()),
    }
}

/// Reduces the events of one input to the reaction worth showing.
pub fn feedback_from(events: &[GameEvent]) -> Option<Feedback> {
    events.iter().rev().find_map(|event| match event {
        GameEvent::LevelSolved { .. } => Some(Feedback::Cheer),
        GameEvent::MoveBlocked(_) => Some(Feedback::Bump),
        _ => None,
    })
}

fn cell_char(terrain: Terrain, occupant: Occupant) -> char {
    match (terrain, occupant) {
        (Terrain::Wall, _) => '|',
        (Terrain::Empty, Occupant::Empty) => ' ',
        (Terrain::Target, Occupant::Empty) => '*',
        (Terrain::Empty, Occupant::Block) => 'X',
        (Terrain::Target, Occupant::Block) => '#',
        (Terrain::Empty, Occupant::Actor) => 'o',
        (Terrain::Target, Occupant::Actor) => 'O',
    }
}

/// Plain-text board, one line per row, using the template characters where they exist.
pub fn render_grid_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for i in 0..grid.rows() as i32 {
        for j in 0..grid.cols() as i32 {
            let pos = Vec2 { i, j };
            result.push(cell_char(grid.terrain_at(&pos), grid.occupant_at(&pos)));
        }
        result.push('\n');
    }
    result
}

fn grid_lines(grid: &Grid) -> Vec<Line<'static>> {
    (0..grid.rows() as i32)
        .map(|i| {
            let spans: Vec<Span> = (0..grid.cols() as i32)
                .map(|j| {
                    let pos = Vec2 { i, j };
                    let (glyph, color) = match (grid.terrain_at(&pos), grid.occupant_at(&pos)) {
                        (Terrain::Wall, _) => ("██", Color::DarkGray),
                        (Terrain::Empty, Occupant::Empty) => ("  ", Color::Reset),
                        (Terrain::Target, Occupant::Empty) => ("··", Color::Yellow),
                        (Terrain::Empty, Occupant::Block) => ("[]", Color::Magenta),
                        (Terrain::Target, Occupant::Block) => ("[]", Color::Green),
                        (_, Occupant::Actor) => ("()", Color::Cyan),
                    };
                    Span::styled(glyph, Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
                    ConsoleInput::UserAction(UserAction::NewLevel)
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    ConsoleInput::UserAction(UserAction::Resign)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
