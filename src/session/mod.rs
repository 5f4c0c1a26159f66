mod manager;
mod models;
mod observer;
mod session_helpers;

pub use manager::SessionManager;
pub use models::{ArchivedSession, Session, SessionStatus};
pub use observer::{EventLog, GameEvent, GameObserver};
