use crate::session::Session;

/// Everything the terminal needs to draw one frame.
pub struct GameRenderState<'a> {
    pub session: Option<&'a Session>,
    pub levels_played: usize,
    pub error: Option<String>,
    pub feedback: Option<Feedback>,
}

/// Short-lived reaction to the last input, shown next to the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Bump,
    Cheer,
}
