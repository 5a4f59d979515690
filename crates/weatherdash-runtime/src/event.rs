use crossterm::event::Event as CrosstermEvent;

/// Events processed by TUI applications.
#[derive(Debug)]
pub(super) enum TuiEvent<M> {
    /// Periodic update timing (based on `tick_interval`).
    Tick,
    /// Screen render timing (based on the render mode).
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
    /// A message posted to the runtime's mailbox.
    Message(M),
}

impl<M> From<CrosstermEvent> for TuiEvent<M> {
    fn from(event: CrosstermEvent) -> Self {
        Self::Crossterm(event)
    }
}
