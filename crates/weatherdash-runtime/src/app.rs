use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for TUI applications.
///
/// Applications executed by `Runtime::run()` must implement this trait.
pub trait App {
    /// Messages posted to the runtime's mailbox.
    type Message;

    /// Initializes the application.
    ///
    /// Called at the start of `Runtime::run()`. Use this to configure the tick rate and
    /// render mode, and to start background work.
    fn init(&mut self, runtime: &mut Runtime<Self::Message>);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime<Self::Message>, event: Event);

    /// Handles a message posted to the mailbox.
    fn handle_message(&mut self, runtime: &mut Runtime<Self::Message>, message: Self::Message);

    /// Draws the screen (called on each `Event::Render`).
    fn draw(&self, frame: &mut Frame);

    /// Updates time-based state (called on each `Event::Tick`).
    fn update(&mut self, runtime: &mut Runtime<Self::Message>);
}
