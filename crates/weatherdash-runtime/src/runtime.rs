use std::{fmt, io, sync::mpsc, time::Duration};

use crate::{
    App, Mailbox,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the `App` trait.
pub struct Runtime<M> {
    events: EventLoop<M>,
    mailbox: Mailbox<M>,
}

impl<M> Default for Runtime<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for Runtime<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime").finish_non_exhaustive()
    }
}

impl<M> Runtime<M> {
    /// Creates a new Runtime.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            events: EventLoop::new(receiver),
            mailbox: Mailbox::new(sender),
        }
    }

    /// Returns a handle for posting messages to the application.
    #[must_use]
    pub fn mailbox(&self) -> Mailbox<M> {
        self.mailbox.clone()
    }

    /// Sets the tick rate (Hz, ticks per second).
    ///
    /// Pass `None` to disable tick events.
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    /// Sets the tick interval.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Sets the render mode.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Runs the event loop until `app.should_exit()` returns true
    ///    - `Event::Tick`: calls `app.update()`
    ///    - `Event::Render`: calls `app.draw()`
    ///    - `Event::Crossterm`: calls `app.handle_event()`
    ///    - `Event::Message`: calls `app.handle_message()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App<Message = M>,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                    TuiEvent::Message(message) => {
                        app.handle_message(&mut self, message);
                    }
                }
            }
            Ok(())
        })
    }
}
