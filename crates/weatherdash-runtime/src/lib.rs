//! Event loop for the terminal dashboard.
//!
//! [`Runtime`] drives an [`App`] with tick, render and terminal events, and
//! delivers messages posted to its [`Mailbox`] from background threads.

pub use self::{app::App, event_loop::RenderMode, mailbox::Mailbox, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod mailbox;
mod runtime;
