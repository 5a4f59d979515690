use std::{fmt, sync::mpsc::Sender};

/// Handle for posting messages to a running [`Runtime`](crate::Runtime).
///
/// Mailboxes are cheap to clone and can be moved to other threads. Messages
/// are delivered to [`App::handle_message`](crate::App::handle_message) on the
/// UI thread in the order they were posted.
pub struct Mailbox<M> {
    sender: Sender<M>,
}

impl<M> Mailbox<M> {
    pub(crate) fn new(sender: Sender<M>) -> Self {
        Self { sender }
    }

    /// Posts a message.
    ///
    /// Returns `false` if the runtime has been dropped.
    pub fn post(&self, message: M) -> bool {
        self.sender.send(message).is_ok()
    }
}

impl<M> Clone for Mailbox<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M> fmt::Debug for Mailbox<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailbox").finish_non_exhaustive()
    }
}
