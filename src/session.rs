//! Explicit session context shared by views.
//!
//! Instead of each view re-subscribing to an ambient auth singleton, the
//! application owns one `SessionContext`, passes it to every consumer, and
//! consumers that care about changes hold a [`SessionWatcher`]. Dropping the
//! watcher unsubscribes.

use tokio::sync::watch;

use crate::domain::session::Session;

/// Holder of the current authenticated session, if any.
#[derive(Debug)]
pub struct SessionContext {
    tx: watch::Sender<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// The session as of now.
    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// Publishes a new session value to all watchers.
    pub fn set(&self, session: Option<Session>) {
        self.tx.send_replace(session);
    }

    /// Subscribes to session changes. The watcher only reports changes made
    /// after this call.
    pub fn subscribe(&self) -> SessionWatcher {
        SessionWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscription handle for session changes. Drop to unsubscribe.
#[derive(Debug)]
pub struct SessionWatcher {
    rx: watch::Receiver<Option<Session>>,
}

impl SessionWatcher {
    /// Waits for the next session change and returns the new value. Returns
    /// `None` once the owning [`SessionContext`] has been dropped.
    pub async fn changed(&mut self) -> Option<Option<Session>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// The most recently observed session value.
    pub fn current(&self) -> Option<Session> {
        self.rx.borrow().clone()
    }
}
