//! Session dispatcher
//!
//! Routes each inbound `(user_id, text)` pair to the session owned by that
//! user. Every session lives in its own task ([`SessionRuntime`]), so one
//! user's messages are handled strictly in arrival order while different
//! users proceed concurrently.

mod executor;
mod session;

pub use executor::{SessionCommand, SessionRuntime};
pub use session::{Dispatched, Session};

use crate::state_machine::SessionLimits;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, RwLock};

/// Opaque, externally supplied user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failures of the dispatch machinery itself, never of a task
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("session runtime for user {0} has stopped")]
    SessionClosed(UserId),
}

/// Handle to interact with a running session
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    fn is_same(&self, other: &SessionHandle) -> bool {
        self.command_tx.same_channel(&other.command_tx)
    }
}

/// Process-wide store of user sessions
pub struct Dispatcher {
    limits: SessionLimits,
    sessions: RwLock<HashMap<UserId, SessionHandle>>,
}

impl Dispatcher {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            limits,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Number of users seen since the process started
    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Creates the user's session, or returns an existing one to the top level.
    /// Idempotent.
    pub async fn start_session(&self, user_id: &UserId) {
        let handle = self.get_or_create(user_id).await;
        if let Err(err) = self.reset(user_id, &handle).await {
            // A fresh runtime already starts at the top level
            tracing::warn!(error = %err, "Replacing stopped session runtime");
            self.evict(user_id, &handle).await;
            self.get_or_create(user_id).await;
        }
    }

    /// Routes one message to the user's session, creating it on first contact
    pub async fn dispatch(&self, user_id: &UserId, text: &str) -> Dispatched {
        let handle = self.get_or_create(user_id).await;
        match self.send(user_id, &handle, text).await {
            Ok(dispatched) => dispatched,
            Err(err) => {
                tracing::error!(error = %err, "Dispatch failed");
                self.evict(user_id, &handle).await;
                Dispatched::failure()
            }
        }
    }

    /// Get or create the runtime for a user
    async fn get_or_create(&self, user_id: &UserId) -> SessionHandle {
        {
            let sessions = self.sessions.read().await;
            if let Some(handle) = sessions.get(user_id) {
                return handle.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        // Another caller may have won the race for the write lock
        if let Some(handle) = sessions.get(user_id) {
            return handle.clone();
        }

        let (command_tx, command_rx) = mpsc::channel(32);
        let runtime = SessionRuntime::new(Session::new(user_id.clone(), self.limits), command_rx);
        tokio::spawn(runtime.run());

        let handle = SessionHandle { command_tx };
        sessions.insert(user_id.clone(), handle.clone());
        tracing::info!(user_id = %user_id, sessions = sessions.len(), "Session created");
        handle
    }

    async fn send(
        &self,
        user_id: &UserId,
        handle: &SessionHandle,
        text: &str,
    ) -> Result<Dispatched, DispatchError> {
        let (reply, reply_rx) = oneshot::channel();
        let command = SessionCommand::Dispatch {
            text: text.to_string(),
            reply,
        };
        handle
            .command_tx
            .send(command)
            .await
            .map_err(|_| DispatchError::SessionClosed(user_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| DispatchError::SessionClosed(user_id.clone()))
    }

    async fn reset(&self, user_id: &UserId, handle: &SessionHandle) -> Result<(), DispatchError> {
        let (done, done_rx) = oneshot::channel();
        handle
            .command_tx
            .send(SessionCommand::Reset { done })
            .await
            .map_err(|_| DispatchError::SessionClosed(user_id.clone()))?;
        done_rx
            .await
            .map_err(|_| DispatchError::SessionClosed(user_id.clone()))
    }

    /// Forgets a stopped runtime unless it was already replaced
    async fn evict(&self, user_id: &UserId, handle: &SessionHandle) {
        let mut sessions = self.sessions.write().await;
        if sessions.get(user_id).is_some_and(|current| current.is_same(handle)) {
            sessions.remove(user_id);
        }
    }
}
