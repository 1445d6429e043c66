//! Per-user session actor

use super::session::{Dispatched, Session};
use tokio::sync::{mpsc, oneshot};

/// Requests delivered to a session actor, processed strictly in order
#[derive(Debug)]
pub enum SessionCommand {
    Dispatch {
        text: String,
        reply: oneshot::Sender<Dispatched>,
    },
    Reset {
        done: oneshot::Sender<()>,
    },
}

/// Owns one user's [`Session`] and serialises everything sent to it
pub struct SessionRuntime {
    session: Session,
    command_rx: mpsc::Receiver<SessionCommand>,
}

impl SessionRuntime {
    pub fn new(session: Session, command_rx: mpsc::Receiver<SessionCommand>) -> Self {
        Self {
            session,
            command_rx,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(user_id = %self.session.user_id(), "Starting session runtime");

        while let Some(command) = self.command_rx.recv().await {
            match command {
                SessionCommand::Dispatch { text, reply } => {
                    let dispatched = self.session.dispatch(&text);
                    tracing::debug!(
                        user_id = %self.session.user_id(),
                        task = ?self.session.active_task(),
                        redraw_menu = dispatched.redraw_menu,
                        "Message dispatched"
                    );
                    if reply.send(dispatched).is_err() {
                        tracing::debug!(
                            user_id = %self.session.user_id(),
                            "Caller dropped before reply"
                        );
                    }
                }
                SessionCommand::Reset { done } => {
                    self.session.reset();
                    let _ = done.send(());
                }
            }
        }

        tracing::info!(user_id = %self.session.user_id(), "Session runtime stopped");
    }
}
