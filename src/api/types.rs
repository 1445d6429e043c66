//! API request and response types

use crate::messages::Keyboard;
use crate::runtime::Dispatched;
use crate::state_machine::TaskState;
use crate::tasks::TaskKind;
use serde::{Deserialize, Serialize};

/// Request carrying one user message
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// Response to `/start`
#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub text: String,
    pub keyboard: Keyboard,
}

/// Response to a user message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub text: String,
    pub redraw_menu: bool,
    pub active_task: Option<TaskKind>,
    pub state: Option<TaskState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Keyboard>,
}

impl From<Dispatched> for MessageResponse {
    fn from(dispatched: Dispatched) -> Self {
        let keyboard = dispatched.keyboard();
        Self {
            text: dispatched.text,
            redraw_menu: dispatched.redraw_menu,
            active_task: dispatched.active_task,
            state: dispatched.state,
            keyboard,
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
