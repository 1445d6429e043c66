//! Per-user session: top-level menu plus at most one attached task

use super::UserId;
use crate::messages::{
    self, describe_error, matches_button, Keyboard, ACTION_PROMPT, BACK_TO_MAIN, BUTTON_ALL_TASKS,
    GENERIC_FAILURE, INVALID_MAIN_CHOICE, MAIN_MENU_PROMPT, NEXT_ACTION_PROMPT,
};
use crate::state_machine::{SessionLimits, TaskState};
use crate::tasks::{Response, TaskFsm, TaskKind};
use std::panic::{self, AssertUnwindSafe};

/// What the transport should deliver for one inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub text: String,
    /// Whether the keyboard for the current level should be drawn again
    pub redraw_menu: bool,
    pub active_task: Option<TaskKind>,
    /// State of the active task; `None` at the top level
    pub state: Option<TaskState>,
}

impl Dispatched {
    pub fn top_level(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            redraw_menu: true,
            active_task: None,
            state: None,
        }
    }

    pub fn in_task(text: impl Into<String>, task: TaskKind, state: TaskState) -> Self {
        Self {
            text: text.into(),
            redraw_menu: state.is_menu(),
            active_task: Some(task),
            state: Some(state),
        }
    }

    /// Notice used when the session itself could not be reached
    pub fn failure() -> Self {
        Self::top_level(GENERIC_FAILURE)
    }

    /// Keyboard matching the level the user is at, when a redraw is due
    pub fn keyboard(&self) -> Option<Keyboard> {
        if !self.redraw_menu {
            return None;
        }
        Some(match self.active_task {
            Some(_) => messages::task_actions_keyboard(),
            None => messages::main_keyboard(),
        })
    }
}

/// One user's conversation
pub struct Session {
    user_id: UserId,
    limits: SessionLimits,
    active: Option<Box<dyn TaskFsm>>,
}

impl Session {
    pub fn new(user_id: UserId, limits: SessionLimits) -> Self {
        Self {
            user_id,
            limits,
            active: None,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn active_task(&self) -> Option<TaskKind> {
        self.active.as_ref().map(|task| task.kind())
    }

    /// Drops any attached task, returning the user to the top level
    pub fn reset(&mut self) {
        if let Some(task) = self.active.take() {
            tracing::info!(
                user_id = %self.user_id,
                task = %task.kind(),
                "Session reset, task detached"
            );
        }
    }

    pub fn dispatch(&mut self, text: &str) -> Dispatched {
        if self.active.is_some() {
            self.forward(text)
        } else {
            self.select(text)
        }
    }

    fn select(&mut self, text: &str) -> Dispatched {
        if let Some(kind) = TaskKind::from_button(text) {
            self.active = Some(kind.start(self.limits));
            tracing::info!(user_id = %self.user_id, task = %kind, "Task attached");
            return Dispatched::in_task(
                format!("{}\n\n{ACTION_PROMPT}", kind.description()),
                kind,
                TaskState::Menu,
            );
        }

        if matches_button(text, BUTTON_ALL_TASKS) {
            return Dispatched::top_level(format!(
                "{}\n\n{MAIN_MENU_PROMPT}",
                messages::all_tasks_description()
            ));
        }

        Dispatched::top_level(INVALID_MAIN_CHOICE)
    }

    fn forward(&mut self, text: &str) -> Dispatched {
        let Some(task) = self.active.as_mut() else {
            return self.select(text);
        };
        let kind = task.kind();

        match panic::catch_unwind(AssertUnwindSafe(|| task.handle(text))) {
            Ok(Response::Reply { text, state }) => {
                tracing::debug!(user_id = %self.user_id, task = %kind, %state, "Task replied");
                // Back at rest: the action keyboard is shown again with a prompt
                let text = if state.is_menu() {
                    with_prompt(&text, NEXT_ACTION_PROMPT)
                } else {
                    text
                };
                Dispatched::in_task(text, kind, state)
            }
            Ok(Response::Failed(err)) => {
                tracing::debug!(user_id = %self.user_id, task = %kind, error = %err, "Step failed");
                Dispatched::in_task(
                    with_prompt(&describe_error(&err), ACTION_PROMPT),
                    kind,
                    TaskState::Menu,
                )
            }
            Ok(Response::Exit) => {
                self.active = None;
                tracing::info!(user_id = %self.user_id, task = %kind, "Task detached");
                Dispatched::top_level(BACK_TO_MAIN)
            }
            Err(panic) => {
                tracing::error!(
                    user_id = %self.user_id,
                    task = %kind,
                    state = %task.state(),
                    panic = panic_message(panic.as_ref()),
                    "Task handler panicked"
                );
                task.return_to_menu();
                Dispatched::in_task(
                    with_prompt(GENERIC_FAILURE, ACTION_PROMPT),
                    kind,
                    TaskState::Menu,
                )
            }
        }
    }
}

fn with_prompt(text: &str, prompt: &str) -> String {
    format!("{text}\n\n{prompt}")
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
