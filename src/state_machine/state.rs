//! Task conversation state types

use crate::tasks::Exercise;
use serde::Serialize;

/// Where a task conversation currently stands.
///
/// Executing the kernel and showing the result happen inside a single step
/// taken from [`TaskState::Menu`], so neither is a state a session can rest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    #[default]
    Menu,
    AwaitingManualInput,
    AwaitingRandomSize,
}

impl TaskState {
    /// Resting point where the action keyboard is shown
    pub fn is_menu(self) -> bool {
        self == Self::Menu
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::AwaitingManualInput => "awaiting_manual_input",
            Self::AwaitingRandomSize => "awaiting_random_size",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable data collected during one task conversation
#[derive(Debug, Clone, PartialEq)]
pub struct TaskContext<E: Exercise> {
    pub input: Option<E::Input>,
    /// `None` whenever `input` changed after the last successful execution
    pub result: Option<E::Output>,
}

impl<E: Exercise> TaskContext<E> {
    pub fn new() -> Self {
        Self {
            input: None,
            result: None,
        }
    }
}

impl<E: Exercise> Default for TaskContext<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds applied to user-requested work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Largest array size accepted by "generate randomly"
    pub max_random_size: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_random_size: 1000,
        }
    }
}
