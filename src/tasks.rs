//! The three array exercises and the session type that runs them
//!
//! An [`Exercise`] supplies everything task-specific: how manual input is
//! parsed, how random input is drawn, which kernel runs and how results are
//! shown. [`TaskSession`] drives any exercise through the shared state
//! machine and is handed to the dispatcher as a `Box<dyn TaskFsm>`, so new
//! exercises plug in without the dispatcher knowing their internals.

pub mod parse;
mod session;
mod task1;
mod task5;
mod task8;

pub use session::{Response, TaskSession};
pub use task1::MergeExercise;
pub use task5::SubarraySumExercise;
pub use task8::ReversalMatchExercise;

use crate::error::TaskError;
use crate::messages::{
    self, matches_button, BUTTON_TASK1, BUTTON_TASK5, BUTTON_TASK8, TASK1_DESCRIPTION,
    TASK5_DESCRIPTION, TASK8_DESCRIPTION,
};
use crate::state_machine::{SessionLimits, TaskState};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Task-specific half of a task conversation
pub trait Exercise: Send + 'static {
    type Input: Clone + fmt::Debug + PartialEq + Send;
    type Output: Clone + fmt::Debug + PartialEq + Send;

    const KIND: TaskKind;

    /// Explains the manual input format
    fn manual_prompt() -> &'static str;

    fn parse_manual(text: &str) -> Result<Self::Input, TaskError>;

    /// Draws `size` random values satisfying the kernel's preconditions
    fn generate<R: Rng>(size: usize, rng: &mut R) -> Self::Input;

    fn solve(input: &Self::Input) -> Result<Self::Output, TaskError>;

    fn describe_input(input: &Self::Input) -> String;

    fn describe_result(input: &Self::Input, output: &Self::Output) -> String;
}

/// Object-safe view of a running task conversation
pub trait TaskFsm: Send {
    fn kind(&self) -> TaskKind;

    fn state(&self) -> TaskState;

    /// Consumes one user message
    fn handle(&mut self, text: &str) -> Response;

    /// Forces the conversation back to its action menu, keeping stored data
    fn return_to_menu(&mut self);
}

/// The exercises offered in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Task1,
    Task5,
    Task8,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [TaskKind::Task1, TaskKind::Task5, TaskKind::Task8];

    pub fn label(self) -> &'static str {
        match self {
            TaskKind::Task1 => BUTTON_TASK1,
            TaskKind::Task5 => BUTTON_TASK5,
            TaskKind::Task8 => BUTTON_TASK8,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TaskKind::Task1 => TASK1_DESCRIPTION,
            TaskKind::Task5 => TASK5_DESCRIPTION,
            TaskKind::Task8 => TASK8_DESCRIPTION,
        }
    }

    /// Main-menu selection named by `text`, if any
    pub fn from_button(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| matches_button(text, kind.label()))
    }

    /// Builds a fresh conversation for this task, at its action menu with no data
    pub fn start(self, limits: SessionLimits) -> Box<dyn TaskFsm> {
        match self {
            TaskKind::Task1 => Box::new(TaskSession::<MergeExercise>::new(limits)),
            TaskKind::Task5 => Box::new(TaskSession::<SubarraySumExercise>::new(limits)),
            TaskKind::Task8 => Box::new(TaskSession::<ReversalMatchExercise>::new(limits)),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two integer arrays, the input of Task1 and Task8
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayPair {
    pub first: Vec<i64>,
    pub second: Vec<i64>,
}

impl ArrayPair {
    pub fn new(first: Vec<i64>, second: Vec<i64>) -> Self {
        Self { first, second }
    }

    fn describe(&self) -> String {
        format!(
            "Array 1: {}\nArray 2: {}",
            messages::format_list(&self.first),
            messages::format_list(&self.second)
        )
    }
}

/// An array with a target sum, the input of Task5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayWithTarget {
    pub values: Vec<i64>,
    pub target: i64,
}
