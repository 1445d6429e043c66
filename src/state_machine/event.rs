//! Events that drive a task conversation

use crate::messages::{
    matches_button, BUTTON_BACK, BUTTON_ENTER_MANUALLY, BUTTON_EXECUTE, BUTTON_GENERATE,
    BUTTON_SHOW_RESULT,
};
use crate::tasks::Exercise;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event<E: Exercise> {
    /// Text typed (or a button pressed) by the user
    UserText { text: String },
    /// Random data produced while executing [`crate::state_machine::Effect::GenerateInput`]
    InputGenerated { input: E::Input },
}

impl<E: Exercise> Event<E> {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::UserText { text: text.into() }
    }
}

/// Buttons of the task action keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EnterManually,
    GenerateRandomly,
    Execute,
    ShowResult,
    Back,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::EnterManually,
        MenuAction::GenerateRandomly,
        MenuAction::Execute,
        MenuAction::ShowResult,
        MenuAction::Back,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::EnterManually => BUTTON_ENTER_MANUALLY,
            MenuAction::GenerateRandomly => BUTTON_GENERATE,
            MenuAction::Execute => BUTTON_EXECUTE,
            MenuAction::ShowResult => BUTTON_SHOW_RESULT,
            MenuAction::Back => BUTTON_BACK,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| matches_button(text, action.label()))
    }
}
