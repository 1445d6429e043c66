//! User-facing text: prompts, notices, button labels and keyboard layouts

use crate::error::TaskError;
use std::fmt::Display;

// ============================================================================
// Button labels
// ============================================================================

pub const BUTTON_TASK1: &str = "Task1";
pub const BUTTON_TASK5: &str = "Task5";
pub const BUTTON_TASK8: &str = "Task8";
pub const BUTTON_ALL_TASKS: &str = "All tasks";

pub const BUTTON_ENTER_MANUALLY: &str = "enter manually";
pub const BUTTON_GENERATE: &str = "generate randomly";
pub const BUTTON_EXECUTE: &str = "execute";
pub const BUTTON_SHOW_RESULT: &str = "show result";
pub const BUTTON_BACK: &str = "back";

/// A keyboard as rows of button labels
pub type Keyboard = Vec<Vec<&'static str>>;

pub fn main_keyboard() -> Keyboard {
    vec![
        vec![BUTTON_TASK1, BUTTON_TASK5, BUTTON_TASK8],
        vec![BUTTON_ALL_TASKS],
    ]
}

pub fn task_actions_keyboard() -> Keyboard {
    vec![
        vec![BUTTON_ENTER_MANUALLY, BUTTON_GENERATE],
        vec![BUTTON_EXECUTE, BUTTON_SHOW_RESULT],
        vec![BUTTON_BACK],
    ]
}

/// Compares user text with a button label the way users type it
pub fn matches_button(text: &str, label: &str) -> bool {
    text.trim().eq_ignore_ascii_case(label)
}

// ============================================================================
// Top level
// ============================================================================

pub const GREETING: &str =
    "Hello! I can solve three array exercises step by step. Pick a task below.";
pub const MAIN_MENU_PROMPT: &str = "Choose a task:";
pub const INVALID_MAIN_CHOICE: &str = "Unknown choice. Please pick a task with the buttons.";
pub const BACK_TO_MAIN: &str = "Back to the main menu.";
pub const ACTION_PROMPT: &str = "Choose an action:";
pub const NEXT_ACTION_PROMPT: &str = "Choose the next action:";
pub const GENERIC_FAILURE: &str =
    "Something went wrong while handling your message. Please try again.";

pub const TASK1_DESCRIPTION: &str = "Task 1: two arrays of equal length. The first is sorted \
descending, the second ascending; aligned elements are added, or replaced by 0 when they are \
equal. The result is sorted ascending.";
pub const TASK5_DESCRIPTION: &str = "Task 5: count the contiguous subarrays whose elements add \
up to a target number.";
pub const TASK8_DESCRIPTION: &str = "Task 8: count the numbers of the first array that appear in \
the second array either as they are or with their digits reversed (12 <-> 21).";

pub fn all_tasks_description() -> String {
    format!("{TASK1_DESCRIPTION}\n\n{TASK5_DESCRIPTION}\n\n{TASK8_DESCRIPTION}")
}

// ============================================================================
// Task actions
// ============================================================================

pub const INPUT_MANUAL_TASK1: &str =
    "Enter two arrays of equal length separated by ';', for example: 5 7 4; 4 9 3";
pub const INPUT_MANUAL_TASK5: &str =
    "Enter an array and a target sum separated by ';', for example: 1 1 1; 2";
pub const INPUT_MANUAL_TASK8: &str =
    "Enter two arrays of non-negative numbers separated by ';', for example: 12 34 56; 21 78 65";
pub const INPUT_RANDOM_SIZE: &str = "Enter the array size (a positive integer):";
pub const PLEASE_USE_BUTTONS: &str = "Invalid choice. Please use the buttons.";
pub const DATA_SAVED: &str = "Data saved.";
pub const GENERATED_SUCCESS: &str = "Data generated.";
pub const ALGORITHM_DONE: &str = "Done. Use \"show result\" to see the answer.";
pub const INVALID_INPUT: &str = "Invalid input";

/// Turns a task failure into the notice shown to the user
pub fn describe_error(err: &TaskError) -> String {
    if err.is_input_error() {
        format!("{INVALID_INPUT}: {err}")
    } else {
        capitalize(&err.to_string())
    }
}

/// Renders a sequence as `[1, 2, 3]`
pub fn format_list<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
