//! Pure state transition function

use super::{Effect, Event, MenuAction, SessionLimits, TaskContext, TaskState};
use crate::error::TaskError;
use crate::messages::{
    ALGORITHM_DONE, DATA_SAVED, GENERATED_SUCCESS, INPUT_RANDOM_SIZE, PLEASE_USE_BUTTONS,
};
use crate::tasks::parse::parse_size;
use crate::tasks::Exercise;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult<E: Exercise> {
    pub new_state: TaskState,
    pub effects: Vec<Effect<E>>,
}

impl<E: Exercise> TransitionResult<E> {
    pub fn new(state: TaskState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect<E>) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs. An `Err` means
/// the step failed; the caller returns the session to [`TaskState::Menu`] so
/// a conversation can never get stuck in an input state.
pub fn transition<E: Exercise>(
    state: TaskState,
    context: &TaskContext<E>,
    limits: &SessionLimits,
    event: Event<E>,
) -> Result<TransitionResult<E>, TaskError> {
    match (state, event) {
        // ============================================================
        // Action menu
        // ============================================================
        (TaskState::Menu, Event::UserText { text }) => match MenuAction::parse(&text) {
            Some(MenuAction::EnterManually) => {
                Ok(TransitionResult::new(TaskState::AwaitingManualInput)
                    .with_effect(Effect::reply(E::manual_prompt())))
            }
            Some(MenuAction::GenerateRandomly) => {
                Ok(TransitionResult::new(TaskState::AwaitingRandomSize)
                    .with_effect(Effect::reply(INPUT_RANDOM_SIZE)))
            }
            Some(MenuAction::Execute) => execute(context),
            Some(MenuAction::ShowResult) => show_result(context),
            Some(MenuAction::Back) => {
                Ok(TransitionResult::new(TaskState::Menu).with_effect(Effect::Exit))
            }
            None => Ok(TransitionResult::new(TaskState::Menu)
                .with_effect(Effect::reply(PLEASE_USE_BUTTONS))),
        },

        // ============================================================
        // Data entry
        // ============================================================
        (TaskState::AwaitingManualInput, Event::UserText { text }) => {
            let input = E::parse_manual(&text)?;
            Ok(TransitionResult::new(TaskState::Menu)
                .with_effect(Effect::StoreInput(input))
                .with_effect(Effect::reply(DATA_SAVED)))
        }

        (TaskState::AwaitingRandomSize, Event::UserText { text }) => {
            let size = parse_size(&text, limits.max_random_size)?;
            Ok(TransitionResult::new(TaskState::Menu).with_effect(Effect::GenerateInput { size }))
        }

        // Generated data is accepted whatever the state; it only ever
        // follows a GenerateInput effect within the same step
        (_, Event::InputGenerated { input }) => {
            let summary = format!("{GENERATED_SUCCESS}\n{}", E::describe_input(&input));
            Ok(TransitionResult::new(TaskState::Menu)
                .with_effect(Effect::StoreInput(input))
                .with_effect(Effect::Reply(summary)))
        }
    }
}

fn execute<E: Exercise>(context: &TaskContext<E>) -> Result<TransitionResult<E>, TaskError> {
    let input = context.input.as_ref().ok_or(TaskError::NoDataYet)?;
    let output = E::solve(input)?;
    Ok(TransitionResult::new(TaskState::Menu)
        .with_effect(Effect::StoreResult(output))
        .with_effect(Effect::reply(ALGORITHM_DONE)))
}

fn show_result<E: Exercise>(context: &TaskContext<E>) -> Result<TransitionResult<E>, TaskError> {
    let input = context.input.as_ref().ok_or(TaskError::NoDataYet)?;
    let output = context.result.as_ref().ok_or(TaskError::NotComputedYet)?;
    Ok(TransitionResult::new(TaskState::Menu)
        .with_effect(Effect::Reply(E::describe_result(input, output))))
}
