//! Effects produced by state transitions

use crate::tasks::Exercise;

/// Effects to be executed after a state transition
#[derive(Debug, Clone)]
pub enum Effect<E: Exercise> {
    /// Append text to the reply sent back to the user
    Reply(String),

    /// Replace the stored input; also discards any stale result
    StoreInput(E::Input),

    /// Remember the kernel output for "show result"
    StoreResult(E::Output),

    /// Draw random input of the given size, answered by
    /// [`crate::state_machine::Event::InputGenerated`]
    GenerateInput { size: usize },

    /// Hand the user back to the top-level menu
    Exit,
}

impl<E: Exercise> Effect<E> {
    pub fn reply(text: impl Into<String>) -> Self {
        Effect::Reply(text.into())
    }
}
