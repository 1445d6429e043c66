//! Task conversation state machine
//!
//! Follows the Elm Architecture: [`transition`] is a pure function from the
//! current state, the task context and an event to the next state plus a list
//! of effects. Executing those effects (storing data, drawing random numbers)
//! is left to [`crate::tasks::TaskSession`].

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::{Event, MenuAction};
pub use state::{SessionLimits, TaskContext, TaskState};
pub use transition::transition;
