//! Effect executor for one task conversation

use super::{Exercise, TaskFsm, TaskKind};
use crate::error::TaskError;
use crate::state_machine::{transition, Effect, Event, SessionLimits, TaskContext, TaskState};
use rand::Rng;

/// Outcome of one user message inside a task
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The step succeeded; `state` is where the conversation now rests
    Reply { text: String, state: TaskState },
    /// The step failed and the conversation is back at its action menu
    Failed(TaskError),
    /// The user asked to leave the task
    Exit,
}

/// Runs an [`Exercise`] through the shared state machine
pub struct TaskSession<E: Exercise> {
    state: TaskState,
    context: TaskContext<E>,
    limits: SessionLimits,
}

impl<E: Exercise> TaskSession<E> {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            state: TaskState::Menu,
            context: TaskContext::new(),
            limits,
        }
    }

    #[cfg(test)]
    pub fn context(&self) -> &TaskContext<E> {
        &self.context
    }

    /// Handles one message, drawing any random data from `rng`
    pub fn step<R: Rng>(&mut self, text: &str, rng: &mut R) -> Response {
        // Effects may produce follow-up events; process until none remain
        let mut events = vec![Event::user_text(text)];
        let mut replies: Vec<String> = Vec::new();
        let mut exit = false;

        while let Some(event) = events.pop() {
            let result = match transition(self.state, &self.context, &self.limits, event) {
                Ok(result) => result,
                Err(err) => {
                    tracing::debug!(
                        task = %E::KIND,
                        state = %self.state,
                        error = %err,
                        "Step failed"
                    );
                    self.state = TaskState::Menu;
                    return Response::Failed(err);
                }
            };

            self.state = result.new_state;
            for effect in result.effects {
                match effect {
                    Effect::Reply(text) => replies.push(text),
                    Effect::StoreInput(input) => {
                        self.context.input = Some(input);
                        self.context.result = None;
                    }
                    Effect::StoreResult(output) => self.context.result = Some(output),
                    Effect::GenerateInput { size } => {
                        events.push(Event::InputGenerated {
                            input: E::generate(size, rng),
                        });
                    }
                    Effect::Exit => exit = true,
                }
            }
        }

        if exit {
            return Response::Exit;
        }
        Response::Reply {
            text: replies.join("\n"),
            state: self.state,
        }
    }
}

impl<E: Exercise> TaskFsm for TaskSession<E> {
    fn kind(&self) -> TaskKind {
        E::KIND
    }

    fn state(&self) -> TaskState {
        self.state
    }

    fn handle(&mut self, text: &str) -> Response {
        self.step(text, &mut rand::thread_rng())
    }

    fn return_to_menu(&mut self) {
        self.state = TaskState::Menu;
    }
}
