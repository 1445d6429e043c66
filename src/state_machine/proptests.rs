//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::error::TaskError;
use crate::tasks::{
    Exercise, MergeExercise, ReversalMatchExercise, Response, SubarraySumExercise, TaskFsm,
    TaskSession,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_limits() -> SessionLimits {
    SessionLimits { max_random_size: 20 }
}

/// Feeds `messages` to a fresh session, checking invariants after every step
fn run_conversation<E: Exercise>(messages: &[String], seed: u64) -> Result<(), TestCaseError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = TaskSession::<E>::new(test_limits());

    for message in messages {
        let before = session.state();
        let response = session.step(message, &mut rng);

        match &response {
            Response::Reply { state, .. } => prop_assert_eq!(*state, session.state()),
            Response::Failed(_) => prop_assert_eq!(session.state(), TaskState::Menu),
            Response::Exit => prop_assert_eq!(before, TaskState::Menu),
        }

        // Input states never survive a second message
        if before != TaskState::Menu {
            prop_assert_eq!(session.state(), TaskState::Menu);
        }

        // A stored result always belongs to the stored input
        let context = session.context();
        if let Some(result) = &context.result {
            let input = context.input.as_ref();
            prop_assert!(input.is_some());
            prop_assert_eq!(&E::solve(input.unwrap()).unwrap(), result);
        }
    }
    Ok(())
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_menu_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("enter manually".to_string()),
        Just("generate randomly".to_string()),
        Just("execute".to_string()),
        Just("show result".to_string()),
        Just("EXECUTE ".to_string()),
    ]
}

fn arb_data_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,3}( -?[0-9]{1,3}){0,5}; ?-?[0-9]{1,3}( -?[0-9]{1,3}){0,5}",
        "[0-9]{1,2}",
        "-[0-9]{1,2}",
        "[a-z ;]{0,10}",
        Just(String::new()),
    ]
}

fn arb_message() -> impl Strategy<Value = String> {
    prop_oneof![3 => arb_menu_text(), 2 => arb_data_text(), 1 => any::<String>()]
}

fn arb_state() -> impl Strategy<Value = TaskState> {
    prop_oneof![
        Just(TaskState::Menu),
        Just(TaskState::AwaitingManualInput),
        Just(TaskState::AwaitingRandomSize),
    ]
}

fn arb_merge_context() -> impl Strategy<Value = TaskContext<MergeExercise>> {
    proptest::option::of((1usize..6).prop_flat_map(|len| {
        (
            proptest::collection::vec(-50i64..50, len),
            proptest::collection::vec(-50i64..50, len),
        )
    }))
    .prop_map(|pair| {
        let input = pair.map(|(first, second)| crate::tasks::ArrayPair::new(first, second));
        TaskContext {
            input,
            result: None,
        }
    })
}

// ============================================================================
// Transition properties
// ============================================================================

proptest! {
    #[test]
    fn input_states_always_return_to_menu(
        state in prop_oneof![
            Just(TaskState::AwaitingManualInput),
            Just(TaskState::AwaitingRandomSize),
        ],
        context in arb_merge_context(),
        text in arb_message(),
    ) {
        match transition(state, &context, &test_limits(), Event::user_text(text)) {
            Ok(result) => prop_assert_eq!(result.new_state, TaskState::Menu),
            Err(err) => prop_assert!(err.is_input_error()),
        }
    }

    #[test]
    fn menu_only_leaves_on_entry_actions(
        context in arb_merge_context(),
        text in arb_message(),
    ) {
        let event = Event::user_text(text.clone());
        if let Ok(result) = transition(TaskState::Menu, &context, &test_limits(), event) {
            match MenuAction::parse(&text) {
                Some(MenuAction::EnterManually) => {
                    prop_assert_eq!(result.new_state, TaskState::AwaitingManualInput);
                }
                Some(MenuAction::GenerateRandomly) => {
                    prop_assert_eq!(result.new_state, TaskState::AwaitingRandomSize);
                }
                _ => prop_assert_eq!(result.new_state, TaskState::Menu),
            }
        }
    }

    #[test]
    fn transition_is_deterministic(
        state in arb_state(),
        context in arb_merge_context(),
        text in arb_message(),
    ) {
        let first = transition(state, &context, &test_limits(), Event::user_text(text.clone()));
        let second = transition(state, &context, &test_limits(), Event::user_text(text));
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.new_state, b.new_state);
                prop_assert_eq!(format!("{:?}", a.effects), format!("{:?}", b.effects));
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => prop_assert!(false, "transition gave different outcomes"),
        }
    }

    #[test]
    fn execute_needs_input(context in arb_merge_context()) {
        let event = Event::user_text("execute");
        let outcome = transition(TaskState::Menu, &context, &test_limits(), event);
        if context.input.is_none() {
            prop_assert_eq!(outcome.unwrap_err(), TaskError::NoDataYet);
        } else {
            prop_assert!(outcome.is_ok());
        }
    }
}

// ============================================================================
// Whole-conversation properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn merge_conversation_invariants(
        messages in proptest::collection::vec(arb_message(), 1..30),
        seed in any::<u64>(),
    ) {
        run_conversation::<MergeExercise>(&messages, seed)?;
    }

    #[test]
    fn subarray_conversation_invariants(
        messages in proptest::collection::vec(arb_message(), 1..30),
        seed in any::<u64>(),
    ) {
        run_conversation::<SubarraySumExercise>(&messages, seed)?;
    }

    #[test]
    fn reversal_conversation_invariants(
        messages in proptest::collection::vec(arb_message(), 1..30),
        seed in any::<u64>(),
    ) {
        run_conversation::<ReversalMatchExercise>(&messages, seed)?;
    }
}
