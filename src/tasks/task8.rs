//! Task8: numbers shared between two arrays, allowing digit reversal

use super::parse::{parse_int_list, split_two};
use super::{ArrayPair, Exercise, TaskKind};
use crate::error::TaskError;
use crate::kernels::count_matches_with_reversal;
use crate::messages::INPUT_MANUAL_TASK8;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReversalMatchExercise;

impl Exercise for ReversalMatchExercise {
    type Input = ArrayPair;
    type Output = usize;

    const KIND: TaskKind = TaskKind::Task8;

    fn manual_prompt() -> &'static str {
        INPUT_MANUAL_TASK8
    }

    fn parse_manual(text: &str) -> Result<ArrayPair, TaskError> {
        let (first, second) = split_two(text)?;
        let first = parse_int_list(first)?;
        let second = parse_int_list(second)?;
        if first.is_empty() || second.is_empty() {
            return Err(TaskError::EmptyInput);
        }
        if let Some(&negative) = first.iter().chain(&second).find(|&&v| v < 0) {
            return Err(TaskError::NegativeValue(negative));
        }
        Ok(ArrayPair::new(first, second))
    }

    /// Only positive values, so every reversal is well defined
    fn generate<R: Rng>(size: usize, rng: &mut R) -> ArrayPair {
        let mut draw = || -> Vec<i64> { (0..size).map(|_| rng.gen_range(10..=999)).collect() };
        let first = draw();
        let second = draw();
        ArrayPair::new(first, second)
    }

    fn solve(input: &ArrayPair) -> Result<usize, TaskError> {
        count_matches_with_reversal(&input.first, &input.second).map_err(TaskError::from)
    }

    fn describe_input(input: &ArrayPair) -> String {
        input.describe()
    }

    fn describe_result(_input: &ArrayPair, output: &usize) -> String {
        format!("Matching numbers (as-is or reversed): {output}")
    }
}
