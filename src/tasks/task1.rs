//! Task1: merging two arrays with cancellation of equal pairs

use super::parse::{parse_int_list, split_two};
use super::{ArrayPair, Exercise, TaskKind};
use crate::error::TaskError;
use crate::kernels::merge_with_cancellation;
use crate::messages::{format_list, INPUT_MANUAL_TASK1};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeExercise;

impl Exercise for MergeExercise {
    type Input = ArrayPair;
    type Output = Vec<i64>;

    const KIND: TaskKind = TaskKind::Task1;

    fn manual_prompt() -> &'static str {
        INPUT_MANUAL_TASK1
    }

    /// Two space-separated lists of equal, non-zero length around `;`
    fn parse_manual(text: &str) -> Result<ArrayPair, TaskError> {
        let (first, second) = split_two(text)?;
        let first = parse_int_list(first)?;
        let second = parse_int_list(second)?;
        if first.is_empty() || second.is_empty() {
            return Err(TaskError::EmptyInput);
        }
        if first.len() != second.len() {
            return Err(TaskError::LengthMismatch {
                left: first.len(),
                right: second.len(),
            });
        }
        Ok(ArrayPair::new(first, second))
    }

    fn generate<R: Rng>(size: usize, rng: &mut R) -> ArrayPair {
        let mut draw = || -> Vec<i64> { (0..size).map(|_| rng.gen_range(1..=20)).collect() };
        let first = draw();
        let second = draw();
        ArrayPair::new(first, second)
    }

    fn solve(input: &ArrayPair) -> Result<Vec<i64>, TaskError> {
        merge_with_cancellation(&input.first, &input.second).map_err(TaskError::from)
    }

    fn describe_input(input: &ArrayPair) -> String {
        input.describe()
    }

    fn describe_result(_input: &ArrayPair, output: &Vec<i64>) -> String {
        format!("Result: {}", format_list(output))
    }
}
