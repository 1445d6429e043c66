//! Task5: counting subarrays with a target sum

use super::parse::{parse_int, parse_int_list, split_two};
use super::{ArrayWithTarget, Exercise, TaskKind};
use crate::error::TaskError;
use crate::kernels::count_subarrays_with_sum;
use crate::messages::{format_list, INPUT_MANUAL_TASK5};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubarraySumExercise;

impl Exercise for SubarraySumExercise {
    type Input = ArrayWithTarget;
    type Output = usize;

    const KIND: TaskKind = TaskKind::Task5;

    fn manual_prompt() -> &'static str {
        INPUT_MANUAL_TASK5
    }

    fn parse_manual(text: &str) -> Result<ArrayWithTarget, TaskError> {
        let (values, target) = split_two(text)?;
        let values = parse_int_list(values)?;
        let target = parse_int(target)?;
        if values.is_empty() {
            return Err(TaskError::EmptyInput);
        }
        Ok(ArrayWithTarget { values, target })
    }

    fn generate<R: Rng>(size: usize, rng: &mut R) -> ArrayWithTarget {
        let values = (0..size).map(|_| rng.gen_range(-10..=10)).collect();
        let target = rng.gen_range(-5..=10);
        ArrayWithTarget { values, target }
    }

    fn solve(input: &ArrayWithTarget) -> Result<usize, TaskError> {
        count_subarrays_with_sum(&input.values, input.target).map_err(TaskError::from)
    }

    fn describe_input(input: &ArrayWithTarget) -> String {
        format!("Array: {}\nTarget: {}", format_list(&input.values), input.target)
    }

    fn describe_result(input: &ArrayWithTarget, output: &usize) -> String {
        format!("Number of subarrays with sum {}: {output}", input.target)
    }
}
