//! Parsing of free-text user input

use crate::error::TaskError;

/// Separator between the two parts of a manual input line
pub const PART_SEPARATOR: char = ';';

/// Splits `text` into exactly two parts around [`PART_SEPARATOR`]
pub fn split_two(text: &str) -> Result<(&str, &str), TaskError> {
    let mut parts = text.split(PART_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(TaskError::malformed(format!(
            "expected two parts separated by '{PART_SEPARATOR}'"
        ))),
    }
}

/// Parses whitespace-separated integers; an empty part yields an empty list
pub fn parse_int_list(part: &str) -> Result<Vec<i64>, TaskError> {
    part.split_whitespace().map(parse_token).collect()
}

/// Parses a part that must hold exactly one integer
pub fn parse_int(part: &str) -> Result<i64, TaskError> {
    let mut tokens = part.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => parse_token(token),
        (None, _) => Err(TaskError::malformed("expected a number")),
        (Some(_), Some(_)) => Err(TaskError::malformed("expected a single number")),
    }
}

/// Parses the size typed after "generate randomly"
pub fn parse_size(text: &str, max: usize) -> Result<usize, TaskError> {
    let text = text.trim();
    let size: i64 = text.parse().map_err(|_| {
        TaskError::invalid_size(format!("size must be a positive integer, got '{text}'"))
    })?;
    let size = usize::try_from(size)
        .ok()
        .filter(|&size| size > 0)
        .ok_or_else(|| TaskError::invalid_size(format!("size must be positive, got {size}")))?;
    if size > max {
        return Err(TaskError::invalid_size(format!(
            "size must not exceed {max}, got {size}"
        )));
    }
    Ok(size)
}

fn parse_token(token: &str) -> Result<i64, TaskError> {
    token
        .parse()
        .map_err(|_| TaskError::malformed(format!("'{token}' is not an integer")))
}
