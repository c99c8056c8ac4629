//! Splitting sprite names into a sequence name and a frame number.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ReelError, Result};

/// Trailing frame number, optionally preceded by separators.
static FRAME_NUMBER: LazyLock<Result<Regex, regex::Error>> =
	LazyLock::new(|| Regex::new(r"^(?P<base>.*?)[ _.\-]*(?P<number>\d+)$"));

/// Drops a trailing file extension such as `.png`.
///
/// Purely numeric suffixes are kept, so `"walk.01"` is left untouched.
pub(crate) fn strip_extension(name: &str) -> &str {
	match name.rsplit_once('.') {
		Some((stem, ext))
			if !stem.is_empty()
				&& !ext.is_empty()
				&& ext.chars().all(|c| c.is_ascii_alphanumeric())
				&& ext.chars().any(|c| c.is_ascii_alphabetic()) =>
		{
			stem
		}
		_ => name,
	}
}

/// Splits `"walking east 3"` into `("walking east", Some(3))`.
///
/// Names without a trailing number, names made only of digits and numbers too large
/// for a `u32` are returned whole with no frame number.
pub(crate) fn split_frame_number(name: &str) -> Result<(&str, Option<u32>)> {
	let pattern = FRAME_NUMBER.as_ref().map_err(|err| ReelError::Pattern(err.to_string()))?;

	let Some(captures) = pattern.captures(name) else {
		return Ok((name, None));
	};
	let (Some(base), Some(number)) = (captures.name("base"), captures.name("number")) else {
		return Ok((name, None));
	};
	if base.as_str().is_empty() {
		return Ok((name, None));
	}

	match number.as_str().parse::<u32>() {
		Ok(number) => Ok((base.as_str(), Some(number))),
		Err(_) => Ok((name, None)),
	}
}
