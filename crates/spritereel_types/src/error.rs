//! Error types for sprite-sheet playback data.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ReelError> = std::result::Result<T, E>;

/// Errors raised by constructors, setters and decoders of the playback data model.
///
/// Every fallible operation validates its input before touching the receiver, so a
/// returned error always leaves the original value unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReelError {
	/// A value was outside the domain accepted by a field
	#[error("Invalid argument for `{field}`: {reason}")]
	InvalidArgument {
		/// Name of the offending field
		field: &'static str,
		/// Human readable constraint that was violated
		reason: String,
	},

	/// An animation type that is not one of the five supported playback modes
	#[error("Unsupported animation type: {0}")]
	UnsupportedAnimationType(String),

	/// Malformed textual representation of a geometry value
	#[error("Cannot parse {kind} from {input:?}: {reason}")]
	Parse {
		/// Name of the type being parsed
		kind: &'static str,
		/// The rejected input
		input: String,
		/// Why the input was rejected
		reason: String,
	},

	/// The sprite name pattern failed to compile
	#[error("Invalid sprite name pattern: {0}")]
	Pattern(String),
}

impl ReelError {
	/// Creates an [`ReelError::InvalidArgument`] error.
	pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
		Self::InvalidArgument {
			field,
			reason: reason.into(),
		}
	}

	/// Creates a [`ReelError::Parse`] error.
	pub fn parse(kind: &'static str, input: &str, reason: impl Into<String>) -> Self {
		Self::Parse {
			kind,
			input: input.to_string(),
			reason: reason.into(),
		}
	}

	/// Validates that `value` is a finite, non-negative duration.
	pub(crate) fn check_duration(field: &'static str, value: f32) -> Result<f32> {
		if !value.is_finite() {
			return Err(Self::invalid_argument(
				field,
				format!("duration must be finite, got {value}"),
			));
		}
		if value < 0.0 {
			return Err(Self::invalid_argument(
				field,
				format!("duration must be non-negative, got {value}"),
			));
		}
		Ok(value)
	}

	/// Validates that a pixel dimension is non-negative.
	pub(crate) fn check_dimension(field: &'static str, value: i32) -> Result<i32> {
		if value < 0 {
			return Err(Self::invalid_argument(field, format!("must be non-negative, got {value}")));
		}
		Ok(value)
	}
}
