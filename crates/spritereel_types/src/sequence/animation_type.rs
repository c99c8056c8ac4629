//! Playback modes of a sequence.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ReelError;

/// How a sequence behaves when its frame index crosses either end of the frame list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum AnimationType {
	/// Play once, then rewind to the first frame and stop (stays visible)
	#[default]
	Once = 0,
	/// Play once, then stop on the last frame
	OnceHoldLast = 1,
	/// Play once, then stop on the last frame and hide the sequence
	OnceDisappear = 2,
	/// Wrap around forever
	Looping = 3,
	/// Bounce between both ends forever, flipping the play direction
	PingPong = 4,
}

impl AnimationType {
	/// All supported modes, in numeric order.
	pub const ALL: [Self; 5] =
		[Self::Once, Self::OnceHoldLast, Self::OnceDisappear, Self::Looping, Self::PingPong];

	/// Converts a u8 value to `AnimationType`
	pub fn from_u8(value: u8) -> Result<Self, ReelError> {
		Self::ALL
			.get(usize::from(value))
			.copied()
			.ok_or_else(|| ReelError::UnsupportedAnimationType(value.to_string()))
	}

	/// Converts `AnimationType` to u8
	pub fn to_u8(self) -> u8 {
		self as u8
	}

	/// Name of the mode, as used by [`Display`](fmt::Display) and serialization.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Once => "Once",
			Self::OnceHoldLast => "OnceHoldLast",
			Self::OnceDisappear => "OnceDisappear",
			Self::Looping => "Looping",
			Self::PingPong => "PingPong",
		}
	}

	/// Returns `true` for the three modes that stop at the end of the frame list.
	pub fn is_once(self) -> bool {
		matches!(self, Self::Once | Self::OnceHoldLast | Self::OnceDisappear)
	}
}

impl fmt::Display for AnimationType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AnimationType {
	type Err = ReelError;

	/// Parses a mode name; matching ignores ASCII case, `-` and `_`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted: String =
			s.chars().filter(|c| !matches!(c, '-' | '_')).collect::<String>().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|mode| mode.as_str().eq_ignore_ascii_case(&wanted))
			.ok_or_else(|| ReelError::UnsupportedAnimationType(s.to_string()))
	}
}

impl TryFrom<String> for AnimationType {
	type Error = ReelError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<AnimationType> for &'static str {
	fn from(mode: AnimationType) -> Self {
		mode.as_str()
	}
}
