//! Render-time mirroring flags.

use std::{fmt, ops::BitOr};

use serde::{Deserialize, Serialize};

/// Axes along which a sequence should be flipped when drawn.
///
/// The playback logic never interprets these flags; they are carried for the renderer.
///
/// # Examples
///
/// ```
/// use spritereel_types::sequence::MirrorDirections;
///
/// let both = MirrorDirections::Vertical | MirrorDirections::Horizontal;
/// assert_eq!(both, MirrorDirections::Both);
/// assert!(both.contains(MirrorDirections::Horizontal));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MirrorDirections {
	/// No mirroring
	#[default]
	None = 0,
	/// Mirror on the vertical axis
	Vertical = 1,
	/// Mirror on the horizontal axis
	Horizontal = 2,
	/// Mirror on both axes
	Both = 3,
}

impl MirrorDirections {
	/// Builds the flags from their bit representation; unknown bits are ignored.
	pub fn from_bits(bits: u8) -> Self {
		match bits & 0b11 {
			0 => Self::None,
			1 => Self::Vertical,
			2 => Self::Horizontal,
			_ => Self::Both,
		}
	}

	/// Bit representation.
	pub fn bits(self) -> u8 {
		self as u8
	}

	/// Returns `true` if every flag set in `other` is also set in `self`.
	pub fn contains(self, other: Self) -> bool {
		self.bits() & other.bits() == other.bits()
	}

	/// Returns `true` when no mirroring is applied.
	pub fn is_none(&self) -> bool {
		*self == Self::None
	}
}

impl BitOr for MirrorDirections {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		Self::from_bits(self.bits() | rhs.bits())
	}
}

impl fmt::Display for MirrorDirections {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::None => write!(f, "None"),
			Self::Vertical => write!(f, "Vertical"),
			Self::Horizontal => write!(f, "Horizontal"),
			Self::Both => write!(f, "Both"),
		}
	}
}
