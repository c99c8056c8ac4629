//! Size of a texture or texture region.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ReelError, Result};

/// Non-negative pixel extent.
///
/// Negative components are rejected by every constructor, including deserialization.
///
/// # Examples
///
/// ```
/// use spritereel_types::geometry::TextureSize;
///
/// let size = TextureSize::new(32, 16).unwrap();
/// assert_eq!(size.width(), 32);
/// assert!(TextureSize::new(-1, 16).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSize", into = "RawSize")]
pub struct TextureSize {
	width: i32,
	height: i32,
}

/// Wire form of [`TextureSize`], validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawSize {
	w: i32,
	h: i32,
}

impl TextureSize {
	/// Zero-sized extent.
	pub const ZERO: Self = Self {
		width: 0,
		height: 0,
	};

	/// Creates a size.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`] if `width` or `height` is negative.
	pub fn new(width: i32, height: i32) -> Result<Self> {
		Ok(Self {
			width: ReelError::check_dimension("width", width)?,
			height: ReelError::check_dimension("height", height)?,
		})
	}

	/// Builds a size from components the caller has already checked.
	pub(crate) const fn from_validated(width: i32, height: i32) -> Self {
		debug_assert!(width >= 0 && height >= 0);
		Self {
			width,
			height,
		}
	}

	/// Width in pixels.
	pub const fn width(&self) -> i32 {
		self.width
	}

	/// Height in pixels.
	pub const fn height(&self) -> i32 {
		self.height
	}

	/// Returns `true` if either dimension is zero, so the size covers no pixels.
	///
	/// Unlike [`TexturePoint::is_zero`](super::TexturePoint::is_zero) this does not
	/// require both components to be zero.
	pub const fn is_degenerate(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Component-wise maximum of two sizes.
	pub fn max(self, other: Self) -> Self {
		Self {
			width: self.width.max(other.width),
			height: self.height.max(other.height),
		}
	}
}

impl TryFrom<RawSize> for TextureSize {
	type Error = ReelError;

	fn try_from(raw: RawSize) -> Result<Self> {
		Self::new(raw.w, raw.h)
	}
}

impl From<TextureSize> for RawSize {
	fn from(size: TextureSize) -> Self {
		Self {
			w: size.width,
			h: size.height,
		}
	}
}

impl fmt::Display for TextureSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.width, self.height)
	}
}

impl FromStr for TextureSize {
	type Err = ReelError;

	fn from_str(s: &str) -> Result<Self> {
		match super::parse_components::<2>("TextureSize", s)? {
			Some([width, height]) => Self::new(width, height),
			None => Ok(Self::ZERO),
		}
	}
}
