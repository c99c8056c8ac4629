//! Rectangular region on a texture.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{TexturePoint, TextureSize, Tiles};
use crate::error::{ReelError, Result};

/// Axis aligned rectangle on a texture: the source of one sprite frame.
///
/// The region starts at its top-left corner `(x, y)`. The Y axis grows upward, so
/// [`bottom`](Self::bottom) is `y - height`.
///
/// # Examples
///
/// ```
/// use spritereel_types::geometry::TextureRegion;
///
/// let region = TextureRegion::new(10, 40, 16, 8).unwrap();
/// assert_eq!(region.right(), 26);
/// assert_eq!(region.bottom(), 32);
/// assert_eq!(region.to_string(), "10 40 16 8");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRegion", into = "RawRegion")]
pub struct TextureRegion {
	x: i32,
	y: i32,
	width: i32,
	height: i32,
}

/// Wire form of [`TextureRegion`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRegion {
	x: i32,
	y: i32,
	w: i32,
	h: i32,
}

impl TextureRegion {
	/// The all-zero region.
	pub const EMPTY: Self = Self {
		x: 0,
		y: 0,
		width: 0,
		height: 0,
	};

	/// Creates a region from its corner and extent.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`] if `width` or `height` is negative.
	pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
		Ok(Self {
			x,
			y,
			width: ReelError::check_dimension("width", width)?,
			height: ReelError::check_dimension("height", height)?,
		})
	}

	/// Creates a region from an already validated corner and size.
	pub const fn from_parts(position: TexturePoint, size: TextureSize) -> Self {
		Self {
			x: position.x(),
			y: position.y(),
			width: size.width(),
			height: size.height(),
		}
	}

	/// X coordinate of the top-left corner.
	pub const fn x(&self) -> i32 {
		self.x
	}

	/// Y coordinate of the top-left corner.
	pub const fn y(&self) -> i32 {
		self.y
	}

	/// Width in pixels.
	pub const fn width(&self) -> i32 {
		self.width
	}

	/// Height in pixels.
	pub const fn height(&self) -> i32 {
		self.height
	}

	/// Left edge, same as [`x`](Self::x).
	pub const fn left(&self) -> i32 {
		self.x
	}

	/// Top edge, same as [`y`](Self::y).
	pub const fn top(&self) -> i32 {
		self.y
	}

	/// Right edge, `x + width`.
	///
	/// Widened to `i64` so regions near `i32::MAX` do not overflow.
	pub const fn right(&self) -> i64 {
		self.x as i64 + self.width as i64
	}

	/// Bottom edge, `y - height`.
	///
	/// Widened to `i64` so regions near `i32::MIN` do not overflow.
	pub const fn bottom(&self) -> i64 {
		self.y as i64 - self.height as i64
	}

	/// Top-left corner.
	pub const fn position(&self) -> TexturePoint {
		TexturePoint::new(self.x, self.y)
	}

	/// Extent of the region.
	pub const fn size(&self) -> TextureSize {
		// Width and height were validated on construction.
		TextureSize::from_validated(self.width, self.height)
	}

	/// Lazily cuts a texture into a grid of equally sized regions.
	///
	/// Regions are produced left to right, then top to bottom, starting at `start`.
	/// `spacing` adds extra pixels between neighbouring frames horizontally and
	/// between rows vertically. Regions that would leave the texture are skipped.
	///
	/// A zero-sized `frame_size` yields a single region covering the whole texture.
	///
	/// # Examples
	///
	/// ```
	/// use spritereel_types::geometry::{TexturePoint, TextureRegion, TextureSize};
	///
	/// let texture = TextureSize::new(40, 16).unwrap();
	/// let frame = TextureSize::new(16, 16).unwrap();
	/// let spacing = TextureSize::new(4, 0).unwrap();
	///
	/// let xs: Vec<i32> =
	/// 	TextureRegion::tile(texture, frame, TexturePoint::ZERO, spacing).map(|r| r.x()).collect();
	/// assert_eq!(xs, vec![0, 20]);
	/// ```
	pub fn tile(
		texture_size: TextureSize,
		frame_size: TextureSize,
		start: TexturePoint,
		spacing: TextureSize,
	) -> Tiles {
		Tiles::new(texture_size, frame_size, start, spacing)
	}
}

impl TryFrom<RawRegion> for TextureRegion {
	type Error = ReelError;

	fn try_from(raw: RawRegion) -> Result<Self> {
		Self::new(raw.x, raw.y, raw.w, raw.h)
	}
}

impl From<TextureRegion> for RawRegion {
	fn from(region: TextureRegion) -> Self {
		Self {
			x: region.x,
			y: region.y,
			w: region.width,
			h: region.height,
		}
	}
}

impl fmt::Display for TextureRegion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
	}
}

impl FromStr for TextureRegion {
	type Err = ReelError;

	fn from_str(s: &str) -> Result<Self> {
		match super::parse_components::<4>("TextureRegion", s)? {
			Some([x, y, width, height]) => Self::new(x, y, width, height),
			None => Ok(Self::EMPTY),
		}
	}
}
