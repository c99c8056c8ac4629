//! Point on a texture.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ReelError;

/// Pixel coordinates on a texture.
///
/// Also used as the draw origin offset of a [`Frame`](crate::frame::Frame).
///
/// # Examples
///
/// ```
/// use spritereel_types::geometry::TexturePoint;
///
/// let point: TexturePoint = "12 -4".parse().unwrap();
/// assert_eq!(point, TexturePoint::new(12, -4));
/// assert_eq!(point.to_string(), "12 -4");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TexturePoint {
	x: i32,
	y: i32,
}

impl TexturePoint {
	/// The origin, `(0, 0)`.
	pub const ZERO: Self = Self::new(0, 0);

	/// Creates a point from its coordinates.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}

	/// X coordinate.
	pub const fn x(&self) -> i32 {
		self.x
	}

	/// Y coordinate.
	pub const fn y(&self) -> i32 {
		self.y
	}

	/// Returns `true` for the origin.
	pub const fn is_zero(&self) -> bool {
		self.x == 0 && self.y == 0
	}
}

impl fmt::Display for TexturePoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.x, self.y)
	}
}

impl FromStr for TexturePoint {
	type Err = ReelError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let point = super::parse_components::<2>("TexturePoint", s)?
			.map_or(Self::ZERO, |[x, y]| Self::new(x, y));
		Ok(point)
	}
}
