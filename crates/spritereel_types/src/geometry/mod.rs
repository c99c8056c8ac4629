//! Integer geometry on a texture.
//!
//! All values in this module are immutable `Copy` types measured in pixels:
//!
//! - [`TexturePoint`]: a position (`x`, `y`)
//! - [`TextureSize`]: a non-negative extent (`width`, `height`)
//! - [`TextureRegion`]: a rectangle (position + size) addressing one sprite on a texture
//!
//! Each type renders to and parses from a whitespace separated list of integers, so
//! `"16 32"` is a point or a size and `"0 0 16 16"` is a region. A blank string parses
//! to the zero value.
//!
//! # Coordinate convention
//!
//! The Y axis grows upward, so [`TextureRegion::bottom`] is computed as `y - height`.
//!
//! # Examples
//!
//! ```
//! use spritereel_types::geometry::{TexturePoint, TextureRegion, TextureSize};
//!
//! let texture = TextureSize::new(64, 32).unwrap();
//! let frame = TextureSize::new(16, 16).unwrap();
//!
//! let regions: Vec<_> =
//! 	TextureRegion::tile(texture, frame, TexturePoint::ZERO, TextureSize::ZERO).collect();
//! assert_eq!(regions.len(), 8);
//! assert_eq!(regions[5], "16 16 16 16".parse().unwrap());
//! ```

pub mod point;
pub mod region;
pub mod size;
pub mod tile;

pub use point::TexturePoint;
pub use region::TextureRegion;
pub use size::TextureSize;
pub use tile::Tiles;

use crate::error::{ReelError, Result};

/// Splits `input` into exactly `N` whitespace separated integers.
///
/// Returns `Ok(None)` for a blank string.
pub(crate) fn parse_components<const N: usize>(
	kind: &'static str,
	input: &str,
) -> Result<Option<[i32; N]>> {
	if input.trim().is_empty() {
		return Ok(None);
	}

	let parts: Vec<&str> = input.split_whitespace().collect();
	if parts.len() != N {
		return Err(ReelError::parse(
			kind,
			input,
			format!("expected {N} components, found {}", parts.len()),
		));
	}

	let mut values = [0i32; N];
	for (value, part) in values.iter_mut().zip(parts) {
		*value = part
			.parse()
			.map_err(|e| ReelError::parse(kind, input, format!("{part:?} is not an integer ({e})")))?;
	}
	Ok(Some(values))
}
