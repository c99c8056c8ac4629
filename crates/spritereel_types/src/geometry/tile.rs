//! Grid tiling of a texture into frame regions.

use std::iter::FusedIterator;

use super::{TexturePoint, TextureRegion, TextureSize};

/// Iterator returned by [`TextureRegion::tile`].
///
/// The cursor moves right by `frame.width + spacing.width` after every candidate.
/// When the next candidate would not fit horizontally the cursor wraps to `x = 0`
/// and moves down by `frame.height + spacing.height`. Iteration ends once a row
/// no longer fits vertically.
#[derive(Debug, Clone)]
pub struct Tiles {
	texture: TextureSize,
	frame: TextureSize,
	spacing: TextureSize,
	// Widened so stepping past the texture edge cannot overflow
	x: i64,
	y: i64,
	state: TileState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileState {
	/// Zero-sized frame: emit the whole texture once
	Whole,
	/// Walking the grid
	Grid,
	Done,
}

impl Tiles {
	pub(super) fn new(
		texture: TextureSize,
		frame: TextureSize,
		start: TexturePoint,
		spacing: TextureSize,
	) -> Self {
		let state = if frame.is_degenerate() {
			TileState::Whole
		} else {
			TileState::Grid
		};

		Self {
			texture,
			frame,
			spacing,
			x: i64::from(start.x()),
			y: i64::from(start.y()),
			state,
		}
	}

	fn row_fits(&self) -> bool {
		self.y + i64::from(self.frame.height()) <= i64::from(self.texture.height())
	}

	fn column_fits(&self, x: i64) -> bool {
		x + i64::from(self.frame.width()) <= i64::from(self.texture.width())
	}

	fn step(&mut self) {
		self.x += i64::from(self.frame.width()) + i64::from(self.spacing.width());
		if !self.column_fits(self.x) {
			self.x = 0;
			self.y += i64::from(self.frame.height()) + i64::from(self.spacing.height());
		}
	}
}

impl Iterator for Tiles {
	type Item = TextureRegion;

	fn next(&mut self) -> Option<Self::Item> {
		match self.state {
			TileState::Whole => {
				self.state = TileState::Done;
				Some(TextureRegion::from_parts(TexturePoint::ZERO, self.texture))
			}
			TileState::Done => None,
			TileState::Grid => {
				while self.row_fits() {
					let (x, y) = (self.x, self.y);
					self.step();

					if x < 0 || y < 0 || !self.column_fits(x) {
						continue;
					}
					// In range once the frame fits inside the texture
					if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
						return Some(TextureRegion::from_parts(TexturePoint::new(x, y), self.frame));
					}
				}

				self.state = TileState::Done;
				None
			}
		}
	}
}

impl FusedIterator for Tiles {}
