//! A single packed sprite.

use serde::{Deserialize, Serialize};

use crate::{
	error::Result,
	geometry::{TexturePoint, TextureRegion},
};

/// Rotation mark written by the packer for sprites stored rotated.
pub const ROTATED_MARK: &str = "y";

/// One named rectangle of a texture atlas.
///
/// Field names on the wire follow the packer's attribute names
/// (`n`, `x`, `y`, `w`, `h`, `r`, `oX`, `oY`, `oW`, `oH`). The trim offset and the
/// original size are zero unless the packer trimmed the sprite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasSprite {
	/// Sprite name, usually the source file name
	#[serde(rename = "n")]
	pub name: String,
	/// Left edge in the texture
	pub x: i32,
	/// Top edge in the texture
	pub y: i32,
	/// Width, possibly trimmed
	#[serde(rename = "w")]
	pub width: i32,
	/// Height, possibly trimmed
	#[serde(rename = "h")]
	pub height: i32,
	/// `"y"` when the sprite is stored rotated
	#[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
	pub rotation_mark: Option<String>,
	/// Horizontal trim offset
	#[serde(rename = "oX", default)]
	pub offset_x: i32,
	/// Vertical trim offset
	#[serde(rename = "oY", default)]
	pub offset_y: i32,
	/// Width before trimming
	#[serde(rename = "oW", default)]
	pub original_width: i32,
	/// Height before trimming
	#[serde(rename = "oH", default)]
	pub original_height: i32,
}

impl AtlasSprite {
	/// Creates an untrimmed, unrotated sprite.
	pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
		Self {
			name: name.into(),
			x,
			y,
			width,
			height,
			..Self::default()
		}
	}

	/// Returns `true` if the packer stored this sprite rotated.
	pub fn is_rotated(&self) -> bool {
		self.rotation_mark.as_deref() == Some(ROTATED_MARK)
	}

	/// Trim offset as a point.
	pub fn offset(&self) -> TexturePoint {
		TexturePoint::new(self.offset_x, self.offset_y)
	}

	/// Region of the texture the sprite occupies.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`](crate::error::ReelError::InvalidArgument)
	/// if the width or height is negative.
	pub fn source(&self) -> Result<TextureRegion> {
		TextureRegion::new(self.x, self.y, self.width, self.height)
	}
}
