//! Packed texture atlas description.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{
	config::AtlasConfig,
	name::{split_frame_number, strip_extension},
	sprite::AtlasSprite,
};
use crate::{
	animation::Animation,
	error::Result,
	frame::Frame,
	geometry::TextureSize,
	sequence::Sequence,
};

/// A texture plus the named rectangles packed into it.
///
/// The struct is a plain serde target: any deserializer that can express the packer's
/// attribute names fills it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureAtlas {
	/// Path of the packed image, used as the texture identifier
	#[serde(rename = "imagePath")]
	pub image_path: String,
	/// Texture width in pixels
	pub width: i32,
	/// Texture height in pixels
	pub height: i32,
	/// Packed sprites, in file order
	#[serde(default, alias = "sprite")]
	pub sprites: Vec<AtlasSprite>,
}

impl TextureAtlas {
	/// Creates an atlas without sprites.
	pub fn new(image_path: impl Into<String>, width: i32, height: i32) -> Self {
		Self {
			image_path: image_path.into(),
			width,
			height,
			sprites: Vec::new(),
		}
	}

	/// Size of the texture.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`](crate::error::ReelError::InvalidArgument)
	/// if either dimension is negative.
	pub fn size(&self) -> Result<TextureSize> {
		TextureSize::new(self.width, self.height)
	}

	/// First sprite named `name`.
	pub fn sprite(&self, name: &str) -> Option<&AtlasSprite> {
		self.sprites.iter().find(|sprite| sprite.name == name)
	}

	/// Builds an animation with [`AtlasConfig::default`].
	///
	/// # Errors
	///
	/// See [`create_animation_with_config`](Self::create_animation_with_config).
	pub fn create_animation(&self) -> Result<Animation> {
		self.create_animation_with_config(&AtlasConfig::default())
	}

	/// Groups the sprites into sequences and returns them as one animation.
	///
	/// Sprites are grouped by name once the trailing frame number is removed, so
	/// `walking east 1.png` and `walking east 2.png` become frames of the sequence
	/// `walking east`. Sequences appear in the order their first sprite appears; frames
	/// are ordered by frame number, with unnumbered sprites first. Every sequence uses
	/// the atlas image path as its texture identifier.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`](crate::error::ReelError::InvalidArgument)
	/// if a sprite has a negative size or the configured frame duration is invalid.
	pub fn create_animation_with_config(&self, config: &AtlasConfig) -> Result<Animation> {
		config.validate()?;

		let mut groups: Vec<(&str, Vec<(Option<u32>, Frame)>)> = Vec::new();
		let mut group_index: HashMap<&str, usize> = HashMap::new();

		for sprite in &self.sprites {
			if sprite.is_rotated() {
				warn!("{}: sprite {:?} is stored rotated", self.image_path, sprite.name);
			}

			let mut frame = Frame::new(sprite.source()?, config.frame_duration)?;
			if config.use_trim_offsets {
				frame.set_origin(sprite.offset());
			}

			let name = if config.strip_extension {
				strip_extension(&sprite.name)
			} else {
				sprite.name.as_str()
			};
			let (base, number) = split_frame_number(name)?;

			let index = *group_index.entry(base).or_insert_with(|| {
				groups.push((base, Vec::new()));
				groups.len() - 1
			});
			groups[index].1.push((number, frame));
		}

		let sequences: Vec<Sequence> = groups
			.into_iter()
			.map(|(name, mut frames)| {
				frames.sort_by_key(|(number, _)| *number);
				debug!("{}: sequence {:?} with {} frames", self.image_path, name, frames.len());

				Sequence::from_frames(frames.into_iter().map(|(_, frame)| frame).collect())
					.with_name(name)
					.with_texture_id(self.image_path.clone())
					.with_animation_type(config.animation_type)
			})
			.collect();

		Ok(Animation::from_sequences(Some(self.image_path.clone()), sequences))
	}
}
