//! Texture atlas ingestion.
//!
//! A packer exports one image plus a list of named rectangles. [`TextureAtlas`]
//! holds that list and turns it into an [`Animation`](crate::animation::Animation)
//! by grouping sprites whose names differ only in a trailing frame number:
//!
//! ```text
//! walking east 1.png  ┐
//! walking east 2.png  ├─> sequence "walking east" (3 frames)
//! walking east 3.png  ┘
//! standing north.png  ──> sequence "standing north" (1 frame)
//! ```
//!
//! # Examples
//!
//! ```
//! use spritereel_types::atlas::{AtlasSprite, TextureAtlas};
//!
//! let mut atlas = TextureAtlas::new("character texture.png", 256, 256);
//! atlas.sprites.push(AtlasSprite::new("walking east 2.png", 185, 0, 29, 50));
//! atlas.sprites.push(AtlasSprite::new("walking east 1.png", 159, 0, 26, 49));
//!
//! let animation = atlas.create_animation().unwrap();
//! let walk = animation.get("walking east").unwrap();
//! assert_eq!(walk.len(), 2);
//! assert_eq!(walk.frames()[0].source().x(), 159);
//! ```

mod config;
mod name;
mod sprite;
mod texture_atlas;

pub use self::{
	config::AtlasConfig,
	sprite::{AtlasSprite, ROTATED_MARK},
	texture_atlas::TextureAtlas,
};
