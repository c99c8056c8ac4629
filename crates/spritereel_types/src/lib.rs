//! This crate provides the data model for sprite-sheet sequence playback in the `spritereel` project.
//!
//! # Components
//!
//! - **Geometry**: integer points, sizes and regions on a texture, plus grid tiling
//! - **Frame**: a texture region shown for a fixed time
//! - **Sequence**: ordered frames and the playback state machine (five playback modes)
//! - **Animation**: sequences sharing one texture
//! - **Atlas**: grouping packed sprites into sequences by name
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use spritereel_types::prelude::*;
//!
//! let texture = TextureSize::new(48, 16).unwrap();
//! let cell = TextureSize::new(16, 16).unwrap();
//! let frames = TextureRegion::tile(texture, cell, TexturePoint::ZERO, TextureSize::ZERO)
//! 	.map(|region| Frame::new(region, 0.1))
//! 	.collect::<Result<Vec<_>, _>>()
//! 	.unwrap();
//!
//! let mut blink = Sequence::from_frames(frames).with_animation_type(AnimationType::PingPong);
//! blink.start();
//! blink.update(0.2);
//! assert_eq!(blink.current_frame_index(), 2);
//! assert!(blink.is_reverse());
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use spritereel_types::{atlas::TextureAtlas, sequence::AnimationType};
//!
//! let atlas = TextureAtlas::new("empty.png", 0, 0);
//! assert!(atlas.create_animation().unwrap().is_empty());
//! assert_eq!(AnimationType::default(), AnimationType::Once);
//! ```

pub mod animation;
pub mod atlas;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod sequence;

/// `use spritereel_types::prelude::*;` to import commonly used items.
pub mod prelude;
