//! Prelude module for `spritereel_types`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```
//! use spritereel_types::prelude::*;
//!
//! let mut animation = Animation::new(Some("hero.png".to_string()));
//! animation.insert(Sequence::new().with_name("idle"));
//! assert!(animation.sequences().find_sequence("idle").is_some());
//! ```

#[doc(inline)]
pub use crate::{
	animation::{Animation, SequenceSetExt},
	atlas::{AtlasConfig, AtlasSprite, TextureAtlas},
	error::{ReelError, Result},
	frame::Frame,
	geometry::{TexturePoint, TextureRegion, TextureSize, Tiles},
	sequence::{
		AnimationType, MirrorDirections, ObserverId, Sequence, SequenceEvent, SequenceObserver,
	},
};
