//! Options for turning an atlas into an animation.

use serde::{Deserialize, Serialize};

use crate::{
	error::{ReelError, Result},
	sequence::AnimationType,
};

/// Controls how [`TextureAtlas::create_animation_with_config`] builds sequences.
///
/// # Presets
///
/// - `default()`: 0.1 s per frame, [`AnimationType::Once`], extensions stripped, trim
///   offsets used as frame origins
/// - `looping(fps)`: [`AnimationType::Looping`] at a fixed frame rate
///
/// Missing fields fall back to the defaults when deserializing, so a configuration
/// file only needs to list what it changes.
///
/// # Examples
///
/// ```
/// use spritereel_types::{atlas::AtlasConfig, sequence::AnimationType};
///
/// let config = AtlasConfig::looping(12.5).unwrap();
/// assert_eq!(config.frame_duration, 0.08);
/// assert_eq!(config.animation_type, AnimationType::Looping);
///
/// let config = AtlasConfig::new(0.2, AnimationType::PingPong);
/// assert!(config.strip_extension);
/// ```
///
/// [`TextureAtlas::create_animation_with_config`]: super::TextureAtlas::create_animation_with_config
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
	/// Duration of every created frame, in seconds
	pub frame_duration: f32,
	/// Playback mode of every created sequence
	pub animation_type: AnimationType,
	/// Drop file extensions such as `.png` from sprite names before grouping
	pub strip_extension: bool,
	/// Use the packer's trim offsets as frame origins
	pub use_trim_offsets: bool,
}

impl Default for AtlasConfig {
	fn default() -> Self {
		Self {
			frame_duration: 0.1,
			animation_type: AnimationType::Once,
			strip_extension: true,
			use_trim_offsets: true,
		}
	}
}

impl AtlasConfig {
	/// Create a configuration with the given frame duration and playback mode.
	///
	/// # Arguments
	/// * `frame_duration` - Seconds per frame
	/// * `animation_type` - Playback mode of every sequence
	pub fn new(frame_duration: f32, animation_type: AnimationType) -> Self {
		Self {
			frame_duration,
			animation_type,
			..Self::default()
		}
	}

	/// Create a looping configuration playing `fps` frames per second.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`] unless `fps` is finite and positive.
	pub fn looping(fps: f32) -> Result<Self> {
		if !fps.is_finite() || fps <= 0.0 {
			return Err(ReelError::invalid_argument(
				"fps",
				format!("frame rate must be positive, got {fps}"),
			));
		}
		Ok(Self::new(1.0 / fps, AnimationType::Looping))
	}

	/// Checks that the frame duration is usable.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`] if `frame_duration` is negative or not finite.
	pub fn validate(&self) -> Result<()> {
		ReelError::check_duration("frame_duration", self.frame_duration)?;
		Ok(())
	}
}
