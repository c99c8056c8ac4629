//! Single still image of a sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
	error::{ReelError, Result},
	geometry::{TexturePoint, TextureRegion},
};

/// One displayable frame: a texture region, how long it stays on screen and a draw offset.
///
/// The duration is measured in seconds and is never negative. Frames are plain values,
/// so [`Clone`] produces a fully independent copy.
///
/// # Examples
///
/// ```
/// use spritereel_types::{frame::Frame, geometry::TextureRegion};
///
/// let mut frame = Frame::new(TextureRegion::new(0, 0, 16, 16).unwrap(), 0.1).unwrap();
/// assert!(frame.set_duration(-1.0).is_err());
/// assert_eq!(frame.duration(), 0.1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame", into = "RawFrame")]
pub struct Frame {
	source: TextureRegion,
	duration: f32,
	origin: TexturePoint,
}

/// Wire form of [`Frame`]; the origin is omitted when zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFrame {
	src: TextureRegion,
	time: f32,
	#[serde(default, skip_serializing_if = "TexturePoint::is_zero")]
	origin: TexturePoint,
}

impl Frame {
	/// Creates a frame showing `source` for `duration` seconds.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`] if `duration` is negative or not finite.
	pub fn new(source: TextureRegion, duration: f32) -> Result<Self> {
		Ok(Self {
			source,
			duration: ReelError::check_duration("duration", duration)?,
			origin: TexturePoint::ZERO,
		})
	}

	/// Sets the draw origin offset, builder style.
	pub fn with_origin(mut self, origin: TexturePoint) -> Self {
		self.origin = origin;
		self
	}

	/// Region of the texture this frame displays.
	pub fn source(&self) -> TextureRegion {
		self.source
	}

	/// Replaces the displayed region.
	pub fn set_source(&mut self, source: TextureRegion) {
		self.source = source;
	}

	/// Display time in seconds.
	pub fn duration(&self) -> f32 {
		self.duration
	}

	/// Sets the display time in seconds.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`] if `duration` is negative or not finite; the
	/// previous duration is kept.
	pub fn set_duration(&mut self, duration: f32) -> Result<()> {
		self.duration = ReelError::check_duration("duration", duration)?;
		Ok(())
	}

	/// Drawing offset relative to the sequence position.
	pub fn origin(&self) -> TexturePoint {
		self.origin
	}

	/// Sets the drawing offset.
	pub fn set_origin(&mut self, origin: TexturePoint) {
		self.origin = origin;
	}
}

impl TryFrom<RawFrame> for Frame {
	type Error = ReelError;

	fn try_from(raw: RawFrame) -> Result<Self> {
		Ok(Self::new(raw.src, raw.time)?.with_origin(raw.origin))
	}
}

impl From<Frame> for RawFrame {
	fn from(frame: Frame) -> Self {
		Self {
			src: frame.source,
			time: frame.duration,
			origin: frame.origin,
		}
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.source)?;
		if !self.origin.is_zero() {
			write!(f, ", origin at {}", self.origin)?;
		}
		write!(f, " (lasts {} s)", self.duration)
	}
}
