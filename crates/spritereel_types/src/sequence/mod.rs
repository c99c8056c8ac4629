//! Frame sequences and their playback state machine.
//!
//! A [`Sequence`] is an ordered list of [`Frame`]s plus the state needed to play them:
//! the current frame index, the playing/visible/reverse flags, the playback mode
//! ([`AnimationType`]), render mirroring and an elapsed-time accumulator.
//!
//! # Playback modes
//!
//! Every index change goes through [`Sequence::set_current_frame_index`], which decides
//! what happens when the index leaves the frame list:
//!
//! ```text
//! Mode           Past the end (in the play direction)
//! -------------  ---------------------------------------------------------------
//! Once           rewind to the first frame, stop, stay visible
//! OnceHoldLast   clamp to the last frame, stop, stay visible
//! OnceDisappear  clamp to the last frame, stop, hide
//! Looping        wrap around
//! PingPong       reflect (triangle wave); reaching an end flips `reverse`
//! ```
//!
//! "First" and "last" are relative to the play direction: when `reverse` is set the
//! first frame is the end of the list and the last frame is index 0.
//!
//! # Time
//!
//! [`Sequence::update`] accumulates elapsed time and advances as many frames as fit in
//! it, so a long tick catches up over several frame boundaries. The remainder is kept
//! for the next tick.
//!
//! # Examples
//!
//! ```
//! use spritereel_types::prelude::*;
//!
//! let frames = (0..3)
//! 	.map(|i| Frame::new(TextureRegion::new(i * 16, 0, 16, 16).unwrap(), 0.1).unwrap())
//! 	.collect();
//! let mut walk = Sequence::from_frames(frames)
//! 	.with_name("walk")
//! 	.with_animation_type(AnimationType::Looping);
//!
//! walk.start();
//! walk.update(0.25);
//! assert_eq!(walk.current_frame_index(), 2);
//! assert_eq!(walk.current_frame().unwrap().source().x(), 32);
//! ```

pub mod animation_type;
pub mod mirror;
pub mod observer;
mod wire;

use std::fmt;

use log::{debug, trace, warn};

pub use self::{
	animation_type::AnimationType,
	mirror::MirrorDirections,
	observer::{ObserverId, SequenceEvent, SequenceObserver},
};
use self::observer::Observers;
use crate::{
	error::{ReelError, Result},
	frame::Frame,
	geometry::TextureSize,
};

/// Total durations below this are treated as zero by [`Sequence::set_duration`].
pub const MIN_TOTAL_DURATION: f32 = 0.001;

/// An ordered group of frames played back under one [`AnimationType`].
///
/// A new sequence is stopped, invisible, plays forward in [`AnimationType::Once`] mode
/// and points at frame 0.
///
/// [`Clone`] produces an independent copy with the same name; observers are not cloned
/// and the elapsed time starts from zero. Use [`clone_named`](Self::clone_named) to
/// rename the copy.
pub struct Sequence {
	name: Option<String>,
	texture_id: Option<String>,
	frames: Vec<Frame>,
	current_frame_index: usize,
	animating: bool,
	visible: bool,
	reverse: bool,
	animation_type: AnimationType,
	mirror: MirrorDirections,
	elapsed_time: f32,
	observers: Observers,
}

impl Sequence {
	/// Creates an empty, unnamed sequence.
	pub fn new() -> Self {
		Self::from_frames(Vec::new())
	}

	/// Creates an unnamed sequence from a list of frames.
	pub fn from_frames(frames: Vec<Frame>) -> Self {
		Self {
			name: None,
			texture_id: None,
			frames,
			current_frame_index: 0,
			animating: false,
			visible: false,
			reverse: false,
			animation_type: AnimationType::default(),
			mirror: MirrorDirections::default(),
			elapsed_time: 0.0,
			observers: Observers::default(),
		}
	}

	/// Sets the name, builder style.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the texture identifier, builder style.
	pub fn with_texture_id(mut self, texture_id: impl Into<String>) -> Self {
		self.texture_id = Some(texture_id.into());
		self
	}

	/// Sets the playback mode, builder style.
	pub fn with_animation_type(mut self, animation_type: AnimationType) -> Self {
		self.animation_type = animation_type;
		self
	}

	/// Name of the sequence, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Renames the sequence.
	pub fn set_name(&mut self, name: Option<String>) {
		self.name = name;
	}

	/// Identifier of the texture the frame regions refer to.
	pub fn texture_id(&self) -> Option<&str> {
		self.texture_id.as_deref()
	}

	/// Sets the texture identifier.
	pub fn set_texture_id(&mut self, texture_id: Option<String>) {
		self.texture_id = texture_id;
	}

	/// The frames, in playback order.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Mutable access to the frame list.
	///
	/// Removing frames may leave the current index out of range, in which case
	/// [`current_frame`](Self::current_frame) returns `None` until the index is reset.
	pub fn frames_mut(&mut self) -> &mut Vec<Frame> {
		&mut self.frames
	}

	/// Appends a frame.
	pub fn add_frame(&mut self, frame: Frame) {
		self.frames.push(frame);
	}

	/// Number of frames.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` if the sequence has no frames.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Index of the displayed frame.
	pub fn current_frame_index(&self) -> usize {
		self.current_frame_index
	}

	/// The displayed frame, or `None` if the index is out of range.
	pub fn current_frame(&self) -> Option<&Frame> {
		self.frames.get(self.current_frame_index)
	}

	/// Returns `true` while the sequence is playing.
	pub fn is_animating(&self) -> bool {
		self.animating
	}

	/// Returns `true` if the sequence should be drawn.
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Shows or hides the sequence.
	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	/// Returns `true` if the sequence plays from the end of the frame list towards index 0.
	pub fn is_reverse(&self) -> bool {
		self.reverse
	}

	/// Playback mode.
	pub fn animation_type(&self) -> AnimationType {
		self.animation_type
	}

	/// Changes the playback mode. The current index is left untouched.
	pub fn set_animation_type(&mut self, animation_type: AnimationType) {
		self.animation_type = animation_type;
	}

	/// Mirroring applied by the renderer.
	pub fn mirror(&self) -> MirrorDirections {
		self.mirror
	}

	/// Sets the mirroring applied by the renderer.
	pub fn set_mirror(&mut self, mirror: MirrorDirections) {
		self.mirror = mirror;
	}

	/// Time accumulated towards the end of the current frame, in seconds.
	pub fn elapsed_time(&self) -> f32 {
		self.elapsed_time
	}

	/// Registers a callback for [`SequenceEvent`]s of this sequence.
	///
	/// Callbacks run synchronously inside the setter that caused the change and only
	/// see the sequence through a shared reference.
	pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
	where
		F: FnMut(SequenceEvent, &Sequence) + Send + 'static,
	{
		self.observers.subscribe(Box::new(observer))
	}

	/// Removes a callback. Returns `false` if `id` was not registered.
	pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
		self.observers.unsubscribe(id)
	}

	/// Number of registered callbacks.
	pub fn observer_count(&self) -> usize {
		self.observers.len()
	}

	/// Pauses or resumes playback.
	///
	/// Fires [`SequenceEvent::Started`] or [`SequenceEvent::Stopped`] when the value changes.
	pub fn set_animating(&mut self, animating: bool) {
		if self.animating == animating {
			return;
		}

		self.animating = animating;
		debug!("{}: {}", self.label(), if animating { "started" } else { "stopped" });
		self.notify(if animating {
			SequenceEvent::Started
		} else {
			SequenceEvent::Stopped
		});
	}

	/// Sets the play direction.
	///
	/// Fires [`SequenceEvent::PlayDirectionChanged`] when the value changes.
	pub fn set_reverse(&mut self, reverse: bool) {
		if self.reverse == reverse {
			return;
		}

		self.reverse = reverse;
		debug!(
			"{}: play direction is now {}",
			self.label(),
			if reverse { "reverse" } else { "forward" }
		);
		self.notify(SequenceEvent::PlayDirectionChanged);
	}

	/// Moves to frame `value`, applying the boundary rules of the playback mode.
	///
	/// `value` may lie outside the frame list (for example `-1` when stepping back from
	/// the first frame); the playback mode decides where the index ends up.
	pub fn set_current_frame_index(&mut self, value: isize) {
		let len = self.frames.len();
		let previous = self.current_frame_index;

		match self.animation_type {
			AnimationType::Once | AnimationType::OnceHoldLast | AnimationType::OnceDisappear => {
				match usize::try_from(value) {
					Ok(index) if index < len => self.current_frame_index = index,
					_ => self.finish_once(),
				}
			}
			AnimationType::Looping => {
				self.current_frame_index = if len > 0 {
					// rem_euclid keeps the result non-negative for any value
					value.rem_euclid(len as isize) as usize
				} else {
					value.max(0) as usize
				};
			}
			AnimationType::PingPong => {
				if len > 0 {
					let period = 2 * len;
					let mut index = value.unsigned_abs() % period;
					if index >= len {
						index = period - 1 - index;
					}
					self.current_frame_index = index;

					if self.is_last_index(index) {
						self.set_reverse(!self.reverse);
					}
				} else {
					self.current_frame_index = value.max(0) as usize;
				}
			}
		}

		trace!("{}: frame {} -> {}", self.label(), previous, self.current_frame_index);
	}

	/// Steps one frame in the play direction.
	pub fn advance_frame(&mut self) {
		let index = isize::try_from(self.current_frame_index).unwrap_or(isize::MAX);
		let step = if self.reverse { -1 } else { 1 };
		self.set_current_frame_index(index.saturating_add(step));
	}

	/// Advances playback by `delta` seconds.
	///
	/// Does nothing while paused or when there is no current frame. A current frame
	/// with zero duration is shown for exactly one update. Otherwise the elapsed time
	/// grows by `delta` and the sequence advances once per full frame duration it
	/// covers; the remainder carries over to the next call.
	///
	/// For [`AnimationType::Looping`] and [`AnimationType::PingPong`] whole play cycles
	/// in a large `delta` are skipped without stepping through them, so the events
	/// those cycles would have fired are not sent.
	pub fn update(&mut self, delta: f32) {
		if !self.animating {
			return;
		}
		let Some(frame) = self.current_frame() else {
			return;
		};
		if !delta.is_finite() {
			warn!("{}: ignoring non-finite time step {}", self.label(), delta);
			return;
		}

		let mut duration = frame.duration();
		if duration <= 0.0 {
			self.advance_frame();
			return;
		}

		self.elapsed_time += delta;
		if self.elapsed_time >= 2.0 * duration
			&& let Some(cycle) = self.cycle_duration()
			&& self.elapsed_time >= 2.0 * cycle
		{
			// A whole cycle ends in the same state. One is kept so a frame left off
			// the ping-pong path is still passed.
			self.elapsed_time = self.elapsed_time % cycle + cycle;
		}
		while self.elapsed_time >= duration {
			self.elapsed_time -= duration;
			self.advance_frame();

			if !self.animating {
				break;
			}
			match self.current_frame() {
				Some(next) if next.duration() > 0.0 => duration = next.duration(),
				// Zero-duration frames pass through on the following update
				_ => break,
			}
		}
	}

	/// Rewinds to the first frame of the play direction and starts playing.
	///
	/// The index is assigned directly rather than through
	/// [`set_current_frame_index`](Self::set_current_frame_index), so a one-frame
	/// [`AnimationType::PingPong`] sequence does not flip its direction here.
	pub fn start(&mut self) {
		self.current_frame_index = self.first_index();
		self.elapsed_time = 0.0;
		self.visible = true;
		self.set_animating(true);
	}

	/// Rewinds to the first frame of the play direction, stops and hides the sequence.
	///
	/// To pause without rewinding use [`set_animating(false)`](Self::set_animating).
	/// Like [`start`](Self::start) this never flips the play direction.
	pub fn stop(&mut self) {
		self.current_frame_index = self.first_index();
		self.elapsed_time = 0.0;
		self.visible = false;
		self.set_animating(false);
	}

	/// Largest frame width and height over all frames, independently.
	///
	/// Returns [`TextureSize::ZERO`] for an empty sequence.
	pub fn frame_bounds(&self) -> TextureSize {
		self.frames.iter().map(|frame| frame.source().size()).fold(TextureSize::ZERO, TextureSize::max)
	}

	/// Combined duration of all frames, in seconds.
	pub fn duration(&self) -> f32 {
		self.frames.iter().map(Frame::duration).sum()
	}

	/// Rescales every frame so the whole sequence lasts `duration` seconds.
	///
	/// Frame durations keep their proportions. If the current total is below
	/// [`MIN_TOTAL_DURATION`], `duration` is split evenly instead.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`] if `duration` is negative or not finite.
	pub fn set_duration(&mut self, duration: f32) -> Result<()> {
		let duration = ReelError::check_duration("duration", duration)?;
		if self.frames.is_empty() {
			return Ok(());
		}

		let old_duration = self.duration();
		let even_share = duration / self.frames.len() as f32;
		for frame in &mut self.frames {
			let scaled = if old_duration.abs() > MIN_TOTAL_DURATION {
				duration * (frame.duration() / old_duration)
			} else {
				even_share
			};
			frame.set_duration(scaled)?;
		}
		Ok(())
	}

	/// Sets every frame to last `duration` seconds.
	///
	/// # Errors
	///
	/// Returns [`ReelError::InvalidArgument`] if `duration` is negative or not finite.
	pub fn set_frames_duration(&mut self, duration: f32) -> Result<()> {
		let duration = ReelError::check_duration("duration", duration)?;
		for frame in &mut self.frames {
			frame.set_duration(duration)?;
		}
		Ok(())
	}

	/// Deep copy of this sequence under a new name.
	pub fn clone_named(&self, name: impl Into<String>) -> Self {
		self.clone_with_name(Some(name.into()))
	}

	fn clone_with_name(&self, name: Option<String>) -> Self {
		Self {
			name,
			texture_id: self.texture_id.clone(),
			frames: self.frames.clone(),
			current_frame_index: self.current_frame_index,
			animating: self.animating,
			visible: self.visible,
			reverse: self.reverse,
			animation_type: self.animation_type,
			mirror: self.mirror,
			elapsed_time: 0.0,
			observers: Observers::default(),
		}
	}

	/// Time after which a repeating sequence is back in the same state.
	///
	/// `None` for the `Once*` modes, and when a frame has no positive duration.
	fn cycle_duration(&self) -> Option<f32> {
		if self.frames.iter().any(|frame| frame.duration() <= 0.0) {
			return None;
		}

		let cycle = match self.animation_type {
			AnimationType::Looping => self.duration(),
			// Both ends are shown once per bounce, inner frames twice
			AnimationType::PingPong => match self.frames.as_slice() {
				[] => return None,
				[only] => 2.0 * only.duration(),
				[first, .., last] => 2.0 * self.duration() - first.duration() - last.duration(),
			},
			_ => return None,
		};
		(cycle.is_finite() && cycle > 0.0).then_some(cycle)
	}

	/// Applies the end-of-list rule of the `Once*` modes.
	fn finish_once(&mut self) {
		self.current_frame_index = match self.animation_type {
			AnimationType::Once => self.first_index(),
			_ => self.last_index(),
		};
		if self.animation_type == AnimationType::OnceDisappear {
			self.visible = false;
		}
		self.set_animating(false);
	}

	/// First index in the play direction.
	fn first_index(&self) -> usize {
		if self.reverse {
			self.frames.len().saturating_sub(1)
		} else {
			0
		}
	}

	/// Last index in the play direction.
	fn last_index(&self) -> usize {
		if self.reverse {
			0
		} else {
			self.frames.len().saturating_sub(1)
		}
	}

	fn is_last_index(&self, index: usize) -> bool {
		(self.reverse && index == 0) || (!self.reverse && index + 1 == self.frames.len())
	}

	fn label(&self) -> &str {
		self.name.as_deref().filter(|name| !name.is_empty()).unwrap_or("<nameless>")
	}

	fn notify(&mut self, event: SequenceEvent) {
		if self.observers.is_empty() {
			return;
		}

		let mut observers = std::mem::take(&mut self.observers);
		observers.dispatch(event, self);
		self.observers = observers;
	}
}

impl Default for Sequence {
	fn default() -> Self {
		Self::new()
	}
}

impl Clone for Sequence {
	fn clone(&self) -> Self {
		self.clone_with_name(self.name.clone())
	}
}

impl fmt::Debug for Sequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Sequence")
			.field("name", &self.name)
			.field("texture_id", &self.texture_id)
			.field("frames", &self.frames)
			.field("current_frame_index", &self.current_frame_index)
			.field("animating", &self.animating)
			.field("visible", &self.visible)
			.field("reverse", &self.reverse)
			.field("animation_type", &self.animation_type)
			.field("mirror", &self.mirror)
			.field("elapsed_time", &self.elapsed_time)
			.field("observers", &self.observers)
			.finish()
	}
}

impl fmt::Display for Sequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: frame index is {} out of {} frames ({}, {})",
			self.label(),
			self.current_frame_index,
			self.frames.len(),
			if self.visible { "visible" } else { "invisible" },
			if self.animating { "active" } else { "inactive" }
		)
	}
}
