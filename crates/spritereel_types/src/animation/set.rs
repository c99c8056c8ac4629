//! Queries and bulk operations over a group of sequences.

use crate::{geometry::TextureSize, sequence::Sequence};

/// Capabilities shared by every collection of [`Sequence`]s.
///
/// Implemented for `[Sequence]`, so it works on vectors, arrays and
/// [`Animation::sequences`](super::Animation::sequences) alike.
///
/// # Examples
///
/// ```
/// use spritereel_types::prelude::*;
///
/// let mut sequences = vec![
/// 	Sequence::new().with_name("idle"),
/// 	Sequence::new().with_name("walk"),
/// ];
/// sequences[1].start();
///
/// assert!(sequences.find_sequence("walk").unwrap().is_animating());
/// assert_eq!(sequences.animating().count(), 1);
/// ```
pub trait SequenceSetExt {
	/// First sequence named `name`.
	fn find_sequence(&self, name: &str) -> Option<&Sequence>;

	/// First sequence named `name`, mutably.
	fn find_sequence_mut(&mut self, name: &str) -> Option<&mut Sequence>;

	/// Sequences that are currently playing.
	fn animating(&self) -> impl Iterator<Item = &Sequence>;

	/// Sequences that should be drawn.
	fn visible(&self) -> impl Iterator<Item = &Sequence>;

	/// Largest width and height of the displayed frames of all visible sequences.
	///
	/// Visible sequences without a current frame contribute nothing.
	fn visible_frame_bounds(&self) -> TextureSize;

	/// Calls [`Sequence::update`] on every sequence.
	fn update_all(&mut self, delta: f32);

	/// Deep copies of every sequence, keeping their names.
	fn clone_sequences(&self) -> Vec<Sequence>;

	/// Distinct non-empty texture identifiers, in first-seen order.
	fn used_texture_ids(&self) -> Vec<&str>;
}

impl SequenceSetExt for [Sequence] {
	fn find_sequence(&self, name: &str) -> Option<&Sequence> {
		self.iter().find(|sequence| sequence.name() == Some(name))
	}

	fn find_sequence_mut(&mut self, name: &str) -> Option<&mut Sequence> {
		self.iter_mut().find(|sequence| sequence.name() == Some(name))
	}

	fn animating(&self) -> impl Iterator<Item = &Sequence> {
		self.iter().filter(|sequence| sequence.is_animating())
	}

	fn visible(&self) -> impl Iterator<Item = &Sequence> {
		self.iter().filter(|sequence| sequence.is_visible())
	}

	fn visible_frame_bounds(&self) -> TextureSize {
		self.visible()
			.filter_map(Sequence::current_frame)
			.map(|frame| frame.source().size())
			.fold(TextureSize::ZERO, TextureSize::max)
	}

	fn update_all(&mut self, delta: f32) {
		for sequence in self.iter_mut() {
			sequence.update(delta);
		}
	}

	fn clone_sequences(&self) -> Vec<Sequence> {
		self.to_vec()
	}

	fn used_texture_ids(&self) -> Vec<&str> {
		let mut ids: Vec<&str> = Vec::new();
		for id in self.iter().filter_map(Sequence::texture_id) {
			if !id.is_empty() && !ids.contains(&id) {
				ids.push(id);
			}
		}
		ids
	}
}
