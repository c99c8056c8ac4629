//! Sequences sharing one texture.

mod set;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::set::SequenceSetExt;
use crate::{geometry::TextureSize, sequence::Sequence};

/// A group of sequences cut from the same texture, for example every move of one
/// character.
///
/// The order of the sequences carries no meaning. Names are not required to be unique;
/// lookups return the first match.
///
/// # Examples
///
/// ```
/// use spritereel_types::prelude::*;
///
/// let mut hero = Animation::new(Some("hero.png".to_string()));
/// hero.insert(Sequence::new().with_name("idle"));
/// hero.insert(Sequence::new().with_name("walk"));
///
/// hero.get_mut("walk").unwrap().start();
/// assert_eq!(hero.animating_sequences().count(), 1);
/// assert_eq!(hero.to_string(), "hero.png, 2 sequences");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Animation {
	#[serde(rename = "texId", default, skip_serializing_if = "Option::is_none")]
	texture_id: Option<String>,
	#[serde(rename = "seqs", default, skip_serializing_if = "Vec::is_empty")]
	sequences: Vec<Sequence>,
}

impl Animation {
	/// Creates an empty animation for a texture.
	pub fn new(texture_id: Option<String>) -> Self {
		Self {
			texture_id,
			sequences: Vec::new(),
		}
	}

	/// Creates an animation from existing sequences.
	pub fn from_sequences(texture_id: Option<String>, sequences: Vec<Sequence>) -> Self {
		Self {
			texture_id,
			sequences,
		}
	}

	/// Identifier of the shared texture.
	pub fn texture_id(&self) -> Option<&str> {
		self.texture_id.as_deref()
	}

	/// Sets the texture identifier.
	pub fn set_texture_id(&mut self, texture_id: Option<String>) {
		self.texture_id = texture_id;
	}

	/// All sequences.
	pub fn sequences(&self) -> &[Sequence] {
		&self.sequences
	}

	/// Mutable access to the sequences.
	pub fn sequences_mut(&mut self) -> &mut Vec<Sequence> {
		&mut self.sequences
	}

	/// Adds a sequence.
	pub fn insert(&mut self, sequence: Sequence) {
		self.sequences.push(sequence);
	}

	/// Removes and returns the first sequence named `name`.
	pub fn remove(&mut self, name: &str) -> Option<Sequence> {
		let index = self.sequences.iter().position(|sequence| sequence.name() == Some(name))?;
		Some(self.sequences.remove(index))
	}

	/// Number of sequences.
	pub fn len(&self) -> usize {
		self.sequences.len()
	}

	/// Returns `true` if there are no sequences.
	pub fn is_empty(&self) -> bool {
		self.sequences.is_empty()
	}

	/// First sequence named `name`.
	pub fn get(&self, name: &str) -> Option<&Sequence> {
		self.sequences.find_sequence(name)
	}

	/// First sequence named `name`, mutably.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Sequence> {
		self.sequences.find_sequence_mut(name)
	}

	/// Sequences that are currently playing.
	pub fn animating_sequences(&self) -> impl Iterator<Item = &Sequence> {
		self.sequences.animating()
	}

	/// Sequences that should be drawn.
	pub fn visible_sequences(&self) -> impl Iterator<Item = &Sequence> {
		self.sequences.visible()
	}

	/// Advances every sequence by `delta` seconds.
	pub fn update(&mut self, delta: f32) {
		self.sequences.update_all(delta);
	}

	/// Largest width and height of the currently displayed frames of visible sequences.
	pub fn max_visible_frame_size(&self) -> TextureSize {
		self.sequences.visible_frame_bounds()
	}
}

impl fmt::Display for Animation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let texture = self.texture_id.as_deref().filter(|id| !id.is_empty()).unwrap_or("<textureless>");
		write!(f, "{}, {} sequences", texture, self.sequences.len())
	}
}
