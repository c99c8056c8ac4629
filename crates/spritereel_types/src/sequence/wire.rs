//! Sparse serde representation of [`Sequence`].
//!
//! Only state that differs from a freshly created sequence is written. The elapsed
//! time and the observers are runtime state and never serialized.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{AnimationType, MirrorDirections, Sequence};
use crate::frame::Frame;

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
	*value == T::default()
}

fn is_false(value: &bool) -> bool {
	!*value
}

fn no_frames(frames: &&[Frame]) -> bool {
	frames.is_empty()
}

/// Borrowed view used for encoding.
#[derive(Serialize)]
struct SequenceRef<'a> {
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<&'a str>,
	#[serde(rename = "texId", skip_serializing_if = "Option::is_none")]
	texture_id: Option<&'a str>,
	#[serde(rename = "t", skip_serializing_if = "is_default")]
	animation_type: AnimationType,
	#[serde(rename = "m", skip_serializing_if = "MirrorDirections::is_none")]
	mirror: MirrorDirections,
	#[serde(rename = "v", skip_serializing_if = "is_false")]
	visible: bool,
	#[serde(rename = "rev", skip_serializing_if = "is_false")]
	reverse: bool,
	#[serde(rename = "cfi", skip_serializing_if = "is_default")]
	current_frame_index: usize,
	#[serde(rename = "a", skip_serializing_if = "is_false")]
	animating: bool,
	#[serde(skip_serializing_if = "no_frames")]
	frames: &'a [Frame],
}

/// Owned form used for decoding; every field is optional.
#[derive(Deserialize, Default)]
#[serde(default)]
struct SequenceRepr {
	name: Option<String>,
	#[serde(rename = "texId")]
	texture_id: Option<String>,
	#[serde(rename = "t")]
	animation_type: AnimationType,
	#[serde(rename = "m")]
	mirror: MirrorDirections,
	#[serde(rename = "v")]
	visible: bool,
	#[serde(rename = "rev")]
	reverse: bool,
	#[serde(rename = "cfi")]
	current_frame_index: usize,
	#[serde(rename = "a")]
	animating: bool,
	frames: Vec<Frame>,
}

impl Serialize for Sequence {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		SequenceRef {
			name: self.name.as_deref(),
			texture_id: self.texture_id.as_deref(),
			animation_type: self.animation_type,
			mirror: self.mirror,
			visible: self.visible,
			reverse: self.reverse,
			current_frame_index: self.current_frame_index,
			animating: self.animating,
			frames: &self.frames,
		}
		.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Sequence {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let repr = SequenceRepr::deserialize(deserializer)?;

		let mut sequence = Sequence::from_frames(repr.frames);
		sequence.name = repr.name;
		sequence.texture_id = repr.texture_id;
		sequence.animation_type = repr.animation_type;
		sequence.mirror = repr.mirror;
		sequence.visible = repr.visible;
		sequence.reverse = repr.reverse;
		sequence.current_frame_index = repr.current_frame_index;
		sequence.animating = repr.animating;

		if !sequence.frames.is_empty() && sequence.current_frame().is_none() {
			warn!(
				"{}: stored frame index {} is past the last of {} frames",
				sequence.label(),
				sequence.current_frame_index,
				sequence.frames.len()
			);
		}
		Ok(sequence)
	}
}
