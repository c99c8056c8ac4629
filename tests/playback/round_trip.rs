use spritereel::prelude::*;

use crate::character_atlas;

#[test]
fn test_animation_round_trip() {
	let mut animation = character_atlas().create_animation().unwrap();
	{
		let walk = animation.get_mut("walking south").unwrap();
		walk.set_animation_type(AnimationType::OnceDisappear);
		walk.set_mirror(MirrorDirections::Horizontal);
		walk.set_reverse(true);
		walk.start();
		walk.advance_frame();
	}

	let json = serde_json::to_string_pretty(&animation).unwrap();
	let decoded: Animation = serde_json::from_str(&json).unwrap();

	assert_eq!(decoded.texture_id(), animation.texture_id());
	assert_eq!(decoded.len(), animation.len());
	for (left, right) in decoded.sequences().iter().zip(animation.sequences()) {
		assert_eq!(left.name(), right.name());
		assert_eq!(left.texture_id(), right.texture_id());
		assert_eq!(left.frames(), right.frames());
		assert_eq!(left.animation_type(), right.animation_type());
		assert_eq!(left.mirror(), right.mirror());
		assert_eq!(left.is_reverse(), right.is_reverse());
		assert_eq!(left.is_visible(), right.is_visible());
		assert_eq!(left.is_animating(), right.is_animating());
		assert_eq!(left.current_frame_index(), right.current_frame_index());
	}

	let walk = decoded.get("walking south").unwrap();
	assert_eq!(walk.current_frame_index(), 4);
}

#[test]
fn test_decoded_sequence_keeps_playing() {
	let json = r#"{
		"name": "blink",
		"t": "Looping",
		"v": true,
		"a": true,
		"cfi": 1,
		"frames": [
			{ "src": { "x": 0, "y": 0, "w": 8, "h": 8 }, "time": 0.1 },
			{ "src": { "x": 8, "y": 0, "w": 8, "h": 8 }, "time": 0.1 }
		]
	}"#;
	let mut sequence: Sequence = serde_json::from_str(json).unwrap();
	sequence.update(0.1);
	assert_eq!(sequence.current_frame_index(), 0);
	assert_eq!(sequence.to_string(), "blink: frame index is 0 out of 2 frames (visible, active)");
}

#[test]
fn test_invalid_documents_are_rejected() {
	let bad_mode = r#"{"texId":"a.png","seqs":[{"t":"Shuffle"}]}"#;
	assert!(serde_json::from_str::<Animation>(bad_mode).is_err());

	let bad_size = r#"{"seqs":[{"frames":[{"src":{"x":0,"y":0,"w":-8,"h":8},"time":0.1}]}]}"#;
	assert!(serde_json::from_str::<Animation>(bad_size).is_err());
}
