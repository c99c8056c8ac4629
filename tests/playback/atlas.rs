use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use spritereel::prelude::*;

use crate::character_atlas;

#[test_log::test]
fn test_atlas_fixture_loads() {
	let atlas = character_atlas();
	assert_eq!(atlas.image_path, "character texture.png");
	assert_eq!(atlas.size().unwrap(), TextureSize::new(256, 256).unwrap());
	assert_eq!(atlas.sprites.len(), 23);
	assert!(atlas.sprite("ducking east.png").unwrap().is_rotated());
	assert!(!atlas.sprite("ducking west.png").unwrap().is_rotated());
}

#[test_log::test]
fn test_created_animation_is_idle() {
	let animation = character_atlas().create_animation().unwrap();
	assert_eq!(animation.texture_id(), Some("character texture.png"));
	assert_eq!(animation.len(), 8);
	assert_eq!(animation.visible_sequences().count(), 0);
	assert_eq!(animation.animating_sequences().count(), 0);
	assert_eq!(animation.max_visible_frame_size(), TextureSize::ZERO);
	assert_eq!(animation.sequences().used_texture_ids(), vec!["character texture.png"]);
}

#[test]
fn test_walk_cycle_plays_in_frame_order() {
	let config = AtlasConfig::looping(10.0).unwrap();
	let mut animation = character_atlas().create_animation_with_config(&config).unwrap();

	let walk = animation.get_mut("walking north").unwrap();
	walk.start();
	let mut xs = vec![walk.current_frame().unwrap().source().x()];
	for _ in 0..6 {
		walk.advance_frame();
		xs.push(walk.current_frame().unwrap().source().x());
	}
	assert_eq!(xs, vec![104, 144, 188, 0, 43, 83, 104]);
}

#[test]
fn test_visible_size_follows_playing_sequences() {
	let mut animation = character_atlas().create_animation().unwrap();
	animation.get_mut("standing north").unwrap().start();
	animation.get_mut("walking north").unwrap().start();
	assert_eq!(animation.max_visible_frame_size(), TextureSize::new(48, 51).unwrap());

	// Once mode: six 0.1 s frames, then rewind and stop
	for _ in 0..6 {
		animation.update(0.1);
	}
	let walk = animation.get("walking north").unwrap();
	assert!(!walk.is_animating());
	assert!(walk.is_visible());
	assert_eq!(walk.current_frame_index(), 0);
}

#[test]
fn test_ping_pong_direction_events() {
	let config = AtlasConfig::new(0.1, AnimationType::PingPong);
	let mut animation = character_atlas().create_animation_with_config(&config).unwrap();
	let walk = animation.get_mut("walking east").unwrap();

	let flips = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&flips);
	walk.subscribe(move |event, _| {
		if event == SequenceEvent::PlayDirectionChanged {
			counter.fetch_add(1, Ordering::Relaxed);
		}
	});

	walk.start();
	for _ in 0..10 {
		walk.advance_frame();
	}
	// Flips on reaching index 5, then again on returning to 0
	assert_eq!(flips.load(Ordering::Relaxed), 2);
	assert_eq!(walk.current_frame_index(), 0);
	assert!(!walk.is_reverse());
}
