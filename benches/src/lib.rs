//! Benchmark helper utilities for spritereel
//!
//! This module generates synthetic sequences and atlases so the benchmarks do not
//! depend on asset files. Generation is seeded, so every run measures the same data.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spritereel_types::prelude::*;

/// Seed shared by all generators
pub const SEED: u64 = 0x5EED_F00D;

/// Generates a sequence of `frame_count` 16x16 frames with random durations
///
/// Durations fall in `10ms..200ms`, similar to hand-authored sprite sheets.
pub fn generate_sequence(frame_count: usize, animation_type: AnimationType) -> Sequence {
	let mut rng = SmallRng::seed_from_u64(SEED);
	let frames = (0..frame_count)
		.map(|i| {
			let x = i32::try_from(i % 64).unwrap_or(0) * 16;
			let y = i32::try_from(i / 64).unwrap_or(0) * 16;
			let region = TextureRegion::from_parts(
				TexturePoint::new(x, y),
				TextureSize::new(16, 16).unwrap_or(TextureSize::ZERO),
			);
			Frame::new(region, rng.random_range(0.01..0.2)).unwrap_or_default()
		})
		.collect();

	Sequence::from_frames(frames).with_animation_type(animation_type)
}

/// Generates an animation of `sequence_count` playing sequences, cycling through all modes
pub fn generate_animation(sequence_count: usize, frames_per_sequence: usize) -> Animation {
	let mut animation = Animation::new(Some("bench.png".to_string()));
	for i in 0..sequence_count {
		let mode = AnimationType::ALL[i % AnimationType::ALL.len()];
		let mut sequence = generate_sequence(frames_per_sequence, mode).with_name(format!("seq {i}"));
		sequence.start();
		animation.insert(sequence);
	}
	animation
}

/// Generates a packer atlas with `groups` sequences of `frames` numbered sprites each
///
/// Sprites are shuffled so grouping has to reorder frames.
pub fn generate_atlas(groups: usize, frames: usize) -> TextureAtlas {
	let mut rng = SmallRng::seed_from_u64(SEED);
	let mut atlas = TextureAtlas::new("bench atlas.png", 4096, 4096);

	for group in 0..groups {
		for frame in 1..=frames {
			let x = rng.random_range(0..4096 - 64);
			let y = rng.random_range(0..4096 - 64);
			atlas
				.sprites
				.push(AtlasSprite::new(format!("move {group} dir_{frame}.png"), x, y, 64, 64));
		}
	}

	// Fisher-Yates with the seeded generator
	for i in (1..atlas.sprites.len()).rev() {
		let j = rng.random_range(0..=i);
		atlas.sprites.swap(i, j);
	}
	atlas
}
