//! Benchmark suite for sequence playback and atlas grouping
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spritereel_benches::{generate_animation, generate_atlas, generate_sequence};
use spritereel_types::prelude::*;
use std::hint::black_box;

/// Benchmark a single update per mode at a typical 60 Hz tick
fn bench_update_per_mode(c: &mut Criterion) {
	let mut group = c.benchmark_group("sequence_update");

	for mode in AnimationType::ALL {
		let mut sequence = generate_sequence(64, mode);
		sequence.start();

		group.bench_with_input(BenchmarkId::new("tick_60hz", mode), &mode, |b, _| {
			b.iter(|| {
				sequence.update(black_box(1.0 / 60.0));
				if !sequence.is_animating() {
					sequence.start();
				}
			});
		});
	}

	group.finish();
}

/// Benchmark the catch-up loop when a long delta skips many frames
fn bench_catch_up(c: &mut Criterion) {
	let mut group = c.benchmark_group("sequence_catch_up");

	for delta in [0.5_f32, 5.0, 50.0] {
		let mut sequence = generate_sequence(256, AnimationType::Looping);
		sequence.start();

		group.bench_with_input(BenchmarkId::new("looping", delta), &delta, |b, &delta| {
			b.iter(|| sequence.update(black_box(delta)));
		});
	}

	group.finish();
}

/// Benchmark updating and querying a whole animation
fn bench_animation(c: &mut Criterion) {
	let mut group = c.benchmark_group("animation");

	for count in [16_usize, 256] {
		let mut animation = generate_animation(count, 32);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("update", count), &count, |b, _| {
			b.iter(|| {
				animation.update(black_box(1.0 / 60.0));
				black_box(animation.max_visible_frame_size())
			});
		});
	}

	group.finish();
}

/// Benchmark grouping packed sprites into sequences
fn bench_atlas_grouping(c: &mut Criterion) {
	let mut group = c.benchmark_group("atlas_grouping");

	for (groups, frames) in [(8_usize, 6_usize), (64, 24)] {
		let atlas = generate_atlas(groups, frames);
		group.throughput(Throughput::Elements(atlas.sprites.len() as u64));
		group.bench_with_input(
			BenchmarkId::new("create_animation", format!("{groups}x{frames}")),
			&atlas,
			|b, atlas| {
				b.iter(|| {
					let result = black_box(atlas).create_animation();
					black_box(result)
				});
			},
		);
	}

	group.finish();
}

criterion_group!(benches, bench_update_per_mode, bench_catch_up, bench_animation, bench_atlas_grouping);
criterion_main!(benches);
