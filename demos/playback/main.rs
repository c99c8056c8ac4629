//! Sprite-sheet playback simulator.
//!
//! Loads a packer atlas exported as JSON, groups it into sequences and plays them
//! for a number of fixed-rate ticks, logging which region each sequence displays.
//!
//! Grouping options come from `AtlasConfig` defaults, then an optional TOML file,
//! then `SPRITEREEL_*` environment variables (for example
//! `SPRITEREEL_FRAME_DURATION=0.25`), then command line flags.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use spritereel::prelude::*;

#[derive(Parser)]
#[command(name = "playback")]
#[command(author = "spritereel project")]
#[command(version)]
#[command(about = "Simulate sprite-sheet playback of a texture atlas", long_about = None)]
struct Cli {
	/// Atlas description exported by the packer (JSON)
	#[arg(value_name = "ATLAS", default_value = "tests/data/character_atlas.json")]
	atlas: PathBuf,

	/// TOML file with grouping options
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Override the playback mode of every sequence (e.g. looping, ping-pong)
	#[arg(short, long, value_name = "MODE")]
	mode: Option<AnimationType>,

	/// Only play the named sequence
	#[arg(short, long, value_name = "NAME")]
	sequence: Option<String>,

	/// Number of ticks to simulate
	#[arg(short, long, value_name = "COUNT", default_value_t = 30)]
	ticks: usize,

	/// Tick rate in Hz
	#[arg(long, value_name = "HZ", default_value_t = 60.0)]
	rate: f32,

	/// Play every sequence backwards
	#[arg(short, long, default_value_t = false)]
	reverse: bool,

	/// Print the resulting animation as JSON after the simulation
	#[arg(long, default_value_t = false)]
	dump: bool,
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	if !cli.rate.is_finite() || cli.rate <= 0.0 {
		bail!("Tick rate must be positive, got {}", cli.rate);
	}

	let mut atlas_config = load_config(cli.config.as_deref())?;
	if let Some(mode) = cli.mode {
		atlas_config.animation_type = mode;
	}
	debug!("Atlas config: {atlas_config:?}");

	let atlas = load_atlas(&cli.atlas)?;
	let mut animation = atlas
		.create_animation_with_config(&atlas_config)
		.with_context(|| format!("Failed to group sprites of {}", cli.atlas.display()))?;
	info!("Loaded {animation}");

	start_sequences(&mut animation, &cli)?;

	let delta = 1.0 / cli.rate;
	for tick in 1..=cli.ticks {
		animation.update(delta);
		for sequence in animation.visible_sequences() {
			if let Some(frame) = sequence.current_frame() {
				info!("tick {tick:>4}: {sequence} -> {frame}");
			}
		}
		if animation.animating_sequences().next().is_none() {
			info!("tick {tick:>4}: every sequence has stopped");
			break;
		}
	}

	let size = animation.max_visible_frame_size();
	info!("Largest visible frame: {} x {}", size.width(), size.height());

	if cli.dump {
		println!("{}", serde_json::to_string_pretty(&animation)?);
	}

	Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AtlasConfig> {
	let mut builder = config::Config::builder()
		.add_source(config::Config::try_from(&AtlasConfig::default())?);
	if let Some(path) = path {
		builder = builder.add_source(config::File::from(path));
	}
	builder = builder.add_source(config::Environment::with_prefix("SPRITEREEL"));

	let atlas_config: AtlasConfig = builder
		.build()
		.and_then(config::Config::try_deserialize)
		.context("Failed to load atlas configuration")?;
	atlas_config.validate()?;
	Ok(atlas_config)
}

fn load_atlas(path: &Path) -> Result<TextureAtlas> {
	let text =
		fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let atlas: TextureAtlas = serde_json::from_str(&text)
		.with_context(|| format!("Failed to parse atlas {}", path.display()))?;
	info!("{}: {} sprites on {} x {}", atlas.image_path, atlas.sprites.len(), atlas.width, atlas.height);
	Ok(atlas)
}

fn start_sequences(animation: &mut Animation, cli: &Cli) -> Result<()> {
	let selected: Vec<&mut Sequence> = match &cli.sequence {
		Some(name) => match animation.get_mut(name) {
			Some(sequence) => vec![sequence],
			None => bail!("No sequence named {name:?}"),
		},
		None => animation.sequences_mut().iter_mut().collect(),
	};

	for sequence in selected {
		sequence.set_reverse(cli.reverse);
		sequence.subscribe(|event, sequence| info!("{event:?}: {sequence}"));
		sequence.start();
	}
	Ok(())
}
