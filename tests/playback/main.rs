//! Integration tests for `spritereel`

mod atlas;
mod round_trip;

use spritereel::atlas::TextureAtlas;

/// Packer export of a four-direction character, 23 sprites in 8 groups
const CHARACTER_ATLAS: &str = include_str!("../data/character_atlas.json");

fn character_atlas() -> TextureAtlas {
	serde_json::from_str(CHARACTER_ATLAS).unwrap()
}
