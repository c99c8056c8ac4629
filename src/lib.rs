#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `spritereel` drives 2D sprite-sheet playback: which region of a texture to show,
//! for how long, and how a sequence of frames loops.
//!
//! The data model lives in [`spritereel_types`] and is re-exported here.
//!
pub use spritereel_types::*;
