//! Application module: the playback controller model.
//!
//! `App` owns the playlist and the logical playback state, drives the audio
//! engine through commands and consumes its events.

mod model;

pub use model::*;
