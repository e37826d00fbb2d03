//! Sink construction for the engine thread.
//!
//! Opening/decoding failures are recoverable by design: they are reported
//! to the controller as `LoadFailed` events, never panics.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

use crate::library::Track;

use super::spectrum::{SpectrumTap, TapBuffer};

#[derive(Debug, Error)]
pub(super) enum SinkError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

/// Create a paused, tapped `Sink` for `track`. Returns the sink and the
/// track duration when the decoder knows it (tag metadata as fallback).
pub(super) fn create_sink(
    handle: &OutputStream,
    track: &Track,
    tap: TapBuffer,
    volume: f32,
) -> Result<(Sink, Option<Duration>), SinkError> {
    let file = File::open(&track.path).map_err(|e| SinkError::Open {
        path: track.path.clone(),
        source: e,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| SinkError::Decode {
        path: track.path.clone(),
        source: e,
    })?;

    let total = source.total_duration().or(track.duration);

    let sink = Sink::connect_new(handle.mixer());
    sink.set_volume(volume);
    sink.append(SpectrumTap::new(source, tap));
    sink.pause();
    Ok((sink, total))
}
