//! Command and event types exchanged with the audio engine thread.

use std::time::Duration;

use crate::library::Track;

#[derive(Debug)]
pub enum AudioCmd {
    /// Stop whatever is playing and start the given track. The old sink is
    /// always released before the new one is built.
    Play(Track),
    /// Stop playback immediately and drop the sink.
    Stop,
    /// Toggle pause/resume on the current sink.
    TogglePause,
    /// Set the output volume (0.0..=1.0), now and for future sinks.
    SetVolume(f32),
    /// Stop and exit the engine thread.
    Quit,
}

/// What the engine reports back to the controller.
#[derive(Debug, Clone)]
pub enum AudioEvent {
    /// A new sink started; `total` is the track duration when known.
    Ready { total: Option<Duration> },
    /// Periodic position report while playing.
    Progress {
        elapsed: Duration,
        total: Option<Duration>,
    },
    /// Per-band magnitudes in dBFS (−60..0) for the visualizer.
    Spectrum(Vec<f32>),
    /// The current track played to its end.
    Finished,
    /// The track could not be opened or decoded; the engine holds no sink.
    LoadFailed { title: String, message: String },
}
