//! The playback controller: playlist + state machine over the engine.

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::audio::{AudioCmd, AudioEvent};
use crate::library::Track;
use crate::playlist::Playlist;

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// The main application model.
///
/// All mutation happens on the UI thread; the engine is reached only
/// through the command channel, and reaches back only through
/// `handle_event`.
pub struct App {
    pub playlist: Playlist,
    pub playback: PlaybackState,
    pub repeat: bool,

    /// List-row selection (for remove); independent of the playback cursor.
    pub selected: Option<usize>,

    pub elapsed: Duration,
    pub total: Option<Duration>,
    /// Latest spectrum frame, dBFS per band.
    pub spectrum: Vec<f32>,
    /// User-visible message for the last recoverable failure.
    pub notice: Option<String>,
    pub volume: f32,

    cmd: Sender<AudioCmd>,
}

impl App {
    pub fn new(cmd: Sender<AudioCmd>) -> Self {
        Self {
            playlist: Playlist::new(),
            playback: PlaybackState::Stopped,
            repeat: false,
            selected: None,
            elapsed: Duration::ZERO,
            total: None,
            spectrum: Vec::new(),
            notice: None,
            volume: 1.0,
            cmd,
        }
    }

    /// Bind the engine to the cursor's current track and start it. The
    /// engine releases any previous sink before building the new one.
    fn start_current(&mut self) {
        let Some(track) = self.playlist.current() else {
            self.playback = PlaybackState::Stopped;
            return;
        };
        let track = track.clone();
        let _ = self.cmd.send(AudioCmd::Play(track));
        self.playback = PlaybackState::Playing;
        self.elapsed = Duration::ZERO;
        self.total = None;
        self.notice = None;
    }

    pub fn toggle_play_pause(&mut self) {
        match self.playback {
            PlaybackState::Playing => {
                let _ = self.cmd.send(AudioCmd::TogglePause);
                self.playback = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                let _ = self.cmd.send(AudioCmd::TogglePause);
                self.playback = PlaybackState::Playing;
            }
            PlaybackState::Stopped => {
                if !self.playlist.is_empty() {
                    self.start_current();
                }
            }
        }
    }

    pub fn stop(&mut self) {
        let _ = self.cmd.send(AudioCmd::Stop);
        self.playback = PlaybackState::Stopped;
        self.elapsed = Duration::ZERO;
        self.total = None;
        self.spectrum.clear();
    }

    /// Skip to the next track (wrapping) and play it, from any state.
    pub fn skip_forward(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.playlist.next(true);
        self.start_current();
    }

    /// Skip to the previous track (wrapping) and play it, from any state.
    pub fn skip_backward(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.playlist.previous();
        self.start_current();
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    /// Shuffle the playlist. The cursor position is not re-anchored and an
    /// active sink keeps playing the track it was bound to.
    pub fn shuffle(&mut self) {
        self.playlist.shuffle();
    }

    pub fn add_tracks(&mut self, tracks: Vec<Track>) {
        for track in tracks {
            self.playlist.push(track);
        }
    }

    /// Select a list row. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.playlist.len() {
            self.selected = Some(index);
        }
    }

    /// Move the cursor to `index` and play it.
    pub fn play_at(&mut self, index: usize) {
        if index < self.playlist.len() {
            self.playlist.set_current(index);
            self.start_current();
        }
    }

    /// Remove the selected row. Without a selection this is a no-op.
    /// Removing the row at the playback cursor stops playback.
    pub fn remove_selected(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let was_current = index == self.playlist.current_index();

        if self.playlist.remove_at(index).is_none() {
            self.selected = None;
            return;
        }

        if was_current && self.playback != PlaybackState::Stopped {
            self.stop();
        }

        self.selected = if self.playlist.is_empty() {
            None
        } else {
            Some(index.min(self.playlist.len() - 1))
        };
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        let _ = self.cmd.send(AudioCmd::SetVolume(self.volume));
    }

    /// Single entry point for everything the engine reports back.
    pub fn handle_event(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::Ready { total } => {
                self.total = total.or(self.total);
            }
            AudioEvent::Progress { elapsed, total } => {
                self.elapsed = elapsed;
                self.total = total.or(self.total);
            }
            AudioEvent::Spectrum(magnitudes) => {
                self.spectrum = magnitudes;
            }
            AudioEvent::Finished => {
                self.on_track_finished();
            }
            AudioEvent::LoadFailed { title, message } => {
                self.playback = PlaybackState::Stopped;
                self.elapsed = Duration::ZERO;
                self.total = None;
                self.spectrum.clear();
                self.notice = Some(format!("cannot play {title}: {message}"));
            }
        }
    }

    /// End-of-media policy: repeat restarts the same track, otherwise the
    /// cursor advances with wraparound and the next track starts.
    fn on_track_finished(&mut self) {
        if self.playlist.is_empty() {
            self.playback = PlaybackState::Stopped;
            return;
        }
        if !self.repeat {
            self.playlist.next(true);
        }
        self.start_current();
    }

    /// Progress text in the shape `mm:ss / mm:ss`.
    pub fn time_display(&self) -> String {
        format!(
            "{} / {}",
            format_mmss(self.elapsed),
            format_mmss(self.total.unwrap_or_default())
        )
    }
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
