use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStreamBuilder, Sink};

use crate::config::VisualizerSettings;

use super::sink::create_sink;
use super::spectrum::{SpectrumAnalyzer, TapBuffer};
use super::types::{AudioCmd, AudioEvent};

/// Tick period between commands: drives progress reports, spectrum frames
/// and end-of-media detection.
const TICK: Duration = Duration::from_millis(50);

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
    visualizer: VisualizerSettings,
    initial_volume: f32,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                log::error!("no audio output device: {e}");
                drain_without_device(rx, events);
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a desktop app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let tap = TapBuffer::new(visualizer.fft_size);
        let mut analyzer = SpectrumAnalyzer::new(visualizer.fft_size, visualizer.bands);
        let mut scratch: Vec<f32> = Vec::with_capacity(visualizer.fft_size);

        let mut sink: Option<Sink> = None;
        let mut total: Option<Duration> = None;
        let mut paused = false;
        let mut volume = initial_volume.clamp(0.0, 1.0);

        // Track start time and accumulated elapsed when paused.
        let mut started_at: Option<Instant> = None;
        let mut accumulated = Duration::ZERO;

        loop {
            match rx.recv_timeout(TICK) {
                Ok(AudioCmd::Play(track)) => {
                    // Release the old handle before constructing the new one.
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    tap.clear();

                    match create_sink(&stream, &track, tap.clone(), volume) {
                        Ok((new_sink, new_total)) => {
                            new_sink.play();
                            sink = Some(new_sink);
                            total = new_total;
                            paused = false;
                            started_at = Some(Instant::now());
                            accumulated = Duration::ZERO;
                            let _ = events.send(AudioEvent::Ready { total });
                        }
                        Err(e) => {
                            log::warn!("cannot play {}: {e}", track.path.display());
                            total = None;
                            paused = false;
                            started_at = None;
                            accumulated = Duration::ZERO;
                            let _ = events.send(AudioEvent::LoadFailed {
                                title: track.display.clone(),
                                message: e.to_string(),
                            });
                        }
                    }
                }

                Ok(AudioCmd::Stop) => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    tap.clear();
                    total = None;
                    paused = false;
                    started_at = None;
                    accumulated = Duration::ZERO;
                }

                Ok(AudioCmd::TogglePause) => {
                    if let Some(ref s) = sink {
                        if paused {
                            s.play();
                            started_at = Some(Instant::now());
                        } else {
                            s.pause();
                            if let Some(st) = started_at {
                                accumulated += Instant::now() - st;
                            }
                            started_at = None;
                        }
                        paused = !paused;
                    }
                }

                Ok(AudioCmd::SetVolume(v)) => {
                    volume = v.clamp(0.0, 1.0);
                    if let Some(ref s) = sink {
                        s.set_volume(volume);
                    }
                }

                Ok(AudioCmd::Quit) => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    break;
                }

                Err(RecvTimeoutError::Timeout) => {
                    let finished = matches!(sink, Some(ref s) if !paused && s.empty());
                    if finished {
                        // End of media: report once and drop the handle. The
                        // controller decides what plays next.
                        sink = None;
                        total = None;
                        started_at = None;
                        accumulated = Duration::ZERO;
                        tap.clear();
                        let _ = events.send(AudioEvent::Finished);
                        continue;
                    }

                    if sink.is_some() && !paused {
                        let elapsed =
                            accumulated + started_at.map_or(Duration::ZERO, |st| st.elapsed());
                        let _ = events.send(AudioEvent::Progress { elapsed, total });

                        tap.snapshot(&mut scratch);
                        let mags = analyzer.compute(&scratch);
                        let _ = events.send(AudioEvent::Spectrum(mags.to_vec()));
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

/// Without an output device the engine still answers commands so the UI
/// stays usable: every play attempt is reported as a failure.
fn drain_without_device(rx: Receiver<AudioCmd>, events: Sender<AudioEvent>) {
    while let Ok(cmd) = rx.recv() {
        match cmd {
            AudioCmd::Play(track) => {
                let _ = events.send(AudioEvent::LoadFailed {
                    title: track.display,
                    message: "no audio output device".to_string(),
                });
            }
            AudioCmd::Quit => break,
            _ => {}
        }
    }
}
