use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::config::VisualizerSettings;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent};

/// Handle to the engine thread: command sender, event receiver and the
/// join handle used for a clean shutdown.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<AudioEvent>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(visualizer: VisualizerSettings, initial_volume: f32) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<AudioEvent>();

        let join = spawn_audio_thread(rx, event_tx, visualizer, initial_volume);

        Self {
            tx,
            events: event_rx,
            join: Mutex::new(Some(join)),
        }
    }

    /// A cloneable command sender; the controller keeps one.
    pub fn sender(&self) -> Sender<AudioCmd> {
        self.tx.clone()
    }

    /// Next pending engine event, if any. Non-blocking.
    pub fn try_recv_event(&self) -> Option<AudioEvent> {
        self.events.try_recv().ok()
    }

    /// Ask the engine to stop and wait for the thread to exit.
    pub fn quit(&self) {
        let _ = self.tx.send(AudioCmd::Quit);
        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
