use std::time::Duration;

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config::Settings;
use crate::ui;

/// Owns the controller and the audio engine for the lifetime of the window.
pub struct Shell {
    app: App,
    audio: AudioPlayer,
    settings: Settings,
}

impl Shell {
    pub fn new(app: App, audio: AudioPlayer, settings: Settings) -> Self {
        Self {
            app,
            audio,
            settings,
        }
    }
}

impl eframe::App for Shell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain engine events first so this frame draws the freshest state.
        while let Some(event) = self.audio.try_recv_event() {
            self.app.handle_event(event);
        }

        ui::draw(ctx, &mut self.app, &self.settings);

        // The visualizer animates while playing; keep frames coming.
        ctx.request_repaint_after(Duration::from_millis(33));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.audio.quit();
    }
}
