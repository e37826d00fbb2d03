//! Startup wiring and the eframe shell.

use crate::app::App;
use crate::audio::AudioPlayer;

mod settings;
mod shell;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let settings = settings::load_settings();

    let audio = AudioPlayer::new(settings.visualizer.clone(), settings.playback.volume);

    let mut app = App::new(audio.sender());
    app.repeat = settings.playback.repeat;
    app.volume = settings.playback.volume;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window.title.clone())
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size([360.0, 240.0]),
        ..Default::default()
    };

    let title = settings.window.title.clone();
    let shell = shell::Shell::new(app, audio, settings);
    eframe::run_native(&title, native_options, Box::new(|_cc| Box::new(shell)))?;
    Ok(())
}
