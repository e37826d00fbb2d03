//! UI rendering for the player window.
//!
//! Three fixed regions: the playlist on the left, transport controls at the
//! bottom, and the visualizer canvas filling whatever remains.

use egui::{Color32, Rect};

use crate::app::{App, PlaybackState};
use crate::config::{LibrarySettings, Settings};
use crate::library;
use crate::visualizer;

pub const PLAYLIST_PANEL_WIDTH: f32 = 220.0;
pub const CONTROLS_PANEL_HEIGHT: f32 = 120.0;

/// Usable floor for the visualizer canvas when the window gets tiny.
const MIN_CANVAS_WIDTH: f32 = 120.0;
const MIN_CANVAS_HEIGHT: f32 = 80.0;

const BAR_COLOR: Color32 = Color32::from_rgb(0x2e, 0x6b, 0xd8);
const CANVAS_COLOR: Color32 = Color32::from_rgb(0x10, 0x10, 0x14);

pub fn draw(ctx: &egui::Context, app: &mut App, settings: &Settings) {
    draw_playlist_panel(ctx, app);
    draw_controls_panel(ctx, app, settings);
    draw_visualizer_panel(ctx, app, settings);
}

fn draw_playlist_panel(ctx: &egui::Context, app: &mut App) {
    egui::SidePanel::left("playlist")
        .exact_width(PLAYLIST_PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Playlist");
            ui.separator();

            if app.playlist.is_empty() {
                ui.colored_label(Color32::GRAY, "Nothing queued yet.");
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut clicked: Option<usize> = None;
                    let mut play: Option<usize> = None;

                    for (index, track) in app.playlist.tracks().iter().enumerate() {
                        let is_current = index == app.playlist.current_index();
                        let marker = if is_current && app.playback == PlaybackState::Playing {
                            "▶ "
                        } else {
                            ""
                        };
                        let row = ui.selectable_label(
                            app.selected == Some(index),
                            format!("{marker}{}", track.display),
                        );
                        if row.double_clicked() {
                            play = Some(index);
                        } else if row.clicked() {
                            clicked = Some(index);
                        }
                    }

                    if let Some(index) = clicked {
                        app.select(index);
                    }
                    if let Some(index) = play {
                        app.play_at(index);
                    }
                });
        });
}

fn draw_controls_panel(ctx: &egui::Context, app: &mut App, settings: &Settings) {
    egui::TopBottomPanel::bottom("controls")
        .exact_height(CONTROLS_PANEL_HEIGHT)
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("⏮").clicked() {
                    app.skip_backward();
                }
                let play_icon = if app.playback == PlaybackState::Playing {
                    "⏸"
                } else {
                    "▶"
                };
                if ui.button(play_icon).clicked() {
                    app.toggle_play_pause();
                }
                if ui.button("⏭").clicked() {
                    app.skip_forward();
                }
                if ui.button("⏹").clicked() {
                    app.stop();
                }

                ui.separator();

                if ui.button("➕ Files").clicked() {
                    add_files(app, &settings.library);
                }
                if ui.button("📁 Folder").clicked() {
                    add_folder(app, &settings.library);
                }
                if ui.button("➖ Remove").clicked() {
                    app.remove_selected();
                }

                ui.separator();

                if ui.button("🔀").clicked() {
                    app.shuffle();
                }
                if ui.selectable_label(app.repeat, "🔁").clicked() {
                    app.toggle_repeat();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("🔊");
                let mut volume = app.volume;
                if ui
                    .add(egui::Slider::new(&mut volume, 0.0..=1.0).show_value(false))
                    .changed()
                {
                    app.set_volume(volume);
                }

                ui.separator();
                ui.label(app.time_display());

                if app.playback != PlaybackState::Stopped {
                    if let Some(track) = app.playlist.current() {
                        ui.separator();
                        ui.label(&track.display);
                    }
                }
            });

            if let Some(notice) = &app.notice {
                ui.colored_label(Color32::LIGHT_RED, notice);
            }
        });
}

fn draw_visualizer_panel(ctx: &egui::Context, app: &mut App, settings: &Settings) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let size = egui::vec2(
            available.width().max(MIN_CANVAS_WIDTH),
            available.height().max(MIN_CANVAS_HEIGHT),
        );
        let canvas = Rect::from_min_size(available.min, size);

        let painter = ui.painter_at(canvas);
        painter.rect_filled(canvas, 4.0, CANVAS_COLOR);

        for bar in visualizer::bars(
            app.playback,
            &app.spectrum,
            canvas.width(),
            canvas.height(),
            &settings.visualizer,
        ) {
            let rect = Rect::from_min_size(
                egui::pos2(canvas.min.x + bar.x, canvas.min.y + bar.y),
                egui::vec2(bar.width, bar.height),
            );
            painter.rect_filled(rect, 1.0, BAR_COLOR);
        }
    });
}

fn add_files(app: &mut App, settings: &LibrarySettings) {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    let ext_refs: Vec<&str> = exts.iter().map(String::as_str).collect();

    if let Some(paths) = rfd::FileDialog::new()
        .add_filter("Audio", &ext_refs)
        .set_title("Add audio files")
        .pick_files()
    {
        app.add_tracks(library::from_paths(&paths, settings));
    }
}

fn add_folder(app: &mut App, settings: &LibrarySettings) {
    if let Some(dir) = rfd::FileDialog::new()
        .set_title("Add a folder")
        .pick_folder()
    {
        let tracks = library::scan(&dir, settings);
        if tracks.is_empty() {
            log::info!("no audio files found under {}", dir.display());
        }
        app.add_tracks(tracks);
    }
}
