use super::{Bar, bars};
use crate::app::PlaybackState;
use crate::config::VisualizerSettings;

fn style() -> VisualizerSettings {
    VisualizerSettings::default()
}

#[test]
fn maps_the_db_range_onto_the_canvas_height() {
    // floor(100 / 30) = 3 bars; −60 → 0, −30 → 50, 0 → 100.
    let out = bars(
        PlaybackState::Playing,
        &[-60.0, -30.0, 0.0],
        100.0,
        100.0,
        &style(),
    );

    assert_eq!(out.len(), 3);
    assert_eq!(
        out[0],
        Bar {
            x: 0.0,
            y: 100.0,
            width: 25.0,
            height: 0.0
        }
    );
    assert_eq!(
        out[1],
        Bar {
            x: 30.0,
            y: 50.0,
            width: 25.0,
            height: 50.0
        }
    );
    assert_eq!(
        out[2],
        Bar {
            x: 60.0,
            y: 0.0,
            width: 25.0,
            height: 100.0
        }
    );
}

#[test]
fn empty_unless_playing() {
    let mags = [-10.0, -20.0, -30.0];
    assert!(bars(PlaybackState::Stopped, &mags, 100.0, 100.0, &style()).is_empty());
    assert!(bars(PlaybackState::Paused, &mags, 100.0, 100.0, &style()).is_empty());
    assert!(!bars(PlaybackState::Playing, &mags, 100.0, 100.0, &style()).is_empty());
}

#[test]
fn clamps_magnitudes_outside_the_db_range() {
    let out = bars(
        PlaybackState::Playing,
        &[-90.0, 10.0],
        100.0,
        100.0,
        &style(),
    );
    assert_eq!(out[0].height, 0.0);
    assert_eq!(out[1].height, 100.0);
    assert_eq!(out[1].y, 0.0);
}

#[test]
fn bar_count_is_clipped_to_the_band_count() {
    // Plenty of room for more bars, but only two bands.
    let out = bars(PlaybackState::Playing, &[0.0, 0.0], 1000.0, 50.0, &style());
    assert_eq!(out.len(), 2);
}

#[test]
fn bar_count_is_clipped_to_the_canvas_width() {
    let mags = vec![0.0f32; 128];
    let out = bars(PlaybackState::Playing, &mags, 100.0, 50.0, &style());
    assert_eq!(out.len(), 3);

    // Too narrow for even one bar.
    let out = bars(PlaybackState::Playing, &mags, 20.0, 50.0, &style());
    assert!(out.is_empty());
}

#[test]
fn degenerate_canvases_produce_nothing() {
    let mags = [0.0f32; 8];
    assert!(bars(PlaybackState::Playing, &mags, 0.0, 100.0, &style()).is_empty());
    assert!(bars(PlaybackState::Playing, &mags, 100.0, 0.0, &style()).is_empty());
    assert!(bars(PlaybackState::Playing, &[], 100.0, 100.0, &style()).is_empty());
}

#[test]
fn is_idempotent_across_calls() {
    let mags = [-45.0, -15.0, -5.0];
    let a = bars(PlaybackState::Playing, &mags, 300.0, 80.0, &style());
    let b = bars(PlaybackState::Playing, &mags, 300.0, 80.0, &style());
    assert_eq!(a, b);
}

#[test]
fn honors_configured_geometry() {
    let style = VisualizerSettings {
        bar_width: 10.0,
        bar_gap: 0.0,
        ..VisualizerSettings::default()
    };
    let out = bars(
        PlaybackState::Playing,
        &[0.0, 0.0, 0.0, 0.0],
        35.0,
        10.0,
        &style,
    );
    assert_eq!(out.len(), 3);
    assert_eq!(out[1].x, 10.0);
    assert_eq!(out[2].x, 20.0);
}
