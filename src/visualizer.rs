//! Pure mapping from a spectrum frame to bar rectangles.
//!
//! Geometry only; drawing happens in `ui`. The function is idempotent and
//! safe to call on every animation frame.

use crate::app::PlaybackState;
use crate::config::VisualizerSettings;

/// dB span rendered: the floor maps to a zero-height bar, 0 dB to a
/// full-height bar.
const RANGE_DB: f32 = 60.0;

/// One bar, in canvas coordinates (origin top-left, bars bottom-anchored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Lay out spectrum bars for a `width` x `height` canvas.
///
/// Unless playback is in the Playing state the result is empty (a cleared
/// canvas). The bar count is `floor(width / (bar_width + gap))`, clipped to
/// the number of magnitude bands; each bar's height is the magnitude mapped
/// linearly from [−60, 0] dB onto [0, height].
pub fn bars(
    playback: PlaybackState,
    magnitudes: &[f32],
    width: f32,
    height: f32,
    style: &VisualizerSettings,
) -> Vec<Bar> {
    if playback != PlaybackState::Playing {
        return Vec::new();
    }
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let step = style.bar_width + style.bar_gap;
    if step <= 0.0 {
        return Vec::new();
    }
    let fit = (width / step).floor() as usize;
    let count = fit.min(magnitudes.len());

    let mut out = Vec::with_capacity(count);
    for (i, &magnitude) in magnitudes.iter().take(count).enumerate() {
        let level = ((magnitude + RANGE_DB) / RANGE_DB).clamp(0.0, 1.0);
        let bar_height = level * height;
        out.push(Bar {
            x: i as f32 * step,
            y: height - bar_height,
            width: style.bar_width,
            height: bar_height,
        });
    }
    out
}

#[cfg(test)]
mod tests;
