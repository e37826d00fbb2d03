//! Spectrum capture and analysis.
//!
//! `SpectrumTap` sits between the decoder and the sink and copies every
//! sample that flows through into a shared ring buffer. The engine thread
//! periodically snapshots that buffer and folds it into per-band dB
//! magnitudes with `SpectrumAnalyzer`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rodio::Source;
use rustfft::{Fft, FftPlanner, num_complex::Complex};

/// Magnitude reported for silence; also the lower clamp of the dB scale.
pub const SILENCE_DB: f32 = -60.0;

/// Samples are pushed in batches so the mixer thread does not take the lock
/// on every sample.
const FLUSH_CHUNK: usize = 256;

/// Shared ring buffer holding the most recent decoded samples.
#[derive(Clone)]
pub struct TapBuffer {
    inner: Arc<Mutex<VecDeque<f32>>>,
    capacity: usize,
}

impl TapBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    fn extend(&self, chunk: &[f32]) {
        if let Ok(mut ring) = self.inner.lock() {
            for &s in chunk {
                ring.push_back(s);
            }
            while ring.len() > self.capacity {
                ring.pop_front();
            }
        }
    }

    /// Copy the buffered samples, oldest first, into `out`.
    pub fn snapshot(&self, out: &mut Vec<f32>) {
        out.clear();
        if let Ok(ring) = self.inner.lock() {
            out.extend(ring.iter().copied());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut ring) = self.inner.lock() {
            ring.clear();
        }
    }
}

/// Pass-through source adapter feeding a `TapBuffer`.
pub(super) struct SpectrumTap<S> {
    inner: S,
    buffer: TapBuffer,
    pending: Vec<f32>,
}

impl<S> SpectrumTap<S> {
    pub(super) fn new(inner: S, buffer: TapBuffer) -> Self {
        Self {
            inner,
            buffer,
            pending: Vec::with_capacity(FLUSH_CHUNK),
        }
    }
}

impl<S> Iterator for SpectrumTap<S>
where
    S: Source,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        match self.inner.next() {
            Some(sample) => {
                self.pending.push(sample);
                if self.pending.len() >= FLUSH_CHUNK {
                    self.buffer.extend(&self.pending);
                    self.pending.clear();
                }
                Some(sample)
            }
            None => {
                if !self.pending.is_empty() {
                    self.buffer.extend(&self.pending);
                    self.pending.clear();
                }
                None
            }
        }
    }
}

impl<S> Source for SpectrumTap<S>
where
    S: Source,
{
    fn current_span_len(&self) -> Option<usize> {
        self.inner.current_span_len()
    }

    fn channels(&self) -> rodio::ChannelCount {
        self.inner.channels()
    }

    fn sample_rate(&self) -> rodio::SampleRate {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }
}

/// Hann-windowed FFT folded into a fixed number of linear bands.
pub struct SpectrumAnalyzer {
    fft_size: usize,
    window: Vec<f32>,
    window_sum: f32,
    input: Vec<Complex<f32>>,
    output: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
}

impl SpectrumAnalyzer {
    pub fn new(fft_size: usize, bands: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);

        let mut window = Vec::with_capacity(fft_size);
        for i in 0..fft_size {
            let w = 0.5 - 0.5 * (2.0 * std::f32::consts::PI * i as f32 / fft_size as f32).cos();
            window.push(w);
        }
        let window_sum: f32 = window.iter().sum::<f32>().max(f32::EPSILON);

        Self {
            fft_size,
            window,
            window_sum,
            input: vec![Complex::new(0.0, 0.0); fft_size],
            output: vec![SILENCE_DB; bands.max(1)],
            fft,
        }
    }

    pub fn bands(&self) -> usize {
        self.output.len()
    }

    /// Fold `samples` into per-band magnitudes in dBFS, clamped to
    /// [−60, 0]. Uses the most recent `fft_size` samples; shorter input is
    /// zero-padded. Silence (or no input) yields a full −60 dB frame.
    pub fn compute(&mut self, samples: &[f32]) -> &[f32] {
        self.output.fill(SILENCE_DB);
        if samples.is_empty() {
            return &self.output;
        }

        let len = samples.len().min(self.fft_size);
        let tail = &samples[samples.len() - len..];
        for i in 0..len {
            self.input[i].re = tail[i] * self.window[i];
            self.input[i].im = 0.0;
        }
        for i in len..self.fft_size {
            self.input[i] = Complex::new(0.0, 0.0);
        }

        self.fft.process(&mut self.input);

        // Fold the positive-frequency bins into bands, skipping DC. Bands
        // past the available bins stay at the silence floor.
        let bins = self.fft_size / 2;
        let bands = self.output.len();
        let per_band = (bins / bands).max(1);

        for b in 0..bands {
            let start = b * per_band;
            if start >= bins {
                break;
            }
            let end = ((b + 1) * per_band).min(bins);

            let mut peak = 0.0f32;
            for k in start..end {
                peak = peak.max(self.input[k + 1].norm());
            }

            // A full-scale sine at an exact bin comes out at 0 dBFS.
            let amplitude = 2.0 * peak / self.window_sum;
            let db = 20.0 * (amplitude + 1e-9).log10();
            self.output[b] = db.clamp(SILENCE_DB, 0.0);
        }

        &self.output
    }
}
