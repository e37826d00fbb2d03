use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/spiro/config.toml` or `~/.config/spiro/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SPIRO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub visualizer: VisualizerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            playback: PlaybackSettings::default(),
            library: LibrarySettings::default(),
            visualizer: VisualizerSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Initial window width in logical points.
    pub width: f32,
    /// Initial window height in logical points.
    pub height: f32,
    /// Window title.
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            title: "spiro".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether repeat starts enabled.
    pub repeat: bool,
    /// Initial output volume, 0.0..=1.0.
    pub volume: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            repeat: false,
            volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    /// Also used as the file-picker filter.
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when scanning a folder.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether folder adds recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Width of one spectrum bar in points.
    pub bar_width: f32,
    /// Gap between bars in points.
    pub bar_gap: f32,
    /// Number of frequency bands the analyzer produces per frame.
    pub bands: usize,
    /// FFT window size in samples. Must be a power of two.
    pub fft_size: usize,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            bar_width: 25.0,
            bar_gap: 5.0,
            bands: 128,
            fft_size: 2048,
        }
    }
}
