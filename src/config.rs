use crate::render::Color;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

/// The default palette, one color per card.
const DEFAULT_COLORS: [Color; 5] = [
    Color::new(0xf4, 0x43, 0x36),
    Color::new(0x00, 0x4d, 0x40),
    Color::new(0xff, 0xd6, 0x00),
    Color::new(0x00, 0xc8, 0x53),
    Color::new(0x62, 0x00, 0xea),
];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub palette: PaletteConfig,

    #[serde(default)]
    pub card: CardConfig,
}

impl Config {
    /// Load the config from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.into(), source })?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a YAML config.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// The path the config is looked up in when none is given explicitly.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "solitaire-cards").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let AnimationConfig { step, tick_delay_ms } = self.animation;
        // smaller steps are lost to rounding before the value gets past 1
        if !(step >= f32::EPSILON && step <= 1.0) {
            return Err(ConfigError::InvalidStep(step));
        }
        if tick_delay_ms == 0 {
            return Err(ConfigError::ZeroTickDelay);
        }
        if self.palette.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (name, value) in [("width_factor", self.card.width_factor), ("height_factor", self.card.height_factor)] {
            if !(value >= 1.0 && value.is_finite()) {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }
        Ok(())
    }
}

/// The animation timing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// How much a card's interpolation value moves on every tick.
    #[serde(default = "default_step")]
    pub step: f32,

    /// The delay between two ticks, in milliseconds.
    #[serde(default = "default_tick_delay_ms")]
    pub tick_delay_ms: u64,
}

impl AnimationConfig {
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { step: default_step(), tick_delay_ms: default_tick_delay_ms() }
    }
}

fn default_step() -> f32 {
    // each of the 3 drawing stages takes 50 ticks
    0.02 / 3.0
}

fn default_tick_delay_ms() -> u64 {
    20
}

/// The colors cards are drawn with.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    /// One color per card. The number of colors is the number of cards.
    #[serde(default = "default_colors")]
    pub colors: Vec<Color>,

    #[serde(default = "default_background")]
    pub background: Color,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self { colors: default_colors(), background: default_background() }
    }
}

fn default_colors() -> Vec<Color> {
    DEFAULT_COLORS.to_vec()
}

fn default_background() -> Color {
    Color::new(0xbd, 0xbd, 0xbd)
}

/// The card's size relative to the terminal.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CardConfig {
    /// The terminal width is divided by this to get the card's width.
    #[serde(default = "default_width_factor")]
    pub width_factor: f32,

    /// The terminal height is divided by this to get the card's height.
    #[serde(default = "default_height_factor")]
    pub height_factor: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self { width_factor: default_width_factor(), height_factor: default_height_factor() }
    }
}

fn default_width_factor() -> f32 {
    2.2
}

fn default_height_factor() -> f32 {
    1.6
}

/// Errors that can occur when loading the config.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("animation step must be in [f32::EPSILON, 1], got {0}")]
    InvalidStep(f32),

    #[error("tick delay must be at least 1ms")]
    ZeroTickDelay,

    #[error("palette needs at least one color")]
    EmptyPalette,

    #[error("card {name} must be at least 1, got {value}")]
    InvalidFactor { name: &'static str, value: f32 },
}
