//! User settings: built-in defaults, an optional TOML file, and command-line flags.
//!
//! Precedence is flag > file > default, resolved per key by [`Settings::resolve`].

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{RsvpError, RsvpResult};

/// Name of the config file looked up in the home directory.
pub const CONFIG_FILE_NAME: &str = ".rsvp-video.toml";

/// One source of optional settings. The config file deserializes into this, and the CLI
/// builds one from the flags the user actually passed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    /// Words per minute.
    pub wpm: Option<f64>,
    /// Word color.
    pub text_color: Option<String>,
    /// Canvas color.
    pub bg_color: Option<String>,
    /// Focus line and badge color.
    pub secondary_color: Option<String>,
    /// Word font size in pixels.
    pub font_size: Option<u32>,
    /// Font file.
    pub font: Option<PathBuf>,
    /// Seconds of rest after sentence-ending words.
    pub rest: Option<f64>,
    /// Draw focus lines.
    pub focus_lines: Option<bool>,
    /// Draw the wpm badge.
    pub show_wpm: Option<bool>,
    /// Canvas width.
    pub width: Option<u32>,
    /// Canvas height.
    pub height: Option<u32>,
    /// Frame rate.
    pub fps: Option<u32>,
    /// Replace an existing output file.
    pub overwrite: Option<bool>,
}

impl ConfigLayer {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> RsvpResult<Self> {
        toml::from_str(s).map_err(|e| RsvpError::config(e.to_string()))
    }

    /// Load the config file.
    ///
    /// With `explicit`, that file must exist. Otherwise `~/.rsvp-video.toml` is used when present
    /// and an empty layer is returned when it is not.
    pub fn load(explicit: Option<&Path>) -> RsvpResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("no user config file");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config from {}", path.display()))
            .map_err(|e| RsvpError::config(format!("{e:#}")))?;
        let layer = Self::from_toml_str(&content).map_err(|e| match e {
            RsvpError::Config(msg) => {
                RsvpError::config(format!("{}: {}", path.display(), msg.trim()))
            }
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "loaded user config");
        Ok(layer)
    }
}

/// `~/.rsvp-video.toml`, if the home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Words per minute.
    pub wpm: f64,
    /// Word color, as written.
    pub text_color: String,
    /// Canvas color, as written.
    pub bg_color: String,
    /// Focus line and badge color, as written.
    pub secondary_color: String,
    /// Word font size in pixels.
    pub font_size: u32,
    /// Font file; `None` means pick a platform default.
    pub font: Option<PathBuf>,
    /// Seconds of rest after sentence-ending words.
    pub rest: f64,
    /// Draw focus lines.
    pub focus_lines: bool,
    /// Draw the wpm badge.
    pub show_wpm: bool,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Frame rate.
    pub fps: u32,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wpm: 300.0,
            text_color: "#ffffee".to_owned(),
            bg_color: "black".to_owned(),
            secondary_color: "#1a1911".to_owned(),
            font_size: 100,
            font: None,
            rest: 0.0,
            focus_lines: false,
            show_wpm: false,
            width: 1920,
            height: 1080,
            fps: 30,
            overwrite: false,
        }
    }
}

impl Settings {
    /// Merge layers over the defaults; `cli` wins over `file`.
    pub fn resolve(cli: ConfigLayer, file: ConfigLayer) -> Self {
        let d = Self::default();
        Self {
            wpm: cli.wpm.or(file.wpm).unwrap_or(d.wpm),
            text_color: cli.text_color.or(file.text_color).unwrap_or(d.text_color),
            bg_color: cli.bg_color.or(file.bg_color).unwrap_or(d.bg_color),
            secondary_color: cli
                .secondary_color
                .or(file.secondary_color)
                .unwrap_or(d.secondary_color),
            font_size: cli.font_size.or(file.font_size).unwrap_or(d.font_size),
            font: cli.font.or(file.font),
            rest: cli.rest.or(file.rest).unwrap_or(d.rest),
            focus_lines: cli.focus_lines.or(file.focus_lines).unwrap_or(d.focus_lines),
            show_wpm: cli.show_wpm.or(file.show_wpm).unwrap_or(d.show_wpm),
            width: cli.width.or(file.width).unwrap_or(d.width),
            height: cli.height.or(file.height).unwrap_or(d.height),
            fps: cli.fps.or(file.fps).unwrap_or(d.fps),
            overwrite: cli.overwrite.or(file.overwrite).unwrap_or(d.overwrite),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
