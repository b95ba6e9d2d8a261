use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    color::Color,
    config::Settings,
    encode::ffmpeg::{EncodeConfig, encode, ffmpeg_command},
    filter::{Decorations, WpmBadge, build_filter_chain},
    font::resolve_font,
    foundation::error::{RsvpError, RsvpResult},
    render::RenderSpec,
    text::split_words,
    timing::{TimingOpts, WordStyle, build_timeline},
};

/// Per-run inputs that are not user settings.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// Text to show.
    pub text: String,
    /// Output video path.
    pub out_path: PathBuf,
    /// Explicit total duration in seconds.
    pub duration: Option<f64>,
}

/// Everything needed to run `ffmpeg`, computed up front and without side effects.
#[derive(Clone, Debug)]
pub struct PreparedRender {
    /// Timed words, background and output.
    pub spec: RenderSpec,
    /// Composed filter chain handed to `ffmpeg -vf`.
    pub filter_chain: String,
    /// Canvas and overwrite policy.
    pub encode: EncodeConfig,
    /// Font file the words are drawn with.
    pub font: PathBuf,
}

impl PreparedRender {
    /// Tokenize, time and serialize `request` under `settings`.
    #[tracing::instrument(skip_all, fields(out = %request.out_path.display()))]
    pub fn prepare(request: &RenderRequest, settings: &Settings) -> RsvpResult<Self> {
        let text_color = parse_color("text", &settings.text_color)?;
        let background = parse_color("background", &settings.bg_color)?;
        let secondary = parse_color("secondary", &settings.secondary_color)?;

        if settings.font_size == 0 {
            return Err(RsvpError::invalid_input("font size must be non-zero"));
        }

        let encode = EncodeConfig {
            width: settings.width,
            height: settings.height,
            fps: settings.fps,
            overwrite: settings.overwrite,
        };
        encode.validate()?;

        let words = split_words(&request.text);
        let timing = TimingOpts {
            wpm: settings.wpm,
            duration_override: request.duration,
            rest_secs: settings.rest,
        };
        let style = WordStyle {
            color: text_color,
            font_size: settings.font_size,
        };
        let timeline = build_timeline(&words, &timing, &style)?;
        let spec = RenderSpec::new(timeline, background, &request.out_path)?;

        let font = resolve_font(settings.font.as_deref())?;
        let deco = Decorations {
            focus_lines: settings.focus_lines.then_some(secondary),
            wpm_badge: settings.show_wpm.then_some(WpmBadge {
                wpm: settings.wpm,
                color: secondary,
            }),
        };
        let filter_chain = build_filter_chain(&spec, &font, &deco);

        tracing::info!(
            words = spec.words().len(),
            wpm = settings.wpm,
            per_word_secs = spec.words()[0].duration(),
            duration_secs = spec.duration_secs(),
            "render prepared"
        );

        Ok(Self {
            spec,
            filter_chain,
            encode,
            font,
        })
    }

    /// The `ffmpeg` command this render would run.
    pub fn command(&self) -> Command {
        ffmpeg_command(&self.spec, &self.filter_chain, &self.encode)
    }

    /// Run `ffmpeg` and wait for it.
    pub fn render(&self) -> RsvpResult<()> {
        encode(&self.spec, &self.filter_chain, &self.encode)
    }

    /// Output video path.
    pub fn out_path(&self) -> &Path {
        self.spec.out_path()
    }
}

fn parse_color(role: &str, value: &str) -> RsvpResult<Color> {
    value.parse().map_err(|e| match e {
        RsvpError::InvalidColor(msg) => RsvpError::invalid_color(format!("{role} color {msg}")),
        other => other,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
