//! Serialize a [`RenderSpec`] into one `ffmpeg` video filter chain.
//!
//! The chain is linear (`a,b,c`) so every filter draws onto the same canvas in order:
//! background fill, optional focus lines, one gated `drawtext` per word, optional wpm badge.

use std::path::Path;

use crate::{color::Color, render::RenderSpec, timing::TimedWord};

/// Font size of the wpm badge.
const BADGE_FONT_SIZE: u32 = 60;

/// Optional extras drawn around the words.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decorations {
    /// Draw guide lines around the focal point in this color.
    pub focus_lines: Option<Color>,
    /// Show the reading speed in the bottom-right corner.
    pub wpm_badge: Option<WpmBadge>,
}

/// Reading-speed label drawn for the whole video.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WpmBadge {
    /// Words per minute to print.
    pub wpm: f64,
    /// Label color.
    pub color: Color,
}

/// Build the full filter chain for `spec`, drawing text with the font file at `font`.
#[tracing::instrument(skip_all, fields(words = spec.words().len()))]
pub fn build_filter_chain(spec: &RenderSpec, font: &Path, deco: &Decorations) -> String {
    let font = escape_filter_value(&font.to_string_lossy());
    let mut filters = Vec::with_capacity(spec.words().len() + 6);

    filters.push(background_fill(spec.background()));
    if let Some(color) = deco.focus_lines {
        filters.extend(focus_lines(color));
    }
    filters.extend(spec.words().iter().map(|w| word_filter(w, &font)));
    if let Some(badge) = deco.wpm_badge {
        filters.push(wpm_badge(&badge, &font));
    }

    let chain = filters.join(",");
    tracing::debug!(filters = filters.len(), bytes = chain.len(), "filter chain built");
    chain
}

/// Full-frame, full-duration fill in the background color.
fn background_fill(color: Color) -> String {
    format!("drawbox=x=0:y=0:w=iw:h=ih:t=fill:color={color}")
}

fn focus_lines(color: Color) -> [String; 4] {
    [
        format!("drawbox=x=0:y=ih*0.2:w=iw:h=10:t=fill:color={color}"),
        format!("drawbox=x=0:y=ih*0.8:w=iw:h=10:t=fill:color={color}"),
        format!("drawbox=x=iw*0.4:y=ih*0.2:w=10:h=75:t=fill:color={color}"),
        format!("drawbox=x=iw*0.4:y=ih*0.8-75:w=10:h=75:t=fill:color={color}"),
    ]
}

fn word_filter(word: &TimedWord, font: &str) -> String {
    format!(
        "drawtext=fontfile='{font}':expansion=none:text='{text}':fontcolor={color}:fontsize={size}:\
         x=(w-text_w)*2/5:y=h/2-ascent:enable='{enable}'",
        text = escape_filter_value(&word.word),
        color = word.color,
        size = word.size,
        enable = enable_window(word.start, word.end),
    )
}

fn wpm_badge(badge: &WpmBadge, font: &str) -> String {
    format!(
        "drawtext=fontfile='{font}':expansion=none:text='{wpm} wpm':fontcolor={color}:\
         fontsize={BADGE_FONT_SIZE}:x=(w-text_w)*0.9:y=(h-text_h)*0.9",
        wpm = badge.wpm,
        color = badge.color,
    )
}

/// Half-open `[start, end)` gate on the playback clock.
pub fn enable_window(start: f64, end: f64) -> String {
    format!("gte(t,{})*lt(t,{})", format_secs(start), format_secs(end))
}

/// Seconds with microsecond precision, the form used for every boundary in the chain.
pub fn format_secs(value: f64) -> String {
    format!("{value:.6}")
}

/// Escape a value placed inside single quotes in a filter option.
///
/// `ffmpeg` unescapes twice: the graph parser strips the quotes, then the option parser reads the
/// value. `\` and `:` get an option-level backslash, which the quotes carry through literally. A
/// `'` becomes `\'` for the option parser, with the quote closed and reopened around it: `\'\''`.
pub fn escape_filter_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | ':' => {
                out.push('\\');
                out.push(c);
            }
            '\'' => out.push_str("\\'\\''"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/filter.rs"]
mod tests;
