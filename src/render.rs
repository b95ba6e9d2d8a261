use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    color::Color,
    foundation::error::{RsvpError, RsvpResult},
    timing::{TimedWord, total_duration},
};

/// One video to encode: the timed words, the background and the output path.
///
/// Fields are private so the timeline invariants checked by [`RenderSpec::new`] hold for the
/// whole lifetime of the value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderSpec {
    words: Vec<TimedWord>,
    background: Color,
    out_path: PathBuf,
    duration_secs: f64,
}

impl RenderSpec {
    /// Validate a timeline and wrap it. The duration is the end of the last window.
    pub fn new(
        words: Vec<TimedWord>,
        background: Color,
        out_path: impl Into<PathBuf>,
    ) -> RsvpResult<Self> {
        let Some(first) = words.first() else {
            return Err(RsvpError::invalid_input("render needs at least one word"));
        };
        if first.start != 0.0 {
            return Err(RsvpError::invalid_input(format!(
                "timeline must start at 0, starts at {}",
                first.start
            )));
        }
        if let Some(w) = words.iter().find(|w| !(w.start < w.end)) {
            return Err(RsvpError::invalid_input(format!(
                "word {:?} has an empty window [{}, {})",
                w.word, w.start, w.end
            )));
        }
        if let Some(pair) = words.windows(2).find(|p| p[0].end != p[1].start) {
            return Err(RsvpError::invalid_input(format!(
                "timeline is not contiguous between {:?} and {:?}",
                pair[0].word, pair[1].word
            )));
        }

        let duration_secs = total_duration(&words);
        Ok(Self {
            words,
            background,
            out_path: out_path.into(),
            duration_secs,
        })
    }

    /// Timed words in display order.
    pub fn words(&self) -> &[TimedWord] {
        &self.words
    }

    /// Canvas background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Output video path.
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Video length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
