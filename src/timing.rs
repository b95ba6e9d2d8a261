//! Per-word display windows.
//!
//! Every word gets a half-open window `[start, end)`. Windows are contiguous, so `end` of word `i`
//! is the very same `f64` as `start` of word `i + 1`, and the last window ends exactly at the total
//! duration. This is what lets the filter chain guarantee "exactly one word on screen" without
//! any epsilon handling.

use serde::Serialize;

use crate::{
    color::Color,
    foundation::error::{RsvpError, RsvpResult},
    text::ends_sentence,
};

/// Shortest per-word window accepted. Boundaries are written with microsecond precision, so
/// windows must stay well above that to remain distinct.
pub const MIN_WORD_SECS: f64 = 0.001;

/// Words longer than this (in chars) are drawn smaller.
pub const LONG_WORD_CHARS: usize = 50;

/// How fast words are shown.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingOpts {
    /// Target reading speed in words per minute.
    pub wpm: f64,
    /// Explicit total duration in seconds. When set, the per-word duration is derived from it.
    pub duration_override: Option<f64>,
    /// Extra seconds appended to each sentence-ending word (after the first word).
    pub rest_secs: f64,
}

impl TimingOpts {
    /// Plain uniform timing at `wpm`.
    pub fn from_wpm(wpm: f64) -> Self {
        Self {
            wpm,
            duration_override: None,
            rest_secs: 0.0,
        }
    }

    /// Validate rate, override and rest values.
    pub fn validate(&self) -> RsvpResult<()> {
        if !self.wpm.is_finite() || self.wpm <= 0.0 {
            return Err(RsvpError::invalid_input(format!(
                "words per minute must be positive, got {}",
                self.wpm
            )));
        }
        if let Some(d) = self.duration_override
            && (!d.is_finite() || d <= 0.0)
        {
            return Err(RsvpError::invalid_input(format!(
                "duration must be positive, got {d}"
            )));
        }
        if !self.rest_secs.is_finite() || self.rest_secs < 0.0 {
            return Err(RsvpError::invalid_input(format!(
                "rest duration must be zero or positive, got {}",
                self.rest_secs
            )));
        }
        Ok(())
    }
}

/// Text style applied to every word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels for regular words.
    pub font_size: u32,
}

impl WordStyle {
    /// Font size for `word`; long words shrink to 4/5 so they fit the frame.
    pub fn size_for(&self, word: &str) -> u32 {
        if word.chars().count() > LONG_WORD_CHARS {
            self.font_size * 4 / 5
        } else {
            self.font_size
        }
    }
}

/// One word with its display window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimedWord {
    /// Word text, unescaped.
    pub word: String,
    /// Window start in seconds (inclusive).
    pub start: f64,
    /// Window end in seconds (exclusive).
    pub end: f64,
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: u32,
}

impl TimedWord {
    /// Window length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Compute the display window of every word.
///
/// Per-word duration is `60 / wpm`, or `(override - rests) / N` when a total duration is given.
/// Word `i` starts where word `i - 1` ended and the last word ends at the total duration.
#[tracing::instrument(skip(words, style), fields(word_count = words.len()))]
pub fn build_timeline(
    words: &[String],
    timing: &TimingOpts,
    style: &WordStyle,
) -> RsvpResult<Vec<TimedWord>> {
    if words.is_empty() {
        return Err(RsvpError::invalid_input("no words to show (input text is empty)"));
    }
    timing.validate()?;

    let rest_after = |i: usize, word: &str| i > 0 && timing.rest_secs > 0.0 && ends_sentence(word);
    let rests = words
        .iter()
        .enumerate()
        .filter(|(i, w)| rest_after(*i, w.as_str()))
        .count();
    let rest_total = timing.rest_secs * rests as f64;
    let n = words.len() as f64;

    let (per_word, total) = match timing.duration_override {
        None => {
            let per_word = 60.0 / timing.wpm;
            (per_word, per_word * n + rest_total)
        }
        Some(total) => {
            let speaking = total - rest_total;
            if speaking <= 0.0 {
                return Err(RsvpError::invalid_input(format!(
                    "duration {total}s leaves no time for words after {rests} sentence rests of {}s",
                    timing.rest_secs
                )));
            }
            (speaking / n, total)
        }
    };

    if !total.is_finite() {
        return Err(RsvpError::invalid_input(format!(
            "total duration is not representable ({} words at {} wpm)",
            words.len(),
            timing.wpm
        )));
    }
    if per_word < MIN_WORD_SECS {
        return Err(RsvpError::invalid_input(format!(
            "each word would be shown for {per_word}s, below the {MIN_WORD_SECS}s minimum"
        )));
    }

    let last = words.len() - 1;
    let mut timeline = Vec::with_capacity(words.len());
    let mut start = 0.0;
    let mut rests_so_far = 0usize;

    for (i, word) in words.iter().enumerate() {
        if rest_after(i, word.as_str()) {
            rests_so_far += 1;
        }
        let end = if i == last {
            total
        } else {
            (i + 1) as f64 * per_word + timing.rest_secs * rests_so_far as f64
        };

        timeline.push(TimedWord {
            word: word.clone(),
            start,
            end,
            color: style.color,
            size: style.size_for(word),
        });
        start = end;
    }

    tracing::debug!(per_word, total, rests, "timeline built");
    Ok(timeline)
}

/// Total duration covered by a timeline (end of its last window).
pub fn total_duration(timeline: &[TimedWord]) -> f64 {
    timeline.last().map_or(0.0, |w| w.end)
}

#[cfg(test)]
#[path = "../tests/unit/timing.rs"]
mod tests;
