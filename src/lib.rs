//! rsvp-video turns text into a rapid serial visual presentation video.
//!
//! Each word is shown alone, centered on a focal point, for a window derived from a target
//! words-per-minute rate. Nothing is rendered in-process: the crate builds one `ffmpeg` filter
//! chain (a `drawtext` per word, gated on the playback clock) and runs the system `ffmpeg`.
//!
//! # Pipeline overview
//!
//! 1. **Tokenize**: text -> words ([`split_words`])
//! 2. **Time**: words -> contiguous half-open windows ([`build_timeline`])
//! 3. **Serialize**: [`RenderSpec`] -> filter chain ([`build_filter_chain`])
//! 4. **Encode**: run `ffmpeg` over a solid-color canvas ([`encode()`])
//!
//! [`PreparedRender`] runs steps 1-3 from resolved [`Settings`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod config;
mod encode;
mod filter;
mod font;
mod foundation;
mod pipeline;
mod render;
mod text;
mod timing;

pub use color::{Color, ColorSpec};
pub use config::{CONFIG_FILE_NAME, ConfigLayer, Settings, default_config_path};
pub use encode::ffmpeg::{
    EncodeConfig, encode, ensure_parent_dir, ffmpeg_command, is_ffmpeg_on_path,
};
pub use filter::{
    Decorations, WpmBadge, build_filter_chain, enable_window, escape_filter_value, format_secs,
};
pub use font::{platform_candidates, resolve_font};
pub use foundation::error::{RsvpError, RsvpResult};
pub use pipeline::{PreparedRender, RenderRequest};
pub use render::RenderSpec;
pub use text::{ends_sentence, split_words};
pub use timing::{
    LONG_WORD_CHARS, MIN_WORD_SECS, TimedWord, TimingOpts, WordStyle, build_timeline,
    total_duration,
};
