//! Handing a finished render to the system `ffmpeg` binary.

/// `ffmpeg` command construction and execution.
pub mod ffmpeg;
