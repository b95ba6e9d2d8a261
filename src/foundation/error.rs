/// Result alias used across the crate.
pub type RsvpResult<T> = Result<T, RsvpError>;

/// Errors surfaced while turning text into a render and handing it to `ffmpeg`.
#[derive(thiserror::Error, Debug)]
pub enum RsvpError {
    /// Empty text, a non-positive rate/duration, or an unusable output/canvas setting.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A color that is neither a known name, a hex value, nor an `rgb(r,g,b)` triple.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// `ffmpeg` is missing, failed to spawn, or exited unsuccessfully.
    #[error("external tool failure: {message}")]
    ExternalTool {
        /// Human-readable description, including captured stderr when available.
        message: String,
        /// Exit code reported by the process, if it exited normally.
        exit_code: Option<i32>,
    },

    /// The user config file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RsvpError {
    /// Build a [`RsvpError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`RsvpError::InvalidColor`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build a [`RsvpError::ExternalTool`] value.
    pub fn external_tool(msg: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::ExternalTool {
            message: msg.into(),
            exit_code,
        }
    }

    /// Build a [`RsvpError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// Usage errors map to `2`. A failed encoder propagates its own exit code when it fits in a
    /// process status byte; everything else is `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) | Self::InvalidColor(_) | Self::Config(_) => 2,
            Self::ExternalTool {
                exit_code: Some(code),
                ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            Self::ExternalTool { .. } | Self::Other(_) => 1,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
