use std::{
    path::Path,
    process::{Command, Stdio},
};

use crate::{
    filter::format_secs,
    foundation::error::{RsvpError, RsvpResult},
    render::RenderSpec,
};

/// Canvas and output policy for the `ffmpeg` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Output frame rate.
    pub fps: u32,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 30,
            overwrite: false,
        }
    }
}

impl EncodeConfig {
    /// Reject canvases `ffmpeg` cannot encode with the default settings.
    pub fn validate(&self) -> RsvpResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RsvpError::invalid_input(
                "video width/height must be non-zero",
            ));
        }
        if self.fps == 0 {
            return Err(RsvpError::invalid_input("video fps must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            // yuv420p output needs even dimensions.
            return Err(RsvpError::invalid_input(
                "video width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }
}

/// Whether a working `ffmpeg` binary is on `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> RsvpResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// The `ffmpeg` command that renders `spec` with `filter_chain` applied to a solid-color canvas.
///
/// Nothing is spawned; see [`encode`].
pub fn ffmpeg_command(spec: &RenderSpec, filter_chain: &str, cfg: &EncodeConfig) -> Command {
    let mut cmd = Command::new("ffmpeg");
    cmd.args(["-hide_banner", "-loglevel", "error"]);
    cmd.arg(if cfg.overwrite { "-y" } else { "-n" });

    cmd.args([
        "-f",
        "lavfi",
        "-i",
        &format!(
            "color=c={}:s={}x{}:d={}:r={}",
            spec.background(),
            cfg.width,
            cfg.height,
            format_secs(spec.duration_secs()),
            cfg.fps
        ),
        "-vf",
        filter_chain,
        "-map",
        "0:v:0",
        "-c:v",
        "libx264",
        "-preset",
        "ultrafast",
        "-crf",
        "23",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ])
    .arg(spec.out_path());
    cmd
}

/// Run `ffmpeg` to completion and check its exit status.
///
/// Fails before spawning anything when the canvas is invalid, the output exists without
/// `overwrite`, or `ffmpeg` is not on `PATH`.
#[tracing::instrument(skip_all, fields(out = %spec.out_path().display()))]
pub fn encode(spec: &RenderSpec, filter_chain: &str, cfg: &EncodeConfig) -> RsvpResult<()> {
    cfg.validate()?;
    ensure_parent_dir(spec.out_path())?;

    if !cfg.overwrite && spec.out_path().exists() {
        return Err(RsvpError::invalid_input(format!(
            "output file '{}' already exists (pass --overwrite to replace it)",
            spec.out_path().display()
        )));
    }

    if !is_ffmpeg_on_path() {
        return Err(RsvpError::external_tool(
            "ffmpeg is required for video encoding, but was not found on PATH \
             (see https://ffmpeg.org/download.html)",
            None,
        ));
    }

    let mut cmd = ffmpeg_command(spec, filter_chain, cfg);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    tracing::debug!(args = cmd.get_args().count(), "spawning ffmpeg");
    let output = cmd.output().map_err(|e| {
        RsvpError::external_tool(
            format!("failed to spawn ffmpeg (is it installed and on PATH?): {e}"),
            None,
        )
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RsvpError::external_tool(
            format!("ffmpeg exited with status {}: {}", output.status, stderr.trim()),
            output.status.code(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
