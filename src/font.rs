use std::path::{Path, PathBuf};

use crate::foundation::error::{RsvpError, RsvpResult};

const LINUX_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

const MACOS_CANDIDATES: &[&str] = &[
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
];

/// Font file to draw text with: `explicit` if given (it must exist), otherwise the first
/// installed candidate for this OS.
pub fn resolve_font(explicit: Option<&Path>) -> RsvpResult<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(RsvpError::invalid_input(format!(
                "font file '{}' does not exist",
                path.display()
            )));
        }
        return Ok(path.to_path_buf());
    }

    let found = first_existing(&platform_candidates()).ok_or_else(|| {
        RsvpError::invalid_input(format!(
            "no default font found for {}; pass one with --font",
            std::env::consts::OS
        ))
    })?;
    tracing::info!(font = %found.display(), "using default font");
    Ok(found)
}

/// Default font locations for the current OS, most preferred first.
pub fn platform_candidates() -> Vec<PathBuf> {
    if cfg!(target_os = "windows") {
        let windir = std::env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_owned());
        let fonts = PathBuf::from(windir).join("Fonts");
        vec![fonts.join("msyh.ttc"), fonts.join("arial.ttf")]
    } else if cfg!(target_os = "macos") {
        MACOS_CANDIDATES.iter().map(PathBuf::from).collect()
    } else {
        LINUX_CANDIDATES.iter().map(PathBuf::from).collect()
    }
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.is_file()).cloned()
}

#[cfg(test)]
#[path = "../tests/unit/font.rs"]
mod tests;
