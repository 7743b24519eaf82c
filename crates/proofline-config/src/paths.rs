//! Cache directory path (release-build log files)
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.cache/proofline/`
//! - macOS: `~/Library/Caches/proofline/`
//! - Windows: `%LOCALAPPDATA%\proofline\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "proofline";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        if dirs::cache_dir().is_none() {
            return; // no HOME in this environment
        }
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }
}
