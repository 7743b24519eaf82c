//! Clipboard utilities
//!
//! Copies text by piping it into the platform's clipboard command:
//! - macOS: `pbcopy`
//! - Linux: `wl-copy` (Wayland), falling back to `xclip`
//! - Windows: `clip`

use anyhow::{bail, Context, Result};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[cfg(target_os = "macos")]
const COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COMMANDS: &[(&str, &[&str])] = &[("wl-copy", &[]), ("xclip", &["-selection", "clipboard"])];

/// Copy `text` to the system clipboard
pub async fn copy(text: String) -> Result<()> {
    let mut last_error = None;

    for (program, args) in COMMANDS {
        match pipe_into(program, args, &text).await {
            Ok(()) => {
                log::debug!("Copied {} chars with {}", text.len(), program);
                return Ok(());
            }
            Err(e) => {
                log::debug!("Clipboard command {} failed: {:#}", program, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e),
        None => bail!("no clipboard command available"),
    }
}

async fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .with_context(|| format!("failed to start {}", program))?;

    let mut stdin = child
        .stdin
        .take()
        .with_context(|| format!("{} has no stdin", program))?;
    stdin.write_all(text.as_bytes()).await?;
    drop(stdin);

    let status = child.wait().await?;
    if !status.success() {
        bail!("{} exited with {}", program, status);
    }
    Ok(())
}
