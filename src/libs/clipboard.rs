//! System clipboard access through the platform's clipboard programs.
//!
//! The report text is piped into an external program (`pbcopy`, `clip`,
//! `wl-copy`, `xclip`, `xsel`). Programs that are not installed are skipped;
//! the first one that starts decides the outcome. A failed copy is reported
//! once and never retried.

use super::config::{ClipboardConfig, Config};
use std::env::consts::OS;
use std::io;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard program available (tried: {0})")]
    Unavailable(String),
    #[error("{program} exited with {status}")]
    Failed { program: String, status: String },
    #[error("{program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Clipboard programs to try on the current platform, in order.
pub fn platform_candidates() -> Vec<ClipboardConfig> {
    let command = |program: &str, args: &[&str]| ClipboardConfig {
        program: program.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
    };

    match OS {
        "macos" => vec![command("pbcopy", &[])],
        "windows" => vec![command("clip", &[])],
        _ => vec![
            command("wl-copy", &[]),
            command("xclip", &["-selection", "clipboard"]),
            command("xsel", &["--clipboard", "--input"]),
        ],
    }
}

/// Copies `text` to the clipboard using the configured program, or the
/// platform defaults when none is configured.
pub async fn copy_to_clipboard(text: &str, config: &Config) -> Result<(), ClipboardError> {
    let candidates = match &config.clipboard {
        Some(clipboard) => vec![clipboard.clone()],
        None => platform_candidates(),
    };

    for candidate in &candidates {
        match pipe_into(candidate, text).await {
            Err(ClipboardError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(program = %candidate.program, "clipboard program not found");
            }
            result => {
                tracing::debug!(program = %candidate.program, ok = result.is_ok(), "clipboard write finished");
                return result;
            }
        }
    }

    let tried = candidates.iter().map(|c| c.program.as_str()).collect::<Vec<_>>().join(", ");
    Err(ClipboardError::Unavailable(tried))
}

async fn pipe_into(command: &ClipboardConfig, text: &str) -> Result<(), ClipboardError> {
    let io_error = |source| ClipboardError::Io {
        program: command.program.clone(),
        source,
    };

    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(io_error)?;

    // stdin is closed on drop so the program sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()).await,
        None => Ok(()),
    };

    if let Err(source) = written {
        // kill() also reaps the child
        if let Err(err) = child.kill().await {
            tracing::debug!(program = %command.program, %err, "clipboard program already gone");
        }
        return Err(io_error(source));
    }

    let status = child.wait().await.map_err(io_error)?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed {
            program: command.program.clone(),
            status: status.to_string(),
        })
    }
}
