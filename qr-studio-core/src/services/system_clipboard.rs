//! Clipboard backed by the platform clipboard utilities.

use std::process::Stdio;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{StudioError, StudioResult};
use crate::traits::Clipboard;

/// An external program that reads clipboard text from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Writes text through the first clipboard utility that succeeds.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: Vec<ClipboardCommand>,
}

impl SystemClipboard {
    /// Candidates for the current platform
    pub fn new() -> Self {
        Self {
            candidates: platform_candidates(),
        }
    }

    /// Use an explicit candidate list
    pub fn with_commands(candidates: Vec<ClipboardCommand>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[ClipboardCommand] {
        &self.candidates
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn platform_candidates() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        vec![ClipboardCommand::new("pbcopy", &[])]
    } else if cfg!(windows) {
        vec![ClipboardCommand::new("clip", &[])]
    } else {
        vec![
            ClipboardCommand::new("wl-copy", &[]),
            ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
            ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

async fn pipe_to(command: &ClipboardCommand, text: &str) -> Result<(), String> {
    let program = &command.program;
    let mut child = Command::new(program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("{program}: {e}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| format!("{program}: {e}"))?;
        // stdin 必须在 wait 之前关闭，否则工具会一直等待输入
        drop(stdin);
    }

    let status = child.wait().await.map_err(|e| format!("{program}: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{program} exited with {status}"))
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> StudioResult<()> {
        let mut failures = Vec::new();

        for command in &self.candidates {
            match pipe_to(command, text).await {
                Ok(()) => {
                    debug!("[Clipboard] Wrote {} chars via {}", text.chars().count(), command.program);
                    return Ok(());
                }
                Err(e) => {
                    debug!("[Clipboard] {e}");
                    failures.push(e);
                }
            }
        }

        warn!("[Clipboard] No clipboard utility succeeded");
        if failures.is_empty() {
            Err(StudioError::Clipboard("no clipboard utility configured".to_string()))
        } else {
            Err(StudioError::Clipboard(failures.join("; ")))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn platform_has_candidates() {
        assert!(!SystemClipboard::new().candidates().is_empty());
    }

    #[tokio::test]
    async fn empty_candidate_list_fails() {
        let clipboard = SystemClipboard::with_commands(Vec::new());
        let err = clipboard.write_text("hello").await.unwrap_err();
        assert!(matches!(err, StudioError::Clipboard(_)));
    }

    #[tokio::test]
    async fn missing_program_is_reported() {
        let clipboard = SystemClipboard::with_commands(vec![ClipboardCommand::new(
            "qr-studio-definitely-not-a-clipboard",
            &[],
        )]);
        let err = clipboard.write_text("hello").await.unwrap_err();
        assert!(err.to_string().contains("qr-studio-definitely-not-a-clipboard"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn falls_through_to_next_candidate() {
        let clipboard = SystemClipboard::with_commands(vec![
            ClipboardCommand::new("false", &[]),
            ClipboardCommand::new("cat", &[]),
        ]);
        clipboard.write_text("https://qr.test/start/qr-123").await.unwrap();
    }
}
