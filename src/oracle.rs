//! Language-model oracle — free-form Q&A via a local model subprocess.
//!
//! The gateway spawns the model runner (Ollama by default), feeds it the
//! prompt as an argument, and captures its output under a hard deadline.
//! Failures come back as [`OracleError`] values; the mentor renders them
//! into chat text so a broken or slow model never crashes the bot.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::OracleError;

/// Boundary trait for the language-model collaborator.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Send a prompt and wait for the completion text.
    async fn complete(&self, prompt: &str) -> Result<String, OracleError>;
}

/// Oracle backed by a local subprocess, `ollama run <model> <prompt>` by
/// default.
pub struct OllamaOracle {
    argv: Vec<String>,
    timeout: Duration,
}

impl OllamaOracle {
    pub fn new(model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            argv: vec!["ollama".to_string(), "run".to_string(), model.into()],
            timeout,
        }
    }

    /// Use a custom invocation instead of `ollama run <model>`. The prompt
    /// is appended as the final argument.
    pub fn from_argv(argv: Vec<String>, timeout: Duration) -> Self {
        Self { argv, timeout }
    }
}

#[async_trait]
impl Oracle for OllamaOracle {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let program = self.argv.first().map(String::as_str).unwrap_or("ollama");

        tracing::debug!(program, timeout = ?self.timeout, "Invoking oracle");

        let child = Command::new(program)
            .args(&self.argv[1..])
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            // Dropping the timed-out future kills the child (kill_on_drop).
            Err(_) => return Err(OracleError::Timeout(self.timeout)),
        };

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(OracleError::ProcessFailed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
