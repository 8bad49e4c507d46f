use crate::command::core::DumpCommand;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Upper bound on captured standard output, 20 MiB.
pub const MAX_OUTPUT_BYTES: usize = 1024 * 1024 * 20;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to capture the output of {program}: {source}")]
    Capture {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    NonZero {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("{program} produced more than {} bytes of output", MAX_OUTPUT_BYTES)]
    OutputTooLarge { program: String },
}

/// Spawns the command and returns its captured standard output.
///
/// The output is treated as opaque bytes; whatever the dump tool emits is
/// handed back unparsed. Standard output is read incrementally and the child
/// is killed as soon as the size ceiling is exceeded, so an oversized dump is
/// never buffered whole in memory. There is no wall-clock timeout.
pub async fn run_command(command: &DumpCommand) -> Result<Vec<u8>, ExecError> {
    let spawn_error = |e: std::io::Error| ExecError::Spawn {
        program: command.program.clone(),
        source: e,
    };
    let capture_error = |e: std::io::Error| ExecError::Capture {
        program: command.program.clone(),
        source: e,
    };

    let mut child = Command::new(&command.program)
        .args(&command.args)
        .envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    let stdout_pipe = child
        .stdout
        .take()
        .ok_or_else(|| spawn_error(std::io::Error::other("stdout was not captured")))?;
    let mut stderr_pipe = child
        .stderr
        .take()
        .ok_or_else(|| spawn_error(std::io::Error::other("stderr was not captured")))?;

    // Stderr is drained on its own task so the child never blocks on a full
    // pipe buffer while stdout is being read.
    let stderr_task = tokio::spawn(async move {
        let mut stderr = Vec::new();
        let _ = stderr_pipe.read_to_end(&mut stderr).await;
        stderr
    });

    // Reading one byte past the ceiling detects overflow without buffering
    // the excess.
    let mut stdout = Vec::new();
    stdout_pipe
        .take(MAX_OUTPUT_BYTES as u64 + 1)
        .read_to_end(&mut stdout)
        .await
        .map_err(capture_error)?;

    if stdout.len() > MAX_OUTPUT_BYTES {
        let _ = child.kill().await;
        return Err(ExecError::OutputTooLarge {
            program: command.program.clone(),
        });
    }

    let status = child.wait().await.map_err(capture_error)?;
    let stderr = stderr_task.await.unwrap_or_default();
    if !status.success() {
        return Err(ExecError::NonZero {
            program: command.program.clone(),
            status,
            stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
        });
    }

    Ok(stdout)
}
