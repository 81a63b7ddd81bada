use crate::domain::model::{CaptureStream, CommandSpec};
use crate::domain::ports::CommandRunner;
use crate::utils::error::{ReadmeError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

#[cfg(unix)]
const NOT_FOUND_STATUS: i32 = 127;
#[cfg(windows)]
const NOT_FOUND_STATUS: i32 = 9009;

/// Runs command lines through the host shell and waits for them to finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
fn shell_command(script: &str, capture: CaptureStream) -> Command {
    let script = match capture {
        CaptureStream::Stdout => script.to_string(),
        CaptureStream::Combined => format!("exec 2>&1\n{}", script),
    };
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(script);
    cmd
}

#[cfg(windows)]
fn shell_command(script: &str, capture: CaptureStream) -> Command {
    let script = match capture {
        CaptureStream::Stdout => script.to_string(),
        CaptureStream::Combined => format!("({}) 2>&1", script),
    };
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(script);
    cmd
}

// A missing working directory also surfaces as NotFound at spawn time.
fn spawn_error(spec: &CommandSpec, e: std::io::Error) -> ReadmeError {
    match &spec.working_dir {
        Some(dir) if !Path::new(dir).is_dir() => ReadmeError::io(dir, e),
        _ if e.kind() == std::io::ErrorKind::NotFound => ReadmeError::CommandNotFound {
            command: spec.command_line.clone(),
        },
        Some(dir) => ReadmeError::io(dir, e),
        None => ReadmeError::io(spec.command_line.as_str(), e),
    }
}

impl CommandRunner for ShellCommandRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<Vec<u8>> {
        let mut cmd = shell_command(&spec.command_line, spec.capture);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        if let Some(dir) = &spec.working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!("Spawning `{}` ({:?})", spec.command_line, spec.capture);
        let output = cmd.output().await.map_err(|e| spawn_error(spec, e))?;

        match output.status.code() {
            Some(0) => {
                tracing::debug!("Captured {} bytes", output.stdout.len());
                Ok(output.stdout)
            }
            Some(NOT_FOUND_STATUS) => Err(ReadmeError::CommandNotFound {
                command: spec.command_line.clone(),
            }),
            code => Err(ReadmeError::CommandFailed {
                command: spec.command_line.clone(),
                code,
            }),
        }
    }
}
