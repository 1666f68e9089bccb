use crate::app::models::EncoderInvocation;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Locates and runs external programs.
pub trait CommandRunner {
    /// Resolves `program` through the executable search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Runs the command to completion and returns its stdout and stderr
    /// interleaved in the order they were written.
    fn run(&self, invocation: &EncoderInvocation) -> Result<Vec<u8>>;
}

/// Runs commands on the host system.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, invocation: &EncoderInvocation) -> Result<Vec<u8>> {
        let (mut reader, writer) = os_pipe::pipe().context("Failed to open output pipe")?;
        let stderr_writer = writer.try_clone().context("Failed to clone output pipe")?;

        // The Command owns the write ends; it must be dropped before reading
        // or the pipe never reaches EOF.
        let mut child = {
            let mut command = Command::new(&invocation.program);
            command
                .args(&invocation.args)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr_writer);
            command
                .spawn()
                .with_context(|| format!("Failed to start {}", invocation.program))?
        };

        let mut combined = Vec::new();
        reader
            .read_to_end(&mut combined)
            .with_context(|| format!("Failed to read output of {}", invocation.program))?;

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for {}", invocation.program))?;
        if !status.success() {
            log::debug!("{} exited with {}", invocation.program, status);
        }

        Ok(combined)
    }
}
