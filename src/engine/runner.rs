//! Subprocess execution with captured output and a wall-clock timeout

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{IconPortError, IconPortResult};

/// How often the runner polls a child for exit while the deadline has not passed
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Captured result of a finished converter run
#[derive(Debug)]
pub struct ToolOutput {
    /// Exit status of the converter process
    pub status: ExitStatus,
    /// Captured standard output
    pub stdout: Vec<u8>,
    /// Captured standard error
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    /// Stderr as lossy UTF-8, trimmed, for embedding in error messages
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

/// Run a converter as `<tool> <source> <dest>` and wait for it to finish.
///
/// Stdout and stderr are drained on background threads so a chatty tool can
/// never deadlock on a full pipe buffer; neither stream reaches the terminal.
/// If the process outlives `timeout` it is killed, reaped, and the call fails
/// with [`IconPortError::ToolTimeout`].
pub fn run_converter(
    tool: &Path,
    source: &Path,
    dest: &Path,
    timeout: Duration,
) -> IconPortResult<ToolOutput> {
    let tool_name = tool
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| tool.display().to_string());

    debug!(
        "Running {} {} {}",
        tool.display(),
        source.display(),
        dest.display()
    );

    let mut child = Command::new(tool)
        .arg(source)
        .arg(dest)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IconPortError::ToolNotFound { tool: tool_name.clone() }
            } else {
                IconPortError::IoError(e)
            }
        })?;

    let stdout_reader = drain_pipe(child.stdout.take());
    let stderr_reader = drain_pipe(child.stderr.take());

    let status = wait_with_deadline(&mut child, &tool_name, timeout)?;

    let stdout = join_pipe(stdout_reader);
    let stderr = join_pipe(stderr_reader);

    debug!("{} exited with {}", tool_name, status);

    Ok(ToolOutput {
        status,
        stdout,
        stderr,
    })
}

/// Poll the child until it exits or the deadline passes; kill on expiry
fn wait_with_deadline(
    child: &mut Child,
    tool_name: &str,
    timeout: Duration,
) -> IconPortResult<ExitStatus> {
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }

        if Instant::now() >= deadline {
            warn!("{} exceeded {}s limit, terminating", tool_name, timeout.as_secs());
            // Kill can only fail if the child already exited; reap either way
            let _ = child.kill();
            let _ = child.wait();
            return Err(IconPortError::ToolTimeout {
                tool: tool_name.to_string(),
                seconds: timeout.as_secs(),
            });
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Read a captured pipe to EOF on a background thread
fn drain_pipe<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut stream| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stream.read_to_end(&mut buf);
            buf
        })
    })
}

/// Collect the bytes a drain thread read; an empty capture on panic
fn join_pipe(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}
