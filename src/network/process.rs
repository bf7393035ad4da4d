//! External command execution with explicit timeouts.
//!
//! Every platform command (`netsh`, `dhclient`) runs through
//! [`CommandRunner`], which captures exit status, stdout, and stderr and
//! converts any failure into a [`PlatformError`] value. A hung command is
//! killed after the configured timeout instead of blocking the caller
//! indefinitely.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use super::PlatformError;

/// Poll interval while waiting for a child process to exit.
const WAIT_POLL: Duration = Duration::from_millis(25);

/// Runs external commands with captured output and a hard timeout.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
}

impl CommandRunner {
    /// Creates a runner that kills commands exceeding `timeout`.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs `program` with `args`, returning captured stdout on success.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Launch`] when the program cannot be spawned.
    /// - [`PlatformError::Timeout`] when it does not exit in time (the
    ///   child is killed first).
    /// - [`PlatformError::CommandFailed`] on a non-zero exit status, with
    ///   captured stderr in the message.
    pub fn run(&self, program: &str, args: &[&str]) -> Result<String, PlatformError> {
        tracing::debug!(program, ?args, "Running platform command");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PlatformError::Launch {
                program: program.to_string(),
                source,
            })?;

        // Drain both pipes on background threads so a chatty child cannot
        // deadlock against a full pipe buffer while we poll for exit.
        let stdout = drain_pipe(child.stdout.take());
        let stderr = drain_pipe(child.stderr.take());

        let status = self.wait_with_deadline(&mut child, program)?;
        let stdout = join_pipe(stdout);
        let stderr = join_pipe(stderr);

        if status.success() {
            Ok(stdout)
        } else {
            Err(PlatformError::CommandFailed {
                program: program.to_string(),
                code: status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            })
        }
    }

    /// Polls the child until exit or deadline; kills it on timeout.
    fn wait_with_deadline(
        &self,
        child: &mut Child,
        program: &str,
    ) -> Result<std::process::ExitStatus, PlatformError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(PlatformError::Timeout {
                            program: program.to_string(),
                            seconds: self.timeout.as_secs(),
                        });
                    }
                    std::thread::sleep(WAIT_POLL);
                }
                Err(source) => {
                    return Err(PlatformError::Launch {
                        program: program.to_string(),
                        source,
                    });
                }
            }
        }
    }
}

/// Spawns a thread reading a child pipe to the end.
fn drain_pipe<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut reader| {
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = reader.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

/// Collects a drained pipe, tolerating a panicked reader thread.
fn join_pipe(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> CommandRunner {
        CommandRunner::new(Duration::from_secs(5))
    }

    #[test]
    #[cfg(unix)]
    fn run_captures_stdout_on_success() {
        let out = runner().run("sh", &["-c", "echo hello"]).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[test]
    #[cfg(unix)]
    fn run_reports_exit_code_and_stderr() {
        let err = runner()
            .run("sh", &["-c", "echo broken >&2; exit 3"])
            .unwrap_err();

        match err {
            PlatformError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, 3);
                assert_eq!(stderr, "broken");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn run_times_out_and_kills_the_child() {
        let runner = CommandRunner::new(Duration::from_millis(100));
        let started = Instant::now();
        let err = runner.run("sleep", &["30"]).unwrap_err();

        assert!(matches!(err, PlatformError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn run_missing_program_is_a_launch_error() {
        let err = runner()
            .run("definitely-not-a-real-program-xyz", &[])
            .unwrap_err();
        assert!(matches!(err, PlatformError::Launch { .. }));
    }
}
