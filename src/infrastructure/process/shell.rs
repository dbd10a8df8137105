//! Shell Command Runner
//!
//! Runs each command line with `sh -c` in a fresh process group so that a
//! timeout can take down the whole tree, including anything pdflatex spawns
//! through `--enable-write18`.
//!
//! The timeout bounds the output as well as the shell: a background process
//! that keeps stdout open past the deadline is terminated with the group.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use wait_timeout::ChildExt;

use crate::domain::ports::{CommandRunner, ProcessResult, TIMEOUT_EXIT_CODE};
use crate::error::{TexmgrError, TexmgrResult};

/// Runs commands through a POSIX shell
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }

    /// Use a different shell binary (must accept `-c <command>`)
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, timeout: Duration) -> TexmgrResult<ProcessResult> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let deadline = Instant::now() + timeout;
        let mut child = cmd.spawn().map_err(|source| TexmgrError::Spawn {
            command: command.to_string(),
            source,
        })?;

        // Drain both pipes concurrently so a chatty compiler cannot block on a full pipe.
        let mut capture = Capture::start(&mut child);

        // The pipes stay open while any process in the group holds them, so
        // the first deadline covers both the shell and its output.
        let exited = child.wait_timeout(timeout)?;
        if let Some(status) = exited {
            if capture.wait_until(deadline) {
                return Ok(ProcessResult::new(
                    exit_code(status),
                    capture.stdout,
                    capture.stderr,
                ));
            }
        }

        terminate_group(&mut child);
        let grace = Instant::now() + timeout;
        let reaped = exited.is_some() || child.wait_timeout(timeout)?.is_some();
        if !reaped || !capture.wait_until(grace) {
            kill_group(&mut child);
            return Err(TexmgrError::Unreaped {
                command: command.to_string(),
            });
        }

        Ok(ProcessResult::new(
            TIMEOUT_EXIT_CODE,
            capture.stdout,
            capture.stderr,
        ))
    }
}

#[derive(Debug, Clone, Copy)]
enum Pipe {
    Stdout,
    Stderr,
}

/// Output collected from the child's pipes by reader threads
struct Capture {
    results: Receiver<(Pipe, String)>,
    pending: usize,
    stdout: String,
    stderr: String,
}

impl Capture {
    fn start(child: &mut Child) -> Self {
        let (tx, results) = mpsc::channel();
        let pending = drain(child.stdout.take(), Pipe::Stdout, &tx)
            + drain(child.stderr.take(), Pipe::Stderr, &tx);

        Self {
            results,
            pending,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Wait for every pipe to reach EOF. Returns `false` if `deadline` passes first.
    fn wait_until(&mut self, deadline: Instant) -> bool {
        while self.pending > 0 {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.results.recv_timeout(left) {
                Ok((Pipe::Stdout, text)) => self.stdout = text,
                Ok((Pipe::Stderr, text)) => self.stderr = text,
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => break,
            }
            self.pending -= 1;
        }
        true
    }
}

fn drain<R>(pipe: Option<R>, which: Pipe, results: &Sender<(Pipe, String)>) -> usize
where
    R: Read + Send + 'static,
{
    let Some(mut pipe) = pipe else {
        return 0;
    };
    let results = results.clone();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = results.send((which, String::from_utf8_lossy(&buf).into_owned()));
    });
    1
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

/// Send SIGTERM to the child's whole process group
fn terminate_group(child: &mut Child) {
    signal_group(child, "-TERM");
}

/// Send SIGKILL to whatever is left of the process group
fn kill_group(child: &mut Child) {
    signal_group(child, "-KILL");
}

#[cfg(unix)]
fn signal_group(child: &mut Child, signal: &str) {
    let group = format!("-{}", child.id());
    let signalled = Command::new("kill")
        .args([signal, "--", group.as_str()])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    if !signalled {
        let _ = child.kill();
    }
}

#[cfg(not(unix))]
fn signal_group(child: &mut Child, _signal: &str) {
    let _ = child.kill();
}
