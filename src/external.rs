use crate::command::Continuation;
use std::ffi::OsString;
use std::io::{self, ErrorKind, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use thiserror::Error;

/// How a child process stood when the wait on it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    /// The program exited on its own with this status code.
    Exited(i32),
    /// The program was killed by this signal.
    Signaled(i32),
    /// The program is suspended (by this signal) and still alive.
    Stopped(i32),
}

impl ChildOutcome {
    /// Only exits and kills end the wait; a stopped child is still running.
    ///
    /// This classifies a status only. [`ExternalCommand::run`] never sees a
    /// stopped status, since `Child::wait` keeps blocking through stops.
    pub fn is_terminal(self) -> bool {
        !matches!(self, ChildOutcome::Stopped(_))
    }
}

#[cfg(unix)]
impl From<ExitStatus> for ChildOutcome {
    fn from(status: ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            ChildOutcome::Exited(code)
        } else if let Some(signal) = status.signal() {
            ChildOutcome::Signaled(signal)
        } else {
            // Neither exited nor killed: the child is alive.
            ChildOutcome::Stopped(status.stopped_signal().unwrap_or(0))
        }
    }
}

#[cfg(not(unix))]
impl From<ExitStatus> for ChildOutcome {
    fn from(status: ExitStatus) -> Self {
        ChildOutcome::Exited(status.code().unwrap_or(-1))
    }
}

/// Failures while starting or waiting on an external program.
///
/// None of them is fatal to the shell.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("{program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program}: failed to create process: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program}: failed to wait for process: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Splits a spawn failure into "no process could be created at all"
    /// (out of processes or memory) and "the program could not be run".
    fn from_spawn(program: &str, source: io::Error) -> Self {
        let program = program.to_owned();
        match source.kind() {
            ErrorKind::WouldBlock | ErrorKind::OutOfMemory => {
                LaunchError::Spawn { program, source }
            }
            _ => LaunchError::Exec { program, source },
        }
    }
}

/// Command that is not a builtin.
///
/// The program name is handed to the OS as is; any `PATH` lookup is the one the
/// platform's process creation performs.
pub struct ExternalCommand {
    name: OsString,
    args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(name: OsString, args: Vec<OsString>) -> Self {
        Self { name, args }
    }

    /// Builds the command from an argument vector, `None` when it is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (name, args) = argv.split_first()?;
        Some(Self::new(
            name.into(),
            args.iter().map(|arg| arg.into()).collect(),
        ))
    }

    fn program(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// Starts the program with the shell's standard streams and environment.
    pub fn spawn(&self) -> Result<Child, LaunchError> {
        let child = Command::new(&self.name)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| LaunchError::from_spawn(&self.program(), e))?;
        log::debug!("spawned {} as pid {}", self.program(), child.id());
        Ok(child)
    }

    /// Runs the program to completion.
    ///
    /// `Child::wait` does not ask for stop notifications, so a suspended child
    /// keeps this call blocked until it is resumed and ends. There is no
    /// timeout: a child that never ends blocks forever.
    pub fn run(&self) -> Result<ChildOutcome, LaunchError> {
        let mut child = self.spawn()?;
        let status = child.wait().map_err(|source| LaunchError::Wait {
            program: self.program(),
            source,
        })?;
        let outcome = ChildOutcome::from(status);
        match outcome {
            ChildOutcome::Signaled(signal) => {
                log::info!("{} killed by signal {}", self.program(), signal)
            }
            _ => log::debug!("{} finished: {:?}", self.program(), outcome),
        }
        Ok(outcome)
    }
}

/// Runs `argv` as an external program and waits for it.
///
/// Always continues the shell: launch failures go to `stderr`, and the child's
/// exit status is not surfaced.
pub fn launch(argv: &[String], stderr: &mut dyn Write) -> Continuation {
    let Some(command) = ExternalCommand::from_argv(argv) else {
        return Continuation::Continue;
    };

    if let Err(e) = command.run() {
        log::warn!("launch failed: {}", e);
        // Nowhere left to report a failing error stream.
        let _ = writeln!(stderr, "lsh: {}", e);
        let _ = stderr.flush();
    }
    Continuation::Continue
}
