//! External tool execution.
//!
//! Every tool is described by an [`Invocation`] (argv, working directory,
//! environment) and executed through a [`ToolRunner`]. Operations take the
//! runner as a trait object so tests can record invocations instead of
//! spawning processes.

use crate::config::EnvSnapshot;
use crate::error::{Result, VenvError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

/// A fully described external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run.
    pub program: PathBuf,

    /// Arguments, excluding the program.
    pub args: Vec<OsString>,

    /// Working directory (inherits when `None`).
    pub cwd: Option<PathBuf>,

    /// Complete child environment (inherits when `None`).
    pub env: Option<EnvSnapshot>,
}

impl Invocation {
    /// Start describing an invocation of `program`.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Replace the child environment with `snapshot`.
    pub fn env(mut self, snapshot: &EnvSnapshot) -> Self {
        self.env = Some(snapshot.clone());
        self
    }

    /// Program and arguments as displayable strings.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }

    /// The command line as a single string, for messages.
    pub fn display(&self) -> String {
        self.argv().join(" ")
    }

    /// Whether any argument equals `needle`.
    pub fn has_arg(&self, needle: &str) -> bool {
        self.args.iter().any(|a| a == needle)
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        if let Some(env) = &self.env {
            cmd.env_clear();
            cmd.envs(env.iter());
        }

        cmd
    }
}

/// Executes external tools.
pub trait ToolRunner {
    /// Run with inherited stdio. Non-zero exit is an error.
    fn run(&mut self, invocation: &Invocation) -> Result<()>;

    /// Run with empty stdin and return captured stdout. Non-zero exit is
    /// an error.
    fn capture(&mut self, invocation: &Invocation) -> Result<String>;
}

/// [`ToolRunner`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        let start = Instant::now();
        let mut cmd = invocation.to_command();
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| VenvError::ToolLaunchFailed {
            command: invocation.display(),
            source,
        })?;

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            invocation.display(),
            status.code(),
            start.elapsed()
        );

        if status.success() {
            Ok(())
        } else {
            Err(VenvError::ToolInvocationFailed {
                command: invocation.display(),
                code: status.code(),
            })
        }
    }

    fn capture(&mut self, invocation: &Invocation) -> Result<String> {
        let mut cmd = invocation.to_command();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let output = cmd.output().map_err(|source| VenvError::ToolLaunchFailed {
            command: invocation.display(),
            source,
        })?;

        tracing::debug!(
            "{} exited with {:?}",
            invocation.display(),
            output.status.code()
        );

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(VenvError::ToolInvocationFailed {
                command: invocation.display(),
                code: output.status.code(),
            })
        }
    }
}
