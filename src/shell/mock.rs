//! Recording tool runner for tests.
//!
//! `MockRunner` implements [`ToolRunner`] without spawning anything. It
//! records every invocation, can be told to fail or to refuse to launch
//! particular programs, and can run side-effect hooks (for example creating
//! the directory a real `python -m venv` would create).
//!
//! # Example
//!
//! ```
//! use venvctl::shell::{Invocation, MockRunner, ToolRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.fail_on("pip-sync", 1);
//!
//! runner.run(&Invocation::new("pip").arg("--version")).unwrap();
//! assert!(runner.run(&Invocation::new("venv/Scripts/pip-sync")).is_err());
//! assert_eq!(runner.invocations().len(), 2);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

use crate::error::{Result, VenvError};

use super::command::{Invocation, ToolRunner};

type Hook = Box<dyn FnMut(&Invocation) -> io::Result<()>>;

/// Recording [`ToolRunner`] for tests.
#[derive(Default)]
pub struct MockRunner {
    invocations: Vec<Invocation>,
    failures: HashMap<String, i32>,
    launch_errors: HashMap<String, io::ErrorKind>,
    outputs: HashMap<String, String>,
    hooks: Vec<Hook>,
}

impl fmt::Debug for MockRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockRunner")
            .field("invocations", &self.invocations)
            .field("failures", &self.failures)
            .field("launch_errors", &self.launch_errors)
            .field("outputs", &self.outputs)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl MockRunner {
    /// Create a runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make programs whose file name is `program` exit with `code`.
    pub fn fail_on(&mut self, program: &str, code: i32) {
        self.failures.insert(program.to_string(), code);
    }

    /// Make programs whose file name is `program` fail to launch.
    pub fn fail_launch(&mut self, program: &str, kind: io::ErrorKind) {
        self.launch_errors.insert(program.to_string(), kind);
    }

    /// Set the captured stdout for programs whose file name is `program`.
    pub fn set_output(&mut self, program: &str, stdout: &str) {
        self.outputs.insert(program.to_string(), stdout.to_string());
    }

    /// Run `hook` for every successful invocation.
    pub fn on_invoke<F>(&mut self, hook: F)
    where
        F: FnMut(&Invocation) -> io::Result<()> + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Emulate `python -m venv`: create the root with an executable
    /// directory named `bin_dir` holding an activation script.
    pub fn simulate_venv_creation(&mut self, bin_dir: &'static str) {
        self.on_invoke(move |invocation| {
            if !(invocation.has_arg("-m") && invocation.has_arg("venv")) {
                return Ok(());
            }
            let Some(root) = invocation.args.last() else {
                return Ok(());
            };
            let root = Path::new(root);
            let bin = root.join(bin_dir);
            std::fs::create_dir_all(&bin)?;
            std::fs::write(
                bin.join("activate"),
                format!(
                    "deactivate () {{\n    unset VIRTUAL_ENV\n}}\n\nVIRTUAL_ENV='{}'\nexport VIRTUAL_ENV\n",
                    root.display()
                ),
            )
        });
    }

    /// All recorded invocations, in order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// File names of the recorded programs, in order.
    pub fn programs(&self) -> Vec<String> {
        self.invocations.iter().map(program_name).collect()
    }

    /// Recorded invocations whose program file name is `program`.
    pub fn invocations_of(&self, program: &str) -> Vec<&Invocation> {
        self.invocations
            .iter()
            .filter(|i| program_name(i) == program)
            .collect()
    }

    fn record(&mut self, invocation: &Invocation) -> Result<()> {
        self.invocations.push(invocation.clone());
        let name = program_name(invocation);

        if let Some(kind) = self.launch_errors.get(&name) {
            return Err(VenvError::ToolLaunchFailed {
                command: invocation.display(),
                source: io::Error::from(*kind),
            });
        }

        if let Some(code) = self.failures.get(&name) {
            return Err(VenvError::ToolInvocationFailed {
                command: invocation.display(),
                code: Some(*code),
            });
        }

        for hook in &mut self.hooks {
            hook(invocation)?;
        }

        Ok(())
    }
}

impl ToolRunner for MockRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        self.record(invocation)
    }

    fn capture(&mut self, invocation: &Invocation) -> Result<String> {
        self.record(invocation)?;
        Ok(self
            .outputs
            .get(&program_name(invocation))
            .cloned()
            .unwrap_or_default())
    }
}

fn program_name(invocation: &Invocation) -> String {
    invocation
        .program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
