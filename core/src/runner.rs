//! Command runner abstractions.

use crate::{Error, Invocation, Result};
use std::cell::RefCell;
use std::io::Write;
use std::process::Command;

/// Exit code reported for a finished command.
pub type StatusCode = i32;

/// Trait describing how delegated tasks are executed.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<StatusCode>;
}

/// Runs the command as a child process and waits for it.
///
/// The child inherits stdio. A child killed by a signal reports 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<StatusCode> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        tracing::info!(command = %invocation, dir = ?invocation.working_dir, "running");
        let status = command.status().map_err(|source| Error::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        let code = status.code().unwrap_or(1);
        if !status.success() {
            tracing::warn!(command = %invocation, code, "command exited unsuccessfully");
        }
        Ok(code)
    }
}

/// Prints the command instead of running it.
pub struct DryRunRunner<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> DryRunRunner<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> CommandRunner for DryRunRunner<W> {
    fn run(&self, invocation: &Invocation) -> Result<StatusCode> {
        let mut out = self.out.borrow_mut();
        match &invocation.working_dir {
            Some(dir) => writeln!(out, "would run: {invocation} (in {})", dir.display())?,
            None => writeln!(out, "would run: {invocation}")?,
        }
        Ok(0)
    }
}
