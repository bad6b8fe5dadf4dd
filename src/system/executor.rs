// src/system/executor.rs

use crate::models::LaunchPlan;
use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Failures of the child process itself. These are reported, never propagated.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("could not start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("lost track of '{program}' while waiting for it: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// How a launch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The child was never started, or could not be waited on.
    Failed,
    /// The child ran and exited. `None` when it was terminated by a signal.
    Exited(Option<i32>),
}

/// Receives the two reports a launch can produce. Exactly one of them fires per launch.
pub trait LaunchObserver {
    /// The child could not be started or waited on.
    fn on_error(&mut self, error: &LaunchError);
    /// The child exited with `code`.
    fn on_exit(&mut self, code: Option<i32>);
}

/// Prints the reports to the terminal: errors to stderr, the exit code to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl LaunchObserver for ConsoleObserver {
    fn on_error(&mut self, error: &LaunchError) {
        eprintln!("{}", error_report(error));
    }

    fn on_exit(&mut self, code: Option<i32>) {
        println!("{}", exit_report(code));
    }
}

/// The line printed when the child could not be started or waited on.
pub fn error_report(error: &LaunchError) -> String {
    format!(t!("launch.report.error"), message = error)
}

/// The line printed when the child exits. A missing code is shown as `null`.
pub fn exit_report(code: Option<i32>) -> String {
    match code {
        Some(code) => format!(t!("launch.report.exit"), code = code),
        None => format!(t!("launch.report.exit"), code = t!("launch.report.no_code")),
    }
}

/// Builds the `Command` for `plan`. All three standard streams are inherited so the dev
/// server talks to the terminal directly.
pub fn build_command(plan: &LaunchPlan) -> Command {
    let mut command = Command::new(&plan.program);
    command
        .args(&plan.args)
        .envs(&plan.env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Spawns the planned shell, blocks until it exits, and reports the outcome to `observer`.
///
/// Nothing is retried and no alternate shell is tried. The caller's own exit code is left
/// untouched.
pub fn launch<O: LaunchObserver + ?Sized>(plan: &LaunchPlan, observer: &mut O) -> LaunchOutcome {
    log::debug!("Spawning {:?} with args {:?}", plan.program, plan.args);

    let mut child = match build_command(plan).spawn() {
        Ok(child) => child,
        Err(e) => {
            log::debug!("Spawn of '{}' failed: {}", plan.program, e);
            observer.on_error(&LaunchError::Spawn {
                program: plan.program.clone(),
                source: e,
            });
            return LaunchOutcome::Failed;
        }
    };

    log::debug!("Child started (PID: {}).", child.id());

    match child.wait() {
        Ok(status) => {
            let code = status.code();
            if code.is_none() {
                log::warn!("Child was terminated without an exit code: {}", status);
            }
            observer.on_exit(code);
            LaunchOutcome::Exited(code)
        }
        Err(e) => {
            observer.on_error(&LaunchError::Wait {
                program: plan.program.clone(),
                source: e,
            });
            LaunchOutcome::Failed
        }
    }
}
