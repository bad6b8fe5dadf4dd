// src/models.rs

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{DEFAULT_DEV_COMMAND, DEFAULT_ENV_WRAPPER};

// --- PLATFORM ---

/// The host operating system, as far as shell selection is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Any Windows target. Selects PowerShell.
    Windows,
    /// macOS.
    MacOS,
    /// Linux.
    Linux,
    /// Any other target, identified by its `std::env::consts::OS` name.
    Other(String),
}

impl Platform {
    /// Maps an OS identifier (as found in `std::env::consts::OS`) to a `Platform`.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "windows" => Self::Windows,
            "macos" => Self::MacOS,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this platform gets the PowerShell command line.
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("windows"),
            Self::MacOS => f.write_str("macos"),
            Self::Linux => f.write_str("linux"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

// --- LAUNCH PLAN ---

/// A fully resolved child invocation: which shell to start, what to hand it,
/// and the variables set directly on its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// The shell program (`powershell` or `sh`).
    pub program: String,
    /// Arguments passed to the shell, ending in the command string.
    pub args: Vec<String>,
    /// Extra environment for the child. Ordered so output and tests are stable.
    pub env: BTreeMap<String, String>,
}

impl LaunchPlan {
    /// The command string given to the shell, i.e. the last argument.
    pub fn command_line(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }
}

// --- CONFIGURATION ---

/// Overrides read from `devlaunch.toml`. Every field is optional in the file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    /// The framework command, e.g. `next dev`.
    pub dev_command: String,
    /// Tool used to set `INIT_CWD` inline. An empty string disables the inline override.
    pub env_wrapper: String,
    /// Additional variables for the child process.
    pub env: BTreeMap<String, String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            dev_command: DEFAULT_DEV_COMMAND.to_string(),
            env_wrapper: DEFAULT_ENV_WRAPPER.to_string(),
            env: BTreeMap::new(),
        }
    }
}
