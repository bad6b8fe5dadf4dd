// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// devlaunch: starts the framework's dev server through the platform's native shell.
///
/// With no arguments it runs `cross-env INIT_CWD=$PWD next dev`, through PowerShell on
/// Windows and through `sh -c` everywhere else, then reports the exit code.
///
/// Arguments after `--` are appended to the dev command:
/// - `devlaunch -- --port 4000`
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Print the selected shell invocation instead of running it.
    #[arg(long)]
    pub print: bool,

    /// Path to a config file. Defaults to `devlaunch.toml` in the current directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra arguments passed through to the dev command.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub dev_args: Vec<String>,
}
