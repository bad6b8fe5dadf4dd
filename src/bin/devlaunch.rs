// src/bin/devlaunch.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use devlaunch::{
    cli::Cli,
    core::{config_loader, plan},
    models::{LaunchPlan, Platform},
    system::{executor, platform},
    t,
};
use std::env;

/// Sets up logging, runs the launcher, and turns any launcher-side error into a red
/// `Error:` line with exit code 1.
///
/// The child's own exit code is only reported, never adopted.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {:#}", t!("cli.error.prefix").red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let cwd = env::current_dir().context(t!("cli.error.launch_failed"))?;
    let config = config_loader::load_config(cli.config.as_deref(), &cwd)
        .context(t!("cli.error.launch_failed"))?;
    let platform = platform::detect();
    let plan = plan::build_plan(&platform, &config, &cli.dev_args, &cwd)
        .context(t!("cli.error.launch_failed"))?;
    log::debug!("Launch plan: {:?}", plan);

    if cli.print {
        print_plan(&platform, &plan);
        return Ok(());
    }

    // Spawn failures and the exit code are both reported by the observer; neither is an
    // error for the launcher.
    executor::launch(&plan, &mut executor::ConsoleObserver);
    Ok(())
}

fn print_plan(platform: &Platform, plan: &LaunchPlan) {
    println!(t!("print.platform"), platform = platform.to_string().cyan());
    println!(t!("print.program"), program = plan.program.yellow().bold());
    println!(t!("print.args"), args = format!("{:?}", plan.args));
    for (key, value) in &plan.env {
        println!(t!("print.env"), key = key.dimmed(), value = value);
    }
}
