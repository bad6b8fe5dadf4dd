// src/core/plan.rs

//! Turns a platform and a config into the exact shell invocation for the dev server.
//!
//! Windows gets PowerShell, which first copies the current location into `$env:PWD` so
//! the inline `INIT_CWD=$PWD` override sees it. Every other platform gets `sh -c`.

use crate::{
    constants::{
        INIT_CWD_VAR, POSIX_SHELL, POSIX_SHELL_FLAG, WINDOWS_SHELL, WINDOWS_SHELL_FLAG,
    },
    models::{LaunchConfig, LaunchPlan, Platform},
};
use std::{borrow::Cow, collections::BTreeMap, path::Path};
use thiserror::Error;

/// Errors raised while assembling a launch plan.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Argument {0:?} cannot be passed through the shell.")]
    UnquotableArg(String),
}

/// Builds the launch plan for `platform`.
///
/// `extra_args` are appended to the dev command, quoted for the target shell.
/// `init_cwd` becomes the `INIT_CWD` variable set directly on the child. An `INIT_CWD`
/// entry in `config.env` replaces it, and the inline `INIT_CWD=$PWD` override is then left
/// out of the command so the configured value is what the dev server sees.
pub fn build_plan(
    platform: &Platform,
    config: &LaunchConfig,
    extra_args: &[String],
    init_cwd: &Path,
) -> Result<LaunchPlan, PlanError> {
    let mut dev_command = config.dev_command.clone();
    for arg in extra_args {
        let quoted = if platform.is_windows() {
            quote_powershell(arg)
        } else {
            quote_posix(arg)?
        };
        dev_command.push(' ');
        dev_command.push_str(&quoted);
    }

    let inline = if config.env_wrapper.is_empty() || config.env.contains_key(INIT_CWD_VAR) {
        dev_command
    } else {
        format!(
            "{} {}=$PWD {}",
            config.env_wrapper, INIT_CWD_VAR, dev_command
        )
    };

    let (program, flag, command_line) = if platform.is_windows() {
        (
            WINDOWS_SHELL,
            WINDOWS_SHELL_FLAG,
            format!("$env:PWD = (Get-Location).Path; {}", inline),
        )
    } else {
        (POSIX_SHELL, POSIX_SHELL_FLAG, inline)
    };

    let mut env = BTreeMap::new();
    env.insert(
        INIT_CWD_VAR.to_string(),
        dunce::simplified(init_cwd).display().to_string(),
    );
    env.extend(config.env.clone());

    Ok(LaunchPlan {
        program: program.to_string(),
        args: vec![flag.to_string(), command_line],
        env,
    })
}

fn quote_posix(arg: &str) -> Result<String, PlanError> {
    shlex::try_quote(arg)
        .map(Cow::into_owned)
        .map_err(|_| PlanError::UnquotableArg(arg.to_string()))
}

/// Single-quotes `arg` for PowerShell unless it is made only of characters that
/// PowerShell passes through literally.
fn quote_powershell(arg: &str) -> String {
    let is_plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+".contains(c));
    if is_plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn cwd() -> PathBuf {
        PathBuf::from("/home/dev/site")
    }

    #[test]
    fn test_windows_selects_powershell_form() {
        let plan = build_plan(&Platform::Windows, &LaunchConfig::default(), &[], &cwd()).unwrap();
        assert_eq!(plan.program, "powershell");
        assert_eq!(
            plan.args,
            args(&[
                "-Command",
                "$env:PWD = (Get-Location).Path; cross-env INIT_CWD=$PWD next dev"
            ])
        );
    }

    #[test]
    fn test_other_platforms_select_posix_form() {
        for platform in [
            Platform::Linux,
            Platform::MacOS,
            Platform::Other("freebsd".to_string()),
        ] {
            let plan = build_plan(&platform, &LaunchConfig::default(), &[], &cwd()).unwrap();
            assert_eq!(plan.program, "sh");
            assert_eq!(plan.args, args(&["-c", "cross-env INIT_CWD=$PWD next dev"]));
        }
    }

    #[test]
    fn test_init_cwd_is_set_on_child_env() {
        let plan = build_plan(&Platform::Linux, &LaunchConfig::default(), &[], &cwd()).unwrap();
        assert_eq!(
            plan.env.get("INIT_CWD").map(String::as_str),
            Some("/home/dev/site")
        );
    }

    #[test]
    fn test_config_env_overrides_init_cwd() {
        let mut config = LaunchConfig::default();
        config
            .env
            .insert("INIT_CWD".to_string(), "/elsewhere".to_string());
        config
            .env
            .insert("NODE_ENV".to_string(), "development".to_string());

        let plan = build_plan(&Platform::Linux, &config, &[], &cwd()).unwrap();
        assert_eq!(plan.env.get("INIT_CWD").map(String::as_str), Some("/elsewhere"));
        assert_eq!(plan.command_line(), Some("next dev"));

        let windows = build_plan(&Platform::Windows, &config, &[], &cwd()).unwrap();
        assert_eq!(
            windows.command_line(),
            Some("$env:PWD = (Get-Location).Path; next dev")
        );
        assert_eq!(
            plan.env.get("NODE_ENV").map(String::as_str),
            Some("development")
        );
    }

    #[test]
    fn test_empty_wrapper_drops_inline_override() {
        let config = LaunchConfig {
            env_wrapper: String::new(),
            ..LaunchConfig::default()
        };
        let posix = build_plan(&Platform::Linux, &config, &[], &cwd()).unwrap();
        assert_eq!(posix.command_line(), Some("next dev"));

        let windows = build_plan(&Platform::Windows, &config, &[], &cwd()).unwrap();
        assert_eq!(
            windows.command_line(),
            Some("$env:PWD = (Get-Location).Path; next dev")
        );
        assert!(windows.env.contains_key("INIT_CWD"));
    }

    #[test]
    fn test_extra_args_are_quoted_for_posix() {
        let plan = build_plan(
            &Platform::Linux,
            &LaunchConfig::default(),
            &args(&["--port", "4000", "my dir"]),
            &cwd(),
        )
        .unwrap();
        let line = plan.command_line().unwrap();
        assert!(line.starts_with("cross-env INIT_CWD=$PWD next dev --port 4000 "));
        let words = shlex::split(line).unwrap();
        assert_eq!(words[words.len() - 3..], ["--port", "4000", "my dir"]);
    }

    #[test]
    fn test_extra_args_are_quoted_for_powershell() {
        let plan = build_plan(
            &Platform::Windows,
            &LaunchConfig::default(),
            &args(&["--hostname", "0.0.0.0", "it's"]),
            &cwd(),
        )
        .unwrap();
        assert_eq!(
            plan.command_line(),
            Some("$env:PWD = (Get-Location).Path; cross-env INIT_CWD=$PWD next dev --hostname 0.0.0.0 'it''s'")
        );
    }

    #[test]
    fn test_nul_byte_arg_is_rejected_on_posix() {
        let result = build_plan(
            &Platform::Linux,
            &LaunchConfig::default(),
            &args(&["bad\0arg"]),
            &cwd(),
        );
        assert!(matches!(result, Err(PlanError::UnquotableArg(_))));
    }

    #[test]
    fn test_quote_powershell_empty_and_dollar() {
        assert_eq!(quote_powershell(""), "''");
        assert_eq!(quote_powershell("$HOME"), "'$HOME'");
        assert_eq!(quote_powershell("a=b+c"), "a=b+c");
    }

    #[test]
    fn test_quote_powershell_comma_is_quoted() {
        assert_eq!(quote_powershell("a=b,c"), "'a=b,c'");
        let plan = build_plan(
            &Platform::Windows,
            &LaunchConfig::default(),
            &args(&["--hosts", "a,b"]),
            &cwd(),
        )
        .unwrap();
        assert!(plan.command_line().unwrap().ends_with("next dev --hosts 'a,b'"));
    }
}
