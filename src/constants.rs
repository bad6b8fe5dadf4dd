// src/constants.rs

/// The name of the optional configuration file, looked up in the current directory.
pub const CONFIG_FILENAME: &str = "devlaunch.toml";

/// The framework command that starts the development server.
pub const DEFAULT_DEV_COMMAND: &str = "next dev";

/// The tool used to set `INIT_CWD` inline in front of the dev command.
pub const DEFAULT_ENV_WRAPPER: &str = "cross-env";

/// The environment variable carrying the directory the launcher was started from.
pub const INIT_CWD_VAR: &str = "INIT_CWD";

/// Shell program used on Windows.
pub const WINDOWS_SHELL: &str = "powershell";

/// Flag that makes PowerShell run a single command string.
pub const WINDOWS_SHELL_FLAG: &str = "-Command";

/// Shell program used everywhere else.
pub const POSIX_SHELL: &str = "sh";

/// Flag that makes a POSIX shell run a single command string.
pub const POSIX_SHELL_FLAG: &str = "-c";
