//! `devlaunch` starts a web framework's development server through the host's native
//! shell and reports how the child process ended.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
