//! # System Interaction Layer
//!
//! The boundary between launch planning and the operating system.
//!
//! ## Modules
//!
//! - **`platform`**: Identifies the host OS.
//! - **`executor`**: Spawns the planned shell with inherited stdio, waits for it, and reports
//!   the spawn error or the exit code through a [`executor::LaunchObserver`].

pub mod executor;
pub mod platform;
