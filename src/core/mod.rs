// src/core/mod.rs

//! Platform-independent launch logic: reading the config and building the plan.

pub mod config_loader;
pub mod plan;
