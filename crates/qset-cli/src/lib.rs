//! CLI library components for the question set toolkit.

pub mod commands;
pub mod logging;
