//! `hh-stats` library crate.
//!
//! The binary (`hh`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes or hitting the network
//! - modules are reusable (e.g., future exporters, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod classify;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;
