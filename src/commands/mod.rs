//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `repair.rs` — scan/fix/disable, including prompting for missing paths.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate extraction and file mutation to `services/*`.
//! - Keep behavior and output schema stable.

pub mod repair;

pub use repair::handle_commands;
