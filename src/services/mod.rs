//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `markers.rs` — named line predicates (box/block/modellist/comment/blank).
//! - `extract.rs` — log scanning into per-file invalid entry sets.
//! - `disable.rs` — block boundary inference, comment plan, atomic rewrite.
//! - `repair.rs` — batch loop over extracted files + path validation.
//! - `prompt.rs` — interactive input collection for missing paths.
//! - `storage.rs` — config loading + audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod disable;
pub mod extract;
pub mod markers;
pub mod output;
pub mod prompt;
pub mod repair;
pub mod storage;
