//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep record/plan/report types in one place.
//! - Avoid cyclic imports between the extractor, disabler, and batch loop.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `FileReport`, `RunReport`, and `ScanReport` are the `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod models;
