//! Service layer containing the pure pipelines and side-effect helpers.
//!
//! ## Service map
//! - `query.rs` — catalog search/filter/sort.
//! - `review.rs` — review validation and submission.
//! - `storage.rs` — local review collection persistence + audit log.
//! - `config.rs` — optional config.toml loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - `query.rs` and `review.rs` are pure; they never touch the filesystem.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod output;
pub mod query;
pub mod review;
pub mod storage;
