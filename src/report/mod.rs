//! Report renderers for license listings and compatibility results.
//!
//! - [`terminal`]: colored text and tables; respects `--verbose` / `--quiet`.
//!
//! JSON output is produced directly from the serializable models in `main`.

pub mod terminal;
