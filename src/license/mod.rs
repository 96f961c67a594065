//! License catalog and the compatibility engine built on it.
//!
//! - [`registry`]: immutable catalog of known licenses, exact-key lookup.
//! - [`spdx`]: maps raw spellings (`"apache 2.0"`) to canonical keys.
//! - [`compat`]: partitions dependency licenses against a project license.
//! - [`stats`]: literal frequency counts for display.

pub mod compat;
pub mod registry;
pub mod spdx;
pub mod stats;
