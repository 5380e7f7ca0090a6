// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # termfd-observability
//!
//! Logging setup shared by termfd binaries and tests, with per-crate debug
//! flag support.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known termfd crate names for debug flags (also their `tracing` targets)
pub const KNOWN_CRATES: &[&str] = &["termfd-io", "termfd-observability"];
