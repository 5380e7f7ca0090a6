// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for descriptor I/O

use std::io;

/// Result type alias using FdError
pub type Result<T> = std::result::Result<T, FdError>;

/// Failures surfaced by the Writer and Reader
#[derive(Debug, thiserror::Error)]
pub enum FdError {
    /// `write(2)` returned an error
    #[error("Write failed: {0}")]
    Write(#[source] io::Error),

    /// `write(2)` accepted fewer bytes than requested
    #[error("Short write: {written} of {requested} bytes")]
    ShortWrite { written: usize, requested: usize },

    /// `read(2)` returned an error
    #[error("Read failed: {0}")]
    Read(#[source] io::Error),
}

impl FdError {
    /// Positive platform error code for this failure
    ///
    /// A short write carries no `errno` of its own and reports `EIO`.
    pub fn errno(&self) -> i32 {
        match self {
            FdError::Write(err) | FdError::Read(err) => err.raw_os_error().unwrap_or(libc::EIO),
            FdError::ShortWrite { .. } => libc::EIO,
        }
    }

    /// Check if calling again may succeed without caller intervention
    pub fn is_retryable(&self) -> bool {
        match self {
            FdError::Write(err) | FdError::Read(err) => matches!(
                err.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
            ),
            FdError::ShortWrite { .. } => false,
        }
    }
}
