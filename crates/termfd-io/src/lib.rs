// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # termfd-io
//!
//! Single-shot `read(2)`/`write(2)` wrappers for serial and terminal
//! descriptors that the caller has already opened and configured.
//!
//! - **Writer**: one write of the whole buffer; anything short of a full write
//!   is a failure and is never retried.
//! - **Reader**: one read of at most `capacity - 1` bytes, followed by a NUL
//!   terminator when the buffer holds more than one byte. Zero bytes means
//!   "no data yet" and is not an error.
//!
//! ```rust,no_run
//! use std::os::fd::AsRawFd;
//! use termfd_io::{read_fd, write_fd};
//!
//! # let port = std::fs::File::open("/dev/ttyUSB0").unwrap();
//! let fd = port.as_raw_fd();
//! if write_fd(fd, b"ATZ\r") != 0 {
//!     // negated errno
//! }
//!
//! let mut data = [0u8; 80];
//! match read_fd(fd, &mut data) {
//!     n if n > 0 => println!("{} bytes", n),
//!     0 => {} // no data yet
//!     err => eprintln!("read failed: errno {}", -err),
//! }
//! ```
//!
//! Concurrent calls on one descriptor from several threads are not supported.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod buffer;
pub mod error;
pub mod fd;
pub mod serial;

pub use buffer::ReadBuffer;
pub use error::{FdError, Result};
pub use fd::{
    read_fd, read_limit, read_terminated, read_terminated_with, write_all_once, write_fd,
    ReadOptions, ReadOutcome,
};
pub use serial::{FdPort, SerialIo};
