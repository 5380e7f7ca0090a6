//! # termfd
//!
//! Single-shot `read(2)`/`write(2)` wrappers for serial and terminal file
//! descriptors. The descriptor is opened, configured (baud rate, parity,
//! blocking mode) and closed by the caller; this crate only moves bytes.
//!
//! ## Feature Flags
//!
//! - **`config`** (default): `termfd.toml` loader with environment/CLI overrides
//! - **`observability`** (default): `tracing` subscriber setup with per-crate debug flags
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::os::fd::AsRawFd;
//! use termfd::prelude::*;
//!
//! # let port = std::fs::OpenOptions::new().read(true).write(true).open("/dev/ttyS0").unwrap();
//! let status = write_fd(port.as_raw_fd(), b"ping\n");
//! assert_eq!(status, 0);
//!
//! let mut buffer = ReadBuffer::with_capacity(80);
//! match buffer.read_from(&port)? {
//!     ReadOutcome::Data(n) => println!("{} bytes: {:?}", n, buffer.data()),
//!     ReadOutcome::NoData => {}
//! }
//! # Ok::<(), FdError>(())
//! ```
//!
//! ## Return Conventions
//!
//! | Call       | Success            | No data | Failure  |
//! |------------|--------------------|---------|----------|
//! | `write_fd` | `0` (full write)   | -       | `-errno` |
//! | `read_fd`  | byte count         | `0`     | `-errno` |
//!
//! A short write is a failure and reports `-EIO`.
//!
//! ## License
//!
//! Apache-2.0

// Re-export core
pub use termfd_io as io;

#[cfg(feature = "config")]
pub use termfd_config as config;

#[cfg(feature = "observability")]
pub use termfd_observability as observability;

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::io::{
        read_fd, read_terminated, write_all_once, write_fd, FdError, FdPort, ReadBuffer,
        ReadOptions, ReadOutcome, SerialIo,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{load_config, ReaderConfig, TermfdConfig};

    #[cfg(feature = "observability")]
    pub use crate::observability::{init_logging, CrateDebugFlags};
}
