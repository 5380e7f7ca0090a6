// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Writer and Reader for raw descriptors
//!
//! Each call performs exactly one `write(2)` or `read(2)`. Nothing is retried,
//! buffered, or configured; blocking behavior is whatever the caller set on the
//! descriptor.
//!
//! Two surfaces share one implementation:
//! - [`write_fd`] / [`read_fd`] return integer status codes (`0`, byte count,
//!   or `-errno`).
//! - [`write_all_once`] / [`read_terminated`] return [`Result`] with
//!   [`FdError`] and [`ReadOutcome`].

use std::io;
use std::os::fd::{AsFd, AsRawFd, RawFd};

use crate::error::{FdError, Result};

/// Outcome of a successful Reader call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// This many bytes were stored at the start of the buffer
    Data(usize),
    /// Nothing available right now (timeout, empty non-blocking descriptor, or EOF)
    NoData,
}

impl ReadOutcome {
    /// Number of bytes read (0 for [`ReadOutcome::NoData`])
    pub fn len(&self) -> usize {
        match self {
            ReadOutcome::Data(n) => *n,
            ReadOutcome::NoData => 0,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ReadOutcome::NoData)
    }
}

/// Reader behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Report `EAGAIN`/`EWOULDBLOCK` as [`ReadOutcome::NoData`] instead of an error
    pub would_block_as_no_data: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            would_block_as_no_data: true,
        }
    }
}

impl From<&termfd_config::ReaderConfig> for ReadOptions {
    fn from(config: &termfd_config::ReaderConfig) -> Self {
        Self {
            would_block_as_no_data: config.treat_would_block_as_no_data,
        }
    }
}

/// Number of bytes a Reader call may request for a buffer of `capacity`
///
/// One byte is reserved for the terminator whenever `capacity > 1`.
pub fn read_limit(capacity: usize) -> usize {
    if capacity > 1 {
        capacity - 1
    } else {
        capacity
    }
}

pub(crate) fn write_raw(fd: RawFd, data: &[u8]) -> Result<()> {
    let requested = data.len();
    // SAFETY: `data` is a live slice of `requested` readable bytes.
    let rc = unsafe { libc::write(fd, data.as_ptr().cast(), requested) };
    if rc < 0 {
        let err = io::Error::last_os_error();
        tracing::warn!(target: "termfd-io", "Write to fd {} failed: {}", fd, err);
        return Err(FdError::Write(err));
    }

    let written = rc as usize;
    if written != requested {
        tracing::warn!(
            target: "termfd-io",
            "Short write to fd {}: {} of {} bytes",
            fd,
            written,
            requested
        );
        return Err(FdError::ShortWrite { written, requested });
    }

    tracing::trace!(target: "termfd-io", "Wrote {} bytes to fd {}", written, fd);
    Ok(())
}

pub(crate) fn read_raw(fd: RawFd, buf: &mut [u8], options: ReadOptions) -> Result<ReadOutcome> {
    let capacity = buf.len();
    let limit = read_limit(capacity);
    // SAFETY: `buf` is a live, exclusively borrowed slice and `limit <= buf.len()`.
    let rc = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), limit) };
    if rc < 0 {
        let err = io::Error::last_os_error();
        if options.would_block_as_no_data && err.kind() == io::ErrorKind::WouldBlock {
            tracing::debug!(target: "termfd-io", "No data pending on fd {}", fd);
            return Ok(ReadOutcome::NoData);
        }
        tracing::debug!(target: "termfd-io", "Read from fd {} failed: {}", fd, err);
        return Err(FdError::Read(err));
    }

    let rdlen = rc as usize;
    if rdlen == 0 {
        tracing::debug!(target: "termfd-io", "Read from fd {} returned no data", fd);
        return Ok(ReadOutcome::NoData);
    }

    if capacity > 1 {
        buf[rdlen] = 0;
    }
    tracing::trace!(
        target: "termfd-io",
        "Read {} bytes from fd {} (capacity {})",
        rdlen,
        fd,
        capacity
    );
    Ok(ReadOutcome::Data(rdlen))
}

/// Write `data` out the device in a single `write(2)`
///
/// `data.len()` is the number of valid bytes to send.
///
/// # Returns
/// `0` when every byte was accepted, otherwise the negated error code. A short
/// write returns `-EIO`.
pub fn write_fd(fd: RawFd, data: &[u8]) -> i32 {
    match write_raw(fd, data) {
        Ok(()) => 0,
        Err(err) => -err.errno(),
    }
}

/// Read into `buf` with a single `read(2)`, null-terminating when possible
///
/// At most `buf.len() - 1` bytes are read when `buf.len() > 1`, leaving room for
/// the terminator written at `buf[n]`. Smaller buffers are filled without one.
///
/// # Returns
/// The byte count, `0` when nothing is available (including `EAGAIN`), or the
/// negated error code.
pub fn read_fd(fd: RawFd, buf: &mut [u8]) -> isize {
    match read_raw(fd, buf, ReadOptions::default()) {
        Ok(outcome) => outcome.len() as isize,
        Err(err) => -(err.errno() as isize),
    }
}

/// Typed Writer: one `write(2)` of the whole slice
///
/// # Errors
/// [`FdError::Write`] if the syscall fails, [`FdError::ShortWrite`] if it
/// accepts fewer bytes than `data.len()`.
pub fn write_all_once<F: AsFd>(fd: F, data: &[u8]) -> Result<()> {
    write_raw(fd.as_fd().as_raw_fd(), data)
}

/// Typed Reader with default [`ReadOptions`]
///
/// # Errors
/// [`FdError::Read`] if the syscall fails for any reason other than "no data".
pub fn read_terminated<F: AsFd>(fd: F, buf: &mut [u8]) -> Result<ReadOutcome> {
    read_terminated_with(fd, buf, ReadOptions::default())
}

/// Typed Reader with explicit [`ReadOptions`]
pub fn read_terminated_with<F: AsFd>(
    fd: F,
    buf: &mut [u8],
    options: ReadOptions,
) -> Result<ReadOutcome> {
    read_raw(fd.as_fd().as_raw_fd(), buf, options)
}
