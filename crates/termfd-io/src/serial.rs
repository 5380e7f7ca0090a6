// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use std::os::fd::{AsRawFd, BorrowedFd};

use crate::error::FdError;
use crate::fd::{read_raw, write_raw, ReadOptions};

/// Serial I/O abstraction over a byte-oriented device
pub trait SerialIo {
    /// Platform-specific error type
    type Error;

    /// Write bytes to the device
    ///
    /// # Returns
    /// Number of bytes written or error
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Read bytes from the device
    ///
    /// # Returns
    /// Number of bytes read (0 if none available) or error
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}

/// [`SerialIo`] over a caller-owned terminal descriptor
///
/// The port never opens, configures, or closes the descriptor.
#[derive(Debug, Clone, Copy)]
pub struct FdPort<'fd> {
    fd: BorrowedFd<'fd>,
    options: ReadOptions,
}

impl<'fd> FdPort<'fd> {
    pub fn new(fd: BorrowedFd<'fd>) -> Self {
        Self {
            fd,
            options: ReadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }
}

impl SerialIo for FdPort<'_> {
    type Error = FdError;

    /// Writes all of `data` or fails; short writes are errors.
    fn write(&mut self, data: &[u8]) -> Result<usize, FdError> {
        write_raw(self.fd.as_raw_fd(), data)?;
        Ok(data.len())
    }

    /// Null-terminates `buffer` after the data when it holds more than one byte.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, FdError> {
        Ok(read_raw(self.fd.as_raw_fd(), buffer, self.options)?.len())
    }
}
