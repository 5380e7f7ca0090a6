// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity receive buffer for polling a descriptor

use std::ffi::CStr;
use std::os::fd::{AsFd, AsRawFd};

use crate::error::Result;
use crate::fd::{read_raw, ReadOptions, ReadOutcome};

/// Owned buffer reused across Reader calls
///
/// Holds the bytes from the most recent successful read. A read that yields no
/// data leaves the previous contents untouched; a failed read clears them.
#[derive(Debug, Clone)]
pub struct ReadBuffer {
    storage: Vec<u8>,
    len: usize,
    options: ReadOptions,
}

impl ReadBuffer {
    /// Create a buffer of `capacity` bytes (terminator included)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity],
            len: 0,
            options: ReadOptions::default(),
        }
    }

    /// Create a buffer sized and configured from `[reader]` settings
    pub fn from_config(config: &termfd_config::ReaderConfig) -> Self {
        Self::with_capacity(config.capacity).with_options(ReadOptions::from(config))
    }

    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Perform one Reader call into this buffer
    ///
    /// # Errors
    /// Propagates [`crate::FdError::Read`] from the descriptor.
    pub fn read_from<F: AsFd>(&mut self, fd: F) -> Result<ReadOutcome> {
        match read_raw(fd.as_fd().as_raw_fd(), &mut self.storage, self.options) {
            Ok(ReadOutcome::Data(n)) => {
                self.len = n;
                Ok(ReadOutcome::Data(n))
            }
            Ok(ReadOutcome::NoData) => Ok(ReadOutcome::NoData),
            Err(err) => {
                self.len = 0;
                Err(err)
            }
        }
    }

    /// Bytes received by the last successful read
    pub fn data(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Last read as a C string, if a terminator was written
    ///
    /// Stops at the first NUL, so embedded zero bytes shorten the result.
    pub fn as_c_str(&self) -> Option<&CStr> {
        if self.len == 0 || self.capacity() <= 1 {
            return None;
        }
        CStr::from_bytes_until_nul(&self.storage[..=self.len]).ok()
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fd::write_all_once;
    use crate::test_support::{pipe, set_nonblocking};

    #[test]
    fn test_read_from_keeps_last_data() {
        let (rx, tx) = pipe();
        set_nonblocking(&rx);
        let mut buffer = ReadBuffer::with_capacity(80);

        write_all_once(&tx, b"OK\r\n").unwrap();
        assert_eq!(buffer.read_from(&rx).unwrap(), ReadOutcome::Data(4));
        assert_eq!(buffer.data(), b"OK\r\n");
        assert_eq!(buffer.as_c_str().unwrap().to_bytes(), b"OK\r\n");

        assert_eq!(buffer.read_from(&rx).unwrap(), ReadOutcome::NoData);
        assert_eq!(buffer.data(), b"OK\r\n");

        buffer.clear();
        assert!(buffer.data().is_empty());
        assert!(buffer.as_c_str().is_none());
    }

    #[test]
    fn test_single_byte_buffer_has_no_c_str() {
        let (rx, tx) = pipe();
        let mut buffer = ReadBuffer::with_capacity(1);

        write_all_once(&tx, b"Z").unwrap();
        assert_eq!(buffer.read_from(&rx).unwrap(), ReadOutcome::Data(1));
        assert_eq!(buffer.data(), b"Z");
        assert!(buffer.as_c_str().is_none());
    }

    #[test]
    fn test_failed_read_clears_data() {
        let (rx, tx) = pipe();
        let mut buffer = ReadBuffer::with_capacity(8);

        write_all_once(&tx, b"abc").unwrap();
        buffer.read_from(&rx).unwrap();
        assert!(buffer.read_from(&tx).is_err());
        assert!(buffer.data().is_empty());
    }

    #[test]
    fn test_from_config_uses_capacity() {
        let config = termfd_config::ReaderConfig {
            capacity: 16,
            treat_would_block_as_no_data: false,
        };
        let buffer = ReadBuffer::from_config(&config);
        assert_eq!(buffer.capacity(), 16);
        assert!(!buffer.options.would_block_as_no_data);
    }
}
