// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Reader sized and configured from `termfd.toml`.

mod common;

use common::{pipe, set_nonblocking};
use std::fs;
use std::os::fd::AsFd;
use tempfile::tempdir;
use termfd::config::load_config;
use termfd::io::{write_all_once, FdPort, ReadBuffer, ReadOptions, ReadOutcome, SerialIo};

#[test]
fn test_buffer_from_loaded_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("termfd.toml");
    fs::write(
        &path,
        "[reader]\ncapacity = 6\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();
    let config = load_config(Some(&path), None).unwrap();

    let (rx, tx) = pipe();
    let mut buffer = ReadBuffer::from_config(&config.reader);
    assert_eq!(buffer.capacity(), 6);

    write_all_once(&tx, b"ABCDEFGH").unwrap();
    assert_eq!(buffer.read_from(&rx).unwrap(), ReadOutcome::Data(5));
    assert_eq!(buffer.as_c_str().unwrap().to_bytes(), b"ABCDE");

    assert_eq!(buffer.read_from(&rx).unwrap(), ReadOutcome::Data(3));
    assert_eq!(buffer.data(), b"FGH");
}

#[test]
fn test_would_block_surfaces_when_disabled_in_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("termfd.toml");
    fs::write(&path, "[reader]\ntreat_would_block_as_no_data = false\n").unwrap();
    let config = load_config(Some(&path), None).unwrap();

    let (rx, _tx) = pipe();
    set_nonblocking(&rx);

    let mut buffer = ReadBuffer::from_config(&config.reader);
    let err = buffer.read_from(&rx).unwrap_err();
    assert_eq!(err.errno(), libc::EAGAIN);

    let mut port = FdPort::new(rx.as_fd()).with_options(ReadOptions::from(&config.reader));
    let mut scratch = [0u8; 8];
    assert!(port.read(&mut scratch).is_err());
}
