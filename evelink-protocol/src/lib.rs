//! EVE Coprocessor Protocol Definitions
//!
//! This crate defines the host-visible protocol of the EVE2 / FT81x display
//! coprocessors: the memory map, the command FIFO geometry, the coprocessor
//! opcodes, and the ring-cursor arithmetic the driver builds on. It contains
//! no I/O and is fully testable on the host.
//!
//! # Memory map
//!
//! ```text
//! ┌──────────────┬────────────┬─────────────────────────────────────┐
//! │ RAM_G        │ 0x00_0000  │ graphics RAM (bitmaps, decoded data)│
//! │ RAM_DL       │ 0x30_0000  │ display list                        │
//! │ RAM_REG      │ 0x30_2000  │ register file                       │
//! │ RAM_CMD      │ 0x30_8000  │ command FIFO (4 KiB ring)           │
//! └──────────────┴────────────┴─────────────────────────────────────┘
//! ```
//!
//! The FIFO is consumed asynchronously: the host appends little-endian
//! 32-bit words at `REG_CMD_WRITE` granularity and the chip advances
//! `REG_CMD_READ` as it executes. Pointer equality means idle.

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod registers;
pub mod ring;

pub use commands::CommandWord;
pub use ring::{
    free_space, fullness, RingCursor, FIFO_CAPACITY, FIFO_RESERVE, RESULT_BACKSTEP, WORD_SIZE,
};
