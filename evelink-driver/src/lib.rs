//! EVE coprocessor driver
//!
//! This crate implements the host side of the EVE command FIFO protocol:
//!
//! - [`channel::CommandChannel`] - ring-cursor bookkeeping, append/trigger,
//!   and the polling idle handshake
//! - [`stream`] - chunked transfer of large byte sources through a small
//!   staging buffer
//! - [`loader::AssetLoader`] - the ZLIB, JPEG and raw-block asset loaders
//!
//! Everything is single-threaded and synchronous: each public operation
//! either completes before returning or blocks, polling the chip's read
//! pointer, until the coprocessor reaches the required state. Callers that
//! share a device across threads must wrap the whole load-and-wait sequence
//! in their own mutual exclusion.

#![no_std]
#![deny(unsafe_code)]

use evelink_hal::TransportError;

pub mod channel;
pub mod loader;
pub mod stream;

#[cfg(test)]
pub(crate) mod testutil;

pub use channel::{CommandChannel, IdlePolicy};
pub use loader::AssetLoader;

/// Driver-level errors
///
/// Nothing here is retried internally. A transport fault is surfaced
/// immediately and a partially appended batch is not rolled back; recovery
/// is the caller's decision (a fresh submission, [`CommandChannel::resync`],
/// or a device reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The named asset could not be opened; no chip state was touched
    AssetNotFound,
    /// The asset ended before its declared length
    Truncated,
    /// The storage medium failed mid-read
    Storage,
    /// A read or write on the underlying transport failed
    Transport(TransportError),
    /// A bounded wait elapsed before the coprocessor went idle
    Timeout,
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err)
    }
}
