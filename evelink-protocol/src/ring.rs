//! Command FIFO ring arithmetic
//!
//! The FIFO at `RAM_CMD` is a 4 KiB power-of-two ring. The host keeps a
//! logical write cursor; the physical address of logical offset `o` is
//! always `RAM_CMD + (o mod capacity)`. Free-space accounting keeps one
//! word in reserve so a full ring is distinguishable from an empty one.

use crate::registers::RAM_CMD;

/// FIFO capacity in bytes (power of two)
pub const FIFO_CAPACITY: u32 = 4096;

/// Size of one command word in bytes
pub const WORD_SIZE: u32 = 4;

/// Bytes kept unused so fullness never equals capacity
pub const FIFO_RESERVE: u32 = WORD_SIZE;

/// Readback offset for FIFO-delivered results
///
/// Servicing `CMD_GETPTR` advances the coprocessor's write location twice:
/// once past the opcode and once past the slot it overwrites with the
/// result. The result therefore sits at `(write location - 4)`, not at the
/// location the opcode was appended to. Firmware contract for the FT81x
/// family; it must be reproduced exactly.
pub const RESULT_BACKSTEP: u32 = WORD_SIZE;

/// Logical write offset into the command FIFO
///
/// Monotonically advancing modulo [`FIFO_CAPACITY`]. Owned exclusively by
/// one command channel; two independent devices get two independent cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingCursor {
    offset: u32,
}

impl RingCursor {
    /// Cursor at offset zero (the post-reset state of both chip pointers)
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Cursor at an arbitrary offset, reduced modulo capacity
    pub const fn at(offset: u32) -> Self {
        Self {
            offset: offset % FIFO_CAPACITY,
        }
    }

    /// Current offset within the ring, `0..FIFO_CAPACITY`
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Physical address of the current offset
    pub const fn address(&self) -> u32 {
        RAM_CMD + self.offset
    }

    /// Bytes until the physical end of the ring
    ///
    /// A block longer than this must be split at the wrap boundary.
    pub const fn until_wrap(&self) -> u32 {
        FIFO_CAPACITY - self.offset
    }

    /// Advance by `n` bytes, wrapping modulo capacity
    pub fn advance(&mut self, n: u32) {
        self.offset = (self.offset + (n % FIFO_CAPACITY)) % FIFO_CAPACITY;
    }

    /// The cursor `n` bytes behind this one, wrapping modulo capacity
    pub const fn rewound(&self, n: u32) -> Self {
        Self {
            offset: (self.offset + FIFO_CAPACITY - (n % FIFO_CAPACITY)) % FIFO_CAPACITY,
        }
    }

    /// Round up to the next word boundary, returning the pad byte count
    pub fn align_to_word(&mut self) -> u32 {
        let pad = (WORD_SIZE - self.offset % WORD_SIZE) % WORD_SIZE;
        self.advance(pad);
        pad
    }
}

/// Bytes submitted but not yet consumed, given both pointer offsets
pub const fn fullness(write: u32, read: u32) -> u32 {
    (write + FIFO_CAPACITY - read) % FIFO_CAPACITY
}

/// Bytes that may be appended without overrunning the consumer
pub const fn free_space(write: u32, read: u32) -> u32 {
    FIFO_CAPACITY - FIFO_RESERVE - fullness(write, read)
}
