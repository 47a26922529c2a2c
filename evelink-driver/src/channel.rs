//! Command FIFO channel
//!
//! [`CommandChannel`] owns the logical write cursor into the chip's 4 KiB
//! command ring and the last write-pointer value published to the chip.
//! The protocol is two-phase: appends land words in ring memory but the
//! coprocessor only advances when `trigger` publishes the cursor to
//! `REG_CMD_WRITE`. Batching appends before one trigger amortises transport
//! overhead and makes a whole batch visible atomically.

use embedded_hal::delay::DelayNs;
use evelink_hal::MemoryPort;
use evelink_protocol::commands::{self, CommandWord};
use evelink_protocol::registers::{RAM_CMD, REG_CMD_READ, REG_CMD_WRITE};
use evelink_protocol::ring::{
    free_space, fullness, RingCursor, FIFO_CAPACITY, FIFO_RESERVE, RESULT_BACKSTEP, WORD_SIZE,
};

use crate::Error;

/// Policy for the bounded idle wait
///
/// The baseline protocol blocks unboundedly; this wraps the same predicate
/// with a poll budget for unattended operation.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdlePolicy {
    /// Pause between read-pointer polls, in microseconds
    pub poll_interval_us: u32,
    /// Number of polls before giving up with [`Error::Timeout`]
    pub max_polls: u32,
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self {
            poll_interval_us: 50,
            max_polls: 20_000, // about one second at the default interval
        }
    }
}

/// Append-only, execution-triggering interface to the command FIFO
///
/// Owns the [`MemoryPort`] and the write cursor; one instance per device.
pub struct CommandChannel<P> {
    port: P,
    cursor: RingCursor,
    published: u32,
}

impl<P: MemoryPort> CommandChannel<P> {
    /// Create a channel over a freshly reset device
    ///
    /// After reset both chip pointers are zero, matching the new cursor.
    /// For a device in an unknown state, call [`resync`](Self::resync).
    pub fn new(port: P) -> Self {
        Self {
            port,
            cursor: RingCursor::new(),
            published: 0,
        }
    }

    /// Release the underlying port
    pub fn release(self) -> P {
        self.port
    }

    /// Adopt the chip's current write pointer as the local cursor
    ///
    /// Caller-level recovery path: after an aborted batch the host cursor
    /// no longer matches the chip, and the next submission must start where
    /// the chip expects it.
    pub fn resync(&mut self) -> Result<(), Error> {
        let write = u32::from(self.port.rd16(REG_CMD_WRITE)?);
        self.cursor = RingCursor::at(write);
        self.published = write;
        Ok(())
    }

    /// Open a logical command batch
    ///
    /// Appends the display-list start word; everything appended afterwards
    /// accumulates unpublished until the next [`trigger`](Self::trigger).
    pub fn begin_submission(&mut self) -> Result<(), Error> {
        self.append(commands::CMD_DLSTART)
    }

    /// Append one command word at the cursor
    ///
    /// Advances the cursor by the word size, wrapping modulo capacity.
    pub fn append(&mut self, word: CommandWord) -> Result<(), Error> {
        self.port.wr32(self.cursor.address(), word)?;
        self.cursor.advance(WORD_SIZE);
        Ok(())
    }

    /// Append a raw byte payload at the cursor, with flow control
    ///
    /// Blocks until the ring has room for the whole payload, then writes
    /// it, splitting at the physical wrap boundary if needed, and advances
    /// the cursor by exactly `data.len()`. `data` must fit the ring
    /// (`FIFO_CAPACITY - FIFO_RESERVE` bytes at most).
    pub fn append_bytes(&mut self, data: &[u8]) -> Result<(), Error> {
        let len = data.len() as u32;
        debug_assert!(len <= FIFO_CAPACITY - FIFO_RESERVE);

        self.wait_for_space(len)?;

        let head_len = self.cursor.until_wrap().min(len) as usize;
        let (head, tail) = data.split_at(head_len);
        self.port.wr_bytes(self.cursor.address(), head)?;
        if !tail.is_empty() {
            self.port.wr_bytes(RAM_CMD, tail)?;
        }
        self.cursor.advance(len);
        Ok(())
    }

    /// Publish the cursor, handing all appended words to the coprocessor
    ///
    /// The coprocessor consumes whole words, so a partial tail is padded
    /// with zero bytes first. Triggering with nothing pending republishes
    /// the same pointer, which the chip treats as nothing to do.
    pub fn trigger(&mut self) -> Result<(), Error> {
        const PAD: [u8; 3] = [0; 3];
        let pad_address = self.cursor.address();
        let pad = self.cursor.align_to_word();
        if pad != 0 {
            self.port.wr_bytes(pad_address, &PAD[..pad as usize])?;
        }
        self.published = self.cursor.offset();
        self.port.wr16(REG_CMD_WRITE, self.published as u16)?;
        Ok(())
    }

    /// Block until the coprocessor has consumed everything published
    ///
    /// Busy-polls `REG_CMD_READ` until it equals the last published write
    /// pointer. Unbounded; see [`wait_idle_bounded`](Self::wait_idle_bounded)
    /// for the give-up variant.
    pub fn wait_idle(&mut self) -> Result<(), Error> {
        loop {
            if self.poll_idle()? {
                return Ok(());
            }
        }
    }

    /// Bounded idle wait, paced by `delay`
    pub fn wait_idle_bounded<D: DelayNs>(
        &mut self,
        delay: &mut D,
        policy: &IdlePolicy,
    ) -> Result<(), Error> {
        for _ in 0..policy.max_polls {
            if self.poll_idle()? {
                return Ok(());
            }
            delay.delay_us(policy.poll_interval_us);
        }
        Err(Error::Timeout)
    }

    /// Read back a FIFO-delivered result pointer
    ///
    /// Appends the report command plus the placeholder word the coprocessor
    /// overwrites, triggers, and reads the result from the cursor rewound by
    /// [`RESULT_BACKSTEP`]: servicing the report advances the chip's write
    /// location twice, so the value lands one word behind the final cursor.
    pub fn result_pointer(&mut self) -> Result<u32, Error> {
        self.append(commands::CMD_GETPTR)?;
        self.append(0)?; // result slot
        self.trigger()?;
        let result = self.port.rd32(self.cursor.rewound(RESULT_BACKSTEP).address())?;
        Ok(result)
    }

    /// Write a block directly into addressed memory, bypassing the FIFO
    ///
    /// Synchronous memory poke with no coprocessor involvement; returns the
    /// next free address so a caller can chain blocks.
    pub fn write_block(&mut self, address: u32, data: &[u8]) -> Result<u32, Error> {
        self.port.wr_bytes(address, data)?;
        Ok(address + data.len() as u32)
    }

    /// Bytes appended since the last trigger
    pub fn pending(&self) -> u32 {
        fullness(self.cursor.offset(), self.published)
    }

    #[cfg(test)]
    pub(crate) fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    fn poll_idle(&mut self) -> Result<bool, Error> {
        let read = u32::from(self.port.rd16(REG_CMD_READ)?);
        Ok(read == self.published)
    }

    fn wait_for_space(&mut self, needed: u32) -> Result<(), Error> {
        loop {
            let read = u32::from(self.port.rd16(REG_CMD_READ)?);
            if free_space(self.cursor.offset(), read) >= needed {
                return Ok(());
            }
        }
    }
}
