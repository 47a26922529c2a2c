//! Deterministic fakes for host tests
//!
//! `FakeEve` models the chip's observable FIFO behavior: pointer registers,
//! instant or scheduled consumption, and the two-step write-location advance
//! while servicing a report command. `SliceStore` serves one named asset
//! from a borrowed slice.

use embedded_hal::delay::DelayNs;
use evelink_hal::{AssetStore, MemoryPort, StorageError, TransportError};
use evelink_protocol::commands::CMD_GETPTR;
use evelink_protocol::registers::{RAM_CMD, REG_CMD_READ, REG_CMD_WRITE};
use evelink_protocol::ring::{fullness, FIFO_CAPACITY, WORD_SIZE};
use heapless::Vec;

/// One recorded write transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    W8(u32, u8),
    W16(u32, u16),
    W32(u32, u32),
    Block { addr: u32, len: u32 },
}

/// Scripted memory-port fake
///
/// With `follow` set (the default) the read pointer snaps to every published
/// write pointer, modelling a chip that consumes instantly; additionally the
/// published range is "executed": a `CMD_GETPTR` word advances an internal
/// write location past the opcode, deposits `report_result` at that location
/// and advances again, reproducing the firmware's result placement.
///
/// With `follow` off and `read_step` set, each `REG_CMD_READ` poll returns
/// the current value and then advances it by `read_step` toward the write
/// pointer, so idle waits resolve after a known number of polls.
pub struct FakeEve {
    pub writes: Vec<Write, 256>,
    pub reads32: Vec<u32, 16>,
    pub mem32: Vec<(u32, u32), 32>,
    pub write_reg: u16,
    pub read_reg: u16,
    pub follow: bool,
    pub read_step: u16,
    pub report_result: u32,
    pub cmd_read_polls: u32,
}

impl FakeEve {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            reads32: Vec::new(),
            mem32: Vec::new(),
            write_reg: 0,
            read_reg: 0,
            follow: true,
            read_step: 0,
            report_result: 0,
            cmd_read_polls: 0,
        }
    }

    fn mem32_get(&self, addr: u32) -> Option<u32> {
        self.mem32.iter().find(|(a, _)| *a == addr).map(|(_, v)| *v)
    }

    fn mem32_set(&mut self, addr: u32, value: u32) {
        if let Some(slot) = self.mem32.iter_mut().find(|(a, _)| *a == addr) {
            slot.1 = value;
        } else {
            self.mem32.push((addr, value)).unwrap();
        }
    }

    /// Consume the newly published range, servicing report commands
    fn execute(&mut self, from: u32, to: u32) {
        let mut offset = from;
        while offset != to {
            let word = self.mem32_get(RAM_CMD + offset);
            offset = (offset + WORD_SIZE) % FIFO_CAPACITY;
            if word == Some(CMD_GETPTR) {
                // Two internal advances: past the opcode, then past the
                // slot the result is written into.
                self.mem32_set(RAM_CMD + offset, self.report_result);
                offset = (offset + WORD_SIZE) % FIFO_CAPACITY;
            }
        }
        self.read_reg = to as u16;
    }
}

impl MemoryPort for FakeEve {
    fn rd8(&mut self, _address: u32) -> Result<u8, TransportError> {
        Ok(0)
    }

    fn rd16(&mut self, address: u32) -> Result<u16, TransportError> {
        if address == REG_CMD_READ {
            self.cmd_read_polls += 1;
            let current = self.read_reg;
            if self.read_step > 0 && self.read_reg != self.write_reg {
                let pending = fullness(u32::from(self.write_reg), u32::from(self.read_reg));
                let advance = pending.min(u32::from(self.read_step));
                self.read_reg =
                    ((u32::from(self.read_reg) + advance) % FIFO_CAPACITY) as u16;
            }
            return Ok(current);
        }
        if address == REG_CMD_WRITE {
            return Ok(self.write_reg);
        }
        Ok(0)
    }

    fn rd32(&mut self, address: u32) -> Result<u32, TransportError> {
        self.reads32.push(address).unwrap();
        Ok(self.mem32_get(address).unwrap_or(0))
    }

    fn wr8(&mut self, address: u32, value: u8) -> Result<(), TransportError> {
        self.writes.push(Write::W8(address, value)).unwrap();
        Ok(())
    }

    fn wr16(&mut self, address: u32, value: u16) -> Result<(), TransportError> {
        self.writes.push(Write::W16(address, value)).unwrap();
        if address == REG_CMD_WRITE {
            let from = u32::from(self.read_reg);
            self.write_reg = value;
            if self.follow {
                self.execute(from, u32::from(value));
            }
        }
        Ok(())
    }

    fn wr32(&mut self, address: u32, value: u32) -> Result<(), TransportError> {
        self.writes.push(Write::W32(address, value)).unwrap();
        self.mem32_set(address, value);
        Ok(())
    }

    fn wr_bytes(&mut self, address: u32, data: &[u8]) -> Result<(), TransportError> {
        self.writes
            .push(Write::Block {
                addr: address,
                len: data.len() as u32,
            })
            .unwrap();
        Ok(())
    }
}

/// Delay fake for bounded-wait tests; the pause itself is irrelevant
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Asset store serving one named asset from a borrowed slice
pub struct SliceStore<'a> {
    name: &'a str,
    data: &'a [u8],
    /// Overrides the reported size, to model truncated media
    pub declared_size: Option<u32>,
    /// Number of handles closed so far
    pub closed: u32,
}

/// Read position within the open asset
pub struct SliceHandle {
    pos: usize,
}

impl<'a> SliceStore<'a> {
    pub fn new(name: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            data,
            declared_size: None,
            closed: 0,
        }
    }
}

impl AssetStore for SliceStore<'_> {
    type Handle = SliceHandle;

    fn open(&mut self, name: &str) -> Result<SliceHandle, StorageError> {
        if name == self.name {
            Ok(SliceHandle { pos: 0 })
        } else {
            Err(StorageError::NotFound)
        }
    }

    fn size(&mut self, _handle: &SliceHandle) -> u32 {
        self.declared_size.unwrap_or(self.data.len() as u32)
    }

    fn read_into(
        &mut self,
        handle: &mut SliceHandle,
        buf: &mut [u8],
    ) -> Result<usize, StorageError> {
        let available = self.data.len() - handle.pos;
        let n = buf.len().min(available);
        buf[..n].copy_from_slice(&self.data[handle.pos..handle.pos + n]);
        handle.pos += n;
        Ok(n)
    }

    fn close(&mut self, _handle: SliceHandle) {
        self.closed += 1;
    }
}
