//! Memory-mapped port abstraction
//!
//! The EVE chips expose their registers, display list, graphics RAM and
//! command FIFO as one flat address space reached over a serial transport.
//! Implementations of [`MemoryPort`] own the transport framing (chip select,
//! address phase, dummy cycles) and present plain addressed accesses here.

/// Errors from the underlying byte transport
///
/// The driver never retries a failed transaction; a transport fault is
/// assumed to be a wiring or link problem, and recovery (up to a full
/// device reset) is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// A read transaction failed
    Read,
    /// A write transaction failed
    Write,
}

/// Addressed access into the coprocessor's memory map
///
/// All operations are synchronous: when a call returns `Ok`, the bytes have
/// been clocked out on (or in from) the wire. Multi-byte values use the
/// chip's mandated little-endian ordering; implementations must not reorder.
pub trait MemoryPort {
    /// Read one byte
    fn rd8(&mut self, address: u32) -> Result<u8, TransportError>;

    /// Read a 16-bit little-endian value
    fn rd16(&mut self, address: u32) -> Result<u16, TransportError>;

    /// Read a 32-bit little-endian value
    fn rd32(&mut self, address: u32) -> Result<u32, TransportError>;

    /// Write one byte
    fn wr8(&mut self, address: u32, value: u8) -> Result<(), TransportError>;

    /// Write a 16-bit value in little-endian order
    fn wr16(&mut self, address: u32, value: u16) -> Result<(), TransportError>;

    /// Write a 32-bit value in little-endian order
    fn wr32(&mut self, address: u32, value: u32) -> Result<(), TransportError>;

    /// Write a contiguous block of bytes starting at `address`
    ///
    /// The block is transferred as-is; any ring wrapping is the caller's
    /// responsibility.
    fn wr_bytes(&mut self, address: u32, data: &[u8]) -> Result<(), TransportError>;
}
