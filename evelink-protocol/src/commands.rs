//! Coprocessor command opcodes
//!
//! Coprocessor commands are 32-bit words in the `0xFFFF_FFxx` range,
//! followed in the FIFO by their little-endian operand words. Ordering
//! within a submission is significant and preserved exactly.

/// One 32-bit coprocessor instruction or operand
///
/// Opaque to the host: the driver moves these words, it does not interpret
/// them. Wire order is the chip's fixed little-endian layout.
pub type CommandWord = u32;

/// Start a new display list
pub const CMD_DLSTART: CommandWord = 0xFFFF_FF00;

/// Swap the current display list onto the screen
pub const CMD_SWAP: CommandWord = 0xFFFF_FF01;

/// Inflate ZLIB-compressed data following in the FIFO into graphics RAM
pub const CMD_INFLATE: CommandWord = 0xFFFF_FF22;

/// Report the first unused graphics RAM address after an inflate/decode
///
/// The result is written back into the FIFO itself; see
/// [`crate::ring::RESULT_BACKSTEP`] for where.
pub const CMD_GETPTR: CommandWord = 0xFFFF_FF23;

/// Decode a JPEG/PNG image following in the FIFO into graphics RAM
pub const CMD_LOADIMAGE: CommandWord = 0xFFFF_FF24;
