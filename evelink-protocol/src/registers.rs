//! FT81x memory map and register addresses
//!
//! Only the registers this driver touches are listed; the chip has many
//! more. All addresses are absolute within the chip's 22-bit space.

/// Graphics RAM base (1 MiB, destination for decoded/loaded assets)
pub const RAM_G: u32 = 0x00_0000;

/// Display list RAM base (8 KiB)
pub const RAM_DL: u32 = 0x30_0000;

/// Register file base
pub const RAM_REG: u32 = 0x30_2000;

/// Command FIFO base (4 KiB ring)
pub const RAM_CMD: u32 = 0x30_8000;

/// Coprocessor read pointer: offset of the next word the chip will execute
pub const REG_CMD_READ: u32 = RAM_REG + 0xF8;

/// Coprocessor write pointer: publishing here hands appended words to the chip
pub const REG_CMD_WRITE: u32 = RAM_REG + 0xFC;

/// Display list swap control
pub const REG_DLSWAP: u32 = RAM_REG + 0x54;

/// `REG_DLSWAP` value: swap after the current frame completes
pub const DLSWAP_FRAME: u8 = 0x02;
