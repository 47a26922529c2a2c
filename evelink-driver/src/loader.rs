//! Asset loaders
//!
//! Three entry points, one streaming routine. The ZLIB and JPEG paths
//! announce a coprocessor operation, feed the asset through the command
//! FIFO chunk by chunk, drain the FIFO, then read back the chip-computed
//! end address. The raw path is a pure memory copy with no coprocessor
//! involvement at all.

use evelink_hal::{AssetStore, MemoryPort};
use evelink_protocol::commands;
use evelink_protocol::ring::{FIFO_CAPACITY, FIFO_RESERVE};

use crate::channel::CommandChannel;
use crate::stream::copy_chunks;
use crate::Error;

/// Which load operation to announce, and where the bytes go
#[derive(Debug, Clone, Copy)]
enum LoadKind {
    /// ZLIB inflate through the FIFO
    Inflate,
    /// JPEG/PNG decode through the FIFO, with an options word
    Decode { options: u32 },
    /// Direct copy into graphics RAM, no coprocessor operation
    Raw,
}

/// Streams named assets into chip memory
///
/// Borrows the channel, the storage collaborator and a staging buffer for
/// a sequence of loads. The staging slice bounds peak host memory per
/// transfer; it must be non-empty and fit the command ring.
pub struct AssetLoader<'a, P, S> {
    channel: &'a mut CommandChannel<P>,
    store: &'a mut S,
    staging: &'a mut [u8],
}

impl<'a, P: MemoryPort, S: AssetStore> AssetLoader<'a, P, S> {
    /// Create a loader around an idle channel
    pub fn new(
        channel: &'a mut CommandChannel<P>,
        store: &'a mut S,
        staging: &'a mut [u8],
    ) -> Self {
        debug_assert!(!staging.is_empty());
        debug_assert!(staging.len() as u32 <= FIFO_CAPACITY - FIFO_RESERVE);
        Self {
            channel,
            store,
            staging,
        }
    }

    /// Inflate a ZLIB-compressed asset into graphics RAM at `dest`
    ///
    /// Returns the last address used during inflation.
    pub fn load_zlib(&mut self, dest: u32, name: &str) -> Result<u32, Error> {
        self.load(dest, name, LoadKind::Inflate)
    }

    /// Decode a JPEG asset into graphics RAM at `dest`
    ///
    /// `options` is passed to the decoder unchanged. Returns the last
    /// address used during the decode.
    pub fn load_jpeg(&mut self, dest: u32, options: u32, name: &str) -> Result<u32, Error> {
        self.load(dest, name, LoadKind::Decode { options })
    }

    /// Copy a raw pixel asset into graphics RAM at `dest`
    ///
    /// Synchronous memory pokes; no FIFO traffic and no idle wait. Returns
    /// the next free address after the copy.
    pub fn load_raw(&mut self, dest: u32, name: &str) -> Result<u32, Error> {
        self.load(dest, name, LoadKind::Raw)
    }

    fn load(&mut self, dest: u32, name: &str, kind: LoadKind) -> Result<u32, Error> {
        // Open before touching the channel: an unknown name must leave the
        // chip completely untouched.
        let mut handle = match self.store.open(name) {
            Ok(handle) => handle,
            Err(_) => return Err(Error::AssetNotFound),
        };
        let total = self.store.size(&handle);

        let result = self.run(dest, &mut handle, total, kind);
        self.store.close(handle);
        result
    }

    fn run(
        &mut self,
        dest: u32,
        handle: &mut S::Handle,
        total: u32,
        kind: LoadKind,
    ) -> Result<u32, Error> {
        let channel = &mut *self.channel;
        let store = &mut *self.store;
        let staging = &mut *self.staging;

        match kind {
            LoadKind::Inflate => {
                channel.append(commands::CMD_INFLATE)?;
                channel.append(dest)?;
            }
            LoadKind::Decode { options } => {
                channel.append(commands::CMD_LOADIMAGE)?;
                channel.append(dest)?;
                channel.append(options)?;
            }
            LoadKind::Raw => {}
        }

        if let LoadKind::Raw = kind {
            let mut next = dest;
            copy_chunks(store, handle, total, staging, |chunk| {
                next = channel.write_block(next, chunk)?;
                Ok(())
            })?;
            return Ok(next);
        }

        // Trigger after every chunk so the coprocessor consumes earlier
        // chunks while later ones are still being read from storage.
        copy_chunks(store, handle, total, staging, |chunk| {
            channel.append_bytes(chunk)?;
            channel.trigger()
        })?;

        channel.wait_idle()?;
        channel.result_pointer()
    }
}
