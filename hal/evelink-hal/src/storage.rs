//! Asset storage abstraction
//!
//! Assets (compressed images, raw pixel blocks) live on some external medium
//! - typically an SD card - and are read once, front to back, during a load
//! operation. This trait is the narrow boundary the loaders consume; it says
//! nothing about filesystems or caching.

/// Errors from the storage medium
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// No asset with the requested name
    NotFound,
    /// The medium failed mid-read
    Io,
}

/// A source of named, fixed-length byte assets
///
/// Handles are single-use: opened, drained sequentially with
/// [`read_into`](AssetStore::read_into), then closed. The total length is
/// known up front so callers can drive a remaining-bytes countdown.
pub trait AssetStore {
    /// Open-asset handle type
    type Handle;

    /// Open an asset by name
    fn open(&mut self, name: &str) -> Result<Self::Handle, StorageError>;

    /// Total length of the asset in bytes
    fn size(&mut self, handle: &Self::Handle) -> u32;

    /// Read up to `buf.len()` bytes from the current position
    ///
    /// Returns the number of bytes actually read. A return of zero before
    /// the declared size has been delivered means the asset is truncated.
    fn read_into(&mut self, handle: &mut Self::Handle, buf: &mut [u8])
        -> Result<usize, StorageError>;

    /// Close the handle, releasing any medium-side state
    fn close(&mut self, handle: Self::Handle);
}
