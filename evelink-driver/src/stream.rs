//! Chunked streaming from storage into a sink
//!
//! Moves an arbitrarily long asset through a small caller-owned staging
//! buffer: peak host memory is bounded by the staging slice regardless of
//! asset size. Each filled chunk goes to the sink before the next read, so
//! a FIFO sink overlaps storage latency with chip-side processing.

use evelink_hal::AssetStore;

use crate::Error;

/// Stream `total` bytes from an open asset into `sink`
///
/// Reads chunks of `min(remaining, staging.len())` bytes; only the final
/// chunk may be short. Short reads from the medium are passed through
/// as-is; a zero-length read with bytes still remaining means the asset is
/// shorter than declared and fails with [`Error::Truncated`]. Sink errors
/// propagate without retry.
pub fn copy_chunks<S, F>(
    store: &mut S,
    handle: &mut S::Handle,
    total: u32,
    staging: &mut [u8],
    mut sink: F,
) -> Result<(), Error>
where
    S: AssetStore,
    F: FnMut(&[u8]) -> Result<(), Error>,
{
    debug_assert!(!staging.is_empty());

    let mut remaining = total;
    while remaining > 0 {
        let want = staging.len().min(remaining as usize);
        let got = store
            .read_into(handle, &mut staging[..want])
            .map_err(|_| Error::Storage)?;
        if got == 0 {
            return Err(Error::Truncated);
        }
        sink(&staging[..got])?;
        remaining -= got as u32;
    }
    Ok(())
}
