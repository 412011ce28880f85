//! Core trait for comms channels.
//!
//! Defines the `Comms` trait that every transport implementation provides,
//! allowing real serial hardware and mock implementations to be used
//! interchangeably.

use super::error::CommsError;

/// A byte-oriented communication channel.
///
/// Implementations own exactly one underlying resource. The lifecycle is
/// unopened -> open -> closed and is enforced: `write` and `read` on a
/// channel that is not open fail with [`CommsError::NotOpen`], and `open` on
/// an already-open channel fails with [`CommsError::AlreadyOpen`]. `close` on
/// an already-closed channel is a no-op.
///
/// All operations block the calling thread for as long as the underlying
/// driver blocks. Implementations carry no internal locking; `&mut self`
/// makes shared concurrent use a compile error rather than a data race.
pub trait Comms: Send + std::fmt::Debug {
    /// Acquire the underlying communication resource.
    fn open(&mut self) -> Result<(), CommsError>;

    /// Release the resource. No-op if the channel is not open.
    fn close(&mut self) -> Result<(), CommsError>;

    /// Send all of `data` over the channel.
    fn write(&mut self, data: &[u8]) -> Result<(), CommsError>;

    /// Read exactly `num_bytes` bytes from the channel.
    ///
    /// Blocks until the bytes are available or the driver's own timeout
    /// elapses; a timeout surfaces as [`CommsError::Read`] with a
    /// `TimedOut` source, propagated unchanged.
    fn read(&mut self, num_bytes: usize) -> Result<Vec<u8>, CommsError>;
}
