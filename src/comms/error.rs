//! Channel-specific error types.
//!
//! Every variant originates in the serial driver or in channel lifecycle
//! misuse; errors are propagated to the caller unchanged, never retried or
//! recovered here.

use thiserror::Error;

/// Errors that can occur on a comms channel.
#[derive(Debug, Error)]
pub enum CommsError {
    /// The underlying device could not be opened (absent, busy, permission
    /// denied). Carries the driver error verbatim.
    #[error("transport unavailable on '{port}': {source}")]
    Unavailable {
        port: String,
        #[source]
        source: serialport::Error,
    },

    /// `open` was called with no port configured in the settings.
    #[error("no serial port configured")]
    PortUnset,

    /// `open` was called on a channel that is already open.
    #[error("channel is already open")]
    AlreadyOpen,

    /// `write` or `read` was called on a channel that is not open.
    #[error("channel is not open")]
    NotOpen,

    /// The driver rejected a write.
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    /// The driver rejected a read, or the driver-level timeout elapsed
    /// before the requested bytes arrived.
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
}

impl CommsError {
    /// Create an `Unavailable` error from a port name and driver error.
    pub fn unavailable(port: impl Into<String>, source: serialport::Error) -> Self {
        Self::Unavailable {
            port: port.into(),
            source,
        }
    }

    /// Whether this error is the driver's read timeout surfacing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Read(e) if e.kind() == std::io::ErrorKind::TimedOut)
    }
}
