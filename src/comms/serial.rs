//! Serial implementation of the comms channel.
//!
//! Wraps the `serialport` crate behind the [`Comms`] trait. Construction only
//! records the settings; the port itself is not touched until `open`.

use super::error::CommsError;
use super::traits::Comms;
use crate::config::SerialSettings;
use std::io::{Read, Write};
use std::time::Duration;

/// Read/write window handed to the driver. `serialport` defaults to a zero
/// timeout, which would make every blocking read return immediately.
const DRIVER_TIMEOUT: Duration = Duration::from_secs(1);

/// Comms channel backed by a serial port.
///
/// Holds the configured settings and, once `open` has succeeded, the live
/// driver handle. The handle is exclusively owned; dropping it on `close`
/// releases the port.
pub struct SerialComms {
    settings: SerialSettings,
    handle: Option<Box<dyn serialport::SerialPort>>,
}

impl SerialComms {
    /// Create a channel configured from `settings` without opening the port.
    pub fn new(settings: SerialSettings) -> Self {
        Self {
            settings,
            handle: None,
        }
    }

    /// The configured port path, if any.
    pub fn port(&self) -> Option<&str> {
        self.settings.port.as_deref()
    }

    /// The configured baud rate.
    pub fn baud_rate(&self) -> u32 {
        self.settings.baud_rate
    }

    /// Whether the underlying port is currently open.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

impl Comms for SerialComms {
    fn open(&mut self) -> Result<(), CommsError> {
        if self.handle.is_some() {
            return Err(CommsError::AlreadyOpen);
        }

        let port = self.settings.port.as_deref().ok_or(CommsError::PortUnset)?;

        let handle = serialport::new(port, self.settings.baud_rate)
            .timeout(DRIVER_TIMEOUT)
            .open()
            .map_err(|e| CommsError::unavailable(port, e))?;

        tracing::debug!(port, baud_rate = self.settings.baud_rate, "opened serial channel");
        self.handle = Some(handle);
        Ok(())
    }

    fn close(&mut self) -> Result<(), CommsError> {
        if self.handle.take().is_some() {
            tracing::debug!(port = self.settings.port.as_deref(), "closed serial channel");
        }
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), CommsError> {
        let handle = self.handle.as_mut().ok_or(CommsError::NotOpen)?;
        handle.write_all(data).map_err(CommsError::Write)?;
        tracing::trace!(bytes = data.len(), "wrote to serial channel");
        Ok(())
    }

    fn read(&mut self, num_bytes: usize) -> Result<Vec<u8>, CommsError> {
        let handle = self.handle.as_mut().ok_or(CommsError::NotOpen)?;
        let mut buffer = vec![0u8; num_bytes];
        handle.read_exact(&mut buffer).map_err(CommsError::Read)?;
        tracing::trace!(bytes = num_bytes, "read from serial channel");
        Ok(buffer)
    }
}

impl std::fmt::Debug for SerialComms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialComms")
            .field("port", &self.settings.port)
            .field("baud_rate", &self.settings.baud_rate)
            .field("open", &self.handle.is_some())
            .finish()
    }
}
