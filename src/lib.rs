//! Thin comms-channel abstraction over serial ports for device test rigs.
//!
//! A caller builds [`SerialSettings`] from a configuration mapping, hands it
//! to [`SerialComms`], opens the channel, exchanges bytes, and closes it:
//!
//! ```no_run
//! use device_comms::{Comms, SerialComms, SerialSettings};
//!
//! let settings = SerialSettings::new("/dev/ttyUSB0", 115_200);
//! let mut channel = SerialComms::new(settings);
//!
//! channel.open()?;
//! channel.write(b"*IDN?\n")?;
//! let reply = channel.read(32)?;
//! channel.close()?;
//! # Ok::<(), device_comms::CommsError>(())
//! ```
//!
//! # Modules
//!
//! - `comms`: the [`Comms`] trait, serial implementation, and mock double
//! - `config`: settings value and construction from configuration
//!
//! Errors from the driver are propagated unchanged; this crate never retries,
//! frames, or buffers on its own.

pub mod comms;
pub mod config;

pub use comms::{Comms, CommsError, MockComms, SerialComms};
pub use config::{ConfigError, ConfigResult, SerialSettings};
