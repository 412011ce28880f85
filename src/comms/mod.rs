//! Comms channel abstraction layer.
//!
//! Provides the [`Comms`] trait, the serial implementation, and a mock
//! implementation for testing without hardware.

pub mod error;
pub mod mock;
pub mod serial;
pub mod traits;

pub use error::CommsError;
pub use mock::{MockComms, Op};
pub use serial::SerialComms;
pub use traits::Comms;
