//! Mock comms channel for testing.
//!
//! Provides a loopback [`MockComms`] that simulates a channel without
//! hardware: written bytes are queued and handed back by `read`, and every
//! operation is recorded so tests can assert exact call sequences.

use super::error::CommsError;
use super::traits::Comms;
use std::collections::VecDeque;

/// One observed channel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Open,
    Close,
    Write,
    Read,
}

/// Loopback test double for the [`Comms`] trait.
///
/// Enforces the same lifecycle as [`SerialComms`](crate::comms::SerialComms):
/// `write`/`read` before `open` fail with [`CommsError::NotOpen`], reopening
/// an open channel fails with [`CommsError::AlreadyOpen`], and `close` is
/// idempotent.
///
/// # Example
/// ```
/// use device_comms::comms::{Comms, MockComms};
///
/// let mut channel = MockComms::new();
/// channel.open().unwrap();
/// channel.write(b"Hello").unwrap();
/// assert_eq!(channel.read(5).unwrap(), b"Hello");
/// channel.close().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockComms {
    /// Bytes written and not yet read back.
    loopback: VecDeque<u8>,
    /// Ordered log of every operation invoked.
    ops: Vec<Op>,
    /// Whether the channel is currently open.
    open: bool,
    /// Error to return from the next operation, if set.
    fail_next: Option<CommsError>,
}

impl MockComms {
    /// Create a closed mock channel with an empty loopback buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered log of operations observed so far.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of written bytes not yet read back.
    pub fn pending_bytes(&self) -> usize {
        self.loopback.len()
    }

    /// Make the next operation fail with `err` instead of succeeding.
    pub fn fail_next_with(&mut self, err: CommsError) {
        self.fail_next = Some(err);
    }

    fn take_injected_failure(&mut self) -> Result<(), CommsError> {
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Comms for MockComms {
    fn open(&mut self) -> Result<(), CommsError> {
        self.ops.push(Op::Open);
        self.take_injected_failure()?;
        if self.open {
            return Err(CommsError::AlreadyOpen);
        }
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), CommsError> {
        self.ops.push(Op::Close);
        self.take_injected_failure()?;
        self.open = false;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), CommsError> {
        self.ops.push(Op::Write);
        self.take_injected_failure()?;
        if !self.open {
            return Err(CommsError::NotOpen);
        }
        self.loopback.extend(data);
        Ok(())
    }

    fn read(&mut self, num_bytes: usize) -> Result<Vec<u8>, CommsError> {
        self.ops.push(Op::Read);
        self.take_injected_failure()?;
        if !self.open {
            return Err(CommsError::NotOpen);
        }
        if self.loopback.len() < num_bytes {
            // A real driver would block until its timeout elapsed.
            return Err(CommsError::Read(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "read timed out",
            )));
        }
        Ok(self.loopback.drain(..num_bytes).collect())
    }
}
