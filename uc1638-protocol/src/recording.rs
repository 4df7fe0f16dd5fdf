//! Recording transport for host testing
//!
//! Captures every call in order so tests can assert on the exact byte
//! stream an operation produced. Failures can be injected after a given
//! number of successful calls.

extern crate std;

use std::vec::Vec;

use crate::transport::{ResetTiming, Transport};

/// One recorded transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `send_command`
    Command(u8),
    /// `send_data`
    Data(u8),
    /// `send_data_bulk`
    Bulk(Vec<u8>),
    /// `reset_pulse`
    Reset(ResetTiming),
    /// `delay_ms`
    Delay(u32),
}

/// Error returned once the injected failure point is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectedFailure;

/// Transport that records instead of transmitting
#[derive(Debug, Default)]
pub struct RecordingTransport {
    events: Vec<Event>,
    fail_after: Option<usize>,
    sent: usize,
}

impl RecordingTransport {
    /// Create a transport that accepts every call
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that fails every sending call after `calls` successes
    ///
    /// Delays never fail and are not counted.
    pub fn failing_after(calls: usize) -> Self {
        Self {
            fail_after: Some(calls),
            ..Self::default()
        }
    }

    /// Calls recorded so far
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Payloads of every bulk transfer, in order
    pub fn bulk_transfers(&self) -> impl Iterator<Item = &[u8]> {
        self.events.iter().filter_map(|e| match e {
            Event::Bulk(bytes) => Some(bytes.as_slice()),
            _ => None,
        })
    }

    fn record(&mut self, event: Event) -> Result<(), InjectedFailure> {
        if let Some(limit) = self.fail_after {
            if self.sent >= limit {
                return Err(InjectedFailure);
            }
        }
        self.sent += 1;
        self.events.push(event);
        Ok(())
    }
}

impl Transport for RecordingTransport {
    type Error = InjectedFailure;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.record(Event::Command(command))
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        self.record(Event::Data(data))
    }

    fn send_data_bulk(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.record(Event::Bulk(data.to_vec()))
    }

    fn reset_pulse(&mut self, timing: ResetTiming) -> Result<(), Self::Error> {
        self.record(Event::Reset(timing))
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay(ms));
    }
}
