//! Observable events
//!
//! Every structured log line carries one of these as its `event` field.
//! Events are explicit and typed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Seed snapshot loaded into the store
    SnapshotLoaded,
    /// Listener bound, ready to serve
    ServerListening,
    /// Shutdown signal received
    ShutdownStart,

    // Requests
    /// A request finished
    RequestComplete,
    /// A record was appended to a collection
    RecordCreated,
    /// A record was removed from a collection
    RecordDeleted,
    /// A structured payload could not be decoded
    PayloadRejected,
    /// A failure was swallowed by the negotiation gate
    FailureSuppressed,
    /// A failure outside the negotiated taxonomy
    InternalFailure,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SnapshotLoaded => "SNAPSHOT_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::PayloadRejected => "PAYLOAD_REJECTED",
            Event::FailureSuppressed => "FAILURE_SUPPRESSED",
            Event::InternalFailure => "INTERNAL_FAILURE",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        for event in [
            Event::BootStart,
            Event::SnapshotLoaded,
            Event::RequestComplete,
            Event::FailureSuppressed,
        ] {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
            assert_eq!(event.to_string(), name);
        }
    }
}
