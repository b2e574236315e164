//! # Negotiation & Error Signaling
//!
//! A not-found lookup or a caught payload failure is not rejected
//! unconditionally. The client's `Accept` header decides whether the
//! failure is signaled (status code plus message) or falls through with
//! an empty body.
//!
//! With the default polarity a failure is
//! signaled only when the client accepts the non-JSON (XML)
//! representation. A client that sends no `Accept` header accepts
//! everything and therefore sees the failure; a client that asks for
//! `application/json` only does not. [`FailureGate::WhenXmlRejected`]
//! selects the opposite polarity.

mod accept;

pub use accept::AcceptedFormats;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Polarity of the failure gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FailureGate {
    /// Signal only if the client accepts XML
    #[default]
    WhenXmlAccepted,
    /// Signal only if the client does not accept XML
    WhenXmlRejected,
}

impl FailureGate {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureGate::WhenXmlAccepted => "when_xml_accepted",
            FailureGate::WhenXmlRejected => "when_xml_rejected",
        }
    }
}

impl fmt::Display for FailureGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decide whether a failing request is told about its failure.
pub fn should_signal_failure(gate: FailureGate, accepted: &AcceptedFormats) -> bool {
    match gate {
        FailureGate::WhenXmlAccepted => accepted.accepts_xml(),
        FailureGate::WhenXmlRejected => !accepted.accepts_xml(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gate_signals_for_xml_capable_clients() {
        let gate = FailureGate::default();
        assert!(should_signal_failure(gate, &AcceptedFormats::any()));
        assert!(should_signal_failure(gate, &AcceptedFormats::parse("application/xml")));
        assert!(should_signal_failure(gate, &AcceptedFormats::parse("*/*")));
    }

    #[test]
    fn test_default_gate_is_silent_for_json_only_clients() {
        let gate = FailureGate::default();
        assert!(!should_signal_failure(gate, &AcceptedFormats::parse("application/json")));
        assert!(!should_signal_failure(gate, &AcceptedFormats::parse("text/plain")));
    }

    #[test]
    fn test_inverted_gate() {
        let gate = FailureGate::WhenXmlRejected;
        assert!(should_signal_failure(gate, &AcceptedFormats::parse("application/json")));
        assert!(!should_signal_failure(gate, &AcceptedFormats::any()));
    }

    #[test]
    fn test_gate_serde_names() {
        let gate: FailureGate = serde_json::from_str("\"when_xml_rejected\"").unwrap();
        assert_eq!(gate, FailureGate::WhenXmlRejected);
        assert_eq!(FailureGate::default().to_string(), "when_xml_accepted");
    }
}
