//! Observability for taskdesk
//!
//! - Structured logging through `tracing`
//! - Typed lifecycle and request events
//!
//! # Usage
//!
//! ```ignore
//! use taskdesk::observability::{init_logging, Event, LogFormat};
//!
//! init_logging("info", LogFormat::Json)?;
//! tracing::info!(event = %Event::BootStart, "starting");
//! ```

mod events;
mod logging;

pub use events::Event;
pub use logging::{init_logging, parse_filter, LogFormat, LoggingError};
