//! taskdesk - in-memory actor/assignment records over HTTP/JSON
//!
//! One generic engine serves either record schema:
//! - forestry: foresters, supervisors, and the tasks linking them
//! - classroom: students, teachers, and the tests linking them

pub mod cli;
pub mod engine;
pub mod http_server;
pub mod negotiation;
pub mod observability;
pub mod schema;
pub mod store;
