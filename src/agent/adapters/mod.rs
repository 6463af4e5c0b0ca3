//! Adapter implementations for the transport port.

pub mod http;
pub mod memory;

pub use http::{HttpTransport, HttpTransportOptions};
pub use memory::{RecordedRequest, RecordingTransport};
