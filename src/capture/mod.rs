//! Metadata extraction.
//!
//! # Data Flow
//! ```text
//! inbound Request
//!     → request.rs (protocol, URL, method, path, client IP, headers)
//!     → probe.rs (GET app_url for a status line)
//!     → process.rs (timestamp, hostname, memory)
//!     → details.rs (LogDetails)
//! ```

pub mod details;
pub mod headers;
pub mod probe;
pub mod process;
pub mod request;

pub use details::{LogDetails, ProcessFacts};
pub use headers::flatten_headers;
pub use probe::{ProbeStatus, SelfProbe, PROBE_HEADER};
pub use request::RequestFacts;
