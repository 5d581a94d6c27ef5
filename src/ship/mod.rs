//! Log shipping.
//!
//! # Data Flow
//! ```text
//! LogDetails + configured tag
//!     → payload.rs (OutboundPayload, fixed JSON field names)
//!     → shipper.rs (POST {api_base}{logs_path}, response discarded)
//! ```
//!
//! # Design Decisions
//! - Exactly one attempt; no retry, no batching
//! - Failures never reach the request that triggered them

pub mod payload;
pub mod shipper;

pub use payload::{OutboundPayload, PayloadMeta};
pub use shipper::LogShipper;
