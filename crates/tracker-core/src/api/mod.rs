//! API Client
//!
//! Typed bindings to the tracker's JSON endpoints, organized by concern.

mod client;
mod transport;

pub use client::*;
pub use transport::*;
