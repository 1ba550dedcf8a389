//! sm-client library
//!
//! Typed HTTP client for the shop management REST API. Responses are
//! validated into `sm-core` domain models at this boundary; callers never
//! see raw JSON.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, ClientError, ClientResult};
