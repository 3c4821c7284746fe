//! Typed client for the DooTask collaboration platform HTTP API.
//!
//! The client builds requests from typed parameter records, dispatches them
//! with the `Token` authentication header, validates the `{ret, msg, data}`
//! response envelope, and deserializes the payload into typed result records.
//!
//! ```rust,no_run
//! use dootask::{DooTaskClient, types::SendMessageToUserRequest};
//!
//! let client = DooTaskClient::builder("my-token")
//!     .server("https://dootask.example.com")
//!     .build()?;
//!
//! let me = client.get_user_info()?;
//! client.send_message_to_user(SendMessageToUserRequest::new(5, "hi"))?;
//! # Ok::<(), dootask::DooTaskError>(())
//! ```
//!
//! All calls are synchronous and block until the transport completes or the
//! per-client timeout fires. Nothing is retried at this layer; every failure
//! propagates as a [`DooTaskError`] and the caller owns retry policy.

#![deny(unsafe_code)]

mod api;
mod cache;
mod client;
mod encoding;
mod response;

pub mod error;
pub mod types;

pub use client::{DooTaskClient, DooTaskClientBuilder};
pub use error::DooTaskError;
