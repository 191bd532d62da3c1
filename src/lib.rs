/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # Veem Client
//!
//! Asynchronous client for the Veem payments API.
//!
//! The client takes care of the OAuth client-credentials flow, refreshing the
//! bearer token transparently before it expires, and exposes one accessor per
//! remote resource:
//!
//! - contacts and customers
//! - payments (including batches, approval and cancellation)
//! - invoices
//! - exchange rate quotes
//! - attachments (multipart upload, binary download)
//! - country/currency metadata
//!
//! List endpoints return a [`model::pagination::Page`] that knows how to
//! fetch its successor.
//!
//! ## Usage
//!
//! ```ignore
//! use veem_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//!
//! let page = client.contacts().list(&[Filter::email("ada@example.com")]).await?;
//! for contact in page.items() {
//!     info!("{} {}", contact.first_name, contact.last_name);
//! }
//! if page.has_next() {
//!     let second = page.next().await?;
//! }
//! ```

/// Client configuration, token management, rate limiting and resource services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire-level models, filters, pagination and the HTTP dispatcher
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain records exchanged with the API
pub mod presentation;
/// Environment, logging and id helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
