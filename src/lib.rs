//! The Rust client for Mailtrap, an email delivery and email testing platform.
//!
//! # Overview
//!
//! The crate revolves around a [`Client`] built from a [`ClientConfig`]. The client sends email
//! through the transactional, bulk or sandbox host and hands out one API group per product area:
//!
//! - [`Client::sending_api`] and the [`Client::send`] shortcut,
//! - [`Client::testing_api`] for sandbox projects, inboxes, messages and attachments,
//! - [`Client::contacts_api`] for contacts, custom fields, lists and imports,
//! - [`Client::email_templates_api`] and [`Client::suppressions_api`].
//!
//! Every call is a single blocking HTTP request. Nothing is retried or cached.
//!
//! ```no_run
//! # fn main() -> mailtrap::Result<()> {
//! use mailtrap::{
//!     models::mail::{Address, Mail},
//!     ClientConfig,
//! };
//!
//! let client = ClientConfig::from_token("api-token").to_client()?;
//! let mail = Mail::builder(
//!     Address::new("hello@example.com").with_name("Mailtrap Test"),
//!     vec![Address::new("john@example.com")],
//!     "You are awesome!",
//! )
//! .text("Congrats for sending test email with Mailtrap!")
//! .build()?;
//!
//! let response = client.send(&mail)?;
//! println!("sent {:?}", response.message_ids);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. Configuration and parameter problems are reported
//! before any request is made. Failed responses carry the status code and the error messages
//! reported by the service, flattened into a list of strings.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate with the `mailtrap` target.
//! Each request is logged at `debug` level, failed responses at `warn` level. The API token is
//! never logged.
//!
//! # Examples
//!
//! Runnable programs live in the `demos` directory of the crate repository and read their settings
//! from `MAILTRAP_API_TOKEN`, `MAILTRAP_ACCOUNT_ID` and `MAILTRAP_INBOX_ID`.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
mod client;
mod config;
mod error;
mod http;
pub mod models;
mod params;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{HttpClient, ResponseBody};
pub use params::RequestParams;
