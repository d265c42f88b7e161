//! Gatekeeper Application - Client logic and ports
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP, storage, navigation, clock)
//! - The session store mirrored to persistent storage
//! - [`AuthClient`], which drives the login flows against the backend

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod ports;

#[cfg(test)]
mod testing;

pub use auth::SessionStore;
pub use client::{AuthClient, BootstrapOutcome};
pub use config::ClientConfig;
pub use error::{AuthClientError, AuthResult};
pub use ports::{Clock, HttpClient, HttpClientError, KeyValueStorage, Navigator, StorageError};
