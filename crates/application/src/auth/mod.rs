//! Session handling.
//!
//! The session is a bearer token plus the signed-in user's profile, held
//! in memory and mirrored to a [`crate::ports::KeyValueStorage`].

mod session_store;

pub use session_store::SessionStore;
