//! Gatekeeper Domain - Core types
//!
//! This crate defines the domain model for the Gatekeeper authentication client.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod login_status;
pub mod provider;
pub mod recommendation;
pub mod redirect;
pub mod request;
pub mod response;
pub mod session;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use login_status::{LoginPhase, LoginStatus};
pub use provider::{LoginProvider, ProviderRedirect};
pub use recommendation::{HostId, IpLookupResponse, SmartLoginRecommendation};
pub use redirect::{RedirectParams, strip_query};
pub use session::{Session, SessionState, TOKEN_KEY, USER_KEY, token_preview};
pub use user::UserProfile;
