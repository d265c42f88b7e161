//! Clock port

use chrono::{DateTime, Utc};

/// Port for reading wall-clock time.
///
/// Host identifiers are derived from it, so tests pin it to a fixed instant.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
