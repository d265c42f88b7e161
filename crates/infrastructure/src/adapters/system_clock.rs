//! System clock adapter

use chrono::{DateTime, Utc};
use gatekeeper_application::ports::Clock;

/// Wall-clock time, used for host identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekeeper_domain::HostId;

    #[test]
    fn test_host_id_from_system_clock_is_current() {
        let before = Utc::now().timestamp_millis();
        let id = HostId::from_timestamp(SystemClock::new().now());

        let millis: i64 = id.as_str().trim_start_matches("web-").parse().unwrap_or(0);
        assert!(millis >= before);
    }
}
