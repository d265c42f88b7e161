//! Terminal stand-in for a browser address bar.

use gatekeeper_application::ports::Navigator;
use parking_lot::RwLock;
use url::Url;

/// Tracks a location and prints every URL the user should open.
///
/// A command-line session has no address bar; [`Self::set_location`]
/// plays the part of the browser landing on a redirect URL.
#[derive(Debug)]
pub struct ConsoleNavigator {
    location: RwLock<Url>,
}

impl ConsoleNavigator {
    /// Creates a navigator whose initial location is `location`.
    #[must_use]
    pub fn new(location: Url) -> Self {
        Self {
            location: RwLock::new(location),
        }
    }

    /// Moves to `url` without printing anything.
    pub fn set_location(&self, url: Url) {
        *self.location.write() = url;
    }
}

impl Navigator for ConsoleNavigator {
    fn current_location(&self) -> Url {
        self.location.read().clone()
    }

    fn navigate(&self, url: &Url) {
        tracing::debug!(%url, "navigating");
        println!("Open this URL in your browser:\n  {url}");
        self.set_location(url.clone());
    }

    fn replace_location(&self, url: &Url) {
        tracing::debug!(%url, "location replaced");
        self.set_location(url.clone());
    }
}
