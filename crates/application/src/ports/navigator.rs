//! Navigator port

use url::Url;

/// Port for the user agent's address bar.
pub trait Navigator: Send + Sync {
    /// Returns the location currently shown.
    fn current_location(&self) -> Url;

    /// Sends the user agent to `url`.
    fn navigate(&self, url: &Url);

    /// Rewrites the visible location to `url` without loading it.
    fn replace_location(&self, url: &Url);
}
