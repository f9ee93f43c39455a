//! Host-bundle model shared by browser and headless runtime composition.

use std::rc::Rc;

use crate::{
    ExternalUrlService, HostRandom, MemoryExternalUrlService, MemoryPrefsStore, NoopResourceProbe,
    PrefsStore, RandomSource, ResourceProbe,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`window`, `localStorage`, image elements).
    Browser,
    /// Composition without a browsing context: state lives in memory and every probe fails.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host service bundle injected into the homepage runtime.
///
/// Service selection happens before this bundle crosses into `homepage_runtime`, which keeps the
/// runtime free of browser adapter details and lets tests swap in memory-backed services.
#[derive(Clone)]
pub struct HostServices {
    /// Persistent preference store (holds the dark-mode flag).
    pub prefs: Rc<dyn PrefsStore>,
    /// Opens search results in a new browsing context.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Image-load probe used by favicon and background fallback chains.
    pub resources: Rc<dyn ResourceProbe>,
    /// Uniform index source for randomised picks.
    pub random: Rc<dyn RandomSource>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Returns an in-memory bundle. Preferences and opened URLs are kept for the life of the
    /// bundle's services and every resource probe fails.
    ///
    /// Callers that need to inspect what the runtime wrote build the bundle with their own
    /// handles, e.g. `HostServices { prefs: Rc::new(store.clone()), ..HostServices::headless() }`.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            external_urls: Rc::new(MemoryExternalUrlService::default()),
            resources: Rc::new(NoopResourceProbe),
            random: Rc::new(HostRandom),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn headless_bundle_keeps_prefs_and_fails_probes() {
        let services = HostServices::headless();
        assert_eq!(services.host_strategy, HostStrategy::Headless);

        block_on(services.prefs.save_pref("darkMode", "true")).expect("save");
        assert_eq!(
            block_on(services.prefs.load_pref("darkMode")).expect("load"),
            Some("true".to_string())
        );
        block_on(services.external_urls.open_url("https://example.com")).expect("open");
        assert!(block_on(services.resources.probe("https://example.com/a.png")).is_err());
        assert!(services.random.next_index(3) < 3);
    }

    #[test]
    fn shared_handles_observe_runtime_writes() {
        let urls = MemoryExternalUrlService::default();
        let services = HostServices {
            external_urls: Rc::new(urls.clone()),
            ..HostServices::headless()
        };
        block_on(services.external_urls.open_url("https://www.google.com/search?q=rust"))
            .expect("open");
        assert_eq!(
            urls.opened(),
            vec!["https://www.google.com/search?q=rust".to_string()]
        );
    }
}
