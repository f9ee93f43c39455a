use std::rc::Rc;

use platform_host::{
    ExternalUrlFuture, ExternalUrlService, HostRandom, HostServices, HostStrategy,
    NoopExternalUrlService, NoopPrefsStore, NoopResourceProbe, PrefsStore, PrefsStoreFuture,
    ResourceProbe, ResourceProbeFuture,
};

use crate::{WebExternalUrlService, WebImageProbe, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preferences backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// `localStorage` preference storage.
    Browser(WebPrefsStore),
    /// Nothing persists.
    Headless(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Headless(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Headless(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Headless(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete external URL backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// `window.open` in a new tab.
    Browser(WebExternalUrlService),
    /// Opening is silently skipped.
    Headless(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url),
            Self::Headless(service) => service.open_url(url),
        }
    }
}

/// Adapter enum that erases the concrete image probe behind [`ResourceProbe`].
#[derive(Debug, Clone, Copy)]
pub enum ResourceProbeAdapter {
    /// Detached image element probing.
    Browser(WebImageProbe),
    /// Every probe fails, so fallback chains go straight to their terminal action.
    Headless(NoopResourceProbe),
}

impl ResourceProbe for ResourceProbeAdapter {
    fn probe<'a>(&'a self, url: &'a str) -> ResourceProbeFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(probe) => probe.probe(url),
            Self::Headless(probe) => probe.probe(url),
        }
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Headless(NoopPrefsStore),
    }
}

/// Builds the external-URL adapter for the compile-time selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        HostStrategy::Headless => ExternalUrlServiceAdapter::Headless(NoopExternalUrlService),
    }
}

/// Builds the image-probe adapter for the compile-time selected host strategy.
pub fn resource_probe() -> ResourceProbeAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ResourceProbeAdapter::Browser(WebImageProbe),
        HostStrategy::Headless => ResourceProbeAdapter::Headless(NoopResourceProbe),
    }
}

/// Assembles the full [`HostServices`] bundle for the selected host strategy.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        external_urls: Rc::new(external_url_service()),
        resources: Rc::new(resource_probe()),
        random: Rc::new(HostRandom),
        host_strategy: selected_host_strategy(),
    }
}
