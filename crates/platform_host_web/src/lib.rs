//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the homepage runtime to `localStorage`, `window.open`, and detached image
//! elements. On non-wasm targets every adapter degrades to the same behaviour as the
//! corresponding no-op service, so the runtime's tests can link it without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and adapter factories for runtime wiring.
pub mod adapters;
pub mod external_url;
pub mod image_probe;
pub mod storage;

pub use adapters::{
    build_host_services, external_url_service, host_strategy_name, prefs_store, resource_probe,
    selected_host_strategy, ExternalUrlServiceAdapter, PrefsStoreAdapter, ResourceProbeAdapter,
};
pub use external_url::WebExternalUrlService;
pub use image_probe::WebImageProbe;
pub use storage::local_prefs::WebPrefsStore;
