//! Typed host-domain contracts shared by the homepage runtime and its browser adapters.
//!
//! This crate is the API boundary for everything the page needs from its environment: a small
//! preference store, opening URLs in a new browsing context, probing whether a remote image
//! loads, and a random index source. Concrete browser adapters live in `platform_host_web`.
//! In-memory implementations here back the runtime's tests on non-wasm targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod random;
pub mod resource_probe;
pub mod storage;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use random::{random_index, HostRandom, RandomSource, SequenceRandom};
pub use resource_probe::{
    NoopResourceProbe, ResourceProbe, ResourceProbeFuture, ScriptedResourceProbe,
};
pub use storage::prefs::{
    load_flag_with, load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
    PrefsStoreFuture,
};
