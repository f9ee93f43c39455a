//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches timers, the DOM, storage or the network
//! runs here behind the injected [`HostServices`] bundle.

mod boot;
mod host_ui;
mod loaders;
mod music_bridge;

use std::rc::Rc;

use leptos::{logging, spawn_local, Callback, SignalGetUntracked};
use platform_host::{ExternalUrlService, HostServices, PrefsStore, RandomSource, ResourceProbe};

pub use self::music_bridge::MusicBridge;
use crate::{
    model::{Size, ThemeMode},
    persistence,
    reducer::{HomeAction, RuntimeEffect},
    runtime_context::HomeRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for homepage runtime side effects.
pub struct HomeHostContext {
    services: HostServices,
}

impl HomeHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    pub fn resource_probe(&self) -> Rc<dyn ResourceProbe> {
        self.services.resources.clone()
    }

    pub fn random_source(&self) -> Rc<dyn RandomSource> {
        self.services.random.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Reads the stored theme and hydrates it without transitions.
    pub fn install_boot_hydration(&self, dispatch: Callback<HomeAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Starts favicon resolution for every link and the background rotation timer.
    pub fn install_resource_loaders(&self, runtime: HomeRuntimeContext) {
        loaders::install_favicon_loader(self.clone(), runtime.dispatch);
        loaders::install_background_rotation(self.clone(), runtime.dispatch);
    }

    /// Schedules the third-party music player probe after the initial delay.
    pub fn install_music_probe(&self, runtime: HomeRuntimeContext) {
        music_bridge::install_music_probe(runtime);
    }

    /// Opens `url` through the injected external URL service.
    pub async fn open_external_url(&self, url: &str) -> Result<(), String> {
        self.services.external_urls.open_url(url).await
    }

    /// Writes the theme flag through the injected preference store.
    pub async fn persist_theme_mode(&self, mode: ThemeMode) -> Result<(), String> {
        persistence::persist_theme_mode(self.services.prefs.as_ref(), mode).await
    }

    /// Current viewport size in CSS pixels.
    pub fn viewport_size(&self) -> Size {
        host_ui::viewport_size()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: HomeRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistTheme => self.persist_theme(runtime),
            RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(self.clone(), &url),
            RuntimeEffect::ScrollToCategory(category_id) => {
                host_ui::scroll_to_category(&category_id)
            }
            RuntimeEffect::FocusSearchInput => host_ui::focus_search_input(),
            RuntimeEffect::BlurSearchInput => host_ui::blur_search_input(),
            RuntimeEffect::ScheduleDragBounce(target) => {
                host_ui::schedule_drag_bounce(runtime, target)
            }
            RuntimeEffect::StopMusicPolling => runtime.music.get_value().stop_polling(),
            RuntimeEffect::CancelMusicDeadline => runtime.music.get_value().cancel_deadline(),
            RuntimeEffect::ScheduleInstanceLookup => music_bridge::schedule_instance_lookup(runtime),
            RuntimeEffect::InjectMusicFallback => {
                logging::log!("music player unavailable; using the fallback embed");
            }
            RuntimeEffect::ScheduleAutoplay => music_bridge::schedule_autoplay(runtime),
            RuntimeEffect::PlayerPlay => runtime.music.get_value().play(),
            RuntimeEffect::PlayerPause => runtime.music.get_value().pause(),
        }
    }

    fn persist_theme(&self, runtime: HomeRuntimeContext) {
        let mode = runtime.state.get_untracked().theme.mode;
        let host = self.clone();
        spawn_local(async move {
            if let Err(err) = host.persist_theme_mode(mode).await {
                logging::warn!("persist dark mode preference failed: {err}");
            }
        });
    }
}
