//! Runtime provider and context wiring for the homepage.
//!
//! This module owns the reducer container, the runtime effect queue, the music player bridge and
//! host bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    catalog::link_directory,
    effect_executor,
    host::{HomeHostContext, MusicBridge},
    model::HomeState,
    reducer::{reduce_home, HomeAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading page state and dispatching [`HomeAction`] values.
pub struct HomeRuntimeContext {
    /// Host service bundle used to execute runtime side effects.
    pub host: StoredValue<HomeHostContext>,
    /// Reactive page state signal.
    pub state: RwSignal<HomeState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<HomeAction>,
    /// Timers, listeners and the bound instance of the third-party music player.
    pub music: StoredValue<MusicBridge>,
}

impl HomeRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: HomeAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: HomeRuntimeContext) {
    let host = runtime.host.get_value();
    host.install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);
    host.install_resource_loaders(runtime);
    host.install_music_probe(runtime);
}

#[component]
/// Provides [`HomeRuntimeContext`] to descendant components and starts the page's background work.
pub fn HomeProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(HomeHostContext::new(host_services));
    let state = create_rw_signal(HomeState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let music = store_value(MusicBridge::default());

    let dispatch = Callback::new(move |action: HomeAction| {
        let mut home = state.get_untracked();
        let previous = home.clone();

        match reduce_home(&mut home, link_directory(), action) {
            Ok(new_effects) => {
                if home != previous {
                    state.set(home);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("homepage reducer error: {err}"),
        }
    });

    let runtime = HomeRuntimeContext {
        host,
        state,
        effects,
        dispatch,
        music,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    let bridge = music.get_value();
    on_cleanup(move || bridge.teardown());

    children().into_view()
}

/// Returns the current [`HomeRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`HomeProvider`].
pub fn use_home_runtime() -> HomeRuntimeContext {
    use_context::<HomeRuntimeContext>().expect("HomeRuntimeContext not provided")
}
