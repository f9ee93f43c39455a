use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::HomeHostContext, persistence, reducer::HomeAction};

pub(super) fn install_boot_hydration(host: HomeHostContext, dispatch: Callback<HomeAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let mode = persistence::load_theme_mode(prefs.as_ref()).await;
            logging::log!(
                "theme hydrated as {:?} via {} host",
                mode,
                host.host_strategy_name()
            );
            dispatch.call(HomeAction::HydrateTheme {
                dark: mode.is_dark(),
            });
        });
    });
}
