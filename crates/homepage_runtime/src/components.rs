//! Homepage UI composition and DOM event bindings.

mod drag_surface;
mod link_directory;
mod music_player;
mod pet_widget;
mod search_bar;
mod theme_toggle;

use leptos::*;

use self::{
    link_directory::LinkDirectory, music_player::MusicPlayer, pet_widget::PetWidget,
    search_bar::SearchBar, theme_toggle::ThemeToggle,
};
use crate::{reducer::HomeAction, runtime_context::use_home_runtime};

/// Ctrl+K / Cmd+K.
fn is_focus_search_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case("k")
}

#[component]
/// Renders the whole page and binds the page-wide keyboard shortcut.
pub fn HomeShell() -> impl IntoView {
    let runtime = use_home_runtime();
    let state = runtime.state;
    let theme = create_memo(move |_| state.get().theme);
    let background = create_memo(move |_| state.get().background);

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        if is_focus_search_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            runtime.dispatch_action(HomeAction::FocusSearch);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    view! {
        <div
            class="home-shell"
            class:dark-mode=move || theme.get().mode.is_dark()
            data-theme-transitions=move || theme.get().transitions_enabled.to_string()
        >
            <div
                id="dynamicBackground"
                class="dynamic-background"
                class:loaded=move || background.get().loaded
                style:background-image=move || background.get().css_background()
                aria-hidden="true"
            ></div>
            <header class="home-header">
                <ThemeToggle />
                <SearchBar />
            </header>
            <LinkDirectory />
            <PetWidget />
            <MusicPlayer />
        </div>
    }
}
