use leptos::*;

use crate::{reducer::HomeAction, runtime_context::use_home_runtime};

#[component]
pub(super) fn ThemeToggle() -> impl IntoView {
    let runtime = use_home_runtime();
    let mode = create_memo(move |_| runtime.state.get().theme.mode);

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            on:click=move |_| runtime.dispatch_action(HomeAction::ToggleTheme)
        >
            <span id="themeIcon">{move || mode.get().toggle_icon()}</span>
            <span id="themeText">{move || mode.get().toggle_label()}</span>
        </button>
    }
}
