use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    config::SEARCH_INPUT_DOM_ID, reducer::HomeAction, runtime_context::use_home_runtime,
    search::SearchEngineId,
};

#[component]
pub(super) fn SearchBar() -> impl IntoView {
    let runtime = use_home_runtime();
    let search = create_memo(move |_| runtime.state.get().search);
    let picker = create_node_ref::<html::Div>();

    // Clicks outside the picker button and its menu close the menu.
    let outside_click_listener = window_event_listener(ev::click, move |ev| {
        if !search.get_untracked().menu_open {
            return;
        }
        let target = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let inside = picker
            .get_untracked()
            .zip(target)
            .is_some_and(|(picker, target)| picker.contains(Some(&target)));
        if !inside {
            runtime.dispatch_action(HomeAction::CloseEngineMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            runtime.dispatch_action(HomeAction::SubmitSearch);
        }
        "Escape" => runtime.dispatch_action(HomeAction::ClearSearch),
        _ => {}
    };

    view! {
        <div class="search-container">
            <div class="search-engine-selector" node_ref=picker>
                <button
                    id="searchEngineBtn"
                    class="search-engine-btn"
                    class:active=move || search.get().menu_open
                    type="button"
                    data-engine=move || search.get().engine.as_str()
                    aria-haspopup="menu"
                    aria-expanded=move || search.get().menu_open.to_string()
                    on:click=move |_| runtime.dispatch_action(HomeAction::ToggleEngineMenu)
                >
                    <span id="engineIcon">{move || search.get().engine.glyph()}</span>
                    <span id="engineText">{move || search.get().engine.label()}</span>
                </button>
                <div
                    id="searchEngineMenu"
                    class="search-engine-menu"
                    class:show=move || search.get().menu_open
                    role="menu"
                >
                    {SearchEngineId::ALL
                        .into_iter()
                        .map(|engine| {
                            view! {
                                <button
                                    class="engine-option"
                                    class:active=move || search.get().engine == engine
                                    type="button"
                                    role="menuitem"
                                    data-engine=engine.as_str()
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(HomeAction::SetEngine {
                                                engine_id: engine.as_str().to_string(),
                                            });
                                    }
                                >
                                    <span class="engine-option-icon">{engine.glyph()}</span>
                                    <span>{engine.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <input
                id=SEARCH_INPUT_DOM_ID
                class="search-input"
                type="text"
                autocomplete="off"
                placeholder=move || search.get().engine.placeholder()
                prop:value=move || search.get().query_text
                on:input=move |ev| {
                    runtime
                        .dispatch_action(HomeAction::QueryInput {
                            text: event_target_value(&ev),
                        });
                }
                on:keydown=on_keydown
            />
            <button
                id="searchBtn"
                class="search-btn"
                type="button"
                on:click=move |_| runtime.dispatch_action(HomeAction::SubmitSearch)
            >
                "搜索"
            </button>
        </div>
    }
}
