use leptos::{logging, set_timeout, spawn_local};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{
    config::{DRAG_BOUNCE_DELAY, DRAG_BOUNCE_DURATION},
    host::HomeHostContext,
    model::{DragTarget, Size},
    reducer::HomeAction,
    runtime_context::HomeRuntimeContext,
};
#[cfg(target_arch = "wasm32")]
use crate::{catalog::category_dom_id, config::SEARCH_INPUT_DOM_ID};

pub(super) fn open_external_url(host: HomeHostContext, url: &str) {
    let url = url.to_string();
    spawn_local(async move {
        if let Err(err) = host.open_external_url(&url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(super) fn scroll_to_category(category_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&category_dom_id(category_id)))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = category_id;
}

#[cfg(target_arch = "wasm32")]
fn search_input() -> Option<web_sys::HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(SEARCH_INPUT_DOM_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
}

pub(super) fn focus_search_input() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(input) = search_input() {
            let _ = input.focus();
            input.select();
        }
    }
}

pub(super) fn blur_search_input() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(input) = search_input() {
            let _ = input.blur();
        }
    }
}

pub(super) fn viewport_size() -> Size {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return Size::default();
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or_default();
        let height = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or_default();
        Size::new(width, height)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Size::new(1280.0, 720.0)
    }
}

/// Applies the bounce transition shortly after release, then clears it so later drags are not
/// animated.
pub(super) fn schedule_drag_bounce(runtime: HomeRuntimeContext, target: DragTarget) {
    set_timeout(
        move || {
            runtime.dispatch_action(HomeAction::SetDragTransition {
                target,
                active: true,
            });
            set_timeout(
                move || {
                    runtime.dispatch_action(HomeAction::SetDragTransition {
                        target,
                        active: false,
                    });
                },
                DRAG_BOUNCE_DURATION,
            );
        },
        DRAG_BOUNCE_DELAY,
    );
}
