use leptos::*;

use super::drag_surface::{element_center, element_size, DragSurface};
use crate::{
    drag::Anchor,
    model::{DragTarget, Point},
    reducer::HomeAction,
    runtime_context::use_home_runtime,
};

#[component]
pub(super) fn PetWidget() -> impl IntoView {
    let runtime = use_home_runtime();
    let pet = create_memo(move |_| runtime.state.get().pet);
    let gaze = create_memo(move |_| runtime.state.get().pet_gaze);
    let node = create_node_ref::<html::Div>();
    let surface = DragSurface::new(runtime, DragTarget::PetWidget, node);

    create_effect(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        runtime.dispatch_action(HomeAction::PlaceDraggable {
            target: DragTarget::PetWidget,
            anchor: Anchor::BottomRight,
            viewport: runtime.host.get_value().viewport_size(),
            element: element_size(&element),
        });
    });

    let gaze_listener = window_event_listener(ev::mousemove, move |ev| {
        if pet.get_untracked().is_dragging {
            return;
        }
        let Some(element) = node.get_untracked() else {
            return;
        };
        runtime.dispatch_action(HomeAction::GazeMoved {
            pointer: Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())),
            widget_center: element_center(&element),
        });
    });
    on_cleanup(move || gaze_listener.remove());

    let pupil = move || {
        view! { <span class="cat-pupil" style:transform=move || gaze.get().transform()></span> }
    };

    view! {
        <div
            id="petCat"
            class="pet-cat"
            class:dragging=move || pet.get().is_dragging
            node_ref=node
            style:transform=move || pet.get().transform()
            style:transition=move || pet.get().transition()
            style:touch-action="none"
            on:pointerdown=move |ev| surface.begin(&ev)
            aria-hidden="true"
        >
            <div class="cat-ears">
                <span class="cat-ear"></span>
                <span class="cat-ear"></span>
            </div>
            <div class="cat-face">
                <div class="cat-eyes">
                    <span class="cat-eye">{pupil()}</span>
                    <span class="cat-eye">{pupil()}</span>
                </div>
                <span class="cat-nose"></span>
            </div>
        </div>
    }
}
