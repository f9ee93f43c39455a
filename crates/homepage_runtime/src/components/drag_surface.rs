//! Pointer plumbing shared by the draggable surfaces.
//!
//! Move and release listeners are attached to the window when a drag starts, so the gesture keeps
//! tracking outside the element, and are removed again on release.

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

use crate::{
    model::{DragTarget, Point, Size},
    reducer::HomeAction,
    runtime_context::HomeRuntimeContext,
};

pub(super) fn pointer_point(ev: &web_sys::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

pub(super) fn element_size(element: &web_sys::Element) -> Size {
    let rect = element.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

pub(super) fn element_center(element: &web_sys::Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    )
}

/// Whether `pointer_id` is the pointer that started the current gesture.
fn owns_pointer(owner: Option<i32>, pointer_id: i32) -> bool {
    owner == Some(pointer_id)
}

#[derive(Clone, Copy)]
pub(super) struct DragSurface {
    runtime: HomeRuntimeContext,
    target: DragTarget,
    node: NodeRef<html::Div>,
    /// Pointer that owns the gesture in progress.
    pointer_id: StoredValue<Option<i32>>,
    listeners: StoredValue<Vec<WindowListenerHandle>>,
}

impl DragSurface {
    /// Binds drag handling for `target` to the element behind `node`. The element is re-measured
    /// whenever the window resizes.
    pub(super) fn new(
        runtime: HomeRuntimeContext,
        target: DragTarget,
        node: NodeRef<html::Div>,
    ) -> Self {
        let surface = Self {
            runtime,
            target,
            node,
            pointer_id: store_value(None),
            listeners: store_value(Vec::new()),
        };

        let resize_listener = window_event_listener(ev::resize, move |_| {
            let Some(element) = surface.measure() else {
                return;
            };
            runtime.dispatch_action(HomeAction::ViewportResized {
                target,
                viewport: runtime.host.get_value().viewport_size(),
                element,
            });
        });
        on_cleanup(move || {
            resize_listener.remove();
            surface.detach();
        });
        surface
    }

    fn measure(self) -> Option<Size> {
        self.node
            .get_untracked()
            .map(|element| element_size(&element))
    }

    pub(super) fn begin(self, event: &web_sys::PointerEvent) {
        if event.button() != 0 {
            return;
        }
        let Some(element) = self.measure() else {
            return;
        };
        event.prevent_default();
        let viewport = self.runtime.host.get_value().viewport_size();
        self.runtime.dispatch_action(HomeAction::BeginDrag {
            target: self.target,
            pointer: pointer_point(event),
            viewport,
            element,
        });
        if !self
            .runtime
            .state
            .with_untracked(|state| state.drag(self.target).is_dragging)
        {
            return;
        }

        self.detach();
        self.pointer_id.set_value(Some(event.pointer_id()));
        let runtime = self.runtime;
        let target = self.target;
        let on_move = window_event_listener(ev::pointermove, move |ev| {
            if !self.owns(&ev) {
                return;
            }
            ev.prevent_default();
            runtime.dispatch_action(HomeAction::UpdateDrag {
                target,
                pointer: pointer_point(&ev),
            });
        });
        let on_up = window_event_listener(ev::pointerup, move |ev| {
            if self.owns(&ev) {
                self.end();
            }
        });
        let on_cancel = window_event_listener(ev::pointercancel, move |ev| {
            if self.owns(&ev) {
                self.end();
            }
        });
        self.listeners
            .update_value(|listeners| listeners.extend([on_move, on_up, on_cancel]));
    }

    fn owns(self, event: &web_sys::PointerEvent) -> bool {
        owns_pointer(self.pointer_id.get_value(), event.pointer_id())
    }

    fn end(self) {
        self.detach();
        self.runtime
            .dispatch_action(HomeAction::EndDrag { target: self.target });
    }

    fn detach(self) {
        let _ = self.pointer_id.try_set_value(None);
        let _ = self.listeners.try_update_value(|listeners| {
            for listener in listeners.drain(..) {
                listener.remove();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::owns_pointer;

    #[test]
    fn only_the_starting_pointer_drives_the_gesture() {
        assert!(owns_pointer(Some(1), 1));
        assert!(!owns_pointer(Some(1), 2));
        assert!(!owns_pointer(None, 1));
    }
}
