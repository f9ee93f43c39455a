//! Reducer helpers for the draggable surfaces and the pet's gaze.

use crate::{
    drag::gaze_offset,
    model::{DragTarget, HomeState},
    reducer::{HomeAction, RuntimeEffect},
};

/// Handles drag and gaze actions. Returns `false` for actions owned by other reducers.
pub(super) fn reduce_interaction_action(
    state: &mut HomeState,
    action: &HomeAction,
    effects: &mut Vec<RuntimeEffect>,
) -> bool {
    match action {
        HomeAction::PlaceDraggable {
            target,
            anchor,
            viewport,
            element,
        } => {
            let drag = state.drag_mut(*target);
            let requested = if drag.placed {
                drag.current
            } else {
                anchor.resolve(*viewport, *element)
            };
            drag.place(requested, *viewport, *element);
        }
        HomeAction::BeginDrag {
            target,
            pointer,
            viewport,
            element,
        } => {
            state.drag_mut(*target).begin(*pointer, *viewport, *element);
        }
        HomeAction::UpdateDrag { target, pointer } => {
            state.drag_mut(*target).update(*pointer);
        }
        HomeAction::EndDrag { target } => {
            let released = state.drag_mut(*target).end();
            if released && *target == DragTarget::PetWidget {
                effects.push(RuntimeEffect::ScheduleDragBounce(*target));
            }
        }
        HomeAction::SetDragTransition { target, active } => {
            state.drag_mut(*target).transition_active = *active;
        }
        HomeAction::ViewportResized {
            target,
            viewport,
            element,
        } => {
            let drag = state.drag_mut(*target);
            if drag.placed {
                drag.reclamp(*viewport, *element);
            }
        }
        HomeAction::GazeMoved {
            pointer,
            widget_center,
        } => {
            if !state.pet.is_dragging {
                state.pet_gaze = gaze_offset(*widget_center, *pointer);
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        drag::{Anchor, PupilOffset},
        model::{Point, Size},
        reduce_home, HomeAction, HomeState, RuntimeEffect,
    };

    use super::*;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);
    const PET: Size = Size::new(120.0, 100.0);
    const MUSIC: Size = Size::new(300.0, 160.0);

    fn size_of(target: DragTarget) -> Size {
        match target {
            DragTarget::PetWidget => PET,
            DragTarget::MusicPlayer => MUSIC,
        }
    }

    fn reduce(state: &mut HomeState, action: HomeAction) -> Vec<RuntimeEffect> {
        reduce_home(state, &[], action).expect("reduce")
    }

    fn placed_state() -> HomeState {
        let mut state = HomeState::default();
        reduce(
            &mut state,
            HomeAction::PlaceDraggable {
                target: DragTarget::PetWidget,
                anchor: Anchor::BottomRight,
                viewport: VIEWPORT,
                element: Size::new(120.0, 100.0),
            },
        );
        reduce(
            &mut state,
            HomeAction::PlaceDraggable {
                target: DragTarget::MusicPlayer,
                anchor: Anchor::BottomLeft,
                viewport: VIEWPORT,
                element: Size::new(300.0, 160.0),
            },
        );
        state
    }

    #[test]
    fn initial_placement_uses_each_anchor() {
        let state = placed_state();
        assert_eq!(state.pet.current, Point::new(880.0, 700.0));
        assert_eq!(state.music_drag.current, Point::new(0.0, 640.0));
    }

    #[test]
    fn re_placing_keeps_the_dragged_position() {
        let mut state = placed_state();
        state.pet.current = Point::new(10.0, 10.0);
        reduce(
            &mut state,
            HomeAction::PlaceDraggable {
                target: DragTarget::PetWidget,
                anchor: Anchor::BottomRight,
                viewport: VIEWPORT,
                element: Size::new(120.0, 100.0),
            },
        );
        assert_eq!(state.pet.current, Point::new(10.0, 10.0));
    }

    #[test]
    fn two_draggables_do_not_share_state() {
        let mut state = placed_state();
        reduce(
            &mut state,
            HomeAction::BeginDrag {
                target: DragTarget::MusicPlayer,
                pointer: Point::new(50.0, 650.0),
                viewport: VIEWPORT,
                element: MUSIC,
            },
        );
        reduce(
            &mut state,
            HomeAction::UpdateDrag {
                target: DragTarget::MusicPlayer,
                pointer: Point::new(150.0, 550.0),
            },
        );
        assert_eq!(state.music_drag.current, Point::new(100.0, 540.0));
        assert!(!state.pet.is_dragging);
        assert_eq!(state.pet.current, Point::new(880.0, 700.0));

        reduce(
            &mut state,
            HomeAction::UpdateDrag {
                target: DragTarget::PetWidget,
                pointer: Point::new(0.0, 0.0),
            },
        );
        assert_eq!(state.pet.current, Point::new(880.0, 700.0));
    }

    #[test]
    fn releasing_the_pet_schedules_a_bounce_but_the_player_does_not() {
        let mut state = placed_state();
        for target in [DragTarget::PetWidget, DragTarget::MusicPlayer] {
            reduce(
                &mut state,
                HomeAction::BeginDrag {
                    target,
                    pointer: Point::default(),
                    viewport: VIEWPORT,
                    element: size_of(target),
                },
            );
        }
        assert_eq!(
            reduce(
                &mut state,
                HomeAction::EndDrag {
                    target: DragTarget::PetWidget
                }
            ),
            vec![RuntimeEffect::ScheduleDragBounce(DragTarget::PetWidget)]
        );
        assert!(reduce(
            &mut state,
            HomeAction::EndDrag {
                target: DragTarget::MusicPlayer
            }
        )
        .is_empty());
        assert!(reduce(
            &mut state,
            HomeAction::EndDrag {
                target: DragTarget::PetWidget
            }
        )
        .is_empty());
    }

    #[test]
    fn resize_reclamps_each_draggable_with_its_measured_size() {
        let mut state = placed_state();
        let shrunk = Size::new(500.0, 400.0);
        for target in [DragTarget::PetWidget, DragTarget::MusicPlayer] {
            reduce(
                &mut state,
                HomeAction::ViewportResized {
                    target,
                    viewport: shrunk,
                    element: size_of(target),
                },
            );
        }
        assert_eq!(state.pet.current, Point::new(380.0, 300.0));
        assert_eq!(state.music_drag.current, Point::new(0.0, 240.0));
    }

    #[test]
    fn resize_before_placement_leaves_the_draggable_unplaced() {
        let mut state = HomeState::default();
        reduce(
            &mut state,
            HomeAction::ViewportResized {
                target: DragTarget::PetWidget,
                viewport: VIEWPORT,
                element: PET,
            },
        );
        assert!(!state.pet.placed);
        assert_eq!(state.pet.current, Point::default());
    }

    #[test]
    fn player_that_grew_after_placement_stays_inside_the_viewport() {
        let mut state = HomeState::default();
        reduce(
            &mut state,
            HomeAction::PlaceDraggable {
                target: DragTarget::MusicPlayer,
                anchor: Anchor::BottomLeft,
                viewport: VIEWPORT,
                element: Size::new(300.0, 40.0),
            },
        );
        assert_eq!(state.music_drag.current, Point::new(0.0, 760.0));

        let rendered = Size::new(300.0, 130.0);
        reduce(
            &mut state,
            HomeAction::BeginDrag {
                target: DragTarget::MusicPlayer,
                pointer: Point::new(20.0, 780.0),
                viewport: VIEWPORT,
                element: rendered,
            },
        );
        reduce(
            &mut state,
            HomeAction::UpdateDrag {
                target: DragTarget::MusicPlayer,
                pointer: Point::new(20.0, 5000.0),
            },
        );
        let panel = state.music_drag;
        assert_eq!(panel.current.y, VIEWPORT.height - rendered.height);
        assert!(panel.current.y + rendered.height <= VIEWPORT.height);
    }

    #[test]
    fn re_placing_with_a_grown_size_pulls_the_player_back_in() {
        let mut state = placed_state();
        reduce(
            &mut state,
            HomeAction::PlaceDraggable {
                target: DragTarget::MusicPlayer,
                anchor: Anchor::BottomLeft,
                viewport: VIEWPORT,
                element: Size::new(300.0, 260.0),
            },
        );
        assert_eq!(state.music_drag.current, Point::new(0.0, 540.0));
        assert_eq!(state.music_drag.element_size, Size::new(300.0, 260.0));
    }

    #[test]
    fn gaze_is_frozen_while_dragging_the_pet() {
        let mut state = placed_state();
        reduce(
            &mut state,
            HomeAction::GazeMoved {
                pointer: Point::new(1000.0, 50.0),
                widget_center: Point::new(50.0, 50.0),
            },
        );
        assert!((state.pet_gaze.x - 2.0).abs() < 1e-9);

        reduce(
            &mut state,
            HomeAction::BeginDrag {
                target: DragTarget::PetWidget,
                pointer: Point::default(),
                viewport: VIEWPORT,
                element: PET,
            },
        );
        let frozen = state.pet_gaze;
        reduce(
            &mut state,
            HomeAction::GazeMoved {
                pointer: Point::new(-1000.0, 50.0),
                widget_center: Point::new(50.0, 50.0),
            },
        );
        assert_eq!(state.pet_gaze, frozen);
        assert_ne!(state.pet_gaze, PupilOffset::default());
    }
}
