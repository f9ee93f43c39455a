//! Viewport-clamped drag state machine shared by every draggable surface.
//!
//! Positions are translations from the viewport's top-left corner. A [`DragState`] is either idle
//! or dragging; move events only change the position while dragging and every stored position lies
//! inside `[0, viewport - element]` on both axes.

use serde::{Deserialize, Serialize};

use crate::{
    config::{GAZE_DISTANCE_CAP, GAZE_DISTANCE_DIVISOR, GAZE_MAX_X, GAZE_MAX_Y},
    model::{Point, Size},
};

/// CSS transition applied briefly after releasing the pet widget.
pub const BOUNCE_TRANSITION: &str = "transform 0.3s ease";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragState {
    pub is_dragging: bool,
    pub pointer_origin: Point,
    pub element_origin: Point,
    pub current: Point,
    pub bounding_max: Point,
    pub element_size: Size,
    /// Whether the element has been given an initial position yet.
    pub placed: bool,
    pub transition_active: bool,
}

/// Largest translation that keeps `element` fully inside `viewport`.
pub fn bounding_max(viewport: Size, element: Size) -> Point {
    Point::new(
        (viewport.width - element.width).max(0.0),
        (viewport.height - element.height).max(0.0),
    )
}

fn clamp_into(point: Point, max: Point) -> Point {
    Point::new(point.x.clamp(0.0, max.x), point.y.clamp(0.0, max.y))
}

/// Corner a draggable starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    BottomLeft,
    BottomRight,
}

impl Anchor {
    pub fn resolve(self, viewport: Size, element: Size) -> Point {
        let max = bounding_max(viewport, element);
        match self {
            Self::BottomLeft => Point::new(0.0, max.y),
            Self::BottomRight => max,
        }
    }
}

impl DragState {
    /// Positions the element at `requested`, clamped into the viewport. Ignored while dragging.
    pub fn place(&mut self, requested: Point, viewport: Size, element: Size) -> bool {
        if self.is_dragging {
            return false;
        }
        self.element_size = element;
        self.bounding_max = bounding_max(viewport, element);
        self.current = clamp_into(requested, self.bounding_max);
        self.placed = true;
        true
    }

    /// Idle -> Dragging. Returns `false` if a drag is already in progress.
    ///
    /// `element` is the size measured at drag start; content rendered after placement can have
    /// grown the element since.
    pub fn begin(&mut self, pointer: Point, viewport: Size, element: Size) -> bool {
        if self.is_dragging {
            return false;
        }
        self.is_dragging = true;
        self.transition_active = false;
        self.pointer_origin = pointer;
        self.element_size = element;
        self.bounding_max = bounding_max(viewport, element);
        self.current = clamp_into(self.current, self.bounding_max);
        self.element_origin = self.current;
        true
    }

    /// Applies a pointer move. Returns whether the position changed; always `false` when idle.
    pub fn update(&mut self, pointer: Point) -> bool {
        if !self.is_dragging {
            return false;
        }
        let next = clamp_into(
            Point::new(
                self.element_origin.x + pointer.x - self.pointer_origin.x,
                self.element_origin.y + pointer.y - self.pointer_origin.y,
            ),
            self.bounding_max,
        );
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }

    /// Dragging -> Idle. Returns whether a drag was actually in progress.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.is_dragging, false)
    }

    /// Re-clamps the stored position against a new viewport and element size. Ignored while
    /// dragging.
    pub fn reclamp(&mut self, viewport: Size, element: Size) -> bool {
        if self.is_dragging {
            return false;
        }
        self.element_size = element;
        let max = bounding_max(viewport, element);
        let next = clamp_into(self.current, max);
        let changed = next != self.current || max != self.bounding_max;
        self.bounding_max = max;
        self.current = next;
        changed
    }

    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.current.x, self.current.y)
    }

    pub fn transition(&self) -> &'static str {
        if self.transition_active {
            BOUNCE_TRANSITION
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Pupil translation in pixels relative to the eye center.
pub struct PupilOffset {
    pub x: f64,
    pub y: f64,
}

impl PupilOffset {
    pub fn transform(&self) -> String {
        format!(
            "translate(calc(-50% + {}px), calc(-50% + {}px))",
            self.x, self.y
        )
    }
}

/// Offsets the pupils along the angle from `center` toward `pointer`, capped per axis.
pub fn gaze_offset(center: Point, pointer: Point) -> PupilOffset {
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    let angle = dy.atan2(dx);
    let distance = dx.hypot(dy).min(GAZE_DISTANCE_CAP);
    let reach = distance / GAZE_DISTANCE_DIVISOR;
    PupilOffset {
        x: angle.cos() * GAZE_MAX_X.min(reach),
        y: angle.sin() * GAZE_MAX_Y.min(reach),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const ELEMENT: Size = Size::new(100.0, 80.0);

    fn placed_at(point: Point) -> DragState {
        let mut drag = DragState::default();
        drag.place(point, VIEWPORT, ELEMENT);
        drag
    }

    fn in_bounds(drag: &DragState, viewport: Size) -> bool {
        let max = bounding_max(viewport, drag.element_size);
        (0.0..=max.x).contains(&drag.current.x) && (0.0..=max.y).contains(&drag.current.y)
    }

    #[test]
    fn anchors_resolve_to_viewport_corners() {
        assert_eq!(
            Anchor::BottomRight.resolve(VIEWPORT, ELEMENT),
            Point::new(700.0, 520.0)
        );
        assert_eq!(
            Anchor::BottomLeft.resolve(VIEWPORT, ELEMENT),
            Point::new(0.0, 520.0)
        );
    }

    #[test]
    fn every_move_stays_inside_the_viewport() {
        let mut drag = placed_at(Point::new(100.0, 100.0));
        assert!(drag.begin(Point::new(150.0, 140.0), VIEWPORT, ELEMENT));

        let moves = [
            Point::new(-500.0, -500.0),
            Point::new(2000.0, 40.0),
            Point::new(400.0, 4000.0),
            Point::new(151.0, 139.0),
            Point::new(900.0, 900.0),
        ];
        for pointer in moves {
            drag.update(pointer);
            assert!(in_bounds(&drag, VIEWPORT), "{:?} out of bounds", drag.current);
        }
        assert_eq!(drag.current, Point::new(700.0, 520.0));
    }

    #[test]
    fn move_applies_pointer_delta_to_element_origin() {
        let mut drag = placed_at(Point::new(100.0, 100.0));
        drag.begin(Point::new(150.0, 140.0), VIEWPORT, ELEMENT);
        assert!(drag.update(Point::new(170.0, 130.0)));
        assert_eq!(drag.current, Point::new(120.0, 90.0));
        assert_eq!(drag.transform(), "translate3d(120px, 90px, 0)");
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut drag = placed_at(Point::new(100.0, 100.0));
        drag.begin(Point::new(0.0, 0.0), VIEWPORT, ELEMENT);
        drag.update(Point::new(10.0, 10.0));
        assert!(drag.end());
        let released_at = drag.current;

        assert!(!drag.update(Point::new(300.0, 300.0)));
        assert_eq!(drag.current, released_at);
        assert!(!drag.end());
    }

    #[test]
    fn resize_reclamps_when_idle_and_waits_while_dragging() {
        let mut drag = placed_at(Point::new(700.0, 520.0));
        let shrunk = Size::new(400.0, 300.0);

        drag.begin(Point::new(0.0, 0.0), VIEWPORT, ELEMENT);
        assert!(!drag.reclamp(shrunk, ELEMENT));
        assert_eq!(drag.current, Point::new(700.0, 520.0));

        drag.end();
        assert!(drag.reclamp(shrunk, ELEMENT));
        assert_eq!(drag.current, Point::new(300.0, 220.0));
        assert!(in_bounds(&drag, shrunk));
    }

    #[test]
    fn drag_start_clamps_with_the_size_measured_then() {
        let mut drag = DragState::default();
        drag.place(Point::new(0.0, 760.0), Size::new(1000.0, 800.0), Size::new(300.0, 40.0));
        assert_eq!(drag.current, Point::new(0.0, 760.0));

        let grown = Size::new(300.0, 130.0);
        drag.begin(Point::new(10.0, 770.0), Size::new(1000.0, 800.0), grown);
        assert_eq!(drag.current, Point::new(0.0, 670.0));
        drag.update(Point::new(10.0, 5000.0));
        assert_eq!(drag.current.y + grown.height, 800.0);
    }

    #[test]
    fn resize_picks_up_a_grown_element() {
        let mut drag = placed_at(Point::new(0.0, 520.0));
        assert!(drag.reclamp(VIEWPORT, Size::new(300.0, 380.0)));
        assert_eq!(drag.current, Point::new(0.0, 220.0));
        assert_eq!(drag.element_size, Size::new(300.0, 380.0));
    }

    #[test]
    fn element_larger_than_viewport_pins_to_origin() {
        let drag = {
            let mut drag = DragState::default();
            drag.place(Point::new(50.0, 50.0), Size::new(60.0, 60.0), ELEMENT);
            drag
        };
        assert_eq!(drag.current, Point::default());
        assert_eq!(drag.bounding_max, Point::default());
    }

    #[test]
    fn gaze_offset_is_capped_per_axis() {
        let center = Point::new(100.0, 100.0);
        let far_right = gaze_offset(center, Point::new(1000.0, 100.0));
        assert!((far_right.x - 2.0).abs() < 1e-9);
        assert!(far_right.y.abs() < 1e-9);

        let far_down = gaze_offset(center, Point::new(100.0, 1000.0));
        assert!((far_down.y - 1.0).abs() < 1e-9);

        let near = gaze_offset(center, Point::new(115.0, 100.0));
        assert!((near.x - 1.0).abs() < 1e-9);

        assert_eq!(gaze_offset(center, center), PupilOffset { x: 0.0, y: 0.0 });
    }
}
