// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the per-gesture state between pointer-down and release.
//!
//! A session remembers where the press happened, where the pointer was last
//! seen, and whether the gesture has been promoted from a press to a drag.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag::DragDirection;
//! use understory_drag::session::DragSession;
//!
//! let mut session = DragSession::new(1_u32, 0, Point::new(10.0, 20.0), Point::ZERO, Vec2::ZERO);
//! session.tolerance = 5.0;
//!
//! // 3px is still a press.
//! assert!(!session.exceeds_tolerance(Point::new(13.0, 20.0)));
//! // 6px is a drag.
//! assert!(session.exceeds_tolerance(Point::new(16.0, 20.0)));
//!
//! // Horizontal drags ignore vertical travel.
//! session.direction = DragDirection::Horizontal;
//! assert!(!session.exceeds_tolerance(Point::new(10.0, 40.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::config::{DEFAULT_TOLERANCE, DragDirection};

/// Tracks one press-drag-release gesture.
#[derive(Debug, Clone, Copy)]
pub struct DragSession<E> {
    /// The draggable element that owns the session.
    pub element: E,
    /// Pointer that started the session.
    pub pointer_id: u64,
    /// Pointer-down position.
    pub start_pos: Point,
    /// Last recorded pointer position.
    pub last_pos: Point,
    /// Whether the press has been promoted to a drag.
    pub started: bool,
    /// Tolerance in effect for this session.
    pub tolerance: f64,
    /// Direction constraint in effect for this session.
    pub direction: DragDirection,
    /// Pointer position minus the proxy's top-left corner.
    pub offset: Vec2,
    /// Page-space top-left of the element at pointer-down.
    pub origin: Point,
    /// Current page-space top-left of the proxy (ghost or element).
    pub location: Point,
    /// Ghost created for this session, if any.
    pub ghost: Option<E>,
}

impl<E> DragSession<E> {
    /// Start tracking a press at `pos`.
    pub fn new(element: E, pointer_id: u64, pos: Point, origin: Point, offset: Vec2) -> Self {
        Self {
            element,
            pointer_id,
            start_pos: pos,
            last_pos: pos,
            started: false,
            tolerance: DEFAULT_TOLERANCE,
            direction: DragDirection::Both,
            offset,
            origin,
            location: origin,
            ghost: None,
        }
    }

    /// Record a new pointer position, returning the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        delta
    }

    /// Displacement from the press, restricted to the allowed axes.
    pub fn total_offset(&self, pos: Point) -> Vec2 {
        self.direction.constrain(pos - self.start_pos)
    }

    /// Returns `true` if `pos` is farther than the tolerance from the press on an allowed axis.
    pub fn exceeds_tolerance(&self, pos: Point) -> bool {
        let moved = self.total_offset(pos);
        moved.x.abs() > self.tolerance || moved.y.abs() > self.tolerance
    }

    /// `pos` projected onto the allowed axes through the press position.
    pub fn constrained(&self, pos: Point) -> Point {
        self.direction.constrain_point(self.start_pos, pos)
    }

    /// Returns `true` while the press has been promoted to a drag.
    pub fn is_dragging(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(x: f64, y: f64) -> DragSession<u32> {
        DragSession::new(1, 0, Point::new(x, y), Point::ZERO, Vec2::ZERO)
    }

    #[test]
    fn new_session_is_not_dragging() {
        let session = session_at(10.0, 20.0);
        assert!(!session.is_dragging());
        assert_eq!(session.start_pos, session.last_pos);
        assert_eq!(session.location, session.origin);
    }

    #[test]
    fn update_returns_incremental_deltas() {
        let mut session = session_at(0.0, 0.0);

        assert_eq!(session.update(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
        assert_eq!(session.update(Point::new(8.0, 7.0)), Vec2::new(3.0, 4.0));
        assert_eq!(session.update(Point::new(10.0, 10.0)), Vec2::new(2.0, 3.0));
        assert_eq!(session.last_pos, Point::new(10.0, 10.0));
    }

    #[test]
    fn total_offset_is_measured_from_the_press() {
        let mut session = session_at(10.0, 20.0);
        session.update(Point::new(15.0, 25.0));

        assert_eq!(
            session.total_offset(Point::new(20.0, 35.0)),
            Vec2::new(10.0, 15.0)
        );
    }

    #[test]
    fn negative_movement() {
        let mut session = session_at(100.0, 100.0);
        assert_eq!(
            session.update(Point::new(90.0, 85.0)),
            Vec2::new(-10.0, -15.0)
        );
        assert!(session.exceeds_tolerance(Point::new(90.0, 100.0)));
    }

    #[test]
    fn tolerance_is_exclusive() {
        let session = session_at(0.0, 0.0);
        assert!(!session.exceeds_tolerance(Point::new(5.0, 5.0)));
        assert!(!session.exceeds_tolerance(Point::new(-5.0, -5.0)));
        assert!(session.exceeds_tolerance(Point::new(5.5, 0.0)));
    }

    #[test]
    fn vertical_constraint_projects_and_ignores_x() {
        let mut session = session_at(10.0, 10.0);
        session.direction = DragDirection::Vertical;

        assert!(!session.exceeds_tolerance(Point::new(100.0, 12.0)));
        assert!(session.exceeds_tolerance(Point::new(10.0, 30.0)));
        assert_eq!(
            session.constrained(Point::new(100.0, 30.0)),
            Point::new(10.0, 30.0)
        );
    }

    #[test]
    fn fractional_coordinates() {
        let mut session = session_at(1.5, 2.7);
        let delta = session.update(Point::new(3.2, 4.1));

        assert!((delta.x - 1.7).abs() < f64::EPSILON * 10.0);
        assert!((delta.y - 1.4).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn large_coordinate_values() {
        let mut session = session_at(1_000_000.0, 2_000_000.0);
        assert_eq!(
            session.update(Point::new(1_000_001.0, 2_000_002.0)),
            Vec2::new(1.0, 2.0)
        );
    }
}
