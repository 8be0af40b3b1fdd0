// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag signals and the handler that receives them.
//!
//! Cancelable signals return a [`Decision`]. The controller checks it right
//! after the handler returns and short-circuits the rest of the operation on
//! [`Decision::Cancel`].

use kurbo::Point;

/// Verdict returned from a cancelable signal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Let the operation continue.
    #[default]
    Proceed,
    /// Abort the operation.
    Cancel,
}

impl Decision {
    /// Returns `true` for [`Decision::Cancel`].
    #[must_use]
    pub const fn is_cancel(self) -> bool {
        matches!(self, Self::Cancel)
    }

    /// [`Decision::Cancel`] when `cancel` is `true`.
    #[must_use]
    pub const fn cancel_if(cancel: bool) -> Self {
        if cancel { Self::Cancel } else { Self::Proceed }
    }
}

/// A raw pointer-down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerDown<E> {
    /// Page-space pointer position.
    pub position: Point,
    /// Pointer identifier, used for capture.
    pub pointer_id: u64,
    /// Element under the pointer, if known.
    pub target: Option<E>,
}

impl<E> PointerDown<E> {
    /// A pointer-down at `position` for pointer `0` with no target.
    pub const fn at(position: Point) -> Self {
        Self {
            position,
            pointer_id: 0,
            target: None,
        }
    }

    /// Set the target element.
    #[must_use]
    pub fn with_target(mut self, target: E) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the pointer id.
    #[must_use]
    pub fn with_pointer_id(mut self, pointer_id: u64) -> Self {
        self.pointer_id = pointer_id;
        self
    }
}

/// Drag-start signal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragStart<E> {
    /// The draggable element.
    pub element: E,
    /// Pointer-down position.
    pub start: Point,
    /// Pointer position that crossed the tolerance.
    pub pointer: Point,
}

/// Drag-move signal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragMove<E> {
    /// The draggable element.
    pub element: E,
    /// Pointer-down position.
    pub start: Point,
    /// Raw pointer position.
    pub pointer: Point,
    /// Proposed pointer position after the direction constraint; handlers may overwrite it.
    pub next: Point,
}

/// Drag-end signal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEnd<E> {
    /// The draggable element.
    pub element: E,
    /// Pointer-down position.
    pub start: Point,
    /// Final pointer position.
    pub pointer: Point,
    /// Whether a drop target accepted the element.
    pub dropped: bool,
}

/// Click signal: a press and release that never crossed the tolerance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Click<E> {
    /// The draggable element.
    pub element: E,
    /// Release position.
    pub pointer: Point,
}

/// Ghost create/destroy signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GhostEvent<E> {
    /// The draggable element.
    pub element: E,
    /// The ghost node.
    pub ghost: E,
}

/// Transition-end signal: the session's visuals are settled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionEnd<E> {
    /// The draggable element.
    pub element: E,
}

/// Receiver of drag signals.
///
/// Every method has a default, so implementors override only what they need.
/// `()` is a handler that accepts everything.
pub trait DragHandler<E> {
    /// Pre-hook for pointer-down; cancel to ignore the press.
    fn on_pointer_down(&mut self, event: &PointerDown<E>) -> Decision {
        let _ = event;
        Decision::Proceed
    }

    /// The pointer crossed the tolerance; cancel to abort the session.
    fn on_drag_start(&mut self, event: &DragStart<E>) -> Decision {
        let _ = event;
        Decision::Proceed
    }

    /// The pointer moved during a drag; cancel to keep the element where it is.
    fn on_drag_move(&mut self, event: &mut DragMove<E>) -> Decision {
        let _ = event;
        Decision::Proceed
    }

    /// The drag finished.
    fn on_drag_end(&mut self, event: &DragEnd<E>) {
        let _ = event;
    }

    /// The press was a click.
    fn on_click(&mut self, event: &Click<E>) {
        let _ = event;
    }

    /// A ghost is about to be attached; cancel to drag without one.
    fn on_ghost_create(&mut self, event: &GhostEvent<E>) -> Decision {
        let _ = event;
        Decision::Proceed
    }

    /// A ghost is about to be removed; cancel to keep it in the scene.
    fn on_ghost_destroy(&mut self, event: &GhostEvent<E>) -> Decision {
        let _ = event;
        Decision::Proceed
    }

    /// The return-to-origin (or post-drop) settle finished.
    fn on_transition_end(&mut self, event: &TransitionEnd<E>) {
        let _ = event;
    }
}

impl<E> DragHandler<E> for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_helpers() {
        assert!(Decision::Cancel.is_cancel());
        assert!(!Decision::Proceed.is_cancel());
        assert_eq!(Decision::cancel_if(true), Decision::Cancel);
        assert_eq!(Decision::cancel_if(false), Decision::Proceed);
        assert_eq!(Decision::default(), Decision::Proceed);
    }

    #[test]
    fn pointer_down_builder() {
        let down = PointerDown::at(Point::new(1.0, 2.0))
            .with_target(7_u32)
            .with_pointer_id(3);
        assert_eq!(down.target, Some(7));
        assert_eq!(down.pointer_id, 3);
    }
}
