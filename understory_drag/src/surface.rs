// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutable side of the host scene: pointer capture, ghost nodes, placement.

use kurbo::{Point, Vec2};

use crate::geometry::GeometryProvider;

/// Caller-defined identifier of a ghost template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TemplateKey(pub u32);

/// What a ghost is built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GhostBlueprint<E> {
    /// A deep clone of an element.
    Clone(E),
    /// An instance of a caller-supplied template.
    Template(TemplateKey),
}

/// Scene operations used by [`DragController`](crate::DragController).
///
/// Ghosts returned by [`build_ghost`](Self::build_ghost) start out detached;
/// [`detach`](Self::detach) removes a ghost whether or not it was attached.
pub trait DragSurface<E>: GeometryProvider<E> {
    /// Returns `true` if a pointer-down on `target` must never start a drag.
    fn is_drag_ignored(&self, target: E) -> bool {
        let _ = target;
        false
    }

    /// Route all events of `pointer_id` to `element` until released.
    fn capture_pointer(&mut self, element: E, pointer_id: u64) {
        let _ = (element, pointer_id);
    }

    /// Release a capture taken with [`capture_pointer`](Self::capture_pointer).
    fn release_pointer(&mut self, element: E, pointer_id: u64) {
        let _ = (element, pointer_id);
    }

    /// Create a detached ghost node.
    fn build_ghost(&mut self, blueprint: GhostBlueprint<E>) -> E;

    /// Add a styling class to `ghost`.
    fn add_class(&mut self, ghost: E, class: &str);

    /// Append `ghost` to `host`, or to the document root when `host` is `None`.
    fn attach(&mut self, ghost: E, host: Option<E>);

    /// Set the host-relative `left`/`top` of an absolutely positioned ghost.
    fn place(&mut self, ghost: E, position: Point);

    /// Visually offset `element` from its layout position.
    fn translate(&mut self, element: E, offset: Vec2);

    /// Remove `ghost` from the scene.
    fn detach(&mut self, ghost: E);

    /// Free resources held by a template instance.
    fn release_template(&mut self, ghost: E) {
        let _ = ghost;
    }

    /// Returns `true` if moving `element` animates and ends with a transition-end notification.
    fn has_transition(&self, element: E) -> bool {
        let _ = element;
        false
    }
}
