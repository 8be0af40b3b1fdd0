// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop zone signals.

use kurbo::Point;
use understory_drag::{Decision, DragHandler};

use crate::zone::{DropAction, ZoneId};

/// A drag interacting with a zone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoneEvent<E> {
    /// The zone.
    pub zone: ZoneId,
    /// The zone's element.
    pub zone_element: E,
    /// The dragged element.
    pub dragged: E,
    /// Its ghost, if any.
    pub ghost: Option<E>,
    /// Page-space pointer position.
    pub pointer: Point,
}

/// A drop about to happen on a zone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropEvent<E> {
    /// Zone, elements, and pointer.
    pub target: ZoneEvent<E>,
    /// What the zone's strategy will do unless the drop is canceled.
    pub action: DropAction,
}

/// Receiver of drag and drop signals.
///
/// Drop signals extend [`DragHandler`], so one handler sees the whole gesture.
pub trait DropHandler<E>: DragHandler<E> {
    /// The drag entered a linked zone.
    fn on_enter(&mut self, event: &ZoneEvent<E>) {
        let _ = event;
    }

    /// The drag moved within the zone it hovers.
    fn on_over(&mut self, event: &ZoneEvent<E>) {
        let _ = event;
    }

    /// The drag left a zone.
    fn on_leave(&mut self, event: &ZoneEvent<E>) {
        let _ = event;
    }

    /// The element was released over a zone; cancel to skip the action.
    fn on_drop(&mut self, event: &DropEvent<E>) -> Decision {
        let _ = event;
        Decision::Proceed
    }
}

impl<E> DropHandler<E> for () {}
