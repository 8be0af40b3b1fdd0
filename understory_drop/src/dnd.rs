// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-drop: a [`DragController`] whose moves are hit tested against a
//! [`DropRegistry`].
//!
//! The wrapper forwards pointer input to the controller and, whenever the
//! controller reports a drag move, looks for the topmost linked zone under
//! the pointer and emits the resulting transitions. On release it drops on
//! the zone hovered after the last processed move, leaves it, and reports the
//! drop back to the controller so drag-end carries the right `dropped` flag.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Point;
use understory_drag::{
    DragConfig, DragController, MoveOutcome, PointerDown, Release, ReleaseKind, ReleaseOutcome,
};

use crate::event::{DropEvent, DropHandler, ZoneEvent};
use crate::hit::{DropSurface, elements_under};
use crate::registry::DropRegistry;
use crate::tracker::{DropTracker, DropTransition};
use crate::zone::{DropAction, ZoneId};

/// A draggable element that can be dropped on registered zones.
#[derive(Clone, Debug)]
pub struct DragAndDrop<E> {
    drag: DragController<E>,
    tracker: DropTracker,
}

#[derive(Copy, Clone)]
struct Probe<E> {
    dragged: E,
    ghost: Option<E>,
    pointer: Point,
}

impl<E: Copy + Eq + Hash + Debug> Probe<E> {
    fn event(self, zone: ZoneId, zone_element: E) -> ZoneEvent<E> {
        ZoneEvent {
            zone,
            zone_element,
            dragged: self.dragged,
            ghost: self.ghost,
            pointer: self.pointer,
        }
    }

    /// Hits under the pointer that could be drop targets, topmost first.
    fn candidates<S>(self, surface: &S) -> Vec<E>
    where
        S: DropSurface<E> + ?Sized,
    {
        let mut hits = elements_under(surface, self.pointer);
        hits.retain(|hit| *hit != self.dragged && Some(*hit) != self.ghost);
        hits
    }

    fn emit<H>(
        self,
        transitions: &[DropTransition],
        zones: &mut DropRegistry<E>,
        handler: &mut H,
    )
    where
        H: DropHandler<E> + ?Sized,
    {
        for transition in transitions {
            let id = transition.zone();
            let Some(zone_element) = zones.get(id).map(|zone| zone.element) else {
                continue;
            };
            let event = self.event(id, zone_element);
            #[cfg(feature = "tracing")]
            tracing::trace!(?transition, dragged = ?self.dragged, "drop zone transition");
            match transition {
                DropTransition::Enter(_) => {
                    zones.set_hovered(id, true);
                    handler.on_enter(&event);
                }
                DropTransition::Over(_) => handler.on_over(&event),
                DropTransition::Leave(_) => {
                    zones.set_hovered(id, false);
                    handler.on_leave(&event);
                }
            }
        }
    }
}

impl<E: Copy + Eq + Hash + Debug> DragAndDrop<E> {
    /// A drag-and-drop source for `element`.
    pub fn new(element: E, config: DragConfig<E>) -> Self {
        Self {
            drag: DragController::new(element, config),
            tracker: DropTracker::new(),
        }
    }

    /// The underlying drag controller.
    pub fn controller(&self) -> &DragController<E> {
        &self.drag
    }

    /// Mutable access to the underlying drag controller.
    pub fn controller_mut(&mut self) -> &mut DragController<E> {
        &mut self.drag
    }

    /// The zone currently hovered.
    pub fn hovered(&self) -> Option<ZoneId> {
        self.tracker.current()
    }

    /// Forward a press to the controller.
    pub fn on_pointer_down<S, H>(
        &mut self,
        down: PointerDown<E>,
        surface: &mut S,
        handler: &mut H,
    ) -> bool
    where
        S: DropSurface<E> + ?Sized,
        H: DropHandler<E> + ?Sized,
    {
        self.drag.on_pointer_down(down, surface, handler)
    }

    /// Forward a move and update the hovered zone.
    pub fn on_pointer_move<S, H>(
        &mut self,
        pos: Point,
        zones: &mut DropRegistry<E>,
        surface: &mut S,
        handler: &mut H,
    ) -> MoveOutcome
    where
        S: DropSurface<E> + ?Sized,
        H: DropHandler<E> + ?Sized,
    {
        let outcome = self.drag.on_pointer_move(pos, surface, handler);
        self.track(outcome, zones, surface, handler);
        outcome
    }

    /// Process a deferred move and update the hovered zone.
    pub fn on_frame<S, H>(
        &mut self,
        zones: &mut DropRegistry<E>,
        surface: &mut S,
        handler: &mut H,
    ) -> MoveOutcome
    where
        S: DropSurface<E> + ?Sized,
        H: DropHandler<E> + ?Sized,
    {
        let outcome = self.drag.on_frame(surface, handler);
        self.track(outcome, zones, surface, handler);
        outcome
    }

    /// Release at `pos`, dropping on the zone under the pointer.
    pub fn on_pointer_up<S, H>(
        &mut self,
        pos: Point,
        zones: &mut DropRegistry<E>,
        surface: &mut S,
        handler: &mut H,
    ) -> ReleaseOutcome
    where
        S: DropSurface<E> + ?Sized,
        H: DropHandler<E> + ?Sized,
    {
        self.release(ReleaseKind::Up(pos), zones, surface, handler)
    }

    /// Pointer capture was lost: leave the hovered zone without dropping.
    pub fn on_pointer_lost<S, H>(
        &mut self,
        zones: &mut DropRegistry<E>,
        surface: &mut S,
        handler: &mut H,
    ) -> ReleaseOutcome
    where
        S: DropSurface<E> + ?Sized,
        H: DropHandler<E> + ?Sized,
    {
        self.release(ReleaseKind::Lost, zones, surface, handler)
    }

    /// Forward a transition end to the controller.
    pub fn on_transition_end<S, H>(&mut self, surface: &mut S, handler: &mut H) -> bool
    where
        S: DropSurface<E> + ?Sized,
        H: DropHandler<E> + ?Sized,
    {
        self.drag.on_transition_end(surface, handler)
    }

    fn track<S, H>(
        &mut self,
        outcome: MoveOutcome,
        zones: &mut DropRegistry<E>,
        surface: &S,
        handler: &mut H,
    )
    where
        S: DropSurface<E> + ?Sized,
        H: DropHandler<E> + ?Sized,
    {
        let Some(pointer) = outcome.drag_pointer() else {
            return;
        };
        let probe = Probe {
            dragged: self.drag.element(),
            ghost: self.drag.ghost_element(),
            pointer,
        };
        let hits = probe.candidates(surface);
        let hit = zones.first_linked(hits, self.drag.config().channel.as_ref());
        let transitions = self.tracker.update(hit);
        probe.emit(&transitions, zones, handler);
    }

    fn release<S, H>(
        &mut self,
        kind: ReleaseKind,
        zones: &mut DropRegistry<E>,
        surface: &mut S,
        handler: &mut H,
    ) -> ReleaseOutcome
    where
        S: DropSurface<E> + ?Sized,
        H: DropHandler<E> + ?Sized,
    {
        // A throttled move still pending decides the hovered zone before the drop.
        if matches!(kind, ReleaseKind::Up(_)) {
            self.on_frame(zones, surface, handler);
        }
        let tracker = &mut self.tracker;
        let outcome = self
            .drag
            .release_with(kind, surface, handler, |surface, handler, release| {
                drop_on_hovered(release, tracker, zones, surface, handler)
            });
        // Releases that never became drags must not leave a zone hovered.
        if let Some(stale) = self.tracker.finish() {
            zones.set_hovered(stale, false);
        }
        outcome
    }
}

fn drop_on_hovered<E, S, H>(
    release: &Release<E>,
    tracker: &mut DropTracker,
    zones: &mut DropRegistry<E>,
    surface: &mut S,
    handler: &mut H,
) -> bool
where
    E: Copy + Eq + Hash + Debug,
    S: DropSurface<E> + ?Sized,
    H: DropHandler<E> + ?Sized,
{
    let probe = Probe {
        dragged: release.element,
        ghost: release.ghost,
        pointer: release.pointer,
    };
    if release.lost {
        let left = tracker.update(None);
        probe.emit(&left, zones, handler);
        return false;
    }

    // The zone hovered after the last processed move receives the drop; the
    // release itself is not hit tested for a new zone.
    let Some(id) = tracker.finish() else {
        return false;
    };
    let hits = probe.candidates(&*surface);
    let Some((zone_element, strategy)) = zones.get(id).map(|zone| (zone.element, zone.strategy))
    else {
        return false;
    };
    let children = surface.children(zone_element);
    let event = DropEvent {
        target: probe.event(id, zone_element),
        action: strategy.resolve(&children, &hits, release.element),
    };
    let dropped = !handler.on_drop(&event).is_cancel();
    if dropped && event.action != DropAction::None {
        surface.move_child(zone_element, release.element, event.action);
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(%id, action = ?event.action, dropped, "drop");
    zones.set_hovered(id, false);
    handler.on_leave(&event.target);
    dropped
}
