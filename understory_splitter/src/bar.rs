// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitter bars: pointer and keyboard input for one bar.
//!
//! A [`SplitBar`] wraps a ghost-less [`DragController`] constrained to the
//! splitter axis and translates its signals:
//!
//! - the press and drag-start are refused when the bar cannot resize;
//! - drag-start begins a resize gesture;
//! - every drag-move feeds the axis delta to [`Splitter::resize`] and is then
//!   canceled, since the bar is placed by layout rather than by the drag;
//! - drag-end commits.

use core::fmt::Debug;

use kurbo::Point;
use understory_drag::{
    Decision, DragConfig, DragController, DragEnd, DragHandler, DragMove, DragStart, DragSurface,
    MoveOutcome, PointerDown, ReleaseOutcome,
};

use crate::event::SplitterHandler;
use crate::layout::PaneGeometry;
use crate::splitter::{ArrowKey, Splitter};

/// Input driver for bar `index` of a splitter.
#[derive(Clone, Debug)]
pub struct SplitBar<E> {
    index: usize,
    drag: DragController<E>,
}

struct BarDriver<'a, G: ?Sized, H: ?Sized> {
    index: usize,
    splitter: &'a mut Splitter,
    geometry: &'a G,
    handler: &'a mut H,
}

impl<E, G, H> DragHandler<E> for BarDriver<'_, G, H>
where
    G: PaneGeometry + ?Sized,
    H: SplitterHandler + ?Sized,
{
    fn on_pointer_down(&mut self, _: &PointerDown<E>) -> Decision {
        Decision::cancel_if(!self.splitter.resize_allowed(self.index))
    }

    fn on_drag_start(&mut self, _: &DragStart<E>) -> Decision {
        let started = self
            .splitter
            .begin_resize(self.index, self.geometry, self.handler);
        Decision::cancel_if(!started)
    }

    fn on_drag_move(&mut self, event: &mut DragMove<E>) -> Decision {
        let delta = self.splitter.orientation().along(event.next - event.start);
        self.splitter.resize(delta, self.handler);
        Decision::Cancel
    }

    fn on_drag_end(&mut self, _: &DragEnd<E>) {
        self.splitter.end_resize(self.handler);
    }
}

impl<E: Copy + Debug> SplitBar<E> {
    /// A bar driver for bar `index` rendered by `element`.
    pub fn new(element: E, index: usize, splitter: &Splitter) -> Self {
        let config = DragConfig::default()
            .with_ghost(false)
            .with_direction(splitter.orientation().drag_direction());
        Self {
            index,
            drag: DragController::new(element, config),
        }
    }

    /// Index of the bar.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The underlying drag controller.
    pub fn controller(&self) -> &DragController<E> {
        &self.drag
    }

    /// Mutable access to the underlying drag controller, for tolerance and throttling.
    pub fn controller_mut(&mut self) -> &mut DragController<E> {
        &mut self.drag
    }

    /// Press on the bar. Returns `false` if the bar cannot resize.
    pub fn on_pointer_down<S, G, H>(
        &mut self,
        down: PointerDown<E>,
        splitter: &mut Splitter,
        geometry: &G,
        surface: &mut S,
        handler: &mut H,
    ) -> bool
    where
        S: DragSurface<E> + ?Sized,
        G: PaneGeometry + ?Sized,
        H: SplitterHandler + ?Sized,
    {
        self.sync_direction(splitter);
        let mut driver = BarDriver {
            index: self.index,
            splitter,
            geometry,
            handler,
        };
        self.drag.on_pointer_down(down, surface, &mut driver)
    }

    /// Pointer moved while pressed.
    pub fn on_pointer_move<S, G, H>(
        &mut self,
        pos: Point,
        splitter: &mut Splitter,
        geometry: &G,
        surface: &mut S,
        handler: &mut H,
    ) -> MoveOutcome
    where
        S: DragSurface<E> + ?Sized,
        G: PaneGeometry + ?Sized,
        H: SplitterHandler + ?Sized,
    {
        let mut driver = BarDriver {
            index: self.index,
            splitter,
            geometry,
            handler,
        };
        self.drag.on_pointer_move(pos, surface, &mut driver)
    }

    /// Process a deferred move when move throttling is on.
    pub fn on_frame<S, G, H>(
        &mut self,
        splitter: &mut Splitter,
        geometry: &G,
        surface: &mut S,
        handler: &mut H,
    ) -> MoveOutcome
    where
        S: DragSurface<E> + ?Sized,
        G: PaneGeometry + ?Sized,
        H: SplitterHandler + ?Sized,
    {
        let mut driver = BarDriver {
            index: self.index,
            splitter,
            geometry,
            handler,
        };
        self.drag.on_frame(surface, &mut driver)
    }

    /// Pointer released; commits a running resize.
    pub fn on_pointer_up<S, G, H>(
        &mut self,
        pos: Point,
        splitter: &mut Splitter,
        geometry: &G,
        surface: &mut S,
        handler: &mut H,
    ) -> ReleaseOutcome
    where
        S: DragSurface<E> + ?Sized,
        G: PaneGeometry + ?Sized,
        H: SplitterHandler + ?Sized,
    {
        let mut driver = BarDriver {
            index: self.index,
            splitter,
            geometry,
            handler,
        };
        self.drag.on_pointer_up(pos, surface, &mut driver)
    }

    /// Pointer capture lost; commits a running resize like a release.
    pub fn on_pointer_lost<S, G, H>(
        &mut self,
        splitter: &mut Splitter,
        geometry: &G,
        surface: &mut S,
        handler: &mut H,
    ) -> ReleaseOutcome
    where
        S: DragSurface<E> + ?Sized,
        G: PaneGeometry + ?Sized,
        H: SplitterHandler + ?Sized,
    {
        let mut driver = BarDriver {
            index: self.index,
            splitter,
            geometry,
            handler,
        };
        self.drag.on_pointer_lost(surface, &mut driver)
    }

    /// Arrow key on the focused bar; see [`Splitter::on_key`].
    pub fn on_key<G, H>(
        &self,
        key: ArrowKey,
        ctrl: bool,
        splitter: &mut Splitter,
        geometry: &G,
        handler: &mut H,
    ) -> bool
    where
        G: PaneGeometry + ?Sized,
        H: SplitterHandler + ?Sized,
    {
        splitter.on_key(self.index, key, ctrl, geometry, handler)
    }

    fn sync_direction(&mut self, splitter: &Splitter) {
        self.drag.config_mut().direction = splitter.orientation().drag_direction();
    }
}
