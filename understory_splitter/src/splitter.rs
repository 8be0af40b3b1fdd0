// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The splitter: an ordered list of panes with resize bars between them.
//!
//! Bar `i` sits between pane `i` (its *sibling*) and pane `i + 1` (its
//! *pane*). A resize gesture runs [`begin_resize`](Splitter::begin_resize),
//! any number of [`resize`](Splitter::resize) calls with the delta from the
//! gesture start, and [`end_resize`](Splitter::end_resize). While it runs the
//! two panes carry transient pixel sizes; ending the gesture commits them.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Vec2};
use understory_drag::DragDirection;

use crate::event::{CollapseEvent, PaneExtent, ResizeEvent, SplitterHandler};
use crate::layout::PaneGeometry;
use crate::pane::{Pane, PaneId, SplitterPane};
use crate::resize::{self, Limits, ResizeGesture};
use crate::size::PaneSize;

/// Default keyboard resize step in pixels.
pub const DEFAULT_KEY_STEP: f64 = 10.0;

/// Layout direction of the panes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Panes side by side; bars resize along x.
    #[default]
    Horizontal,
    /// Panes stacked; bars resize along y.
    Vertical,
}

impl Orientation {
    /// Component of `v` along the resize axis.
    pub fn along(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Length of `rect` along the resize axis.
    pub fn length(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Drag constraint for bars of this orientation.
    pub fn drag_direction(self) -> DragDirection {
        match self {
            Self::Horizontal => DragDirection::Horizontal,
            Self::Vertical => DragDirection::Vertical,
        }
    }
}

/// Arrow keys understood by [`Splitter::on_key`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
}

/// Error from a structural splitter operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitterError {
    /// No pane has this id.
    UnknownPane(PaneId),
    /// An insertion index past the end.
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of panes.
        len: usize,
    },
    /// A snapshot for a different number of panes.
    SnapshotMismatch {
        /// Number of panes in the splitter.
        expected: usize,
        /// Number of panes in the snapshot.
        found: usize,
    },
}

impl fmt::Display for SplitterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPane(id) => write!(f, "unknown {id}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "pane index {index} out of bounds for {len} panes")
            }
            Self::SnapshotMismatch { expected, found } => {
                write!(f, "snapshot has {found} panes, splitter has {expected}")
            }
        }
    }
}

impl core::error::Error for SplitterError {}

/// Persisted state of one pane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaneState {
    /// Committed size.
    pub size: PaneSize,
    /// Collapsed flag.
    pub collapsed: bool,
}

/// Persisted state of a splitter: orientation plus each pane in order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitterSnapshot {
    /// Layout direction.
    pub orientation: Orientation,
    /// Pane states in order.
    pub panes: Vec<PaneState>,
}

#[derive(Copy, Clone, Debug)]
struct ActiveResize {
    bar: usize,
    extent: f64,
    gesture: ResizeGesture,
}

/// Ordered panes and the resize state between them.
#[derive(Clone, Debug, Default)]
pub struct Splitter {
    orientation: Orientation,
    panes: Vec<Pane>,
    next_id: u32,
    key_step: Option<f64>,
    active: Option<ActiveResize>,
}

impl Splitter {
    /// An empty splitter.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// Set the keyboard resize step.
    #[must_use]
    pub fn with_key_step(mut self, step: f64) -> Self {
        self.key_step = Some(step);
        self
    }

    /// Keyboard resize step in pixels.
    pub fn key_step(&self) -> f64 {
        self.key_step.unwrap_or(DEFAULT_KEY_STEP)
    }

    /// Layout direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the layout direction; a running gesture is dropped uncommitted.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.abort_resize();
        self.orientation = orientation;
    }

    /// Panes in order.
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// Number of panes.
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// Returns `true` if there are no panes.
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// The pane with `id`.
    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|pane| pane.id == id)
    }

    /// Position of the pane with `id`.
    pub fn index_of(&self, id: PaneId) -> Option<usize> {
        self.panes.iter().position(|pane| pane.id == id)
    }

    /// Mutable settings of the pane with `id`.
    pub fn settings_mut(&mut self, id: PaneId) -> Result<&mut SplitterPane, SplitterError> {
        self.panes
            .iter_mut()
            .find(|pane| pane.id == id)
            .map(|pane| &mut pane.settings)
            .ok_or(SplitterError::UnknownPane(id))
    }

    /// Append a pane.
    pub fn add_pane(&mut self, settings: SplitterPane) -> PaneId {
        let id = self.allocate_id();
        self.panes.push(Self::fresh(id, settings));
        self.reorder();
        id
    }

    /// Insert a pane at `index`.
    pub fn insert_pane(
        &mut self,
        index: usize,
        settings: SplitterPane,
    ) -> Result<PaneId, SplitterError> {
        if index > self.panes.len() {
            return Err(SplitterError::IndexOutOfBounds {
                index,
                len: self.panes.len(),
            });
        }
        self.abort_resize();
        let id = self.allocate_id();
        self.panes.insert(index, Self::fresh(id, settings));
        self.reorder();
        Ok(id)
    }

    /// Remove a pane, returning its settings.
    pub fn remove_pane(&mut self, id: PaneId) -> Result<SplitterPane, SplitterError> {
        let index = self.index_of(id).ok_or(SplitterError::UnknownPane(id))?;
        self.abort_resize();
        let pane = self.panes.remove(index);
        self.reorder();
        Ok(pane.settings)
    }

    /// Number of bars.
    pub fn bar_count(&self) -> usize {
        self.panes.len().saturating_sub(1)
    }

    /// Flex order of bar `bar`.
    pub fn bar_order(bar: usize) -> usize {
        2 * bar + 1
    }

    /// `(sibling, pane)` around bar `bar`.
    pub fn neighbors(&self, bar: usize) -> Option<(PaneId, PaneId)> {
        let pair = self.pair(bar)?;
        Some((pair[0].id, pair[1].id))
    }

    /// Returns `true` if bar `bar` exists and both its panes are resizable and expanded.
    pub fn resize_allowed(&self, bar: usize) -> bool {
        self.pair(bar).is_some_and(|pair| {
            pair.iter()
                .all(|pane| pane.settings.resizable && !pane.settings.collapsed)
        })
    }

    /// Returns `true` while a resize gesture runs.
    pub fn is_resizing(&self) -> bool {
        self.active.is_some()
    }

    /// The bar of the running gesture.
    pub fn active_bar(&self) -> Option<usize> {
        self.active.map(|active| active.bar)
    }

    /// Start resizing around bar `bar`, snapshotting rendered sizes from `geometry`.
    ///
    /// Returns `false` (and emits nothing) if resizing there is not allowed.
    /// A gesture already running is dropped uncommitted.
    pub fn begin_resize<G, H>(&mut self, bar: usize, geometry: &G, handler: &mut H) -> bool
    where
        G: PaneGeometry + ?Sized,
        H: SplitterHandler + ?Sized,
    {
        self.abort_resize();
        let Some((active, (sibling_id, pane_id))) = self.measure(bar, geometry) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(bar, "resize not allowed");
            return false;
        };
        self.active = Some(active);
        let ResizeGesture { sibling, pane, .. } = active.gesture;
        #[cfg(feature = "tracing")]
        tracing::debug!(bar, sibling, pane, "resize start");
        handler.on_resize_start(&ResizeEvent {
            bar,
            sibling: PaneExtent {
                id: sibling_id,
                size: sibling,
            },
            pane: PaneExtent { id: pane_id, size: pane },
        });
        true
    }

    /// Apply `delta`, the axis distance from the gesture start.
    ///
    /// Returns `false` without changing anything when no gesture runs or the
    /// delta would push either pane out of its limits.
    pub fn resize<H>(&mut self, delta: f64, handler: &mut H) -> bool
    where
        H: SplitterHandler + ?Sized,
    {
        let Some(active) = self.active else {
            return false;
        };
        let Some((sibling, pane)) = active.gesture.apply(delta) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(bar = active.bar, delta, "resize rejected");
            return false;
        };
        let Some([before, after]) = self.pair_mut(active.bar) else {
            return false;
        };
        before.drag_size = Some(sibling);
        after.drag_size = Some(pane);
        let event = ResizeEvent {
            bar: active.bar,
            sibling: PaneExtent {
                id: before.id,
                size: sibling,
            },
            pane: PaneExtent {
                id: after.id,
                size: pane,
            },
        };
        handler.on_resizing(&event);
        true
    }

    /// Finish the gesture, committing the transient sizes.
    ///
    /// A gesture that never moved leaves the committed sizes untouched.
    pub fn end_resize<H>(&mut self, handler: &mut H) -> bool
    where
        H: SplitterHandler + ?Sized,
    {
        let Some(active) = self.active.take() else {
            return false;
        };
        let Some([before, after]) = self.pair_mut(active.bar) else {
            return false;
        };
        let finish = |pane: &mut Pane, initial: f64| {
            let size = match pane.drag_size.take() {
                Some(px) => {
                    pane.settings.size = resize::commit(pane.settings.size, px, active.extent);
                    px
                }
                None => initial,
            };
            PaneExtent { id: pane.id, size }
        };
        let event = ResizeEvent {
            bar: active.bar,
            sibling: finish(before, active.gesture.sibling),
            pane: finish(after, active.gesture.pane),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            bar = active.bar,
            sibling = event.sibling.size,
            pane = event.pane.size,
            "resize committed"
        );
        handler.on_resize_end(&event);
        true
    }

    /// Drop a running gesture without committing it.
    pub fn abort_resize(&mut self) {
        if self.active.take().is_some() {
            for pane in &mut self.panes {
                pane.drag_size = None;
            }
        }
    }

    /// Collapse or expand a pane, returning its new state.
    pub fn toggle_collapse<H>(&mut self, id: PaneId, handler: &mut H) -> Result<bool, SplitterError>
    where
        H: SplitterHandler + ?Sized,
    {
        let index = self.index_of(id).ok_or(SplitterError::UnknownPane(id))?;
        if self
            .active
            .is_some_and(|active| index == active.bar || index == active.bar + 1)
        {
            self.abort_resize();
        }
        let settings = &mut self.panes[index].settings;
        settings.collapsed = !settings.collapsed;
        let collapsed = settings.collapsed;
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, collapsed, "collapse toggled");
        handler.on_collapsed_changed(&CollapseEvent { pane: id, collapsed });
        Ok(collapsed)
    }

    /// Keyboard control of bar `bar`.
    ///
    /// Arrows along the resize axis move the bar by the key step through a
    /// full start/move/end gesture. With `ctrl` they collapse instead: toward
    /// the end, the pane after the bar collapses unless the pane before it is
    /// collapsed, which then expands; toward the start, the mirror image.
    /// Returns `true` if the key was handled. A step the limits reject is not
    /// handled and emits nothing.
    pub fn on_key<G, H>(
        &mut self,
        bar: usize,
        key: ArrowKey,
        ctrl: bool,
        geometry: &G,
        handler: &mut H,
    ) -> bool
    where
        G: PaneGeometry + ?Sized,
        H: SplitterHandler + ?Sized,
    {
        let forward = match (self.orientation, key) {
            (Orientation::Horizontal, ArrowKey::Right) | (Orientation::Vertical, ArrowKey::Down) => true,
            (Orientation::Horizontal, ArrowKey::Left) | (Orientation::Vertical, ArrowKey::Up) => false,
            _ => return false,
        };
        let Some((sibling, pane)) = self.neighbors(bar) else {
            return false;
        };

        if ctrl {
            let collapsed = |id| self.pane(id).is_some_and(Pane::is_collapsed);
            let target = match (forward, collapsed(sibling), collapsed(pane)) {
                (true, true, _) => sibling,
                (true, false, _) => pane,
                (false, _, true) => pane,
                (false, _, false) => sibling,
            };
            return self.toggle_collapse(target, handler).is_ok();
        }

        let step = self.key_step();
        let delta = if forward { step } else { -step };
        let accepted = self
            .measure(bar, geometry)
            .is_some_and(|(active, _)| active.gesture.apply(delta).is_some());
        if !accepted {
            #[cfg(feature = "tracing")]
            tracing::trace!(bar, delta, "key step rejected");
            return false;
        }
        if !self.begin_resize(bar, geometry, handler) {
            return false;
        }
        let moved = self.resize(delta, handler);
        self.end_resize(handler);
        moved
    }

    /// Current sizes and collapsed flags.
    pub fn snapshot(&self) -> SplitterSnapshot {
        SplitterSnapshot {
            orientation: self.orientation,
            panes: self
                .panes
                .iter()
                .map(|pane| PaneState {
                    size: pane.settings.size,
                    collapsed: pane.settings.collapsed,
                })
                .collect(),
        }
    }

    /// Apply a snapshot taken from a splitter with the same number of panes.
    pub fn restore(&mut self, snapshot: &SplitterSnapshot) -> Result<(), SplitterError> {
        if snapshot.panes.len() != self.panes.len() {
            return Err(SplitterError::SnapshotMismatch {
                expected: self.panes.len(),
                found: snapshot.panes.len(),
            });
        }
        self.abort_resize();
        self.orientation = snapshot.orientation;
        for (pane, state) in self.panes.iter_mut().zip(&snapshot.panes) {
            pane.settings.size = state.size;
            pane.settings.collapsed = state.collapsed;
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> PaneId {
        let id = PaneId(self.next_id);
        self.next_id += 1;
        id
    }

    fn fresh(id: PaneId, settings: SplitterPane) -> Pane {
        Pane {
            id,
            settings,
            order: 0,
            drag_size: None,
        }
    }

    fn reorder(&mut self) {
        for (i, pane) in self.panes.iter_mut().enumerate() {
            pane.order = 2 * i;
        }
    }

    /// Gesture start state for bar `bar`, if resizing there is allowed.
    fn measure<G>(&self, bar: usize, geometry: &G) -> Option<(ActiveResize, (PaneId, PaneId))>
    where
        G: PaneGeometry + ?Sized,
    {
        if !self.resize_allowed(bar) {
            return None;
        }
        let [before, after] = self.pair(bar)? else {
            return None;
        };
        let extent = geometry.total_extent();
        let sibling = geometry.pane_extent(before.id);
        let pane = geometry.pane_extent(after.id);
        let combined = sibling + pane;
        let limits = |p: &Pane| Limits::resolve(p.settings.min, p.settings.max, extent, combined);
        let gesture = ResizeGesture {
            sibling,
            pane,
            sibling_limits: limits(before),
            pane_limits: limits(after),
        };
        Some((
            ActiveResize {
                bar,
                extent,
                gesture,
            },
            (before.id, after.id),
        ))
    }

    fn pair(&self, bar: usize) -> Option<&[Pane]> {
        self.panes.get(bar..bar.checked_add(2)?)
    }

    fn pair_mut(&mut self, bar: usize) -> Option<&mut [Pane; 2]> {
        self.panes.get_mut(bar..bar.checked_add(2)?)?.try_into().ok()
    }
}
