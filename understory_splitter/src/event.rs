// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitter signals.

use crate::pane::PaneId;

/// A pane's pixel size at the moment of a signal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaneExtent {
    /// The pane.
    pub id: PaneId,
    /// Its size along the splitter axis.
    pub size: f64,
}

/// A resize of the two panes around a bar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeEvent {
    /// Index of the bar; bar `i` sits between panes `i` and `i + 1`.
    pub bar: usize,
    /// The pane before the bar.
    pub sibling: PaneExtent,
    /// The pane after the bar.
    pub pane: PaneExtent,
}

/// A pane was collapsed or expanded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CollapseEvent {
    /// The pane.
    pub pane: PaneId,
    /// Its new state.
    pub collapsed: bool,
}

/// Receiver of splitter signals. `()` ignores them all.
pub trait SplitterHandler {
    /// A resize gesture started.
    fn on_resize_start(&mut self, event: &ResizeEvent) {
        let _ = event;
    }

    /// The panes took new sizes during a gesture.
    fn on_resizing(&mut self, event: &ResizeEvent) {
        let _ = event;
    }

    /// A resize gesture ended; sizes are committed.
    fn on_resize_end(&mut self, event: &ResizeEvent) {
        let _ = event;
    }

    /// A pane was collapsed or expanded.
    fn on_collapsed_changed(&mut self, event: &CollapseEvent) {
        let _ = event;
    }
}

impl SplitterHandler for () {}
