// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panes of a splitter.

use core::fmt;

use crate::size::PaneSize;

/// Identifier of a pane, issued by its [`Splitter`](crate::Splitter).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub(crate) u32);

impl PaneId {
    /// Raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane#{}", self.0)
    }
}

/// User-facing settings of a pane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitterPane {
    /// Size along the splitter axis.
    pub size: PaneSize,
    /// Lower bound; `None` (or [`PaneSize::Auto`]) means zero.
    pub min: Option<PaneSize>,
    /// Upper bound; `None` (or [`PaneSize::Auto`]) means the two resized panes combined.
    pub max: Option<PaneSize>,
    /// Whether the bars next to this pane can resize it.
    pub resizable: bool,
    /// Whether the pane is collapsed to nothing.
    pub collapsed: bool,
}

impl Default for SplitterPane {
    fn default() -> Self {
        Self {
            size: PaneSize::Auto,
            min: None,
            max: None,
            resizable: true,
            collapsed: false,
        }
    }
}

impl SplitterPane {
    /// An auto-sized, resizable, expanded pane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size.
    #[must_use]
    pub fn with_size(mut self, size: PaneSize) -> Self {
        self.size = size;
        self
    }

    /// Set the lower bound.
    #[must_use]
    pub fn with_min(mut self, min: PaneSize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub fn with_max(mut self, max: PaneSize) -> Self {
        self.max = Some(max);
        self
    }

    /// Allow or forbid resizing.
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Start collapsed or expanded.
    #[must_use]
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

/// A pane registered with a splitter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pane {
    pub(crate) id: PaneId,
    pub(crate) settings: SplitterPane,
    pub(crate) order: usize,
    pub(crate) drag_size: Option<f64>,
}

impl Pane {
    /// The pane's id.
    pub fn id(&self) -> PaneId {
        self.id
    }

    /// Current settings.
    pub fn settings(&self) -> &SplitterPane {
        &self.settings
    }

    /// Committed size.
    pub fn size(&self) -> PaneSize {
        self.settings.size
    }

    /// Returns `true` if the pane is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.settings.collapsed
    }

    /// Returns `true` if the pane can be resized.
    pub fn is_resizable(&self) -> bool {
        self.settings.resizable
    }

    /// Flex order: `2 * index`. Bars sit on the odd orders in between.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Pixel size set during a resize gesture, before it is committed.
    pub fn drag_size(&self) -> Option<f64> {
        self.drag_size
    }
}
