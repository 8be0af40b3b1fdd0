// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize arithmetic for two adjacent panes.
//!
//! A gesture snapshots the rendered sizes of the pane before the bar (the
//! *sibling*) and the pane after it (the *pane*). A delta `d` along the axis,
//! measured from where the gesture started, proposes `pane - d` and
//! `sibling + d`. Proposals outside either pane's limits are rejected as a
//! whole, so the two sizes always add up to what they were at the start.
//!
//! ```
//! use understory_splitter::resize::{Limits, ResizeGesture};
//!
//! let gesture = ResizeGesture {
//!     sibling: 300.0,
//!     pane: 200.0,
//!     sibling_limits: Limits::new(0.0, 500.0),
//!     pane_limits: Limits::new(100.0, 500.0),
//! };
//! assert_eq!(gesture.apply(50.0), Some((350.0, 150.0)));
//! // The pane may not shrink below 100.
//! assert_eq!(gesture.apply(150.0), None);
//! ```

use crate::size::PaneSize;

/// Closed pixel interval a pane size must stay in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Limits {
    /// Smallest allowed size.
    pub min: f64,
    /// Largest allowed size.
    pub max: f64,
}

impl Limits {
    /// Limits from `min` to `max`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Resolve optional bounds against a splitter `extent`.
    ///
    /// A missing or automatic lower bound is `0`; a missing or automatic upper
    /// bound is `combined`, the two resized panes' sizes added together.
    pub fn resolve(
        min: Option<PaneSize>,
        max: Option<PaneSize>,
        extent: f64,
        combined: f64,
    ) -> Self {
        Self {
            min: min.and_then(|size| size.resolve(extent)).unwrap_or(0.0),
            max: max.and_then(|size| size.resolve(extent)).unwrap_or(combined),
        }
    }

    /// Returns `true` if `size` lies within the limits.
    pub fn contains(self, size: f64) -> bool {
        size >= self.min && size <= self.max
    }

    /// `size` clamped into the limits; the lower bound wins if they cross.
    pub fn clamp(self, size: f64) -> f64 {
        size.min(self.max).max(self.min)
    }
}

/// Starting state of one resize gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeGesture {
    /// Rendered size of the pane before the bar.
    pub sibling: f64,
    /// Rendered size of the pane after the bar.
    pub pane: f64,
    /// Limits of the pane before the bar.
    pub sibling_limits: Limits,
    /// Limits of the pane after the bar.
    pub pane_limits: Limits,
}

impl ResizeGesture {
    /// Sizes of both panes added together.
    pub fn combined(&self) -> f64 {
        self.sibling + self.pane
    }

    /// Proposed `(sibling, pane)` sizes for a delta, unchecked.
    pub fn tentative(&self, delta: f64) -> (f64, f64) {
        (self.sibling + delta, self.pane - delta)
    }

    /// `(sibling, pane)` sizes for a delta, or `None` if either leaves its limits.
    pub fn apply(&self, delta: f64) -> Option<(f64, f64)> {
        let (sibling, pane) = self.tentative(delta);
        (self.sibling_limits.contains(sibling) && self.pane_limits.contains(pane))
            .then_some((sibling, pane))
    }
}

/// `px` as a percentage of `extent`.
pub fn to_percent(px: f64, extent: f64) -> f64 {
    px * 100.0 / extent
}

/// The size to commit after a gesture ended at `px`.
///
/// Panes sized relatively (percent or auto) keep following the splitter and
/// commit a percentage of `extent`; pixel panes commit pixels. Without a
/// usable extent everything commits as pixels.
pub fn commit(previous: PaneSize, px: f64, extent: f64) -> PaneSize {
    if previous.is_relative() && extent > 0.0 {
        PaneSize::Percent(to_percent(px, extent))
    } else {
        PaneSize::Pixels(px)
    }
}
