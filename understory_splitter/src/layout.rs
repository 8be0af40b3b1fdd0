// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pane geometry: where the rendered pane sizes come from.
//!
//! A resize gesture starts from the panes' *rendered* sizes. Hosts with a real
//! layout engine implement [`PaneGeometry`] over it; everyone else can use
//! [`FlexLayout`], which lays the panes out along the axis the way a flex row
//! or column would.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::pane::PaneId;
use crate::resize::Limits;
use crate::splitter::{Orientation, Splitter};

/// Rendered extents of a splitter's panes.
pub trait PaneGeometry {
    /// Extent of the splitter along its axis; percentages resolve against it.
    fn total_extent(&self) -> f64;

    /// Rendered size of `pane` along the axis.
    fn pane_extent(&self, pane: PaneId) -> f64;
}

/// A flex-style layout of a splitter's panes.
///
/// Sizes along the axis, in pane order:
/// - collapsed panes take nothing;
/// - panes in a resize gesture take their transient size;
/// - pixel and percent panes take their resolved size, clamped to their limits;
/// - auto panes split what is left evenly, clamped to their limits.
///
/// Bars take `bar_thickness` each and are not part of any pane.
///
/// ```
/// use understory_splitter::{FlexLayout, Orientation, PaneGeometry, PaneSize, Splitter, SplitterPane};
///
/// let mut splitter = Splitter::new(Orientation::Horizontal);
/// let a = splitter.add_pane(SplitterPane::new().with_size(PaneSize::Percent(25.0)));
/// let b = splitter.add_pane(SplitterPane::new());
///
/// let layout = FlexLayout::compute(&splitter, 400.0, 0.0);
/// assert_eq!(layout.pane_extent(a), 100.0);
/// assert_eq!(layout.pane_extent(b), 300.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLayout {
    orientation: Orientation,
    total: f64,
    bar_thickness: f64,
    extents: Vec<(PaneId, f64)>,
}

impl FlexLayout {
    /// Lay out `splitter` in `total` pixels along its axis.
    pub fn compute(splitter: &Splitter, total: f64, bar_thickness: f64) -> Self {
        let panes = splitter.panes();
        let available = (total - bar_thickness * splitter.bar_count() as f64).max(0.0);
        let limits: Vec<Limits> = panes
            .iter()
            .map(|pane| {
                let settings = pane.settings();
                Limits::resolve(settings.min, settings.max, total, f64::INFINITY)
            })
            .collect();

        let mut sizes: Vec<Option<f64>> = panes
            .iter()
            .zip(&limits)
            .map(|(pane, limits)| {
                if pane.is_collapsed() {
                    Some(0.0)
                } else if let Some(px) = pane.drag_size() {
                    Some(px)
                } else {
                    pane.size().resolve(total).map(|px| limits.clamp(px))
                }
            })
            .collect();

        let fixed: f64 = sizes.iter().flatten().sum();
        let autos = sizes.iter().filter(|size| size.is_none()).count();
        if autos > 0 {
            let share = (available - fixed).max(0.0) / autos as f64;
            for (size, limits) in sizes.iter_mut().zip(&limits) {
                if size.is_none() {
                    *size = Some(limits.clamp(share));
                }
            }
        }

        Self {
            orientation: splitter.orientation(),
            total,
            bar_thickness,
            extents: panes
                .iter()
                .zip(sizes)
                .map(|(pane, size)| (pane.id(), size.unwrap_or(0.0)))
                .collect(),
        }
    }

    /// Pane extents in order.
    pub fn extents(&self) -> &[(PaneId, f64)] {
        &self.extents
    }

    /// Rectangle of each pane inside `bounds`, in order.
    pub fn pane_rects(&self, bounds: Rect) -> Vec<(PaneId, Rect)> {
        let mut offset = 0.0;
        self.extents
            .iter()
            .map(|&(id, extent)| {
                let rect = self.slice(bounds, offset, extent);
                offset += extent + self.bar_thickness;
                (id, rect)
            })
            .collect()
    }

    /// Rectangle of bar `bar` inside `bounds`.
    pub fn bar_rect(&self, bounds: Rect, bar: usize) -> Option<Rect> {
        if bar >= self.extents.len().saturating_sub(1) {
            return None;
        }
        let before: f64 = self.extents[..=bar].iter().map(|(_, extent)| extent).sum();
        let offset = before + self.bar_thickness * bar as f64;
        Some(self.slice(bounds, offset, self.bar_thickness))
    }

    fn slice(&self, bounds: Rect, offset: f64, extent: f64) -> Rect {
        match self.orientation {
            Orientation::Horizontal => Rect::new(
                bounds.x0 + offset,
                bounds.y0,
                bounds.x0 + offset + extent,
                bounds.y1,
            ),
            Orientation::Vertical => Rect::new(
                bounds.x0,
                bounds.y0 + offset,
                bounds.x1,
                bounds.y0 + offset + extent,
            ),
        }
    }
}

impl PaneGeometry for FlexLayout {
    fn total_extent(&self) -> f64 {
        self.total
    }

    fn pane_extent(&self, pane: PaneId) -> f64 {
        self.extents
            .iter()
            .find(|(id, _)| *id == pane)
            .map_or(0.0, |(_, extent)| *extent)
    }
}
