// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry queries the drag engine needs from its host.
//!
//! All coordinates are in page space unless noted otherwise. Implement
//! [`GeometryProvider`] over your scene (a DOM, a box tree, a test fixture)
//! and the drag arithmetic stays independent of it.

use kurbo::{Insets, Point, Rect, Vec2};

/// Positioning context of an element that hosts ghost proxies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostPosition {
    /// The host establishes its own positioning context with this page-space origin.
    Positioned {
        /// Page-space origin of the host.
        origin: Point,
    },
    /// The host is statically positioned; children are placed relative to its offset parent.
    Static {
        /// Page-space origin of the offset parent, or `None` when the offset
        /// parent is the document root.
        offset_parent: Option<Point>,
    },
}

/// Read-only geometry of a scene of elements `E`.
pub trait GeometryProvider<E> {
    /// Page-space bounds of `element`.
    fn bounds(&self, element: E) -> Rect;

    /// Outer margins of `element`.
    fn margins(&self, element: E) -> Insets {
        let _ = element;
        Insets::ZERO
    }

    /// Positioning context of a ghost host.
    fn host_position(&self, host: E) -> HostPosition {
        let _ = host;
        HostPosition::Static {
            offset_parent: None,
        }
    }

    /// Current page scroll offset; client coordinates are page coordinates minus this.
    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }
}

/// Offset that turns a page-space location into host-relative `left`/`top`.
///
/// No host means the document root, which needs no offset.
pub fn host_base_offset<E, G>(geometry: &G, host: Option<E>) -> Vec2
where
    G: GeometryProvider<E> + ?Sized,
{
    let Some(host) = host else {
        return Vec2::ZERO;
    };
    match geometry.host_position(host) {
        HostPosition::Positioned { origin } => origin.to_vec2(),
        HostPosition::Static {
            offset_parent: Some(parent),
        } => parent.to_vec2(),
        HostPosition::Static {
            offset_parent: None,
        } => Vec2::ZERO,
    }
}
