// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene queries for hit testing drop zones.

use alloc::vec::Vec;

use kurbo::Point;
use understory_drag::DragSurface;

use crate::zone::DropAction;

/// A [`DragSurface`] that can also answer "what is under this point" and
/// rearrange children.
pub trait DropSurface<E>: DragSurface<E> {
    /// Elements under `client`, topmost first.
    fn elements_at(&self, client: Point) -> Vec<E>;

    /// Shadow root hosted by `element`, if any.
    fn shadow_root(&self, element: E) -> Option<E> {
        let _ = element;
        None
    }

    /// Elements under `client` inside the shadow tree rooted at `root`, topmost first.
    fn elements_in_shadow(&self, root: E, client: Point) -> Vec<E> {
        let _ = (root, client);
        Vec::new()
    }

    /// Children of `element`, in order.
    fn children(&self, element: E) -> Vec<E>;

    /// Move `child` into `zone` as described by `action`.
    fn move_child(&mut self, zone: E, child: E, action: DropAction);
}

/// Elements under the page-space `pointer`, topmost first.
///
/// The pointer is converted to client space with the surface's scroll offset.
/// When the topmost element hosts a shadow root, the elements inside that
/// root come first, followed by the outer hits.
pub fn elements_under<E, S>(surface: &S, pointer: Point) -> Vec<E>
where
    E: Copy,
    S: DropSurface<E> + ?Sized,
{
    let client = pointer - surface.scroll_offset();
    let hits = surface.elements_at(client);
    match hits.first().and_then(|top| surface.shadow_root(*top)) {
        Some(root) => {
            let mut inner = surface.elements_in_shadow(root, client);
            inner.extend(hits);
            inner
        }
        None => hits,
    }
}
