// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory scene for unit tests.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Vec2};

use crate::geometry::GeometryProvider;
use crate::surface::{DragSurface, GhostBlueprint};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Capture(u32, u64),
    Release(u32, u64),
    Build(u32),
    Class(u32, String),
    Attach(u32, Option<u32>),
    Detach(u32),
    ReleaseTemplate(u32),
}

#[derive(Debug, Default)]
pub(crate) struct Scene {
    pub(crate) bounds: BTreeMap<u32, Rect>,
    pub(crate) margins: BTreeMap<u32, Insets>,
    pub(crate) placed: BTreeMap<u32, Point>,
    pub(crate) translated: BTreeMap<u32, Vec2>,
    pub(crate) attached: Vec<u32>,
    pub(crate) alive: Vec<u32>,
    pub(crate) ignored: Vec<u32>,
    pub(crate) animated: bool,
    pub(crate) ops: Vec<Op>,
    next_ghost: u32,
}

impl Scene {
    pub(crate) fn add(&mut self, element: u32, bounds: Rect) {
        self.bounds.insert(element, bounds);
    }

    pub(crate) fn exists(&self, ghost: u32) -> bool {
        self.alive.contains(&ghost)
    }

    pub(crate) fn is_attached(&self, ghost: u32) -> bool {
        self.attached.contains(&ghost)
    }

    pub(crate) fn placement(&self, ghost: u32) -> Option<Point> {
        self.placed.get(&ghost).copied()
    }

    pub(crate) fn translation(&self, element: u32) -> Option<Vec2> {
        self.translated.get(&element).copied()
    }
}

impl GeometryProvider<u32> for Scene {
    fn bounds(&self, element: u32) -> Rect {
        self.bounds.get(&element).copied().unwrap_or(Rect::ZERO)
    }

    fn margins(&self, element: u32) -> Insets {
        self.margins.get(&element).copied().unwrap_or(Insets::ZERO)
    }
}

impl DragSurface<u32> for Scene {
    fn is_drag_ignored(&self, target: u32) -> bool {
        self.ignored.contains(&target)
    }

    fn capture_pointer(&mut self, element: u32, pointer_id: u64) {
        self.ops.push(Op::Capture(element, pointer_id));
    }

    fn release_pointer(&mut self, element: u32, pointer_id: u64) {
        self.ops.push(Op::Release(element, pointer_id));
    }

    fn build_ghost(&mut self, _blueprint: GhostBlueprint<u32>) -> u32 {
        self.next_ghost += 1;
        let ghost = 1000 + self.next_ghost;
        self.alive.push(ghost);
        self.ops.push(Op::Build(ghost));
        ghost
    }

    fn add_class(&mut self, ghost: u32, class: &str) {
        self.ops.push(Op::Class(ghost, class.into()));
    }

    fn attach(&mut self, ghost: u32, host: Option<u32>) {
        self.attached.push(ghost);
        self.ops.push(Op::Attach(ghost, host));
    }

    fn place(&mut self, ghost: u32, position: Point) {
        self.placed.insert(ghost, position);
    }

    fn translate(&mut self, element: u32, offset: Vec2) {
        self.translated.insert(element, offset);
    }

    fn detach(&mut self, ghost: u32) {
        self.attached.retain(|g| *g != ghost);
        self.alive.retain(|g| *g != ghost);
        self.ops.push(Op::Detach(ghost));
    }

    fn release_template(&mut self, ghost: u32) {
        self.ops.push(Op::ReleaseTemplate(ghost));
    }

    fn has_transition(&self, _element: u32) -> bool {
        self.animated
    }
}
