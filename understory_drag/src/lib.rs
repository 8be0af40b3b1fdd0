// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag: headless pointer drag tracking.
//!
//! This crate turns raw pointer input into a drag lifecycle for one element at
//! a time, without assuming any particular scene graph:
//!
//! - [`session`]: per-gesture state (press position, tolerance, direction)
//! - [`controller`]: the press → drag → release state machine
//! - [`ghost`]: the visual proxy that follows the pointer
//! - [`channel`]: tags that decide which drop targets accept which draggables
//!
//! The host scene is reached through two traits. [`GeometryProvider`] answers
//! read-only layout questions; [`DragSurface`] performs the few mutations a
//! drag needs (pointer capture, ghost nodes, placement). Signals go to a
//! [`DragHandler`], whose cancelable hooks return a [`Decision`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_drag::{
//!     DragConfig, DragController, DragSurface, GeometryProvider, GhostBlueprint, MoveOutcome,
//!     PointerDown, ReleaseOutcome,
//! };
//!
//! #[derive(Default)]
//! struct Scene {
//!     offset: Vec2,
//! }
//!
//! impl GeometryProvider<u32> for Scene {
//!     fn bounds(&self, _: u32) -> Rect {
//!         Rect::new(0.0, 0.0, 40.0, 20.0)
//!     }
//! }
//!
//! impl DragSurface<u32> for Scene {
//!     fn build_ghost(&mut self, _: GhostBlueprint<u32>) -> u32 { 99 }
//!     fn add_class(&mut self, _: u32, _: &str) {}
//!     fn attach(&mut self, _: u32, _: Option<u32>) {}
//!     fn place(&mut self, _: u32, _: Point) {}
//!     fn translate(&mut self, _: u32, offset: Vec2) { self.offset = offset; }
//!     fn detach(&mut self, _: u32) {}
//! }
//!
//! let mut scene = Scene::default();
//! let mut drag = DragController::new(1, DragConfig::default().with_ghost(false));
//!
//! drag.on_pointer_down(PointerDown::at(Point::new(5.0, 5.0)), &mut scene, &mut ());
//! let moved = drag.on_pointer_move(Point::new(25.0, 5.0), &mut scene, &mut ());
//! assert!(matches!(moved, MoveOutcome::Moved { .. }));
//! assert_eq!(scene.offset, Vec2::new(20.0, 0.0));
//!
//! let end = drag.on_pointer_up(Point::new(25.0, 5.0), &mut scene, &mut ());
//! assert_eq!(end, ReleaseOutcome::DragEnd { dropped: false });
//! // Without a drop the element returns to where it started.
//! assert_eq!(scene.offset, Vec2::ZERO);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//! - `tracing`: emit `debug`/`trace` events for the drag lifecycle.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod channel;
pub mod config;
pub mod controller;
pub mod event;
pub mod geometry;
pub mod ghost;
pub mod session;
pub mod surface;

#[cfg(test)]
mod testing;

pub use channel::{Channel, ChannelTag, linked};
pub use config::{DEFAULT_TOLERANCE, DragConfig, DragDirection, OffsetPolicy};
pub use controller::{DragController, MoveOutcome, Release, ReleaseKind, ReleaseOutcome};
pub use event::{
    Click, Decision, DragEnd, DragHandler, DragMove, DragStart, GhostEvent, PointerDown,
    TransitionEnd,
};
pub use geometry::{GeometryProvider, HostPosition, host_base_offset};
pub use ghost::GhostRenderer;
pub use session::DragSession;
pub use surface::{DragSurface, GhostBlueprint, TemplateKey};
