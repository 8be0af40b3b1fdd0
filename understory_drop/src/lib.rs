// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drop: drop zones for headless drag and drop.
//!
//! Builds on `understory_drag` with:
//!
//! - [`DropRegistry`]: the zones of a scene, each with accepted channels and an
//!   insertion strategy.
//! - [`DropTracker`]: the `NONE` / `OVER(zone)` state of one drag, turning hit
//!   results into enter / over / leave transitions.
//! - [`DragAndDrop`]: a drag controller wired to a registry. It hit tests every
//!   drag move, drops on release, and reports the result as drag-end's
//!   `dropped` flag.
//!
//! Hit testing takes the elements under the pointer topmost first (see
//! [`DropSurface`]), skips the dragged element and its ghost, and picks the
//! first registered zone whose channel links with the draggable's. Zones that
//! do not link are invisible: they never see enter, over, leave, or drop.
//!
//! ## Ordering on release
//!
//! Releasing over a zone emits `drop`, then `leave`, then drag-end. A canceled
//! `drop` skips the zone's action and the drag ends with `dropped == false`.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo` and `understory_drag`.
//! - `tracing`: log zone transitions and drops.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod dnd;
pub mod event;
pub mod hit;
pub mod registry;
pub mod tracker;
pub mod zone;

pub use dnd::DragAndDrop;
pub use event::{DropEvent, DropHandler, ZoneEvent};
pub use hit::{DropSurface, elements_under};
pub use registry::DropRegistry;
pub use tracker::{DropTracker, DropTransition, Transitions};
pub use zone::{DropAction, DropStrategy, DropZone, ZoneId, insert_index};
