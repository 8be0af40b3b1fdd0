// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Splitter: headless splitter panes.
//!
//! A [`Splitter`] holds an ordered list of panes separated by bars. Dragging
//! bar `i` moves space between pane `i` and pane `i + 1`:
//!
//! - sizes are [`PaneSize`]s: automatic, pixels, or a percentage of the splitter;
//! - a move that would push either pane past its min/max is rejected outright,
//!   so the two sizes always keep their starting total;
//! - during the gesture the panes carry transient pixel sizes; on release,
//!   relatively sized panes commit a percentage and pixel panes commit pixels;
//! - bars next to a non-resizable or collapsed pane do not move.
//!
//! [`SplitBar`] feeds pointer input for one bar through a ghost-less
//! `understory_drag` controller. [`FlexLayout`] computes rendered pane sizes
//! when the host has no layout engine of its own.
//!
//! ## Example
//!
//! ```rust
//! use understory_splitter::{FlexLayout, Orientation, PaneSize, Splitter, SplitterPane};
//!
//! let mut splitter = Splitter::new(Orientation::Horizontal);
//! let left = splitter.add_pane(SplitterPane::new().with_size(PaneSize::Percent(50.0)));
//! let right = splitter.add_pane(SplitterPane::new().with_min(PaneSize::Pixels(100.0)));
//!
//! let layout = FlexLayout::compute(&splitter, 400.0, 0.0);
//! assert!(splitter.begin_resize(0, &layout, &mut ()));
//! // Drag the bar 60px to the right.
//! assert!(splitter.resize(60.0, &mut ()));
//! // 150px further would squeeze the right pane below its minimum.
//! assert!(!splitter.resize(150.0, &mut ()));
//! assert!(splitter.end_resize(&mut ()));
//!
//! assert_eq!(splitter.pane(left).unwrap().size(), PaneSize::Percent(65.0));
//! assert_eq!(splitter.pane(right).unwrap().size(), PaneSize::Percent(35.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo` and `understory_drag`.
//! - `tracing`: log resize gestures, rejections, and collapse toggles.
//! - `serde`: serialize [`PaneSize`] (as `"50%"`, `"200px"`, `"auto"`),
//!   [`Orientation`], and [`SplitterSnapshot`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod bar;
pub mod event;
pub mod layout;
pub mod pane;
pub mod resize;
pub mod size;
pub mod splitter;

pub use bar::SplitBar;
pub use event::{CollapseEvent, PaneExtent, ResizeEvent, SplitterHandler};
pub use layout::{FlexLayout, PaneGeometry};
pub use pane::{Pane, PaneId, SplitterPane};
pub use size::{PaneSize, PaneSizeParseError};
pub use splitter::{
    ArrowKey, DEFAULT_KEY_STEP, Orientation, PaneState, Splitter, SplitterError, SplitterSnapshot,
};
