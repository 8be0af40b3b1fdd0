// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable configuration.

use alloc::string::String;

use kurbo::{Point, Vec2};

use crate::channel::Channel;
use crate::surface::TemplateKey;

/// Default drag tolerance in pixels.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Axes along which a drag is tracked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragDirection {
    /// Horizontal movement only.
    Horizontal,
    /// Vertical movement only.
    Vertical,
    /// Free movement.
    #[default]
    Both,
}

impl DragDirection {
    /// Zero out the displacement components this direction ignores.
    #[must_use]
    pub fn constrain(self, delta: Vec2) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(delta.x, 0.0),
            Self::Vertical => Vec2::new(0.0, delta.y),
            Self::Both => delta,
        }
    }

    /// Project `pointer` onto the allowed axes through `start`.
    #[must_use]
    pub fn constrain_point(self, start: Point, pointer: Point) -> Point {
        start + self.constrain(pointer - start)
    }
}

/// Where the dragged proxy sits relative to the pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum OffsetPolicy {
    /// Keep the grab point: the offset is the pointer-down position relative
    /// to the element's top-left corner.
    #[default]
    FollowCursor,
    /// Fixed offset from the proxy's top-left corner to the pointer.
    Fixed(Vec2),
}

/// Settings of a draggable element.
#[derive(Clone, Debug)]
pub struct DragConfig<E> {
    /// Pointer travel, per axis, that must be exceeded before a drag starts.
    pub tolerance: f64,
    /// Axis constraint.
    pub direction: DragDirection,
    /// Render a ghost proxy instead of moving the element itself.
    pub ghost: bool,
    /// Class added to the ghost.
    pub ghost_class: Option<String>,
    /// Element the ghost is appended to; `None` is the document root.
    pub ghost_host: Option<E>,
    /// Template instantiated for the ghost instead of a clone.
    pub ghost_template: Option<TemplateKey>,
    /// Element cloned for the ghost instead of the draggable itself.
    pub ghost_source: Option<E>,
    /// Pointer offset policy.
    pub offset: OffsetPolicy,
    /// Channel used to link with drop zones.
    pub channel: Option<Channel>,
    /// Coalesce moves and process them from [`on_frame`](crate::DragController::on_frame).
    pub throttle_moves: bool,
}

impl<E> Default for DragConfig<E> {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            direction: DragDirection::Both,
            ghost: true,
            ghost_class: None,
            ghost_host: None,
            ghost_template: None,
            ghost_source: None,
            offset: OffsetPolicy::FollowCursor,
            channel: None,
            throttle_moves: false,
        }
    }
}

impl<E> DragConfig<E> {
    /// Set the drag tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the direction constraint.
    #[must_use]
    pub fn with_direction(mut self, direction: DragDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Enable or disable the ghost proxy.
    #[must_use]
    pub fn with_ghost(mut self, ghost: bool) -> Self {
        self.ghost = ghost;
        self
    }

    /// Set the class added to the ghost.
    #[must_use]
    pub fn with_ghost_class(mut self, class: impl Into<String>) -> Self {
        self.ghost_class = Some(class.into());
        self
    }

    /// Set the element hosting the ghost.
    #[must_use]
    pub fn with_ghost_host(mut self, host: E) -> Self {
        self.ghost_host = Some(host);
        self
    }

    /// Build ghosts from a template.
    #[must_use]
    pub fn with_ghost_template(mut self, template: TemplateKey) -> Self {
        self.ghost_template = Some(template);
        self
    }

    /// Clone `source` for ghosts instead of the draggable element.
    #[must_use]
    pub fn with_ghost_source(mut self, source: E) -> Self {
        self.ghost_source = Some(source);
        self
    }

    /// Set the offset policy.
    #[must_use]
    pub fn with_offset(mut self, offset: OffsetPolicy) -> Self {
        self.offset = offset;
        self
    }

    /// Set the channel.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<Channel>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Enable or disable per-frame move coalescing.
    #[must_use]
    pub fn with_throttled_moves(mut self, throttle: bool) -> Self {
        self.throttle_moves = throttle;
        self
    }
}
