// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone hover state: compute enter/over/leave transitions from hit results.
//!
//! ## Usage
//! 1) On every drag move, hit test the scene for the topmost linked zone.
//! 2) Feed the result (or `None`) to [`DropTracker::update`].
//! 3) On release, [`DropTracker::finish`] hands back the hovered zone; drop
//!    on it, then emit its leave.
//!
//! ```
//! # use understory_drop::{DropRegistry, DropTracker, DropTransition, DropZone};
//! # let mut zones = DropRegistry::new();
//! # let a = zones.register(DropZone::new(1_u32));
//! # let b = zones.register(DropZone::new(2_u32));
//! let mut tracker = DropTracker::new();
//! assert_eq!(tracker.update(Some(a)).as_slice(), &[DropTransition::Enter(a)]);
//! assert_eq!(tracker.update(Some(a)).as_slice(), &[DropTransition::Over(a)]);
//! assert_eq!(
//!     tracker.update(Some(b)).as_slice(),
//!     &[DropTransition::Leave(a), DropTransition::Enter(b)]
//! );
//! assert_eq!(tracker.update(None).as_slice(), &[DropTransition::Leave(b)]);
//! ```

use smallvec::SmallVec;

use crate::zone::ZoneId;

/// A zone transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DropTransition {
    /// The drag entered the zone.
    Enter(ZoneId),
    /// The drag moved within the zone it already hovers.
    Over(ZoneId),
    /// The drag left the zone.
    Leave(ZoneId),
}

impl DropTransition {
    /// The zone the transition concerns.
    pub fn zone(self) -> ZoneId {
        match self {
            Self::Enter(id) | Self::Over(id) | Self::Leave(id) => id,
        }
    }
}

/// Transitions produced by one update; never more than two.
pub type Transitions = SmallVec<[DropTransition; 2]>;

/// `NONE` / `OVER(zone)` state of one drag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DropTracker {
    current: Option<ZoneId>,
}

impl DropTracker {
    /// A tracker hovering nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered zone.
    pub fn current(&self) -> Option<ZoneId> {
        self.current
    }

    /// Move to `hit` and return the transitions.
    pub fn update(&mut self, hit: Option<ZoneId>) -> Transitions {
        let mut out = Transitions::new();
        match (self.current, hit) {
            (None, None) => {}
            (None, Some(next)) => out.push(DropTransition::Enter(next)),
            (Some(prev), Some(next)) if prev == next => out.push(DropTransition::Over(next)),
            (Some(prev), Some(next)) => {
                out.push(DropTransition::Leave(prev));
                out.push(DropTransition::Enter(next));
            }
            (Some(prev), None) => out.push(DropTransition::Leave(prev)),
        }
        self.current = hit;
        out
    }

    /// Return to `NONE`, handing back the zone that was hovered.
    pub fn finish(&mut self) -> Option<ZoneId> {
        self.current.take()
    }
}
