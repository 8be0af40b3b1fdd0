// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop zones and what happens when something is dropped on them.

use core::fmt;

use understory_drag::Channel;

/// Identifier of a registered drop zone.
///
/// Issued by [`DropRegistry`](crate::DropRegistry); never reused within one registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub(crate) u32);

impl ZoneId {
    /// Raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone#{}", self.0)
    }
}

/// Insertion strategy of a zone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DropStrategy {
    /// Leave the element where it is; the drop is only reported.
    #[default]
    Default,
    /// Move the element to the end of the zone.
    Append,
    /// Move the element to the start of the zone.
    Prepend,
    /// Move the element next to the child under the pointer.
    Insert,
}

/// Concrete move decided for a drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DropAction {
    /// Nothing moves.
    None,
    /// Append to the zone's children.
    Append,
    /// Prepend to the zone's children.
    Prepend,
    /// Insert before the child currently at this index (before the dragged
    /// element is removed); an index equal to the child count appends.
    InsertAt(usize),
}

impl DropStrategy {
    /// Resolve the action for a drop.
    ///
    /// `children` are the zone's children in order, `hits` the elements under
    /// the pointer topmost first, and `dragged` the element being dropped.
    pub fn resolve<E: Copy + PartialEq>(
        self,
        children: &[E],
        hits: &[E],
        dragged: E,
    ) -> DropAction {
        match self {
            Self::Default => DropAction::None,
            Self::Append => DropAction::Append,
            Self::Prepend => DropAction::Prepend,
            Self::Insert => insert_index(children, hits, dragged)
                .map_or(DropAction::Append, DropAction::InsertAt),
        }
    }
}

/// Index to insert `dragged` at, from the first of `hits` that is one of `children`.
///
/// When `dragged` already sits before that child in the same list the index
/// moves past the child, so the element lands after it once it has been
/// removed from its old slot. Returns `None` if no child is under the pointer.
pub fn insert_index<E: Copy + PartialEq>(children: &[E], hits: &[E], dragged: E) -> Option<usize> {
    let target = hits
        .iter()
        .filter(|hit| **hit != dragged)
        .find_map(|hit| children.iter().position(|child| child == hit))?;
    match children.iter().position(|child| *child == dragged) {
        Some(current) if current < target => Some(target + 1),
        _ => Some(target),
    }
}

/// A registered drop target.
#[derive(Clone, Debug)]
pub struct DropZone<E> {
    /// The zone's element.
    pub element: E,
    /// Accepted channel(s); `None` accepts only draggables without a channel.
    pub channel: Option<Channel>,
    /// What a drop does.
    pub strategy: DropStrategy,
    pub(crate) hovered: bool,
}

impl<E> DropZone<E> {
    /// A zone over `element` with no channel and the default strategy.
    pub fn new(element: E) -> Self {
        Self {
            element,
            channel: None,
            strategy: DropStrategy::Default,
            hovered: false,
        }
    }

    /// Set the accepted channel(s).
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<Channel>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set the insertion strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: DropStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns `true` while a linked drag hovers this zone.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns `true` if a draggable with `channel` may drop here.
    pub fn accepts(&self, channel: Option<&Channel>) -> bool {
        understory_drag::linked(channel, self.channel.as_ref())
    }
}
