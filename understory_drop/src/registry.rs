// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of the drop zones in one scene.
//!
//! Zones are registered when their element mounts and unregistered when it
//! unmounts; the registry is only read while a drag is in progress. Ids come
//! from a counter owned by the registry, so two registries never share state.
//!
//! ```
//! use understory_drop::{DropRegistry, DropStrategy, DropZone};
//!
//! let mut zones = DropRegistry::new();
//! let list = zones.register(DropZone::new(10_u32).with_strategy(DropStrategy::Append));
//! assert_eq!(zones.zone_for(10), Some(list));
//!
//! let removed = zones.unregister(list).unwrap();
//! assert_eq!(removed.element, 10);
//! assert!(zones.is_empty());
//! ```

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use understory_drag::Channel;

use crate::zone::{DropZone, ZoneId};

/// All drop zones of a scene, addressable by [`ZoneId`] and by element.
#[derive(Clone, Debug)]
pub struct DropRegistry<E> {
    zones: HashMap<ZoneId, DropZone<E>>,
    by_element: HashMap<E, ZoneId>,
    next_id: u32,
}

impl<E> Default for DropRegistry<E> {
    fn default() -> Self {
        Self {
            zones: HashMap::new(),
            by_element: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<E: Copy + Eq + Hash + Debug> DropRegistry<E> {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone and return its id.
    ///
    /// Registering an element that already has a zone replaces that zone's
    /// settings and keeps its id.
    pub fn register(&mut self, zone: DropZone<E>) -> ZoneId {
        if let Some(&id) = self.by_element.get(&zone.element) {
            self.zones.insert(id, zone);
            return id;
        }
        let id = ZoneId(self.next_id);
        self.next_id += 1;
        self.by_element.insert(zone.element, id);
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, element = ?zone.element, "drop zone registered");
        self.zones.insert(id, zone);
        id
    }

    /// Remove a zone, returning it.
    pub fn unregister(&mut self, id: ZoneId) -> Option<DropZone<E>> {
        let zone = self.zones.remove(&id)?;
        self.by_element.remove(&zone.element);
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, element = ?zone.element, "drop zone unregistered");
        Some(zone)
    }

    /// The zone with `id`.
    pub fn get(&self, id: ZoneId) -> Option<&DropZone<E>> {
        self.zones.get(&id)
    }

    /// Mutable access to the zone with `id`.
    pub fn get_mut(&mut self, id: ZoneId) -> Option<&mut DropZone<E>> {
        self.zones.get_mut(&id)
    }

    /// The zone registered on `element`.
    pub fn zone_for(&self, element: E) -> Option<ZoneId> {
        self.by_element.get(&element).copied()
    }

    /// The first of `hits` that is a zone accepting `channel`.
    ///
    /// Incompatible zones are skipped as if they were not registered.
    pub fn first_linked(
        &self,
        hits: impl IntoIterator<Item = E>,
        channel: Option<&Channel>,
    ) -> Option<ZoneId> {
        hits.into_iter().find_map(|element| {
            let id = self.zone_for(element)?;
            self.zones
                .get(&id)
                .is_some_and(|zone| zone.accepts(channel))
                .then_some(id)
        })
    }

    /// Number of registered zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if no zone is registered.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterate over all zones in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &DropZone<E>)> + '_ {
        self.zones.iter().map(|(id, zone)| (*id, zone))
    }

    pub(crate) fn set_hovered(&mut self, id: ZoneId, hovered: bool) {
        if let Some(zone) = self.zones.get_mut(&id) {
            zone.hovered = hovered;
        }
    }
}
