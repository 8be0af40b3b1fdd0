// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ghost proxies: a visual stand-in that follows the pointer while the
//! original element keeps its place in the scene.
//!
//! ## Lifecycle
//!
//! 1) [`GhostRenderer::create`] builds the ghost (clone or template), adds the
//!    configured class, measures the host offset and the ghost margins, then
//!    asks the handler. A canceled create removes the partial ghost.
//! 2) [`GhostRenderer::set_location`] keeps it under the pointer. Without a
//!    ghost the element itself is translated.
//! 3) [`GhostRenderer::destroy`] asks the handler, then detaches the ghost and
//!    releases its template instance.
//!
//! A renderer holds at most one ghost. A ghost whose destruction was canceled
//! stays in the scene until the next [`create`](GhostRenderer::create), which
//! removes it first.

use core::fmt::Debug;

use kurbo::{Insets, Point, Vec2};

use crate::config::DragConfig;
use crate::event::{DragHandler, GhostEvent};
use crate::geometry::host_base_offset;
use crate::surface::{DragSurface, GhostBlueprint};

#[derive(Clone, Copy, Debug)]
struct Ghost<E> {
    element: E,
    from_template: bool,
    host: Option<E>,
    host_offset: Vec2,
    margins: Insets,
}

impl<E: Copy> Ghost<E> {
    fn place<S>(&self, location: Point, surface: &mut S)
    where
        S: DragSurface<E> + ?Sized,
    {
        let margin = Vec2::new(self.margins.x0, self.margins.y0);
        surface.place(self.element, location - self.host_offset - margin);
    }

    fn remove<S>(self, surface: &mut S)
    where
        S: DragSurface<E> + ?Sized,
    {
        surface.detach(self.element);
        if self.from_template {
            surface.release_template(self.element);
        }
    }
}

/// Owner of a draggable's ghost proxy.
#[derive(Clone, Debug)]
pub struct GhostRenderer<E> {
    active: Option<Ghost<E>>,
}

impl<E> Default for GhostRenderer<E> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<E: Copy + Debug> GhostRenderer<E> {
    /// A renderer with no ghost.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current ghost node.
    pub fn element(&self) -> Option<E> {
        self.active.map(|ghost| ghost.element)
    }

    /// Returns `true` while a ghost exists.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Build and attach a ghost for `owner` with its top-left at `location`.
    ///
    /// Returns the ghost node, or `None` if the handler canceled creation.
    pub fn create<S, H>(
        &mut self,
        owner: E,
        location: Point,
        config: &DragConfig<E>,
        surface: &mut S,
        handler: &mut H,
    ) -> Option<E>
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        if let Some(stale) = self.active.take() {
            stale.remove(surface);
        }

        let blueprint = match config.ghost_template {
            Some(template) => GhostBlueprint::Template(template),
            None => GhostBlueprint::Clone(config.ghost_source.unwrap_or(owner)),
        };
        let element = surface.build_ghost(blueprint);
        if let Some(class) = &config.ghost_class {
            surface.add_class(element, class);
        }
        let ghost = Ghost {
            element,
            from_template: matches!(blueprint, GhostBlueprint::Template(_)),
            host: config.ghost_host,
            host_offset: host_base_offset(&*surface, config.ghost_host),
            margins: surface.margins(element),
        };

        let event = GhostEvent {
            element: owner,
            ghost: element,
        };
        if handler.on_ghost_create(&event).is_cancel() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?owner, ?element, "ghost creation canceled");
            ghost.remove(surface);
            return None;
        }

        ghost.place(location, surface);
        surface.attach(element, ghost.host);
        self.active = Some(ghost);
        #[cfg(feature = "tracing")]
        tracing::debug!(?owner, ?element, "ghost created");
        Some(element)
    }

    /// Move the proxy's top-left corner to `location`.
    ///
    /// With a ghost this sets the ghost's host-relative position, compensating
    /// for its margins. Without one, `owner` is translated by
    /// `location - origin`.
    pub fn set_location<S>(&self, owner: E, origin: Point, location: Point, surface: &mut S)
    where
        S: DragSurface<E> + ?Sized,
    {
        match &self.active {
            Some(ghost) => ghost.place(location, surface),
            None => surface.translate(owner, location - origin),
        }
    }

    /// Remove the ghost unless the handler cancels.
    ///
    /// Returns `true` if no ghost remains afterwards.
    pub fn destroy<S, H>(&mut self, owner: E, surface: &mut S, handler: &mut H) -> bool
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        let Some(ghost) = self.active else {
            return true;
        };
        let event = GhostEvent {
            element: owner,
            ghost: ghost.element,
        };
        if handler.on_ghost_destroy(&event).is_cancel() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?owner, ghost = ?ghost.element, "ghost destruction canceled");
            return false;
        }
        self.active = None;
        ghost.remove(surface);
        #[cfg(feature = "tracing")]
        tracing::debug!(?owner, ghost = ?ghost.element, "ghost destroyed");
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use kurbo::{Insets, Point, Rect};

    use super::*;
    use crate::event::Decision;
    use crate::surface::TemplateKey;
    use crate::testing::{Op, Scene};

    #[derive(Default)]
    struct Veto {
        create: bool,
        destroy: bool,
    }

    impl DragHandler<u32> for Veto {
        fn on_ghost_create(&mut self, _: &GhostEvent<u32>) -> Decision {
            Decision::cancel_if(self.create)
        }

        fn on_ghost_destroy(&mut self, _: &GhostEvent<u32>) -> Decision {
            Decision::cancel_if(self.destroy)
        }
    }

    #[test]
    fn create_places_with_margin_compensation() {
        let mut scene = Scene::default();
        scene.add(1, Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut renderer = GhostRenderer::new();
        let config = DragConfig::default().with_ghost_class("dragging");

        // Margins are read from the ghost, which is the first built node.
        scene.margins.insert(1001, Insets::new(4.0, 6.0, 0.0, 0.0));
        let ghost = renderer
            .create(1, Point::new(50.0, 60.0), &config, &mut scene, &mut ())
            .unwrap();
        assert_eq!(ghost, 1001);
        assert_eq!(scene.placement(ghost), Some(Point::new(46.0, 54.0)));
        assert!(scene.ops.contains(&Op::Class(ghost, String::from("dragging"))));
        assert!(scene.ops.contains(&Op::Attach(ghost, None)));
    }

    #[test]
    fn canceled_create_removes_the_partial_ghost() {
        let mut scene = Scene::default();
        let mut renderer = GhostRenderer::new();
        let mut veto = Veto {
            create: true,
            ..Veto::default()
        };
        let config = DragConfig::default();

        assert!(
            renderer
                .create(1, Point::ZERO, &config, &mut scene, &mut veto)
                .is_none()
        );
        assert!(!renderer.is_active());
        assert!(!scene.exists(1001));

        // Without a ghost the owner itself is translated.
        renderer.set_location(1, Point::new(10.0, 10.0), Point::new(15.0, 30.0), &mut scene);
        assert_eq!(scene.translation(1), Some(kurbo::Vec2::new(5.0, 20.0)));
    }

    #[test]
    fn canceled_destroy_keeps_ghost_until_next_create() {
        let mut scene = Scene::default();
        let mut renderer = GhostRenderer::new();
        let mut veto = Veto {
            destroy: true,
            ..Veto::default()
        };
        let config = DragConfig::default();

        let first = renderer
            .create(1, Point::ZERO, &config, &mut scene, &mut veto)
            .unwrap();
        assert!(!renderer.destroy(1, &mut scene, &mut veto));
        assert!(scene.exists(first));

        let second = renderer
            .create(1, Point::ZERO, &config, &mut scene, &mut veto)
            .unwrap();
        assert_ne!(first, second);
        assert!(!scene.exists(first));
        assert!(scene.exists(second));
    }

    #[test]
    fn template_ghosts_release_their_instance() {
        let mut scene = Scene::default();
        let mut renderer = GhostRenderer::new();
        let config = DragConfig::default().with_ghost_template(TemplateKey(3));

        let ghost = renderer
            .create(1, Point::ZERO, &config, &mut scene, &mut ())
            .unwrap();
        assert!(renderer.destroy(1, &mut scene, &mut ()));
        assert!(scene.ops.contains(&Op::ReleaseTemplate(ghost)));
        assert!(renderer.destroy(1, &mut scene, &mut ()));
    }
}
