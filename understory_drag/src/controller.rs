// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag controller: turns raw pointer input into a drag lifecycle.
//!
//! ```text
//! down ──► pressed ──(move past tolerance, drag-start accepted)──► dragging ──► up ──► drag-end
//!             │                                                        │
//!             └──────────────────────── up ──► click                   └──► lost ──► drag-end
//! ```
//!
//! The controller owns the [`DragSession`] for the duration of one gesture and
//! the [`GhostRenderer`] of its element. Everything it does to the scene goes
//! through a [`DragSurface`]; everything it reports goes to a [`DragHandler`].
//!
//! ## Extending
//!
//! Behaviors that build on a plain drag (drop zones, splitter bars) wrap a
//! controller instead of replacing it: they feed it pointer input, look at the
//! returned [`MoveOutcome`], and pass a drop callback to
//! [`release_with`](DragController::release_with), which runs between the end
//! of the pointer gesture and the drag-end signal.

use core::fmt::Debug;

use kurbo::{Point, Vec2};

use crate::config::{DragConfig, OffsetPolicy};
use crate::event::{
    Click, DragEnd, DragHandler, DragMove, DragStart, PointerDown, TransitionEnd,
};
use crate::ghost::GhostRenderer;
use crate::session::DragSession;
use crate::surface::DragSurface;

/// What a pointer move did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No session; the move was ignored.
    Idle,
    /// The move was stored for the next [`DragController::on_frame`].
    Deferred,
    /// Still within the tolerance; no drag yet.
    Pressed,
    /// The handler canceled drag-start; the session is gone.
    Aborted,
    /// The drag moved the proxy.
    Moved {
        /// Raw pointer position.
        pointer: Point,
        /// New page-space top-left of the proxy.
        location: Point,
    },
    /// The handler canceled the drag-move; the proxy stayed put.
    Held {
        /// Raw pointer position.
        pointer: Point,
    },
}

impl MoveOutcome {
    /// Pointer position if the move happened during an active drag.
    pub fn drag_pointer(&self) -> Option<Point> {
        match *self {
            Self::Moved { pointer, .. } | Self::Held { pointer } => Some(pointer),
            _ => None,
        }
    }
}

/// How a gesture finished.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReleaseKind {
    /// The pointer was released at a position.
    Up(Point),
    /// The pointer capture was lost.
    Lost,
}

/// Details of a released drag, handed to a drop callback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Release<E> {
    /// The draggable element.
    pub element: E,
    /// Its ghost, if one is active.
    pub ghost: Option<E>,
    /// Final pointer position.
    pub pointer: Point,
    /// Whether the pointer capture was lost rather than released.
    pub lost: bool,
}

/// What a release did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No session; the release was ignored.
    Idle,
    /// The press never became a drag and was reported as a click.
    Click,
    /// The press never became a drag and the pointer was lost.
    Canceled,
    /// A drag ended.
    DragEnd {
        /// Whether the drop callback accepted the element.
        dropped: bool,
    },
}

/// Pointer drag state machine for one draggable element.
#[derive(Clone, Debug)]
pub struct DragController<E> {
    element: E,
    config: DragConfig<E>,
    session: Option<DragSession<E>>,
    ghost: GhostRenderer<E>,
    pending_move: Option<Point>,
    settling: bool,
}

impl<E: Copy + Debug> DragController<E> {
    /// A controller for `element`.
    pub fn new(element: E, config: DragConfig<E>) -> Self {
        Self {
            element,
            config,
            session: None,
            ghost: GhostRenderer::new(),
            pending_move: None,
            settling: false,
        }
    }

    /// The draggable element.
    pub fn element(&self) -> E {
        self.element
    }

    /// Current configuration.
    pub fn config(&self) -> &DragConfig<E> {
        &self.config
    }

    /// Mutable configuration; changes apply from the next pointer-down.
    pub fn config_mut(&mut self) -> &mut DragConfig<E> {
        &mut self.config
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession<E>> {
        self.session.as_ref()
    }

    /// Returns `true` between pointer-down and release.
    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` once the press has become a drag.
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::is_dragging)
    }

    /// Returns `true` while a return-to-origin waits for its transition end.
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// The current ghost node, if any.
    pub fn ghost_element(&self) -> Option<E> {
        self.ghost.element()
    }

    /// Start a session for a press.
    ///
    /// Returns `false` when the press is ignored: a session is already
    /// active, the target is drag-ignored, or the handler's pre-hook cancels.
    pub fn on_pointer_down<S, H>(
        &mut self,
        down: PointerDown<E>,
        surface: &mut S,
        handler: &mut H,
    ) -> bool
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        if self.session.is_some() {
            return false;
        }
        if down.target.is_some_and(|target| surface.is_drag_ignored(target)) {
            return false;
        }
        if handler.on_pointer_down(&down).is_cancel() {
            return false;
        }
        if self.settling {
            self.settle(surface, handler);
        }

        let origin = surface.bounds(self.element).origin();
        let offset = match self.config.offset {
            OffsetPolicy::FollowCursor => down.position - origin,
            OffsetPolicy::Fixed(offset) => offset,
        };
        let mut session =
            DragSession::new(self.element, down.pointer_id, down.position, origin, offset);
        session.tolerance = self.config.tolerance;
        session.direction = self.config.direction;
        self.session = Some(session);
        self.pending_move = None;
        surface.capture_pointer(self.element, down.pointer_id);
        true
    }

    /// Handle a pointer move.
    ///
    /// With move throttling enabled the position is stored and processed by
    /// the next [`on_frame`](Self::on_frame).
    pub fn on_pointer_move<S, H>(
        &mut self,
        pos: Point,
        surface: &mut S,
        handler: &mut H,
    ) -> MoveOutcome
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        if self.session.is_none() {
            return MoveOutcome::Idle;
        }
        if self.config.throttle_moves {
            self.pending_move = Some(pos);
            return MoveOutcome::Deferred;
        }
        self.process_move(pos, surface, handler)
    }

    /// Process the latest deferred move, if any.
    pub fn on_frame<S, H>(&mut self, surface: &mut S, handler: &mut H) -> MoveOutcome
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        match self.pending_move.take() {
            Some(pos) => self.process_move(pos, surface, handler),
            None => MoveOutcome::Idle,
        }
    }

    /// Release the pointer at `pos` with nothing to drop onto.
    pub fn on_pointer_up<S, H>(
        &mut self,
        pos: Point,
        surface: &mut S,
        handler: &mut H,
    ) -> ReleaseOutcome
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        self.release_with(ReleaseKind::Up(pos), surface, handler, |_, _, _| false)
    }

    /// Finish the gesture after losing pointer capture.
    pub fn on_pointer_lost<S, H>(&mut self, surface: &mut S, handler: &mut H) -> ReleaseOutcome
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        self.release_with(ReleaseKind::Lost, surface, handler, |_, _, _| false)
    }

    /// Finish the gesture, consulting `drop` before drag-end.
    ///
    /// `drop` runs only for started drags and returns whether a target
    /// accepted the element. Without a drop the proxy returns to its origin
    /// and the ghost is torn down once the transition ends.
    pub fn release_with<S, H, F>(
        &mut self,
        kind: ReleaseKind,
        surface: &mut S,
        handler: &mut H,
        drop: F,
    ) -> ReleaseOutcome
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
        F: FnOnce(&mut S, &mut H, &Release<E>) -> bool,
    {
        if let (ReleaseKind::Up(_), Some(pos)) = (kind, self.pending_move.take()) {
            self.process_move(pos, surface, handler);
        }
        let Some(session) = self.session.take() else {
            return ReleaseOutcome::Idle;
        };
        self.pending_move = None;
        surface.release_pointer(session.element, session.pointer_id);

        let pointer = match kind {
            ReleaseKind::Up(pos) => pos,
            ReleaseKind::Lost => session.last_pos,
        };

        if !session.started {
            return match kind {
                ReleaseKind::Up(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(element = ?session.element, "click");
                    handler.on_click(&Click {
                        element: session.element,
                        pointer,
                    });
                    ReleaseOutcome::Click
                }
                ReleaseKind::Lost => ReleaseOutcome::Canceled,
            };
        }

        let release = Release {
            element: session.element,
            ghost: self.ghost.element(),
            pointer,
            lost: matches!(kind, ReleaseKind::Lost),
        };
        let dropped = drop(surface, handler, &release);
        #[cfg(feature = "tracing")]
        tracing::debug!(element = ?session.element, dropped, "drag end");
        handler.on_drag_end(&DragEnd {
            element: session.element,
            start: session.start_pos,
            pointer,
            dropped,
        });

        if dropped {
            if !self.ghost.is_active() {
                surface.translate(session.element, Vec2::ZERO);
            }
            self.settle(surface, handler);
        } else {
            self.ghost
                .set_location(session.element, session.origin, session.origin, surface);
            let animated = surface.has_transition(self.ghost.element().unwrap_or(session.element));
            if animated {
                self.settling = true;
            } else {
                self.settle(surface, handler);
            }
        }
        ReleaseOutcome::DragEnd { dropped }
    }

    /// The proxy's return transition finished.
    ///
    /// Returns `false` if nothing was waiting for it.
    pub fn on_transition_end<S, H>(&mut self, surface: &mut S, handler: &mut H) -> bool
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        if !self.settling {
            return false;
        }
        self.settle(surface, handler);
        true
    }

    fn settle<S, H>(&mut self, surface: &mut S, handler: &mut H)
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        self.settling = false;
        self.ghost.destroy(self.element, surface, handler);
        handler.on_transition_end(&TransitionEnd {
            element: self.element,
        });
    }

    fn process_move<S, H>(&mut self, pos: Point, surface: &mut S, handler: &mut H) -> MoveOutcome
    where
        S: DragSurface<E> + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Idle;
        };
        session.update(pos);

        if !session.started {
            if !session.exceeds_tolerance(pos) {
                return MoveOutcome::Pressed;
            }
            let start = DragStart {
                element: session.element,
                start: session.start_pos,
                pointer: pos,
            };
            if handler.on_drag_start(&start).is_cancel() {
                let (element, pointer_id) = (session.element, session.pointer_id);
                self.session = None;
                surface.release_pointer(element, pointer_id);
                #[cfg(feature = "tracing")]
                tracing::debug!(?element, "drag start canceled");
                return MoveOutcome::Aborted;
            }
            session.started = true;
            #[cfg(feature = "tracing")]
            tracing::debug!(element = ?session.element, start = ?session.start_pos, "drag start");
            if self.config.ghost {
                let location = session.constrained(pos) - session.offset;
                session.ghost =
                    self.ghost
                        .create(session.element, location, &self.config, surface, handler);
            }
        }

        let mut event = DragMove {
            element: session.element,
            start: session.start_pos,
            pointer: pos,
            next: session.constrained(pos),
        };
        if handler.on_drag_move(&mut event).is_cancel() {
            #[cfg(feature = "tracing")]
            tracing::trace!(element = ?session.element, ?pos, "drag move canceled");
            return MoveOutcome::Held { pointer: pos };
        }
        let location = event.next - session.offset;
        session.location = location;
        self.ghost
            .set_location(session.element, session.origin, location, surface);
        MoveOutcome::Moved {
            pointer: pos,
            location,
        }
    }
}
