// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_drop` crate.
//!
//! A small board of rectangles stands in for the scene: a list zone holding
//! three items and two free zones to its right.

use std::collections::HashMap;

use kurbo::{Point, Rect, Vec2};
use proptest::prelude::*;
use understory_drag::{
    Channel, Decision, DragConfig, DragEnd, DragHandler, DragSurface, GeometryProvider,
    GhostBlueprint, GhostEvent, PointerDown, ReleaseOutcome,
};
use understory_drop::{
    DragAndDrop, DropAction, DropEvent, DropHandler, DropRegistry, DropStrategy, DropSurface,
    DropZone, ZoneEvent,
};

const LIST: u32 = 10;
const ITEMS: [u32; 3] = [1, 2, 3];
const ZONE_A: u32 = 20;
const ZONE_B: u32 = 30;

#[derive(Debug, Default)]
struct Board {
    /// Stacking order: later entries are on top.
    rects: Vec<(u32, Rect)>,
    children: HashMap<u32, Vec<u32>>,
    ghosts: HashMap<u32, Point>,
    scroll: Vec2,
    moved: Vec<(u32, u32, DropAction)>,
    next: u32,
}

impl Board {
    fn new() -> Self {
        let mut board = Self::default();
        board.rects.push((LIST, Rect::new(0.0, 0.0, 100.0, 200.0)));
        for (i, item) in ITEMS.iter().enumerate() {
            let top = 20.0 * i as f64;
            board.rects.push((*item, Rect::new(0.0, top, 40.0, top + 20.0)));
        }
        board.rects.push((ZONE_A, Rect::new(200.0, 0.0, 300.0, 100.0)));
        board.rects.push((ZONE_B, Rect::new(200.0, 100.0, 300.0, 200.0)));
        board.children.insert(LIST, ITEMS.to_vec());
        board.children.insert(ZONE_A, Vec::new());
        board.children.insert(ZONE_B, Vec::new());
        board
    }

    fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }
}

impl GeometryProvider<u32> for Board {
    fn bounds(&self, element: u32) -> Rect {
        self.rects
            .iter()
            .find(|(e, _)| *e == element)
            .map(|(_, r)| *r)
            .unwrap_or(Rect::ZERO)
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }
}

impl DragSurface<u32> for Board {
    fn build_ghost(&mut self, _: GhostBlueprint<u32>) -> u32 {
        self.next += 1;
        let ghost = 900 + self.next;
        self.ghosts.insert(ghost, Point::ZERO);
        ghost
    }

    fn add_class(&mut self, _: u32, _: &str) {}

    fn attach(&mut self, _: u32, _: Option<u32>) {}

    fn place(&mut self, ghost: u32, position: Point) {
        self.ghosts.insert(ghost, position);
    }

    fn translate(&mut self, _: u32, _: Vec2) {}

    fn detach(&mut self, ghost: u32) {
        self.ghosts.remove(&ghost);
    }
}

impl DropSurface<u32> for Board {
    fn elements_at(&self, client: Point) -> Vec<u32> {
        // Ghosts are attached last, so they are always on top.
        let page = client + self.scroll;
        let mut hits: Vec<u32> = self
            .ghosts
            .iter()
            .filter(|(_, at)| Rect::from_origin_size(**at, (40.0, 20.0)).contains(page))
            .map(|(g, _)| *g)
            .collect();
        hits.extend(
            self.rects
                .iter()
                .rev()
                .filter(|(_, r)| r.contains(page))
                .map(|(e, _)| *e),
        );
        hits
    }

    fn children(&self, element: u32) -> Vec<u32> {
        self.children.get(&element).cloned().unwrap_or_default()
    }

    fn move_child(&mut self, zone: u32, child: u32, action: DropAction) {
        self.moved.push((zone, child, action));
    }
}

#[derive(Debug, Default)]
struct Log {
    events: Vec<String>,
    cancel_drop: bool,
    names: HashMap<u32, &'static str>,
}

impl Log {
    fn named() -> Self {
        let mut log = Self::default();
        log.names.insert(LIST, "list");
        log.names.insert(ZONE_A, "A");
        log.names.insert(ZONE_B, "B");
        log
    }

    fn name(&self, element: u32) -> &'static str {
        self.names.get(&element).copied().unwrap_or("?")
    }

    /// Zone events only, with consecutive `over`s collapsed.
    fn zone_events(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for e in &self.events {
            let is_zone = ["enter", "over", "leave", "drop"]
                .iter()
                .any(|k| e.starts_with(k));
            if is_zone && out.last() != Some(e) {
                out.push(e.clone());
            }
        }
        out
    }
}

impl DragHandler<u32> for Log {
    fn on_drag_end(&mut self, event: &DragEnd<u32>) {
        self.events.push(format!("end dropped={}", event.dropped));
    }

    fn on_ghost_create(&mut self, _: &GhostEvent<u32>) -> Decision {
        self.events.push("ghost-create".into());
        Decision::Proceed
    }

    fn on_ghost_destroy(&mut self, _: &GhostEvent<u32>) -> Decision {
        self.events.push("ghost-destroy".into());
        Decision::Proceed
    }
}

impl DropHandler<u32> for Log {
    fn on_enter(&mut self, event: &ZoneEvent<u32>) {
        self.events.push(format!("enter {}", self.name(event.zone_element)));
    }

    fn on_over(&mut self, event: &ZoneEvent<u32>) {
        self.events.push(format!("over {}", self.name(event.zone_element)));
    }

    fn on_leave(&mut self, event: &ZoneEvent<u32>) {
        self.events.push(format!("leave {}", self.name(event.zone_element)));
    }

    fn on_drop(&mut self, event: &DropEvent<u32>) -> Decision {
        self.events
            .push(format!("drop {}", self.name(event.target.zone_element)));
        Decision::cancel_if(self.cancel_drop)
    }
}

fn zones(channel_a: Option<Channel>, channel_b: Option<Channel>) -> DropRegistry<u32> {
    let mut zones = DropRegistry::new();
    let mut a = DropZone::new(ZONE_A).with_strategy(DropStrategy::Append);
    a.channel = channel_a;
    let mut b = DropZone::new(ZONE_B).with_strategy(DropStrategy::Prepend);
    b.channel = channel_b;
    zones.register(a);
    zones.register(b);
    zones
}

fn at(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn moving_across_zones_emits_exact_transitions() {
    let mut board = Board::new();
    let mut log = Log::named();
    let mut zones = zones(None, None);
    let mut dnd = DragAndDrop::new(1, DragConfig::default());

    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    for p in [
        at(150.0, 50.0),
        at(250.0, 40.0),
        at(255.0, 45.0),
        at(260.0, 50.0),
        at(250.0, 140.0),
        at(255.0, 150.0),
        at(350.0, 150.0),
    ] {
        dnd.on_pointer_move(p, &mut zones, &mut board, &mut log);
    }
    let end = dnd.on_pointer_up(at(350.0, 150.0), &mut zones, &mut board, &mut log);

    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: false });
    assert_eq!(
        log.zone_events(),
        ["enter A", "over A", "leave A", "enter B", "over B", "leave B"]
    );
    assert_eq!(log.events.last().map(String::as_str), Some("ghost-destroy"));
}

#[test]
fn drop_fires_before_leave_and_drag_end() {
    let mut board = Board::new();
    let mut log = Log::named();
    let mut zones = zones(None, None);
    let mut dnd = DragAndDrop::new(1, DragConfig::default());

    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(250.0, 50.0), &mut zones, &mut board, &mut log);
    let a = zones.zone_for(ZONE_A).unwrap();
    assert_eq!(dnd.hovered(), Some(a));
    assert!(zones.get(a).unwrap().is_hovered());

    let end = dnd.on_pointer_up(at(250.0, 50.0), &mut zones, &mut board, &mut log);
    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: true });

    let tail: Vec<&str> = log.events.iter().map(String::as_str).skip(2).collect();
    assert_eq!(
        tail,
        ["drop A", "leave A", "end dropped=true", "ghost-destroy"]
    );
    assert_eq!(board.moved, vec![(ZONE_A, 1, DropAction::Append)]);
    assert_eq!(dnd.hovered(), None);
    assert!(!zones.get(a).unwrap().is_hovered());
}

#[test]
fn release_drops_on_the_zone_hovered_by_the_last_move() {
    let mut board = Board::new();
    let mut log = Log::named();
    let mut zones = zones(None, None);
    let mut dnd = DragAndDrop::new(1, DragConfig::default());

    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(250.0, 50.0), &mut zones, &mut board, &mut log);
    // Released over B without a move in between: A still receives the drop.
    let end = dnd.on_pointer_up(at(250.0, 150.0), &mut zones, &mut board, &mut log);

    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: true });
    assert_eq!(log.zone_events(), ["enter A", "drop A", "leave A"]);
    assert_eq!(board.moved, vec![(ZONE_A, 1, DropAction::Append)]);
}

#[test]
fn pending_throttled_move_is_tracked_before_the_drop() {
    let mut board = Board::new();
    let mut log = Log::named();
    let mut zones = zones(None, None);
    let config = DragConfig::default().with_throttled_moves(true);
    let mut dnd = DragAndDrop::new(1, config);

    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(250.0, 150.0), &mut zones, &mut board, &mut log);
    assert_eq!(dnd.hovered(), None);
    let end = dnd.on_pointer_up(at(250.0, 150.0), &mut zones, &mut board, &mut log);

    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: true });
    assert_eq!(log.zone_events(), ["enter B", "drop B", "leave B"]);
    assert_eq!(board.moved, vec![(ZONE_B, 1, DropAction::Prepend)]);
}

#[test]
fn canceled_drop_skips_the_action() {
    let mut board = Board::new();
    let mut log = Log {
        cancel_drop: true,
        ..Log::named()
    };
    let mut zones = zones(None, None);
    let mut dnd = DragAndDrop::new(1, DragConfig::default());

    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(250.0, 150.0), &mut zones, &mut board, &mut log);
    let end = dnd.on_pointer_up(at(250.0, 150.0), &mut zones, &mut board, &mut log);

    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: false });
    assert!(board.moved.is_empty());
    assert_eq!(log.zone_events(), ["enter B", "drop B", "leave B"]);
}

#[test]
fn lost_pointer_leaves_without_dropping() {
    let mut board = Board::new();
    let mut log = Log::named();
    let mut zones = zones(None, None);
    let mut dnd = DragAndDrop::new(1, DragConfig::default());

    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(250.0, 50.0), &mut zones, &mut board, &mut log);
    let end = dnd.on_pointer_lost(&mut zones, &mut board, &mut log);

    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: false });
    assert_eq!(log.zone_events(), ["enter A", "leave A"]);
    assert!(board.moved.is_empty());
}

#[test]
fn channels_gate_zone_participation() {
    let mut board = Board::new();
    let mut log = Log::named();
    let mut zones = zones(
        Some(Channel::many(["odd", "irrational"])),
        Some(Channel::from("even")),
    );
    let config = DragConfig::default().with_channel("odd");
    let mut dnd = DragAndDrop::new(1, config);

    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(250.0, 150.0), &mut zones, &mut board, &mut log);
    assert_eq!(dnd.hovered(), None);
    dnd.on_pointer_move(at(250.0, 50.0), &mut zones, &mut board, &mut log);
    let end = dnd.on_pointer_up(at(250.0, 50.0), &mut zones, &mut board, &mut log);

    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: true });
    assert_eq!(log.zone_events(), ["enter A", "drop A", "leave A"]);

    // Released over the "even" zone: nothing links, nothing drops.
    let mut log = Log::named();
    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(250.0, 150.0), &mut zones, &mut board, &mut log);
    let end = dnd.on_pointer_up(at(250.0, 150.0), &mut zones, &mut board, &mut log);
    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: false });
    assert!(log.zone_events().is_empty());
}

#[test]
fn insert_strategy_uses_child_under_pointer() {
    let mut board = Board::new();
    let mut log = Log::named();
    let mut zones = DropRegistry::new();
    zones.register(DropZone::new(LIST).with_strategy(DropStrategy::Insert));
    let mut dnd = DragAndDrop::new(1, DragConfig::default());

    // Drag the first item onto the third: it lands after it.
    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(30.0, 50.0), &mut zones, &mut board, &mut log);
    let end = dnd.on_pointer_up(at(30.0, 50.0), &mut zones, &mut board, &mut log);

    assert_eq!(end, ReleaseOutcome::DragEnd { dropped: true });
    assert_eq!(board.moved, vec![(LIST, 1, DropAction::InsertAt(3))]);

    // Empty space in the list appends.
    board.moved.clear();
    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(80.0, 150.0), &mut zones, &mut board, &mut log);
    dnd.on_pointer_up(at(80.0, 150.0), &mut zones, &mut board, &mut log);
    assert_eq!(board.moved, vec![(LIST, 1, DropAction::Append)]);
}

#[test]
fn scroll_offset_is_applied_to_hit_tests() {
    let mut board = Board::new();
    board.scroll = Vec2::new(0.0, 100.0);
    let mut log = Log::named();
    let mut zones = zones(None, None);
    let mut dnd = DragAndDrop::new(1, DragConfig::default().with_ghost(false));

    // Page-space hit testing must land in zone B regardless of scroll.
    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    dnd.on_pointer_move(at(250.0, 150.0), &mut zones, &mut board, &mut log);
    assert_eq!(dnd.hovered(), zones.zone_for(ZONE_B));
}

#[test]
fn a_click_never_touches_zones() {
    let mut board = Board::new();
    let mut log = Log::named();
    let mut zones = zones(None, None);
    let mut dnd = DragAndDrop::new(1, DragConfig::default());

    dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
    let end = dnd.on_pointer_up(at(12.0, 11.0), &mut zones, &mut board, &mut log);
    assert_eq!(end, ReleaseOutcome::Click);
    assert!(log.zone_events().is_empty());
}

proptest! {
    #[test]
    fn one_ghost_per_drag(
        drags in 1_usize..6,
        steps in prop::collection::vec((0.0_f64..350.0, 0.0_f64..200.0), 1..8),
    ) {
        let mut board = Board::new();
        let mut log = Log::named();
        let mut zones = zones(None, None);
        let mut dnd = DragAndDrop::new(1, DragConfig::default());

        for _ in 0..drags {
            dnd.on_pointer_down(PointerDown::at(at(10.0, 10.0)), &mut board, &mut log);
            // Step well past the tolerance so every drag starts.
            dnd.on_pointer_move(at(10.0, 90.0), &mut zones, &mut board, &mut log);
            prop_assert_eq!(board.ghost_count(), 1);
            for (x, y) in &steps {
                dnd.on_pointer_move(at(*x, *y), &mut zones, &mut board, &mut log);
                prop_assert_eq!(board.ghost_count(), 1);
            }
            let (x, y) = steps[steps.len() - 1];
            dnd.on_pointer_up(at(x, y), &mut zones, &mut board, &mut log);
            prop_assert_eq!(board.ghost_count(), 0);
            prop_assert_eq!(dnd.hovered(), None);
        }
        let created = log.events.iter().filter(|e| *e == "ghost-create").count();
        let destroyed = log.events.iter().filter(|e| *e == "ghost-destroy").count();
        prop_assert_eq!(created, drags);
        prop_assert_eq!(destroyed, drags);
    }
}
