// Host-side tests for the frame scheduler and the resize debouncer.

#![allow(dead_code)]
mod common;

use common::core::config::FieldConfig;
use common::core::connections::ConnectionRenderer;
use common::core::debounce::Debouncer;
use common::core::field::PointField;
use common::core::pointer::PointerState;
use common::core::scheduler::*;
use common::core::surface::DrawCommand;

struct Rig {
    field: PointField,
    renderer: ConnectionRenderer,
    surface: Vec<DrawCommand>,
    pointer: PointerState,
}

impl Rig {
    fn new() -> Self {
        let cfg = FieldConfig::desktop();
        let mut field = PointField::new(cfg.clone(), 11);
        field.initialize(cfg.point_count, 800.0, 600.0);
        Self {
            field,
            renderer: ConnectionRenderer::new(cfg),
            surface: Vec::new(),
            pointer: PointerState::new(400.0, 300.0),
        }
    }

    fn tick(&mut self, s: &mut FrameScheduler<i32>) -> bool {
        s.tick(&mut self.field, &self.renderer, &mut self.surface, &self.pointer)
    }
}

#[test]
fn new_scheduler_is_paused_until_started() {
    let mut rig = Rig::new();
    let mut s = FrameScheduler::<i32>::new(false);
    assert_eq!(s.state(), SchedulerState::Paused);
    assert!(!s.wants_frame());
    assert!(!rig.tick(&mut s));
    assert_eq!(s.time(), 0);
    assert!(rig.surface.is_empty());
}

#[test]
fn running_ticks_advance_time_and_draw() {
    let mut rig = Rig::new();
    let mut s = FrameScheduler::<i32>::new(false);
    assert_eq!(s.start(), Startup::Animate);
    assert!(s.is_running());
    for expected in 1..=5u64 {
        assert!(rig.tick(&mut s));
        assert_eq!(s.time(), expected);
    }
    assert!(matches!(rig.surface.first(), Some(DrawCommand::FillRect { .. })));
}

#[test]
fn armed_request_blocks_a_second_one() {
    let mut s = FrameScheduler::<i32>::new(false);
    s.start();
    assert!(s.wants_frame());
    s.arm(1);
    assert!(!s.wants_frame());
    s.frame_fired();
    assert!(s.wants_frame());
}

#[test]
fn hiding_cancels_the_pending_request_and_freezes_state() {
    let mut rig = Rig::new();
    let mut s = FrameScheduler::<i32>::new(false);
    s.start();
    rig.tick(&mut s);
    s.arm(7);

    assert_eq!(s.set_visible(false), Visibility::Cancel(Some(7)));
    assert_eq!(s.state(), SchedulerState::Paused);
    assert!(!s.wants_frame());

    let frozen = rig.field.points().to_vec();
    let drawn = rig.surface.len();
    for _ in 0..10 {
        assert!(!rig.tick(&mut s));
    }
    assert_eq!(rig.field.points(), frozen.as_slice());
    assert_eq!(rig.surface.len(), drawn);
    assert_eq!(s.time(), 1);
}

#[test]
fn showing_resumes_from_the_same_time() {
    let mut rig = Rig::new();
    let mut s = FrameScheduler::<i32>::new(false);
    s.start();
    for _ in 0..3 {
        rig.tick(&mut s);
    }
    assert_eq!(s.set_visible(false), Visibility::Cancel(None));
    assert_eq!(s.set_visible(true), Visibility::Resume);
    assert!(s.wants_frame());
    assert!(rig.tick(&mut s));
    assert_eq!(s.time(), 4);
}

#[test]
fn repeated_visibility_events_are_idempotent() {
    let mut s = FrameScheduler::<i32>::new(false);
    s.start();
    assert_eq!(s.set_visible(true), Visibility::Unchanged);
    assert_eq!(s.set_visible(false), Visibility::Cancel(None));
    assert_eq!(s.set_visible(false), Visibility::Unchanged);
    assert_eq!(s.set_visible(true), Visibility::Resume);
    assert_eq!(s.set_visible(true), Visibility::Unchanged);
}

#[test]
fn visibility_before_start_does_not_run() {
    let mut s = FrameScheduler::<i32>::new(false);
    assert_eq!(s.set_visible(true), Visibility::Unchanged);
    assert!(!s.is_running());
}

#[test]
fn reduced_motion_renders_once_and_never_runs() {
    let mut rig = Rig::new();
    let mut s = FrameScheduler::<i32>::new(true);
    assert_eq!(s.start(), Startup::StaticFrame);
    assert!(s.is_static());
    assert!(!s.wants_frame());

    s.render_static(&mut rig.field, &rig.renderer, &mut rig.surface, &rig.pointer);
    assert!(!rig.surface.is_empty());
    assert_eq!(s.time(), 0);

    assert_eq!(s.set_visible(false), Visibility::Unchanged);
    assert_eq!(s.set_visible(true), Visibility::Unchanged);
    assert!(!rig.tick(&mut s));
}

#[test]
fn reinitializing_the_field_keeps_the_clock() {
    let mut rig = Rig::new();
    let mut s = FrameScheduler::<i32>::new(false);
    s.start();
    for _ in 0..5 {
        rig.tick(&mut s);
    }
    rig.field.initialize(12, 400.0, 300.0);
    assert!(s.is_running());
    assert!(rig.tick(&mut s));
    assert_eq!(s.time(), 6);
    assert_eq!(rig.field.len(), 12);
}

#[test]
fn debouncer_keeps_only_the_latest_timer() {
    let mut d = Debouncer::new(250);
    assert!(!d.is_pending());
    assert_eq!(d.replace(1), None);
    let mut cancelled = Vec::new();
    for id in 2..=5 {
        if let Some(prev) = d.replace(id) {
            cancelled.push(prev);
        }
    }
    assert_eq!(cancelled, vec![1, 2, 3, 4]);
    assert!(d.is_pending());
    assert_eq!(d.fire(), Some(5));
    assert!(!d.is_pending());
    assert_eq!(d.fire(), None);
}

#[test]
fn narrowing_past_the_breakpoint_switches_to_the_constrained_preset() {
    let mut rig = Rig::new();
    let mut s = FrameScheduler::<i32>::new(false);
    s.start();
    rig.tick(&mut s);
    assert_eq!(rig.field.len(), 18);

    let narrow = FieldConfig::for_device(true);
    assert!(rig.field.reconfigure(narrow.clone()));
    rig.renderer.set_config(narrow.clone());
    rig.field.initialize(rig.field.config.point_count, 500.0, 600.0);
    assert_eq!(rig.field.len(), 12);
    assert!(!rig.field.reconfigure(narrow.clone()));

    rig.surface.clear();
    assert!(rig.tick(&mut s));
    assert_eq!(s.time(), 2);
    let lines = rig
        .surface
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines, narrow.pointer_links);
}
