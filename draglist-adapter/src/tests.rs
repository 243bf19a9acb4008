use crate::*;

use alloc::vec::Vec;
use draglist::{
    DragEvent, DragResponse, GeometryProvider, ListModel, SessionOptions, ViewportBounds,
};

const FRAME_16MS: u64 = 16_000_000;

fn tall_list(count: usize) -> ListModel {
    ListModel::uniform(count, 50.0).with_viewport(ViewportBounds::new(0.0, 800.0))
}

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn driver_integrates_velocity_over_frame_time() {
    let mut model = tall_list(100);
    let mut d = ScrollDriver::default();
    d.set_velocity(1200.0);

    assert_eq!(d.tick(0, &mut model), ScrollStep::Armed);
    let step = d.tick(FRAME_16MS, &mut model);
    let ScrollStep::Scrolled {
        requested,
        consumed,
    } = step
    else {
        panic!("unexpected step: {step:?}");
    };
    assert!(approx_eq(requested, 19.2, 1e-3), "requested={requested}");
    assert!(approx_eq(consumed, 19.2, 1e-3), "consumed={consumed}");
    assert!(approx_eq(model.scroll_offset(), 19.2, 1e-3));
    assert!(d.is_running());
}

#[test]
fn driver_follows_uneven_frame_spacing() {
    let mut model = tall_list(100);
    let mut d = ScrollDriver::default();
    d.set_velocity(1200.0);

    // A 120 Hz frame followed by two 60 Hz frames.
    for t in [0, 8_000_000, 24_000_000, 40_000_000] {
        d.tick(t, &mut model);
    }
    assert!(approx_eq(model.scroll_offset(), 48.0, 1e-2));
}

#[test]
fn driver_stops_when_scroll_saturates() {
    let mut model = tall_list(20).with_scroll_offset(200.0);
    assert_eq!(model.scroll_offset(), model.max_scroll_offset());

    let mut d = ScrollDriver::default();
    d.set_velocity(1200.0);
    d.tick(0, &mut model);
    let step = d.tick(FRAME_16MS, &mut model);
    assert!(matches!(step, ScrollStep::Saturated { consumed, .. } if consumed == 0.0));
    assert!(!d.is_running());
    assert_eq!(d.velocity(), 0.0);
    assert_eq!(d.tick(2 * FRAME_16MS, &mut model), ScrollStep::Idle);
}

#[test]
fn driver_stops_immediately_on_zero_velocity() {
    let mut model = tall_list(100);
    let mut d = ScrollDriver::default();
    d.set_velocity(-1200.0);
    d.tick(0, &mut model);

    d.set_velocity(0.0);
    assert!(!d.is_running());
    assert_eq!(d.tick(FRAME_16MS, &mut model), ScrollStep::Idle);
    assert_eq!(model.scroll_offset(), 0.0);

    d.set_velocity(f32::NAN);
    assert!(!d.is_running());
}

#[test]
fn driver_rearms_after_restart() {
    let mut model = tall_list(100);
    let mut d = ScrollDriver::default();
    d.set_velocity(1200.0);
    d.tick(0, &mut model);
    d.tick(FRAME_16MS, &mut model);
    d.cancel();

    // A long pause must not turn into one huge jump.
    d.set_velocity(1200.0);
    assert_eq!(d.tick(10 * FRAME_16MS, &mut model), ScrollStep::Armed);
    let step = d.tick(11 * FRAME_16MS, &mut model);
    assert!(approx_eq(step.consumed(), 19.2, 1e-3));
}

#[test]
fn driver_keeps_timing_when_velocity_changes_sign() {
    let mut model = tall_list(100).with_scroll_offset(500.0);
    let mut d = ScrollDriver::default();
    d.set_velocity(1200.0);
    d.tick(0, &mut model);
    d.set_velocity(-1200.0);
    let step = d.tick(FRAME_16MS, &mut model);
    assert!(approx_eq(step.consumed(), -19.2, 1e-3));
}

#[test]
fn driver_runs_against_synthetic_clock_until_saturated() {
    let mut model = tall_list(100).with_scroll_offset(100.0);
    let mut d = ScrollDriver::default();
    d.set_velocity(-1200.0);

    let mut clock = SyntheticClock::at_hz(60);
    let frames = d.run(&mut clock, &mut model, 100);
    assert!(frames <= 10, "frames={frames}");
    assert!(!d.is_running());
    assert_eq!(model.scroll_offset(), 0.0);
}

#[test]
fn driver_accepts_closure_clock() {
    let mut model = tall_list(100);
    let mut d = ScrollDriver::default();
    d.set_velocity(1200.0);

    let mut now = 0u64;
    let mut clock = || {
        let t = now;
        now += FRAME_16MS;
        t
    };
    let frames = d.run(&mut clock, &mut model, 11);
    assert_eq!(frames, 11);
    // Ten integrated frames after the arming one.
    assert!(approx_eq(model.scroll_offset(), 192.0, 1e-2));
}

#[test]
fn synthetic_clock_is_monotonic() {
    let mut clock = SyntheticClock::new(5, 10);
    let ticks: Vec<u64> = (0..4).map(|_| clock.next_frame_nanos()).collect();
    assert_eq!(ticks, [5, 15, 25, 35]);
    assert_eq!(SyntheticClock::at_hz(0).interval_nanos(), 1_000_000_000);
}

#[test]
fn frame_delta_is_zero_for_backwards_time() {
    assert_eq!(frame_delta_seconds(10, 5), 0.0);
    assert!(approx_eq(frame_delta_seconds(0, FRAME_16MS), 0.016, 1e-6));
}

#[test]
fn controller_autoscrolls_and_retargets_near_bottom_edge() {
    let mut c = DragController::new(SessionOptions::default(), tall_list(100));
    c.on_enter(790.0);
    assert!(c.needs_frame());
    assert_eq!(c.current_target_index(), Some(16));

    let mut clock = SyntheticClock::new(0, FRAME_16MS);
    for _ in 0..11 {
        c.tick(clock.next_frame_nanos());
    }
    assert!(approx_eq(c.geometry().scroll_offset(), 192.0, 1e-2));
    // Content y is now ~982: past the midpoint of row 19.
    assert_eq!(c.current_target_index(), Some(20));
    assert!(c.session().target_changed());

    c.on_exit();
    assert!(!c.needs_frame());
    assert!(!c.is_autoscrolling());
    let before = c.geometry().scroll_offset();
    assert_eq!(c.tick(clock.next_frame_nanos()), ScrollStep::Idle);
    assert_eq!(c.geometry().scroll_offset(), before);
}

#[test]
fn controller_move_out_of_band_stops_driver() {
    let mut c = DragController::new(SessionOptions::default(), tall_list(100));
    c.on_enter(790.0);
    c.tick(0);
    c.tick(FRAME_16MS);
    assert!(c.is_autoscrolling());

    assert!(c.on_move(400.0));
    assert!(!c.is_autoscrolling());
    let offset = c.geometry().scroll_offset();
    assert_eq!(c.tick(2 * FRAME_16MS), ScrollStep::Idle);
    assert_eq!(c.geometry().scroll_offset(), offset);
}

#[test]
fn controller_saturation_halts_session_velocity_until_next_move() {
    let model = tall_list(20).with_scroll_offset(200.0);
    let mut c = DragController::new(SessionOptions::default(), model);
    c.on_enter(790.0);
    assert_eq!(c.session().scroll_velocity(), 1200.0);

    c.tick(0);
    assert!(matches!(c.tick(FRAME_16MS), ScrollStep::Saturated { .. }));
    assert_eq!(c.session().scroll_velocity(), 0.0);
    assert!(!c.needs_frame());
    assert!(c.session().is_active());

    c.on_move(790.0);
    assert!(c.needs_frame());
}

#[test]
fn controller_run_scrolls_to_top_and_stops() {
    let model = tall_list(100).with_scroll_offset(300.0);
    let mut c = DragController::new(SessionOptions::default(), model);
    c.on_enter(10.0);

    let frames = c.run(&mut SyntheticClock::at_hz(120), 1_000);
    assert!(frames < 1_000);
    assert_eq!(c.geometry().scroll_offset(), 0.0);
    assert_eq!(c.current_target_index(), Some(0));
    assert!(!c.needs_frame());
}

#[test]
fn controller_drop_commits_and_tears_down() {
    let mut items: Vec<i64> = (1..=30).collect();
    let mut c = DragController::new(SessionOptions::default(), tall_list(30));
    c.begin(1);
    c.on_enter(790.0);
    assert!(c.is_autoscrolling());

    // Content y 60 -> slot 1 -> item 1 stays put.
    assert!(c.on_drop(60.0, "1", &mut items));
    assert_eq!(items[0], 1);
    assert!(!c.is_autoscrolling());
    assert_eq!(c.currently_dragged_item_id(), None);

    c.on_enter(10.0);
    let reorder = c.try_drop(190.0, "1", &mut items).unwrap();
    // Midpoint 225 is the first one below content y 190 -> slot 4 -> index 3.
    assert_eq!(reorder.to, 3);
    assert_eq!(&items[..5], [2, 3, 4, 1, 5]);
}

#[test]
fn controller_drop_moves_item_sizes_with_the_item() {
    let mut items: Vec<i64> = (1..=4).collect();
    let model = ListModel::new([10.0f32, 20.0, 30.0, 40.0])
        .with_viewport(ViewportBounds::new(0.0, 800.0));
    let mut c = DragController::new(SessionOptions::default(), model);

    c.on_enter(100.0);
    // Past the last midpoint (80): slot 4, item 2 goes to the end.
    let reorder = c.try_drop(95.0, "2", &mut items).unwrap();
    assert_eq!(reorder.to, 3);
    assert_eq!(items, [1, 3, 4, 2]);
    assert_eq!(c.geometry().sizes(), [10.0f32, 30.0, 40.0, 20.0]);

    // The same move through the event dispatcher.
    c.handle(DragEvent::Enter { pointer_y: 100.0 }, &mut items);
    let response = c.handle(
        DragEvent::Drop {
            pointer_y: 0.0,
            payload: "2",
        },
        &mut items,
    );
    assert!(matches!(response, DragResponse::Dropped(r) if r.to == 0));
    assert_eq!(items, [2, 1, 3, 4]);
    assert_eq!(c.geometry().sizes(), [20.0f32, 10.0, 30.0, 40.0]);

    // A no-op drop leaves the layout alone.
    c.on_enter(0.0);
    assert!(c.on_drop(0.0, "2", &mut items));
    assert_eq!(c.geometry().sizes(), [20.0f32, 10.0, 30.0, 40.0]);
}

#[test]
fn controller_handle_rejects_bad_payload_and_cancels() {
    let mut items: Vec<i64> = (1..=5).collect();
    let mut c = DragController::new(SessionOptions::default(), tall_list(5));
    assert_eq!(
        c.handle(DragEvent::Enter { pointer_y: 10.0 }, &mut items),
        DragResponse::Updated
    );
    assert!(c.is_autoscrolling());

    let response = c.handle(
        DragEvent::Drop {
            pointer_y: 10.0,
            payload: "abc",
        },
        &mut items,
    );
    assert!(!response.is_accepted());
    assert_eq!(items, [1, 2, 3, 4, 5]);
    assert!(!c.is_autoscrolling());
    assert!(!c.session().is_active());
}
