use draglist::{GeometryProvider, ListModel, SessionOptions, ViewportBounds};
use draglist_adapter::{DragController, FrameClock, SyntheticClock};

fn main() {
    // Example: hold a dragged row near the bottom edge and let the list auto-scroll.
    //
    // An adapter would:
    // - forward gesture callbacks (enter/move/exit/end/drop) to the controller
    // - call tick(frame_time_nanos) from its frame callback while needs_frame() is true
    // - render using the controller's target index and the list's scroll offset
    let mut items: Vec<i64> = (1..=200).collect();
    let model = ListModel::uniform(items.len(), 48.0)
        .with_header_height(56.0)
        .with_viewport(ViewportBounds::from_top_and_height(64.0, 720.0));

    let options = SessionOptions::default().with_on_target_change(Some(
        |t: draglist::TargetTransition| {
            // A real adapter would trigger haptics here.
            println!("hover {:?} -> {:?}", t.previous, t.current);
        },
    ));
    let mut c = DragController::new(options, model);

    c.begin(1);
    c.on_enter(770.0);

    let mut clock = SyntheticClock::at_hz(90);
    let mut frames = 0;
    while c.needs_frame() && frames < 45 {
        let step = c.tick(clock.next_frame_nanos());
        if frames % 15 == 0 {
            println!(
                "frame={frames} step={step:?} offset={:.1}",
                c.geometry().scroll_offset()
            );
        }
        frames += 1;
    }

    let reorder = c.try_drop(770.0, "1", &mut items);
    println!("drop={reorder:?} head={:?}", &items[..5]);
}
