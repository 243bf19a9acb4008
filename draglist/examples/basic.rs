use draglist::{DragSession, ListModel, SessionOptions, ViewportBounds};

fn main() {
    // Example: a five-row list, drag "C" above "A".
    let mut items: Vec<i64> = vec![1, 2, 3, 4, 5];
    let model =
        ListModel::uniform(items.len(), 48.0).with_viewport(ViewportBounds::new(0.0, 600.0));

    let mut session = DragSession::new(SessionOptions::default());
    session.begin(3);
    session.on_enter(130.0, &model);
    println!("entered: {:?}", session.snapshot());

    session.on_move(10.0, &model);
    println!(
        "hovering slot={:?} velocity={}",
        session.current_target_index(),
        session.scroll_velocity()
    );

    let accepted = session.on_drop(10.0, "3", &mut items, &model);
    println!("accepted={accepted} items={items:?}");
}
