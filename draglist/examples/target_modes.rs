use draglist::{
    GeometryProvider, ListModel, UniformRows, ViewportBounds, resolve_by_midpoint,
    resolve_by_uniform_rows,
};

fn main() {
    // Example: the two slot resolution modes side by side.
    //
    // Midpoint mode only needs the rows that are laid out; uniform-row mode only needs the
    // row height. They agree inside the list but may differ near the edges.
    let model = ListModel::uniform(1_000, 40.0)
        .with_header_height(24.0)
        .with_viewport(ViewportBounds::from_top_and_height(80.0, 400.0))
        .with_scroll_offset(2_000.0);

    let mut visible = Vec::new();
    model.visible_items(&mut visible);
    let rows = UniformRows::new(40.0)
        .with_header_height(24.0)
        .with_round_to_nearest(true);

    for pointer_y in [80.0f32, 120.0, 280.0, 470.0] {
        let by_midpoint = resolve_by_midpoint(
            pointer_y,
            &visible,
            model.viewport_bounds(),
            model.scroll_offset(),
            model.item_count(),
        );
        let by_rows = resolve_by_uniform_rows(
            pointer_y,
            rows,
            model.viewport_bounds(),
            model.scroll_offset(),
            model.item_count(),
        );
        println!("y={pointer_y} midpoint={by_midpoint} uniform={by_rows}");
    }
}
