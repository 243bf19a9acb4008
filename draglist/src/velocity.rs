use crate::{AutoScrollOptions, ViewportBounds};

/// Computes the edge auto-scroll velocity for a pointer position.
///
/// Sign convention: negative scrolls toward the start of the content (the scroll offset
/// decreases and earlier items come into view), positive toward the end.
///
/// This is a step function: inside the top band the result is `-scroll_speed`, inside the
/// bottom band `+scroll_speed`, and `0` elsewhere. The top band wins when both overlap (a
/// viewport shorter than the two bands combined).
pub fn compute_velocity(
    pointer_y: f32,
    viewport: ViewportBounds,
    options: &AutoScrollOptions,
) -> f32 {
    if !pointer_y.is_finite() {
        return 0.0;
    }
    if viewport.to_local(pointer_y) < options.start_band() {
        -options.scroll_speed
    } else if viewport.distance_to_end(pointer_y) < options.end_band() {
        options.scroll_speed
    } else {
        0.0
    }
}
