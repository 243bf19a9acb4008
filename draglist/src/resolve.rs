//! Pointer position → insertion slot.
//!
//! A slot is an index in `[0, item_count]`: `0` is before the first item and `item_count`
//! appends after the last one.

use alloc::vec::Vec;

use crate::{GeometryProvider, ItemGeometry, TargetMode, UniformRows, ViewportBounds};

/// Resolves the slot under `pointer_y` using the midpoints of the visible items.
///
/// `pointer_y` is in the same space as `viewport` (e.g. window coordinates); it is normalized
/// to scroll-content coordinates before being compared with `visible`.
///
/// - No items at all: `0`.
/// - No visible items: `total_count` (append).
/// - Above the first visible midpoint: `0`.
/// - Otherwise the first visible item whose midpoint lies below the pointer, or the slot after
///   the last visible item.
pub fn resolve_by_midpoint(
    pointer_y: f32,
    visible: &[ItemGeometry],
    viewport: ViewportBounds,
    scroll_offset: f32,
    total_count: usize,
) -> usize {
    if total_count == 0 {
        return 0;
    }
    let (Some(first), Some(last)) = (visible.first(), visible.last()) else {
        return total_count;
    };

    let y = viewport.to_local(pointer_y) + scroll_offset;
    if y < first.midpoint() {
        return 0;
    }

    visible
        .iter()
        .find(|item| item.midpoint() > y)
        .map_or(last.index.saturating_add(1), |item| item.index)
        .min(total_count)
}

/// Resolves the slot under `pointer_y` by dividing the absolute content position by a fixed
/// row height.
pub fn resolve_by_uniform_rows(
    pointer_y: f32,
    rows: UniformRows,
    viewport: ViewportBounds,
    scroll_offset: f32,
    total_count: usize,
) -> usize {
    if total_count == 0 {
        return 0;
    }

    let absolute_y = scroll_offset + viewport.to_local(pointer_y) - rows.header_height;
    if !absolute_y.is_finite() || absolute_y <= 0.0 {
        return 0;
    }
    if !rows.row_height.is_finite() || rows.row_height <= 0.0 {
        dwarn!(row_height = rows.row_height, "resolve_by_uniform_rows: degenerate row height");
        return 0;
    }

    // `absolute_y` is positive, so truncation is a floor.
    let mut index = (absolute_y / rows.row_height) as usize;
    if rows.round_to_nearest {
        let remainder = absolute_y - index as f32 * rows.row_height;
        if remainder > rows.row_height / 2.0 {
            index = index.saturating_add(1);
        }
    }
    index.min(total_count)
}

/// Resolves the slot under `pointer_y` against a live geometry provider.
///
/// `scratch` is a reusable buffer for the visible-item snapshot; it is cleared first.
pub fn resolve_target_index<G: GeometryProvider + ?Sized>(
    mode: TargetMode,
    pointer_y: f32,
    geometry: &G,
    scratch: &mut Vec<ItemGeometry>,
) -> usize {
    let viewport = geometry.viewport_bounds();
    let scroll_offset = geometry.scroll_offset();
    let total_count = geometry.item_count();
    match mode {
        TargetMode::Midpoint => {
            scratch.clear();
            geometry.visible_items(scratch);
            resolve_by_midpoint(pointer_y, scratch, viewport, scroll_offset, total_count)
        }
        TargetMode::UniformRows(rows) => {
            resolve_by_uniform_rows(pointer_y, rows, viewport, scroll_offset, total_count)
        }
    }
}
