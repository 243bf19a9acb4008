use alloc::vec::Vec;

use crate::{ItemId, Keyed, Reorder, ReorderError};

/// Resolves where an item currently at `from` ends up when dropped into slot `raw_target`.
///
/// `raw_target` is a slot in the pre-move collection (`0..=len`). Removing the item first
/// shifts every later slot down by one, hence the adjustment for targets past `from`.
pub fn insertion_index(from: usize, raw_target: usize, len: usize) -> usize {
    let raw_target = raw_target.min(len);
    if raw_target > from {
        raw_target - 1
    } else {
        raw_target
    }
}

/// Plans a move of `item_id` into slot `raw_target` without touching the collection.
pub fn plan_reorder<T: Keyed>(
    items: &[T],
    item_id: ItemId,
    raw_target: usize,
) -> Result<Reorder, ReorderError> {
    let from = items
        .iter()
        .position(|item| item.id() == item_id)
        .ok_or(ReorderError::ItemNotFound { id: item_id })?;
    let to = insertion_index(from, raw_target, items.len());
    Ok(Reorder {
        item_id,
        from,
        to,
    })
}

/// Moves `item_id` into slot `raw_target`, in place.
///
/// Landing on the item's own position is a no-op (the returned [`Reorder`] has
/// `from == to`). The relative order of every other item is preserved.
pub fn reorder<T: Keyed>(
    items: &mut Vec<T>,
    item_id: ItemId,
    raw_target: usize,
) -> Result<Reorder, ReorderError> {
    let plan = plan_reorder(items, item_id, raw_target)?;
    apply_reorder(items, &plan);
    Ok(plan)
}

/// Like [`reorder`], but leaves `items` untouched and returns the new ordering.
pub fn reordered<T: Keyed + Clone>(
    items: &[T],
    item_id: ItemId,
    raw_target: usize,
) -> Result<(Vec<T>, Reorder), ReorderError> {
    let plan = plan_reorder(items, item_id, raw_target)?;
    let mut out = items.to_vec();
    apply_reorder(&mut out, &plan);
    Ok((out, plan))
}

pub(crate) fn apply_reorder<T>(items: &mut Vec<T>, plan: &Reorder) {
    if plan.is_noop() || plan.from >= items.len() {
        return;
    }
    let item = items.remove(plan.from);
    items.insert(plan.to.min(items.len()), item);
}
