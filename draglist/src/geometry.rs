use alloc::vec::Vec;

use crate::{ItemGeometry, Reorder, ViewportBounds};

/// Read access to the layout of a scrollable list.
///
/// Geometry is pulled on demand and assumed consistent for the duration of one call into the
/// session. Item offsets are in scroll-content coordinates.
pub trait GeometryProvider {
    /// Total number of items in the list (not just the visible ones).
    fn item_count(&self) -> usize;

    /// Appends the geometry of the currently laid-out items to `out`, in ascending index order.
    ///
    /// Virtualized lists report only a window of items; plain lists may report all of them.
    fn visible_items(&self, out: &mut Vec<ItemGeometry>);

    fn viewport_bounds(&self) -> ViewportBounds;

    fn scroll_offset(&self) -> f32;
}

/// A list that can be scrolled programmatically.
pub trait Scrollable: GeometryProvider {
    /// Scrolls by `delta` and returns the amount actually consumed.
    ///
    /// The consumed amount is smaller than requested (down to zero) at the ends of the range.
    fn scroll_by(&mut self, delta: f32) -> f32;

    /// Called after a drop moved an item, so per-item layout can follow the new order.
    ///
    /// Lists whose layout is derived from the collection on the next pass can ignore it.
    fn apply_reorder(&mut self, reorder: &Reorder) {
        let _ = reorder;
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn visible_items(&self, out: &mut Vec<ItemGeometry>) {
        (**self).visible_items(out)
    }

    fn viewport_bounds(&self) -> ViewportBounds {
        (**self).viewport_bounds()
    }

    fn scroll_offset(&self) -> f32 {
        (**self).scroll_offset()
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &mut G {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn visible_items(&self, out: &mut Vec<ItemGeometry>) {
        (**self).visible_items(out)
    }

    fn viewport_bounds(&self) -> ViewportBounds {
        (**self).viewport_bounds()
    }

    fn scroll_offset(&self) -> f32 {
        (**self).scroll_offset()
    }
}

impl<S: Scrollable + ?Sized> Scrollable for &mut S {
    fn scroll_by(&mut self, delta: f32) -> f32 {
        (**self).scroll_by(delta)
    }

    fn apply_reorder(&mut self, reorder: &Reorder) {
        (**self).apply_reorder(reorder)
    }
}

/// An in-memory, variable-height list layout.
///
/// This is what a headless adapter (or a test) uses in place of a real UI list: it keeps item
/// sizes, an optional header, the viewport placement and a clamped scroll offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListModel {
    sizes: Vec<f32>,
    /// `starts[i]` is the offset of item `i` relative to the first row.
    starts: Vec<f32>,
    header_height: f32,
    footer_height: f32,
    viewport: ViewportBounds,
    scroll_offset: f32,
}

impl ListModel {
    /// Creates a model from per-item sizes. Non-finite or negative sizes are treated as zero.
    pub fn new(sizes: impl Into<Vec<f32>>) -> Self {
        let mut model = Self {
            sizes: sizes.into(),
            ..Self::default()
        };
        model.rebuild_starts();
        model
    }

    pub fn uniform(count: usize, row_height: f32) -> Self {
        Self::new(alloc::vec![row_height; count])
    }

    pub fn with_header_height(mut self, header_height: f32) -> Self {
        self.header_height = sanitize_size(header_height);
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        self
    }

    pub fn with_footer_height(mut self, footer_height: f32) -> Self {
        self.footer_height = sanitize_size(footer_height);
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportBounds) -> Self {
        self.viewport = viewport;
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f32) -> Self {
        self.set_scroll_offset(scroll_offset);
        self
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn set_viewport(&mut self, viewport: ViewportBounds) {
        self.viewport = viewport;
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    pub fn set_item_size(&mut self, index: usize, size: f32) {
        if let Some(slot) = self.sizes.get_mut(index) {
            *slot = size;
            self.rebuild_starts();
        }
    }

    /// Keeps sizes in sync with a committed reorder of the underlying collection.
    pub fn apply_reorder(&mut self, reorder: &Reorder) {
        if reorder.is_noop() || reorder.from >= self.sizes.len() {
            return;
        }
        let size = self.sizes.remove(reorder.from);
        let to = reorder.to.min(self.sizes.len());
        self.sizes.insert(to, size);
        self.rebuild_starts();
    }

    pub fn total_size(&self) -> f32 {
        let rows = match (self.starts.last(), self.sizes.last()) {
            (Some(start), Some(size)) => start + sanitize_size(*size),
            _ => 0.0,
        };
        self.header_height + rows + self.footer_height
    }

    pub fn max_scroll_offset(&self) -> f32 {
        (self.total_size() - self.viewport.height()).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f32) -> f32 {
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = self.clamp_scroll_offset(offset);
    }

    /// Geometry of a single item, whether visible or not.
    pub fn item(&self, index: usize) -> Option<ItemGeometry> {
        let start = *self.starts.get(index)?;
        let size = sanitize_size(*self.sizes.get(index)?);
        Some(ItemGeometry::new(index, self.header_height + start, size))
    }

    fn rebuild_starts(&mut self) {
        self.starts.clear();
        self.starts.reserve(self.sizes.len());
        let mut acc = 0.0f32;
        for &size in &self.sizes {
            self.starts.push(acc);
            acc += sanitize_size(size);
        }
        // Shrinking content must not leave the offset past the end of the range.
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }
}

impl GeometryProvider for ListModel {
    fn item_count(&self) -> usize {
        self.sizes.len()
    }

    fn visible_items(&self, out: &mut Vec<ItemGeometry>) {
        let height = self.viewport.height();
        if self.sizes.is_empty() || height <= 0.0 {
            return;
        }

        let top = self.scroll_offset - self.header_height;
        let bottom = top + height;

        // First item whose end is past the top edge.
        let first = self
            .starts
            .partition_point(|&start| start <= top)
            .saturating_sub(1);
        for index in first..self.sizes.len() {
            let start = self.starts[index];
            if start >= bottom {
                break;
            }
            let size = sanitize_size(self.sizes[index]);
            if start + size <= top {
                continue;
            }
            out.push(ItemGeometry::new(index, self.header_height + start, size));
        }
    }

    fn viewport_bounds(&self) -> ViewportBounds {
        self.viewport
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}

impl Scrollable for ListModel {
    fn scroll_by(&mut self, delta: f32) -> f32 {
        if !delta.is_finite() {
            return 0.0;
        }
        let before = self.scroll_offset;
        self.set_scroll_offset(before + delta);
        self.scroll_offset - before
    }

    fn apply_reorder(&mut self, reorder: &Reorder) {
        ListModel::apply_reorder(self, reorder);
    }
}

fn sanitize_size(size: f32) -> f32 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        0.0
    }
}
