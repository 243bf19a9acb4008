/// Stable identity of an item in an ordered collection.
pub type ItemId = i64;

/// Anything that can be reordered must expose a stable identity.
///
/// Identifiers are expected to be unique within a collection for its whole lifetime.
pub trait Keyed {
    fn id(&self) -> ItemId;
}

impl Keyed for ItemId {
    fn id(&self) -> ItemId {
        *self
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn id(&self) -> ItemId {
        (**self).id()
    }
}

/// Geometry of one laid-out item along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    pub index: usize,
    /// Leading edge in scroll-content coordinates.
    pub offset: f32,
    pub size: f32,
}

impl ItemGeometry {
    pub fn new(index: usize, offset: f32, size: f32) -> Self {
        Self {
            index,
            offset,
            size,
        }
    }

    pub fn end(&self) -> f32 {
        self.offset + self.size
    }

    pub fn midpoint(&self) -> f32 {
        (self.offset + self.end()) / 2.0
    }
}

/// Boundaries of the visible scroll window, in the pointer's coordinate space.
///
/// For window-relative pointer events, `start` is the container's top edge in the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportBounds {
    pub start: f32,
    pub end: f32,
}

impl ViewportBounds {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Builds bounds from a window-relative top offset and a height.
    pub fn from_top_and_height(top_offset: f32, height: f32) -> Self {
        Self {
            start: top_offset,
            end: top_offset + height.max(0.0),
        }
    }

    pub fn height(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }

    /// Converts a pointer coordinate into a viewport-local one (0 at the top edge).
    pub fn to_local(&self, pointer_y: f32) -> f32 {
        pointer_y - self.start
    }

    pub fn distance_to_end(&self, pointer_y: f32) -> f32 {
        self.end - pointer_y
    }
}

/// A completed (or no-op) move of one item inside an ordered collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reorder {
    pub item_id: ItemId,
    /// Index in the pre-move collection.
    pub from: usize,
    /// Index in the post-move collection.
    pub to: usize,
}

impl Reorder {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// A change of the hovered insertion slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetTransition {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}
