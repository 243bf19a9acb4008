use crate::ItemId;

/// Failure to reorder a collection.
///
/// Callers treat this as a no-op: the collection is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("item {id} is not in the collection")]
    ItemNotFound { id: ItemId },
}

/// Reasons a drop is rejected.
///
/// A rejected drop never changes the collection, and the session is still reset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    /// The transferred text is not a base-10 integer.
    #[error("drop payload is not an item identifier")]
    InvalidPayload,
    /// The identifier parsed but matches no item.
    #[error("item {id} is not in the collection")]
    UnknownItem { id: ItemId },
    /// The `can_drop` predicate vetoed the move.
    #[error("drop of item {id} was rejected")]
    Rejected { id: ItemId },
}

impl From<ReorderError> for DropError {
    fn from(err: ReorderError) -> Self {
        match err {
            ReorderError::ItemNotFound { id } => Self::UnknownItem { id },
        }
    }
}
