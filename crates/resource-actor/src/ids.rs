//! # Id Assignment
//!
//! The store is the sole id authority: ids are derived from the collection as it was loaded
//! for the create request.

use crate::entity::ActorEntity;
use std::str::FromStr;

/// How the actor derives the id of a newly created entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// `id = len + 1`.
    ///
    /// Deleting a record and then creating another can hand out an id that is still in
    /// use. The actor refuses such a create with `IdConflict` rather than duplicating it.
    #[default]
    Sequential,
    /// `id = max(existing ids) + 1`. Never collides, but ids of deleted tail records are reused.
    MaxPlusOne,
}

impl IdPolicy {
    /// Computes the next id for `items`, or `None` once the `u32` id space is used up.
    pub fn next_id<T: ActorEntity>(&self, items: &[T]) -> Option<T::Id> {
        let last = match self {
            IdPolicy::Sequential => u32::try_from(items.len()).ok()?,
            IdPolicy::MaxPlusOne => items
                .iter()
                .map(|item| Into::<u32>::into(item.id()))
                .max()
                .unwrap_or(0),
        };
        last.checked_add(1).map(T::Id::from)
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "length" => Ok(IdPolicy::Sequential),
            "max-plus-one" | "max" => Ok(IdPolicy::MaxPlusOne),
            other => Err(format!("unknown id policy: {other}")),
        }
    }
}
