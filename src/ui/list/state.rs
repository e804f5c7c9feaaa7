use std::collections::HashSet;

use thiserror::Error;

use crate::ui::mvi::UiState;

/// Identifier of a row. Unique within a [`ListState`] and never reused.
pub type ItemId = u32;

/// Number of animation steps, and the upper bound of [`Item::progress`].
pub const MAX_PROGRESS: u8 = 100;

/// Number of rows a fresh store is seeded with.
pub const DEFAULT_SEED_COUNT: ItemId = 20;

/// One row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub is_hearted: bool,
    /// Animation progress in `0..=100`. Zero while idle.
    pub progress: u8,
}

impl Item {
    /// A fresh, idle, unhearted row titled `"Item {id}"`.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            title: format!("Item {}", id),
            is_hearted: false,
            progress: 0,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.progress > 0
    }
}

/// Immutable snapshot of the whole list, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    pub items: Vec<Item>,
}

impl UiState for ListState {}

/// A broken structural invariant of a [`ListState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("item id {id} appears more than once")]
    DuplicateId { id: ItemId },

    #[error("item {id} has progress {progress}, expected 0..={max}", max = MAX_PROGRESS)]
    ProgressOutOfRange { id: ItemId, progress: u8 },
}

impl ListState {
    /// Seed `count` rows with sequential ids `0..count`.
    pub fn seeded(count: ItemId) -> Self {
        Self {
            items: (0..count).map(Item::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Verify that ids are pairwise distinct and progress stays in range.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(InvariantViolation::DuplicateId { id: item.id });
            }
            if item.progress > MAX_PROGRESS {
                return Err(InvariantViolation::ProgressOutOfRange {
                    id: item.id,
                    progress: item.progress,
                });
            }
        }
        Ok(())
    }
}
