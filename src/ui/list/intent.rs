use crate::ui::mvi::Intent;

use super::state::ItemId;

/// Intents that can be dispatched to the list reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    /// Remove the row with this id.
    Delete { id: ItemId },
    /// Swap the row with its predecessor.
    MoveUp { id: ItemId },
    /// Swap the row with its successor.
    MoveDown { id: ItemId },
    /// One animation step: overwrite only the target's progress.
    SetProgress { id: ItemId, progress: u8 },
    /// Terminal animation step: flip the heart and reset progress to 0.
    FinishToggle { id: ItemId },
}

impl Intent for ListIntent {}

impl ListIntent {
    /// The row this intent targets.
    pub fn id(&self) -> ItemId {
        match *self {
            ListIntent::Delete { id }
            | ListIntent::MoveUp { id }
            | ListIntent::MoveDown { id }
            | ListIntent::SetProgress { id, .. }
            | ListIntent::FinishToggle { id } => id,
        }
    }
}
