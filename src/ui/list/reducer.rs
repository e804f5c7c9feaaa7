//! Reducer for the hearted list.

use crate::ui::mvi::Reducer;

use super::intent::ListIntent;
use super::state::{ListState, MAX_PROGRESS};

/// Reducer for list state transitions.
///
/// Every transition is total: an unknown id, or a move past either end,
/// hands back the input state unchanged. Rows the intent does not target
/// keep their fields and relative order.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Delete { id } => {
                state.items.retain(|item| item.id != id);
                state
            }

            ListIntent::MoveUp { id } => {
                if let Some(index) = state.position(id).filter(|&index| index > 0) {
                    state.items.swap(index - 1, index);
                }
                state
            }

            ListIntent::MoveDown { id } => {
                let last = state.items.len().saturating_sub(1);
                if let Some(index) = state.position(id).filter(|&index| index < last) {
                    state.items.swap(index, index + 1);
                }
                state
            }

            ListIntent::SetProgress { id, progress } => {
                let progress = progress.min(MAX_PROGRESS);
                if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                    item.progress = progress;
                }
                state
            }

            ListIntent::FinishToggle { id } => {
                if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                    item.is_hearted = !item.is_hearted;
                    item.progress = 0;
                }
                state
            }
        }
    }
}
