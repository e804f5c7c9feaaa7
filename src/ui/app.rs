use std::sync::Arc;

use crate::store::ListStore;
use crate::ui::list::{ItemId, ListState};

/// Screen state for the list view.
///
/// Holds the latest state received from the store and the selected row.
/// Selection is tracked by id so it follows the row when it moves.
pub struct App {
    should_quit: bool,
    store: ListStore,
    state: Arc<ListState>,
    selected: Option<ItemId>,
}

impl App {
    pub fn new(store: ListStore) -> Self {
        let state = store.snapshot();
        let selected = state.items.first().map(|item| item.id);
        Self {
            should_quit: false,
            store,
            state,
            selected,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.state.position(id))
    }

    /// Adopt a state published by the store.
    ///
    /// If the selected row disappeared, selection moves to the row now at
    /// its old position (or the last row).
    pub fn on_state(&mut self, state: Arc<ListState>) {
        let previous_index = self.selected_index();
        self.state = state;
        if self.selected_index().is_some() {
            return;
        }
        self.selected = previous_index
            .map(|index| index.min(self.state.len().saturating_sub(1)))
            .and_then(|index| self.state.items.get(index))
            .or_else(|| self.state.items.first())
            .map(|item| item.id);
    }

    /// Move the selection by `delta` rows, clamped to the list bounds.
    pub fn move_selection(&mut self, delta: isize) {
        if self.state.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.state.len() - 1;
        let index = match self.selected_index() {
            Some(index) => index.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.selected = Some(self.state.items[index].id);
    }

    pub fn toggle_selected(&self) {
        if let Some(id) = self.selected {
            self.store.toggle_heart(id);
        }
    }

    pub fn delete_selected(&self) {
        if let Some(id) = self.selected {
            self.store.delete_item(id);
        }
    }

    pub fn move_selected_up(&self) {
        if let Some(id) = self.selected {
            self.store.move_item_up(id);
        }
    }

    pub fn move_selected_down(&self) {
        if let Some(id) = self.selected {
            self.store.move_item_down(id);
        }
    }
}
