//! View state types for the TUI that live outside the gallery model.

/// Cursor over the project card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub selected: usize,
    pub columns: usize,
}

impl GridCursor {
    pub fn new(columns: usize) -> Self {
        Self {
            selected: 0,
            columns: columns.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Keep the cursor inside a list of `len` cards.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn move_left(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self, len: usize) {
        if self.selected < len.saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    pub fn move_down(&mut self, len: usize) {
        let new_pos = self.selected + self.columns;
        if new_pos < len {
            self.selected = new_pos;
        }
    }

    pub fn row(&self) -> usize {
        self.selected / self.columns
    }
}

/// Scroll and gallery position inside the open project modal. Reset every
/// time a project is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub scroll_offset: usize,
    pub selected_image: usize,
}

impl ModalState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_next_image(&mut self, len: usize) {
        if self.selected_image < len.saturating_sub(1) {
            self.selected_image += 1;
        }
    }

    pub fn select_previous_image(&mut self) {
        self.selected_image = self.selected_image.saturating_sub(1);
    }
}
