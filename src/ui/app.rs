use crate::config::Config;
use crate::ui::layout::{body_rect, hit_test, RowTarget};
use crate::ui::mvi::Reducer;
use crate::ui::selection::{SelectionIntent, SelectionReducer, SelectionState};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: (u16, u16),
    /// Checklist state (MVI pattern).
    selection: SelectionState,
    /// Keyboard cursor: row 0 is the "select all" row, rows 1..=n the items.
    cursor: usize,
}

impl App {
    pub fn new(config: &Config, size: (u16, u16)) -> Self {
        Self {
            should_quit: false,
            size,
            selection: SelectionState::new(config.items.iter().map(|item| item.label.as_str())),
            cursor: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Interactive row count: the "select all" row plus one row per item.
    fn row_count(&self) -> usize {
        self.selection.items().len() + 1
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.request_quit();
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => self.activate_row(self.cursor),
            KeyCode::Char('a') => self.dispatch(SelectionIntent::ToggleAll),
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let (cols, rows) = self.size;
        let body = body_rect(Rect::new(0, 0, cols, rows));
        let Some(target) = hit_test(body, mouse.column, mouse.row, self.selection.items().len())
        else {
            return;
        };
        match target {
            RowTarget::All => {
                self.cursor = 0;
                self.dispatch(SelectionIntent::ToggleAll);
            }
            RowTarget::Item(index) => {
                self.cursor = index + 1;
                self.dispatch(SelectionIntent::ToggleItem { index });
            }
        }
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    fn move_cursor_up(&mut self) {
        self.cursor = if self.cursor == 0 {
            self.row_count() - 1
        } else {
            self.cursor - 1
        };
    }

    fn move_cursor_down(&mut self) {
        self.cursor = if self.cursor + 1 >= self.row_count() {
            0
        } else {
            self.cursor + 1
        };
    }

    /// Row 0 activates the aggregate control; any other row its item.
    fn activate_row(&mut self, row: usize) {
        if row == 0 {
            self.dispatch(SelectionIntent::ToggleAll);
        } else {
            self.dispatch(SelectionIntent::ToggleItem { index: row - 1 });
        }
    }

    fn dispatch(&mut self, intent: SelectionIntent) {
        tracing::debug!(?intent, "dispatching selection intent");
        dispatch_mvi!(self, selection, SelectionReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::selection::AggregateState;

    fn app() -> App {
        // Default config carries three items, all deselected.
        App::new(&Config::default(), (80, 24))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys_request_quit() {
        let mut app = app();
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut app = app();
        app.on_key(key(KeyCode::Up));
        assert_eq!(app.cursor(), 3);
        app.on_key(key(KeyCode::Down));
        assert_eq!(app.cursor(), 0);
        app.on_key(key(KeyCode::Char('j')));
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn space_on_first_row_toggles_everything() {
        let mut app = app();
        app.on_key(key(KeyCode::Char(' ')));
        assert_eq!(app.selection().aggregate(), AggregateState::All);
        assert!(app.selection().items().iter().all(|item| item.selected));
    }

    #[test]
    fn enter_on_item_row_toggles_that_item() {
        let mut app = app();
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        let flags: Vec<bool> = app
            .selection()
            .items()
            .iter()
            .map(|item| item.selected)
            .collect();
        assert_eq!(flags, vec![true, false, false]);
        assert_eq!(app.selection().aggregate(), AggregateState::Mixed);
    }

    #[test]
    fn a_toggles_aggregate_from_any_row() {
        let mut app = app();
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Char('a')));
        assert_eq!(app.selection().aggregate(), AggregateState::All);
    }

    // With an 80x24 frame the body starts below the 3-line header, so its
    // first inner line (the "select all" row) sits at screen row 4.
    #[test]
    fn click_on_select_all_row() {
        let mut app = app();
        app.on_mouse(click(10, 4));
        assert_eq!(app.selection().aggregate(), AggregateState::All);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn click_on_item_row_toggles_item_and_moves_cursor() {
        let mut app = app();
        app.on_mouse(click(2, 6));
        let flags: Vec<bool> = app
            .selection()
            .items()
            .iter()
            .map(|item| item.selected)
            .collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(app.cursor(), 2);
    }

    #[test]
    fn click_outside_rows_is_ignored() {
        let mut app = app();
        app.on_mouse(click(10, 20));
        assert_eq!(app.selection().aggregate(), AggregateState::None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut released = key(KeyCode::Char(' '));
        released.kind = KeyEventKind::Release;
        app.on_key(released);
        assert_eq!(app.selection().aggregate(), AggregateState::None);
    }
}
