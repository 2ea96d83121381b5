use crate::ui::mvi::Intent;

/// User interactions on the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionIntent {
    /// The "select all" row or its checkbox was activated.
    ToggleAll,
    /// The item row at `index` or its checkbox was activated.
    ///
    /// `index` must come from the live rendered sequence; anything out of
    /// range is a bug in the caller, not a recoverable condition.
    ToggleItem { index: usize },
}

impl Intent for SelectionIntent {}
