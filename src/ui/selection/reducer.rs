//! Reducer for the tri-state checklist.

use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::{AggregateState, SelectionState};

/// Reducer keeping the item flags and the aggregate in sync.
///
/// `ToggleAll` drives the items from the aggregate's transition table;
/// `ToggleItem` flips one flag and rederives the aggregate from the full
/// sequence. Either way the returned state satisfies the derivation
/// invariant of [`AggregateState::derive`].
pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::ToggleAll => {
                let select = state.aggregate.toggled() == AggregateState::All;
                let mut items = state.items;
                for item in &mut items {
                    item.selected = select;
                }
                let aggregate = AggregateState::derive(&items);
                SelectionState { items, aggregate }
            }

            SelectionIntent::ToggleItem { index } => {
                let mut items = state.items;
                // Out of range panics: the index is derived from the live
                // sequence, so a miss here is a caller bug.
                items[index].selected = !items[index].selected;
                let aggregate = AggregateState::derive(&items);
                SelectionState { items, aggregate }
            }
        }
    }
}
