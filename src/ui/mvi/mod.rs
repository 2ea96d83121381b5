//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for unidirectional data flow in the UI layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Everything runs on the single UI event loop thread: one intent is
//! reduced to completion and the resulting state is rendered before the
//! next event is read.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
