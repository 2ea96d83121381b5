//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is one discrete interaction event: a key press, a mouse
/// click, a loop tick. Intents carry only the data the reducer needs to
/// compute the next state.
pub trait Intent {}
