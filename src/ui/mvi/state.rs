//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value is self-contained (everything the view needs to render),
/// cloned rather than mutated in place, and comparable so that callers can
/// detect whether a dispatch actually changed anything.
pub trait UiState: Clone + PartialEq + Default {}
