//! Structures used to pass the current state of user input.

/// The current state of the pointer over the button.
///
/// `Snapshot` is meant to be passed from the host event loop to the store
/// on every tick, or whenever the press state changes. It carries raw data;
/// duplicates and bouncing are handled by the store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub pressed: bool,
}
