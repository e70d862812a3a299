// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::BookmarkTarget;

/// Where a single item is in the optimistic toggle cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    OptimisticallyApplied,
}

/// How a toggle settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The backend accepted the toggle. `is_favorite` is the state it reported, if any.
    Committed { is_favorite: Option<bool> },
    /// The backend call failed and the local change was reverted.
    RolledBack,
    /// The list was detached or reloaded while the request was in flight. It was left as is.
    Discarded,
}

/// Reasons a toggle is refused before anything is changed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("Cannot toggle a bookmark without a signed-in user.")]
    NotSignedIn,
    #[error("Item {0} is not part of the list.")]
    ItemNotFound(BookmarkTarget),
    #[error("A toggle for {0} is already in flight.")]
    AlreadyPending(BookmarkTarget),
}
