// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::bookmarks::models::BookmarkTarget;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// A user signed in or out.
    SessionChanged,

    /// The backend accepted a bookmark toggle. `is_favorite` is the resulting state if the
    /// backend reported one.
    BookmarkChanged {
        target: BookmarkTarget,
        is_favorite: Option<bool>,
    },

    /// A bookmark toggle failed and the local change was reverted.
    BookmarkToggleFailed { target: BookmarkTarget },

    /// The favorites of `user_id` could not be loaded.
    FavoritesLoadFailed { user_id: UserId },
}
