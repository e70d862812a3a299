// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::bookmarks::models::{BookmarkRecord, BookmarkTargetType, BookmarkToggleRequest};
use crate::domain::shared::models::{TargetId, UserId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BookmarkSource: Send + Sync {
    /// Returns all bookmarks of `user_id` in the order the backend lists them.
    async fn fetch_user_bookmarks(&self, user_id: &UserId) -> Result<Vec<BookmarkRecord>>;

    /// Flips the bookmark relation. Returns the resulting state if the backend reports one.
    async fn toggle_bookmark(&self, request: &BookmarkToggleRequest) -> Result<Option<bool>>;

    async fn check_bookmark(
        &self,
        user_id: &UserId,
        target_type: BookmarkTargetType,
        target_id: TargetId,
    ) -> Result<bool>;

    /// Returns whether each of `target_ids` is bookmarked by `user_id`.
    async fn bookmark_status(
        &self,
        user_id: &UserId,
        target_type: BookmarkTargetType,
        target_ids: &[TargetId],
    ) -> Result<HashMap<TargetId, bool>>;
}
