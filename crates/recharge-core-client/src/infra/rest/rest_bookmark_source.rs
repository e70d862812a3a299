// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::domain::bookmarks::models::{BookmarkRecord, BookmarkTargetType, BookmarkToggleRequest};
use crate::domain::bookmarks::services::BookmarkSource;
use crate::domain::shared::models::{TargetId, UserId};

use super::RestClient;

pub struct RestBookmarkSource {
    client: Arc<RestClient>,
}

impl RestBookmarkSource {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookmarkStatusRequest<'a> {
    user_id: &'a UserId,
    target_type: BookmarkTargetType,
    target_ids: &'a [TargetId],
}

#[async_trait]
impl BookmarkSource for RestBookmarkSource {
    async fn fetch_user_bookmarks(&self, user_id: &UserId) -> Result<Vec<BookmarkRecord>> {
        Ok(self
            .client
            .get(&["bookmark", "user", user_id.as_str()], &[])
            .await?)
    }

    async fn toggle_bookmark(&self, request: &BookmarkToggleRequest) -> Result<Option<bool>> {
        let body = self
            .client
            .post_text(&["bookmark", "toggle"], request)
            .await?;

        // The backend answers with the new state. Anything else means the state is unknown.
        let is_favorite = serde_json::from_str::<bool>(body.trim()).ok();
        if is_favorite.is_none() {
            debug!("Toggle response for {} carried no state.", request.target());
        }
        Ok(is_favorite)
    }

    async fn check_bookmark(
        &self,
        user_id: &UserId,
        target_type: BookmarkTargetType,
        target_id: TargetId,
    ) -> Result<bool> {
        Ok(self
            .client
            .get(
                &["bookmark", "check"],
                &[
                    ("userId", user_id.to_string()),
                    ("targetType", target_type.to_string()),
                    ("targetId", target_id.to_string()),
                ],
            )
            .await?)
    }

    async fn bookmark_status(
        &self,
        user_id: &UserId,
        target_type: BookmarkTargetType,
        target_ids: &[TargetId],
    ) -> Result<HashMap<TargetId, bool>> {
        Ok(self
            .client
            .post(
                &["bookmark", "status"],
                &BookmarkStatusRequest {
                    user_id,
                    target_type,
                    target_ids,
                },
            )
            .await?)
    }
}
