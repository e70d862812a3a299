// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{error, warn};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynBookmarkSource, DynClientEventDispatcher,
    DynSecondaryContentSource,
};
use crate::domain::bookmarks::models::{
    BookmarkTargetType, FavoriteCollections, FavoriteItem, MoviePostRecord, MusicPostRecord,
};
use crate::domain::bookmarks::utils::{build_favorite_collections, post_ids};
use crate::domain::shared::models::{TargetId, UserId};
use crate::ClientEvent;

pub struct FavoriteListLoader {
    ctx: DynAppContext,
    bookmark_source: DynBookmarkSource,
    content_source: DynSecondaryContentSource,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for FavoriteListLoader {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            bookmark_source: deps.bookmark_source.clone(),
            content_source: deps.content_source.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

impl FavoriteListLoader {
    /// Loads the favorites of `user_id` grouped by tab. Never fails, a failed load returns empty
    /// collections with `LoadStatus::Failed`.
    pub async fn load(&self, user_id: &UserId) -> FavoriteCollections {
        match self.try_load(user_id).await {
            Ok(collections) => collections,
            Err(err) => {
                error!(
                    "Failed to load favorites of {user_id}. Reason: {}",
                    err.to_string()
                );
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::FavoritesLoadFailed {
                        user_id: user_id.clone(),
                    });
                FavoriteCollections::failed()
            }
        }
    }

    pub async fn load_for_signed_in_user(&self) -> FavoriteCollections {
        let Some(user_id) = self.ctx.signed_in_user() else {
            return FavoriteCollections::default();
        };
        self.load(&user_id).await
    }

    /// Sets `is_favorite` on all `items` of `target_type` according to the bookmarks of the
    /// signed-in user. Items of other types, or all items if the status is unavailable, end up
    /// unmarked.
    pub async fn mark_favorites(
        &self,
        target_type: BookmarkTargetType,
        items: Vec<FavoriteItem>,
    ) -> Vec<FavoriteItem> {
        let target_ids = items
            .iter()
            .filter(|item| item.r#type == target_type)
            .map(|item| item.id)
            .collect::<Vec<TargetId>>();

        let status = match self.ctx.signed_in_user() {
            Some(user_id) if !target_ids.is_empty() => match self
                .bookmark_source
                .bookmark_status(&user_id, target_type, &target_ids)
                .await
            {
                Ok(status) => status,
                Err(err) => {
                    warn!(
                        "Failed to load bookmark status for {target_type} items. Reason: {}",
                        err.to_string()
                    );
                    Default::default()
                }
            },
            _ => Default::default(),
        };

        items
            .into_iter()
            .map(|item| {
                let is_favorite =
                    item.r#type == target_type && status.get(&item.id).copied().unwrap_or(false);
                item.with_favorite(is_favorite)
            })
            .collect()
    }
}

impl FavoriteListLoader {
    async fn try_load(&self, user_id: &UserId) -> Result<FavoriteCollections> {
        let bookmarks = self.bookmark_source.fetch_user_bookmarks(user_id).await?;

        let (movie_posts, music_posts) = futures::try_join!(
            self.load_movie_posts_if(!post_ids(&bookmarks, BookmarkTargetType::MoviePost).is_empty()),
            self.load_music_posts_if(!post_ids(&bookmarks, BookmarkTargetType::MusicPost).is_empty()),
        )?;

        Ok(build_favorite_collections(
            &bookmarks,
            &movie_posts,
            &music_posts,
            self.ctx.config.unknown_target_policy,
        )?)
    }

    async fn load_movie_posts_if(&self, needed: bool) -> Result<Vec<MoviePostRecord>> {
        if !needed {
            return Ok(vec![]);
        }
        self.content_source.load_movie_posts().await
    }

    async fn load_music_posts_if(&self, needed: bool) -> Result<Vec<MusicPostRecord>> {
        if !needed {
            return Ok(vec![]);
        }
        self.content_source.load_music_posts().await
    }
}
