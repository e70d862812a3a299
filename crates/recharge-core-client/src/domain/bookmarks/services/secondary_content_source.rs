// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::bookmarks::models::{MoviePostRecord, MusicPostRecord};

/// Collections that post bookmarks are resolved against.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SecondaryContentSource: Send + Sync {
    async fn load_movie_posts(&self) -> Result<Vec<MoviePostRecord>>;
    async fn load_music_posts(&self) -> Result<Vec<MusicPostRecord>>;
}
