// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::bookmarks::models::{MoviePostRecord, MusicPostRecord};
use crate::domain::bookmarks::services::SecondaryContentSource;

use super::RestClient;

pub struct RestContentSource {
    client: Arc<RestClient>,
}

impl RestContentSource {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecondaryContentSource for RestContentSource {
    async fn load_movie_posts(&self) -> Result<Vec<MoviePostRecord>> {
        Ok(self.client.get(&["moviepost", "list"], &[]).await?)
    }

    async fn load_music_posts(&self) -> Result<Vec<MusicPostRecord>> {
        Ok(self.client.get(&["musicpost", "list"], &[]).await?)
    }
}
