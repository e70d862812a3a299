// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePostRecord {
    pub movie_post_id: i64,
    #[serde(default)]
    pub movie_post_title: Option<String>,
    /// Already resolved to an absolute poster URL by the backend.
    #[serde(default)]
    pub movie_poster: Option<String>,
    #[serde(default)]
    pub user_nickname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicPostRecord {
    pub music_post_id: i64,
    #[serde(default)]
    pub music_post_title: Option<String>,
    #[serde(default)]
    pub first_image_path: Option<String>,
    #[serde(default)]
    pub user_nickname: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}
