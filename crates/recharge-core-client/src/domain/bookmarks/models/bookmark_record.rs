// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{TargetId, UserId};

use super::{BookmarkTarget, BookmarkTargetType};

/// A bookmark as returned by the backend. The target type is kept as a raw string so that
/// records of unknown kinds survive deserialization and can be handled by policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    pub bookmark_target_type: String,
    pub bookmark_target_id: i64,
    #[serde(default)]
    pub music_list_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub music_title: Option<String>,
    #[serde(default)]
    pub music_singer: Option<String>,
    #[serde(default)]
    pub music_image_path: Option<String>,
    #[serde(default)]
    pub list_music_title: Option<String>,
    #[serde(default)]
    pub list_music_singer: Option<String>,
    #[serde(default)]
    pub list_music_image: Option<String>,
}

impl BookmarkRecord {
    pub fn new(r#type: impl Into<String>, id: i64) -> Self {
        Self {
            bookmark_target_type: r#type.into(),
            bookmark_target_id: id,
            ..Default::default()
        }
    }

    /// Returns `None` for target types this client doesn't know about.
    pub fn target_type(&self) -> Option<BookmarkTargetType> {
        BookmarkTargetType::from_str(&self.bookmark_target_type).ok()
    }

    /// Music lists are addressed by their list id when the backend provides one.
    pub fn target(&self) -> Option<BookmarkTarget> {
        let r#type = self.target_type()?;
        let id = match r#type {
            BookmarkTargetType::MusicList => self.music_list_id.unwrap_or(self.bookmark_target_id),
            _ => self.bookmark_target_id,
        };
        Some(BookmarkTarget::new(r#type, id))
    }
}

/// Identifies the (user, item) bookmark relation to flip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkToggleRequest {
    pub user_id: UserId,
    #[serde(rename = "bookmarkTargetType")]
    pub target_type: BookmarkTargetType,
    #[serde(rename = "bookmarkTargetId")]
    pub target_id: TargetId,
}

impl BookmarkToggleRequest {
    pub fn new(user_id: UserId, target: &BookmarkTarget) -> Self {
        Self {
            user_id,
            target_type: target.r#type,
            target_id: target.id,
        }
    }

    pub fn target(&self) -> BookmarkTarget {
        BookmarkTarget::new(self.target_type, self.target_id)
    }
}
