// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::TargetId;

use super::{BookmarkRecord, BookmarkTarget, BookmarkTargetType, MoviePostRecord, MusicPostRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteItem {
    pub id: TargetId,
    pub r#type: BookmarkTargetType,
    /// The locally believed bookmark state. The backend holds the authoritative value.
    pub is_favorite: bool,
    pub title: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
}

impl FavoriteItem {
    pub fn new(r#type: BookmarkTargetType, id: impl Into<TargetId>) -> Self {
        Self {
            id: id.into(),
            r#type,
            is_favorite: false,
            title: None,
            author: None,
            image: None,
        }
    }

    pub fn target(&self) -> BookmarkTarget {
        BookmarkTarget::new(self.r#type, self.id)
    }

    pub fn is(&self, target: &BookmarkTarget) -> bool {
        self.r#type == target.r#type && self.id == target.id
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl FavoriteItem {
    /// Builds an item from a bookmark that carries its own display fields. Returns `None` for
    /// unknown types and for post bookmarks, which need to be joined against their posts.
    pub fn from_bookmark(record: &BookmarkRecord) -> Option<Self> {
        let target = record.target()?;
        let (title, author, image) = match target.r#type {
            BookmarkTargetType::Movie => (record.title.clone(), None, record.image.clone()),
            BookmarkTargetType::Music => (
                record.music_title.clone(),
                record.music_singer.clone(),
                record.music_image_path.clone(),
            ),
            BookmarkTargetType::MusicList => (
                record.list_music_title.clone(),
                record.list_music_singer.clone(),
                record.list_music_image.clone(),
            ),
            BookmarkTargetType::MoviePost | BookmarkTargetType::MusicPost => return None,
        };

        Some(FavoriteItem {
            id: target.id,
            r#type: target.r#type,
            is_favorite: true,
            title,
            author,
            image,
        })
    }
}

impl From<&MoviePostRecord> for FavoriteItem {
    fn from(post: &MoviePostRecord) -> Self {
        FavoriteItem {
            id: post.movie_post_id.into(),
            r#type: BookmarkTargetType::MoviePost,
            is_favorite: true,
            title: post.movie_post_title.clone(),
            author: post.user_nickname.clone(),
            image: post.movie_poster.clone(),
        }
    }
}

impl From<&MusicPostRecord> for FavoriteItem {
    fn from(post: &MusicPostRecord) -> Self {
        FavoriteItem {
            id: post.music_post_id.into(),
            r#type: BookmarkTargetType::MusicPost,
            is_favorite: true,
            title: post.music_post_title.clone(),
            author: post
                .user_nickname
                .clone()
                .or_else(|| post.user_id.clone()),
            image: post.first_image_path.clone(),
        }
    }
}
