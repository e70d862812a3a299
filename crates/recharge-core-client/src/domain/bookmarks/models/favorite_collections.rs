// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::{FavoriteBucket, FavoriteItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loaded,
    /// Loading failed. The collections are empty but that doesn't mean the user has no favorites.
    Failed,
}

/// A user's favorites grouped by the tab they are presented in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoriteCollections {
    pub movies: Vec<FavoriteItem>,
    pub music: Vec<FavoriteItem>,
    pub status: LoadStatus,
}

impl FavoriteCollections {
    pub fn failed() -> Self {
        Self {
            status: LoadStatus::Failed,
            ..Default::default()
        }
    }

    pub(crate) fn bucket_mut(&mut self, bucket: FavoriteBucket) -> &mut Vec<FavoriteItem> {
        match bucket {
            FavoriteBucket::Movies => &mut self.movies,
            FavoriteBucket::Music => &mut self.music,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.music.is_empty()
    }

    pub fn did_fail(&self) -> bool {
        self.status == LoadStatus::Failed
    }
}

/// What to do with bookmarks whose target type this client doesn't know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTargetPolicy {
    /// Skip them.
    #[default]
    Lenient,
    /// Treat them as a data integrity error and fail the load.
    Strict,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FavoritesError {
    #[error("Bookmark {id} has an unrecognized target type '{target_type}'.")]
    UnrecognizedTargetType { target_type: String, id: i64 },
}
