// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::shared::models::TargetId;

/// The kinds of entities a user can bookmark. The lowercase variant name is the wire value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookmarkTargetType {
    Movie,
    MoviePost,
    Music,
    MusicList,
    MusicPost,
}

/// The tab a favorite is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteBucket {
    Movies,
    Music,
}

impl BookmarkTargetType {
    pub fn bucket(&self) -> FavoriteBucket {
        match self {
            Self::Movie | Self::MoviePost => FavoriteBucket::Movies,
            Self::Music | Self::MusicList | Self::MusicPost => FavoriteBucket::Music,
        }
    }

    /// Post bookmarks only carry an id and need to be joined against a separately loaded
    /// post collection.
    pub fn is_post(&self) -> bool {
        matches!(self, Self::MoviePost | Self::MusicPost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookmarkTarget {
    pub r#type: BookmarkTargetType,
    pub id: TargetId,
}

impl BookmarkTarget {
    pub fn new(r#type: BookmarkTargetType, id: impl Into<TargetId>) -> Self {
        Self {
            r#type,
            id: id.into(),
        }
    }
}

impl Display for BookmarkTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.r#type, self.id)
    }
}
