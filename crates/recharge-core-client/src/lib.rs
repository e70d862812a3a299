// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{AppConfig, UnknownTargetPolicy};
pub use app::services;
pub use client::{Client, ClientDelegate, ClientInner};
pub use client_builder::{ClientBuilder, UndefinedBookmarkSource, UndefinedContentSource};
pub use client_event::ClientEvent;
pub use infra::identity::InMemoryIdentityStore;
pub use infra::rest::{RequestError, RestApiConfig};


pub mod app;
mod client;
mod client_builder;
mod client_event;
pub mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub mod dtos {
    pub use crate::domain::bookmarks::models::{
        BookmarkTarget, BookmarkTargetType, FavoriteBucket, FavoriteCollections, FavoriteItem,
        ListMode, ListState, LoadStatus, ToggleError, ToggleOutcome, ToggleState,
    };
    pub use crate::domain::shared::models::{TargetId, UserId};
}
