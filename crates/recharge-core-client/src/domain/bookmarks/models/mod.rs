// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bookmark_record::{BookmarkRecord, BookmarkToggleRequest};
pub use bookmark_target::{BookmarkTarget, BookmarkTargetType, FavoriteBucket};
pub use content_records::{MoviePostRecord, MusicPostRecord};
pub use favorite_collections::{
    FavoriteCollections, FavoritesError, LoadStatus, UnknownTargetPolicy,
};
pub use favorite_item::FavoriteItem;
pub use list_state::{Generation, ListMode, ListState, OptimisticChange};
pub use pending_toggles::{PendingToggleGuard, PendingToggles};
pub use toggle::{ToggleError, ToggleOutcome, ToggleState};

mod bookmark_record;
mod bookmark_target;
mod content_records;
mod favorite_collections;
mod favorite_item;
mod list_state;
mod pending_toggles;
mod toggle;
