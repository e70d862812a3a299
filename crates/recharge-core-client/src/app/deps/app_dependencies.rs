// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::bookmarks::services::{BookmarkSource, SecondaryContentSource};
use crate::domain::identity::services::IdentityStore;

pub type DynAppContext = Arc<AppContext>;
pub type DynBookmarkSource = Arc<dyn BookmarkSource>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynIdentityStore = Arc<dyn IdentityStore>;
pub type DynSecondaryContentSource = Arc<dyn SecondaryContentSource>;

pub struct AppDependencies {
    pub bookmark_source: DynBookmarkSource,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub content_source: DynSecondaryContentSource,
    pub ctx: DynAppContext,
    pub identity_store: DynIdentityStore,
}
