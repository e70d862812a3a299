// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynBookmarkSource, DynIdentityStore,
    DynSecondaryContentSource,
};
use crate::app::services::{AccountService, BookmarkToggleController, FavoriteListLoader};
use crate::client::ClientInner;
use crate::domain::bookmarks::services::{BookmarkSource, SecondaryContentSource};
use crate::domain::identity::services::IdentityStore;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::identity::InMemoryIdentityStore;
use crate::infra::rest::{
    RequestError, RestApiConfig, RestBookmarkSource, RestClient, RestContentSource,
};
use crate::{Client, ClientDelegate};

pub struct UndefinedBookmarkSource;
pub struct UndefinedContentSource;

pub struct ClientBuilder<B, C> {
    app_config: AppConfig,
    bookmark_source: B,
    content_source: C,
    delegate: Option<Box<dyn ClientDelegate>>,
    identity_store: DynIdentityStore,
}

impl ClientBuilder<UndefinedBookmarkSource, UndefinedContentSource> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            bookmark_source: UndefinedBookmarkSource,
            content_source: UndefinedContentSource,
            delegate: None,
            identity_store: Arc::new(InMemoryIdentityStore::default()),
        }
    }

    /// Talks to the REST backend at `config.base_url` for both bookmarks and posts.
    pub fn set_rest_api(
        self,
        config: RestApiConfig,
    ) -> Result<ClientBuilder<DynBookmarkSource, DynSecondaryContentSource>, RequestError> {
        let client = Arc::new(RestClient::new(config)?);

        Ok(ClientBuilder {
            app_config: self.app_config,
            bookmark_source: Arc::new(RestBookmarkSource::new(client.clone())),
            content_source: Arc::new(RestContentSource::new(client)),
            delegate: self.delegate,
            identity_store: self.identity_store,
        })
    }
}

impl<C> ClientBuilder<UndefinedBookmarkSource, C> {
    pub fn set_bookmark_source<S: BookmarkSource + 'static>(
        self,
        bookmark_source: S,
    ) -> ClientBuilder<DynBookmarkSource, C> {
        ClientBuilder {
            app_config: self.app_config,
            bookmark_source: Arc::new(bookmark_source),
            content_source: self.content_source,
            delegate: self.delegate,
            identity_store: self.identity_store,
        }
    }
}

impl<B> ClientBuilder<B, UndefinedContentSource> {
    pub fn set_content_source<S: SecondaryContentSource + 'static>(
        self,
        content_source: S,
    ) -> ClientBuilder<B, DynSecondaryContentSource> {
        ClientBuilder {
            app_config: self.app_config,
            bookmark_source: self.bookmark_source,
            content_source: Arc::new(content_source),
            delegate: self.delegate,
            identity_store: self.identity_store,
        }
    }
}

impl<B, C> ClientBuilder<B, C> {
    pub fn set_identity_store<S: IdentityStore + 'static>(mut self, identity_store: S) -> Self {
        self.identity_store = Arc::new(identity_store);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<DynBookmarkSource, DynSecondaryContentSource> {
    pub fn build(self) -> Client {
        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let dependencies = AppDependencies {
            bookmark_source: self.bookmark_source,
            client_event_dispatcher: event_dispatcher.clone(),
            content_source: self.content_source,
            ctx: Arc::new(AppContext::new(self.app_config)),
            identity_store: self.identity_store,
        };

        let client_inner = Arc::new(ClientInner {
            account: AccountService::from(&dependencies),
            bookmarks: BookmarkToggleController::from(&dependencies),
            favorites: FavoriteListLoader::from(&dependencies),
            ctx: dependencies.ctx.clone(),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
