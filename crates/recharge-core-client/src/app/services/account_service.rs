// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::info;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynIdentityStore,
};
use crate::domain::identity::services::USER_ID_KEY;
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

/// Resolves the signed-in user once per session so that other services can read it from the
/// `AppContext` instead of querying storage themselves.
pub struct AccountService {
    ctx: DynAppContext,
    identity_store: DynIdentityStore,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for AccountService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            identity_store: deps.identity_store.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

impl AccountService {
    /// Reads the stored identity into the context. Returns `None` if nobody is signed in.
    pub async fn restore_session(&self) -> Option<UserId> {
        let user_id = self
            .identity_store
            .get_item(USER_ID_KEY)
            .await
            .filter(|id| !id.trim().is_empty())
            .map(UserId::from);

        match &user_id {
            Some(user_id) => {
                info!("Restored session for {user_id}.");
                self.ctx.set_identity(user_id.clone());
            }
            None => {
                info!("No stored session found.");
                self.ctx.reset_identity();
            }
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionChanged);
        user_id
    }

    pub async fn sign_in(&self, user_id: &UserId) {
        self.identity_store
            .set_item(USER_ID_KEY, user_id.to_string())
            .await;
        self.ctx.set_identity(user_id.clone());
        info!("Signed in as {user_id}.");
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionChanged);
    }

    pub async fn sign_out(&self) {
        self.identity_store.remove_item(USER_ID_KEY).await;
        self.ctx.reset_identity();
        info!("Signed out.");
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionChanged);
    }

    pub fn signed_in_user(&self) -> Option<UserId> {
        self.ctx.signed_in_user()
    }
}
