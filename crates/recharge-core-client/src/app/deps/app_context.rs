// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::bookmarks::models::UnknownTargetPolicy;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// How bookmarks of unknown target types are treated when loading favorites.
    pub unknown_target_policy: UnknownTargetPolicy,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No user is signed in.")]
pub struct NotSignedInError;

pub struct AppContext {
    identity: RwLock<Option<UserId>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            identity: Default::default(),
            config,
        }
    }

    pub fn signed_in(user_id: UserId, config: AppConfig) -> Self {
        Self {
            identity: RwLock::new(Some(user_id)),
            config,
        }
    }
}

impl AppContext {
    pub fn signed_in_user(&self) -> Option<UserId> {
        self.identity.read().clone()
    }

    pub fn require_signed_in_user(&self) -> Result<UserId, NotSignedInError> {
        self.signed_in_user().ok_or(NotSignedInError)
    }

    pub fn set_identity(&self, user_id: UserId) {
        self.identity.write().replace(user_id);
    }

    pub fn reset_identity(&self) {
        self.identity.write().take();
    }
}
