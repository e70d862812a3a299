// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::identity::services::{IdentityStore, USER_ID_KEY};
use crate::domain::shared::models::UserId;

/// Keeps values for the lifetime of the process. Used when the host doesn't provide storage.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryIdentityStore {
    pub fn with_user_id(user_id: &UserId) -> Self {
        let store = Self::default();
        store
            .items
            .write()
            .insert(USER_ID_KEY.to_string(), user_id.to_string());
        store
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    async fn set_item(&self, key: &str, value: String) {
        self.items.write().insert(key.to_string(), value);
    }

    async fn remove_item(&self, key: &str) {
        self.items.write().remove(key);
    }
}
