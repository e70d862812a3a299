// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

/// The key the signed-in user's id is stored under.
pub const USER_ID_KEY: &str = "userId";

/// Platform key/value storage. Lookups never fail, a missing value means "not signed in".
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait IdentityStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Option<String>;
    async fn set_item(&self, key: &str, value: String);
    async fn remove_item(&self, key: &str);
}
