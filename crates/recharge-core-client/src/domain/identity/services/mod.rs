// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use identity_store::{IdentityStore, USER_ID_KEY};

mod identity_store;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::identity_store::MockIdentityStore;
}
