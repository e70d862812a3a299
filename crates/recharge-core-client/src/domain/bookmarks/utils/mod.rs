// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use favorites_builder::{build_favorite_collections, post_ids};

mod favorites_builder;
