// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use target_id::TargetId;
pub use user_id::UserId;

mod target_id;
mod user_id;
