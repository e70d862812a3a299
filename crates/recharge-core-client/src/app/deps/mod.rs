// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_context::{AppConfig, AppContext, NotSignedInError};
pub use app_dependencies::*;

pub use crate::domain::bookmarks::models::UnknownTargetPolicy;

mod app_context;
mod app_dependencies;
