// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use rest_api_config::RestApiConfig;
pub use rest_bookmark_source::RestBookmarkSource;
pub use rest_client::{RequestError, RestClient};
pub use rest_content_source::RestContentSource;

mod rest_api_config;
mod rest_bookmark_source;
mod rest_client;
mod rest_content_source;
