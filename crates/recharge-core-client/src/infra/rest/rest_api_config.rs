// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use url::Url;

#[derive(Debug, Clone)]
pub struct RestApiConfig {
    /// Root of the REST API, e.g. `https://api.example.com/api/`.
    pub base_url: Url,
    /// Applies to every request including reading the response body.
    pub timeout: Duration,
    /// How often a failed GET request is repeated. Mutating requests are never repeated.
    pub read_retries: u32,
    /// Delay before the first retry. Grows linearly with every further attempt.
    pub retry_delay: Duration,
}

impl RestApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(10),
            read_retries: 2,
            retry_delay: Duration::from_millis(500),
        }
    }
}
