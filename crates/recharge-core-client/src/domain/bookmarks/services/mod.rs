// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bookmark_source::BookmarkSource;
pub use secondary_content_source::SecondaryContentSource;

mod bookmark_source;
mod secondary_content_source;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::bookmark_source::MockBookmarkSource;
    pub use super::secondary_content_source::MockSecondaryContentSource;
}
