// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use bookmark_toggle_controller::BookmarkToggleController;
pub use favorite_list_loader::FavoriteListLoader;

mod account_service;
mod bookmark_toggle_controller;
mod favorite_list_loader;
