// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use super::BookmarkToggleRequest;

/// Keys of the toggles currently in flight. Allows at most one toggle per
/// (user, target type, target id) at a time.
#[derive(Default)]
pub struct PendingToggles {
    keys: Arc<Mutex<HashSet<BookmarkToggleRequest>>>,
}

impl PendingToggles {
    /// Marks `key` as pending. Returns `None` if it already was. The key is released when the
    /// returned guard is dropped.
    pub fn try_acquire(&self, key: BookmarkToggleRequest) -> Option<PendingToggleGuard> {
        if !self.keys.lock().insert(key.clone()) {
            return None;
        }

        Some(PendingToggleGuard {
            keys: self.keys.clone(),
            key,
        })
    }

    pub fn contains(&self, key: &BookmarkToggleRequest) -> bool {
        self.keys.lock().contains(key)
    }
}

pub struct PendingToggleGuard {
    keys: Arc<Mutex<HashSet<BookmarkToggleRequest>>>,
    key: BookmarkToggleRequest,
}

impl Drop for PendingToggleGuard {
    fn drop(&mut self) {
        self.keys.lock().remove(&self.key);
    }
}
