// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;

use super::{BookmarkTarget, FavoriteItem};

/// How a toggle is reflected in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Catalogue views flip the item's `is_favorite` flag.
    Flags,
    /// "My favorites" views drop the item from the list.
    Removal,
}

/// Token handed out when an asynchronous operation starts working on a list. The list moves to
/// a new generation whenever it is reloaded or detached so that late results can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// What was changed optimistically, i.e. everything needed to revert it.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimisticChange {
    Flipped {
        target: BookmarkTarget,
        was_favorite: bool,
    },
    /// The item is hidden but keeps its slot until the toggle settles.
    Removed { target: BookmarkTarget },
}

struct Entry {
    item: FavoriteItem,
    is_hidden: bool,
}

impl Entry {
    fn is_visible(&self, target: &BookmarkTarget) -> bool {
        !self.is_hidden && self.item.is(target)
    }

    fn is_hidden(&self, target: &BookmarkTarget) -> bool {
        self.is_hidden && self.item.is(target)
    }
}

impl From<FavoriteItem> for Entry {
    fn from(item: FavoriteItem) -> Self {
        Entry {
            item,
            is_hidden: false,
        }
    }
}

/// The item list owned by a single screen.
pub struct ListState {
    mode: ListMode,
    entries: RwLock<Vec<Entry>>,
    generation: AtomicU64,
    is_detached: AtomicBool,
}

impl ListState {
    pub fn new(mode: ListMode, items: Vec<FavoriteItem>) -> Self {
        Self {
            mode,
            entries: RwLock::new(items.into_iter().map(Entry::from).collect()),
            generation: Default::default(),
            is_detached: Default::default(),
        }
    }

    pub fn flags(items: Vec<FavoriteItem>) -> Self {
        Self::new(ListMode::Flags, items)
    }

    pub fn removal(items: Vec<FavoriteItem>) -> Self {
        Self::new(ListMode::Removal, items)
    }
}

impl ListState {
    pub fn items(&self) -> Vec<FavoriteItem> {
        self.entries
            .read()
            .iter()
            .filter(|entry| !entry.is_hidden)
            .map(|entry| entry.item.clone())
            .collect()
    }

    pub fn item(&self, target: &BookmarkTarget) -> Option<FavoriteItem> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.is_visible(target))
            .map(|entry| entry.item.clone())
    }

    pub fn contains(&self, target: &BookmarkTarget) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| entry.is_visible(target))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().iter().all(|entry| entry.is_hidden)
    }

    pub fn is_detached(&self) -> bool {
        self.is_detached.load(Ordering::SeqCst)
    }

    pub fn generation(&self) -> Generation {
        Generation(self.generation.load(Ordering::SeqCst))
    }

    /// Replaces the contents after a reload. Results of operations started before are discarded.
    pub fn replace_items(&self, items: Vec<FavoriteItem>) {
        let mut entries = self.entries.write();
        *entries = items.into_iter().map(Entry::from).collect();
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Call when the owning view goes away. The list won't be mutated afterwards.
    pub fn detach(&self) {
        let _guard = self.entries.write();
        self.is_detached.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl ListState {
    /// Applies the local half of a toggle. Returns `None` if the item isn't in the list or the
    /// list was detached.
    pub(crate) fn apply_optimistic(
        &self,
        target: &BookmarkTarget,
    ) -> Option<(OptimisticChange, Generation)> {
        let mut entries = self.entries.write();

        if self.is_detached() {
            return None;
        }

        let entry = entries.iter_mut().find(|entry| entry.is_visible(target))?;

        let change = match self.mode {
            ListMode::Flags => {
                let was_favorite = entry.item.is_favorite;
                entry.item.is_favorite = !was_favorite;
                OptimisticChange::Flipped {
                    target: *target,
                    was_favorite,
                }
            }
            ListMode::Removal => {
                entry.is_hidden = true;
                OptimisticChange::Removed { target: *target }
            }
        };

        Some((change, self.generation()))
    }

    /// Accepts the state reported by the backend. Returns `false` if `generation` is stale.
    pub(crate) fn reconcile(
        &self,
        change: OptimisticChange,
        generation: Generation,
        is_favorite: Option<bool>,
    ) -> bool {
        let mut entries = self.entries.write();

        if !self.is_current(generation) {
            return false;
        }

        match change {
            OptimisticChange::Flipped { target, .. } => {
                let Some(is_favorite) = is_favorite else {
                    return true;
                };
                if let Some(entry) = entries.iter_mut().find(|entry| entry.is_visible(&target)) {
                    entry.item.is_favorite = is_favorite;
                }
            }
            OptimisticChange::Removed { target } => {
                let Some(index) = entries.iter().position(|entry| entry.is_hidden(&target))
                else {
                    return true;
                };
                // The backend says the bookmark still exists so the item belongs in the list.
                if is_favorite == Some(true) {
                    let entry = &mut entries[index];
                    entry.is_hidden = false;
                    entry.item.is_favorite = true;
                } else {
                    entries.remove(index);
                }
            }
        }

        true
    }

    /// Reverts an optimistic change. Returns `false` if `generation` is stale.
    pub(crate) fn rollback(&self, change: OptimisticChange, generation: Generation) -> bool {
        let mut entries = self.entries.write();

        if !self.is_current(generation) {
            return false;
        }

        match change {
            OptimisticChange::Flipped {
                target,
                was_favorite,
            } => {
                if let Some(entry) = entries.iter_mut().find(|entry| entry.is_visible(&target)) {
                    entry.item.is_favorite = was_favorite;
                }
            }
            OptimisticChange::Removed { target } => {
                if let Some(entry) = entries.iter_mut().find(|entry| entry.is_hidden(&target)) {
                    entry.is_hidden = false;
                }
            }
        }

        true
    }

    /// Applies the stored bookmark state of a single item. In removal mode an item that is no
    /// longer bookmarked leaves the list. Returns `false` if `generation` is stale.
    pub(crate) fn set_favorite(
        &self,
        target: &BookmarkTarget,
        is_favorite: bool,
        generation: Generation,
    ) -> bool {
        let mut entries = self.entries.write();

        if !self.is_current(generation) {
            return false;
        }

        let Some(index) = entries.iter().position(|entry| entry.is_visible(target)) else {
            return true;
        };

        match (self.mode, is_favorite) {
            (ListMode::Removal, false) => {
                entries.remove(index);
            }
            _ => entries[index].item.is_favorite = is_favorite,
        }
        true
    }

    fn is_current(&self, generation: Generation) -> bool {
        !self.is_detached() && self.generation() == generation
    }
}
