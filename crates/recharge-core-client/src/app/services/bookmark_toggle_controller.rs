// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{error, info, warn};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynBookmarkSource, DynClientEventDispatcher,
};
use crate::domain::bookmarks::models::{
    BookmarkTarget, BookmarkToggleRequest, ListState, PendingToggles, ToggleError, ToggleOutcome,
    ToggleState,
};
use crate::ClientEvent;

/// Toggles bookmarks optimistically.
///
/// The list is updated before the backend is asked. Once the request settles the local change
/// is either reconciled with the state reported by the backend or reverted. At most one toggle
/// per (user, target) is in flight at any time, further attempts are rejected until it settles.
pub struct BookmarkToggleController {
    ctx: DynAppContext,
    bookmark_source: DynBookmarkSource,
    client_event_dispatcher: DynClientEventDispatcher,
    pending: PendingToggles,
}

impl From<&AppDependencies> for BookmarkToggleController {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            bookmark_source: deps.bookmark_source.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            pending: Default::default(),
        }
    }
}

impl BookmarkToggleController {
    pub async fn toggle(
        &self,
        list: &ListState,
        target: &BookmarkTarget,
    ) -> Result<ToggleOutcome, ToggleError> {
        let Some(user_id) = self.ctx.signed_in_user() else {
            return Err(ToggleError::NotSignedIn);
        };

        if list.is_detached() {
            return Ok(ToggleOutcome::Discarded);
        }

        if !list.contains(target) {
            return Err(ToggleError::ItemNotFound(*target));
        }

        let request = BookmarkToggleRequest::new(user_id, target);
        let Some(_pending) = self.pending.try_acquire(request.clone()) else {
            return Err(ToggleError::AlreadyPending(*target));
        };

        let Some((change, generation)) = list.apply_optimistic(target) else {
            return Err(ToggleError::ItemNotFound(*target));
        };

        match self.bookmark_source.toggle_bookmark(&request).await {
            Ok(is_favorite) => {
                let is_applied = list.reconcile(change, generation, is_favorite);

                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::BookmarkChanged {
                        target: *target,
                        is_favorite,
                    });

                if !is_applied {
                    info!("Discarding result of bookmark toggle for {target}. List has changed.");
                    return Ok(ToggleOutcome::Discarded);
                }
                Ok(ToggleOutcome::Committed { is_favorite })
            }
            Err(err) => {
                if !list.rollback(change, generation) {
                    warn!(
                        "Bookmark toggle for {target} failed after its list has changed. Reason: {}",
                        err.to_string()
                    );
                    return Ok(ToggleOutcome::Discarded);
                }

                error!(
                    "Failed to toggle bookmark {target}. Reason: {}",
                    err.to_string()
                );
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::BookmarkToggleFailed { target: *target });
                Ok(ToggleOutcome::RolledBack)
            }
        }
    }

    /// Applies the state stored on the backend to `list`. Removal lists drop the item if it is no
    /// longer bookmarked. Returns `None` without touching the list if a toggle for `target` is
    /// currently in flight or if the list changed while the request was running.
    pub async fn refresh(&self, list: &ListState, target: &BookmarkTarget) -> Result<Option<bool>> {
        let user_id = self.ctx.require_signed_in_user()?;
        let request = BookmarkToggleRequest::new(user_id.clone(), target);

        let Some(_pending) = self.pending.try_acquire(request) else {
            return Ok(None);
        };

        let generation = list.generation();
        let is_favorite = self
            .bookmark_source
            .check_bookmark(&user_id, target.r#type, target.id)
            .await?;

        if !list.set_favorite(target, is_favorite, generation) {
            return Ok(None);
        }
        Ok(Some(is_favorite))
    }

    pub fn state(&self, target: &BookmarkTarget) -> ToggleState {
        let Some(user_id) = self.ctx.signed_in_user() else {
            return ToggleState::Idle;
        };

        if self
            .pending
            .contains(&BookmarkToggleRequest::new(user_id, target))
        {
            ToggleState::OptimisticallyApplied
        } else {
            ToggleState::Idle
        }
    }
}
