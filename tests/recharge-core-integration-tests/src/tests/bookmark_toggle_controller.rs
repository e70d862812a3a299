// recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use mockall::predicate;
use pretty_assertions::assert_eq;

use recharge_core_client::app::deps::NotSignedInError;
use recharge_core_client::dtos::{
    BookmarkTargetType, ListState, ToggleError, ToggleOutcome, ToggleState, TargetId,
};
use recharge_core_client::services::BookmarkToggleController;
use recharge_core_client::test::{mock_data, MockAppDependencies};
use recharge_core_client::{target, ClientEvent};

use super::async_test;
use super::helpers::{expect_suspended_toggle, music};

#[async_test]
async fn test_reconciles_with_reported_state() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.bookmark_source
        .expect_toggle_bookmark()
        .times(1)
        .returning(|request| {
            assert_eq!(request.user_id, mock_data::user_id());
            assert_eq!(request.target_type, BookmarkTargetType::Music);
            assert_eq!(request.target_id, TargetId::from(5));
            // The optimistic flip predicted `true`, the backend disagrees.
            Box::pin(async { Ok(Some(false)) })
        });
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .with(predicate::eq(ClientEvent::BookmarkChanged {
            target: target!(Music, 5),
            is_favorite: Some(false),
        }))
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(4, true), music(5, false)]);

    let outcome = controller.toggle(&list, &target!(Music, 5)).await?;

    assert_eq!(
        outcome,
        ToggleOutcome::Committed {
            is_favorite: Some(false)
        }
    );
    assert_eq!(list.items(), vec![music(4, true), music(5, false)]);
    assert_eq!(controller.state(&target!(Music, 5)), ToggleState::Idle);

    Ok(())
}

#[async_test]
async fn test_repeated_identical_responses_are_idempotent() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.bookmark_source
        .expect_toggle_bookmark()
        .times(2)
        .returning(|_| Box::pin(async { Ok(Some(true)) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(2)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, false)]);

    controller.toggle(&list, &target!(Music, 5)).await?;
    assert_eq!(list.items(), vec![music(5, true)]);

    controller.toggle(&list, &target!(Music, 5)).await?;
    assert_eq!(list.items(), vec![music(5, true)]);

    Ok(())
}

#[async_test]
async fn test_rolls_back_and_notifies_once_on_failure() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.bookmark_source
        .expect_toggle_bookmark()
        .times(1)
        .returning(|_| Box::pin(async { Err(anyhow!("Network unreachable")) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .with(predicate::eq(ClientEvent::BookmarkToggleFailed {
            target: target!(Music, 5),
        }))
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, true)]);

    let outcome = controller.toggle(&list, &target!(Music, 5)).await?;

    assert_eq!(outcome, ToggleOutcome::RolledBack);
    assert_eq!(list.items(), vec![music(5, true)]);

    Ok(())
}

#[async_test]
async fn test_removal_stands_without_reported_state() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.bookmark_source
        .expect_toggle_bookmark()
        .times(1)
        .returning(|_| Box::pin(async { Ok(None) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::removal(vec![music(4, true), music(5, true), music(6, true)]);

    let outcome = controller.toggle(&list, &target!(Music, 5)).await?;

    assert_eq!(outcome, ToggleOutcome::Committed { is_favorite: None });
    assert_eq!(list.items(), vec![music(4, true), music(6, true)]);

    Ok(())
}

#[async_test]
async fn test_removed_item_is_restored_in_place_on_failure() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.bookmark_source
        .expect_toggle_bookmark()
        .times(1)
        .returning(|_| Box::pin(async { Err(anyhow!("500 Internal Server Error")) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::removal(vec![music(4, true), music(5, true), music(6, true)]);

    let outcome = controller.toggle(&list, &target!(Music, 5)).await?;

    assert_eq!(outcome, ToggleOutcome::RolledBack);
    assert_eq!(
        list.items(),
        vec![music(4, true), music(5, true), music(6, true)]
    );

    Ok(())
}

#[async_test]
async fn test_does_not_toggle_without_identity() -> Result<()> {
    let mut deps = MockAppDependencies::signed_out();

    deps.bookmark_source.expect_toggle_bookmark().never();
    deps.client_event_dispatcher.expect_dispatch_event().never();

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, false)]);

    let result = controller.toggle(&list, &target!(Music, 5)).await;

    assert_eq!(result, Err(ToggleError::NotSignedIn));
    assert_eq!(list.items(), vec![music(5, false)]);

    Ok(())
}

#[async_test]
async fn test_rejects_unknown_items() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.bookmark_source.expect_toggle_bookmark().never();

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, false)]);

    let result = controller.toggle(&list, &target!(MusicList, 5)).await;

    assert_eq!(result, Err(ToggleError::ItemNotFound(target!(MusicList, 5))));
    Ok(())
}

#[async_test]
async fn test_rejects_overlapping_toggles_on_same_item() -> Result<()> {
    let target = target!(Music, 5);

    let mut deps = MockAppDependencies::default();
    let tx = expect_suspended_toggle(&mut deps, target);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, false)]);

    let (first, second) = tokio::join!(controller.toggle(&list, &target), async {
        // The first toggle is suspended in the backend call at this point.
        assert_eq!(controller.state(&target), ToggleState::OptimisticallyApplied);
        assert_eq!(list.items(), vec![music(5, true)]);

        let second = controller.toggle(&list, &target).await;
        tx.send(Ok(Some(true))).map_err(|_| anyhow!("Toggle went away"))?;
        Ok::<_, anyhow::Error>(second)
    });

    assert_eq!(
        first,
        Ok(ToggleOutcome::Committed {
            is_favorite: Some(true)
        })
    );
    assert_eq!(second?, Err(ToggleError::AlreadyPending(target)));
    assert_eq!(list.items(), vec![music(5, true)]);
    assert_eq!(controller.state(&target), ToggleState::Idle);

    Ok(())
}

#[async_test]
async fn test_toggles_on_different_items_do_not_block_each_other() -> Result<()> {
    let (first_target, second_target) = (target!(Music, 5), target!(Music, 6));

    let mut deps = MockAppDependencies::default();

    deps.bookmark_source
        .expect_toggle_bookmark()
        .withf(|request| request.target_id == TargetId::from(6))
        .times(1)
        .returning(|_| Box::pin(async { Ok(Some(true)) }));
    let tx = expect_suspended_toggle(&mut deps, first_target);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .with(predicate::eq(ClientEvent::BookmarkChanged {
            target: second_target,
            is_favorite: Some(true),
        }))
        .times(1)
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .with(predicate::eq(ClientEvent::BookmarkToggleFailed {
            target: first_target,
        }))
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, false), music(6, false)]);

    let (first, second) = tokio::join!(controller.toggle(&list, &first_target), async {
        let outcome = controller.toggle(&list, &second_target).await;
        tx.send(Err(anyhow!("Timed out")))
            .map_err(|_| anyhow!("Toggle went away"))?;
        Ok::<_, anyhow::Error>(outcome)
    });

    assert_eq!(first, Ok(ToggleOutcome::RolledBack));
    assert_eq!(
        second?,
        Ok(ToggleOutcome::Committed {
            is_favorite: Some(true)
        })
    );
    assert_eq!(list.items(), vec![music(5, false), music(6, true)]);

    Ok(())
}

#[async_test]
async fn test_overlapping_removals_are_restored_in_place() -> Result<()> {
    let (first_target, second_target) = (target!(Music, 1), target!(Music, 3));

    let mut deps = MockAppDependencies::default();
    let first_tx = expect_suspended_toggle(&mut deps, first_target);
    let second_tx = expect_suspended_toggle(&mut deps, second_target);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(2)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::removal(vec![
        music(0, true),
        music(1, true),
        music(2, true),
        music(3, true),
    ]);

    let (first, second, sent) = tokio::join!(
        controller.toggle(&list, &first_target),
        controller.toggle(&list, &second_target),
        async {
            assert_eq!(list.items(), vec![music(0, true), music(2, true)]);
            first_tx
                .send(Err(anyhow!("Connection reset")))
                .map_err(|_| anyhow!("Toggle went away"))?;
            second_tx
                .send(Err(anyhow!("Connection reset")))
                .map_err(|_| anyhow!("Toggle went away"))
        }
    );
    sent?;

    assert_eq!(first, Ok(ToggleOutcome::RolledBack));
    assert_eq!(second, Ok(ToggleOutcome::RolledBack));
    assert_eq!(
        list.items(),
        vec![music(0, true), music(1, true), music(2, true), music(3, true)]
    );

    Ok(())
}

#[async_test]
async fn test_removal_rollback_survives_committed_removal_before_it() -> Result<()> {
    let (first_target, second_target) = (target!(Music, 1), target!(Music, 2));

    let mut deps = MockAppDependencies::default();
    let first_tx = expect_suspended_toggle(&mut deps, first_target);
    let second_tx = expect_suspended_toggle(&mut deps, second_target);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .with(predicate::eq(ClientEvent::BookmarkChanged {
            target: first_target,
            is_favorite: None,
        }))
        .times(1)
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .with(predicate::eq(ClientEvent::BookmarkToggleFailed {
            target: second_target,
        }))
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::removal(vec![music(1, true), music(2, true), music(3, true)]);

    let (first, second, sent) = tokio::join!(
        controller.toggle(&list, &first_target),
        controller.toggle(&list, &second_target),
        async {
            first_tx
                .send(Ok(None))
                .map_err(|_| anyhow!("Toggle went away"))?;
            second_tx
                .send(Err(anyhow!("500 Internal Server Error")))
                .map_err(|_| anyhow!("Toggle went away"))
        }
    );
    sent?;

    assert_eq!(first, Ok(ToggleOutcome::Committed { is_favorite: None }));
    assert_eq!(second, Ok(ToggleOutcome::RolledBack));
    assert_eq!(list.items(), vec![music(2, true), music(3, true)]);

    Ok(())
}

#[async_test]
async fn test_failure_after_detach_leaves_list_alone() -> Result<()> {
    let target = target!(Music, 5);

    let mut deps = MockAppDependencies::default();
    let tx = expect_suspended_toggle(&mut deps, target);

    deps.client_event_dispatcher.expect_dispatch_event().never();

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::removal(vec![music(5, true)]);

    let (outcome, sent) = tokio::join!(controller.toggle(&list, &target), async {
        list.detach();
        tx.send(Err(anyhow!("Connection reset")))
            .map_err(|_| anyhow!("Toggle went away"))
    });
    sent?;

    assert_eq!(outcome, Ok(ToggleOutcome::Discarded));
    assert!(list.is_empty());

    // Further toggles on a detached list are ignored.
    assert_eq!(
        controller.toggle(&list, &target).await,
        Ok(ToggleOutcome::Discarded)
    );

    Ok(())
}

#[async_test]
async fn test_commit_after_reload_is_announced_but_not_applied() -> Result<()> {
    let target = target!(Music, 5);

    let mut deps = MockAppDependencies::default();
    let tx = expect_suspended_toggle(&mut deps, target);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .with(predicate::eq(ClientEvent::BookmarkChanged {
            target,
            is_favorite: Some(false),
        }))
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, true)]);

    let (outcome, sent) = tokio::join!(controller.toggle(&list, &target), async {
        list.replace_items(vec![music(5, true), music(7, false)]);
        tx.send(Ok(Some(false)))
            .map_err(|_| anyhow!("Toggle went away"))
    });
    sent?;

    assert_eq!(outcome, Ok(ToggleOutcome::Discarded));
    assert_eq!(list.items(), vec![music(5, true), music(7, false)]);

    Ok(())
}

#[async_test]
async fn test_refresh_overwrites_flag_with_stored_state() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.bookmark_source
        .expect_check_bookmark()
        .times(1)
        .returning(|user_id, target_type, target_id| {
            assert_eq!(user_id, &mock_data::user_id());
            assert_eq!(target_type, BookmarkTargetType::Music);
            assert_eq!(target_id, TargetId::from(5));
            Box::pin(async { Ok(true) })
        });

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, false)]);

    let state = controller.refresh(&list, &target!(Music, 5)).await?;

    assert_eq!(state, Some(true));
    assert_eq!(list.items(), vec![music(5, true)]);

    Ok(())
}

#[async_test]
async fn test_refresh_drops_unbookmarked_item_from_removal_list() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.bookmark_source
        .expect_check_bookmark()
        .times(1)
        .returning(|_, _, _| Box::pin(async { Ok(false) }));

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::removal(vec![music(4, true), music(5, true)]);

    let state = controller.refresh(&list, &target!(Music, 5)).await?;

    assert_eq!(state, Some(false));
    assert_eq!(list.items(), vec![music(4, true)]);

    Ok(())
}

#[async_test]
async fn test_refresh_requires_identity() -> Result<()> {
    let mut deps = MockAppDependencies::signed_out();
    deps.bookmark_source.expect_check_bookmark().never();

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, false)]);

    let err = controller
        .refresh(&list, &target!(Music, 5))
        .await
        .expect_err("Refresh should fail without identity");

    assert_eq!(err.downcast_ref::<NotSignedInError>(), Some(&NotSignedInError));
    assert_eq!(list.items(), vec![music(5, false)]);

    Ok(())
}

#[async_test]
async fn test_refresh_is_skipped_while_toggle_is_pending() -> Result<()> {
    let target = target!(Music, 5);

    let mut deps = MockAppDependencies::default();
    let tx = expect_suspended_toggle(&mut deps, target);

    deps.bookmark_source.expect_check_bookmark().never();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(1)
        .return_const(());

    let controller = BookmarkToggleController::from(&deps.into_deps());
    let list = ListState::flags(vec![music(5, false)]);

    let (outcome, refreshed) = tokio::join!(controller.toggle(&list, &target), async {
        let refreshed = controller.refresh(&list, &target).await?;
        tx.send(Ok(Some(true)))
            .map_err(|_| anyhow!("Toggle went away"))?;
        Ok::<_, anyhow::Error>(refreshed)
    });

    assert_eq!(refreshed?, None);
    assert_eq!(
        outcome,
        Ok(ToggleOutcome::Committed {
            is_favorite: Some(true)
        })
    );

    Ok(())
}
