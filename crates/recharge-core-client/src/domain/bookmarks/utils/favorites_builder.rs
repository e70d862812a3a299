// recharge-core-client/recharge-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::domain::bookmarks::models::{
    BookmarkRecord, BookmarkTarget, BookmarkTargetType, FavoriteCollections, FavoriteItem,
    FavoritesError, MoviePostRecord, MusicPostRecord, UnknownTargetPolicy,
};
use crate::domain::shared::models::TargetId;

/// Returns the ids of all bookmarks of the post type `r#type`.
pub fn post_ids(bookmarks: &[BookmarkRecord], r#type: BookmarkTargetType) -> HashSet<TargetId> {
    bookmarks
        .iter()
        .filter_map(|record| record.target())
        .filter(|target| target.r#type == r#type)
        .map(|target| target.id)
        .collect()
}

/// Groups `bookmarks` into the movie and music tabs.
///
/// Bookmarks that carry their own display fields keep the order of `bookmarks`. Post
/// bookmarks are resolved against `movie_posts` and `music_posts` and appended in the order
/// of those collections. Every recognized bookmark ends up in exactly one bucket, at most once.
pub fn build_favorite_collections(
    bookmarks: &[BookmarkRecord],
    movie_posts: &[MoviePostRecord],
    music_posts: &[MusicPostRecord],
    policy: UnknownTargetPolicy,
) -> Result<FavoriteCollections, FavoritesError> {
    let mut collections = FavoriteCollections::default();
    let mut seen = HashSet::new();
    let mut post_targets = HashSet::new();

    for record in bookmarks {
        let Some(target) = record.target() else {
            match policy {
                UnknownTargetPolicy::Lenient => {
                    debug!(
                        "Ignoring bookmark {} of unknown type '{}'.",
                        record.bookmark_target_id, record.bookmark_target_type
                    );
                    continue;
                }
                UnknownTargetPolicy::Strict => {
                    return Err(FavoritesError::UnrecognizedTargetType {
                        target_type: record.bookmark_target_type.clone(),
                        id: record.bookmark_target_id,
                    })
                }
            }
        };

        if target.r#type.is_post() {
            post_targets.insert(target);
            continue;
        }

        if !seen.insert(target) {
            continue;
        }
        if let Some(item) = FavoriteItem::from_bookmark(record) {
            collections.bucket_mut(target.r#type.bucket()).push(item);
        }
    }

    collections.movies.extend(
        movie_posts
            .iter()
            .filter(|post| {
                post_targets.contains(&BookmarkTarget::new(
                    BookmarkTargetType::MoviePost,
                    post.movie_post_id,
                ))
            })
            .unique_by(|post| post.movie_post_id)
            .map(FavoriteItem::from),
    );
    collections.music.extend(
        music_posts
            .iter()
            .filter(|post| {
                post_targets.contains(&BookmarkTarget::new(
                    BookmarkTargetType::MusicPost,
                    post.music_post_id,
                ))
            })
            .unique_by(|post| post.music_post_id)
            .map(FavoriteItem::from),
    );

    Ok(collections)
}
