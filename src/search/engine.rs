use tracing::debug;
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::stats::IndexStats;
use crate::core::types::{Player, UserId};
use crate::index::indices::Indices;
use crate::ops::intersect::SetOps;
use crate::ops::sort::SortKit;
use crate::search::results::UserRatingHit;

/// Read-only query evaluation over finished indices.
///
/// Every call builds its own scratch lists; nothing is carried between calls.
pub struct QueryEngine<'a> {
    indices: &'a Indices,
    min_ratings_for_top: u32,
    user_result_limit: usize,
}

impl<'a> QueryEngine<'a> {
    pub fn new(indices: &'a Indices, config: &Config) -> Self {
        QueryEngine {
            indices,
            min_ratings_for_top: config.min_ratings_for_top,
            user_result_limit: config.user_result_limit,
        }
    }

    /// Ids that no longer resolve to a player are dropped
    fn resolve<I>(&self, ids: I) -> Vec<&'a Player>
    where
        I: IntoIterator<Item = u32>,
    {
        let players = &self.indices.players;
        ids.into_iter()
            .filter_map(|id| players.lookup(id))
            .collect()
    }

    /// Players whose long name starts with `prefix`, best rated first
    pub fn by_name_prefix(&self, prefix: &str) -> Vec<&'a Player> {
        let ids = self.indices.names.search_prefix(prefix).unwrap_or_default();
        let mut hits = self.resolve(ids);
        SortKit::stable_sort_desc_by_rating(&mut hits);

        debug!(prefix, hits = hits.len(), "name prefix query");
        hits
    }

    /// The players a user rated, ordered by the user's own rating and then by
    /// global rating, capped at the configured row limit.
    pub fn by_user(&self, user_id: UserId) -> Result<Vec<UserRatingHit<'a>>> {
        let user = self.indices.users
            .lookup(user_id.value())
            .ok_or_else(|| Error::not_found(format!("user {} not found", user_id)))?;

        let players = &self.indices.players;
        let mut hits: Vec<UserRatingHit<'a>> = user.ratings
            .iter()
            .filter_map(|rating| {
                players
                    .lookup(rating.player_id.value())
                    .map(|player| UserRatingHit { rating, player })
            })
            .collect();

        // Secondary key first; the stable primary sort keeps its order on ties
        SortKit::stable_sort_desc_by(&mut hits, UserRatingHit::global_rating);
        SortKit::stable_sort_desc_by(&mut hits, UserRatingHit::personal_rating);
        hits.truncate(self.user_result_limit);

        debug!(user = user_id.value(), hits = hits.len(), "user query");
        Ok(hits)
    }

    /// The `n` best rated players playing `position`, among players with
    /// enough ratings to count.
    pub fn top_by_position(&self, n: usize, position: &str) -> Vec<&'a Player> {
        if n == 0 {
            return Vec::new();
        }

        // Stored positions are uppercase
        let position = position.to_uppercase();
        let mut hits: Vec<&'a Player> = self.indices.players
            .iter()
            .filter(|player| player.total_ratings >= self.min_ratings_for_top)
            .filter(|player| player.positions.contains(position.as_str()))
            .collect();

        SortKit::stable_sort_desc_by_rating(&mut hits);
        hits.truncate(n);

        debug!(position = %position, n, hits = hits.len(), "top query");
        hits
    }

    /// Players carrying every one of `tags`, best rated first
    pub fn by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&'a Player> {
        let id_lists: Vec<Vec<u32>> = tags
            .iter()
            .map(|tag| {
                self.indices.tags
                    .search_exact(tag.as_ref())
                    .map(<[u32]>::to_vec)
                    .unwrap_or_default()
            })
            .collect();

        let ids = SetOps::intersect_all(id_lists);
        let mut hits = self.resolve(ids);
        SortKit::stable_sort_desc_by_rating(&mut hits);

        debug!(tags = tags.len(), hits = hits.len(), "tags query");
        hits
    }

    pub fn index_stats(&self) -> IndexStats {
        self.indices.stats()
    }
}
