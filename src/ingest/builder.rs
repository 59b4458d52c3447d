use std::time::Instant;
use tracing::{debug, info, warn};
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::IngestReport;
use crate::core::types::{PlayerDraft, PlayerRecord, Rating, RatingRecord, TagRecord, User, UserId, PlayerId};
use crate::index::hash_index::HashIndex;
use crate::index::indices::Indices;
use crate::index::trie::Trie;

/// Which record streams have been ingested so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Empty,
    Players,
    Ratings,
}

/// One-shot builder for every index the queries read.
///
/// Players go in first, then ratings (which need the players to exist), and
/// tags at any point before `finish`. Calls out of that order are rejected
/// with `ErrorKind::InvalidInput`. `finish` turns the accumulated rating sums
/// into means and fills the name trie from the finished player index.
pub struct IndexBuilder {
    players: HashIndex<PlayerDraft>,
    users: HashIndex<User>,
    tags: Trie,
    report: IngestReport,
    phase: Phase,
    started: Instant,
}

impl IndexBuilder {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_table_sizes(config.player_table_size, config.user_table_size)
    }

    pub fn with_table_sizes(player_table_size: usize, user_table_size: usize) -> Result<Self> {
        Ok(IndexBuilder {
            players: HashIndex::new(player_table_size)?,
            users: HashIndex::new(user_table_size)?,
            tags: Trie::new(),
            report: IngestReport::default(),
            phase: Phase::Empty,
            started: Instant::now(),
        })
    }

    /// May be called several times, but not once ratings have been ingested.
    pub fn ingest_players<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<PlayerRecord>>,
    {
        if self.phase == Phase::Ratings {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "players must be ingested before ratings".to_string(),
            ));
        }
        self.phase = Phase::Players;

        for record in records {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    debug!(error = %e, "skipping malformed player record");
                    self.report.malformed_players += 1;
                    continue;
                }
            };

            // The index keeps duplicates, so uniqueness is checked here
            if self.players.lookup(record.id).is_some() {
                debug!(player_id = record.id, "skipping duplicate player record");
                self.report.duplicate_players += 1;
                continue;
            }

            self.players.insert(PlayerDraft::new(record));
            self.report.players += 1;
        }

        info!(players = self.report.players, malformed = self.report.malformed_players, "players indexed");
        Ok(())
    }

    /// Fails if no player stream has been ingested yet.
    pub fn ingest_ratings<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<RatingRecord>>,
    {
        if self.phase == Phase::Empty {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "ratings need the players to be ingested first".to_string(),
            ));
        }
        self.phase = Phase::Ratings;

        for record in records {
            match record {
                // NaN and infinities count as malformed
                Ok(record) if !record.rating.is_finite() => {
                    debug!(user_id = record.user_id, player_id = record.player_id, "skipping non-finite rating");
                    self.report.malformed_ratings += 1;
                }
                Ok(record) => self.add_rating(record),
                Err(e) => {
                    debug!(error = %e, "skipping malformed rating record");
                    self.report.malformed_ratings += 1;
                }
            }
        }

        info!(
            ratings = self.report.ratings,
            users = self.report.users,
            unknown_players = self.report.unknown_player_ratings,
            malformed = self.report.malformed_ratings,
            "ratings indexed"
        );
        Ok(())
    }

    fn add_rating(&mut self, record: RatingRecord) {
        let rating = Rating {
            player_id: PlayerId(record.player_id),
            value: record.rating,
        };

        match self.users.lookup_mut(record.user_id) {
            Some(user) => user.ratings.push(rating),
            None => {
                let mut user = User::new(UserId(record.user_id));
                user.ratings.push(rating);
                self.users.insert(user);
                self.report.users += 1;
            }
        }

        match self.players.lookup_mut(record.player_id) {
            Some(player) => player.add_rating(record.rating),
            None => self.report.unknown_player_ratings += 1,
        }

        self.report.ratings += 1;
    }

    pub fn ingest_tags<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Result<TagRecord>>,
    {
        for record in records {
            match record {
                Ok(record) => {
                    self.tags.insert(&record.tag, record.player_id);
                    self.report.tags += 1;
                }
                Err(e) => {
                    debug!(error = %e, "skipping malformed tag record");
                    self.report.malformed_tags += 1;
                }
            }
        }

        info!(tags = self.report.tags, distinct = self.tags.len(), malformed = self.report.malformed_tags, "tags indexed");
    }

    /// Finalize rating means, build the name trie and hand over the indices.
    pub fn finish(self) -> (Indices, IngestReport) {
        let IndexBuilder { players, users, tags, mut report, started, phase: _ } = self;

        let players = players.map(PlayerDraft::finalize_mean);

        let mut names = Trie::new();
        for player in players.iter() {
            names.insert(&player.long_name, player.id.value());
        }

        report.elapsed_ms = started.elapsed().as_millis() as u64;

        if report.malformed_total() > 0 {
            warn!(
                players = report.malformed_players,
                ratings = report.malformed_ratings,
                tags = report.malformed_tags,
                "malformed records were skipped"
            );
        }
        info!(elapsed_ms = report.elapsed_ms, names = names.len(), "indices ready");

        (Indices { players, users, names, tags }, report)
    }
}
