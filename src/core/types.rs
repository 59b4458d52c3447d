use std::fmt;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl PlayerId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl UserId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Items stored in a `HashIndex` expose the integer key they are chained by.
pub trait Keyed {
    fn key(&self) -> u32;
}

/// Records that can be ranked by a numeric rating.
pub trait Rated {
    fn rating(&self) -> f64;
}

impl<T: Rated + ?Sized> Rated for &T {
    fn rating(&self) -> f64 {
        (**self).rating()
    }
}

/// One row of the player stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: u32,
    pub short_name: String,
    pub long_name: String,
    pub positions: String,
    pub nationality: String,
    pub club_name: String,
    pub league_name: String,
}

/// One row of the rating stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: u32,
    pub player_id: u32,
    pub rating: f64,
}

/// One row of the tag stream, minus the unused leading column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub player_id: u32,
    pub tag: String,
}

/// A player while ratings are still being accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDraft {
    pub record: PlayerRecord,
    pub rating_sum: f64,
    pub rating_count: u32,
}

impl PlayerDraft {
    pub fn new(record: PlayerRecord) -> Self {
        PlayerDraft {
            record,
            rating_sum: 0.0,
            rating_count: 0,
        }
    }

    pub fn add_rating(&mut self, value: f64) {
        self.rating_sum += value;
        self.rating_count += 1;
    }

    /// Turn the running sum into the mean rating. Unrated players get 0.
    pub fn finalize_mean(self) -> Player {
        let rating = if self.rating_count > 0 {
            self.rating_sum / self.rating_count as f64
        } else {
            0.0
        };

        let PlayerRecord { id, short_name, long_name, positions, nationality, club_name, league_name } =
            self.record;

        Player {
            id: PlayerId(id),
            short_name,
            long_name,
            positions,
            nationality,
            club_name,
            league_name,
            total_ratings: self.rating_count,
            rating,
        }
    }
}

impl Keyed for PlayerDraft {
    fn key(&self) -> u32 {
        self.record.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub short_name: String,
    pub long_name: String,
    pub positions: String,     // e.g. "ST,CF"
    pub nationality: String,
    pub club_name: String,
    pub league_name: String,
    pub total_ratings: u32,
    pub rating: f64,           // mean of all user ratings
}

impl Keyed for Player {
    fn key(&self) -> u32 {
        self.id.0
    }
}

impl Rated for Player {
    fn rating(&self) -> f64 {
        self.rating
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rating {
    pub player_id: PlayerId,
    pub value: f64,
}

impl Rated for Rating {
    fn rating(&self) -> f64 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub ratings: Vec<Rating>,  // ingestion order, repeats kept
}

impl User {
    pub fn new(id: UserId) -> Self {
        User {
            id,
            ratings: Vec::new(),
        }
    }
}

impl Keyed for User {
    fn key(&self) -> u32 {
        self.id.0
    }
}
