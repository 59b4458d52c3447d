use serde::Serialize;
use crate::core::types::{Player, Rating};

/// A player rated by a user, next to the rating that user gave
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserRatingHit<'a> {
    pub rating: &'a Rating,
    pub player: &'a Player,
}

impl<'a> UserRatingHit<'a> {
    pub fn personal_rating(&self) -> f64 {
        self.rating.value
    }

    pub fn global_rating(&self) -> f64 {
        self.player.rating
    }
}
