use std::io::Write;
use crate::core::error::Result;
use crate::core::types::Player;
use crate::search::results::UserRatingHit;

const ID_WIDTH: usize = 6;
const SHORT_NAME_WIDTH: usize = 20;
const LONG_NAME_WIDTH: usize = 40;
const POSITIONS_WIDTH: usize = 15;
const NATIONALITY_WIDTH: usize = 15;
const CLUB_WIDTH: usize = 25;
const LEAGUE_WIDTH: usize = 30;
const COUNT_WIDTH: usize = 6;
const RATING_WIDTH: usize = 9;

/// Which player columns to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerLayout {
    /// id, names, positions, rating, count
    Compact,
    /// every player column
    Full,
}

/// Fixed-width, right-aligned result tables
pub struct TableRenderer;

impl TableRenderer {
    pub fn players<W: Write>(out: &mut W, players: &[&Player], layout: PlayerLayout) -> Result<()> {
        match layout {
            PlayerLayout::Compact => writeln!(
                out,
                "{:>ID_WIDTH$} {:>SHORT_NAME_WIDTH$} {:>LONG_NAME_WIDTH$} {:>POSITIONS_WIDTH$} {:>RATING_WIDTH$} {:>COUNT_WIDTH$}",
                "id", "short_name", "long_name", "positions", "rating", "count"
            )?,
            PlayerLayout::Full => writeln!(
                out,
                "{:>ID_WIDTH$} {:>SHORT_NAME_WIDTH$} {:>LONG_NAME_WIDTH$} {:>POSITIONS_WIDTH$} {:>NATIONALITY_WIDTH$} {:>CLUB_WIDTH$} {:>LEAGUE_WIDTH$} {:>RATING_WIDTH$} {:>COUNT_WIDTH$}",
                "id", "short_name", "long_name", "positions", "nationality", "club", "league", "rating", "count"
            )?,
        }

        for p in players {
            match layout {
                PlayerLayout::Compact => writeln!(
                    out,
                    "{:>ID_WIDTH$} {:>SHORT_NAME_WIDTH$} {:>LONG_NAME_WIDTH$} {:>POSITIONS_WIDTH$} {:>RATING_WIDTH$.6} {:>COUNT_WIDTH$}",
                    p.id.value(), p.short_name, p.long_name, p.positions, p.rating, p.total_ratings
                )?,
                PlayerLayout::Full => writeln!(
                    out,
                    "{:>ID_WIDTH$} {:>SHORT_NAME_WIDTH$} {:>LONG_NAME_WIDTH$} {:>POSITIONS_WIDTH$} {:>NATIONALITY_WIDTH$} {:>CLUB_WIDTH$} {:>LEAGUE_WIDTH$} {:>RATING_WIDTH$.6} {:>COUNT_WIDTH$}",
                    p.id.value(), p.short_name, p.long_name, p.positions, p.nationality,
                    p.club_name, p.league_name, p.rating, p.total_ratings
                )?,
            }
        }

        Ok(())
    }

    pub fn user_ratings<W: Write>(out: &mut W, hits: &[UserRatingHit<'_>]) -> Result<()> {
        writeln!(
            out,
            "{:>ID_WIDTH$} {:>SHORT_NAME_WIDTH$} {:>LONG_NAME_WIDTH$} {:>RATING_WIDTH$} {:>COUNT_WIDTH$} {:>RATING_WIDTH$}",
            "id", "short_name", "long_name", "global", "count", "rating"
        )?;

        for hit in hits {
            writeln!(
                out,
                "{:>ID_WIDTH$} {:>SHORT_NAME_WIDTH$} {:>LONG_NAME_WIDTH$} {:>RATING_WIDTH$.6} {:>COUNT_WIDTH$} {:>RATING_WIDTH$.1}",
                hit.rating.player_id.value(),
                hit.player.short_name,
                hit.player.long_name,
                hit.player.rating,
                hit.player.total_ratings,
                hit.rating.value
            )?;
        }

        Ok(())
    }
}
