use serde::{Serialize, Deserialize};

/// Chain occupancy of one `HashIndex`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChainStats {
    pub table_size: usize,
    pub entries: usize,
    pub max_chain_length: usize,
    pub avg_chain_length: f64,      // over non-empty chains only
    pub empty_chains: usize,
}

impl ChainStats {
    pub fn load_factor(&self) -> f64 {
        if self.table_size == 0 {
            return 0.0;
        }
        self.entries as f64 / self.table_size as f64
    }
}

/// Snapshot of every built index, reported by the `stats` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub players: ChainStats,
    pub users: ChainStats,
    pub distinct_names: usize,
    pub distinct_tags: usize,
}

/// Counters collected while the indices are built
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestReport {
    pub players: usize,
    pub ratings: usize,
    pub users: usize,
    pub tags: usize,
    pub unknown_player_ratings: usize,   // rating rows naming no indexed player
    pub duplicate_players: usize,
    pub malformed_players: usize,
    pub malformed_ratings: usize,
    pub malformed_tags: usize,
    pub elapsed_ms: u64,
}

impl IngestReport {
    pub fn malformed_total(&self) -> usize {
        self.malformed_players + self.malformed_ratings + self.malformed_tags
    }
}
