use crate::core::stats::IndexStats;
use crate::core::types::{Player, User};
use crate::index::hash_index::HashIndex;
use crate::index::trie::Trie;

/// Everything the query side reads. Produced once by `IndexBuilder::finish`.
#[derive(Debug)]
pub struct Indices {
    pub players: HashIndex<Player>,
    pub users: HashIndex<User>,
    pub names: Trie,        // long name -> player ids
    pub tags: Trie,         // tag -> player ids
}

impl Indices {
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            players: self.players.stats(),
            users: self.users.stats(),
            distinct_names: self.names.len(),
            distinct_tags: self.tags.len(),
        }
    }
}
