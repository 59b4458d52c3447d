use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::ChainStats;
use crate::core::types::Keyed;
use crate::index::hasher::PolynomialHasher;

/// Fixed-size hash table with separate chaining.
///
/// The bucket count is chosen once and never changes. Inserts do not check
/// for an existing key: a repeated key gets a second entry further down the
/// same chain, and lookups always return the entry appended first.
#[derive(Debug, Clone)]
pub struct HashIndex<T> {
    chains: Vec<Vec<T>>,
    len: usize,
}

impl<T: Keyed> HashIndex<T> {
    pub fn new(table_size: usize) -> Result<Self> {
        if table_size == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "HashIndex table size must be non-zero".to_string(),
            ));
        }

        let mut chains = Vec::with_capacity(table_size);
        chains.resize_with(table_size, Vec::new);
        Ok(HashIndex { chains, len: 0 })
    }

    fn chain_of(&self, key: u32) -> usize {
        PolynomialHasher::default().hash(key as u64, self.chains.len() as u64) as usize
    }

    pub fn insert(&mut self, item: T) {
        let chain = self.chain_of(item.key());
        self.chains[chain].push(item);
        self.len += 1;
    }

    pub fn lookup(&self, key: u32) -> Option<&T> {
        let chain = self.chain_of(key);
        self.chains[chain].iter().find(|item| item.key() == key)
    }

    pub fn lookup_mut(&mut self, key: u32) -> Option<&mut T> {
        let chain = self.chain_of(key);
        self.chains[chain].iter_mut().find(|item| item.key() == key)
    }

    /// All entries, chain by chain, in append order within each chain
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.chains.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn table_size(&self) -> usize {
        self.chains.len()
    }

    /// Convert every entry, keeping each one in the chain it came from.
    /// `f` must preserve the key.
    pub fn map<U: Keyed, F: FnMut(T) -> U>(self, mut f: F) -> HashIndex<U> {
        let chains = self.chains
            .into_iter()
            .map(|chain| chain.into_iter().map(&mut f).collect())
            .collect();

        HashIndex { chains, len: self.len }
    }

    pub fn stats(&self) -> ChainStats {
        let mut stats = ChainStats {
            table_size: self.table_size(),
            ..ChainStats::default()
        };

        for chain in &self.chains {
            if chain.is_empty() {
                stats.empty_chains += 1;
            } else {
                stats.entries += chain.len();
                stats.max_chain_length = stats.max_chain_length.max(chain.len());
            }
        }

        let occupied = stats.table_size - stats.empty_chains;
        if occupied > 0 {
            stats.avg_chain_length = stats.entries as f64 / occupied as f64;
        }

        stats
    }
}
