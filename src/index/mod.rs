pub mod hasher;
pub mod hash_index;
pub mod trie;
pub mod indices;
