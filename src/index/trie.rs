use std::collections::BTreeMap;

/// Case-insensitive character trie mapping words to lists of integer ids.
///
/// Words are lowercased on the way in and every search lowercases its input
/// too, so case never reaches the tree. Children are kept in a `BTreeMap`,
/// which makes prefix traversal visit words in character order.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end_of_word: bool,
    values: Vec<u32>,   // only filled at terminal nodes, no repeats
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    pub fn insert(&mut self, word: &str, value: u32) {
        let mut node = &mut self.root;
        for ch in word.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_end_of_word {
            node.is_end_of_word = true;
            self.words += 1;
        }

        if !node.values.contains(&value) {
            node.values.push(value);
        }
    }

    fn find(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in word.to_lowercase().chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Ids stored under exactly `word`
    pub fn search_exact(&self, word: &str) -> Option<&[u32]> {
        self.find(word)
            .filter(|node| node.is_end_of_word)
            .map(|node| node.values.as_slice())
    }

    /// Ids of every word starting with `prefix`, in pre-order.
    ///
    /// Lists from different words are concatenated as-is, so an id stored
    /// under two matching words shows up twice.
    pub fn search_prefix(&self, prefix: &str) -> Option<Vec<u32>> {
        let node = self.find(prefix)?;
        let mut values = Vec::new();
        Self::collect_values(node, &mut values);

        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    fn collect_values(node: &TrieNode, out: &mut Vec<u32>) {
        if node.is_end_of_word {
            out.extend_from_slice(&node.values);
        }
        for child in node.children.values() {
            Self::collect_values(child, out);
        }
    }

    /// Number of distinct words inserted
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_exact_search() {
        let mut trie = Trie::new();
        trie.insert("Messi", 10);
        trie.insert("Messias", 20);

        let mut both = trie.search_prefix("Mess").unwrap();
        both.sort();
        assert_eq!(both, vec![10, 20]);

        assert_eq!(trie.search_exact("Messi"), Some(&[10][..]));
        assert_eq!(trie.search_exact("Mess"), None);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut trie = Trie::new();
        trie.insert("Ronaldo", 7);

        assert_eq!(trie.search_exact("RONALDO"), Some(&[7][..]));
        assert_eq!(trie.search_exact("ronaldo"), Some(&[7][..]));
        assert_eq!(trie.search_prefix("rOn"), Some(vec![7]));
    }

    #[test]
    fn repeated_insert_keeps_one_value() {
        let mut trie = Trie::new();
        trie.insert("Dribbler", 5);
        trie.insert("dribbler", 5);
        trie.insert("DRIBBLER", 6);

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.search_exact("dribbler"), Some(&[5, 6][..]));
    }

    #[test]
    fn prefix_results_keep_duplicates_across_words() {
        let mut trie = Trie::new();
        trie.insert("Neymar", 1);
        trie.insert("Neymar Jr", 1);

        assert_eq!(trie.search_prefix("ney"), Some(vec![1, 1]));
    }

    #[test]
    fn prefix_traversal_is_preorder_by_character() {
        let mut trie = Trie::new();
        trie.insert("abc", 3);
        trie.insert("ab", 2);
        trie.insert("abd", 4);
        trie.insert("aba", 1);

        assert_eq!(trie.search_prefix("ab"), Some(vec![2, 1, 3, 4]));
    }

    #[test]
    fn missing_paths_report_nothing() {
        let mut trie = Trie::new();
        trie.insert("Kaká", 9);

        assert_eq!(trie.search_prefix("kx"), None);
        assert_eq!(trie.search_exact("kak"), None);
        assert_eq!(trie.search_exact("kaká"), Some(&[9][..]));
        assert_eq!(trie.search_prefix("KAKÁ"), Some(vec![9]));
    }

    #[test]
    fn empty_prefix_collects_everything() {
        let mut trie = Trie::new();
        assert_eq!(trie.search_prefix(""), None);
        assert!(trie.is_empty());

        trie.insert("b", 2);
        trie.insert("a", 1);
        assert_eq!(trie.search_prefix(""), Some(vec![1, 2]));
    }

    #[test]
    fn punctuation_and_spaces_are_plain_characters() {
        let mut trie = Trie::new();
        trie.insert("N'Golo Kanté", 215914);
        trie.insert("Distance Shooter", 3);

        assert_eq!(trie.search_prefix("n'golo k"), Some(vec![215914]));
        assert_eq!(trie.search_exact("distance shooter"), Some(&[3][..]));
    }
}
