use crate::analyzer::normalizer::normalize;
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_TOP_N: usize = 20;

/// One entry of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Descriptive statistics over one document, a pure function of the raw
/// text. Re-running `analyze` on the same input yields identical results.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    /// Normalized text the counts were derived from (spaces included in
    /// the character count). Kept for downstream prominence rendering.
    pub normalized_text: String,
    pub character_count: usize,
    pub word_count: usize,
    pub unique_word_count: usize,
    /// Full ranked table: descending by count, ties broken by
    /// first-occurrence order.
    pub frequency_table: Vec<WordCount>,
}

impl Statistics {
    /// The first `n` ranked entries, or all of them if fewer exist.
    pub fn top(&self, n: usize) -> &[WordCount] {
        let len = n.min(self.frequency_table.len());
        &self.frequency_table[..len]
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Normalizes, tokenizes, and counts the given raw text.
pub fn analyze(raw_text: &str) -> Statistics {
    let normalized = normalize(raw_text);

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let frequency_table = rank_tokens(&tokens);

    Statistics {
        character_count: normalized.chars().count(),
        word_count: tokens.len(),
        unique_word_count: frequency_table.len(),
        frequency_table,
        normalized_text: normalized,
    }
}

/// Counts distinct tokens and ranks them descending by count.
///
/// Naive unordered maps lose the tie-break order, so counting goes through
/// an insertion-ordered vector: first occurrence fixes a token's slot, and
/// the final stable sort leaves equal counts in first-seen order.
fn rank_tokens(tokens: &[&str]) -> Vec<WordCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut table: Vec<WordCount> = Vec::new();

    for &token in tokens {
        match slots.get(token) {
            Some(&index) => table[index].count += 1,
            None => {
                slots.insert(token, table.len());
                table.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(stats: &Statistics) -> Vec<(&str, usize)> {
        stats
            .frequency_table
            .iter()
            .map(|wc| (wc.word.as_str(), wc.count))
            .collect()
    }

    #[test]
    fn test_hello_world_walkthrough() {
        let stats = analyze("Hello, World! Hello world.");
        assert_eq!(stats.normalized_text, "hello world hello world");
        assert_eq!(stats.character_count, 23);
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.unique_word_count, 2);
        assert_eq!(entries(&stats), vec![("hello", 2), ("world", 2)]);
    }

    #[test]
    fn test_tie_broken_by_first_occurrence() {
        let stats = analyze("a b a c b a");
        assert_eq!(entries(&stats), vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let stats = analyze("");
        assert_eq!(stats.character_count, 0);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.unique_word_count, 0);
        assert!(stats.frequency_table.is_empty());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_punctuation_only_input() {
        let stats = analyze("... !!! ???");
        assert_eq!(stats.word_count, 0);
        // Spaces survive normalization and still count as characters.
        assert_eq!(stats.character_count, 2);
    }

    #[test]
    fn test_word_count_at_least_unique_count() {
        for input in ["a a a", "a b c", "x", "", "the the quick quick quick"] {
            let stats = analyze(input);
            assert!(stats.word_count >= stats.unique_word_count);
        }
    }

    #[test]
    fn test_top_n_truncation() {
        let stats = analyze("a b c d e");
        assert_eq!(stats.top(0).len(), 0);
        assert_eq!(stats.top(3).len(), 3);
        assert_eq!(stats.top(5).len(), 5);
        // Fewer distinct tokens than requested is not an error.
        assert_eq!(stats.top(100).len(), 5);
    }

    #[test]
    fn test_top_n_length_law() {
        let stats = analyze("one two two three three three");
        for k in 0..10 {
            assert_eq!(stats.top(k).len(), k.min(stats.unique_word_count));
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let input = "the quick brown fox jumps over the lazy dog the fox";
        let first = analyze(input);
        let second = analyze(input);
        assert_eq!(first.character_count, second.character_count);
        assert_eq!(first.frequency_table, second.frequency_table);
    }

    #[test]
    fn test_character_count_includes_spaces() {
        let stats = analyze("ab cd");
        assert_eq!(stats.character_count, 5);
    }

    #[test]
    fn test_character_count_is_code_points() {
        let stats = analyze("café");
        assert_eq!(stats.character_count, 4);
    }

    #[test]
    fn test_merged_tokens_counted_as_one() {
        // Normalization policy: punctuation-only boundaries disappear.
        let stats = analyze("end.Start");
        assert_eq!(stats.word_count, 1);
        assert_eq!(entries(&stats), vec![("endstart", 1)]);
    }

    #[test]
    fn test_ranking_descends_by_count() {
        let stats = analyze("z z z y y x w w w w");
        let counts: Vec<usize> = stats.frequency_table.iter().map(|wc| wc.count).collect();
        let mut sorted = counts.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);
        assert_eq!(stats.frequency_table[0].word, "w");
    }
}
