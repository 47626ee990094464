use crate::analyzer::WordCount;

/// Highest repeat factor a word can receive in the crowd.
const MAX_WEIGHT: usize = 5;

/// Renders a ranked frequency table as a word-prominence crowd.
///
/// A text stand-in for a word-cloud image: each ranked word is repeated in
/// proportion to its relative frequency (one to five times) and the stream
/// is wrapped at `width` columns. Words appear in rank order, so the output
/// is fully deterministic.
pub fn render_word_crowd(table: &[WordCount], width: usize) -> String {
    if table.is_empty() || width == 0 {
        return String::new();
    }

    let max_count = table.iter().map(|wc| wc.count).max().unwrap_or(1).max(1);

    let mut words: Vec<&str> = Vec::new();
    for entry in table {
        let weight = ((entry.count * MAX_WEIGHT) / max_count).max(1);
        for _ in 0..weight {
            words.push(&entry.word);
        }
    }

    wrap(&words, width)
}

/// Greedy wrap at `width` columns. A word longer than the width still gets
/// a line of its own rather than being split.
fn wrap(words: &[&str], width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in words {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, usize)]) -> Vec<WordCount> {
        pairs
            .iter()
            .map(|&(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect()
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(render_word_crowd(&[], 40), "");
    }

    #[test]
    fn test_top_word_repeated_max_weight_times() {
        let crowd = render_word_crowd(&table(&[("hello", 10), ("rare", 1)]), 200);
        let hellos = crowd.split_whitespace().filter(|w| *w == "hello").count();
        assert_eq!(hellos, MAX_WEIGHT);
    }

    #[test]
    fn test_every_word_appears_at_least_once() {
        let crowd = render_word_crowd(&table(&[("common", 1000), ("rare", 1)]), 200);
        assert!(crowd.contains("rare"));
    }

    #[test]
    fn test_lines_respect_width() {
        let crowd = render_word_crowd(
            &table(&[("alpha", 5), ("beta", 3), ("gamma", 2), ("delta", 1)]),
            20,
        );
        for line in crowd.lines() {
            assert!(line.chars().count() <= 20, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let crowd = render_word_crowd(&table(&[("extraordinarily", 1)]), 5);
        assert_eq!(crowd, "extraordinarily");
    }

    #[test]
    fn test_rank_order_is_preserved() {
        let crowd = render_word_crowd(&table(&[("first", 2), ("second", 1)]), 200);
        let flat = crowd.replace('\n', " ");
        assert!(flat.find("first").unwrap() < flat.find("second").unwrap());
    }

    #[test]
    fn test_deterministic() {
        let t = table(&[("a", 3), ("b", 2), ("c", 1)]);
        assert_eq!(render_word_crowd(&t, 30), render_word_crowd(&t, 30));
    }
}
