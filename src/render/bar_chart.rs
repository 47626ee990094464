use crate::analyzer::WordCount;

/// Renders a ranked frequency table as a horizontal bar chart.
///
/// One line per entry: left-aligned word, a `#` bar proportional to the
/// count, and the count itself. The most frequent entry gets the full
/// `width`; every entry gets at least one bar character. Deterministic,
/// and empty input renders to an empty string.
pub fn render_bar_chart(table: &[WordCount], width: usize) -> String {
    if table.is_empty() || width == 0 {
        return String::new();
    }

    let max_count = table.iter().map(|wc| wc.count).max().unwrap_or(1).max(1);
    let label_width = table
        .iter()
        .map(|wc| wc.word.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(table.len());
    for entry in table {
        let bar_len = ((entry.count * width) / max_count).max(1);
        lines.push(format!(
            "{:<label_width$}  {} {}",
            entry.word,
            "#".repeat(bar_len),
            entry.count,
        ));
    }

    lines.join("\n")
}
