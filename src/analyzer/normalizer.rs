/// Normalizes raw text for counting: lowercases the whole string, then
/// removes every ASCII punctuation character.
///
/// Punctuation is removed, not replaced with a space. Tokens separated only
/// by punctuation therefore merge ("end.Start" becomes "endstart"). This is
/// the accepted normalization policy; the tests pin it so it cannot change
/// silently.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
