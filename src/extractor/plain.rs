use crate::error::Result;
use crate::extractor::RawText;

/// Decodes plain-text bytes as strict UTF-8.
///
/// Invalid byte sequences fail with a `Decode` error; nothing is silently
/// replaced.
pub fn extract(content: &[u8]) -> Result<RawText> {
    let text = std::str::from_utf8(content)?;
    Ok(text.to_string())
}
