//! Display text helpers.

/// Truncates `text` to at most `max_chars` characters, appending `...` when
/// anything was cut. Counts Unicode scalar values, not bytes.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::truncate_text;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_text("card", 10), "card");
        assert_eq!(truncate_text("card", 4), "card");
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
    }
}
