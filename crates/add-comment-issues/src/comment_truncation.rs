//! Size enforcement for GitHub comment bodies.

/// GitHub rejects comment bodies above 64 KiB; 60 KiB leaves headroom.
pub const GITHUB_COMMENT_MAX_BYTES: usize = 61_440;
pub const TRUNCATION_NOTICE: &str = "\n\n[Comment was truncated due to GitHub's size limit]";

/// Returns `body` unchanged when its UTF-8 size fits the ceiling, otherwise
/// the longest 90%-shrunk prefix that fits together with [`TRUNCATION_NOTICE`].
pub fn truncate_comment_body(body: &str) -> String {
    if body.len() <= GITHUB_COMMENT_MAX_BYTES {
        return body.to_string();
    }

    let mut kept = body;
    let mut kept_chars = body.chars().count();
    while kept.len() + TRUNCATION_NOTICE.len() > GITHUB_COMMENT_MAX_BYTES {
        kept_chars = kept_chars * 9 / 10;
        kept = prefix_by_chars(kept, kept_chars);
    }
    format!("{kept}{TRUNCATION_NOTICE}")
}

fn prefix_by_chars(text: &str, char_count: usize) -> &str {
    match text.char_indices().nth(char_count) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
