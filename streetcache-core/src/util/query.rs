/// The escape character used in `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Escape the `LIKE` wildcards in `text` so that they match literally.
pub fn escape_like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// A pattern that matches any text containing `query`.
pub fn substring_like_pattern(query: &str) -> String {
    format!("%{}%", escape_like_pattern(query))
}
