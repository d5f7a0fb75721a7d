const AUTHOR_SEPARATOR: &str = ": ";

/// Strip an "Author: " style prefix from a Reddit title, keeping only the
/// text after the last separator. An empty suffix yields an empty string.
pub fn sanitize_title(raw: &str) -> String {
    match raw.rsplit_once(AUTHOR_SEPARATOR) {
        Some((_, title)) => title.to_string(),
        None => raw.to_string(),
    }
}
