//! Basename extraction from the URL path component.

/// Returns the last non-empty path segment of `url`, if any.
///
/// `None` when the URL does not parse or the path is empty/root-only.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed
        .path()
        .split('/')
        .rev()
        .find(|s| !s.is_empty())?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
