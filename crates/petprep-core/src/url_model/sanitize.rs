//! Filename sanitization for Linux filesystems.

/// Maximum filename length in bytes (Linux NAME_MAX).
const NAME_MAX: usize = 255;

/// Makes a candidate filename safe to create inside a directory.
///
/// Path separators, NUL, control characters, and whitespace become `_`
/// (runs collapsed to one); leading/trailing dots, spaces, and underscores
/// are trimmed; the result is truncated to 255 bytes on a char boundary.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let safe = !(c == '/' || c == '\\' || c == '\0' || c.is_control() || c.is_whitespace());
        if safe {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }

    let trimmed = out.trim_matches(|c| matches!(c, '.' | ' ' | '_'));
    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }
    let mut cut = NAME_MAX;
    while !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    trimmed[..cut].to_string()
}
