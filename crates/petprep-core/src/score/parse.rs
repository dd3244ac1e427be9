//! Prediction response parsing.
//!
//! The scoring service answers with a JSON-ish string whose payload embeds
//! a bracketed, comma-separated label list. Labels are recovered by slicing
//! the first `[...]` span and stripping the surrounding punctuation; bodies
//! without a bracketed list yield no labels rather than an error.

/// Extracts label strings from a scoring response body.
pub fn parse_labels(body: &str) -> Vec<String> {
    let Some(open) = body.find('[') else {
        return Vec::new();
    };
    let rest = &body[open + 1..];
    let list = match rest.find(']') {
        Some(close) => &rest[..close],
        None => rest,
    };

    list.split(',')
        .map(clean_label)
        .filter(|s| !s.is_empty())
        .collect()
}

fn clean_label(raw: &str) -> String {
    let unescaped: String = raw.chars().filter(|c| *c != '\\').collect();
    unescaped
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '{' | '}'))
        .to_string()
}
