//! Breed filename pattern.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `<breed>_<index>.jpg`, anchored at both ends. The breed capture
/// is greedy, so `american_pit_bull_terrier_12.jpg` yields the full breed
/// name with only the trailing `_12` stripped.
static BREED_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/]+)_(\d+)\.jpg$").expect("invalid breed pattern"));

/// A filename successfully split into breed label and image index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedImage {
    pub breed: String,
    pub index: u64,
}

/// Parses `filename` as `<breed>_<index>.jpg`; `None` when it doesn't match.
pub fn parse_breed_filename(filename: &str) -> Option<BreedImage> {
    let caps = BREED_FILENAME.captures(filename)?;
    let breed = caps.get(1)?.as_str().to_string();
    let index = caps.get(2)?.as_str().parse().ok()?;
    Some(BreedImage { breed, index })
}
