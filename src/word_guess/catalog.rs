use crate::assets::{PHRASES_ASSET, get_asset_bytes};
use crate::error::CatalogError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;

/// Non-empty list of uppercase phrases to draw rounds from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCatalog {
    phrases: Vec<String>,
}

impl PhraseCatalog {
    pub fn new<I, S>(phrases: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(PhraseCatalog { phrases })
    }

    /// Parses one phrase per line, skipping blank lines and `#` comments
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// The catalog embedded in the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        let bytes = get_asset_bytes(PHRASES_ASSET).ok_or(CatalogError::MissingAsset(PHRASES_ASSET))?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Picks a phrase uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        // Construction guarantees at least one phrase
        self.phrases.choose(rng).map(String::as_str).unwrap_or_default()
    }
}

// Uppercase with runs of whitespace collapsed to single spaces
fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
