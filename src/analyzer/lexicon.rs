//! Valence lexicon: loading, parsing, and the bundled default.
//!
//! The on-disk format is the tab-separated layout used by the original
//! VADER distribution: `token<TAB>mean_valence<TAB>stddev[<TAB>...]`.
//! Only the first two columns are consumed; anything after them is
//! ignored so files carrying per-rater columns load unchanged. Lines
//! that do not parse are skipped rather than failing the whole load,
//! but a file that yields zero entries is rejected.

use std::collections::HashMap;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::error::Error;

/// Lexicon text compiled into the binary.
const BUNDLED_LEXICON: &str = include_str!("../../data/lexicon.txt");

lazy_static! {
    static ref BUNDLED: Arc<Lexicon> = Arc::new(
        Lexicon::parse(BUNDLED_LEXICON)
            .expect("bundled lexicon data is well-formed"),
    );
}

/// Token-to-valence map backing the analyzer.
///
/// Valences are on the conventional -4..=4 scale; the analyzer owns the
/// normalization into [-1, 1]. Lookups are case-insensitive (tokens are
/// stored lowercased).
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// Shared handle to the lexicon compiled into the binary.
    pub fn bundled() -> Arc<Self> {
        Arc::clone(&BUNDLED)
    }

    /// Parse lexicon data from a string in the tab-separated format.
    pub fn parse(data: &str) -> Result<Self, Error> {
        let mut valences = HashMap::new();
        for line in data.lines() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(token), Some(raw_valence)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Ok(valence) = raw_valence.trim().parse::<f64>() else {
                continue;
            };
            valences.insert(token.trim().to_lowercase(), valence);
        }
        if valences.is_empty() {
            return Err(Error::Lexicon(
                "lexicon data contains no usable entries".to_string(),
            ));
        }
        Ok(Self { valences })
    }

    /// Load a lexicon from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut data = String::new();
        BufReader::new(reader).read_to_string(&mut data)?;
        Self::parse(&data)
    }

    /// Load a lexicon file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&data)
    }

    /// Fetch a lexicon over HTTPS once and cache it on disk.
    ///
    /// If `cache_path` already exists it is loaded as-is and no request
    /// is made. The download uses a TLS-verified client; there is no
    /// insecure fallback. A failed download leaves no partial cache
    /// file behind.
    pub async fn ensure_cached<P: AsRef<Path>>(url: &str, cache_path: P) -> Result<Self, Error> {
        let cache_path = cache_path.as_ref();
        if cache_path.exists() {
            tracing::debug!(path = %cache_path.display(), "using cached lexicon");
            return Self::from_path(cache_path);
        }

        tracing::info!(url, "fetching lexicon");
        let body = reqwest::get(url).await?.error_for_status()?.text().await?;
        // Validate before writing so a bad response never poisons the cache.
        let lexicon = Self::parse(&body)?;
        if let Some(parent) = cache_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(cache_path, &body)?;
        tracing::info!(path = %cache_path.display(), entries = lexicon.len(), "lexicon cached");
        Ok(lexicon)
    }

    /// Valence for a token, looked up case-insensitively.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(&token.to_lowercase()).copied()
    }

    /// True if the token has an entry.
    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(&token.to_lowercase())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// True if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    /// Insert or replace a single entry. Used by tests and callers that
    /// layer domain terms on top of a base lexicon.
    pub fn insert(&mut self, token: &str, valence: f64) {
        self.valences.insert(token.to_lowercase(), valence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_lexicon_loads() {
        let lexicon = Lexicon::bundled();
        assert!(lexicon.len() > 100);
        assert!(lexicon.valence("love").unwrap() > 0.0);
        assert!(lexicon.valence("disappointed").unwrap() < 0.0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lexicon = Lexicon::bundled();
        assert_eq!(lexicon.valence("LOVE"), lexicon.valence("love"));
    }

    #[test]
    fn parse_skips_malformed_lines() {
        let data = "good\t1.9\t0.9\nnonsense line without tabs\nbad\t-2.5\t0.7\nnot-a-number\tNaNope\t0.1\n";
        let lexicon = Lexicon::parse(data).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.valence("good"), Some(1.9));
        assert_eq!(lexicon.valence("bad"), Some(-2.5));
    }

    #[test]
    fn parse_ignores_extra_columns_and_comments() {
        let data = "# header\nhappy\t2.7\t0.8\t[3, 2, 3, 3, 2]\n";
        let lexicon = Lexicon::parse(data).unwrap();
        assert_eq!(lexicon.valence("happy"), Some(2.7));
    }

    #[test]
    fn empty_data_is_rejected() {
        assert!(matches!(Lexicon::parse(""), Err(Error::Lexicon(_))));
        assert!(matches!(
            Lexicon::parse("no tabs here at all\n"),
            Err(Error::Lexicon(_))
        ));
    }

    #[test]
    fn from_path_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "great\t3.1\t0.7").unwrap();
        let lexicon = Lexicon::from_path(file.path()).unwrap();
        assert_eq!(lexicon.valence("great"), Some(3.1));
    }
}
