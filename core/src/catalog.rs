//! Fixed list of video file ids the bot chooses from.
//!
//! Loaded once at startup and shared read-only for the life of the process.

use std::io::ErrorKind;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::CatalogError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    ids: Vec<String>,
}

impl Catalog {
    pub fn from_ids(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// Reads a JSON array of strings. A missing file yields an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::error!(
                    target: "reelbot.catalog",
                    path = %path.display(),
                    "catalog file not found, bot will not be able to send videos"
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CatalogError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let ids: Vec<String> = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!(
            target: "reelbot.catalog",
            count = ids.len(),
            "loaded {} video file ids",
            ids.len()
        );
        Ok(Self { ids })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Uniform choice over the whole list; `None` when empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.ids.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::test_support::CapturedLogs;

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::from_ids(ids.iter().map(|s| s.to_string()).collect())
    }

    fn counts(cat: &Catalog, trials: usize, seed: u64) -> HashMap<String, usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = HashMap::new();
        for _ in 0..trials {
            let id = cat.pick(&mut rng).unwrap();
            *out.entry(id.to_string()).or_insert(0) += 1;
        }
        out
    }

    #[test]
    fn test_load_preserves_order_and_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["vid_B", "vid_A", "vid_B"]"#).unwrap();

        let cat = Catalog::load(file.path()).unwrap();
        assert_eq!(cat.ids(), &["vid_B", "vid_A", "vid_B"]);
        assert_eq!(cat.len(), 3);
    }

    #[test]
    fn test_load_empty_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let cat = Catalog::load(file.path()).unwrap();
        assert!(cat.is_empty());
    }

    #[test]
    fn test_missing_file_is_empty_with_one_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("video_ids.json");

        let logs = CapturedLogs::default();

        let cat =
            tracing::subscriber::with_default(logs.subscriber(), || Catalog::load(&missing)).unwrap();

        assert!(cat.is_empty());
        let text = logs.text();
        assert_eq!(text.lines().count(), 1, "logs: {text}");
        assert!(text.contains("ERROR"));
        assert!(text.contains("catalog file not found"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ids": ["a"]}}"#).unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_pick_on_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Catalog::default().pick(&mut rng), None);
    }

    #[test]
    fn test_pick_always_returns_member_and_never_mutates() {
        let cat = catalog(&["only"]);
        let before = cat.clone();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(cat.pick(&mut rng), Some("only"));
        }
        assert_eq!(cat, before);
    }

    #[test]
    fn test_pick_three_ids_roughly_even() {
        let cat = catalog(&["vid_A", "vid_B", "vid_C"]);
        let counts = counts(&cat, 3000, 42);

        assert_eq!(counts.len(), 3);
        for id in ["vid_A", "vid_B", "vid_C"] {
            let n = counts[id];
            assert!((900..=1100).contains(&n), "{id} picked {n} times");
        }
    }

    #[test]
    fn test_pick_chi_squared_uniform() {
        let ids: Vec<String> = (0..5).map(|i| format!("file_{i}")).collect();
        let cat = Catalog::from_ids(ids.clone());
        let trials = 5000;
        let counts = counts(&cat, trials, 0xC0FFEE);

        let expected = trials as f64 / ids.len() as f64;
        let chi2: f64 = ids
            .iter()
            .map(|id| {
                let observed = *counts.get(id).unwrap_or(&0) as f64;
                (observed - expected).powi(2) / expected
            })
            .sum();

        // 4 degrees of freedom, p = 0.001
        assert!(chi2 < 18.47, "chi2 = {chi2}");
    }
}
