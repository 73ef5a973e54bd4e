use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Default notes file, relative to the working directory.
pub const DEFAULT_NOTES_FILE: &str = "notes.md";

/// Default number of results per interactive query.
pub const DEFAULT_SEARCH_TOP_K: usize = 7;

/// Default number of corpus keywords in the scan report.
pub const DEFAULT_KEYWORDS: usize = 18;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override these values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Notes file to analyze (RETREAT_NOTES_FILE)
    pub notes_path: PathBuf,
    /// Results per interactive query (RETREAT_SEARCH_TOP_K)
    pub search_top_k: usize,
    /// Keywords listed in the scan report (RETREAT_KEYWORDS)
    pub keyword_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_path: PathBuf::from(DEFAULT_NOTES_FILE),
            search_top_k: DEFAULT_SEARCH_TOP_K,
            keyword_count: DEFAULT_KEYWORDS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default, so loading never fails. Unparseable
    /// numbers fall back to the default with a warning.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            notes_path: lookup("RETREAT_NOTES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.notes_path),
            search_top_k: parse_count(&lookup, "RETREAT_SEARCH_TOP_K", defaults.search_top_k),
            keyword_count: parse_count(&lookup, "RETREAT_KEYWORDS", defaults.keyword_count),
        }
    }
}

fn parse_count(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                warn!(key, value = %raw, default, "Ignoring invalid count");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.notes_path, PathBuf::from("notes.md"));
        assert_eq!(config.search_top_k, 7);
        assert_eq!(config.keyword_count, 18);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("RETREAT_NOTES_FILE", "/tmp/lent.md"),
            ("RETREAT_SEARCH_TOP_K", "3"),
            ("RETREAT_KEYWORDS", " 25 "),
        ]));
        assert_eq!(config.notes_path, PathBuf::from("/tmp/lent.md"));
        assert_eq!(config.search_top_k, 3);
        assert_eq!(config.keyword_count, 25);
    }

    #[test]
    fn test_invalid_counts_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("RETREAT_SEARCH_TOP_K", "many"),
            ("RETREAT_KEYWORDS", "0"),
        ]));
        assert_eq!(config.search_top_k, 7);
        assert_eq!(config.keyword_count, 18);
    }
}
