//! Typed configuration grouped by concern, loaded from environment variables.

use super::env_keys::{classification, observability as obv_keys, paths};
use super::loader::{env_bool, env_list, env_optional, env_or};
use std::path::PathBuf;

/// Default trigger substrings for daylight-linked lights.
pub const DEFAULT_DAYLIGHT_KEYWORDS: &[&str] = &["DOME", "CORTINA", "SOL"];

/// Location of the public asset tree.
#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub public_dir: PathBuf,
}

impl PathsConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        let raw = env_or(paths::VIZ360_PUBLIC_DIR, paths::PUBLIC_DIR_ALIASES, || {
            "public".to_string()
        });
        Self {
            public_dir: resolve_dir(&raw),
        }
    }

    /// CLI value wins over the environment.
    pub fn with_override(override_dir: Option<&str>) -> Self {
        match override_dir {
            Some(dir) if !dir.trim().is_empty() => Self {
                public_dir: resolve_dir(dir.trim()),
            },
            _ => Self::from_env(),
        }
    }
}

/// Relative paths resolve against the current directory.
pub fn resolve_dir(dir: &str) -> PathBuf {
    let p = PathBuf::from(dir);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Policy inputs for light classification.
#[derive(Debug, Clone)]
pub struct ClassificationConfig {
    /// Uppercase substrings matched against sanitized labels.
    pub daylight_keywords: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            daylight_keywords: DEFAULT_DAYLIGHT_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl ClassificationConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        match env_list(classification::VIZ360_DAYLIGHT_KEYWORDS, &[]) {
            Some(keywords) => Self {
                daylight_keywords: keywords.into_iter().map(|k| k.to_uppercase()).collect(),
            },
            None => Self::default(),
        }
    }
}

/// Observability: quiet, log_level, log_json, audit_log
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| {
            super::loader::load_dotenv();
            Self {
                quiet: env_bool(obv_keys::VIZ360_QUIET, &[], false),
                log_level: env_or(obv_keys::VIZ360_LOG_LEVEL, &[], || "warn".to_string()),
                log_json: env_bool(obv_keys::VIZ360_LOG_JSON, &[], false),
                audit_log: env_optional(obv_keys::VIZ360_AUDIT_LOG, &[]),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords() {
        let cfg = ClassificationConfig::default();
        assert_eq!(cfg.daylight_keywords, vec!["DOME", "CORTINA", "SOL"]);
    }

    #[test]
    fn test_override_dir_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_string_lossy().to_string();
        let cfg = PathsConfig::with_override(Some(&dir));
        assert_eq!(cfg.public_dir, tmp.path());
    }

    #[test]
    fn test_resolve_dir_relative_is_under_cwd() {
        let resolved = resolve_dir("public");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("public"));
    }
}
