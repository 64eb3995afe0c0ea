//! Observability: tracing init and the registry audit log.
//!
//! Uses config::ObservabilityConfig for VIZ360_QUIET, LOG_LEVEL, LOG_JSON, AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

static AUDIT_PATH: Mutex<Option<String>> = Mutex::new(None);

/// Initialize tracing. Call at process startup.
/// When VIZ360_QUIET=1, only ERROR is logged. Output goes to stderr.
pub fn init_tracing() {
    let cfg = crate::config::ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        "error".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    };
}

fn get_audit_path() -> Option<String> {
    {
        let guard = AUDIT_PATH.lock().ok()?;
        if let Some(ref p) = *guard {
            return Some(p.clone());
        }
    }
    let path = crate::config::ObservabilityConfig::from_env()
        .audit_log
        .clone()?;
    if let Some(parent) = Path::new(&path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    {
        let mut guard = AUDIT_PATH.lock().ok()?;
        *guard = Some(path.clone());
    }
    Some(path)
}

fn append_jsonl(path: &str, record: &serde_json::Value) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

fn audit_record(event: &str, env_id: &str, details: serde_json::Value) -> serde_json::Value {
    json!({
        "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "event": event,
        "env_id": env_id,
        "details": details,
    })
}

fn audit(event: &str, env_id: &str, details: serde_json::Value) {
    if let Some(path) = get_audit_path() {
        append_jsonl(&path, &audit_record(event, env_id, details));
    }
}

/// Audit: a record was appended to the registry
pub fn audit_environment_registered(env_id: &str, name: &str, images: usize) {
    audit(
        "environment_registered",
        env_id,
        json!({ "name": name, "images": images }),
    );
}

/// Audit: a viewer-state document was synthesized and written
pub fn audit_preset_created(env_id: &str, preset_path: &Path, lights: usize) {
    audit(
        "preset_created",
        env_id,
        json!({ "path": preset_path.display().to_string(), "lights": lights }),
    );
}

/// Audit: a record was removed from the registry (directories kept)
pub fn audit_environment_unregistered(env_id: &str, kept_dirs: &[&Path]) {
    let kept: Vec<String> = kept_dirs.iter().map(|p| p.display().to_string()).collect();
    audit("environment_unregistered", env_id, json!({ "kept_dirs": kept }));
}

/// Audit: removal was not confirmed
pub fn audit_removal_declined(env_id: &str) {
    tracing::info!(env_id = %env_id, "Removal declined by user");
    audit("removal_declined", env_id, json!({}));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_record_shape() {
        let record = audit_record("environment_registered", "sala-2", json!({ "images": 3 }));
        assert_eq!(record["event"], "environment_registered");
        assert_eq!(record["env_id"], "sala-2");
        assert_eq!(record["details"]["images"], 3);
        assert!(record["ts"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_append_jsonl_appends_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("audit.jsonl");
        let path_str = path.to_string_lossy().to_string();
        append_jsonl(&path_str, &json!({ "n": 1 }));
        append_jsonl(&path_str, &json!({ "n": 2 }));
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![r#"{"n":1}"#, r#"{"n":2}"#]);
    }
}
