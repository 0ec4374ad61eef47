//! Output plumbing toward the hosting environment.
//!
//! CI hosts expose a file (named by `GITHUB_OUTPUT`) that collects
//! `key=value` lines for downstream steps. Pass-through fields are written
//! here as soon as they are known, independent of how confirmation ends, so
//! a timed-out run still leaves the transaction hash behind for operators.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Sink for `key=value` outputs.
///
/// With no backing file the values still appear in the structured logs; a
/// write failure is a warning, never a reason to abort the attestation.
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
    path: Option<PathBuf>,
}

impl OutputSink {
    /// Sink backed by the file named in `GITHUB_OUTPUT`, if set.
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }

    /// Sink backed by an explicit file path.
    pub fn to_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Record one output value.
    pub fn set(&self, key: &str, value: &str) {
        tracing::info!(key, value, "output set");

        let Some(path) = &self.path else { return };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| writeln!(f, "{key}={value}"));
        if let Err(e) = result {
            tracing::warn!(key, path = %path.display(), "failed to write output: {e}");
        }
    }

    /// Record an optional output value, skipping `None`.
    pub fn set_opt(&self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_appends_key_value_lines() {
        let path = std::env::temp_dir().join(format!("anchor-outputs-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let sink = OutputSink::to_path(path.clone());
        sink.set("tx-hash", "0xabc");
        sink.set_opt("commit-hash", Some("deadbeef"));
        sink.set_opt("merkle-root", None);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "tx-hash=0xabc\ncommit-hash=deadbeef\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_pathless_sink_is_silent_noop() {
        let sink = OutputSink::default();
        sink.set("tx-hash", "0xabc");
    }
}
