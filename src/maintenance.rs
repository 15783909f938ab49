//! Maintenance mode
//!
//! A marker file is the whole mechanism: its presence means maintenance is
//! enabled; its content, if any, is the enable timestamp for display. The flag
//! is injected into request state rather than living in a process-wide global,
//! and is re-read on each request. No lock: a toggle racing a read may be seen
//! by a few in-flight requests before convergence.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Injected handle on the maintenance marker
#[derive(Debug, Clone)]
pub struct MaintenanceFlag {
    marker_path: PathBuf,
    control_key: String,
}

impl MaintenanceFlag {
    pub fn new(marker_path: impl AsRef<Path>, control_key: impl Into<String>) -> Self {
        Self {
            marker_path: marker_path.as_ref().to_path_buf(),
            control_key: control_key.into(),
        }
    }

    /// Current state, decided by marker presence alone
    pub fn is_enabled(&self) -> bool {
        self.marker_path.exists()
    }

    /// Timestamp recorded when maintenance was enabled, if available
    pub fn enabled_since(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.marker_path).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn enable(&self) -> Result<()> {
        if let Some(parent) = self.marker_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.marker_path, chrono::Utc::now().to_rfc3339())?;
        Ok(())
    }

    pub fn disable(&self) -> Result<()> {
        match std::fs::remove_file(&self.marker_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Exact string match against the shared control secret. The source system
    /// never hashed this key; the weakness is preserved, not endorsed.
    pub fn verify_key(&self, key: &str) -> bool {
        key == self.control_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_toggle_round_trip() {
        let dir = tempdir().unwrap();
        let flag = MaintenanceFlag::new(dir.path().join(".maintenance"), "key");

        assert!(!flag.is_enabled());
        flag.enable().unwrap();
        assert!(flag.is_enabled());
        assert!(flag.enabled_since().is_some());
        flag.disable().unwrap();
        assert!(!flag.is_enabled());
    }

    #[test]
    fn test_disable_when_already_disabled() {
        let dir = tempdir().unwrap();
        let flag = MaintenanceFlag::new(dir.path().join(".maintenance"), "key");
        assert!(flag.disable().is_ok());
    }

    #[test]
    fn test_key_exact_match() {
        let dir = tempdir().unwrap();
        let flag = MaintenanceFlag::new(dir.path().join(".maintenance"), "s3cret");
        assert!(flag.verify_key("s3cret"));
        assert!(!flag.verify_key("S3CRET"));
        assert!(!flag.verify_key(""));
    }
}
