//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to all Oneiro data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Dream history store (`data/history.json`).
    pub history_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            history_file: root.join("history.json"),
            root,
        })
    }
}

/// Top-level Oneiro configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneiroConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Maximum number of dream records kept in history.
    pub max_history: usize,
}

impl OneiroConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3004);

        let data_paths = DataPaths::new(data_dir)?;

        tracing::debug!("Configuration loaded: port={port}, root={}", data_paths.root.display());

        Ok(Self {
            port,
            data_paths,
            max_history: 10,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_layout() {
        let dir = std::env::temp_dir().join("oneiro-config-test");
        let paths = DataPaths::new(&dir).unwrap();
        assert_eq!(paths.history_file, dir.join("history.json"));
        assert!(paths.root.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
