//! Backup management
//!
//! Every write to a tracked file is preceded by a timestamped copy into
//! the backup directory, pruned down to the configured retention count.

use anyhow::Result;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

use crate::model::AppConfig;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub path: PathBuf,
    pub timestamp: String,
    pub filename: String,
}

/// Backup manager for one backup directory.
pub struct BackupManager {
    backup_dir: PathBuf,
    max_count: usize,
}

impl BackupManager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            backup_dir: AppConfig::backups_dir(),
            max_count: config.backup.max_count,
        }
    }

    /// Manager rooted at an explicit directory, for tests and tooling.
    pub fn with_dir(backup_dir: PathBuf, max_count: usize) -> Self {
        Self {
            backup_dir,
            max_count,
        }
    }

    /// Copy the file into the backup directory under a timestamped name,
    /// then prune old backups past the retention count.
    pub fn create_backup(&self, source_file: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.backup_dir)?;

        let now = OffsetDateTime::now_utc();
        let timestamp = format!(
            "{:04}-{:02}-{:02}_{:02}{:02}{:02}",
            now.year(),
            now.month() as u8,
            now.day(),
            now.hour(),
            now.minute(),
            now.second()
        );

        let filename = source_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "config".to_string());

        let backup_path = self
            .backup_dir
            .join(format!("{}_{}.bak", timestamp, filename));
        std::fs::copy(source_file, &backup_path)?;

        self.prune()?;

        Ok(backup_path)
    }

    /// List all backups, newest first.
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map(|e| e == "bak").unwrap_or(false) {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let timestamp = filename.split('_').take(2).collect::<Vec<_>>().join("_");
                entries.push(BackupEntry {
                    path,
                    timestamp,
                    filename,
                });
            }
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Remove backups beyond the retention count. Returns how many were
    /// deleted.
    pub fn prune(&self) -> Result<usize> {
        let backups = self.list_backups()?;
        if backups.len() <= self.max_count {
            return Ok(0);
        }

        let mut removed = 0;
        for backup in backups.into_iter().skip(self.max_count) {
            std::fs::remove_file(&backup.path)?;
            removed += 1;
        }
        Ok(removed)
    }
}
