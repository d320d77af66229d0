//! Directory scan for match files

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use super::{MatchFile, MATCH_FILE_EXTENSION};
use crate::error::{Error, Result};

/// A file that was found but could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanError {
    pub path: PathBuf,
    pub message: String,
}

/// Loaded files plus the ones that failed, both sorted by path
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub files: Vec<MatchFile>,
    pub errors: Vec<ScanError>,
}

/// Finds and loads match files under a directory
pub struct ReplayScanner {
    root: PathBuf,
    max_depth: usize,
}

impl ReplayScanner {
    /// Scan only the top level of `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: 1,
        }
    }

    /// Descend up to `depth` directory levels below the root
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every match file found
    ///
    /// Unreadable files are collected into [`ScanResult::errors`] rather
    /// than failing the whole scan.
    pub fn scan(&self) -> Result<ScanResult> {
        if !self.root.is_dir() {
            return Err(Error::DirectoryNotFound(self.root.clone()));
        }

        let start = Instant::now();
        let paths = self.find_match_files();

        let loaded: Vec<(PathBuf, Result<MatchFile>)> = paths
            .into_par_iter()
            .map(|path| {
                let result = MatchFile::load(&path);
                (path, result)
            })
            .collect();

        let mut result = ScanResult::default();
        for (path, loaded) in loaded {
            match loaded {
                Ok(file) => result.files.push(file),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    result.errors.push(ScanError {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        result.files.sort_by(|a, b| a.full_path.cmp(&b.full_path));
        result.errors.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            "Scanned {} in {:.2}s: {} match files, {} failed",
            self.root.display(),
            start.elapsed().as_secs_f64(),
            result.files.len(),
            result.errors.len()
        );

        Ok(result)
    }

    fn find_match_files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| {
                path.extension()
                    .map(|ext| ext.eq_ignore_ascii_case(MATCH_FILE_EXTENSION))
                    .unwrap_or(false)
            })
            .collect()
    }
}
