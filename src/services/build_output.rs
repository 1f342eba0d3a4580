//! Read-only access to a production build directory.
//!
//! The build-channel checks only see strings; everything that touches the
//! disk goes through [`BuildOutput`] so the checks can run against fixtures.

use crate::domain::constants::{ASSETS_DIR, TEXT_FILE_EXTENSIONS};
use crate::error::{Result, VerifyError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct TextFile {
    pub relative: String,
    pub contents: String,
}

pub trait BuildOutput {
    fn describe(&self) -> String;

    fn read_text(&self, relative: &str) -> Result<String>;

    /// Every scanned text file under the build root, sorted by relative path.
    fn text_files(&self) -> Result<Vec<TextFile>>;

    /// Contents of `assets/*.js`, not recursive. Empty when `assets/` is absent.
    fn script_assets(&self) -> Result<Vec<String>>;
}

pub struct FsBuildOutput {
    root: PathBuf,
}

impl FsBuildOutput {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsBuildOutput { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(VerifyError::MissingFile(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| VerifyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Bundles may carry stray non-UTF-8 bytes; those decode as U+FFFD.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn has_scanned_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXT_FILE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        parts.join("/")
    }
}

impl BuildOutput for FsBuildOutput {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn read_text(&self, relative: &str) -> Result<String> {
        read_file(&self.root.join(relative))
    }

    fn text_files(&self) -> Result<Vec<TextFile>> {
        let mut out = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| VerifyError::Io {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone()),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() || !has_scanned_extension(entry.path()) {
                continue;
            }
            out.push(TextFile {
                relative: relative_display(&self.root, entry.path()),
                contents: read_file(entry.path())?,
            });
        }
        Ok(out)
    }

    fn script_assets(&self) -> Result<Vec<String>> {
        let assets = self.root.join(ASSETS_DIR);
        if !assets.exists() {
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(&assets).map_err(|source| VerifyError::Io {
            path: assets.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| VerifyError::Io {
                path: assets.clone(),
                source,
            })?;
            if entry.file_name().to_string_lossy().ends_with(".js") {
                paths.push(entry.path());
            }
        }
        paths.sort();
        paths.iter().map(|p| read_file(p)).collect()
    }
}
