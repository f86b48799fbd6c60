use anyhow::Result;
use log::{debug, warn};
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Build output directory names, skipped unless they sit below a `src` directory.
const SKIPPED_DIRS: &[&str] = &["target", "build", "out", "node_modules"];

/// File scanner for traversing project directories.
///
/// The `FileScanner` recursively walks through a project directory to find every source file
/// with a given extension (`java` by default). It skips hidden directories (those starting with
/// `.`) and build output directories such as `target` and `build`, except below a `src`
/// directory where those names are Java packages.
///
/// # Example
///
/// ```no_run
/// use blueprints_from_source::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./my-service"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} Java files", result.source_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
    extension: String,
}

/// Result of directory scanning operation.
///
/// Contains the list of discovered source files and any warnings encountered during scanning.
pub struct ScanResult {
    /// List of paths to all discovered source files
    pub source_files: Vec<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified root directory, matching `.java` files.
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            extension: "java".to_string(),
        }
    }

    /// Matches files with `extension` instead of `java`. A leading dot is ignored.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Walks the directory tree and calls `visit` once for every matching file.
    ///
    /// The callback receives the nesting depth of the file relative to the root, its path and
    /// an open handle to it. Entries that cannot be accessed or opened are reported as
    /// warnings and skipped; the walk always runs to completion.
    ///
    /// # Returns
    ///
    /// Returns the warnings collected during the walk.
    pub fn explore<F>(&self, mut visit: F) -> Vec<String>
    where
        F: FnMut(usize, &Path, File),
    {
        self.walk(|entry, warnings| {
            let path = entry.path();
            match File::open(path) {
                Ok(file) => visit(entry.depth(), path, file),
                Err(e) => {
                    let warning = format!("Failed to open {}: {}", path.display(), e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        })
    }

    /// Scans the directory tree and collects all matching files without opening them.
    ///
    /// # Errors
    ///
    /// Returns an error if the root path is not a readable directory.
    pub fn scan(&self) -> Result<ScanResult> {
        if !self.root_path.is_dir() {
            anyhow::bail!("Not a directory: {}", self.root_path.display());
        }

        let mut source_files = Vec::new();
        let warnings = self.walk(|entry, _| source_files.push(entry.path().to_path_buf()));

        debug!(
            "Scanned {}: {} .{} files",
            self.root_path.display(),
            source_files.len(),
            self.extension
        );

        Ok(ScanResult {
            source_files,
            warnings,
        })
    }

    fn walk<F>(&self, mut visit: F) -> Vec<String>
    where
        F: FnMut(&DirEntry, &mut Vec<String>),
    {
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !e.file_type().is_dir() || !self.is_skipped_dir(e.path()))
        {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.matches_extension(entry.path()) {
                        visit(&entry, &mut warnings);
                    }
                }
                Err(e) => {
                    // Record warning for inaccessible directories/files
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        warnings
    }

    /// Hidden directories are skipped anywhere. Build output directories are only skipped
    /// outside of `src`, where the same names are ordinary package segments.
    fn is_skipped_dir(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root_path) else {
            return false;
        };
        let mut segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        let Some(dir_name) = segments.pop() else {
            // The root itself
            return false;
        };

        if dir_name.starts_with('.') {
            return true;
        }
        SKIPPED_DIRS.contains(&dir_name.as_str()) && !segments.iter().any(|s| s == "src")
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
    }
}
