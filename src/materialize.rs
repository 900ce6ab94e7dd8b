//! Hard-link materialization
//!
//! Complete files are linked into a separate output directory so the
//! original (possibly still-incomplete) transfer directory can be discarded
//! once everything lands. A linked file doubles as the durable signal of
//! prior completeness that the trust override consumes on later runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Output location for materialized files
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Existence probe for a file at its designated output location
    pub fn is_materialized(&self, rel_path: &Path) -> bool {
        self.root.join(rel_path).is_file()
    }

    /// Hard-link a file from the content directory to the same relative
    /// path under the output root, creating parent directories as needed
    ///
    /// An already-existing destination is left alone.
    pub fn link(&self, content_dir: &Path, rel_path: &Path) -> io::Result<()> {
        let dest = self.root.join(rel_path);
        if dest.exists() {
            return Ok(());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::hard_link(content_dir.join(rel_path), &dest)?;
        log::info!("Linked \"{}\"", rel_path.display());
        Ok(())
    }
}
