// crates/camdb-core/src/loader/common_io.rs
use crate::error::{BundleError, Result};
use crate::traits::Workspace;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A directory on disk. Only its top level is considered.
#[derive(Debug, Clone)]
pub struct DirWorkspace {
    root: PathBuf,
}

impl DirWorkspace {
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(BundleError::NotFound(format!(
                "Directory not found at {}",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }
}

impl Workspace for DirWorkspace {
    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::debug!("Ignoring non UTF-8 file name {raw:?}"),
            }
        }
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.root.join(name))?)
    }

    fn write(&mut self, name: &str, contents: &[u8]) -> Result<()> {
        let file = File::create(self.root.join(name)).map_err(BundleError::Io)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents).map_err(BundleError::Io)?;
        writer.flush().map_err(BundleError::Io)?;
        Ok(())
    }

    fn display_path(&self, name: &str) -> String {
        self.root.join(name).display().to_string()
    }
}

/// An in-memory directory, for tests and for embedding the rebuild without
/// touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.into(), contents.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }
}

impl Workspace for MemoryWorkspace {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| BundleError::NotFound(format!("No such file: {name}")))
    }

    fn write(&mut self, name: &str, contents: &[u8]) -> Result<()> {
        self.files.insert(name.to_string(), contents.to_vec());
        Ok(())
    }
}
