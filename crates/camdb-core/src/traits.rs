// crates/camdb-core/src/traits.rs
use crate::error::Result;

/// Storage abstraction the rebuild runs against.
///
/// The pipeline only ever needs three things from its surroundings: the
/// names of the files in one flat directory, the bytes of a named file, and
/// a way to replace a named file. Abstracting them lets the whole rebuild be
/// exercised in memory (see [`crate::loader::MemoryWorkspace`]) while the
/// CLI uses [`crate::loader::DirWorkspace`].
///
/// # Examples
/// ```rust
/// use camdb_core::loader::MemoryWorkspace;
/// use camdb_core::traits::Workspace;
///
/// let mut ws = MemoryWorkspace::new();
/// ws.write("a.json", b"{}").unwrap();
/// assert_eq!(ws.list().unwrap(), vec!["a.json".to_string()]);
/// assert_eq!(ws.read("a.json").unwrap(), b"{}".to_vec());
/// ```
pub trait Workspace {
    /// Names of the regular files available, in no particular order.
    fn list(&self) -> Result<Vec<String>>;

    /// Reads a whole file.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Creates or truncates `name` and writes `contents` completely.
    fn write(&mut self, name: &str, contents: &[u8]) -> Result<()>;

    /// Human-readable location of `name`, used in diagnostics.
    fn display_path(&self, name: &str) -> String {
        name.to_string()
    }
}
