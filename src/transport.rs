use crate::error::TransportError;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

/// Host-provided file access for the selected server.
pub trait FileTransport {
    fn get_content(&self, filename: &str) -> Result<String, TransportError>;
    fn put_content(&self, filename: &str, content: &str) -> Result<(), TransportError>;
}

/// Serves files from a local server directory.
#[derive(Debug, Clone)]
pub struct LocalDirTransport {
    root: PathBuf,
}

impl LocalDirTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Only bare file names are accepted; nothing may escape `root`.
    fn resolve(&self, filename: &str) -> Result<PathBuf, TransportError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.root.join(name)),
            _ => Err(TransportError::InvalidName(filename.to_string())),
        }
    }
}

impl FileTransport for LocalDirTransport {
    fn get_content(&self, filename: &str) -> Result<String, TransportError> {
        let path = self.resolve(filename)?;
        fs::read_to_string(&path).map_err(|source| TransportError::Read { path, source })
    }

    fn put_content(&self, filename: &str, content: &str) -> Result<(), TransportError> {
        let path = self.resolve(filename)?;
        fs::write(&path, content).map_err(|source| TransportError::Write { path, source })
    }
}
