use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::ports::ManifestFilesystem;

/// In-memory filesystem for resolver and prober tests.
#[derive(Default)]
pub struct MockFilesystem {
    files: HashMap<PathBuf, Vec<u8>>,
    unreadable: HashSet<PathBuf>,
    failing_after: HashSet<PathBuf>,
    opened: RefCell<Vec<PathBuf>>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.as_bytes().to_vec());
        self
    }

    pub fn with_bytes(mut self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        self.files.insert(path.into(), content.to_vec());
        self
    }

    /// A file that exists but fails every read with `PermissionDenied`.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// A file that yields `content` and then fails with `UnexpectedEof`.
    pub fn with_failing_after(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        self.failing_after.insert(path.clone());
        self.with_file(path, content)
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }

    fn lookup(&self, path: &Path) -> io::Result<&[u8]> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        self.files
            .get(path)
            .map(Vec::as_slice)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }
}

impl ManifestFilesystem for MockFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.unreadable.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.lookup(path)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        self.opened.borrow_mut().push(path.to_path_buf());
        let content = Cursor::new(self.lookup(path)?);
        if self.failing_after.contains(path) {
            return Ok(Box::new(content.chain(BrokenReader)));
        }
        Ok(Box::new(content))
    }
}

/// Reader whose every read fails, simulating a file truncated mid-scan.
struct BrokenReader;

impl BrokenReader {
    fn error() -> io::Error {
        io::Error::new(io::ErrorKind::UnexpectedEof, "file truncated during read")
    }
}

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(Self::error())
    }
}

impl BufRead for BrokenReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(Self::error())
    }

    fn consume(&mut self, _amt: usize) {}
}
