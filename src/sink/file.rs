//! File sink: appends each message as one line to a file opened lazily on
//! first write. Parameterized over a `FileBackend` so tests can substitute a
//! mock that simulates an open failure without touching the filesystem.

use super::Sink;
use crate::error::Error;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The operations a file sink needs from its backing store. The production
/// path is `StdFileBackend`; tests get a seam to inject failure.
pub trait FileBackend: Send {
    fn open(&mut self, path: &Path) -> std::io::Result<()>;
    fn is_open(&self) -> bool;
    fn write_line(&mut self, message: &str) -> std::io::Result<()>;
}

/// Production backend: a real append-create file handle.
#[derive(Debug, Default)]
pub struct StdFileBackend {
    file: Option<File>,
}

impl FileBackend for StdFileBackend {
    fn open(&mut self, path: &Path) -> std::io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        self.file = Some(file);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn write_line(&mut self, message: &str) -> std::io::Result<()> {
        let file = self
            .file
            .as_mut()
            .expect("write_line is only called after a successful open");
        file.write_all(message.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()
    }
}

/// Appends messages to `path`, opening it only on the first `consume`. A
/// failed open leaves the sink closed so the next `consume` retries rather
/// than wedging permanently on a transient failure (e.g. a not-yet-mounted
/// volume).
pub struct FileSink<B: FileBackend = StdFileBackend> {
    path: PathBuf,
    backend: Mutex<B>,
}

impl FileSink<StdFileBackend> {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backend: Mutex::new(StdFileBackend::default()),
        }
    }
}

impl<B: FileBackend> FileSink<B> {
    /// Constructs a sink over a caller-supplied backend — the seam tests use
    /// to exercise the lazy-open discipline without a real file.
    #[must_use]
    pub fn with_backend(path: impl Into<PathBuf>, backend: B) -> Self {
        Self {
            path: path.into(),
            backend: Mutex::new(backend),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<B: FileBackend> Sink for FileSink<B> {
    fn consume(&self, message: &str) -> Result<(), Error> {
        let mut backend = self
            .backend
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if !backend.is_open() {
            backend
                .open(&self.path)
                .map_err(|source| Error::OpenFailed {
                    path: self.path.clone(),
                    source,
                })?;
        }

        backend.write_line(message).map_err(Error::Io)
    }
}
