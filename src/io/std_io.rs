//! Standard sink implementations for stdout/stderr, files and generic writers.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::NativeSink;
use super::sink::closed_error;

/// Sink writing to the process's standard output.
///
/// Closing only detaches this handle; the process stream itself stays open.
#[derive(Debug, Clone)]
pub struct StdoutSink {
    id: String,
    closed: bool,
}

impl StdoutSink {
    /// Create a new stdout sink.
    pub fn new() -> Self {
        Self {
            id: "-".into(),
            closed: false,
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(closed_error(&self.id));
        }
        io::stdout().lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.closed {
            return Err(closed_error(&self.id));
        }
        io::stdout().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

impl NativeSink for StdoutSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Err(closed_error(&self.id));
        }
        self.closed = true;
        io::stdout().flush()
    }
}

/// Sink writing to the process's standard error.
#[derive(Debug, Clone)]
pub struct StderrSink {
    id: String,
    closed: bool,
}

impl StderrSink {
    /// Create a new stderr sink.
    pub fn new() -> Self {
        Self {
            id: "stderr".into(),
            closed: false,
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StderrSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(closed_error(&self.id));
        }
        io::stderr().lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.closed {
            return Err(closed_error(&self.id));
        }
        io::stderr().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl NativeSink for StderrSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Err(closed_error(&self.id));
        }
        self.closed = true;
        Ok(())
    }
}

/// Sink writing to a file.
#[derive(Debug)]
pub struct FileSink {
    id: String,
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    /// Open `path` for writing, truncating any existing content.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)?;
        Ok(Self::from_file(path, file))
    }

    /// Open `path` for appending to existing content.
    pub fn append(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self::from_file(path, file))
    }

    fn from_file(path: PathBuf, file: File) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self {
            id,
            path,
            file: Some(file),
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn file(&mut self) -> io::Result<&mut File> {
        match self.file.as_mut() {
            Some(file) => Ok(file),
            None => Err(closed_error(&self.id)),
        }
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file()?.flush()
    }
}

impl NativeSink for FileSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn close(&mut self) -> io::Result<()> {
        // Dropping the handle closes the descriptor; sync first so failures
        // to persist the data are reported.
        match self.file.take() {
            Some(file) => file.sync_all(),
            None => Err(closed_error(&self.id)),
        }
    }
}

/// Sink over any `Write` implementation (sockets, pipes, child stdin, ...).
///
/// Closing flushes and then drops the writer.
pub struct WriterSink<W> {
    id: String,
    inner: Option<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap `inner`, identified by `id` in logs.
    pub fn new(id: impl Into<String>, inner: W) -> Self {
        Self {
            id: id.into(),
            inner: Some(inner),
        }
    }

    /// Take the writer back, if the sink has not been closed.
    pub fn into_inner(self) -> Option<W> {
        self.inner
    }

    fn inner(&mut self) -> io::Result<&mut W> {
        match self.inner.as_mut() {
            Some(w) => Ok(w),
            None => Err(closed_error(&self.id)),
        }
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("id", &self.id)
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl<W: Write + Send> Write for WriterSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner()?.flush()
    }
}

impl<W: Write + Send> NativeSink for WriterSink<W> {
    fn id(&self) -> &str {
        &self.id
    }

    fn close(&mut self) -> io::Result<()> {
        match self.inner.take() {
            Some(mut w) => w.flush(),
            None => Err(closed_error(&self.id)),
        }
    }
}
