use crate::domain::config::OutputConfig;
use crate::domain::error::{GhKeysError, GhKeysResult};
use crate::infrastructure::config::{default_authorized_keys, expand_home};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the text payload goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// Create or, with `force`, overwrite a file
    File { path: PathBuf, force: bool },
    /// Append to a file, creating it if needed
    Append { path: PathBuf },
}

impl OutputTarget {
    /// Pick the target from the output flags.
    ///
    /// `--append` wins over a plain `--output`; without `--output` it falls
    /// back to the configured authorized_keys file, then `~/.ssh/authorized_keys`.
    pub fn resolve(
        append: bool,
        output: Option<&Path>,
        force: bool,
        config: &OutputConfig,
    ) -> GhKeysResult<Self> {
        let output = output.map(expand_home);
        if append {
            let path = match (output, &config.authorized_keys) {
                (Some(path), _) => path,
                (None, Some(configured)) => expand_home(configured),
                (None, None) => default_authorized_keys()?,
            };
            return Ok(Self::Append { path });
        }

        Ok(match output {
            Some(path) => Self::File { path, force },
            None => Self::Stdout,
        })
    }
}

/// Output writer trait for payload destinations
pub trait OutputWriter {
    /// Deliver the payload. Returns a confirmation for the diagnostic channel.
    fn write_keys(&mut self, payload: &str) -> GhKeysResult<Option<String>>;
}

/// Console output writer
pub struct ConsoleWriter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn write_keys(&mut self, payload: &str) -> GhKeysResult<Option<String>> {
        self.out.write_all(payload.as_bytes())?;
        self.out.flush()?;
        Ok(None)
    }
}

/// File output writer
pub struct FileWriter {
    path: PathBuf,
    mode: FileMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileMode {
    Create { force: bool },
    Append,
}

impl FileWriter {
    pub fn create(path: PathBuf, force: bool) -> Self {
        Self {
            path,
            mode: FileMode::Create { force },
        }
    }

    pub fn append(path: PathBuf) -> Self {
        Self {
            path,
            mode: FileMode::Append,
        }
    }

    fn io_error(&self, source: io::Error) -> GhKeysError {
        GhKeysError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn ensure_parent(&self) -> GhKeysResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))
            }
            _ => Ok(()),
        }
    }
}

impl OutputWriter for FileWriter {
    fn write_keys(&mut self, payload: &str) -> GhKeysResult<Option<String>> {
        let mut options = OpenOptions::new();
        match self.mode {
            FileMode::Create { force: false } => {
                if self.path.exists() {
                    return Err(GhKeysError::FileExists {
                        path: self.path.clone(),
                    });
                }
                options.write(true).create_new(true);
            }
            FileMode::Create { force: true } => {
                options.write(true).create(true).truncate(true);
            }
            FileMode::Append => {
                options.append(true).create(true);
            }
        }

        self.ensure_parent()?;
        let mut file = options.open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => GhKeysError::FileExists {
                path: self.path.clone(),
            },
            _ => self.io_error(e),
        })?;
        file.write_all(payload.as_bytes())
            .map_err(|e| self.io_error(e))?;

        let message = match self.mode {
            FileMode::Append => format!("Appended keys to {}", self.path.display()),
            FileMode::Create { .. } => format!("Wrote keys to {}", self.path.display()),
        };
        info!(path = %self.path.display(), bytes = payload.len(), "keys written");
        Ok(Some(message))
    }
}

/// Writer for a resolved target; console output goes to `stdout`.
pub fn writer_for<'a, W: Write + 'a>(
    target: OutputTarget,
    stdout: W,
) -> Box<dyn OutputWriter + 'a> {
    match target {
        OutputTarget::Stdout => Box::new(ConsoleWriter::new(stdout)),
        OutputTarget::File { path, force } => Box::new(FileWriter::create(path, force)),
        OutputTarget::Append { path } => Box::new(FileWriter::append(path)),
    }
}
