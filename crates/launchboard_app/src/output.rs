use std::io::{self, Write};
use std::path::{Path, PathBuf};

use launchboard_engine::{AtomicFileWriter, PersistError};

/// Where the rendered page goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` selects stdout; anything else is a file path.
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }

    /// Replaces the previous page wholesale.
    pub fn write(&self, html: &str) -> Result<(), PersistError> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
            OutputTarget::File(path) => {
                let (writer, filename) = AtomicFileWriter::for_path(path)?;
                writer.write(&filename, html)?;
            }
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        match self {
            OutputTarget::Stdout => "stdout".to_string(),
            OutputTarget::File(path) => path.display().to_string(),
        }
    }
}
