use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to create transcript directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to append to transcript {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Append-only plaintext record of every exchange.
///
/// One block per exchange, no timestamps, no identifiers. Single-process,
/// single-writer: concurrent processes appending to the same file may
/// interleave blocks.
#[derive(Debug, Clone)]
pub struct TranscriptLog {
    path: PathBuf,
}

impl TranscriptLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the containing directory if absent. Run once at startup;
    /// `append` also calls it so a freshly configured path still works.
    pub fn ensure_dir(&self) -> Result<(), TranscriptError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .map_err(|source| TranscriptError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                }),
            _ => Ok(()),
        }
    }

    pub fn append(&self, question: &str, answer: &str) -> Result<(), TranscriptError> {
        self.ensure_dir()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| TranscriptError::Append {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(format!("Q: {}\nA: {}\n---\n", question, answer).as_bytes())
            .map_err(|source| TranscriptError::Append {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = TranscriptLog::new(dir.path().join("logs").join("queries.log"));

        log.append("patient has fever", "Take fluids.").unwrap();

        let written = fs::read_to_string(log.path()).unwrap();
        assert_eq!(written, "Q: patient has fever\nA: Take fluids.\n---\n");
    }

    #[test]
    fn blocks_accumulate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = TranscriptLog::new(dir.path().join("queries.log"));

        log.append("first", "one").unwrap();
        log.append("second", "two").unwrap();

        let written = fs::read_to_string(log.path()).unwrap();
        assert_eq!(written, "Q: first\nA: one\n---\nQ: second\nA: two\n---\n");
    }

    #[test]
    fn unwritable_path_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the log path makes the open fail.
        let path = dir.path().join("queries.log");
        fs::create_dir(&path).unwrap();

        let log = TranscriptLog::new(&path);
        assert!(matches!(
            log.append("q", "a"),
            Err(TranscriptError::Append { .. })
        ));
    }
}
