// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-ahead log for durable storage
//!
//! Each line is one committed batch of operations. A batch counts as
//! committed once its terminating newline is on disk: the line and its
//! newline go out in one `write_all` and are synced before the commit
//! returns. Anything after the last newline, or an unparsable final line, is
//! a torn tail. Replay ignores it and `Wal::open` truncates it away.

use cw_core::Operation;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur in WAL operations
#[derive(Debug, Error)]
pub enum WalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corrupt WAL entry at line {line}: {source}")]
    Corrupt {
        line: usize,
        source: serde_json::Error,
    },
}

/// Write-ahead log for durable operation storage
pub struct Wal {
    file: File,
    sequence: u64,
}

impl Wal {
    /// Open or create a WAL at the given path
    pub fn open(path: &Path) -> Result<Self, WalError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(path)?;

        let log = scan(&fs::read(path)?)?;
        if let Some(torn) = log.torn_at {
            tracing::warn!(path = %path.display(), offset = torn, "truncating torn WAL tail");
            file.set_len(torn as u64)?;
        }

        Ok(Self {
            file,
            sequence: log.entries.len() as u64,
        })
    }

    /// Append a batch of operations as one entry
    ///
    /// On failure the file is cut back to its previous length.
    pub fn append(&mut self, ops: &[Operation]) -> Result<u64, WalError> {
        let entry = WalEntry {
            seq: self.sequence + 1,
            ops: ops.to_vec(),
        };
        let mut line = serde_json::to_vec(&entry)?;
        line.push(b'\n');

        let offset = self.file.metadata()?.len();
        let written = self
            .file
            .write_all(&line)
            .and_then(|()| self.file.sync_all());
        if let Err(e) = written {
            if let Err(rollback) = self.file.set_len(offset) {
                tracing::error!(error = %rollback, offset, "failed to roll back WAL append");
            }
            return Err(e.into());
        }

        self.sequence = entry.seq;
        Ok(self.sequence)
    }

    /// Get the current sequence number
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Replay all committed batches from the log, in order
    pub fn replay(path: &Path) -> Result<Vec<Vec<Operation>>, WalError> {
        let contents = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let log = scan(&contents)?;
        Ok(log.entries.into_iter().map(|entry| entry.ops).collect())
    }
}

struct ScannedLog {
    entries: Vec<WalEntry>,
    /// Byte offset where a torn tail starts
    torn_at: Option<usize>,
}

fn scan(contents: &[u8]) -> Result<ScannedLog, WalError> {
    let mut entries = Vec::new();
    let mut offset = 0;
    let mut lines = contents.split_inclusive(|&b| b == b'\n').enumerate().peekable();

    while let Some((idx, line)) = lines.next() {
        let start = offset;
        offset += line.len();

        let Some(body) = line.strip_suffix(b"\n") else {
            tracing::warn!(line = idx + 1, "discarding unterminated WAL tail");
            return Ok(ScannedLog {
                entries,
                torn_at: Some(start),
            });
        };
        if body.is_empty() {
            continue;
        }
        match serde_json::from_slice::<WalEntry>(body) {
            Ok(entry) => entries.push(entry),
            Err(e) if lines.peek().is_none() => {
                tracing::warn!(line = idx + 1, error = %e, "discarding torn WAL tail");
                return Ok(ScannedLog {
                    entries,
                    torn_at: Some(start),
                });
            }
            Err(source) => {
                return Err(WalError::Corrupt {
                    line: idx + 1,
                    source,
                })
            }
        }
    }

    Ok(ScannedLog {
        entries,
        torn_at: None,
    })
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct WalEntry {
    seq: u64,
    ops: Vec<Operation>,
}

#[cfg(test)]
#[path = "wal_tests.rs"]
mod tests;
