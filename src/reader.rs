//! Splits a byte stream into YAML documents.
//!
//! Documents are separated by lines that start with `---`. The marker may be
//! followed by whitespace or a comment, nothing else. Separator lines are not
//! part of the documents returned. The reader does not interpret the YAML
//! itself; each document is handed to the decoder as raw bytes.

use std::io::{self, BufRead};

use thiserror::Error;

const SEPARATOR: &[u8] = b"---";

/// Failure while splitting a stream into documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    /// Reading from the underlying stream failed.
    #[error("could not read configuration stream: {0}")]
    Io(#[from] io::Error),

    /// A document separator line carries content after the `---` marker.
    #[error("invalid document separator at line {line}: {content:?}")]
    InvalidSeparator { line: usize, content: String },
}

/// Reads successive `---`-delimited documents from a buffered reader.
#[derive(Debug)]
pub struct DocumentReader<R> {
    reader: R,
    line: usize,
    finished: bool,
}

impl<R: BufRead> DocumentReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            finished: false,
        }
    }

    /// Read the next document.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A separator that closes
    /// an empty buffer does not produce a document.
    pub fn read_document(&mut self) -> Result<Option<Vec<u8>>, ReadError> {
        if self.finished {
            return Ok(None);
        }

        let mut buffer = Vec::new();
        loop {
            let mut line = Vec::new();
            let read = self.reader.read_until(b'\n', &mut line)?;
            if read == 0 {
                self.finished = true;
                return Ok((!buffer.is_empty()).then_some(buffer));
            }
            self.line += 1;

            if let Some(rest) = line.strip_prefix(SEPARATOR) {
                check_separator_tail(rest, self.line, &line)?;
                if !buffer.is_empty() {
                    return Ok(Some(buffer));
                }
                continue;
            }

            buffer.extend_from_slice(&line);
        }
    }
}

impl<R: BufRead> Iterator for DocumentReader<R> {
    type Item = Result<Vec<u8>, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_document() {
            Ok(Some(document)) => Some(Ok(document)),
            Ok(None) => None,
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Only whitespace or a comment may follow a separator.
fn check_separator_tail(rest: &[u8], line: usize, full: &[u8]) -> Result<(), ReadError> {
    match rest.iter().position(|b| !b.is_ascii_whitespace()) {
        None => Ok(()),
        Some(i) if rest[i] == b'#' => Ok(()),
        Some(_) => Err(ReadError::InvalidSeparator {
            line,
            content: String::from_utf8_lossy(full).trim_end().to_owned(),
        }),
    }
}
