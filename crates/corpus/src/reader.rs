use std::fs;
use std::io;
use std::path::Path;

/// Pluggable document reader.
///
/// The corpus layer never converts document formats itself; callers that
/// need to turn notebooks or other containers into plain text supply their
/// own reader, and the core only ever sees the resulting text. The seam is
/// deliberately narrow: path in, text out.
pub trait DocumentReader {
    /// Read the file at `path` and return its plain-text content.
    ///
    /// Content that cannot be represented as text should fail with
    /// [`io::ErrorKind::InvalidData`], which the loader reports as a decode
    /// failure naming the file.
    fn read_document(&self, path: &Path) -> io::Result<String>;
}

/// Default reader: the file is already plain UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn read_document(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}
