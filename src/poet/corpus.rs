//! Corpus text sources and the whitespace tokenizer

use super::error::{PoetError, PoetResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Split text into words on runs of whitespace.
///
/// Leading and trailing whitespace is ignored and no empty tokens are
/// produced. Tokens keep their original characters.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Fully-read corpus text
///
/// A corpus is read completely before any graph is built from it, so a read
/// failure never leaves a half-built graph behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    origin: Option<PathBuf>,
}

impl Corpus {
    /// Wrap in-memory text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: None,
        }
    }

    /// Read a whole corpus file
    pub fn load(path: impl AsRef<Path>) -> PoetResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PoetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Read a corpus from any reader. `origin` names the source in errors.
    pub fn from_reader<R: Read>(mut reader: R, origin: impl Into<PathBuf>) -> PoetResult<Self> {
        let origin = origin.into();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| PoetError::Io {
                path: origin.clone(),
                source,
            })?;
        debug!("Read corpus {} ({} bytes)", origin.display(), text.len());
        Ok(Self {
            text,
            origin: Some(origin),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the corpus was read from, if it came from a reader or file
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        tokenize(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn tokenize_collapses_whitespace_runs() {
        let tokens: Vec<_> = tokenize("  Seek to     explore new   \n and\texciting  ").collect();
        assert_eq!(tokens, vec!["Seek", "to", "explore", "new", "and", "exciting"]);
    }

    #[test]
    fn tokenize_empty_and_blank() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \n\t ").count(), 0);
    }

    #[test]
    fn tokenize_keeps_punctuation_and_case() {
        let tokens: Vec<_> = tokenize("Hello, HELLO, goodbye!").collect();
        assert_eq!(tokens, vec!["Hello,", "HELLO,", "goodbye!"]);
    }

    #[test]
    fn from_reader_records_origin() {
        let corpus = Corpus::from_reader(Cursor::new("to be\nor not"), "<memory>").unwrap();
        assert_eq!(corpus.tokens().count(), 4);
        assert_eq!(corpus.origin(), Some(Path::new("<memory>")));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Corpus::load("/definitely/not/here/corpus.txt").unwrap_err();
        match err {
            PoetError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/corpus.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let bytes: &[u8] = &[0x66, 0x6f, 0xff, 0xfe];
        let err = Corpus::from_reader(bytes, "<bytes>").unwrap_err();
        assert!(matches!(err, PoetError::Io { .. }));
    }
}
