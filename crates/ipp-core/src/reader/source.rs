//! Input Source
//!
//! Scoped acquisition of the program input. The stream is opened right before
//! the callback runs and closed when it returns, on success and error alike.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ParseError, ParseResult};

/// Where the program text comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Open the source, run `f` on it, then release it
    pub fn with_reader<T, F>(&self, f: F) -> ParseResult<T>
    where
        F: FnOnce(&mut dyn BufRead) -> ParseResult<T>,
    {
        match self {
            Source::Stdin => {
                debug!("reading program from stdin");
                let stdin = io::stdin();
                let mut lock = stdin.lock();
                f(&mut lock)
            }
            Source::File(path) => {
                let file = File::open(path).map_err(|err| {
                    ParseError::Input(format!(
                        "File not found or cannot be opened: {}: {}",
                        path.display(),
                        err
                    ))
                })?;
                debug!(path = %path.display(), "reading program from file");
                let mut reader = BufReader::new(file);
                f(&mut reader)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_input_error() {
        let source = Source::File(PathBuf::from("/nonexistent/dir/program.ippc"));
        let res = source.with_reader(|_| Ok(()));
        match res {
            Err(err @ ParseError::Input(_)) => assert_eq!(err.exit_code(), 11),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn default_source_is_stdin() {
        assert_eq!(Source::default(), Source::Stdin);
    }
}
