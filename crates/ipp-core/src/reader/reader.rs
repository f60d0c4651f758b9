//! Source Line Reader
//!
//! Turns raw source lines into logical instruction lines and checks the header.
//! This layer strips comments and blank lines only; it never looks at opcodes.

use std::io::BufRead;

use tracing::debug;

use crate::config::HEADER_TOKEN;
use crate::error::{ParseError, ParseResult};

/// Comment marker; everything from it to the end of the line is ignored
const COMMENT: char = '#';

/// A logical (non-blank, comment-free) source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based physical line number in the input
    pub number: usize,
    pub text: String,
}

/// Lazy, single-pass reader of logical lines
pub struct LineReader<R> {
    inner: R,
    line_no: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader {
            inner,
            line_no: 0,
            buf: Vec::new(),
        }
    }

    /// Consume the first logical line and require it to be the header token
    pub fn expect_header(&mut self) -> ParseResult<()> {
        let line = self.next().transpose()?.ok_or(ParseError::Header)?;
        let header = line.text.trim_matches(|c: char| c.is_ascii_whitespace());
        if !header.eq_ignore_ascii_case(HEADER_TOKEN) {
            return Err(ParseError::Header);
        }
        debug!(line = line.number, "header accepted");
        Ok(())
    }

    fn read_raw(&mut self) -> ParseResult<Option<String>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        let raw = std::mem::take(&mut self.buf);
        String::from_utf8(raw).map(Some).map_err(|_| {
            ParseError::Input(format!("line {} is not valid UTF-8", self.line_no))
        })
    }
}

/// Drop the comment suffix and report whether anything meaningful remains
fn strip_comment(raw: &str) -> Option<&str> {
    let code = match raw.find(COMMENT) {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    code.chars()
        .any(|c| c.is_ascii_alphanumeric() || c == '_')
        .then_some(code)
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = ParseResult<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.read_raw() {
                Ok(Some(raw)) => raw,
                Ok(None) => return None,
                Err(err) => return Some(Err(err)),
            };
            if let Some(code) = strip_comment(&raw) {
                return Some(Ok(SourceLine {
                    number: self.line_no,
                    text: code.to_string(),
                }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical(src: &str) -> Vec<(usize, String)> {
        LineReader::new(src.as_bytes())
            .map(|line| line.map(|l| (l.number, l.text)))
            .collect::<ParseResult<_>>()
            .expect("read failed")
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let lines = logical("# intro\n\n   \t\nMOVE GF@x GF@y # copy\n#only\nBREAK");
        assert_eq!(
            lines,
            vec![(4, "MOVE GF@x GF@y ".to_string()), (6, "BREAK".to_string())]
        );
    }

    #[test]
    fn punctuation_only_lines_are_blank() {
        assert!(logical("  .. ;; \n@@\n").is_empty());
    }

    #[test]
    fn header_accepts_any_case_and_surrounding_space() {
        let mut reader = LineReader::new("# hdr\n  .ippCODE23  # yes\nBREAK\n".as_bytes());
        reader.expect_header().expect("header rejected");
        let rest: Vec<_> = reader.map(|l| l.unwrap().text).collect();
        assert_eq!(rest, vec!["BREAK\n".to_string()]);
    }

    #[test]
    fn header_rejects_trailing_tokens_and_missing_header() {
        for src in [
            ".IPPcode23 extra\n",
            ".IPPcode23\u{00A0}\n",
            "\u{3000}.IPPcode23\n",
            "MOVE GF@x GF@y\n",
            "",
            "# nothing\n\n",
            ".IPPcode22\n",
        ] {
            let mut reader = LineReader::new(src.as_bytes());
            assert!(
                matches!(reader.expect_header(), Err(ParseError::Header)),
                "accepted {src:?}"
            );
        }
    }

    #[test]
    fn invalid_utf8_is_an_input_error() {
        let bytes: &[u8] = b".IPPcode23\nWRITE string@\xff\n";
        let mut reader = LineReader::new(bytes);
        reader.expect_header().expect("header rejected");
        assert!(matches!(reader.next(), Some(Err(ParseError::Input(_)))));
    }
}
