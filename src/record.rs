//! Record stream decoding
//!
//! `git log` with our template emits one top-level `<entry>` element per
//! commit and nothing around them, so the stream as a whole is not a
//! well-formed document. The reader decodes records one at a time until
//! the input runs out instead of parsing a single document.

use crate::error::{Result, StandupError};
use crate::model::CommitRecord;

/// One decoded `<entry>` block, before project attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub author: String,
    pub date: String,
    pub message: String,
}

/// Incremental reader over one repository's raw extractor output.
pub struct RecordReader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Decode the next record, or `None` once the input is exhausted.
    pub fn next_record(&mut self) -> Result<Option<Entry>> {
        self.skip_whitespace();
        if self.pos == self.input.len() {
            return Ok(None);
        }

        self.expect("<entry>")?;
        let author = self.field("author")?;
        let date = self.field("date")?;
        let message = self.field("message")?;
        self.skip_whitespace();
        self.expect("</entry>")?;

        Ok(Some(Entry {
            author,
            date,
            message,
        }))
    }

    fn field(&mut self, name: &str) -> Result<String> {
        self.skip_whitespace();
        self.expect(&format!("<{name}>"))?;
        self.take_until(&format!("</{name}>"))
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn expect(&mut self, token: &str) -> Result<()> {
        if self.input[self.pos..].starts_with(token) {
            self.pos += token.len();
            Ok(())
        } else {
            Err(StandupError::Parse(format!(
                "expected {token} at byte {}",
                self.pos
            )))
        }
    }

    /// Content up to the first `closing`, verbatim; consumes the tag too.
    fn take_until(&mut self, closing: &str) -> Result<String> {
        match self.input[self.pos..].find(closing) {
            Some(at) => {
                let content = &self.input[self.pos..self.pos + at];
                self.pos += at + closing.len();
                Ok(content.to_string())
            }
            None => Err(StandupError::Parse(format!(
                "missing {closing} after byte {}",
                self.pos
            ))),
        }
    }
}

/// Decode every record in `raw`, tagging each with `project`.
pub fn decode_records(raw: &[u8], project: &str) -> Result<Vec<CommitRecord>> {
    let text = String::from_utf8_lossy(raw);
    let mut reader = RecordReader::new(&text);
    let mut records = Vec::new();

    while let Some(entry) = reader.next_record()? {
        records.push(CommitRecord {
            author: entry.author,
            project: project.to_string(),
            date: entry.date,
            message: entry.message,
        });
    }

    Ok(records)
}
