use crate::{
    constants::{LOCATION_RECORD_TYPE, RECORD_TYPE_FIELD},
    error::MapError,
    types::SourceRecord,
};

use std::io;

use serde_json::Value;
use tracing::event;

/// Blank lines and lines starting with `#` (after leading whitespace) are
/// comments and never reach the JSON parser.
pub(crate) fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn is_location(value: &Value) -> bool {
    value.get(RECORD_TYPE_FIELD).and_then(Value::as_str) == Some(LOCATION_RECORD_TYPE)
}

/// Pulls lines one at a time and yields only the `location` records.
pub(crate) struct RecordFilter<I> {
    lines: I,
    line_number: usize,
}

impl<I> RecordFilter<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I) -> Self {
        RecordFilter {
            lines,
            line_number: 0,
        }
    }
}

impl<I> Iterator for RecordFilter<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<SourceRecord, MapError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(MapError::Io(e))),
            };
            self.line_number += 1;

            if is_comment(&line) {
                continue;
            }

            let value: Value = match serde_json::from_str(&line) {
                Ok(value) => value,
                Err(source) => {
                    return Some(Err(MapError::MalformedLine {
                        line: self.line_number,
                        source,
                    }));
                }
            };

            if is_location(&value) {
                return Some(Ok(SourceRecord {
                    line: self.line_number,
                    value,
                }));
            }

            event!(
                tracing::Level::TRACE,
                "Skipping non-location record on line {}",
                self.line_number
            );
        }
    }
}
