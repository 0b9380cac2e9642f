//! Line-record scanner.
//!
//! Input is a flat stream of whitespace-separated tokens; every five tokens
//! form one record `node1 node2 R X C`. Records may span or share physical
//! lines. Tokens are split on ASCII whitespace at the byte level, so bytes
//! that are not UTF-8 only matter when they land in a field. The first record
//! that cannot be read in full ends the stream:
//!
//! ```text
//! 1 2 0.01 0.1 0.02
//! 2 3 0.02 0.2
//!     0.04            <- still part of record 2
//! 3 x 0.01 0.1 0.0    <- `x` is not a node index: stop here
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Split};

use tracing::debug;
use ymat_core::{LineParams, NodeId};

const FIELD_NAMES: [&str; 5] = ["node1", "node2", "R", "X", "C"];

/// One transmission-line record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRecord {
    pub node1: NodeId,
    pub node2: NodeId,
    pub params: LineParams,
}

impl LineRecord {
    /// Larger of the two node indices.
    pub fn max_node(&self) -> u64 {
        self.node1.value().max(self.node2.value())
    }
}

/// Why the scanner stopped producing records.
#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// The stream ended on a record boundary.
    EndOfInput,
    /// The stream ended part-way through a record.
    ShortRecord { record: usize, fields: usize },
    /// A token could not be read as the expected field.
    InvalidField {
        record: usize,
        field: &'static str,
        token: String,
    },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndOfInput => write!(f, "end of input"),
            StopReason::ShortRecord { record, fields } => {
                write!(f, "record {record} has only {fields} of 5 fields")
            }
            StopReason::InvalidField {
                record,
                field,
                token,
            } => write!(f, "record {record}: invalid {field} '{token}'"),
        }
    }
}

/// Iterator over the records of a text stream.
pub struct RecordReader<R> {
    lines: Split<R>,
    pending: VecDeque<Vec<u8>>,
    records_read: usize,
    stop: Option<StopReason>,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            pending: VecDeque::new(),
            records_read: 0,
            stop: None,
        }
    }

    /// Reason the scanner stopped, once it has.
    pub fn stop_reason(&self) -> Option<&StopReason> {
        self.stop.as_ref()
    }

    pub fn records_read(&self) -> usize {
        self.records_read
    }

    fn next_token(&mut self) -> io::Result<Option<Vec<u8>>> {
        while self.pending.is_empty() {
            match self.lines.next() {
                Some(line) => {
                    self.pending.extend(
                        line?
                            .split(|b| b.is_ascii_whitespace())
                            .filter(|token| !token.is_empty())
                            .map(<[u8]>::to_vec),
                    );
                }
                None => return Ok(None),
            }
        }
        Ok(self.pending.pop_front())
    }

    /// Read the next record, or `None` once the stream is exhausted.
    pub fn next_record(&mut self) -> io::Result<Option<LineRecord>> {
        if self.stop.is_some() {
            return Ok(None);
        }
        let record = self.records_read + 1;

        let mut tokens: Vec<Vec<u8>> = Vec::with_capacity(FIELD_NAMES.len());
        while tokens.len() < FIELD_NAMES.len() {
            match self.next_token()? {
                Some(token) => tokens.push(token),
                None => {
                    let reason = if tokens.is_empty() {
                        StopReason::EndOfInput
                    } else {
                        StopReason::ShortRecord {
                            record,
                            fields: tokens.len(),
                        }
                    };
                    return Ok(self.halt(reason));
                }
            }
        }

        match parse_record(record, &tokens) {
            Ok(parsed) => {
                self.records_read = record;
                Ok(Some(parsed))
            }
            Err(reason) => Ok(self.halt(reason)),
        }
    }

    fn halt(&mut self, reason: StopReason) -> Option<LineRecord> {
        debug!(reason = %reason, "record scan stopped");
        self.stop = Some(reason);
        None
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = io::Result<LineRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

fn parse_record(record: usize, tokens: &[Vec<u8>]) -> Result<LineRecord, StopReason> {
    let invalid = |field: usize| StopReason::InvalidField {
        record,
        field: FIELD_NAMES[field],
        token: String::from_utf8_lossy(&tokens[field]).into_owned(),
    };

    let node = |field: usize| {
        field_text(tokens, field)
            .and_then(|t| t.parse::<u64>().ok())
            .and_then(|v| NodeId::try_new(v).ok())
            .ok_or_else(|| invalid(field))
    };
    let real = |field: usize| {
        field_text(tokens, field)
            .and_then(|t| t.parse::<f64>().ok())
            .ok_or_else(|| invalid(field))
    };

    Ok(LineRecord {
        node1: node(0)?,
        node2: node(1)?,
        params: LineParams::new(real(2)?, real(3)?, real(4)?),
    })
}

fn field_text(tokens: &[Vec<u8>], field: usize) -> Option<&str> {
    std::str::from_utf8(&tokens[field]).ok()
}
