// src/io/fastq.rs
use std::io;
use std::iter::Enumerate;

use crate::error::{MetamerError, Result};
use crate::io::record::{check_sequence, parse_header, Format, Record};

/// Streaming FASTQ parser over 4-line groups.
///
/// Each group is `@header`, sequence, `+[header]`, quality. Only one record
/// is held at a time. The iterator stops after the first error.
pub struct FastqRecords<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines: Enumerate<I>,
    failed: bool,
}

impl<I> FastqRecords<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I) -> Self {
        FastqRecords {
            lines: lines.enumerate(),
            failed: false,
        }
    }

    /// Next line of the current record, or `TruncatedRecord` pointing at the
    /// record's header.
    fn continuation(&mut self, header_line: usize) -> Result<(usize, String)> {
        match self.lines.next() {
            Some((index, line)) => Ok((index + 1, line?.trim_end().to_string())),
            None => Err(MetamerError::TruncatedRecord { line: header_line }),
        }
    }

    fn read_record(&mut self, header_line: usize, header: &str) -> Result<Record> {
        let identifier = parse_header(header, Format::Fastq, header_line)?;

        let (sequence_line, sequence) = self.continuation(header_line)?;
        check_sequence(&sequence, sequence_line)?;

        let (separator_line, separator) = self.continuation(header_line)?;
        if !separator.starts_with('+') {
            return Err(MetamerError::InvalidSeparator { line: separator_line });
        }

        let (quality_line, quality) = self.continuation(header_line)?;
        let (expected, found) = (sequence.chars().count(), quality.chars().count());
        if expected != found {
            return Err(MetamerError::InvalidQualityScoreLength {
                line: quality_line,
                expected,
                found,
            });
        }

        Ok(Record::new(identifier, sequence).with_quality(quality))
    }
}

impl<I> Iterator for FastqRecords<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        // Blank lines between records are tolerated.
        let record = loop {
            let (index, line) = self.lines.next()?;
            match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => break self.read_record(index + 1, line.trim_end()),
                Err(e) => break Err(e.into()),
            }
        };
        self.failed = record.is_err();
        Some(record)
    }
}

/// Parses FASTQ text from any line source, e.g. `BufRead::lines()`.
pub fn parse_fastq<I>(lines: I) -> FastqRecords<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    FastqRecords::new(lines.into_iter())
}
