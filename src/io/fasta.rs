// src/io/fasta.rs
use std::io::{self, Write};
use std::iter::{Enumerate, Filter};

use crate::error::Result;
use crate::io::record::{check_sequence, parse_header, Format, Record};
use crate::io::LINE_ENDING;
use crate::utils::split_before::SplitBefore;

type NumberedLine = (usize, io::Result<String>);
type LineFilter = fn(&NumberedLine) -> bool;

fn is_content(line: &NumberedLine) -> bool {
    !matches!(&line.1, Ok(text) if text.trim().is_empty())
}

fn is_header(line: &NumberedLine) -> bool {
    matches!(&line.1, Ok(text) if text.starts_with('>'))
}

/// Lazily parses FASTA records from a stream of lines.
///
/// Records are delimited with [`SplitBefore`] on header lines, so only the
/// record being built is held in memory. The iterator stops after the first
/// error.
pub struct FastaRecords<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    chunks: SplitBefore<Filter<Enumerate<I>, LineFilter>, LineFilter>,
    failed: bool,
}

impl<I> FastaRecords<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I) -> Self {
        let content = lines.enumerate().filter(is_content as LineFilter);
        FastaRecords {
            chunks: SplitBefore::new(content, is_header as LineFilter),
            failed: false,
        }
    }
}

impl<I> Iterator for FastaRecords<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let record = record_from_chunk(self.chunks.next()?);
        self.failed = record.is_err();
        Some(record)
    }
}

fn record_from_chunk(chunk: Vec<NumberedLine>) -> Result<Record> {
    let mut lines = chunk.into_iter();
    let mut identifier = String::new();
    if let Some((index, header)) = lines.next() {
        identifier = parse_header(header?.trim_end(), Format::Fasta, index + 1)?;
    }

    let mut sequence = String::new();
    for (index, line) in lines {
        let line = line?;
        let line = line.trim();
        check_sequence(line, index + 1)?;
        sequence.push_str(line);
    }
    Ok(Record::new(identifier, sequence))
}

/// Parses FASTA text from any line source, e.g. `BufRead::lines()`.
pub fn parse_fasta<I>(lines: I) -> FastaRecords<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    FastaRecords::new(lines.into_iter())
}

/// Writes records as FASTA, optionally wrapping sequence lines.
pub struct FastaWriter<W: Write> {
    inner: W,
    line_width: Option<usize>,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(inner: W) -> Self {
        FastaWriter { inner, line_width: None }
    }

    /// Wrap sequences at `width` symbols; `0` disables wrapping.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = (width > 0).then_some(width);
        self
    }

    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        write!(self.inner, ">{}{}", record.identifier, LINE_ENDING)?;
        match self.line_width {
            Some(width) if record.sequence.len() > width => {
                // Sequences are ASCII, so byte chunks are symbol chunks.
                for line in record.sequence.as_bytes().chunks(width) {
                    self.inner.write_all(line)?;
                    self.inner.write_all(LINE_ENDING.as_bytes())?;
                }
            }
            _ => write!(self.inner, "{}{}", record.sequence, LINE_ENDING)?,
        }
        Ok(())
    }

    pub fn write_records<'a, R>(&mut self, records: R) -> io::Result<()>
    where
        R: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetamerError;

    fn lines(text: &str) -> Vec<io::Result<String>> {
        text.lines().map(|l| Ok(l.to_string())).collect()
    }

    #[test]
    fn test_parse_multiline_records() {
        let text = ">id0 test\nABC\nDEA\n\n>id1 test\nDEAB\n";
        let records: Vec<Record> = parse_fasta(lines(text)).collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Record::new("id0 test", "ABCDEA"));
        assert_eq!(records[1], Record::new("id1 test", "DEAB"));
    }

    #[test]
    fn test_crlf_lines() {
        let text = ">r1\r\nACGT\r\nAC\r\n";
        let raw = text.split('\n').map(|l| Ok::<_, io::Error>(l.to_string()));
        let records: Vec<Record> = parse_fasta(raw).collect::<Result<_>>().unwrap();
        assert_eq!(records, vec![Record::new("r1", "ACGTAC")]);
    }

    #[test]
    fn test_missing_header_fails_first_record() {
        let mut parser = parse_fasta(lines("ACGT\n>r1\nACGT\n"));
        assert!(matches!(
            parser.next(),
            Some(Err(MetamerError::InvalidIdentifier { line: 1, marker: '>' }))
        ));
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_invalid_symbol_reports_line() {
        let mut parser = parse_fasta(lines(">r1\nACGT\nAC-T\n"));
        assert!(matches!(
            parser.next(),
            Some(Err(MetamerError::InvalidSymbol { line: 3, symbol: '-' }))
        ));
    }

    #[test]
    fn test_io_error_is_surfaced() {
        let source = vec![
            Ok(">r1".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
        ];
        let mut parser = parse_fasta(source);
        assert!(matches!(parser.next(), Some(Err(MetamerError::Io(_)))));
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_fasta(lines("")).next().is_none());
        assert!(parse_fasta(lines("\n\n")).next().is_none());
    }

    #[test]
    fn test_write_wrapped() {
        let mut writer = FastaWriter::new(Vec::new()).with_line_width(4);
        writer.write_record(&Record::new("contig_1", "ACGTACGTAC")).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let expected = [">contig_1", "ACGT", "ACGT", "AC", ""].join(LINE_ENDING);
        assert_eq!(text, expected);
    }

    #[test]
    fn test_round_trip() {
        let records = vec![
            Record::new("id0 test", "ABCDEA"),
            Record::new("id1", "ACGTTGCAACGTTGCA"),
        ];
        let mut writer = FastaWriter::new(Vec::new()).with_line_width(5);
        writer.write_records(&records).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        let parsed: Vec<Record> = parse_fasta(lines(&text)).collect::<Result<_>>().unwrap();
        assert_eq!(parsed, records);
    }
}
