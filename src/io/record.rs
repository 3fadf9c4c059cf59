// src/io/record.rs
use std::fmt;

use crate::error::{MetamerError, Result};

/// Input/output record flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Format {
    #[value(alias = "fa", alias = "fna")]
    Fasta,
    #[value(alias = "fq")]
    Fastq,
}

impl Format {
    /// Character that opens a header line.
    pub fn marker(self) -> char {
        match self {
            Format::Fasta => '>',
            Format::Fastq => '@',
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Fasta => f.write_str("fasta"),
            Format::Fastq => f.write_str("fastq"),
        }
    }
}

/// One read or contig.
///
/// `identifier` is the header text without its marker character. FASTQ reads
/// also carry a quality string of the same length as the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub identifier: String,
    pub sequence: String,
    pub quality: Option<String>,
}

impl Record {
    pub fn new(identifier: impl Into<String>, sequence: impl Into<String>) -> Self {
        Record {
            identifier: identifier.into(),
            sequence: sequence.into(),
            quality: None,
        }
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Sequence symbols are ASCII letters: nucleotide and IUPAC codes as well as
/// arbitrary letter alphabets.
pub fn is_sequence_symbol(symbol: char) -> bool {
    symbol.is_ascii_alphabetic()
}

pub(crate) fn check_sequence(sequence: &str, line: usize) -> Result<()> {
    match sequence.chars().find(|&c| !is_sequence_symbol(c)) {
        Some(symbol) => Err(MetamerError::InvalidSymbol { line, symbol }),
        None => Ok(()),
    }
}

/// Strips the marker from a header line and returns the identifier.
pub(crate) fn parse_header(line: &str, format: Format, line_no: usize) -> Result<String> {
    let marker = format.marker();
    let identifier = line
        .strip_prefix(marker)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(MetamerError::InvalidIdentifier { line: line_no, marker })?;
    Ok(identifier.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(parse_header(">id0 test", Format::Fasta, 1).unwrap(), "id0 test");
        assert_eq!(parse_header("@read/1", Format::Fastq, 1).unwrap(), "read/1");
        assert!(matches!(
            parse_header("id0", Format::Fasta, 3),
            Err(MetamerError::InvalidIdentifier { line: 3, marker: '>' })
        ));
        assert!(matches!(
            parse_header(">   ", Format::Fasta, 1),
            Err(MetamerError::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            parse_header(">read", Format::Fastq, 1),
            Err(MetamerError::InvalidIdentifier { marker: '@', .. })
        ));
    }

    #[test]
    fn test_check_sequence() {
        assert!(check_sequence("ACGTNacgtn", 2).is_ok());
        assert!(check_sequence("ABCDEA", 2).is_ok());
        assert!(matches!(
            check_sequence("ACG T", 7),
            Err(MetamerError::InvalidSymbol { line: 7, symbol: ' ' })
        ));
    }

    #[test]
    fn test_format_names() {
        use clap::ValueEnum;
        assert_eq!(Format::from_str("fq", false).unwrap(), Format::Fastq);
        assert_eq!(Format::from_str("fna", false).unwrap(), Format::Fasta);
        assert!(Format::from_str("bam", false).is_err());
        assert_eq!(Format::Fastq.to_string(), "fastq");
    }
}
