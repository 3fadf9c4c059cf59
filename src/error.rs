// src/error.rs
use std::fmt;
use thiserror::Error;

/// Errors produced while parsing reads and assembling contigs.
#[derive(Error, Debug)]
pub enum MetamerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: record header must start with '{marker}'")]
    InvalidIdentifier { line: usize, marker: char },

    #[error("line {line}: quality line has {found} symbols, expected {expected} to match the sequence")]
    InvalidQualityScoreLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unexpected symbol {symbol:?} in sequence")]
    InvalidSymbol { line: usize, symbol: char },

    #[error("line {line}: FASTQ separator line must start with '+'")]
    InvalidSeparator { line: usize },

    #[error("line {line}: FASTQ record is truncated")]
    TruncatedRecord { line: usize },

    #[error("k-mer length {k} is out of range ({})", kmer_range(.minimum, .length))]
    KmerLength {
        k: usize,
        /// Length of the offending sequence, when one is involved.
        length: Option<usize>,
        minimum: usize,
    },

    #[error("no Eulerian path in component {component}: {reason}")]
    NoEulerianPath {
        component: usize,
        reason: EulerianObstruction,
    },
}

fn kmer_range(minimum: &usize, length: &Option<usize>) -> String {
    match length {
        Some(length) => format!("expected {} up to the sequence length {}", minimum, length),
        None => format!("expected at least {}", minimum),
    }
}

/// Why a component of the de Bruijn graph could not be walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerianObstruction {
    /// Degree imbalance other than zero or one (+1, -1) pair.
    Unbalanced { nodes: usize },
    /// Edges span several components and splitting was disabled.
    Disconnected { components: usize },
    /// The trail ran out of edges before covering the component.
    Incomplete { covered: usize, total: usize },
}

impl fmt::Display for EulerianObstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EulerianObstruction::Unbalanced { nodes } => {
                write!(f, "{} nodes have unbalanced in/out degree", nodes)
            }
            EulerianObstruction::Disconnected { components } => {
                write!(f, "edges are split across {} connected components", components)
            }
            EulerianObstruction::Incomplete { covered, total } => {
                write!(f, "traversal covered {} of {} edges", covered, total)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MetamerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_line() {
        let err = MetamerError::InvalidQualityScoreLength { line: 4, expected: 6, found: 5 };
        assert_eq!(
            err.to_string(),
            "line 4: quality line has 5 symbols, expected 6 to match the sequence"
        );

        let err = MetamerError::NoEulerianPath {
            component: 0,
            reason: EulerianObstruction::Unbalanced { nodes: 4 },
        };
        assert!(err.to_string().contains("4 nodes have unbalanced"));

        let err = MetamerError::KmerLength { k: 7, length: Some(4), minimum: 1 };
        assert_eq!(
            err.to_string(),
            "k-mer length 7 is out of range (expected 1 up to the sequence length 4)"
        );
        let err = MetamerError::KmerLength { k: 1, length: None, minimum: 2 };
        assert_eq!(err.to_string(), "k-mer length 1 is out of range (expected at least 2)");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: MetamerError = io.into();
        assert!(matches!(err, MetamerError::Io(_)));
    }
}
