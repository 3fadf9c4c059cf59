// src/kmer/kmer.rs
use std::iter::FusedIterator;
use std::str::CharIndices;

use crate::error::{MetamerError, Result};

/// Sliding window of length k over a sequence, left to right.
///
/// Yields borrowed `&str` slices; windows respect char boundaries.
#[derive(Debug, Clone)]
pub struct Kmers<'a> {
    sequence: &'a str,
    starts: CharIndices<'a>,
    ends: CharIndices<'a>,
    remaining: usize,
}

impl<'a> Iterator for Kmers<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (start, _) = self.starts.next()?;
        let end = self.ends.next().map_or(self.sequence.len(), |(end, _)| end);
        Some(&self.sequence[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Kmers<'_> {}

impl FusedIterator for Kmers<'_> {}

/// All `len - k + 1` k-mers of `sequence`.
///
/// Fails with `KmerLength` when `k` is zero or longer than the sequence.
pub fn kmers(sequence: &str, k: usize) -> Result<Kmers<'_>> {
    let length = sequence.chars().count();
    if k < 1 || k > length {
        return Err(MetamerError::KmerLength { k, length: Some(length), minimum: 1 });
    }

    let mut ends = sequence.char_indices();
    // Position the end cursor on the char just past the first window.
    ends.nth(k - 1);
    Ok(Kmers {
        sequence,
        starts: sequence.char_indices(),
        ends,
        remaining: length - k + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmers_in_order() {
        let found: Vec<&str> = kmers("ABCDEA", 3).unwrap().collect();
        assert_eq!(found, vec!["ABC", "BCD", "CDE", "DEA"]);
    }

    #[test]
    fn test_kmer_count_law() {
        let sequence = "ACGTTGCATGCA";
        for k in 1..=sequence.len() {
            let windows = kmers(sequence, k).unwrap();
            assert_eq!(windows.len(), sequence.len() - k + 1);
            let collected: Vec<&str> = windows.collect();
            assert_eq!(collected.len(), sequence.len() - k + 1);
            for (i, kmer) in collected.iter().enumerate() {
                assert_eq!(*kmer, &sequence[i..i + k]);
            }
        }
    }

    #[test]
    fn test_whole_sequence_is_one_kmer() {
        let found: Vec<&str> = kmers("DEAB", 4).unwrap().collect();
        assert_eq!(found, vec!["DEAB"]);
    }

    #[test]
    fn test_out_of_range_k() {
        assert!(matches!(
            kmers("ACG", 4),
            Err(MetamerError::KmerLength { k: 4, length: Some(3), .. })
        ));
        assert!(matches!(kmers("ACG", 0), Err(MetamerError::KmerLength { k: 0, .. })));
        assert!(matches!(kmers("", 1), Err(MetamerError::KmerLength { .. })));
    }

    #[test]
    fn test_multibyte_symbols() {
        let found: Vec<&str> = kmers("αβγ", 2).unwrap().collect();
        assert_eq!(found, vec!["αβ", "βγ"]);
    }
}
