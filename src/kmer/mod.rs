//! K-mer extraction.

pub mod kmer;

pub use kmer::{kmers, Kmers};
