//! End-to-end pipeline: parse, assemble, write.

pub mod assemble;

pub use assemble::assemble_reads;
