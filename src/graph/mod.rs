//! De Bruijn graph construction and Eulerian assembly.

pub mod assembler;
pub mod debruijn;
pub mod eulerian;

pub use assembler::{assemble, Assembly, Contig};
pub use debruijn::DeBruijnGraph;
