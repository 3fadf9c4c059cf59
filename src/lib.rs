//! metamer assembles short reads into contigs by walking Eulerian paths
//! through a de Bruijn graph of their k-mers.
//!
//! ```
//! use metamer::config::AssemblyConfig;
//! use metamer::graph::assemble;
//! use metamer::io::Record;
//!
//! let reads = vec![Record::new("id0", "ABCDEA"), Record::new("id1", "DEAB")];
//! let assembly = assemble(&reads, &AssemblyConfig::new(3))?;
//! assert_eq!(assembly.contigs[0].sequence, "DEABCD");
//! # Ok::<(), metamer::error::MetamerError>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod stats;
pub mod utils;
