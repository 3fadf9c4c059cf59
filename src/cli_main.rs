use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use metamer::config::{AssemblyConfig, EdgeMode};
use metamer::io::paths::{check_input, check_output};
use metamer::io::Format;

#[derive(Parser, Debug)]
#[command(
    name = "metamer",
    version,
    about = "Assemble reads into contigs with a de Bruijn graph",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Length of k-mer in the de Bruijn graph
    #[arg(short = 'k', value_parser = clap::value_parser!(u16).range(2..))]
    pub k: u16,

    /// Format of input data
    #[arg(short, long, value_enum)]
    pub format: Format,

    /// Input file with reads to be analyzed (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file to write contigs to (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How repeated k-mers become graph edges
    #[arg(long, value_enum, default_value_t = EdgeMode::Collapsed)]
    pub edge_mode: EdgeMode,

    /// Fail instead of emitting one contig per connected component
    #[arg(long)]
    pub single_component: bool,

    /// Wrap output sequences at this many symbols (0 disables wrapping)
    #[arg(long, default_value_t = 0)]
    pub line_width: usize,

    /// Write assembly statistics as JSON to this path
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn assembly_config(&self) -> AssemblyConfig {
        AssemblyConfig::new(usize::from(self.k))
            .with_edge_mode(self.edge_mode)
            .with_split_components(!self.single_component)
    }

    /// Validates every path before any input is read.
    pub fn check_paths(&self) -> anyhow::Result<()> {
        if let Some(input) = &self.input {
            check_input(input)?;
        }
        if let Some(output) = &self.output {
            check_output(output)?;
        }
        if let Some(stats) = &self.stats {
            if self.output.as_ref() == Some(stats) {
                bail!("{}: statistics and contigs cannot share a file", stats.display());
            }
            check_output(stats)?;
        }
        Ok(())
    }
}
