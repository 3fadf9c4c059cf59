mod cli_main;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli_main::Cli;
use metamer::io::{open_input, Output};
use metamer::pipeline::assemble_reads;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout may carry contigs, so logs go to stderr.
    let default_filter = if cli.verbose { "metamer=debug" } else { "metamer=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    cli.check_paths()?;

    let config = cli.assembly_config();
    info!("Assembling {} input with {:?}", cli.format, config);

    let reader = open_input(cli.input.as_deref()).context("failed to open input")?;

    // Contigs are buffered so a failed run leaves no output file behind.
    let mut contigs = Vec::new();
    let stats = assemble_reads(reader, &mut contigs, cli.format, &config, cli.line_width)?;

    // Stats first: a failure there must not leave a contig file behind.
    if let Some(path) = &cli.stats {
        stats
            .write_json(path)
            .with_context(|| format!("failed to write statistics to {}", path.display()))?;
    }

    let mut output = Output::create(cli.output.as_deref()).context("failed to create output")?;
    output.write_all(&contigs).context("failed to write contigs")?;
    output.finish().context("failed to write contigs")?;
    Ok(())
}
