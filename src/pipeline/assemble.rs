use std::io::{BufRead, Write};
use std::time::Instant;

use tracing::{info, warn};

use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::graph::assembler::assemble;
use crate::io::fasta::FastaWriter;
use crate::io::{read_records, Format, Record};
use crate::stats::AssemblyStats;

/// Reads every record from `reader`, assembles them and writes the contigs
/// to `writer` as FASTA.
///
/// The stages run strictly in order and nothing is written unless assembly
/// succeeds. `line_width` wraps output sequences (`0` keeps one line per
/// contig).
pub fn assemble_reads<R, W>(
    reader: R,
    writer: W,
    format: Format,
    config: &AssemblyConfig,
    line_width: usize,
) -> Result<AssemblyStats>
where
    R: BufRead,
    W: Write,
{
    let start = Instant::now();

    info!("Reading {} records...", format);
    let records: Vec<Record> = read_records(reader, format).collect::<Result<_>>()?;
    info!("Read {} records", records.len());
    if records.is_empty() {
        warn!("Input contains no records; nothing to assemble");
    }

    let assembly = assemble(&records, config)?;
    let stats = AssemblyStats::from_assembly(records.len(), config, &assembly);

    info!("Writing {} contigs...", assembly.contigs.len());
    let mut fasta = FastaWriter::new(writer).with_line_width(line_width);
    fasta.write_records(&assembly.records())?;

    info!(
        "Assembly finished in {:.2}s: {} contigs, total length {}, N50 {}",
        start.elapsed().as_secs_f32(),
        stats.total_contigs,
        stats.total_length,
        stats.n50
    );
    Ok(stats)
}
