//! Read parsing and contig output.

pub mod fasta;
pub mod fastq;
pub mod paths;
pub mod record;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Stdout, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;
pub use record::{Format, Record};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Lazily parses records of `format` from `reader`.
pub fn read_records<'a, R>(reader: R, format: Format) -> Box<dyn Iterator<Item = Result<Record>> + 'a>
where
    R: BufRead + 'a,
{
    match format {
        Format::Fasta => Box::new(fasta::parse_fasta(reader.lines())),
        Format::Fastq => Box::new(fastq::parse_fastq(reader.lines())),
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens `path` for reading, or stdin when no path is given.
/// Gzipped files are decompressed transparently.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        return Ok(Box::new(BufReader::new(io::stdin())));
    };
    let file = File::open(path)?;
    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Destination for assembled contigs.
pub enum Output {
    Stdout(BufWriter<Stdout>),
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl Output {
    /// Creates `path`, or writes to stdout when no path is given.
    pub fn create(path: Option<&Path>) -> io::Result<Self> {
        let Some(path) = path else {
            return Ok(Output::Stdout(BufWriter::new(io::stdout())));
        };
        let file = File::create(path)?;
        if is_gzip(path) {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(Output::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(Output::Plain(BufWriter::new(file)))
        }
    }

    /// Flushes buffered data and writes the gzip trailer if needed.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Output::Stdout(mut writer) => writer.flush(),
            Output::Plain(mut writer) => writer.flush(),
            Output::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::Plain(writer) => writer.write(buf),
            Output::Compressed(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::Plain(writer) => writer.flush(),
            Output::Compressed(writer) => writer.flush(),
        }
    }
}
