use serde::Serialize;
use std::io;
use std::path::Path;

use crate::config::AssemblyConfig;
use crate::graph::assembler::Assembly;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssemblyStats {
    pub reads: usize,
    #[serde(flatten)]
    pub config: AssemblyConfig,
    // Graph
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    // Contigs
    pub total_contigs: usize,
    pub circular_contigs: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub n50: usize,
    pub longest: usize,
}

impl AssemblyStats {
    pub fn from_assembly(reads: usize, config: &AssemblyConfig, assembly: &Assembly) -> Self {
        let lengths: Vec<usize> = assembly.contigs.iter().map(|c| c.sequence.len()).collect();
        let total: usize = lengths.iter().sum();
        let total_contigs = lengths.len();
        let avg = if total_contigs > 0 { total as f64 / total_contigs as f64 } else { 0.0 };

        AssemblyStats {
            reads,
            config: config.clone(),
            nodes: assembly.nodes,
            edges: assembly.edges,
            components: assembly.components,
            total_contigs,
            circular_contigs: assembly.contigs.iter().filter(|c| c.circular).count(),
            total_length: total,
            average_length: avg,
            n50: n50(lengths.clone()),
            longest: lengths.iter().max().copied().unwrap_or(0),
        }
    }

    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Length of the shortest contig among the longest ones that together cover
/// half of the total length.
pub fn n50(mut lengths: Vec<usize>) -> usize {
    lengths.sort_unstable();
    let half_total = lengths.iter().sum::<usize>() / 2;
    let mut acc = 0;
    lengths.iter().rev().find(|&&len| {
        acc += len;
        acc >= half_total
    }).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::assembler::Contig;

    fn contig(id: usize, sequence: &str, circular: bool) -> Contig {
        Contig {
            id,
            sequence: sequence.to_string(),
            edges: sequence.len() - 2,
            circular,
        }
    }

    #[test]
    fn test_n50() {
        assert_eq!(n50(vec![20, 24, 4]), 24);
        assert_eq!(n50(vec![10, 10, 10, 10]), 10);
        assert_eq!(n50(vec![]), 0);
    }

    #[test]
    fn test_from_assembly() {
        let assembly = Assembly {
            contigs: vec![
                contig(1, "ATCGATCGATCGATCGATCG", false),
                contig(2, "GCTAGCTAGCTAGCTAGCTAGCTA", true),
                contig(3, "ATCG", false),
            ],
            nodes: 40,
            edges: 42,
            components: 3,
        };

        let stats = AssemblyStats::from_assembly(12, &AssemblyConfig::new(3), &assembly);
        assert_eq!(stats.total_contigs, 3);
        assert_eq!(stats.circular_contigs, 1);
        assert_eq!(stats.total_length, 48);
        assert_eq!(stats.average_length, 16.0);
        assert_eq!(stats.n50, 24);
        assert_eq!(stats.longest, 24);
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let assembly = Assembly { contigs: vec![contig(1, "DEABCD", true)], nodes: 5, edges: 5, components: 1 };
        AssemblyStats::from_assembly(2, &AssemblyConfig::new(3), &assembly).write_json(&path).unwrap();

        let json: serde_json::Value = serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(json["total_contigs"], 1);
        assert_eq!(json["n50"], 6);
        assert_eq!(json["components"], 1);
        assert_eq!(json["k"], 3);
        assert_eq!(json["edge_mode"], "collapsed");
    }
}
