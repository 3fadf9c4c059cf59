// src/graph/assembler.rs
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AssemblyConfig;
use crate::error::{EulerianObstruction, MetamerError, Result};
use crate::graph::debruijn::DeBruijnGraph;
use crate::graph::eulerian::{EulerianWalker, Trail, TrailKind};
use crate::io::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contig {
    /// 1-based, in component order.
    pub id: usize,
    pub sequence: String,
    /// Number of graph edges the contig covers.
    pub edges: usize,
    /// Built from an Eulerian circuit.
    pub circular: bool,
}

impl Contig {
    pub fn name(&self) -> String {
        format!("contig_{}", self.id)
    }

    pub fn to_record(&self) -> Record {
        Record::new(self.name(), self.sequence.clone())
    }
}

/// Result of assembling one graph.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub contigs: Vec<Contig>,
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
}

impl Assembly {
    pub fn records(&self) -> Vec<Record> {
        self.contigs.iter().map(Contig::to_record).collect()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records()
    }
}

/// Folds a trail into its sequence: the start node followed by the last
/// symbol of every node reached.
///
/// Circuits of more than one edge are cut open at their start: the closing
/// edge is not spelled again, so they yield m + k - 2 symbols instead of the
/// m + k - 1 of a path. A single self-loop is spelled in full.
pub fn fold_trail(graph: &DeBruijnGraph, trail: &Trail) -> String {
    let spelled = match trail.kind {
        TrailKind::Circuit if trail.edges.len() > 1 => &trail.edges[..trail.edges.len() - 1],
        _ => &trail.edges[..],
    };

    let mut sequence = graph.node(trail.start).label.clone();
    sequence.reserve(spelled.len());
    for &edge in spelled {
        let target = graph.node(graph.edge(edge).target);
        if let Some(symbol) = target.label.chars().last() {
            sequence.push(symbol);
        }
    }
    sequence
}

/// Assembles an already built graph, one contig per connected component.
///
/// Any component without an Eulerian path fails the whole assembly.
pub fn assemble_graph(graph: &DeBruijnGraph, config: &AssemblyConfig) -> Result<Assembly> {
    let components = graph.components();
    if !config.split_components && components.len() > 1 {
        return Err(MetamerError::NoEulerianPath {
            component: 0,
            reason: EulerianObstruction::Disconnected {
                components: components.len(),
            },
        });
    }

    let mut walker = EulerianWalker::new(graph);
    let mut contigs = Vec::with_capacity(components.len());
    for (index, nodes) in components.iter().enumerate() {
        let trail = walker.walk(index, nodes)?;
        let sequence = fold_trail(graph, &trail);
        debug!(
            "Component {}: {:?} over {} edges from {}",
            index,
            trail.kind,
            trail.edges.len(),
            graph.node(trail.start).label
        );
        contigs.push(Contig {
            id: index + 1,
            sequence,
            edges: trail.edges.len(),
            circular: trail.kind == TrailKind::Circuit,
        });
    }

    Ok(Assembly {
        contigs,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        components: components.len(),
    })
}

/// Builds the de Bruijn graph of `records` and assembles it.
pub fn assemble(records: &[Record], config: &AssemblyConfig) -> Result<Assembly> {
    info!("Building de Bruijn graph from {} reads with k={}", records.len(), config.k);
    let graph = DeBruijnGraph::build(records, config.k, config.edge_mode)?;
    info!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    let assembly = assemble_graph(&graph, config)?;
    info!(
        "Assembled {} contigs from {} components",
        assembly.contigs.len(),
        assembly.components
    );
    Ok(assembly)
}
