// src/graph/debruijn.rs
use ahash::AHashMap;
use petgraph::unionfind::UnionFind;
use tracing::debug;

use crate::config::EdgeMode;
use crate::error::{MetamerError, Result};
use crate::io::Record;
use crate::kmer::kmers;

pub type NodeId = usize;
pub type EdgeId = usize;

/// A (k-1)-mer.
#[derive(Debug, Clone)]
pub struct Node {
    pub label: String,
    /// Outgoing edges in first-seen order.
    pub out_edges: Vec<EdgeId>,
    pub in_degree: usize,
    /// Occurrence counts of outgoing/incoming k-mers.
    pub weighted_out: usize,
    pub weighted_in: usize,
}

impl Node {
    fn new(label: String) -> Self {
        Node {
            label,
            out_edges: Vec::new(),
            in_degree: 0,
            weighted_out: 0,
            weighted_in: 0,
        }
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    /// out-degree minus in-degree, counting edges.
    pub fn balance(&self) -> isize {
        self.out_edges.len() as isize - self.in_degree as isize
    }

    /// Same as `balance` but counting k-mer occurrences.
    pub fn weighted_balance(&self) -> isize {
        self.weighted_out as isize - self.weighted_in as isize
    }
}

/// A k-mer linking its prefix node to its suffix node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// Number of k-mer occurrences folded into this edge.
    pub multiplicity: usize,
}

/// De Bruijn graph with interned nodes stored in an arena.
///
/// Edges refer to nodes by index, so cycles in the sequence never become
/// reference cycles.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    k: usize,
    mode: EdgeMode,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: AHashMap<String, NodeId>,
    edge_index: AHashMap<(NodeId, NodeId), EdgeId>,
}

impl DeBruijnGraph {
    /// Empty graph for k-mers of length `k`. Requires `k >= 2`.
    pub fn new(k: usize, mode: EdgeMode) -> Result<Self> {
        if k < 2 {
            return Err(MetamerError::KmerLength { k, length: None, minimum: 2 });
        }
        Ok(DeBruijnGraph {
            k,
            mode,
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: AHashMap::new(),
            edge_index: AHashMap::new(),
        })
    }

    /// Builds the graph from every k-mer of every record.
    ///
    /// Fails with `KmerLength` if a read is shorter than `k`.
    pub fn build<'a, I>(records: I, k: usize, mode: EdgeMode) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut graph = DeBruijnGraph::new(k, mode)?;
        for record in records {
            graph.add_sequence(&record.sequence).inspect_err(|_| {
                debug!("Read {} is shorter than k={}", record.identifier, k);
            })?;
        }
        debug!(
            "Built de Bruijn graph: {} nodes, {} edges (k={}, {:?})",
            graph.nodes.len(),
            graph.edges.len(),
            k,
            mode
        );
        Ok(graph)
    }

    pub fn add_sequence(&mut self, sequence: &str) -> Result<()> {
        for kmer in kmers(sequence, self.k)? {
            self.add_kmer(kmer);
        }
        Ok(())
    }

    fn add_kmer(&mut self, kmer: &str) {
        let first_len = kmer.chars().next().map_or(0, char::len_utf8);
        let last_start = kmer.char_indices().last().map_or(0, |(i, _)| i);
        let source = self.intern(&kmer[..last_start]);
        let target = self.intern(&kmer[first_len..]);

        self.nodes[source].weighted_out += 1;
        self.nodes[target].weighted_in += 1;

        if self.mode == EdgeMode::Collapsed {
            if let Some(&edge) = self.edge_index.get(&(source, target)) {
                self.edges[edge].multiplicity += 1;
                return;
            }
        }

        let edge = self.edges.len();
        self.edges.push(Edge { source, target, multiplicity: 1 });
        self.edge_index.entry((source, target)).or_insert(edge);
        self.nodes[source].out_edges.push(edge);
        self.nodes[target].in_degree += 1;
    }

    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.node_index.get(label) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(label.to_string()));
        self.node_index.insert(label.to_string(), id);
        id
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.node_index.get(label).copied()
    }

    /// The k-mer spelled by an edge.
    pub fn kmer(&self, id: EdgeId) -> String {
        let edge = &self.edges[id];
        let mut kmer = self.nodes[edge.source].label.clone();
        if let Some(last) = self.nodes[edge.target].label.chars().last() {
            kmer.push(last);
        }
        kmer
    }

    /// Weakly connected components, each listing its nodes in insertion
    /// order; components are ordered by their first node.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut sets = UnionFind::new(self.nodes.len());
        for edge in &self.edges {
            sets.union(edge.source, edge.target);
        }

        let mut slot_of_root: AHashMap<NodeId, usize> = AHashMap::new();
        let mut components: Vec<Vec<NodeId>> = Vec::new();
        for node in 0..self.nodes.len() {
            let root = sets.find(node);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(node);
        }
        components
    }
}
