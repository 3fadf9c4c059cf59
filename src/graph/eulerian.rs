// src/graph/eulerian.rs
use crate::error::{EulerianObstruction, MetamerError, Result};
use crate::graph::debruijn::{DeBruijnGraph, EdgeId, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailKind {
    /// Starts at the +1 node and ends at the -1 node.
    Path,
    /// Every node balanced; returns to its start.
    Circuit,
}

/// A walk that uses every edge of one component exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    pub kind: TrailKind,
    pub start: NodeId,
    pub edges: Vec<EdgeId>,
}

/// Decides whether a component admits an Eulerian path or circuit and picks
/// the start node.
///
/// A path starts at its single +1 node. A circuit starts at the node whose
/// k-mer occurrences leave it most often relative to how often they enter it,
/// with ties going to the earliest inserted node.
pub fn plan_trail(graph: &DeBruijnGraph, component: usize, nodes: &[NodeId]) -> Result<(TrailKind, NodeId)> {
    let mut sources = Vec::new();
    let mut sinks = Vec::new();
    let mut unbalanced = 0;
    for &node in nodes {
        match graph.node(node).balance() {
            0 => continue,
            1 => sources.push(node),
            -1 => sinks.push(node),
            _ => {}
        }
        unbalanced += 1;
    }

    match (unbalanced, sources.as_slice(), sinks.len()) {
        (0, _, _) => {
            let mut start = None;
            for &node in nodes {
                let surplus = graph.node(node).weighted_balance();
                match start {
                    Some((_, best)) if best >= surplus => {}
                    _ => start = Some((node, surplus)),
                }
            }
            match start {
                Some((node, _)) => Ok((TrailKind::Circuit, node)),
                None => Err(MetamerError::NoEulerianPath {
                    component,
                    reason: EulerianObstruction::Incomplete { covered: 0, total: 0 },
                }),
            }
        }
        (2, &[source], 1) => Ok((TrailKind::Path, source)),
        _ => Err(MetamerError::NoEulerianPath {
            component,
            reason: EulerianObstruction::Unbalanced { nodes: unbalanced },
        }),
    }
}

/// Walks components with Hierholzer's algorithm.
///
/// Holds the per-node cursor into each out-edge list; an edge is used once
/// the cursor has moved past it. Out-edges are taken in first-seen order.
pub struct EulerianWalker<'g> {
    graph: &'g DeBruijnGraph,
    next_edge: Vec<usize>,
}

impl<'g> EulerianWalker<'g> {
    pub fn new(graph: &'g DeBruijnGraph) -> Self {
        EulerianWalker {
            graph,
            next_edge: vec![0; graph.node_count()],
        }
    }

    /// Finds the trail covering `nodes`, which must be one weakly connected
    /// component of the graph.
    pub fn walk(&mut self, component: usize, nodes: &[NodeId]) -> Result<Trail> {
        let graph = self.graph;
        let (kind, start) = plan_trail(graph, component, nodes)?;
        let total: usize = nodes.iter().map(|&n| graph.node(n).out_degree()).sum();

        // Depth-first walk; edges are emitted when their target is exhausted,
        // which splices detours into the trail at the node where they start.
        let mut stack: Vec<(NodeId, Option<EdgeId>)> = vec![(start, None)];
        let mut edges = Vec::with_capacity(total);
        while let Some(&(node, _)) = stack.last() {
            let cursor = &mut self.next_edge[node];
            if let Some(&edge) = graph.node(node).out_edges.get(*cursor) {
                *cursor += 1;
                stack.push((graph.edge(edge).target, Some(edge)));
            } else if let Some((_, Some(edge))) = stack.pop() {
                edges.push(edge);
            }
        }
        edges.reverse();

        if edges.len() != total {
            return Err(MetamerError::NoEulerianPath {
                component,
                reason: EulerianObstruction::Incomplete {
                    covered: edges.len(),
                    total,
                },
            });
        }
        Ok(Trail { kind, start, edges })
    }
}
