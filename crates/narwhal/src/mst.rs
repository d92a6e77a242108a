//! Prim's algorithm.
//!
//! Builds a minimum spanning tree rooted at a chosen vertex, a spanning
//! forest when the input is disconnected. The result is a pure value:
//! predecessor and connecting-weight arrays indexed by vertex id, plus the
//! summed weight of all tree edges.

use serde::Serialize;

use crate::data::heap::MinHeap;
use narwhal_graphlib::{Graph, VertexId, Weight};

/// Sentinel for "not yet connected": larger than any real edge weight.
const INFINITE: u64 = u64::MAX;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("root vertex {root} is out of range for a graph with {vertex_count} vertices")]
    RootOutOfRange { root: VertexId, vertex_count: usize },
}

/// Result of a Prim run.
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    root: VertexId,
    predecessor: Vec<Option<VertexId>>,
    connect_weight: Vec<Option<Weight>>,
    total_weight: u64,
}

impl SpanningTree {
    pub fn root(&self) -> VertexId {
        self.root
    }

    pub fn vertex_count(&self) -> usize {
        self.predecessor.len()
    }

    /// The vertex `v` hangs off in the tree. `None` for the root and for
    /// vertices the run never connected.
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessor.get(v).copied().flatten()
    }

    /// Weight of the edge connecting `v` to its predecessor. `Some(0)` for
    /// the root, `None` for unconnected vertices.
    pub fn connect_weight(&self, v: VertexId) -> Option<Weight> {
        self.connect_weight.get(v).copied().flatten()
    }

    pub fn is_reached(&self, v: VertexId) -> bool {
        self.connect_weight(v).is_some()
    }

    /// Summed weight of all tree edges. The root's zero and unconnected
    /// sentinels contribute nothing.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Tree edges as `(predecessor, vertex, weight)`, ascending by vertex id.
    pub fn tree_edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.predecessor.iter().enumerate().filter_map(|(v, p)| {
            let p = (*p)?;
            let w = self.connect_weight.get(v).copied().flatten()?;
            Some((p, v, w))
        })
    }
}

/// Run Prim's algorithm rooted at `root`.
///
/// Every vertex is queued with an infinite tentative weight, the root with
/// zero, and extracted in ascending order; each extraction relaxes the
/// extracted vertex's adjacency. Vertices extracted while still carrying the
/// sentinel relax their neighbors too, so a disconnected input yields a
/// spanning forest in which each unconnected component keeps exactly one
/// vertex without a predecessor. Ties between equal tentative weights are
/// broken arbitrarily.
pub fn prim(g: &Graph, root: VertexId) -> Result<SpanningTree> {
    let n = g.vertex_count();
    if root >= n {
        return Err(Error::RootOutOfRange {
            root,
            vertex_count: n,
        });
    }

    let mut dist: Vec<u64> = vec![INFINITE; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    dist[root] = 0;

    let mut queue = MinHeap::with_capacity(n);
    for v in 0..n {
        queue.push(v, dist[v]);
    }

    let mut relaxations = 0usize;
    while let Some((u, _)) = queue.pop() {
        let Some(vertex) = g.vertex(u) else {
            continue;
        };
        for (v, w) in vertex.edges() {
            let w = u64::from(w);
            if queue.contains(v) && w < dist[v] {
                pred[v] = Some(u);
                dist[v] = w;
                queue.decrease_key(v, w);
                relaxations += 1;
            }
        }
    }
    tracing::debug!(vertices = n, relaxations, root, "prim finished");

    let mut total: u64 = 0;
    let mut connect_weight: Vec<Option<Weight>> = Vec::with_capacity(n);
    for &d in &dist {
        if d == INFINITE {
            connect_weight.push(None);
        } else {
            total += d;
            // Finite tentative weights come from `u64::from` on a `Weight`,
            // so the narrowing is exact.
            connect_weight.push(Some(d as Weight));
        }
    }

    Ok(SpanningTree {
        root,
        predecessor: pred,
        connect_weight,
        total_weight: total,
    })
}
