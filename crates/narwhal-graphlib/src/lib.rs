//! Weighted graph container used by `narwhal`.
//!
//! Vertices carry a stable, insertion-ordered id (`id == index` into the
//! vertex storage) and a caller-chosen name. The storage primitive is a
//! directed arc with a positive integer weight; undirected connectivity is a
//! pair of arcs, which `add_undirected_edge` inserts in one call.

#![forbid(unsafe_code)]

use rustc_hash::FxBuildHasher;
use std::collections::BTreeMap;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Stable vertex identifier: the insertion index into the graph.
pub type VertexId = usize;

/// Edge weight. Arcs with weight 0 are rejected at insertion.
pub type Weight = u32;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge weight must be at least 1 ({v} -> {w} has weight {weight})")]
    InvalidEdgeWeight { v: String, w: String, weight: Weight },
}

/// A vertex and its outgoing arcs, keyed by neighbor id.
///
/// The adjacency is a `BTreeMap` so iteration is deterministic (ascending
/// neighbor id), matching the insertion-order guarantees of the rest of the
/// container.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    name: String,
    adj: BTreeMap<VertexId, Weight>,
}

impl Vertex {
    fn new(id: VertexId, name: String) -> Self {
        Self {
            id,
            name,
            adj: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing arcs as `(neighbor id, weight)`, ascending by neighbor id.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adj.iter().map(|(&v, &w)| (v, w))
    }

    /// Number of outgoing arcs.
    pub fn degree(&self) -> usize {
        self.adj.len()
    }

    /// Weight of the arc towards `other`, if one exists.
    pub fn weight_to(&self, other: VertexId) -> Option<Weight> {
        self.adj.get(&other).copied()
    }

    /// Returns true when the arc is new rather than an overwrite.
    fn link(&mut self, other: VertexId, weight: Weight) -> bool {
        self.adj.insert(other, weight).is_none()
    }
}

/// Insertion-ordered vertex storage with a name index.
///
/// Names are not required to be unique; `add` never rejects a duplicate, and
/// name lookups resolve to the first vertex inserted under that name.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    name_index: HashMap<String, VertexId>,
    arc_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to zero vertices and zero arcs.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.name_index.clear();
        self.arc_count = 0;
    }

    /// Append a vertex with the next sequential id.
    pub fn add(&mut self, name: impl Into<String>) -> VertexId {
        let name = name.into();
        let id = self.vertices.len();
        // First insertion wins so duplicate names keep resolving to the
        // earliest vertex.
        self.name_index.entry(name.clone()).or_insert(id);
        self.vertices.push(Vertex::new(id, name));
        id
    }

    fn ensure_vertex(&mut self, name: String) -> VertexId {
        if let Some(&id) = self.name_index.get(name.as_str()) {
            return id;
        }
        self.add(name)
    }

    /// Insert one directed arc `v -> w`, resolving or creating each endpoint
    /// by name.
    ///
    /// Weight validation happens before endpoint creation, so a rejected arc
    /// leaves the graph untouched.
    pub fn add_edge(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        weight: Weight,
    ) -> Result<()> {
        let v = v.into();
        let w = w.into();
        if weight < 1 {
            return Err(Error::InvalidEdgeWeight { v, w, weight });
        }
        let v_id = self.ensure_vertex(v);
        let w_id = self.ensure_vertex(w);
        if self.vertices[v_id].link(w_id, weight) {
            self.arc_count += 1;
        }
        Ok(())
    }

    /// Insert both arcs of an undirected edge in one call.
    pub fn add_undirected_edge(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        weight: Weight,
    ) -> Result<()> {
        let v = v.into();
        let w = w.into();
        self.add_edge(v.clone(), w.clone(), weight)?;
        self.add_edge(w, v, weight)
    }

    pub fn has_vertex(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    pub fn has_vertex_id(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// First vertex inserted under `name`, if any.
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertex_id(name).and_then(|id| self.vertices.get(id))
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.name_index.get(name).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed arcs. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.arc_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }
}
