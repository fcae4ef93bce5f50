//! The [`Graph`] container and its stores.

mod edge_store;
mod handle;
mod record;
mod render;
mod vertex_store;

use ahash::AHashSet;

use crate::config::GraphConfig;
use crate::errors::{GraphResult, LayerGraphError};
use crate::ids::{EdgeId, EdgeRef, GraphId, VertexId, VertexRef};

pub(crate) use edge_store::EdgeStore;
pub use handle::{Edge, Edges, Vertex, Vertices};
pub use record::SuperEdge;
pub(crate) use vertex_store::VertexStore;

/// In-memory directed multigraph.
///
/// Vertices and edges carry one payload each (`V` and `E`) and are addressed
/// by identities that are issued in increasing order and never reused.
/// Adjacency is bookkept symmetrically: an edge `(u, v)` makes `u` and `v`
/// neighbors of each other and shows up in the incoming and outgoing edge
/// lists of both endpoints. The recorded direction is available through
/// [`Edge::from`] and [`Edge::to`].
///
/// A graph can also take part in a hierarchy (see [`crate::hierarchy`]):
/// its vertices and edges can summarize elements of finer graphs, and the
/// graph itself can be registered as a subgraph of a coarser one. All of
/// these links are non-owning. Removing an element does not touch links that
/// point at it from elsewhere; unmap first, or expect
/// [`LayerGraphError::NotFound`] when such a link is resolved later.
///
/// ```rust
/// use layergraph::Graph;
///
/// let mut graph: Graph<&str, &str> = Graph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let ab = graph.add_edge(a, b, "a-b")?;
///
/// assert_eq!(graph.edge(ab)?.from().id(), a);
/// assert!(graph.remove_vertex(a).is_err());
/// graph.remove_edge(ab)?;
/// assert_eq!(graph.remove_vertex(a)?, Some(b));
/// # Ok::<(), layergraph::LayerGraphError>(())
/// ```
#[derive(Debug)]
pub struct Graph<V, E> {
    id: GraphId,
    config: GraphConfig,
    pub(crate) vertices: VertexStore<V>,
    pub(crate) edges: EdgeStore<E>,
    pub(crate) supergraph: Option<GraphId>,
    pub(crate) subgraphs: Vec<GraphId>,
}

impl<V, E> Graph<V, E> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let id = GraphId::next();
        Self {
            id,
            config,
            vertices: VertexStore::new(id),
            edges: EdgeStore::new(id),
            supergraph: None,
            subgraphs: Vec::new(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.len() == 0
    }

    pub fn add_vertex(&mut self, value: V) -> VertexId {
        self.vertices.add(value)
    }

    /// Removes a vertex without incident edges and returns the next vertex
    /// identity in ascending order.
    ///
    /// Fails with [`LayerGraphError::InvalidOperation`] while the vertex still
    /// has neighbors; the graph is left unchanged in that case.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Option<VertexId>> {
        self.vertices.remove(id)
    }

    /// Removes every edge incident to `id`, then the vertex itself.
    pub fn remove_vertex_with_edges(&mut self, id: VertexId) -> GraphResult<Option<VertexId>> {
        let record = self.vertices.get(id)?;
        let mut seen = AHashSet::new();
        let incident: Vec<EdgeId> = record
            .out_edges
            .iter()
            .chain(record.in_edges.iter())
            .copied()
            .filter(|edge| seen.insert(*edge))
            .collect();
        for edge in incident {
            self.edges.remove(&mut self.vertices, edge)?;
        }
        self.vertices.remove(id)
    }

    pub fn vertex(&self, id: VertexId) -> GraphResult<Vertex<'_, V, E>> {
        let record = self.vertices.get(id)?;
        Ok(Vertex::new(self, record))
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut V> {
        Ok(&mut self.vertices.get_mut(id)?.element.value)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(id)
    }

    pub fn vertices(&self) -> Vertices<'_, V, E> {
        Vertices::new(self)
    }

    /// Adds an edge from `from` to `to`. Parallel edges and self-loops are
    /// allowed.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, value: E) -> GraphResult<EdgeId> {
        self.edges.add(&mut self.vertices, from, to, value)
    }

    /// Removes an edge and returns the next edge identity in ascending order.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Option<EdgeId>> {
        self.edges.remove(&mut self.vertices, id)
    }

    pub fn edge(&self, id: EdgeId) -> GraphResult<Edge<'_, V, E>> {
        let record = self.edges.get(id)?;
        Edge::new(self, record).ok_or_else(|| {
            LayerGraphError::not_found(format!("endpoints of {}", self.edges.reference(id)))
        })
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> GraphResult<&mut E> {
        Ok(&mut self.edges.get_mut(id)?.element.value)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id)
    }

    pub fn edges(&self) -> Edges<'_, V, E> {
        Edges::new(self)
    }

    /// Lowest-identity edge between `a` and `b`, whichever way it points.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> GraphResult<EdgeId> {
        self.edges.between(a, b)
    }

    pub fn resolve_vertex(&self, reference: VertexRef) -> GraphResult<Vertex<'_, V, E>> {
        if reference.graph != self.id {
            return Err(LayerGraphError::not_found(format!(
                "{reference} does not belong to graph {}",
                self.id
            )));
        }
        self.vertex(reference.vertex)
    }

    pub fn resolve_edge(&self, reference: EdgeRef) -> GraphResult<Edge<'_, V, E>> {
        if reference.graph != self.id {
            return Err(LayerGraphError::not_found(format!(
                "{reference} does not belong to graph {}",
                self.id
            )));
        }
        self.edge(reference.edge)
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
