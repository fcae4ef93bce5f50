//! Borrowed views over vertex and edge records.
//!
//! A view is only valid while the graph is borrowed, so it can never outlive
//! its record. Identities ([`VertexId`], [`EdgeId`]) are the long-lived
//! handles; turning one back into a view after the record was removed yields
//! [`LayerGraphError::NotFound`](crate::LayerGraphError::NotFound).

use std::collections::btree_map;
use std::fmt;

use crate::ids::{EdgeId, EdgeRef, VertexId, VertexRef};

use super::Graph;
use super::record::{EdgeRecord, SuperEdge, VertexRecord};

pub struct Vertex<'g, V, E> {
    graph: &'g Graph<V, E>,
    record: &'g VertexRecord<V>,
}

impl<'g, V, E> Vertex<'g, V, E> {
    pub(crate) fn new(graph: &'g Graph<V, E>, record: &'g VertexRecord<V>) -> Self {
        Self { graph, record }
    }

    pub fn id(&self) -> VertexId {
        self.record.element.id
    }

    pub fn value(&self) -> &'g V {
        &self.record.element.value
    }

    pub fn reference(&self) -> VertexRef {
        VertexRef::new(self.graph.id(), self.id())
    }

    pub fn has_neighbors(&self) -> bool {
        !self.record.neighbors.is_empty()
    }

    /// Neighbor identities, one entry per incident edge endpoint.
    pub fn neighbor_ids(&self) -> &'g [VertexId] {
        &self.record.neighbors
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Vertex<'g, V, E>> + use<'g, V, E> {
        let graph = self.graph;
        self.record
            .neighbors
            .iter()
            .filter_map(move |id| graph.vertices.get(*id).ok())
            .map(move |record| Vertex::new(graph, record))
    }

    pub fn in_edges(&self) -> &'g [EdgeId] {
        &self.record.in_edges
    }

    pub fn out_edges(&self) -> &'g [EdgeId] {
        &self.record.out_edges
    }

    pub fn has_supervertex(&self) -> bool {
        self.record.super_vertex.is_some()
    }

    pub fn has_subvertices(&self) -> bool {
        !self.record.sub_vertices.is_empty()
    }

    pub fn super_vertex(&self) -> Option<VertexRef> {
        self.record.super_vertex
    }

    pub fn sub_vertices(&self) -> &'g [VertexRef] {
        &self.record.sub_vertices
    }
}

impl<V, E> Clone for Vertex<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for Vertex<'_, V, E> {}

impl<V: fmt::Debug, E> fmt::Debug for Vertex<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id())
            .field("value", self.value())
            .finish()
    }
}

pub struct Edge<'g, V, E> {
    graph: &'g Graph<V, E>,
    record: &'g EdgeRecord<E>,
    from: &'g VertexRecord<V>,
    to: &'g VertexRecord<V>,
}

impl<'g, V, E> Edge<'g, V, E> {
    /// Resolves both endpoints up front; `None` only if the endpoint
    /// bookkeeping has been broken.
    pub(crate) fn new(graph: &'g Graph<V, E>, record: &'g EdgeRecord<E>) -> Option<Self> {
        let from = graph.vertices.get(record.from).ok()?;
        let to = graph.vertices.get(record.to).ok()?;
        Some(Self {
            graph,
            record,
            from,
            to,
        })
    }

    pub fn id(&self) -> EdgeId {
        self.record.element.id
    }

    pub fn value(&self) -> &'g E {
        &self.record.element.value
    }

    pub fn reference(&self) -> EdgeRef {
        EdgeRef::new(self.graph.id(), self.id())
    }

    pub fn from(&self) -> Vertex<'g, V, E> {
        Vertex::new(self.graph, self.from)
    }

    pub fn to(&self) -> Vertex<'g, V, E> {
        Vertex::new(self.graph, self.to)
    }

    pub fn has_superedge(&self) -> bool {
        !self.record.super_refs().is_empty()
    }

    pub fn has_subedges(&self) -> bool {
        !self.record.sub_edges.is_empty()
    }

    /// The composition the edge currently takes part in, if any.
    pub fn super_edge(&self) -> Option<&'g SuperEdge> {
        self.record.super_edge.as_ref()
    }

    /// All super-edges in mapping order, regardless of composition mode.
    pub fn super_edges(&self) -> &'g [EdgeRef] {
        self.record.super_refs()
    }

    pub fn sub_edges(&self) -> &'g [EdgeRef] {
        &self.record.sub_edges
    }
}

impl<V, E> Clone for Edge<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for Edge<'_, V, E> {}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Edge<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("id", &self.id())
            .field("from", &self.record.from)
            .field("to", &self.record.to)
            .field("value", self.value())
            .finish()
    }
}

/// Vertices in ascending identity order.
pub struct Vertices<'g, V, E> {
    graph: &'g Graph<V, E>,
    inner: btree_map::Values<'g, VertexId, VertexRecord<V>>,
}

impl<'g, V, E> Vertices<'g, V, E> {
    pub(crate) fn new(graph: &'g Graph<V, E>) -> Self {
        Self {
            graph,
            inner: graph.vertices.records(),
        }
    }
}

impl<'g, V, E> Iterator for Vertices<'g, V, E> {
    type Item = Vertex<'g, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|record| Vertex::new(self.graph, record))
    }
}

/// Edges in ascending identity order.
pub struct Edges<'g, V, E> {
    graph: &'g Graph<V, E>,
    inner: btree_map::Values<'g, EdgeId, EdgeRecord<E>>,
}

impl<'g, V, E> Edges<'g, V, E> {
    pub(crate) fn new(graph: &'g Graph<V, E>) -> Self {
        Self {
            graph,
            inner: graph.edges.records(),
        }
    }
}

impl<'g, V, E> Iterator for Edges<'g, V, E> {
    type Item = Edge<'g, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.inner.by_ref().find_map(|record| Edge::new(graph, record))
    }
}
