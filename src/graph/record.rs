//! Store-resident records and the bookkeeping they carry.

use serde::{Deserialize, Serialize};

use crate::ids::{EdgeId, EdgeRef, VertexId, VertexRef};

/// Payload holder shared by vertex and edge records.
#[derive(Debug, Clone)]
pub(crate) struct Element<I, T> {
    pub(crate) id: I,
    pub(crate) value: T,
}

impl<I, T> Element<I, T> {
    pub(crate) fn new(id: I, value: T) -> Self {
        Self { id, value }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct VertexRecord<V> {
    pub(crate) element: Element<VertexId, V>,
    /// One entry per incident edge endpoint, so parallel edges repeat a neighbor.
    pub(crate) neighbors: Vec<VertexId>,
    pub(crate) in_edges: Vec<EdgeId>,
    pub(crate) out_edges: Vec<EdgeId>,
    pub(crate) super_vertex: Option<VertexRef>,
    pub(crate) sub_vertices: Vec<VertexRef>,
}

impl<V> VertexRecord<V> {
    pub(crate) fn new(id: VertexId, value: V) -> Self {
        Self {
            element: Element::new(id, value),
            neighbors: Vec::new(),
            in_edges: Vec::new(),
            out_edges: Vec::new(),
            super_vertex: None,
            sub_vertices: Vec::new(),
        }
    }

    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    pub(crate) fn has_hierarchy_links(&self) -> bool {
        self.super_vertex.is_some() || !self.sub_vertices.is_empty()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeRecord<E> {
    pub(crate) element: Element<EdgeId, E>,
    pub(crate) from: VertexId,
    pub(crate) to: VertexId,
    pub(crate) super_edge: Option<SuperEdge>,
    pub(crate) sub_edges: Vec<EdgeRef>,
}

impl<E> EdgeRecord<E> {
    pub(crate) fn new(id: EdgeId, from: VertexId, to: VertexId, value: E) -> Self {
        Self {
            element: Element::new(id, value),
            from,
            to,
            super_edge: None,
            sub_edges: Vec::new(),
        }
    }

    pub(crate) fn super_refs(&self) -> &[EdgeRef] {
        match &self.super_edge {
            Some(super_edge) => super_edge.refs(),
            None => &[],
        }
    }

    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    pub(crate) fn has_hierarchy_links(&self) -> bool {
        self.super_edge.is_some() || !self.sub_edges.is_empty()
    }
}

/// The coarser edge(s) a sub-edge is summarized by.
///
/// `Link` is produced by link composition and always holds exactly one edge.
/// `Path` is produced by path composition and holds the super-edges in the
/// order they were mapped; together they model one fine edge stretched over
/// several coarse ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuperEdge {
    Link(EdgeRef),
    Path(Vec<EdgeRef>),
}

impl SuperEdge {
    pub fn refs(&self) -> &[EdgeRef] {
        match self {
            SuperEdge::Link(edge) => std::slice::from_ref(edge),
            SuperEdge::Path(edges) => edges,
        }
    }

    pub fn contains(&self, edge: &EdgeRef) -> bool {
        self.refs().contains(edge)
    }

    /// Appends `edge`, turning a link into a two-element path.
    pub(crate) fn extend(self, edge: EdgeRef) -> SuperEdge {
        match self {
            SuperEdge::Link(first) => SuperEdge::Path(vec![first, edge]),
            SuperEdge::Path(mut edges) => {
                edges.push(edge);
                SuperEdge::Path(edges)
            }
        }
    }
}

/// Erases the first occurrence of `item`.
pub(crate) fn remove_first<T: PartialEq>(list: &mut Vec<T>, item: &T) -> bool {
    match list.iter().position(|entry| entry == item) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}
