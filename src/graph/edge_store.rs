//! Edge record management.
//!
//! Edges reference their endpoints by vertex identity and keep the vertex
//! store's adjacency lists in step on insertion and removal. Hierarchy links
//! are stored here but only edited through [`crate::hierarchy`].

use std::collections::{BTreeMap, btree_map};
use std::ops::Bound::{Excluded, Unbounded};

use crate::errors::{GraphResult, LayerGraphError};
use crate::ids::{EdgeId, EdgeRef, GraphId, VertexId};

use super::record::{EdgeRecord, SuperEdge, remove_first};
use super::vertex_store::VertexStore;

#[derive(Debug)]
pub(crate) struct EdgeStore<E> {
    graph: GraphId,
    next_id: u64,
    records: BTreeMap<EdgeId, EdgeRecord<E>>,
}

impl<E> EdgeStore<E> {
    pub(crate) fn new(graph: GraphId) -> Self {
        Self {
            graph,
            next_id: 1,
            records: BTreeMap::new(),
        }
    }

    pub(crate) fn add<V>(
        &mut self,
        vertices: &mut VertexStore<V>,
        from: VertexId,
        to: VertexId,
        value: E,
    ) -> GraphResult<EdgeId> {
        vertices.get(from)?;
        vertices.get(to)?;

        let id = EdgeId(self.next_id);
        self.next_id += 1;
        self.records.insert(id, EdgeRecord::new(id, from, to, value));
        vertices.connect(from, to, id);
        #[cfg(feature = "logging")]
        log::trace!("graph {}: added edge {id} ({from} -> {to})", self.graph);
        Ok(id)
    }

    /// Detaches the edge from both endpoints, erases it and returns the
    /// identity that follows it. Hierarchy links are left as they are.
    pub(crate) fn remove<V>(
        &mut self,
        vertices: &mut VertexStore<V>,
        id: EdgeId,
    ) -> GraphResult<Option<EdgeId>> {
        let record = self.get(id)?;
        let (from, to) = (record.from, record.to);
        #[cfg(feature = "logging")]
        if record.has_hierarchy_links() {
            log::warn!(
                "removing {} while hierarchy links still point at it",
                self.reference(id)
            );
        }
        vertices.disconnect(from, to, id);
        self.records.remove(&id);
        #[cfg(feature = "logging")]
        log::trace!("graph {}: removed edge {id}", self.graph);
        Ok(self.next_after(id))
    }

    pub(crate) fn get(&self, id: EdgeId) -> GraphResult<&EdgeRecord<E>> {
        self.records
            .get(&id)
            .ok_or_else(|| LayerGraphError::not_found(self.reference(id).to_string()))
    }

    pub(crate) fn get_mut(&mut self, id: EdgeId) -> GraphResult<&mut EdgeRecord<E>> {
        let reference = self.reference(id);
        self.records
            .get_mut(&id)
            .ok_or_else(|| LayerGraphError::not_found(reference.to_string()))
    }

    pub(crate) fn contains(&self, id: EdgeId) -> bool {
        self.records.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn records(&self) -> btree_map::Values<'_, EdgeId, EdgeRecord<E>> {
        self.records.values()
    }

    pub(crate) fn reference(&self, id: EdgeId) -> EdgeRef {
        EdgeRef::new(self.graph, id)
    }

    /// Lowest-identity edge joining `a` and `b`, in either direction.
    pub(crate) fn between(&self, a: VertexId, b: VertexId) -> GraphResult<EdgeId> {
        self.records
            .values()
            .find(|record| {
                (record.from == a && record.to == b) || (record.from == b && record.to == a)
            })
            .map(|record| record.element.id)
            .ok_or_else(|| {
                LayerGraphError::not_found(format!(
                    "no edge between vertex {a} and vertex {b} in graph {}",
                    self.graph
                ))
            })
    }

    fn next_after(&self, id: EdgeId) -> Option<EdgeId> {
        self.records
            .range((Excluded(id), Unbounded))
            .next()
            .map(|(next, _)| *next)
    }

    pub(crate) fn push_sub(&mut self, id: EdgeId, sub: EdgeRef) -> GraphResult<()> {
        self.get_mut(id)?.sub_edges.push(sub);
        Ok(())
    }

    pub(crate) fn detach_sub(&mut self, id: EdgeId, sub: EdgeRef) -> bool {
        self.records
            .get_mut(&id)
            .is_some_and(|record| remove_first(&mut record.sub_edges, &sub))
    }

    /// Link composition: the super-edge set becomes exactly `sup`.
    pub(crate) fn link_super(&mut self, id: EdgeId, sup: EdgeRef) -> GraphResult<()> {
        self.get_mut(id)?.super_edge = Some(SuperEdge::Link(sup));
        Ok(())
    }

    /// Path composition: `sup` is appended to the super-edge set.
    pub(crate) fn append_super(&mut self, id: EdgeId, sup: EdgeRef) -> GraphResult<()> {
        let record = self.get_mut(id)?;
        record.super_edge = Some(match record.super_edge.take() {
            Some(current) => current.extend(sup),
            None => SuperEdge::Path(vec![sup]),
        });
        Ok(())
    }

    pub(crate) fn clear_super(&mut self, id: EdgeId) -> GraphResult<Option<SuperEdge>> {
        Ok(self.get_mut(id)?.super_edge.take())
    }
}
