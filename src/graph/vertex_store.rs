//! Vertex record management.
//!
//! The store owns every vertex record of one graph, hands out identities from
//! a counter that never goes backwards, and keeps the adjacency and hierarchy
//! lists that other components update through it.

use std::collections::{BTreeMap, btree_map};
use std::ops::Bound::{Excluded, Unbounded};

use crate::errors::{GraphResult, LayerGraphError};
use crate::ids::{EdgeId, GraphId, VertexId, VertexRef};

use super::record::{VertexRecord, remove_first};

#[derive(Debug)]
pub(crate) struct VertexStore<V> {
    graph: GraphId,
    next_id: u64,
    records: BTreeMap<VertexId, VertexRecord<V>>,
}

impl<V> VertexStore<V> {
    pub(crate) fn new(graph: GraphId) -> Self {
        Self {
            graph,
            next_id: 1,
            records: BTreeMap::new(),
        }
    }

    pub(crate) fn add(&mut self, value: V) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.records.insert(id, VertexRecord::new(id, value));
        #[cfg(feature = "logging")]
        log::trace!("graph {}: added vertex {id}", self.graph);
        id
    }

    /// Removes an isolated vertex and returns the identity that follows it.
    pub(crate) fn remove(&mut self, id: VertexId) -> GraphResult<Option<VertexId>> {
        let record = self.get(id)?;
        if !record.neighbors.is_empty() {
            return Err(LayerGraphError::invalid_operation(format!(
                "{} still has neighbors",
                self.reference(id)
            )));
        }
        #[cfg(feature = "logging")]
        if record.has_hierarchy_links() {
            log::warn!(
                "removing {} while hierarchy links still point at it",
                self.reference(id)
            );
        }
        self.records.remove(&id);
        #[cfg(feature = "logging")]
        log::trace!("graph {}: removed vertex {id}", self.graph);
        Ok(self.next_after(id))
    }

    pub(crate) fn get(&self, id: VertexId) -> GraphResult<&VertexRecord<V>> {
        self.records
            .get(&id)
            .ok_or_else(|| LayerGraphError::not_found(self.reference(id).to_string()))
    }

    pub(crate) fn get_mut(&mut self, id: VertexId) -> GraphResult<&mut VertexRecord<V>> {
        let reference = self.reference(id);
        self.records
            .get_mut(&id)
            .ok_or_else(|| LayerGraphError::not_found(reference.to_string()))
    }

    pub(crate) fn contains(&self, id: VertexId) -> bool {
        self.records.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn records(&self) -> btree_map::Values<'_, VertexId, VertexRecord<V>> {
        self.records.values()
    }

    pub(crate) fn reference(&self, id: VertexId) -> VertexRef {
        VertexRef::new(self.graph, id)
    }

    fn next_after(&self, id: VertexId) -> Option<VertexId> {
        self.records
            .range((Excluded(id), Unbounded))
            .next()
            .map(|(next, _)| *next)
    }

    /// Records edge `edge` on both endpoints. Direction is stored on the edge
    /// record only; both endpoints list the edge as incoming and outgoing.
    /// Callers validate that both endpoints exist.
    pub(crate) fn connect(&mut self, from: VertexId, to: VertexId, edge: EdgeId) {
        if let Some(record) = self.records.get_mut(&to) {
            record.neighbors.push(from);
            record.in_edges.push(edge);
            record.out_edges.push(edge);
        }
        if let Some(record) = self.records.get_mut(&from) {
            record.neighbors.push(to);
            record.out_edges.push(edge);
            record.in_edges.push(edge);
        }
    }

    /// Reverses exactly one [`connect`](Self::connect) call.
    pub(crate) fn disconnect(&mut self, from: VertexId, to: VertexId, edge: EdgeId) {
        if let Some(record) = self.records.get_mut(&from) {
            remove_first(&mut record.neighbors, &to);
            remove_first(&mut record.in_edges, &edge);
            remove_first(&mut record.out_edges, &edge);
        }
        if let Some(record) = self.records.get_mut(&to) {
            remove_first(&mut record.neighbors, &from);
            remove_first(&mut record.in_edges, &edge);
            remove_first(&mut record.out_edges, &edge);
        }
    }

    pub(crate) fn push_sub(&mut self, id: VertexId, sub: VertexRef) -> GraphResult<()> {
        self.get_mut(id)?.sub_vertices.push(sub);
        Ok(())
    }

    /// Removes one registration of `sub`. A super vertex that has been removed
    /// in the meantime is not an error.
    pub(crate) fn detach_sub(&mut self, id: VertexId, sub: VertexRef) -> bool {
        self.records
            .get_mut(&id)
            .is_some_and(|record| remove_first(&mut record.sub_vertices, &sub))
    }

    pub(crate) fn set_super(&mut self, id: VertexId, sup: Option<VertexRef>) -> GraphResult<()> {
        self.get_mut(id)?.super_vertex = sup;
        Ok(())
    }
}
