//! Vertical links between vertices, edges and whole graphs.
//!
//! Three kinds of link exist:
//!
//! - **Vertex**: a super vertex summarizes any number of sub vertices; a sub
//!   vertex has at most one super vertex.
//! - **Edge**: a super edge summarizes any number of sub edges. A sub edge is
//!   either *linked* to exactly one super edge
//!   ([`SuperEdge::Link`](crate::SuperEdge::Link)) or lies on a *path* of
//!   super edges ([`SuperEdge::Path`](crate::SuperEdge::Path)).
//! - **Graph**: a supergraph keeps a list of subgraphs; each graph has at most
//!   one supergraph.
//!
//! Links are stored as `(graph, element)` pairs on both sides and never own
//! the other side. Links between elements of one graph are edited through
//! the methods on [`Graph`]; links between a coarse and a fine graph through
//! [`Levels`]. Both run the same algorithms, so the semantics are identical.
//!
//! Removing an element never repairs links that point at it. Resolving such
//! a link afterwards reports [`LayerGraphError::NotFound`]. Unmapping a
//! removed sub element still detaches it from its super element.

use crate::config::GraphConfig;
use crate::errors::{GraphResult, LayerGraphError};
use crate::graph::{EdgeStore, Graph, VertexStore};
use crate::ids::{EdgeId, EdgeRef, GraphId, VertexId, VertexRef};

/// Access to the stores of the graphs taking part in one hierarchy edit.
pub(crate) trait LevelAccess<V, E> {
    fn config(&self) -> GraphConfig;
    fn vertex_store(&self, graph: GraphId) -> Option<&VertexStore<V>>;
    fn vertex_store_mut(&mut self, graph: GraphId) -> Option<&mut VertexStore<V>>;
    fn edge_store(&self, graph: GraphId) -> Option<&EdgeStore<E>>;
    fn edge_store_mut(&mut self, graph: GraphId) -> Option<&mut EdgeStore<E>>;
}

impl<V, E> LevelAccess<V, E> for Graph<V, E> {
    fn config(&self) -> GraphConfig {
        *Graph::config(self)
    }

    fn vertex_store(&self, graph: GraphId) -> Option<&VertexStore<V>> {
        (graph == self.id()).then_some(&self.vertices)
    }

    fn vertex_store_mut(&mut self, graph: GraphId) -> Option<&mut VertexStore<V>> {
        (graph == self.id()).then_some(&mut self.vertices)
    }

    fn edge_store(&self, graph: GraphId) -> Option<&EdgeStore<E>> {
        (graph == self.id()).then_some(&self.edges)
    }

    fn edge_store_mut(&mut self, graph: GraphId) -> Option<&mut EdgeStore<E>> {
        (graph == self.id()).then_some(&mut self.edges)
    }
}

fn outside<R: std::fmt::Display>(reference: R) -> LayerGraphError {
    LayerGraphError::not_found(format!("{reference} is outside the graphs being edited"))
}

fn vertex_value<V, E, A>(access: &A, reference: VertexRef) -> GraphResult<&V>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let store = access
        .vertex_store(reference.graph)
        .ok_or_else(|| outside(reference))?;
    Ok(&store.get(reference.vertex)?.element.value)
}

fn edge_value<V, E, A>(access: &A, reference: EdgeRef) -> GraphResult<&E>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let store = access
        .edge_store(reference.graph)
        .ok_or_else(|| outside(reference))?;
    Ok(&store.get(reference.edge)?.element.value)
}

fn vertex_store_mut<V, E, A>(access: &mut A, graph: GraphId) -> GraphResult<&mut VertexStore<V>>
where
    A: LevelAccess<V, E> + ?Sized,
{
    access
        .vertex_store_mut(graph)
        .ok_or_else(|| LayerGraphError::not_found(format!("graph {graph} is not being edited")))
}

fn edge_store_mut<V, E, A>(access: &mut A, graph: GraphId) -> GraphResult<&mut EdgeStore<E>>
where
    A: LevelAccess<V, E> + ?Sized,
{
    access
        .edge_store_mut(graph)
        .ok_or_else(|| LayerGraphError::not_found(format!("graph {graph} is not being edited")))
}

pub(crate) fn map_vertex<V, E, A>(access: &mut A, sup: VertexRef, sub: VertexRef) -> GraphResult<()>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let strict = access.config().is_strict();
    let already_listed = vertex_record_subs(access, sup)?.contains(&sub);
    let previous = {
        let store = access.vertex_store(sub.graph).ok_or_else(|| outside(sub))?;
        store.get(sub.vertex)?.super_vertex
    };

    let mut stale = None;
    match previous {
        Some(current) if current == sup => {
            if strict && already_listed {
                return Ok(());
            }
        }
        Some(current) => {
            if strict {
                if access.vertex_store(current.graph).is_none() {
                    return Err(LayerGraphError::invalid_operation(format!(
                        "{sub} is already mapped under {current}, which is outside the graphs being edited"
                    )));
                }
                stale = Some(current);
            } else {
                #[cfg(feature = "logging")]
                log::warn!(
                    "{sub} re-mapped from {current} to {sup}; {current} keeps a stale entry"
                );
            }
        }
        None => {}
    }

    if let Some(current) = stale {
        vertex_store_mut(access, current.graph)?.detach_sub(current.vertex, sub);
        #[cfg(feature = "logging")]
        log::debug!("detached {sub} from previous super vertex {current}");
    }
    if !(strict && already_listed) {
        vertex_store_mut(access, sup.graph)?.push_sub(sup.vertex, sub)?;
    }
    vertex_store_mut(access, sub.graph)?.set_super(sub.vertex, Some(sup))
}

pub(crate) fn unmap_vertex<V, E, A>(
    access: &mut A,
    sup: VertexRef,
    sub: VertexRef,
) -> GraphResult<()>
where
    A: LevelAccess<V, E> + ?Sized,
{
    if !vertex_record_subs(access, sup)?.contains(&sub) {
        return Err(LayerGraphError::invalid_operation(format!(
            "{sub} is not a subvertex of {sup}"
        )));
    }
    let sub_exists = access
        .vertex_store(sub.graph)
        .ok_or_else(|| outside(sub))?
        .contains(sub.vertex);

    let sup_store = vertex_store_mut(access, sup.graph)?;
    if !sub_exists {
        #[cfg(feature = "logging")]
        log::debug!("dropping {sub} from {sup}; it was removed while mapped");
        while sup_store.detach_sub(sup.vertex, sub) {}
        return Ok(());
    }
    sup_store.detach_sub(sup.vertex, sub);
    vertex_store_mut(access, sub.graph)?.set_super(sub.vertex, None)
}

fn vertex_record_subs<'a, V: 'a, E, A>(
    access: &'a A,
    sup: VertexRef,
) -> GraphResult<&'a [VertexRef]>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let store = access.vertex_store(sup.graph).ok_or_else(|| outside(sup))?;
    Ok(&store.get(sup.vertex)?.sub_vertices)
}

fn edge_record_subs<'a, V, E: 'a, A>(access: &'a A, sup: EdgeRef) -> GraphResult<&'a [EdgeRef]>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let store = access.edge_store(sup.graph).ok_or_else(|| outside(sup))?;
    Ok(&store.get(sup.edge)?.sub_edges)
}

fn edge_record_supers<V, E, A>(access: &A, sub: EdgeRef) -> GraphResult<Vec<EdgeRef>>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let store = access.edge_store(sub.graph).ok_or_else(|| outside(sub))?;
    Ok(store.get(sub.edge)?.super_refs().to_vec())
}

/// Super edges of `sub` other than `keep` that strict mode has to detach from.
fn stale_super_edges<V, E, A>(
    access: &A,
    sub: EdgeRef,
    previous: &[EdgeRef],
    keep: EdgeRef,
) -> GraphResult<Vec<EdgeRef>>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let mut stale: Vec<EdgeRef> = Vec::new();
    for current in previous.iter().copied().filter(|current| *current != keep) {
        if access.edge_store(current.graph).is_none() {
            return Err(LayerGraphError::invalid_operation(format!(
                "{sub} is still mapped under {current}, which is outside the graphs being edited"
            )));
        }
        if !stale.contains(&current) {
            stale.push(current);
        }
    }
    Ok(stale)
}

fn detach_sub_edges<V, E, A>(access: &mut A, stale: &[EdgeRef], sub: EdgeRef) -> GraphResult<()>
where
    A: LevelAccess<V, E> + ?Sized,
{
    for current in stale {
        let store = edge_store_mut(access, current.graph)?;
        while store.detach_sub(current.edge, sub) {}
        #[cfg(feature = "logging")]
        log::debug!("detached {sub} from previous super edge {current}");
    }
    Ok(())
}

pub(crate) fn map_edge_link<V, E, A>(access: &mut A, sup: EdgeRef, sub: EdgeRef) -> GraphResult<()>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let strict = access.config().is_strict();
    let already_listed = edge_record_subs(access, sup)?.contains(&sub);
    let previous = edge_record_supers(access, sub)?;

    let stale = if strict {
        stale_super_edges(access, sub, &previous, sup)?
    } else {
        #[cfg(feature = "logging")]
        if previous.iter().any(|current| *current != sup) {
            log::warn!("{sub} re-linked to {sup}; previous super edges keep stale entries");
        }
        Vec::new()
    };

    detach_sub_edges(access, &stale, sub)?;
    if !(strict && already_listed) {
        edge_store_mut(access, sup.graph)?.push_sub(sup.edge, sub)?;
    }
    edge_store_mut(access, sub.graph)?.link_super(sub.edge, sup)
}

pub(crate) fn map_edge_path<V, E, A>(access: &mut A, sup: EdgeRef, sub: EdgeRef) -> GraphResult<()>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let strict = access.config().is_strict();
    let already_listed = edge_record_subs(access, sup)?.contains(&sub);
    let on_path = edge_record_supers(access, sub)?.contains(&sup);

    if strict && already_listed && on_path {
        return Ok(());
    }
    if !(strict && already_listed) {
        edge_store_mut(access, sup.graph)?.push_sub(sup.edge, sub)?;
    }
    if !(strict && on_path) {
        edge_store_mut(access, sub.graph)?.append_super(sub.edge, sup)?;
    }
    Ok(())
}

/// Removes `sub` from `sup` and clears every super edge of `sub`, not only
/// `sup`.
pub(crate) fn unmap_edge<V, E, A>(access: &mut A, sup: EdgeRef, sub: EdgeRef) -> GraphResult<()>
where
    A: LevelAccess<V, E> + ?Sized,
{
    if !edge_record_subs(access, sup)?.contains(&sub) {
        return Err(LayerGraphError::invalid_operation(format!(
            "{sub} is not a subedge of {sup}"
        )));
    }
    let sub_exists = access
        .edge_store(sub.graph)
        .ok_or_else(|| outside(sub))?
        .contains(sub.edge);
    if !sub_exists {
        #[cfg(feature = "logging")]
        log::debug!("dropping {sub} from {sup}; it was removed while mapped");
        let store = edge_store_mut(access, sup.graph)?;
        while store.detach_sub(sup.edge, sub) {}
        return Ok(());
    }

    let previous = edge_record_supers(access, sub)?;
    let stale = if access.config().is_strict() {
        stale_super_edges(access, sub, &previous, sup)?
    } else {
        #[cfg(feature = "logging")]
        if previous.iter().any(|current| *current != sup) {
            log::warn!("{sub} unmapped from {sup}; other super edges keep stale entries");
        }
        Vec::new()
    };

    edge_store_mut(access, sup.graph)?.detach_sub(sup.edge, sub);
    detach_sub_edges(access, &stale, sub)?;
    edge_store_mut(access, sub.graph)?.clear_super(sub.edge)?;
    Ok(())
}

/// Value of the super vertex of `sub`, if it lives in one of the accessible
/// graphs.
pub(crate) fn super_vertex_value<V, E, A>(access: &A, sub: VertexRef) -> GraphResult<Option<&V>>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let store = access.vertex_store(sub.graph).ok_or_else(|| outside(sub))?;
    match store.get(sub.vertex)?.super_vertex {
        Some(sup) if access.vertex_store(sup.graph).is_some() => {
            vertex_value(access, sup).map(Some)
        }
        _ => Ok(None),
    }
}

pub(crate) fn sub_vertex_values<V, E, A>(access: &A, sup: VertexRef) -> GraphResult<Vec<&V>>
where
    A: LevelAccess<V, E> + ?Sized,
{
    vertex_record_subs(access, sup)?
        .iter()
        .filter(|sub| access.vertex_store(sub.graph).is_some())
        .map(|sub| vertex_value(access, *sub))
        .collect()
}

pub(crate) fn super_edge_values<V, E, A>(access: &A, sub: EdgeRef) -> GraphResult<Vec<&E>>
where
    A: LevelAccess<V, E> + ?Sized,
{
    let store = access.edge_store(sub.graph).ok_or_else(|| outside(sub))?;
    store
        .get(sub.edge)?
        .super_refs()
        .iter()
        .filter(|sup| access.edge_store(sup.graph).is_some())
        .map(|sup| edge_value(access, *sup))
        .collect()
}

pub(crate) fn sub_edge_values<V, E, A>(access: &A, sup: EdgeRef) -> GraphResult<Vec<&E>>
where
    A: LevelAccess<V, E> + ?Sized,
{
    edge_record_subs(access, sup)?
        .iter()
        .filter(|sub| access.edge_store(sub.graph).is_some())
        .map(|sub| edge_value(access, *sub))
        .collect()
}

/// Hierarchy links between elements of the same graph.
impl<V, E> Graph<V, E> {
    fn vertex_ref(&self, id: VertexId) -> VertexRef {
        VertexRef::new(self.id(), id)
    }

    fn edge_ref(&self, id: EdgeId) -> EdgeRef {
        EdgeRef::new(self.id(), id)
    }

    /// Makes `sup` the super vertex of `sub`.
    pub fn map_vertex(&mut self, sup: VertexId, sub: VertexId) -> GraphResult<()> {
        let (sup, sub) = (self.vertex_ref(sup), self.vertex_ref(sub));
        map_vertex(self, sup, sub)
    }

    /// Like [`map_vertex`](Self::map_vertex), then hands `(super, sub)` to
    /// `observer`.
    pub fn map_vertex_with<F>(
        &mut self,
        sup: VertexId,
        sub: VertexId,
        observer: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&V, &V),
    {
        let (sup, sub) = (self.vertex_ref(sup), self.vertex_ref(sub));
        map_vertex(self, sup, sub)?;
        observer(vertex_value(self, sup)?, vertex_value(self, sub)?);
        Ok(())
    }

    pub fn unmap_vertex(&mut self, sup: VertexId, sub: VertexId) -> GraphResult<()> {
        let (sup, sub) = (self.vertex_ref(sup), self.vertex_ref(sub));
        unmap_vertex(self, sup, sub)
    }

    /// `observer` is skipped when `sub` was removed while still mapped.
    pub fn unmap_vertex_with<F>(
        &mut self,
        sup: VertexId,
        sub: VertexId,
        observer: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&V, &V),
    {
        let (sup, sub) = (self.vertex_ref(sup), self.vertex_ref(sub));
        unmap_vertex(self, sup, sub)?;
        if let Ok(sub) = vertex_value(self, sub) {
            observer(vertex_value(self, sup)?, sub);
        }
        Ok(())
    }

    /// Replaces the super edges of `sub` with `sup` alone.
    pub fn map_edge_link(&mut self, sup: EdgeId, sub: EdgeId) -> GraphResult<()> {
        let (sup, sub) = (self.edge_ref(sup), self.edge_ref(sub));
        map_edge_link(self, sup, sub)
    }

    pub fn map_edge_link_with<F>(
        &mut self,
        sup: EdgeId,
        sub: EdgeId,
        observer: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&E, &E),
    {
        let (sup, sub) = (self.edge_ref(sup), self.edge_ref(sub));
        map_edge_link(self, sup, sub)?;
        observer(edge_value(self, sup)?, edge_value(self, sub)?);
        Ok(())
    }

    /// Appends `sup` to the super edges of `sub`.
    pub fn map_edge_path(&mut self, sup: EdgeId, sub: EdgeId) -> GraphResult<()> {
        let (sup, sub) = (self.edge_ref(sup), self.edge_ref(sub));
        map_edge_path(self, sup, sub)
    }

    pub fn map_edge_path_with<F>(
        &mut self,
        sup: EdgeId,
        sub: EdgeId,
        observer: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&E, &E),
    {
        let (sup, sub) = (self.edge_ref(sup), self.edge_ref(sub));
        map_edge_path(self, sup, sub)?;
        observer(edge_value(self, sup)?, edge_value(self, sub)?);
        Ok(())
    }

    /// Removes `sub` from `sup` and clears all super edges of `sub`. A `sub`
    /// that was removed while mapped is only dropped from `sup`.
    pub fn unmap_edge(&mut self, sup: EdgeId, sub: EdgeId) -> GraphResult<()> {
        let (sup, sub) = (self.edge_ref(sup), self.edge_ref(sub));
        unmap_edge(self, sup, sub)
    }

    pub fn unmap_edge_with<F>(&mut self, sup: EdgeId, sub: EdgeId, observer: F) -> GraphResult<()>
    where
        F: FnOnce(&E, &E),
    {
        let (sup, sub) = (self.edge_ref(sup), self.edge_ref(sub));
        unmap_edge(self, sup, sub)?;
        if let Ok(sub) = edge_value(self, sub) {
            observer(edge_value(self, sup)?, sub);
        }
        Ok(())
    }

    /// Value of the super vertex of `id` when it lives in this graph.
    pub fn super_vertex(&self, id: VertexId) -> GraphResult<Option<&V>> {
        super_vertex_value(self, self.vertex_ref(id))
    }

    /// Values of the sub vertices of `id` that live in this graph.
    pub fn sub_vertices(&self, id: VertexId) -> GraphResult<Vec<&V>> {
        sub_vertex_values(self, self.vertex_ref(id))
    }

    /// Values of the super edges of `id` that live in this graph, in mapping
    /// order.
    pub fn super_edge(&self, id: EdgeId) -> GraphResult<Vec<&E>> {
        super_edge_values(self, self.edge_ref(id))
    }

    pub fn sub_edges(&self, id: EdgeId) -> GraphResult<Vec<&E>> {
        sub_edge_values(self, self.edge_ref(id))
    }
}

/// Graph-level hierarchy.
impl<V, E> Graph<V, E> {
    /// Registers `subgraph` below this graph. Nothing changes ownership.
    ///
    /// Mapping the same pair twice is a no-op. In strict mode a subgraph that
    /// already belongs to a different supergraph is rejected; in compatible
    /// mode its back-reference is overwritten.
    pub fn map_subgraph(&mut self, subgraph: &mut Graph<V, E>) -> GraphResult<()> {
        let listed = self.subgraphs.contains(&subgraph.id());
        match subgraph.supergraph {
            Some(current) if current == self.id() && listed => return Ok(()),
            Some(current) if current != self.id() => {
                if self.config().is_strict() {
                    return Err(LayerGraphError::invalid_operation(format!(
                        "graph {} is already a subgraph of graph {current}",
                        subgraph.id()
                    )));
                }
                #[cfg(feature = "logging")]
                log::warn!(
                    "graph {} moved from supergraph {current} to {}; graph {current} keeps a stale entry",
                    subgraph.id(),
                    self.id()
                );
            }
            _ => {}
        }
        if !listed {
            self.subgraphs.push(subgraph.id());
        }
        subgraph.supergraph = Some(self.id());
        Ok(())
    }

    pub fn unmap_subgraph(&mut self, subgraph: &mut Graph<V, E>) -> GraphResult<()> {
        let Some(position) = self.subgraphs.iter().position(|id| *id == subgraph.id()) else {
            return Err(LayerGraphError::invalid_operation(format!(
                "graph {} is not a subgraph of graph {}",
                subgraph.id(),
                self.id()
            )));
        };
        self.subgraphs.remove(position);
        if subgraph.supergraph == Some(self.id()) {
            subgraph.supergraph = None;
        }
        Ok(())
    }

    pub fn has_subgraph(&self, subgraph: &Graph<V, E>) -> bool {
        self.subgraphs.contains(&subgraph.id())
    }

    pub fn has_subgraphs(&self) -> bool {
        !self.subgraphs.is_empty()
    }

    pub fn supergraph(&self) -> Option<GraphId> {
        self.supergraph
    }

    pub fn subgraphs(&self) -> &[GraphId] {
        &self.subgraphs
    }
}

/// A coarse graph and a fine graph borrowed together for cross-level edits.
///
/// Super identities passed to the mapping methods refer to `upper`, sub
/// identities to `lower`. The pair runs in strict mode when either graph is
/// configured strict.
///
/// ```rust
/// use layergraph::{Graph, Levels};
///
/// let mut coarse: Graph<&str, &str> = Graph::new();
/// let mut fine: Graph<&str, &str> = Graph::new();
/// let region = coarse.add_vertex("region");
/// let host = fine.add_vertex("host");
///
/// let mut levels = Levels::new(&mut coarse, &mut fine);
/// levels.map_vertex(region, host)?;
/// assert_eq!(levels.super_vertex(host)?, Some(&"region"));
/// assert_eq!(levels.sub_vertices(region)?, vec![&"host"]);
/// # Ok::<(), layergraph::LayerGraphError>(())
/// ```
pub struct Levels<'a, V, E> {
    upper: &'a mut Graph<V, E>,
    lower: &'a mut Graph<V, E>,
}

impl<'a, V, E> Levels<'a, V, E> {
    pub fn new(upper: &'a mut Graph<V, E>, lower: &'a mut Graph<V, E>) -> Self {
        Self { upper, lower }
    }

    pub fn upper(&self) -> &Graph<V, E> {
        self.upper
    }

    pub fn lower(&self) -> &Graph<V, E> {
        self.lower
    }

    fn vertex_refs(&self, sup: VertexId, sub: VertexId) -> (VertexRef, VertexRef) {
        (
            VertexRef::new(self.upper.id(), sup),
            VertexRef::new(self.lower.id(), sub),
        )
    }

    fn edge_refs(&self, sup: EdgeId, sub: EdgeId) -> (EdgeRef, EdgeRef) {
        (
            EdgeRef::new(self.upper.id(), sup),
            EdgeRef::new(self.lower.id(), sub),
        )
    }

    /// Registers `lower` as a subgraph of `upper`.
    pub fn map_graphs(&mut self) -> GraphResult<()> {
        self.upper.map_subgraph(self.lower)
    }

    pub fn unmap_graphs(&mut self) -> GraphResult<()> {
        self.upper.unmap_subgraph(self.lower)
    }

    pub fn map_vertex(&mut self, sup: VertexId, sub: VertexId) -> GraphResult<()> {
        let (sup, sub) = self.vertex_refs(sup, sub);
        map_vertex(self, sup, sub)
    }

    pub fn map_vertex_with<F>(
        &mut self,
        sup: VertexId,
        sub: VertexId,
        observer: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&V, &V),
    {
        let (sup, sub) = self.vertex_refs(sup, sub);
        map_vertex(self, sup, sub)?;
        observer(vertex_value(self, sup)?, vertex_value(self, sub)?);
        Ok(())
    }

    pub fn unmap_vertex(&mut self, sup: VertexId, sub: VertexId) -> GraphResult<()> {
        let (sup, sub) = self.vertex_refs(sup, sub);
        unmap_vertex(self, sup, sub)
    }

    pub fn unmap_vertex_with<F>(
        &mut self,
        sup: VertexId,
        sub: VertexId,
        observer: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&V, &V),
    {
        let (sup, sub) = self.vertex_refs(sup, sub);
        unmap_vertex(self, sup, sub)?;
        if let Ok(sub) = vertex_value(self, sub) {
            observer(vertex_value(self, sup)?, sub);
        }
        Ok(())
    }

    pub fn map_edge_link(&mut self, sup: EdgeId, sub: EdgeId) -> GraphResult<()> {
        let (sup, sub) = self.edge_refs(sup, sub);
        map_edge_link(self, sup, sub)
    }

    pub fn map_edge_link_with<F>(
        &mut self,
        sup: EdgeId,
        sub: EdgeId,
        observer: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&E, &E),
    {
        let (sup, sub) = self.edge_refs(sup, sub);
        map_edge_link(self, sup, sub)?;
        observer(edge_value(self, sup)?, edge_value(self, sub)?);
        Ok(())
    }

    pub fn map_edge_path(&mut self, sup: EdgeId, sub: EdgeId) -> GraphResult<()> {
        let (sup, sub) = self.edge_refs(sup, sub);
        map_edge_path(self, sup, sub)
    }

    pub fn map_edge_path_with<F>(
        &mut self,
        sup: EdgeId,
        sub: EdgeId,
        observer: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&E, &E),
    {
        let (sup, sub) = self.edge_refs(sup, sub);
        map_edge_path(self, sup, sub)?;
        observer(edge_value(self, sup)?, edge_value(self, sub)?);
        Ok(())
    }

    pub fn unmap_edge(&mut self, sup: EdgeId, sub: EdgeId) -> GraphResult<()> {
        let (sup, sub) = self.edge_refs(sup, sub);
        unmap_edge(self, sup, sub)
    }

    pub fn unmap_edge_with<F>(&mut self, sup: EdgeId, sub: EdgeId, observer: F) -> GraphResult<()>
    where
        F: FnOnce(&E, &E),
    {
        let (sup, sub) = self.edge_refs(sup, sub);
        unmap_edge(self, sup, sub)?;
        if let Ok(sub) = edge_value(self, sub) {
            observer(edge_value(self, sup)?, sub);
        }
        Ok(())
    }

    /// Value of the super vertex of the fine vertex `sub`.
    pub fn super_vertex(&self, sub: VertexId) -> GraphResult<Option<&V>> {
        super_vertex_value(self, VertexRef::new(self.lower.id(), sub))
    }

    /// Values of the sub vertices of the coarse vertex `sup` that live in
    /// either graph of the pair.
    pub fn sub_vertices(&self, sup: VertexId) -> GraphResult<Vec<&V>> {
        sub_vertex_values(self, VertexRef::new(self.upper.id(), sup))
    }

    pub fn super_edge(&self, sub: EdgeId) -> GraphResult<Vec<&E>> {
        super_edge_values(self, EdgeRef::new(self.lower.id(), sub))
    }

    pub fn sub_edges(&self, sup: EdgeId) -> GraphResult<Vec<&E>> {
        sub_edge_values(self, EdgeRef::new(self.upper.id(), sup))
    }
}

impl<V, E> LevelAccess<V, E> for Levels<'_, V, E> {
    fn config(&self) -> GraphConfig {
        let upper = *self.upper.config();
        if upper.is_strict() || !self.lower.config().is_strict() {
            upper
        } else {
            *self.lower.config()
        }
    }

    fn vertex_store(&self, graph: GraphId) -> Option<&VertexStore<V>> {
        if graph == self.upper.id() {
            Some(&self.upper.vertices)
        } else if graph == self.lower.id() {
            Some(&self.lower.vertices)
        } else {
            None
        }
    }

    fn vertex_store_mut(&mut self, graph: GraphId) -> Option<&mut VertexStore<V>> {
        if graph == self.upper.id() {
            Some(&mut self.upper.vertices)
        } else if graph == self.lower.id() {
            Some(&mut self.lower.vertices)
        } else {
            None
        }
    }

    fn edge_store(&self, graph: GraphId) -> Option<&EdgeStore<E>> {
        if graph == self.upper.id() {
            Some(&self.upper.edges)
        } else if graph == self.lower.id() {
            Some(&self.lower.edges)
        } else {
            None
        }
    }

    fn edge_store_mut(&mut self, graph: GraphId) -> Option<&mut EdgeStore<E>> {
        if graph == self.upper.id() {
            Some(&mut self.upper.edges)
        } else if graph == self.lower.id() {
            Some(&mut self.lower.edges)
        } else {
            None
        }
    }
}
