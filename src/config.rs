//! Per-graph configuration.
//!
//! A [`GraphConfig`] fixes how a graph treats hierarchy re-mapping and how its
//! diagnostic dump is laid out. The configuration is chosen at construction
//! and cannot change afterwards.

use serde::{Deserialize, Serialize};

/// How vertex, edge and graph hierarchy links react to re-mapping.
///
/// Hierarchy links are non-owning on both sides. Re-mapping a sub element
/// under a new super element leaves the old super element's sub list behind
/// unless somebody removes it from there.
///
/// # Examples
///
/// ```rust
/// use layergraph::{GraphConfig, HierarchyMode};
///
/// assert_eq!(GraphConfig::default().hierarchy, HierarchyMode::Strict);
/// assert_eq!(GraphConfig::compatible().hierarchy, HierarchyMode::Compatible);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HierarchyMode {
    /// Keep both sides of every link consistent.
    ///
    /// - Re-mapping removes the sub element from its previous super element's
    ///   sub list when that element lives in one of the graphs being edited.
    /// - A previous super element in any other graph rejects the call with
    ///   [`LayerGraphError::InvalidOperation`](crate::LayerGraphError::InvalidOperation).
    /// - Registering the same pair twice does not duplicate list entries.
    #[default]
    Strict,

    /// Overwrite back-references without touching the previous super
    /// element, and append duplicate registrations as they come.
    Compatible,
}

/// Layout of the neighbor list in the diagnostic dump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStyle {
    /// `[ a, b, c ]`
    #[default]
    Standard,

    /// Only the second-to-last neighbor is followed by a comma: `[ a b, c ]`.
    Legacy,
}

/// Configuration for a [`Graph`](crate::Graph).
///
/// ```rust
/// use layergraph::{Graph, GraphConfig, RenderStyle};
///
/// let cfg = GraphConfig::compatible().with_render(RenderStyle::Legacy);
/// let graph: Graph<&str, &str> = Graph::with_config(cfg);
/// assert_eq!(graph.config().render, RenderStyle::Legacy);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub hierarchy: HierarchyMode,
    pub render: RenderStyle,
}

impl GraphConfig {
    pub fn new(hierarchy: HierarchyMode) -> Self {
        Self {
            hierarchy,
            render: RenderStyle::default(),
        }
    }

    pub fn strict() -> Self {
        Self::new(HierarchyMode::Strict)
    }

    pub fn compatible() -> Self {
        Self::new(HierarchyMode::Compatible)
    }

    pub fn with_render(mut self, render: RenderStyle) -> Self {
        self.render = render;
        self
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.hierarchy == HierarchyMode::Strict
    }
}
