//! In-memory directed multigraph with hierarchical composition.
//!
//! layergraph stores one structural domain (a network, a call graph, a state
//! machine) at several levels of detail. Each level is a plain [`Graph`];
//! coarse vertices and edges record which fine elements they summarize, and
//! whole graphs can be registered as subgraphs of a supergraph.
//!
//! # Features
//!
//! - **Stable identities**: vertex and edge identities start at 1, grow
//!   monotonically per graph and are never reused.
//! - **Multigraph adjacency**: parallel edges and self-loops, with neighbor
//!   and edge lists kept on both endpoints of every edge.
//! - **Vertex hierarchy**: one super vertex per vertex, any number of sub
//!   vertices.
//! - **Edge hierarchy**: link composition (one super edge) or path
//!   composition (an ordered run of super edges), see [`SuperEdge`].
//! - **Graph hierarchy**: non-owning supergraph/subgraph registration.
//! - **Diagnostics**: `Display` renders an adjacency dump.
//!
//! # Quick Start
//!
//! ```rust
//! use layergraph::{Graph, Levels};
//!
//! let mut fine: Graph<&str, &str> = Graph::new();
//! let a = fine.add_vertex("a");
//! let b = fine.add_vertex("b");
//! let c = fine.add_vertex("c");
//! let ab = fine.add_edge(a, b, "a-b")?;
//!
//! let mut coarse: Graph<&str, &str> = Graph::new();
//! let left = coarse.add_vertex("left");
//! let right = coarse.add_vertex("right");
//! let trunk = coarse.add_edge(left, right, "trunk")?;
//!
//! let mut levels = Levels::new(&mut coarse, &mut fine);
//! levels.map_graphs()?;
//! levels.map_vertex(left, a)?;
//! levels.map_vertex(right, b)?;
//! levels.map_vertex(right, c)?;
//! levels.map_edge_link(trunk, ab)?;
//! assert_eq!(levels.sub_vertices(right)?, vec![&"b", &"c"]);
//! assert_eq!(levels.super_edge(ab)?, vec![&"trunk"]);
//! # Ok::<(), layergraph::LayerGraphError>(())
//! ```
//!
//! # Caller responsibilities
//!
//! Graphs are single-threaded and perform no internal locking. Hierarchy
//! links never own the element they point at: removing a vertex or edge
//! leaves links from other elements in place, and resolving one of those
//! later yields [`LayerGraphError::NotFound`]. Unmap before removing.

pub mod config;
pub mod errors;
pub mod graph;
pub mod hierarchy;
pub mod ids;

pub use config::{GraphConfig, HierarchyMode, RenderStyle};
pub use errors::{GraphResult, LayerGraphError};
pub use graph::{Edge, Edges, Graph, SuperEdge, Vertex, Vertices};
pub use hierarchy::Levels;
pub use ids::{EdgeId, EdgeRef, GraphId, VertexId, VertexRef};
