//! Human-readable adjacency dump. Not meant to be parsed.

use std::fmt::{self, Display, Write};

use crate::config::RenderStyle;

use super::Graph;

impl<V: Display, E> Graph<V, E> {
    /// Renders the graph with an explicit [`RenderStyle`], ignoring the
    /// configured one.
    pub fn render(&self, style: RenderStyle) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_adjacency(&mut out, style);
        out
    }

    fn write_adjacency<W: Write>(&self, out: &mut W, style: RenderStyle) -> fmt::Result {
        writeln!(out, "Graph(n={}, m={})", self.vertex_count(), self.edge_count())?;
        for record in self.vertices.records() {
            write!(out, " {} -> [ ", record.element.value)?;
            let neighbors: Vec<&V> = record
                .neighbors
                .iter()
                .filter_map(|id| self.vertices.get(*id).ok())
                .map(|neighbor| &neighbor.element.value)
                .collect();
            let count = neighbors.len();
            for (index, neighbor) in neighbors.into_iter().enumerate() {
                let separator = match style {
                    RenderStyle::Standard if index + 1 < count => ", ",
                    RenderStyle::Legacy if index + 2 == count => ", ",
                    _ => " ",
                };
                write!(out, "{neighbor}{separator}")?;
            }
            writeln!(out, "]")?;
        }
        Ok(())
    }
}

impl<V: Display, E> Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_adjacency(f, self.config().render)
    }
}
