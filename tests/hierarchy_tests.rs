use layergraph::{
    EdgeId, EdgeRef, Graph, GraphConfig, LayerGraphError, Levels, SuperEdge, VertexId, VertexRef,
};

type Net = Graph<&'static str, &'static str>;

struct Layers {
    coarse: Net,
    fine: Net,
    coarse_edges: Vec<EdgeId>,
    fine_edges: Vec<EdgeId>,
}

/// Coarse path `X - Y - Z` over a fine path `a - b - c - d`.
fn layers(config: GraphConfig) -> Layers {
    let mut coarse = Graph::with_config(config);
    let x = coarse.add_vertex("X");
    let y = coarse.add_vertex("Y");
    let z = coarse.add_vertex("Z");
    let coarse_edges = vec![
        coarse.add_edge(x, y, "XY").unwrap(),
        coarse.add_edge(y, z, "YZ").unwrap(),
    ];

    let mut fine = Graph::with_config(config);
    let a = fine.add_vertex("a");
    let b = fine.add_vertex("b");
    let c = fine.add_vertex("c");
    let d = fine.add_vertex("d");
    let fine_edges = vec![
        fine.add_edge(a, b, "ab").unwrap(),
        fine.add_edge(b, c, "bc").unwrap(),
        fine.add_edge(c, d, "cd").unwrap(),
    ];

    Layers {
        coarse,
        fine,
        coarse_edges,
        fine_edges,
    }
}

#[test]
fn test_vertex_mapping_across_levels() {
    let mut layers = layers(GraphConfig::default());
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    levels.map_vertex(VertexId(1), VertexId(1)).unwrap();
    levels.map_vertex(VertexId(1), VertexId(2)).unwrap();

    assert_eq!(levels.sub_vertices(VertexId(1)).unwrap(), vec![&"a", &"b"]);
    assert_eq!(levels.super_vertex(VertexId(2)).unwrap(), Some(&"X"));
    assert_eq!(levels.super_vertex(VertexId(3)).unwrap(), None);

    let fine_id = layers.fine.id();
    let coarse_id = layers.coarse.id();
    let x = layers.coarse.vertex(VertexId(1)).unwrap();
    assert!(x.has_subvertices());
    assert_eq!(
        x.sub_vertices(),
        &[
            VertexRef::new(fine_id, VertexId(1)),
            VertexRef::new(fine_id, VertexId(2))
        ]
    );
    let a = layers.fine.vertex(VertexId(1)).unwrap();
    assert!(a.has_supervertex());
    assert_eq!(a.super_vertex(), Some(VertexRef::new(coarse_id, VertexId(1))));
    assert_eq!(
        layers
            .coarse
            .resolve_vertex(a.super_vertex().unwrap())
            .unwrap()
            .value(),
        &"X"
    );
}

#[test]
fn test_vertex_mapping_within_one_graph() {
    let mut graph: Net = Graph::new();
    let group = graph.add_vertex("group");
    let member = graph.add_vertex("member");

    graph.map_vertex(group, member).unwrap();
    assert_eq!(graph.super_vertex(member).unwrap(), Some(&"group"));
    assert_eq!(graph.sub_vertices(group).unwrap(), vec![&"member"]);

    graph.unmap_vertex(group, member).unwrap();
    assert_eq!(graph.super_vertex(member).unwrap(), None);
    assert!(graph.sub_vertices(group).unwrap().is_empty());
}

#[test]
fn test_observers_receive_super_then_sub() {
    let mut layers = layers(GraphConfig::default());
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    let mut seen = Vec::new();

    levels
        .map_vertex_with(VertexId(2), VertexId(3), |sup, sub| {
            seen.push(format!("map {sup}<-{sub}"))
        })
        .unwrap();
    levels
        .unmap_vertex_with(VertexId(2), VertexId(3), |sup, sub| {
            seen.push(format!("unmap {sup}<-{sub}"))
        })
        .unwrap();
    levels
        .map_edge_path_with(EdgeId(1), EdgeId(2), |sup, sub| {
            seen.push(format!("path {sup}<-{sub}"))
        })
        .unwrap();

    assert_eq!(seen, vec!["map Y<-c", "unmap Y<-c", "path XY<-bc"]);
}

#[test]
fn test_failed_mapping_does_not_call_observer() {
    let mut layers = layers(GraphConfig::default());
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    let mut called = false;

    let result = levels.map_vertex_with(VertexId(9), VertexId(1), |_, _| called = true);
    assert!(matches!(result, Err(LayerGraphError::NotFound(_))));
    assert!(!called);
    assert!(!layers.fine.vertex(VertexId(1)).unwrap().has_supervertex());
}

#[test]
fn test_unmap_vertex_that_is_not_a_sub() {
    let mut layers = layers(GraphConfig::default());
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    levels.map_vertex(VertexId(1), VertexId(1)).unwrap();

    let err = levels.unmap_vertex(VertexId(2), VertexId(1)).unwrap_err();
    assert!(matches!(err, LayerGraphError::InvalidOperation(_)));
    assert_eq!(levels.super_vertex(VertexId(1)).unwrap(), Some(&"X"));
}

#[test]
fn test_strict_remap_detaches_previous_super_vertex() {
    let mut layers = layers(GraphConfig::strict());
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    levels.map_vertex(VertexId(1), VertexId(2)).unwrap();
    levels.map_vertex(VertexId(2), VertexId(2)).unwrap();
    levels.map_vertex(VertexId(2), VertexId(2)).unwrap();

    assert_eq!(levels.super_vertex(VertexId(2)).unwrap(), Some(&"Y"));
    assert!(levels.sub_vertices(VertexId(1)).unwrap().is_empty());
    assert_eq!(levels.sub_vertices(VertexId(2)).unwrap(), vec![&"b"]);
}

#[test]
fn test_compatible_remap_keeps_stale_sub_entry() {
    let mut layers = layers(GraphConfig::compatible());
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    levels.map_vertex(VertexId(1), VertexId(2)).unwrap();
    levels.map_vertex(VertexId(2), VertexId(2)).unwrap();

    assert_eq!(levels.super_vertex(VertexId(2)).unwrap(), Some(&"Y"));
    assert_eq!(levels.sub_vertices(VertexId(1)).unwrap(), vec![&"b"]);
    assert_eq!(levels.sub_vertices(VertexId(2)).unwrap(), vec![&"b"]);
}

#[test]
fn test_strict_remap_rejects_unreachable_previous_super() {
    let mut layers = layers(GraphConfig::strict());
    let mut other: Net = Graph::new();
    let elsewhere = other.add_vertex("elsewhere");
    Levels::new(&mut other, &mut layers.fine)
        .map_vertex(elsewhere, VertexId(1))
        .unwrap();

    let err = Levels::new(&mut layers.coarse, &mut layers.fine)
        .map_vertex(VertexId(1), VertexId(1))
        .unwrap_err();
    assert!(matches!(err, LayerGraphError::InvalidOperation(_)));
    assert_eq!(
        layers.fine.vertex(VertexId(1)).unwrap().super_vertex(),
        Some(VertexRef::new(other.id(), elsewhere))
    );
    assert!(!layers.coarse.vertex(VertexId(1)).unwrap().has_subvertices());
}

#[test]
fn test_link_composition_overwrites() {
    let mut layers = layers(GraphConfig::default());
    let (xy, yz) = (layers.coarse_edges[0], layers.coarse_edges[1]);
    let bc = layers.fine_edges[1];
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);

    levels.map_edge_link(xy, bc).unwrap();
    levels.map_edge_link(yz, bc).unwrap();
    assert_eq!(levels.super_edge(bc).unwrap(), vec![&"YZ"]);
    assert!(levels.sub_edges(xy).unwrap().is_empty());
    assert_eq!(levels.sub_edges(yz).unwrap(), vec![&"bc"]);

    let coarse_id = layers.coarse.id();
    let edge = layers.fine.edge(bc).unwrap();
    assert!(edge.has_superedge());
    assert_eq!(
        edge.super_edge(),
        Some(&SuperEdge::Link(EdgeRef::new(coarse_id, yz)))
    );
}

#[test]
fn test_path_composition_accumulates_in_order() {
    let mut layers = layers(GraphConfig::default());
    let (coarse1, coarse2) = (layers.coarse_edges[0], layers.coarse_edges[1]);
    let fine = layers.fine_edges[1];
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);

    levels.map_edge_path(coarse1, fine).unwrap();
    levels.map_edge_path(coarse2, fine).unwrap();
    assert_eq!(levels.super_edge(fine).unwrap(), vec![&"XY", &"YZ"]);
    assert_eq!(levels.sub_edges(coarse1).unwrap(), vec![&"bc"]);
    assert_eq!(levels.sub_edges(coarse2).unwrap(), vec![&"bc"]);

    let coarse_id = layers.coarse.id();
    let edge = layers.fine.edge(fine).unwrap();
    assert_eq!(
        edge.super_edges(),
        &[
            EdgeRef::new(coarse_id, coarse1),
            EdgeRef::new(coarse_id, coarse2)
        ]
    );
    assert!(matches!(edge.super_edge(), Some(SuperEdge::Path(_))));
}

#[test]
fn test_strict_path_ignores_repeated_segment() {
    let mut layers = layers(GraphConfig::strict());
    let xy = layers.coarse_edges[0];
    let ab = layers.fine_edges[0];
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);

    levels.map_edge_path(xy, ab).unwrap();
    levels.map_edge_path(xy, ab).unwrap();
    assert_eq!(levels.super_edge(ab).unwrap(), vec![&"XY"]);
    assert_eq!(levels.sub_edges(xy).unwrap(), vec![&"ab"]);
}

#[test]
fn test_compatible_path_appends_repeated_segment() {
    let mut layers = layers(GraphConfig::compatible());
    let xy = layers.coarse_edges[0];
    let ab = layers.fine_edges[0];
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);

    levels.map_edge_path(xy, ab).unwrap();
    levels.map_edge_path(xy, ab).unwrap();
    assert_eq!(levels.super_edge(ab).unwrap(), vec![&"XY", &"XY"]);
    assert_eq!(levels.sub_edges(xy).unwrap(), vec![&"ab", &"ab"]);
}

#[test]
fn test_unmap_edge_clears_whole_super_set() {
    let mut layers = layers(GraphConfig::strict());
    let (xy, yz) = (layers.coarse_edges[0], layers.coarse_edges[1]);
    let bc = layers.fine_edges[1];
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);

    levels.map_edge_path(xy, bc).unwrap();
    levels.map_edge_path(yz, bc).unwrap();
    levels.unmap_edge(xy, bc).unwrap();

    assert!(levels.super_edge(bc).unwrap().is_empty());
    assert!(levels.sub_edges(xy).unwrap().is_empty());
    assert!(levels.sub_edges(yz).unwrap().is_empty());
    assert!(!layers.fine.edge(bc).unwrap().has_superedge());
}

#[test]
fn test_compatible_unmap_edge_leaves_other_supers_listing_sub() {
    let mut layers = layers(GraphConfig::compatible());
    let (xy, yz) = (layers.coarse_edges[0], layers.coarse_edges[1]);
    let bc = layers.fine_edges[1];
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);

    levels.map_edge_path(xy, bc).unwrap();
    levels.map_edge_path(yz, bc).unwrap();
    levels.unmap_edge(xy, bc).unwrap();

    assert!(levels.super_edge(bc).unwrap().is_empty());
    assert_eq!(levels.sub_edges(yz).unwrap(), vec![&"bc"]);
}

#[test]
fn test_unmap_edge_that_is_not_a_sub() {
    let mut layers = layers(GraphConfig::default());
    let (xy, yz) = (layers.coarse_edges[0], layers.coarse_edges[1]);
    let ab = layers.fine_edges[0];
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    levels.map_edge_link(xy, ab).unwrap();

    let err = levels.unmap_edge(yz, ab).unwrap_err();
    assert!(matches!(err, LayerGraphError::InvalidOperation(_)));
    assert_eq!(levels.super_edge(ab).unwrap(), vec![&"XY"]);
}

#[test]
fn test_edge_mapping_within_one_graph() {
    let mut graph: Net = Graph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let summary = graph.add_edge(a, b, "summary").unwrap();
    let detail = graph.add_edge(a, b, "detail").unwrap();

    let mut observed = None;
    graph
        .map_edge_link_with(summary, detail, |sup, sub| observed = Some((*sup, *sub)))
        .unwrap();
    assert_eq!(observed, Some(("summary", "detail")));
    assert_eq!(graph.super_edge(detail).unwrap(), vec![&"summary"]);
    assert_eq!(graph.sub_edges(summary).unwrap(), vec![&"detail"]);
    assert!(graph.edge(summary).unwrap().has_subedges());

    graph
        .unmap_edge_with(summary, detail, |sup, sub| observed = Some((*sub, *sup)))
        .unwrap();
    assert_eq!(observed, Some(("detail", "summary")));
    assert!(graph.super_edge(detail).unwrap().is_empty());
}

#[test]
fn test_removed_super_vertex_reports_not_found() {
    let mut layers = layers(GraphConfig::default());
    Levels::new(&mut layers.coarse, &mut layers.fine)
        .map_vertex(VertexId(3), VertexId(4))
        .unwrap();
    layers.coarse.remove_vertex_with_edges(VertexId(3)).unwrap();

    let levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    assert!(matches!(
        levels.super_vertex(VertexId(4)),
        Err(LayerGraphError::NotFound(_))
    ));
    let dangling = layers.fine.vertex(VertexId(4)).unwrap().super_vertex().unwrap();
    assert!(layers.coarse.resolve_vertex(dangling).is_err());
}

#[test]
fn test_local_queries_skip_links_into_other_graphs() {
    let mut layers = layers(GraphConfig::default());
    Levels::new(&mut layers.coarse, &mut layers.fine)
        .map_vertex(VertexId(1), VertexId(1))
        .unwrap();

    assert_eq!(layers.fine.super_vertex(VertexId(1)).unwrap(), None);
    assert!(layers.coarse.sub_vertices(VertexId(1)).unwrap().is_empty());
    assert!(layers.fine.vertex(VertexId(1)).unwrap().has_supervertex());
}

#[test]
fn test_subgraph_registration() {
    let mut coarse: Net = Graph::new();
    let mut fine: Net = Graph::new();
    assert!(!coarse.has_subgraphs());
    assert_eq!(fine.supergraph(), None);

    coarse.map_subgraph(&mut fine).unwrap();
    coarse.map_subgraph(&mut fine).unwrap();
    assert!(coarse.has_subgraph(&fine));
    assert!(coarse.has_subgraphs());
    assert_eq!(coarse.subgraphs(), &[fine.id()]);
    assert_eq!(fine.supergraph(), Some(coarse.id()));

    coarse.unmap_subgraph(&mut fine).unwrap();
    assert!(!coarse.has_subgraph(&fine));
    assert_eq!(fine.supergraph(), None);

    let err = coarse.unmap_subgraph(&mut fine).unwrap_err();
    assert!(matches!(err, LayerGraphError::InvalidOperation(_)));
}

#[test]
fn test_subgraph_with_other_supergraph() {
    let mut first: Net = Graph::with_config(GraphConfig::strict());
    let mut second: Net = Graph::with_config(GraphConfig::compatible());
    let mut fine: Net = Graph::new();
    first.map_subgraph(&mut fine).unwrap();

    let mut strict: Net = Graph::with_config(GraphConfig::strict());
    assert!(matches!(
        strict.map_subgraph(&mut fine),
        Err(LayerGraphError::InvalidOperation(_))
    ));
    assert_eq!(fine.supergraph(), Some(first.id()));

    second.map_subgraph(&mut fine).unwrap();
    assert_eq!(fine.supergraph(), Some(second.id()));
    assert!(first.has_subgraph(&fine));
}

#[test]
fn test_levels_map_graphs() {
    let mut layers = layers(GraphConfig::default());
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    levels.map_graphs().unwrap();
    assert!(levels.upper().has_subgraph(levels.lower()));
    assert_eq!(levels.lower().supergraph(), Some(levels.upper().id()));

    levels.unmap_graphs().unwrap();
    assert!(!levels.upper().has_subgraphs());
}

#[test]
fn test_unmap_removed_sub_vertex_drops_dangling_entry() {
    let mut layers = layers(GraphConfig::default());
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    levels.map_vertex(VertexId(1), VertexId(1)).unwrap();
    levels.map_vertex(VertexId(1), VertexId(2)).unwrap();
    layers.fine.remove_vertex_with_edges(VertexId(1)).unwrap();

    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    assert!(matches!(
        levels.sub_vertices(VertexId(1)),
        Err(LayerGraphError::NotFound(_))
    ));

    let mut called = false;
    levels
        .unmap_vertex_with(VertexId(1), VertexId(1), |_, _| called = true)
        .unwrap();
    assert!(!called);
    assert_eq!(levels.sub_vertices(VertexId(1)).unwrap(), vec![&"b"]);

    levels.unmap_vertex(VertexId(1), VertexId(2)).unwrap();
    assert!(levels.sub_vertices(VertexId(1)).unwrap().is_empty());
    assert_eq!(levels.super_vertex(VertexId(2)).unwrap(), None);
    assert!(matches!(
        levels.unmap_vertex(VertexId(1), VertexId(1)),
        Err(LayerGraphError::InvalidOperation(_))
    ));
}

#[test]
fn test_unmap_removed_sub_edge_drops_dangling_entry() {
    let mut layers = layers(GraphConfig::default());
    let xy = layers.coarse_edges[0];
    let (ab, bc) = (layers.fine_edges[0], layers.fine_edges[1]);
    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    levels.map_edge_path(xy, ab).unwrap();
    levels.map_edge_path(xy, bc).unwrap();
    layers.fine.remove_edge(ab).unwrap();

    let mut levels = Levels::new(&mut layers.coarse, &mut layers.fine);
    assert!(matches!(
        levels.sub_edges(xy),
        Err(LayerGraphError::NotFound(_))
    ));

    levels.unmap_edge(xy, ab).unwrap();
    assert_eq!(levels.sub_edges(xy).unwrap(), vec![&"bc"]);
    assert_eq!(levels.super_edge(bc).unwrap(), vec![&"XY"]);
    assert!(matches!(
        levels.unmap_edge(xy, ab),
        Err(LayerGraphError::InvalidOperation(_))
    ));
}

#[test]
fn test_strict_edge_edits_reject_unreachable_previous_super() {
    let mut layers = layers(GraphConfig::strict());
    let xy = layers.coarse_edges[0];
    let bc = layers.fine_edges[1];
    let mut other: Net = Graph::new();
    let p = other.add_vertex("p");
    let q = other.add_vertex("q");
    let elsewhere = other.add_edge(p, q, "elsewhere").unwrap();
    Levels::new(&mut other, &mut layers.fine)
        .map_edge_path(elsewhere, bc)
        .unwrap();
    let elsewhere_ref = EdgeRef::new(other.id(), elsewhere);
    let xy_ref = EdgeRef::new(layers.coarse.id(), xy);

    let err = Levels::new(&mut layers.coarse, &mut layers.fine)
        .map_edge_link(xy, bc)
        .unwrap_err();
    assert!(matches!(err, LayerGraphError::InvalidOperation(_)));
    assert_eq!(layers.fine.edge(bc).unwrap().super_edges(), &[elsewhere_ref]);
    assert!(!layers.coarse.edge(xy).unwrap().has_subedges());

    Levels::new(&mut layers.coarse, &mut layers.fine)
        .map_edge_path(xy, bc)
        .unwrap();
    let err = Levels::new(&mut layers.coarse, &mut layers.fine)
        .unmap_edge(xy, bc)
        .unwrap_err();
    assert!(matches!(err, LayerGraphError::InvalidOperation(_)));
    assert_eq!(
        layers.fine.edge(bc).unwrap().super_edges(),
        &[elsewhere_ref, xy_ref]
    );
    assert_eq!(
        layers.coarse.edge(xy).unwrap().sub_edges(),
        &[EdgeRef::new(layers.fine.id(), bc)]
    );
    assert_eq!(other.edge(elsewhere).unwrap().sub_edges().len(), 1);
}
