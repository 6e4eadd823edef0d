//! Shared proptest strategies and petgraph oracles.
#![allow(dead_code)]

use graphwalk::{Digraph, Graph};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use proptest::prelude::*;

/// `(vertex_count, edges)` with every endpoint in range.
pub fn edge_list(
    max_vertices: usize,
    max_edges: usize,
    self_loops: bool,
) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_vertices)
        .prop_flat_map(move |n| (Just(n), prop::collection::vec((0..n, 0..n), 0..=max_edges)))
        .prop_map(move |(n, edges)| {
            let edges = edges
                .into_iter()
                .filter(|&(v, w)| self_loops || v != w)
                .collect();
            (n, edges)
        })
}

/// Undirected graphs without self-loops.
pub fn simple_graph(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Graph> {
    edge_list(max_vertices, max_edges, false).prop_map(|(n, edges)| Graph::from_edges(n, edges))
}

/// Digraphs, self-loops included.
pub fn digraph(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Digraph> {
    edge_list(max_vertices, max_edges, true).prop_map(|(n, edges)| Digraph::from_edges(n, edges))
}

/// Digraphs whose arcs all point from a lower to a higher index.
pub fn dag(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Digraph> {
    edge_list(max_vertices, max_edges, false).prop_map(|(n, edges)| {
        Digraph::from_edges(n, edges.into_iter().map(|(v, w)| (v.min(w), v.max(w))))
    })
}

pub fn to_petgraph_undirected(g: &Graph) -> UnGraph<(), ()> {
    let mut pg = UnGraph::default();
    for _ in 0..g.vertex_count() {
        pg.add_node(());
    }
    for (v, w) in g.edges() {
        pg.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
    }
    pg
}

pub fn to_petgraph_directed(dg: &Digraph) -> DiGraph<(), ()> {
    let mut pg = DiGraph::default();
    for _ in 0..dg.vertex_count() {
        pg.add_node(());
    }
    for (v, w) in dg.edges() {
        pg.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
    }
    pg
}

/// Checks that consecutive vertices of `path` are joined by edges of `adjacent`.
pub fn is_walk(path: &[usize], adjacent: impl Fn(usize, usize) -> bool) -> bool {
    path.windows(2).all(|pair| adjacent(pair[0], pair[1]))
}
