use graphwalk::{
    AdjacencyListReader, BreadthFirstPaths, ConnectedComponents, Cycle, CycleDetector,
    DepthFirstOrder, DepthFirstPaths, Digraph, DirectedBfs, DirectedCycle, DirectedDfs,
    EdgeListReader, Graph, Search, Topological, TwoColor,
};

const TWO_TRIANGLES: &str = "
0 1
1 2
2 0
3 4
4 5
5 3
";

const STAR: &str = "
0:1 3 4
1:0 2
2:1
3:0
4:0
";

const BIPARTITE: &str = "
0:1
1:2 3
2:1 4
3:1
4:2
";

const ODD_CYCLE: &str = "
0:1 2
1:2 3
2:1 4
3:1
4:2
";

fn undirected(adjacency: &str) -> Graph {
    AdjacencyListReader::new().parse(adjacency).unwrap()
}

#[test]
fn components_scenario() {
    let g = Graph::from_edges(5, [(0, 1), (1, 2), (2, 0), (3, 4)]);
    let cc = ConnectedComponents::new(&g);
    assert_eq!(cc.count(), 2);
    assert!(cc.connected(0, 2));
    assert!(!cc.connected(0, 3));
}

#[test]
fn directed_cycle_scenario() {
    let mut dg = Digraph::from_edges(5, [(0, 1), (1, 2), (3, 4), (4, 2)]);
    let acyclic = DirectedCycle::new(&dg);
    assert!(!acyclic.has_cycle());
    assert_eq!(acyclic.cycle(), None);

    dg.add_edge(2, 0);
    let cyclic = DirectedCycle::new(&dg);
    assert!(cyclic.has_cycle());
    let witness = cyclic.cycle().unwrap();
    assert_eq!(witness.first(), witness.last());
    assert!(witness.windows(2).all(|p| dg.has_edge(p[0], p[1])));
}

#[test]
fn bipartite_scenario() {
    let mut g = Graph::from_edges(5, [(0, 1), (1, 2), (1, 3), (2, 4)]);
    assert!(TwoColor::new(&g).is_bipartite());
    g.add_edge(0, 2);
    assert!(!TwoColor::new(&g).is_bipartite());
}

#[test]
fn bipartite_fixtures_from_adjacency_lists() {
    assert!(TwoColor::new(&undirected(BIPARTITE)).is_bipartite());
    assert!(!TwoColor::new(&undirected(ODD_CYCLE)).is_bipartite());
}

#[test]
fn search_on_two_triangles() {
    let g: Graph = EdgeListReader::new().parse(TWO_TRIANGLES).unwrap();

    let dfs = DepthFirstPaths::new(&g, 0);
    assert_eq!(dfs.count(), 3);
    assert!(dfs.marked(2));
    assert!(!dfs.marked(3));
    assert!(!dfs.marked(4));
    assert_eq!(dfs.path_to(2), Some(vec![0, 1, 2]));

    let bfs = BreadthFirstPaths::new(&g, 0);
    assert_eq!(bfs.count(), 3);
    assert_eq!(bfs.path_to(2), Some(vec![0, 2]));
    assert_eq!(bfs.path_to(5), None);
}

#[test]
fn search_on_star() {
    let g = undirected(STAR);
    let dfs = DepthFirstPaths::new(&g, 0);
    assert_eq!(dfs.path_to(2), Some(vec![0, 1, 2]));
    assert_eq!(dfs.count(), 5);
}

#[test]
fn undirected_cycle_on_two_triangles() {
    let g: Graph = EdgeListReader::new().parse(TWO_TRIANGLES).unwrap();
    let c = Cycle::new(&g);
    assert!(c.has_cycle());
    let witness = c.cycle().unwrap();
    assert!(witness.len() >= 4);
    assert_eq!(witness.first(), witness.last());
    assert!(witness.windows(2).all(|p| g.has_edge(p[0], p[1])));
}

#[test]
fn directed_search_paths() {
    let dg = Digraph::from_edges(5, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 0), (3, 4)]);
    assert_eq!(DirectedDfs::from_source(&dg, 0).path_to(2), Some(vec![0, 1, 2]));
    assert_eq!(DirectedBfs::from_source(&dg, 0).path_to(2), Some(vec![0, 2]));
}

#[test]
fn reverse_digraph() {
    let dg = Digraph::from_edges(10, [(0, 3), (1, 5), (0, 9)]);
    let rev = dg.reverse();
    assert_eq!(rev.to_string(), "10\n3\n3 0\n5 1\n9 0\n");
    assert_eq!(dg.to_string(), "10\n3\n0 3\n0 9\n1 5\n");
}

fn tiny_dag() -> Digraph {
    Digraph::from_edges(
        13,
        [
            (0, 1),
            (0, 5),
            (0, 6),
            (2, 0),
            (2, 3),
            (3, 5),
            (5, 4),
            (6, 4),
            (6, 9),
            (7, 6),
            (8, 7),
            (9, 10),
            (9, 11),
            (9, 12),
            (11, 12),
        ],
    )
}

#[test]
fn depth_first_order_on_tiny_dag() {
    let o = DepthFirstOrder::new(&tiny_dag());
    assert_eq!(o.pre(), &[0, 1, 5, 4, 6, 9, 10, 11, 12, 2, 3, 7, 8]);
    assert_eq!(o.post(), &[1, 4, 5, 10, 12, 11, 9, 6, 0, 3, 2, 7, 8]);
    assert_eq!(o.reverse_post(), &[8, 7, 2, 3, 0, 6, 9, 11, 12, 10, 5, 4, 1]);
}

#[test]
fn topological_sort_on_tiny_dag() {
    let dg = tiny_dag();
    let t = Topological::new(&dg);
    assert!(t.is_dag());
    let order = t.order().unwrap();
    assert_eq!(order, &[8, 7, 2, 3, 0, 6, 9, 11, 12, 10, 5, 4, 1]);
    for (v, w) in dg.edges() {
        assert!(t.rank(v) < t.rank(w), "{v} -> {w} points backward");
    }
}

#[test]
fn topological_sort_rejects_cycle() {
    let mut dg = tiny_dag();
    dg.add_edge(12, 8);
    let t = Topological::new(&dg);
    assert!(!t.is_dag());
    assert_eq!(t.order(), None);
    assert!(t.cycle().is_some());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn add_edge_out_of_range_is_fatal() {
    let mut g = Graph::new(3);
    g.add_edge(0, 3);
}

#[test]
fn neighbors_out_of_range_is_empty() {
    let g = Graph::from_edges(2, [(0, 1)]);
    assert!(g.neighbors(5).is_empty());
    let dg = Digraph::new(0);
    assert!(dg.neighbors(0).is_empty());
}

#[test]
fn deep_path_does_not_exhaust_the_stack() {
    let size = 200_000;
    let dg = Digraph::from_edges(size, (0..size - 1).map(|i| (i, i + 1)));
    let t = Topological::new(&dg);
    assert_eq!(t.rank(size - 1), Some(size - 1));

    let g = Graph::from_edges(size, (0..size - 1).map(|i| (i, i + 1)));
    let dfs = DepthFirstPaths::new(&g, 0);
    assert_eq!(dfs.path_to(size - 1).map(|p| p.len()), Some(size));
    assert!(!Cycle::new(&g).has_cycle());
}
