//! Undirected adjacency lists over the dense index space, and the bipartite
//! builder that turns movie records into vertices and edges.

use crate::data_cleaning::Record;
use crate::symbol_table::{Role, SymbolTable};

#[derive(Debug, Default, Clone)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edges: usize,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
            edges: 0,
        }
    }

    /// Appends an isolated vertex and returns its index.
    pub fn add_vertex(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Adds `u-v` in both directions. Parallel edges are kept.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edges += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }
}

/// Accumulates vertices and movie-actor edges as records arrive.
#[derive(Debug, Default)]
pub struct BipartiteBuilder {
    symbols: SymbolTable,
    graph: Graph,
}

impl BipartiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: &Record) -> &mut Self {
        let movie = self.vertex(&record.movie, Role::Movie);
        for actor in &record.actors {
            let actor = self.vertex(actor, Role::Actor);
            self.graph.add_edge(movie, actor); // duplicates in a cast become parallel edges
        }
        self
    }

    /// Registers an actor with no credits; it ends up in a component of its own.
    pub fn add_actor(&mut self, name: &str) -> &mut Self {
        self.vertex(name, Role::Actor);
        self
    }

    pub fn finish(self) -> (SymbolTable, Graph) {
        (self.symbols, self.graph)
    }

    fn vertex(&mut self, name: &str, role: Role) -> usize {
        let id = self.symbols.intern(name, role);
        if id == self.graph.vertex_count() {
            self.graph.add_vertex(); // first sight of this name
        }
        id
    }
}

/// Builds the symbol table and the movie-actor graph in one pass.
pub fn build_bipartite<'a, I>(records: I) -> (SymbolTable, Graph)
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut builder = BipartiteBuilder::new();
    for record in records {
        builder.add_record(record);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_undirected() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);

        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_build_bipartite() {
        let records = vec![
            Record::new("M1", ["A", "B"]),
            Record::new("M2", ["B", "C"]),
        ];
        let (symbols, graph) = build_bipartite(&records);

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(symbols.len(), 5);
        assert_eq!(graph.edge_count(), 4);

        let b = symbols.index_of("B").unwrap();
        assert_eq!(graph.degree(b), 2); // B appears in M1 and M2
        let m1 = symbols.index_of("M1").unwrap();
        assert!(graph.neighbors(m1).contains(&symbols.index_of("A").unwrap()));
    }

    #[test]
    fn test_duplicate_credit_is_kept() {
        let records = vec![Record::new("M1", ["A", "A"])];
        let (symbols, graph) = build_bipartite(&records);

        let a = symbols.index_of("A").unwrap();
        assert_eq!(graph.neighbors(a).len(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_every_edge_has_its_reverse() {
        let records = vec![
            Record::new("M1", ["A", "B", "C"]),
            Record::new("M2", ["C", "D"]),
        ];
        let (_, graph) = build_bipartite(&records);

        for u in 0..graph.vertex_count() {
            for &v in graph.neighbors(u) {
                let forward = graph.neighbors(u).iter().filter(|&&w| w == v).count();
                let back = graph.neighbors(v).iter().filter(|&&w| w == u).count();
                assert_eq!(forward, back);
            }
        }
    }

    #[test]
    fn test_builder_uncredited_actor() {
        let mut builder = BipartiteBuilder::new();
        builder
            .add_record(&Record::new("M1", ["A"]))
            .add_actor("Loner")
            .add_actor("A");
        let (symbols, graph) = builder.finish();

        let loner = symbols.actor_index("Loner").unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.neighbors(loner).is_empty());
    }
}
