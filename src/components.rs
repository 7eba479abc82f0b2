//! Connected-component labeling, computed once per graph.

use std::collections::VecDeque;

use crate::adjacency_lists::Graph;
use crate::symbol_table::SymbolTable;

#[derive(Debug, Clone)]
pub struct Components {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl Components {
    /// Labels every vertex, scanning vertices in index order.
    pub fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut id = vec![usize::MAX; n];
        let mut size = Vec::new();

        for start in 0..n {
            if id[start] == usize::MAX {
                let component = size.len();
                let labeled = flood_fill(graph, start, component, &mut id);
                size.push(labeled); // one entry per flood-fill start
            }
        }
        Self { id, size }
    }

    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Vertex count (actors and movies) of the component containing `v`.
    pub fn size(&self, v: usize) -> usize {
        self.size[self.id[v]]
    }

    pub fn count(&self) -> usize {
        self.size.len()
    }

    pub fn connected(&self, u: usize, v: usize) -> bool {
        self.id[u] == self.id[v]
    }

    /// Vertices sharing a component with `v`, in index order.
    pub fn members(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let component = self.id[v];
        self.id
            .iter()
            .enumerate()
            .filter(move |(_, &c)| c == component)
            .map(|(u, _)| u)
    }

    /// First actor, in ascending name order, of every component that has one.
    pub fn representatives(&self, symbols: &SymbolTable) -> Vec<String> {
        let mut seen = vec![false; self.count()];
        let mut reps = Vec::new();
        for actor in symbols.sorted_actors() {
            let Some(v) = symbols.index_of(actor) else {
                continue;
            };
            let component = self.id[v];
            if !seen[component] {
                seen[component] = true;
                reps.push(actor.to_string());
            }
        }
        reps
    }
}

fn flood_fill(graph: &Graph, start: usize, component: usize, id: &mut [usize]) -> usize {
    let mut queue = VecDeque::new();
    id[start] = component;
    queue.push_back(start);
    let mut labeled = 1;

    while let Some(v) = queue.pop_front() {
        for &w in graph.neighbors(v) {
            if id[w] == usize::MAX {
                id[w] = component;
                labeled += 1;
                queue.push_back(w);
            }
        }
    }
    labeled
}
