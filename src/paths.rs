//! Single-source breadth-first shortest paths.

use std::collections::VecDeque;

use crate::adjacency_lists::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Queued,
    Visited,
}

/// Shortest-path tree rooted at one vertex. Built per query and never shared;
/// only vertices in the source's component get a distance.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    source: usize,
    marks: Vec<Mark>,
    dist_to: Vec<usize>,
    edge_to: Vec<usize>,
}

impl BreadthFirstPaths {
    pub fn new(graph: &Graph, source: usize) -> Self {
        let n = graph.vertex_count();
        let mut paths = Self {
            source,
            marks: vec![Mark::Unvisited; n],
            dist_to: vec![0; n],
            edge_to: vec![source; n],
        };
        paths.bfs(graph);
        paths
    }

    fn bfs(&mut self, graph: &Graph) {
        let mut queue = VecDeque::new();
        self.marks[self.source] = Mark::Visited;
        queue.push_back(self.source);

        while let Some(v) = queue.pop_front() {
            self.marks[v] = Mark::Visited;
            for &w in graph.neighbors(v) {
                if self.marks[w] == Mark::Unvisited {
                    self.dist_to[w] = self.dist_to[v] + 1;
                    self.edge_to[w] = v;
                    self.marks[w] = Mark::Queued;
                    queue.push_back(w);
                }
            }
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.marks[v] != Mark::Unvisited
    }

    /// Raw edge count from the source, `None` outside its component.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.has_path_to(v).then(|| self.dist_to[v])
    }

    /// BFS predecessor of `v`, `None` for the source and outside its component.
    pub fn edge_to(&self, v: usize) -> Option<usize> {
        (v != self.source && self.has_path_to(v)).then(|| self.edge_to[v])
    }

    /// Vertices from the source to `v` inclusive, source first.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = Vec::with_capacity(self.dist_to[v] + 1);
        let mut x = v;
        while x != self.source {
            path.push(x);
            x = self.edge_to[x];
        }
        path.push(self.source);
        path.reverse();
        Some(path)
    }
}
