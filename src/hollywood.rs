//! Degrees-of-separation queries over the movie-actor graph.
//!
//! [`Hollywood`] is built once and then only read. Each call to
//! [`Hollywood::actor_details`] runs its own breadth-first search and hands back
//! an [`Actor`] view that borrows the shared graph.
//!
//! Actor-hop distances are raw edge counts halved, since one actor-to-actor hop
//! is two edges (actor, movie, actor). Two figures are kept as the classic
//! Hollywood-graph exercise defines them, and are approximations:
//!
//! * [`Actor::distance_average`] averages over *every* vertex of the actor's
//!   component, movies and the actor itself included. Movie vertices sit an odd
//!   number of edges away, so they add half-hops to the mean.
//! * [`Hollywood::connected_actors_count`] estimates the actors in a component
//!   as `vertices / 2 + 1` rather than counting them.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::adjacency_lists::{BipartiteBuilder, Graph};
use crate::components::Components;
use crate::data_cleaning::{self, IngestConfig, Record};
use crate::error::{HollywoodError, Result};
use crate::paths::BreadthFirstPaths;
use crate::symbol_table::{Role, SymbolTable};

/// Immutable graph handle shared by every query.
#[derive(Debug, Clone)]
pub struct Hollywood {
    symbols: SymbolTable,
    graph: Graph,
    components: Components,
    representatives: Vec<String>,
}

impl Hollywood {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut builder = BipartiteBuilder::new();
        for record in records {
            builder.add_record(record);
        }
        Self::from_builder(builder)
    }

    pub fn from_builder(builder: BipartiteBuilder) -> Self {
        let (symbols, graph) = builder.finish();
        let components = Components::new(&graph);
        let representatives = components.representatives(&symbols);
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            components = components.count(),
            "built hollywood graph"
        );
        Self {
            symbols,
            graph,
            components,
            representatives,
        }
    }

    /// Reads a `movie<delim>actor<delim>actor...` file and builds the graph.
    pub fn load(file_path: impl AsRef<Path>, config: &IngestConfig) -> Result<Self> {
        let records = data_cleaning::parse_file(file_path, config)?;
        Ok(Self::from_records(&records))
    }

    pub fn actor_details(&self, name: &str) -> Result<Actor<'_>> {
        let source = self.actor_index(name)?;
        Ok(Actor::new(self, source))
    }

    /// One actor per component, in ascending name order.
    pub fn connected_components(&self) -> &[String] {
        &self.representatives
    }

    pub fn connected_components_count(&self) -> usize {
        self.components.count()
    }

    /// Approximate actor count of `name`'s component: `vertices / 2 + 1`.
    pub fn connected_actors_count(&self, name: &str) -> Result<usize> {
        let v = self.actor_index(name)?;
        Ok(self.components.size(v) / 2 + 1)
    }

    /// Same as `actor_details(name)?.distance_average()`.
    pub fn hollywood_number(&self, name: &str) -> Result<f64> {
        Ok(self.actor_details(name)?.distance_average())
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn actor_count(&self) -> usize {
        self.symbols.count(Role::is_actor)
    }

    pub fn movie_count(&self) -> usize {
        self.symbols.count(Role::is_movie)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    // Every by-name entry point goes through here before touching the graph.
    fn actor_index(&self, name: &str) -> Result<usize> {
        if name.trim().is_empty() {
            return Err(HollywoodError::InvalidArgument(
                "actor name cannot be empty".to_string(),
            ));
        }
        self.symbols
            .actor_index(name)
            .ok_or_else(|| HollywoodError::UnknownEntity(name.to_string()))
    }
}

/// One vertex on an actor-to-actor path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    Actor(usize),
    Movie(usize),
}

/// Per-query view of one actor, owning its shortest-path tree.
#[derive(Debug)]
pub struct Actor<'a> {
    hollywood: &'a Hollywood,
    index: usize,
    paths: BreadthFirstPaths,
    average: f64,
    maximum: f64,
    farthest: usize,
}

fn actor_hops(raw: usize) -> f64 {
    raw as f64 / 2.0
}

impl<'a> Actor<'a> {
    fn new(hollywood: &'a Hollywood, index: usize) -> Self {
        let paths = BreadthFirstPaths::new(&hollywood.graph, index);
        let components = &hollywood.components;

        let mut total = 0.0;
        let mut maximum = 0.0;
        let mut farthest = index;
        for v in components.members(index) {
            debug_assert!(paths.has_path_to(v), "component and bfs disagree");
            let hops = paths.dist_to(v).map_or(0.0, actor_hops);
            if hops > maximum {
                maximum = hops;
                farthest = v;
            }
            total += hops;
        }
        let size = components.size(index);
        debug!(
            actor = hollywood.symbols.name_of(index),
            component_size = size,
            "actor query"
        );

        Self {
            hollywood,
            index,
            paths,
            average: total / size as f64,
            maximum,
            farthest,
        }
    }

    pub fn name(&self) -> &'a str {
        self.hollywood.symbols.name_of(self.index)
    }

    /// Movies this actor appears in, one entry per credit.
    pub fn movies(&self) -> Vec<&'a str> {
        let symbols = &self.hollywood.symbols;
        self.hollywood
            .graph
            .neighbors(self.index)
            .iter()
            .map(|&m| symbols.name_of(m))
            .collect()
    }

    pub fn distance_average(&self) -> f64 {
        self.average
    }

    pub fn distance_maximum(&self) -> f64 {
        self.maximum
    }

    /// Name of the first vertex found at [`Actor::distance_maximum`]. This can
    /// be a movie, since movies take part in the distance scan.
    pub fn actor_maximum(&self) -> &'a str {
        self.hollywood.symbols.name_of(self.farthest)
    }

    /// Actor hops to `other`, or `f64::INFINITY` when no path exists.
    pub fn actor_path_length(&self, other: &str) -> Result<f64> {
        let target = self.hollywood.actor_index(other)?;
        Ok(self
            .paths
            .dist_to(target)
            .map_or(f64::INFINITY, actor_hops))
    }

    /// The full path to `other`, starting here. Each step is typed by the
    /// vertex's role; a name used both as a movie and as an actor falls back
    /// to its position, since credits alternate with films.
    pub fn path(&self, other: &str) -> Result<Option<Vec<PathStep>>> {
        let target = self.hollywood.actor_index(other)?;
        let symbols = &self.hollywood.symbols;
        Ok(self.paths.path_to(target).map(|path| {
            path.into_iter()
                .enumerate()
                .map(|(i, v)| match symbols.role_of(v) {
                    Role::Actor => PathStep::Actor(v),
                    Role::Movie => PathStep::Movie(v),
                    Role::Both if i % 2 == 0 => PathStep::Actor(v),
                    Role::Both => PathStep::Movie(v),
                })
                .collect()
        }))
    }

    /// Actors along the path to `other`, both ends included.
    pub fn actor_path(&self, other: &str) -> Result<Option<Vec<&'a str>>> {
        self.filter_path(other, |step| match step {
            PathStep::Actor(v) => Some(v),
            PathStep::Movie(_) => None,
        })
    }

    /// Movies linking each consecutive pair of actors on the path to `other`.
    pub fn movie_path(&self, other: &str) -> Result<Option<Vec<&'a str>>> {
        self.filter_path(other, |step| match step {
            PathStep::Movie(v) => Some(v),
            PathStep::Actor(_) => None,
        })
    }

    fn filter_path(
        &self,
        other: &str,
        keep: impl Fn(PathStep) -> Option<usize>,
    ) -> Result<Option<Vec<&'a str>>> {
        let symbols = &self.hollywood.symbols;
        Ok(self.path(other)?.map(|steps| {
            steps
                .into_iter()
                .filter_map(keep)
                .map(|v| symbols.name_of(v))
                .collect()
        }))
    }

    pub fn summary(&self) -> ActorSummary {
        ActorSummary {
            name: self.name().to_string(),
            movies: self.movies().iter().map(|m| m.to_string()).collect(),
            distance_average: self.average,
            distance_maximum: self.maximum,
            actor_maximum: self.actor_maximum().to_string(),
            component_size: self.hollywood.components.size(self.index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSummary {
    pub name: String,
    pub movies: Vec<String>,
    pub distance_average: f64,
    pub distance_maximum: f64,
    pub actor_maximum: String,
    pub component_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // A - M1 - B - M2 - C - M3 - D, and E - M4 - F on their own
    fn chain() -> Hollywood {
        Hollywood::from_records(&vec![
            Record::new("M1", ["A", "B"]),
            Record::new("M2", ["B", "C"]),
            Record::new("M3", ["C", "D"]),
            Record::new("M4", ["E", "F"]),
        ])
    }

    #[test]
    fn test_actor_path_along_chain() {
        let hw = chain();
        let a = hw.actor_details("A").unwrap();

        assert_eq!(a.actor_path_length("D").unwrap(), 3.0);
        assert_eq!(a.actor_path("D").unwrap(), Some(vec!["A", "B", "C", "D"]));
        assert_eq!(a.movie_path("D").unwrap(), Some(vec!["M1", "M2", "M3"]));
    }

    #[test]
    fn test_path_to_self() {
        let hw = chain();
        let b = hw.actor_details("B").unwrap();

        assert_eq!(b.actor_path_length("B").unwrap(), 0.0);
        assert_eq!(b.actor_path("B").unwrap(), Some(vec!["B"]));
        assert_eq!(b.movie_path("B").unwrap(), Some(vec![]));
    }

    #[test]
    fn test_unreachable_actor() {
        let hw = chain();
        let a = hw.actor_details("A").unwrap();

        assert_eq!(a.actor_path_length("E").unwrap(), f64::INFINITY);
        assert_eq!(a.actor_path("E").unwrap(), None);
        assert_eq!(a.movie_path("F").unwrap(), None);
    }

    #[test]
    fn test_typed_path_steps() {
        let hw = chain();
        let steps = hw.actor_details("A").unwrap().path("C").unwrap().unwrap();
        let idx = |name: &str| hw.symbols().index_of(name).unwrap();

        assert_eq!(
            steps,
            vec![
                PathStep::Actor(idx("A")),
                PathStep::Movie(idx("M1")),
                PathStep::Actor(idx("B")),
                PathStep::Movie(idx("M2")),
                PathStep::Actor(idx("C")),
            ]
        );
    }

    #[test]
    fn test_path_steps_follow_roles() {
        // "Twin" is a film with A and B, and also an actor in M2 with C
        let hw = Hollywood::from_records(&vec![
            Record::new("Twin", ["A", "B"]),
            Record::new("M2", ["Twin", "C"]),
        ]);
        let a = hw.actor_details("A").unwrap();
        let idx = |name: &str| hw.symbols().index_of(name).unwrap();

        assert_eq!(
            a.path("C").unwrap().unwrap(),
            vec![
                PathStep::Actor(idx("A")),
                PathStep::Movie(idx("Twin")),
                PathStep::Movie(idx("M2")),
                PathStep::Actor(idx("C")),
            ]
        );
        assert_eq!(a.actor_path("C").unwrap(), Some(vec!["A", "C"]));
        assert_eq!(a.movie_path("C").unwrap(), Some(vec!["Twin", "M2"]));
        assert_eq!(a.actor_path_length("C").unwrap(), 1.5);
    }

    #[test]
    fn test_distance_metrics_include_movies_and_source() {
        let hw = chain();
        let a = hw.actor_details("A").unwrap();

        // raw distances from A: A0 M1 1 B2 M2 3 C4 M3 5 D6, halved and averaged over 7
        let expected = (0.0 + 0.5 + 1.0 + 1.5 + 2.0 + 2.5 + 3.0) / 7.0;
        assert!((a.distance_average() - expected).abs() < 1e-12);
        assert_eq!(a.distance_maximum(), 3.0);
        assert_eq!(a.actor_maximum(), "D");
        assert!(a.distance_average() <= a.distance_maximum());
    }

    #[test]
    fn test_actor_maximum_may_be_a_movie() {
        let hw = Hollywood::from_records(&vec![Record::new("Solo Film", ["Star"])]);
        let star = hw.actor_details("Star").unwrap();

        assert_eq!(star.distance_maximum(), 0.5);
        assert_eq!(star.actor_maximum(), "Solo Film");
    }

    #[test]
    fn test_movies() {
        let hw = chain();
        let mut movies = hw.actor_details("C").unwrap().movies();
        movies.sort_unstable();
        assert_eq!(movies, vec!["M2", "M3"]);
    }

    #[test]
    fn test_components_queries() {
        let hw = chain();
        assert_eq!(hw.connected_components_count(), 2);
        assert_eq!(hw.connected_components(), &["A".to_string(), "E".to_string()]);
        assert_eq!(hw.connected_actors_count("A").unwrap(), 7 / 2 + 1);
        assert_eq!(hw.connected_actors_count("F").unwrap(), 3 / 2 + 1);
    }

    #[test]
    fn test_uncredited_actor_is_a_singleton() {
        let mut builder = BipartiteBuilder::new();
        builder.add_record(&Record::new("M1", ["A", "B"])).add_actor("Loner");
        let hw = Hollywood::from_builder(builder);

        assert_eq!(hw.connected_components_count(), 2);
        assert_eq!(hw.connected_actors_count("Loner").unwrap(), 1);

        let loner = hw.actor_details("Loner").unwrap();
        assert_eq!(loner.distance_average(), 0.0);
        assert_eq!(loner.distance_maximum(), 0.0);
        assert_eq!(loner.actor_maximum(), "Loner");
        assert!(loner.movies().is_empty());
    }

    #[test]
    fn test_hollywood_number_matches_average() {
        let hw = chain();
        let avg = hw.actor_details("B").unwrap().distance_average();
        assert_eq!(hw.hollywood_number("B").unwrap(), avg);
    }

    #[test]
    fn test_name_validation() {
        let hw = chain();
        assert!(matches!(hw.actor_details(""), Err(HollywoodError::InvalidArgument(_))));
        assert!(matches!(hw.hollywood_number("  "), Err(HollywoodError::InvalidArgument(_))));
        assert!(matches!(
            hw.connected_actors_count(""),
            Err(HollywoodError::InvalidArgument(_))
        ));
        assert!(matches!(hw.actor_details("Nobody"), Err(HollywoodError::UnknownEntity(_))));
        assert!(matches!(hw.actor_details("M1"), Err(HollywoodError::UnknownEntity(_))));
        assert!(matches!(
            hw.connected_actors_count("Nobody"),
            Err(HollywoodError::UnknownEntity(_))
        ));

        let a = hw.actor_details("A").unwrap();
        assert!(matches!(a.actor_path("Nobody"), Err(HollywoodError::UnknownEntity(_))));
        assert!(matches!(a.movie_path(""), Err(HollywoodError::InvalidArgument(_))));
        assert!(matches!(
            a.actor_path_length("Nobody"),
            Err(HollywoodError::UnknownEntity(_))
        ));
    }

    #[test]
    fn test_counts_and_summary() {
        let hw = chain();
        assert_eq!(hw.vertex_count(), 10);
        assert_eq!(hw.edge_count(), 8);
        assert_eq!(hw.actor_count(), 6);
        assert_eq!(hw.movie_count(), 4);

        let summary = hw.actor_details("D").unwrap().summary();
        assert_eq!(summary.name, "D");
        assert_eq!(summary.movies, vec!["M3"]);
        assert_eq!(summary.actor_maximum, "A");
        assert_eq!(summary.component_size, 7);
    }
}
