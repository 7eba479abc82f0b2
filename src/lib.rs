//! Degrees of separation over a bipartite actor-movie graph.
//!
//! ```no_run
//! use hollywood_graph::{Hollywood, IngestConfig};
//!
//! let hw = Hollywood::load("movies.txt", &IngestConfig::default())?;
//! let bacon = hw.actor_details("Bacon, Kevin")?;
//! println!("{:?}", bacon.actor_path("Hanks, Tom")?);
//! # Ok::<(), hollywood_graph::HollywoodError>(())
//! ```

pub mod adjacency_lists;
pub mod components;
pub mod data_cleaning;
pub mod error;
pub mod hollywood;
pub mod paths;
pub mod symbol_table;

pub use adjacency_lists::{BipartiteBuilder, Graph};
pub use components::Components;
pub use data_cleaning::{IngestConfig, Record};
pub use error::{HollywoodError, Result};
pub use hollywood::{Actor, ActorSummary, Hollywood, PathStep};
pub use paths::BreadthFirstPaths;
pub use symbol_table::{Role, SymbolTable};
