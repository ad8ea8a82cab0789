//! # pixel_topology
//!
//! Extracts a navigable topology from a color-coded raster image. Pixels are classified by color:
//! points of interest are drawn in a location color, roads and open air can be travelled over and
//! walls block movement. Points of interest that touch each other are grouped into
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)), and paths
//! between components are computed with a
//! [best-first search](https://en.wikipedia.org/wiki/Best-first_search) over the pixel grid.
//!
//! The default search is greedy: it orders the frontier by the straight-line distance to the
//! nearest goal only, so paths are short on uniform grids but not guaranteed to be shortest. The
//! [UniformCost](search::uniform_cost::UniformCost) search gives exact shortest paths. Note that
//! this assumes a uniform-cost grid.
//!
//! Paths are returned without their start cell and with their goal cell, so the length of a path
//! is the number of moves it takes.
pub mod cell;
pub mod components;
pub mod connectivity;
pub mod error;
pub mod image_grid;
pub mod locations;
pub mod movement;
pub mod palette;
pub mod search;
pub mod topology;

use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};

pub use cell::{Cell, Offset};
pub use components::label_components;
pub use error::TopologyError;
pub use image_grid::{GridShape, ImageGrid};
pub use locations::find_cells;
pub use movement::MovementRules;
pub use palette::{ColorSet, Palette, Rgba};
pub use search::{reconstruct_path, GridSearch, SearchResult};
pub use topology::{ComponentPair, PathLength, Strategy, Topology, TopologyConfig};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A set of cells that iterates in insertion order, so that picking "the next" cell is
/// deterministic for a given input.
pub type CellSet = FxIndexSet<Cell>;

/// Maps each discovered cell to the cell it was discovered from.
pub type PredecessorMap = FxIndexMap<Cell, Cell>;

/// Inline capacity for per-cell neighbour lists; covers the full Moore neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
