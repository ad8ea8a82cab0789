use crate::cell::Cell;
use crate::components::label_components;
use crate::connectivity::ConnectivityMap;
use crate::error::TopologyError;
use crate::image_grid::ImageGrid;
use crate::locations::find_cells;
use crate::movement::MovementRules;
use crate::palette::{ColorSet, Palette};
use crate::search::greedy::GreedyBestFirst;
use crate::search::uniform_cost::UniformCost;
use crate::search::{validate_query, GridSearch, SearchResult};
use crate::CellSet;
use core::fmt;
use itertools::Itertools;
use log::{debug, info};
use std::path::Path;

/// Which search orders the frontier when computing paths between components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// [GreedyBestFirst]: fast, paths are short but not guaranteed shortest.
    #[default]
    Greedy,
    /// [UniformCost]: exact shortest paths on the unit-cost grid.
    UniformCost,
}

/// Everything that decides how an image is interpreted and searched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopologyConfig {
    pub palette: Palette,
    pub movement: MovementRules,
    pub strategy: Strategy,
}

/// Length of a path between two sets of cells, in moves. [Infinite](PathLength::Infinite) if no
/// path exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PathLength {
    Finite(usize),
    Infinite,
}

impl PathLength {
    pub fn of(path: Option<&Vec<Cell>>) -> PathLength {
        path.map_or(PathLength::Infinite, |p| PathLength::Finite(p.len()))
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, PathLength::Finite(_))
    }
}

impl fmt::Display for PathLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathLength::Finite(n) => write!(f, "{}", n),
            PathLength::Infinite => write!(f, "inf"),
        }
    }
}

/// The path length between two components, identified by one representative cell each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentPair {
    pub first: Cell,
    pub second: Cell,
    pub length: PathLength,
}

/// [Topology] interprets an image according to a [TopologyConfig]: it finds the points of
/// interest, groups them into components and answers path queries between them. Connected
/// components of the passable pixels are computed up front so that queries without any path
/// return immediately.
#[derive(Clone, Debug)]
pub struct Topology {
    image: ImageGrid,
    config: TopologyConfig,
    location_colors: ColorSet,
    passable_colors: ColorSet,
    connectivity: ConnectivityMap,
}

impl Topology {
    pub fn new(image: ImageGrid, config: TopologyConfig) -> Topology {
        let location_colors = config.palette.location_colors();
        let passable_colors = config.palette.passable_colors();
        let connectivity = ConnectivityMap::new(&image, &config.movement, &passable_colors);
        Topology {
            image,
            config,
            location_colors,
            passable_colors,
            connectivity,
        }
    }

    /// Loads an image file and builds its topology.
    pub fn open<P: AsRef<Path>>(path: P, config: TopologyConfig) -> Result<Topology, TopologyError> {
        Ok(Topology::new(ImageGrid::open(path)?, config))
    }

    pub fn image(&self) -> &ImageGrid {
        &self.image
    }

    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    pub fn connectivity(&self) -> &ConnectivityMap {
        &self.connectivity
    }

    /// All cells drawn in the location color.
    pub fn points_of_interest(&self) -> CellSet {
        find_cells(&self.image, &self.location_colors)
    }

    /// Groups points of interest that touch each other into components. Only location pixels are
    /// traversed, so each component is one contiguous blob of location color.
    pub fn components(&self, locations: &CellSet) -> Result<Vec<CellSet>, TopologyError> {
        label_components(
            &self.image,
            locations,
            &self.config.movement,
            &self.location_colors,
        )
    }

    /// Runs the configured search over the passable colors.
    pub fn search(
        &self,
        starts: &CellSet,
        goals: Option<&CellSet>,
    ) -> Result<SearchResult, TopologyError> {
        let movement = &self.config.movement;
        match self.config.strategy {
            Strategy::Greedy => {
                GreedyBestFirst.search(&self.image, starts, movement, &self.passable_colors, goals)
            }
            Strategy::UniformCost => {
                UniformCost.search(&self.image, starts, movement, &self.passable_colors, goals)
            }
        }
    }

    /// Computes a path from any cell of `from` to any cell of `to`. The path leaves out the start
    /// cell and ends on the reached goal cell.
    pub fn path_between(
        &self,
        from: &CellSet,
        to: &CellSet,
    ) -> Result<Option<Vec<Cell>>, TopologyError> {
        validate_query(&self.image, from, Some(to))?;
        if !self.connectivity.may_reach(from, to) {
            debug!("No goal is on a component reachable from the start cells");
            return Ok(None);
        }
        self.search(from, Some(to)).map(|result| result.path)
    }

    pub fn path_length(&self, from: &CellSet, to: &CellSet) -> Result<PathLength, TopologyError> {
        self.path_between(from, to)
            .map(|path| PathLength::of(path.as_ref()))
    }

    /// Path lengths between every unordered pair of components, in component order. Each
    /// component is represented by its first cell.
    pub fn pairwise_lengths(
        &self,
        components: &[CellSet],
    ) -> Result<Vec<ComponentPair>, TopologyError> {
        info!(
            "Computing path lengths between {} pairs of components",
            components.len() * components.len().saturating_sub(1) / 2
        );
        components
            .iter()
            .tuple_combinations()
            .map(|(a, b)| {
                // Both components are non-empty once their length has been computed
                let length = self.path_length(a, b)?;
                Ok(ComponentPair {
                    first: a[0],
                    second: b[0],
                    length,
                })
            })
            .collect()
    }
}
