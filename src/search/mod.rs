use crate::cell::Cell;
use crate::error::TopologyError;
use crate::image_grid::ImageGrid;
use crate::movement::MovementRules;
use crate::palette::ColorSet;
use crate::{CellSet, PredecessorMap};
use indexmap::map::Entry::Vacant;
use log::{debug, warn};
use std::collections::BinaryHeap;
use std::fmt::Debug;

pub mod frontier;
pub mod greedy;
mod path;
pub mod uniform_cost;

use frontier::FrontierEntry;
pub use path::reconstruct_path;

/// The outcome of a single search: the path to a goal if one was requested and reached, and the
/// full exploration record.
#[derive(Clone, Debug, Default)]
pub struct SearchResult {
    /// Path from the start (exclusive) to the reached goal (inclusive), see [reconstruct_path].
    pub path: Option<Vec<Cell>>,
    /// The goal cell whose expansion ended the search.
    pub reached_goal: Option<Cell>,
    /// For every discovered cell, the cell it was discovered from, in discovery order. Cells are
    /// marked visited exactly when they enter this map, so its keys form the visited set.
    pub predecessors: PredecessorMap,
}

impl SearchResult {
    pub fn visited(&self) -> impl Iterator<Item = &Cell> {
        self.predecessors.keys()
    }

    pub fn is_visited(&self, cell: &Cell) -> bool {
        self.predecessors.contains_key(cell)
    }

    pub fn visited_count(&self) -> usize {
        self.predecessors.len()
    }

    pub fn into_visited(self) -> CellSet {
        self.predecessors.into_keys().collect()
    }
}

/// Checks the arguments shared by every search entry point. Start cells must lie inside the image;
/// they are not checked against the passable colors.
pub(crate) fn validate_query(
    image: &ImageGrid,
    starts: &CellSet,
    goals: Option<&CellSet>,
) -> Result<(), TopologyError> {
    if starts.is_empty() {
        return Err(TopologyError::EmptyStartSet);
    }
    if let Some(outside) = starts.iter().find(|c| !image.in_bounds(**c)) {
        return Err(TopologyError::OutOfBounds(*outside));
    }
    if goals.is_some_and(|g| g.is_empty()) {
        return Err(TopologyError::EmptyGoalSet);
    }
    Ok(())
}

/// A best-first search over the pixels of an image. Implementors only decide the priority with
/// which a discovered cell enters the frontier; exploration itself is shared.
pub trait GridSearch {
    type Priority: Copy + PartialOrd + Debug;

    /// Priority of `cell`, reached after `depth` moves. Lower priorities are expanded first.
    fn priority(&self, cell: &Cell, depth: u32, goals: Option<&CellSet>) -> Self::Priority;

    /// Explores the image from `starts`, moving according to `rules` onto pixels whose color is in
    /// `passable`. With `goals` set, the search stops as soon as a goal cell is taken off the
    /// frontier and the path to it is reconstructed. Without goals every reachable cell is
    /// visited.
    ///
    /// Neighbours are marked visited when they are pushed, so every cell other than a start cell
    /// enters the frontier at most once. Start cells are not marked up front and may be pushed
    /// a second time when a neighbour rediscovers them.
    fn search(
        &self,
        image: &ImageGrid,
        starts: &CellSet,
        rules: &MovementRules,
        passable: &ColorSet,
        goals: Option<&CellSet>,
    ) -> Result<SearchResult, TopologyError> {
        validate_query(image, starts, goals)?;
        let is_goal = |cell: &Cell| goals.is_some_and(|g| g.contains(cell));

        let mut predecessors = PredecessorMap::default();
        let mut frontier = BinaryHeap::new();
        for &start in starts {
            frontier.push(FrontierEntry::new(self.priority(&start, 0, goals), 0, start));
        }

        let mut reached_goal = None;
        while let Some(FrontierEntry { depth, cell, .. }) = frontier.pop() {
            if is_goal(&cell) {
                reached_goal = Some(cell);
                break;
            }
            for neighbour in rules.neighbours(cell) {
                if !image.is_passable(neighbour, passable) {
                    continue;
                }
                if let Vacant(e) = predecessors.entry(neighbour) {
                    e.insert(cell);
                    let depth = depth + 1;
                    frontier.push(FrontierEntry::new(
                        self.priority(&neighbour, depth, goals),
                        depth,
                        neighbour,
                    ));
                }
            }
        }

        // A start that is also a goal ends the search before anything offers it, which is no path
        let path = reached_goal
            .filter(|goal| predecessors.contains_key(goal))
            .and_then(|goal| {
                let path = reconstruct_path(&predecessors, starts, goal);
                if path.is_none() {
                    warn!("Goal {} was reached but could not be pathed back to a start", goal);
                }
                path
            });
        debug!(
            "Search from {} start(s) visited {} cells, goal: {:?}, path length: {:?}",
            starts.len(),
            predecessors.len(),
            reached_goal,
            path.as_ref().map(Vec::len)
        );
        Ok(SearchResult {
            path,
            reached_goal,
            predecessors,
        })
    }

    /// Visits every cell reachable from `starts`.
    fn flood_fill(
        &self,
        image: &ImageGrid,
        starts: &CellSet,
        rules: &MovementRules,
        passable: &ColorSet,
    ) -> Result<SearchResult, TopologyError> {
        self.search(image, starts, rules, passable, None)
    }

    /// Computes a path from any of `starts` to any of `goals`, or [None] if no goal is reachable.
    fn find_path(
        &self,
        image: &ImageGrid,
        starts: &CellSet,
        rules: &MovementRules,
        passable: &ColorSet,
        goals: &CellSet,
    ) -> Result<Option<Vec<Cell>>, TopologyError> {
        self.search(image, starts, rules, passable, Some(goals))
            .map(|result| result.path)
    }
}
