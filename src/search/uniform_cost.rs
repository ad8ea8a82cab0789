use crate::cell::Cell;
use crate::search::GridSearch;
use crate::CellSet;

/// Uniform-cost search: the frontier is ordered by the number of moves taken, ignoring the goals.
/// Every move costs the same, so this expands cells in breadth-first order and the first goal
/// taken off the frontier is reached by a shortest path.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformCost;

impl GridSearch for UniformCost {
    type Priority = u32;

    fn priority(&self, _cell: &Cell, depth: u32, _goals: Option<&CellSet>) -> u32 {
        depth
    }
}
