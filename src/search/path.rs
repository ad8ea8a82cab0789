use crate::cell::Cell;
use crate::{CellSet, PredecessorMap};
use itertools::Itertools;

/// Walks the predecessor map backwards from `goal` until a start cell is reached.
///
/// The returned path runs from the first move after the start up to and including `goal`; the
/// start cell itself is left out, so the length of the path equals the number of moves taken.
/// Returns [None] if `goal` was never discovered (a start cell that is also a goal and was popped
/// before any neighbour offered it) or if the chain of predecessors ends before a start cell is
/// found.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    starts: &CellSet,
    goal: Cell,
) -> Option<Vec<Cell>> {
    if !predecessors.contains_key(&goal) {
        return None;
    }
    // Every step back consumes a distinct map entry, so the chain is bounded even for a
    // hand-built map containing a cycle
    let mut path = std::iter::successors(Some(goal), |cell| predecessors.get(cell).copied())
        .take(predecessors.len() + 1)
        .take_while_inclusive(|cell| !starts.contains(cell))
        .collect::<Vec<Cell>>();
    match path.pop() {
        Some(last) if starts.contains(&last) => {
            path.reverse();
            Some(path)
        }
        _ => None,
    }
}
