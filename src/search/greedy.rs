use crate::cell::Cell;
use crate::search::GridSearch;
use crate::CellSet;
use num_traits::Zero;

/// Greedy best-first search. The frontier is ordered only by the straight-line distance to the
/// nearest goal, without the number of moves already taken, so a found path is short on uniform
/// grids but not guaranteed to be the shortest. Use
/// [UniformCost](crate::search::uniform_cost::UniformCost) when that guarantee is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBestFirst;

impl GreedyBestFirst {
    pub fn new() -> GreedyBestFirst {
        GreedyBestFirst
    }
}

/// Smallest Euclidean distance from `cell` to any of `goals`.
pub fn nearest_goal_distance(cell: &Cell, goals: &CellSet) -> f64 {
    goals
        .iter()
        .map(|goal| cell.euclidean_distance(goal))
        .fold(f64::INFINITY, f64::min)
}

impl GridSearch for GreedyBestFirst {
    type Priority = f64;

    fn priority(&self, cell: &Cell, _depth: u32, goals: Option<&CellSet>) -> f64 {
        goals.map_or_else(f64::zero, |goals| nearest_goal_distance(cell, goals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_grid::ImageGrid;
    use crate::movement::MovementRules;
    use crate::palette::{ColorSet, AIR_COLOR, WALL_COLOR};

    #[test]
    fn priority_is_distance_to_nearest_goal() {
        let goals = [Cell::new(0, 4), Cell::new(3, 0)]
            .into_iter()
            .collect::<CellSet>();
        let solver = GreedyBestFirst::new();
        assert_eq!(solver.priority(&Cell::new(0, 0), 7, Some(&goals)), 3.0);
        assert_eq!(solver.priority(&Cell::new(0, 0), 7, None), 0.0);
    }

    /// Routing around a wall: the greedy path reaches the goal but may be longer than the exact one.
    #[test]
    fn detour_around_wall() {
        // |...G...|
        // |.#####.|
        // |...S...|
        let mut image = ImageGrid::new(7, 3, AIR_COLOR);
        for col in 1..6 {
            image.set(Cell::new(1, col), WALL_COLOR);
        }
        let starts = [Cell::new(2, 3)].into_iter().collect::<CellSet>();
        let goals = [Cell::new(0, 3)].into_iter().collect::<CellSet>();
        let passable = ColorSet::from([AIR_COLOR]);
        let rules = MovementRules::neumann();
        let greedy = GreedyBestFirst
            .find_path(&image, &starts, &rules, &passable, &goals)
            .unwrap()
            .unwrap();
        let exact = crate::search::uniform_cost::UniformCost
            .find_path(&image, &starts, &rules, &passable, &goals)
            .unwrap()
            .unwrap();
        assert_eq!(exact.len(), 8);
        assert!(greedy.len() >= exact.len());
        assert_eq!(greedy.last(), Some(&Cell::new(0, 3)));
    }
}
