use crate::cell::{Cell, Offset};
use crate::N_SMALLVEC_SIZE;
use smallvec::SmallVec;

/// An ordered set of offsets describing which neighbours are explored from a cell. The order in
/// which offsets are listed is the order in which neighbours are discovered and pushed onto the
/// frontier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovementRules {
    offsets: SmallVec<[Offset; N_SMALLVEC_SIZE]>,
}

impl Default for MovementRules {
    fn default() -> MovementRules {
        MovementRules::neumann()
    }
}

impl MovementRules {
    /// The four cardinal moves, listed as right, down, up, left.
    pub fn neumann() -> MovementRules {
        MovementRules::from_offsets([
            Offset::new(0, 1),
            Offset::new(1, 0),
            Offset::new(-1, 0),
            Offset::new(0, -1),
        ])
    }

    /// The cardinal moves followed by the four diagonal moves.
    pub fn moore() -> MovementRules {
        MovementRules::from_offsets([
            Offset::new(0, 1),
            Offset::new(1, 0),
            Offset::new(-1, 0),
            Offset::new(0, -1),
            Offset::new(1, 1),
            Offset::new(1, -1),
            Offset::new(-1, 1),
            Offset::new(-1, -1),
        ])
    }

    pub fn from_offsets<I>(offsets: I) -> MovementRules
    where
        I: IntoIterator<Item = Offset>,
    {
        MovementRules {
            offsets: offsets.into_iter().collect(),
        }
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True if every move can be undone by another move in the set, in which case reachability
    /// is an equivalence relation and can be precomputed with a union-find structure.
    pub fn is_symmetric(&self) -> bool {
        self.offsets
            .iter()
            .all(|o| self.offsets.contains(&o.inverse()))
    }

    /// The candidate neighbours of a cell in rule order. Bounds are not checked here.
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.offsets.iter().map(move |&o| cell + o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_follow_rule_order() {
        let rules = MovementRules::neumann();
        let neighbours = rules.neighbours(Cell::new(1, 1)).collect::<Vec<_>>();
        assert_eq!(
            neighbours,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(0, 1),
                Cell::new(1, 0)
            ]
        );
    }

    #[test]
    fn symmetry() {
        assert!(MovementRules::neumann().is_symmetric());
        assert!(MovementRules::moore().is_symmetric());
        let one_way = MovementRules::from_offsets([Offset::new(0, 1), Offset::new(1, 0)]);
        assert!(!one_way.is_symmetric());
        assert!(MovementRules::from_offsets([]).is_symmetric());
    }
}
