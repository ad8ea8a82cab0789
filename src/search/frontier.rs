use crate::cell::Cell;
use std::cmp::Ordering;

/// An entry on the search frontier. [std::collections::BinaryHeap] is a max-heap, so the ordering
/// is reversed: the entry with the smallest priority compares greatest, and among equal priorities
/// the smallest [Cell] wins.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry<P> {
    pub priority: P,
    /// Number of moves from the start cell this entry was reached through.
    pub depth: u32,
    pub cell: Cell,
}

impl<P> FrontierEntry<P> {
    pub fn new(priority: P, depth: u32, cell: Cell) -> FrontierEntry<P> {
        FrontierEntry {
            priority,
            depth,
            cell,
        }
    }
}

impl<P: PartialOrd> Eq for FrontierEntry<P> {}

impl<P: PartialOrd> PartialEq for FrontierEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: PartialOrd> PartialOrd for FrontierEntry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd> Ord for FrontierEntry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Incomparable priorities (NaN) are treated as equal and fall through to the cell ordering
        match other.priority.partial_cmp(&self.priority) {
            Some(Ordering::Equal) | None => other.cell.cmp(&self.cell),
            Some(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn pops_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry::new(2.5, 0, Cell::new(0, 0)));
        heap.push(FrontierEntry::new(0.5, 0, Cell::new(4, 4)));
        heap.push(FrontierEntry::new(1.0, 0, Cell::new(1, 1)));
        let order = std::iter::from_fn(|| heap.pop().map(|e| e.cell)).collect::<Vec<_>>();
        assert_eq!(order, vec![Cell::new(4, 4), Cell::new(1, 1), Cell::new(0, 0)]);
    }

    #[test]
    fn ties_break_on_smallest_cell() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry::new(1u32, 0, Cell::new(1, 0)));
        heap.push(FrontierEntry::new(1u32, 0, Cell::new(0, 3)));
        heap.push(FrontierEntry::new(1u32, 0, Cell::new(0, 1)));
        let order = std::iter::from_fn(|| heap.pop().map(|e| e.cell)).collect::<Vec<_>>();
        assert_eq!(order, vec![Cell::new(0, 1), Cell::new(0, 3), Cell::new(1, 0)]);
    }
}
