use crate::cell::Cell;
use crate::image_grid::{GridShape, ImageGrid};
use crate::movement::MovementRules;
use crate::palette::ColorSet;
use crate::CellSet;
use fxhash::FxHashSet;
use log::info;
use petgraph::unionfind::UnionFind;
use std::iter::once;

/// [ConnectivityMap] maintains the connected components of the passable pixels of an image in a
/// [UnionFind] structure, so that a search that can not reach any goal is answered without
/// flood-filling the image.
///
/// Components are only meaningful when every move can be undone; for asymmetric movement rules
/// no cells are joined and [may_reach](Self::may_reach) always defers to the search.
#[derive(Clone, Debug)]
pub struct ConnectivityMap {
    shape: GridShape,
    passable: Vec<bool>,
    components: UnionFind<usize>,
    rules: MovementRules,
    symmetric: bool,
}

impl ConnectivityMap {
    pub fn new(image: &ImageGrid, rules: &MovementRules, colors: &ColorSet) -> ConnectivityMap {
        let mut map = ConnectivityMap {
            shape: image.shape(),
            passable: image.passability_mask(colors),
            components: UnionFind::new(image.shape().len()),
            rules: rules.clone(),
            symmetric: rules.is_symmetric(),
        };
        map.generate_components(image);
        map
    }

    /// Links up passable cells with their passable neighbours.
    fn generate_components(&mut self, image: &ImageGrid) {
        if !self.symmetric {
            info!("Movement rules are not symmetric, skipping connected components");
            return;
        }
        for cell in image.cells() {
            let Some(ix) = self.passable_ix(cell) else {
                continue;
            };
            let neighbours = self
                .rules
                .neighbours(cell)
                .filter_map(|n| self.passable_ix(n))
                .collect::<Vec<usize>>();
            for n_ix in neighbours {
                self.components.union(ix, n_ix);
            }
        }
        info!(
            "Generated connected components for {}x{} image",
            self.shape.width, self.shape.height
        );
    }

    fn passable_ix(&self, cell: Cell) -> Option<usize> {
        self.shape.get_ix_cell(&cell).filter(|&ix| self.passable[ix])
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Retrieves the component id of a passable cell.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.passable_ix(*cell).map(|ix| self.components.find(ix))
    }

    /// Checks if two passable cells are on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        match (self.passable_ix(*start), self.passable_ix(*goal)) {
            (Some(s), Some(g)) => self.components.equiv(s, g),
            _ => false,
        }
    }

    /// Checks if a search from `starts` could reach any of `goals`. Start cells need not be
    /// passable themselves, so the components of their passable neighbours count as reachable
    /// too. Returns [true] whenever the answer can not be decided from the components.
    pub fn may_reach(&self, starts: &CellSet, goals: &CellSet) -> bool {
        if !self.symmetric || goals.iter().any(|g| starts.contains(g)) {
            return true;
        }
        let roots = starts
            .iter()
            .flat_map(|&s| once(s).chain(self.rules.neighbours(s)))
            .filter_map(|c| self.passable_ix(c))
            .map(|ix| self.components.find(ix))
            .collect::<FxHashSet<usize>>();
        goals
            .iter()
            .filter_map(|&g| self.passable_ix(g))
            .any(|ix| roots.contains(&self.components.find(ix)))
    }
}
