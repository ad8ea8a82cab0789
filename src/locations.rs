use crate::image_grid::ImageGrid;
use crate::palette::ColorSet;
use crate::CellSet;
use log::debug;

/// Collects every cell whose color is in `colors`, scanning the image once in row-major order.
pub fn find_cells(image: &ImageGrid, colors: &ColorSet) -> CellSet {
    let cells = image
        .enumerate()
        .filter(|(_, color)| colors.contains(color))
        .map(|(cell, _)| cell)
        .collect::<CellSet>();
    debug!(
        "Found {} matching cells in {}x{} image",
        cells.len(),
        image.width(),
        image.height()
    );
    cells
}
