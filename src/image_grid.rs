use crate::cell::Cell;
use crate::error::TopologyError;
use crate::palette::{ColorSet, Palette, Rgba};
use core::fmt;
use image::RgbaImage;
use log::info;
use std::path::Path;

/// Dimensions of a row-major grid. Shared by everything that indexes per-pixel buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub width: usize,
    pub height: usize,
}

impl GridShape {
    pub const fn new(width: usize, height: usize) -> GridShape {
        GridShape { width, height }
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }

    /// Index of an in-bounds cell in a row-major buffer of this shape.
    pub fn get_ix_cell(&self, cell: &Cell) -> Option<usize> {
        self.in_bounds(*cell)
            .then(|| cell.row as usize * self.width + cell.col as usize)
    }
}

/// An immutable RGBA pixel buffer addressed by [Cell]s, stored row-major. Searches only ever
/// borrow it, so one grid can back any number of queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl ImageGrid {
    /// Creates a grid of the given size filled with a single color.
    pub fn new(width: usize, height: usize, fill: Rgba) -> ImageGrid {
        ImageGrid {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Builds a grid from a list of rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Rgba>>) -> Result<ImageGrid, TopologyError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return Err(TopologyError::InvalidBuffer {
                width,
                height,
                len: rows.iter().map(|r| r.len() * 4).sum(),
            });
        }
        Ok(ImageGrid {
            width,
            height,
            pixels: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a grid from raw row-major RGBA8 bytes.
    pub fn from_raw(width: usize, height: usize, bytes: &[u8]) -> Result<ImageGrid, TopologyError> {
        if bytes.len() != width * height * 4 {
            return Err(TopologyError::InvalidBuffer {
                width,
                height,
                len: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Ok(ImageGrid {
            width,
            height,
            pixels,
        })
    }

    /// Opens and decodes an image file in any format supported by the `image` crate.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<ImageGrid, TopologyError> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();
        info!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(ImageGrid::from(&image))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn shape(&self) -> GridShape {
        GridShape::new(self.width, self.height)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.shape().in_bounds(cell)
    }

    /// Index of an in-bounds cell in the row-major pixel buffer.
    pub fn get_ix_cell(&self, cell: &Cell) -> Option<usize> {
        self.shape().get_ix_cell(cell)
    }

    /// The color of a pixel, or [None] outside the image.
    pub fn get(&self, cell: Cell) -> Option<&Rgba> {
        self.get_ix_cell(&cell).map(|ix| &self.pixels[ix])
    }

    /// Sets the color of a pixel. Only used while building a grid; searches take `&self`.
    pub fn set(&mut self, cell: Cell, color: Rgba) {
        if let Some(ix) = self.get_ix_cell(&cell) {
            self.pixels[ix] = color;
        }
    }

    /// Grid classifier: whether a cell is inside the image and its color is in `colors`.
    pub fn is_passable(&self, cell: Cell, colors: &ColorSet) -> bool {
        self.get(cell).is_some_and(|c| colors.contains(c))
    }

    /// Passability of every pixel, row-major.
    pub fn passability_mask(&self, colors: &ColorSet) -> Vec<bool> {
        self.pixels.iter().map(|c| colors.contains(c)).collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |col| Cell::new(row, col)))
    }

    /// Pairs every cell with its color, row-major.
    pub fn enumerate(&self) -> impl Iterator<Item = (Cell, &Rgba)> + '_ {
        self.cells().zip(self.pixels.iter())
    }

    /// Renders the grid with one character per pixel according to the palette roles.
    pub fn render(&self, palette: &Palette) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.pixels.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|c| palette.glyph(c)));
            out.push('\n');
        }
        out
    }
}

impl From<&RgbaImage> for ImageGrid {
    fn from(image: &RgbaImage) -> ImageGrid {
        ImageGrid {
            width: image.width() as usize,
            height: image.height() as usize,
            pixels: image.pixels().map(|p| p.0).collect(),
        }
    }
}

impl fmt::Display for ImageGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Image {}x{}:", self.width, self.height)?;
        write!(f, "{}", self.render(&Palette::default()))
    }
}
