//! Defines the `Cell` and `Console` types.
//!
//! A `Console` is a rectangular, row-major grid of colored character cells
//! representing one frame's content. The renderer treats a console as an
//! immutable snapshot for the duration of one render call; the same type
//! also serves as the previous-frame cache owned by [`ConsoleCache`].
//!
//! [`ConsoleCache`]: crate::renderer::ConsoleCache

use crate::color::Rgb;
use crate::error::RenderError;
use serde::{Deserialize, Serialize};

/// A single character cell: a charcode plus foreground and background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Character code, resolved to a tile through the atlas's charcode map.
    /// `0` and `0x20` (space) never produce a glyph composite.
    pub ch: u32,
    /// Foreground (glyph tint) color.
    pub fg: Rgb,
    /// Background (fill) color.
    pub bg: Rgb,
}

impl Cell {
    /// Default cell: a space, white on black.
    pub const DEFAULT: Cell = Cell {
        ch: 0x20,
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
    };

    pub const fn new(ch: u32, fg: Rgb, bg: Rgb) -> Self {
        Self { ch, fg, bg }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::DEFAULT
    }
}

/// A `width × height` grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Console {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Console {
    /// Creates a console filled with [`Cell::DEFAULT`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::DEFAULT; width * height],
        }
    }

    /// Fallible construction, used when allocating the previous-frame cache
    /// so an allocation failure surfaces as [`RenderError::CacheAllocationFailed`]
    /// instead of aborting the process.
    pub fn try_new(width: usize, height: usize) -> Result<Self, RenderError> {
        let len = width * height;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len)?;
        cells.resize(len, Cell::DEFAULT);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Sets the cell at `(x, y)`. Writes outside the grid are ignored.
    pub fn put(&mut self, x: usize, y: usize, ch: u32, fg: Rgb, bg: Rgb) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = Cell::new(ch, fg, bg);
        }
    }

    /// Overwrites every cell.
    pub fn fill(&mut self, ch: u32, fg: Rgb, bg: Rgb) {
        self.cells.fill(Cell::new(ch, fg, bg));
    }

    /// Full-content copy from another console of the same shape.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn copy_from(&mut self, other: &Console) {
        assert_eq!(
            self.size(),
            other.size(),
            "copy_from requires matching console dimensions"
        );
        self.cells.copy_from_slice(&other.cells);
    }

    /// Iterates `(x, y, cell)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i % self.width, i / self.width, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn new_console_is_default_filled() {
        let con = Console::new(3, 2);
        assert_eq!(con.size(), (3, 2));
        assert!(con.iter_cells().all(|(_, _, c)| c == Cell::DEFAULT));
    }

    #[test]
    fn put_and_read_back() {
        let mut con = Console::new(4, 4);
        con.put(2, 1, b'@' as u32, Rgb::BRIGHT_WHITE, Rgb::BLUE);
        let cell = con.cell(2, 1);
        assert_eq!(cell.ch, b'@' as u32);
        assert_eq!(cell.fg, Rgb::BRIGHT_WHITE);
        assert_eq!(cell.bg, Rgb::BLUE);
    }

    #[test]
    fn put_out_of_bounds_is_ignored() {
        let mut con = Console::new(2, 2);
        con.put(2, 0, b'x' as u32, Rgb::WHITE, Rgb::BLACK);
        con.put(0, 5, b'x' as u32, Rgb::WHITE, Rgb::BLACK);
        assert!(con.iter_cells().all(|(_, _, c)| c == Cell::DEFAULT));
    }

    #[test]
    fn copy_from_snapshots_full_contents() {
        let mut a = Console::new(3, 3);
        a.fill(b'#' as u32, Rgb::GREEN, Rgb::BLACK);
        let mut b = Console::new(3, 3);
        b.copy_from(&a);
        assert_eq!(a, b);
        // Mutating the source afterwards must not affect the copy.
        a.put(0, 0, b'!' as u32, Rgb::RED, Rgb::BLACK);
        assert_ne!(a, b);
    }

    #[test]
    fn try_new_zero_sized() {
        let con = Console::try_new(0, 0).unwrap();
        assert_eq!(con.size(), (0, 0));
    }
}
