//! Defines the `TileAtlas`: glyph tiles packed in a grid, plus the
//! charcode-to-tile lookup and the cell/tile coordinate mapping.
//!
//! The atlas image is a monochrome coverage bitmap, one byte per pixel
//! (0 = transparent, 255 = full glyph coverage). Backends colorize it at
//! composite time with the cell's foreground tint; the atlas itself carries
//! no color.

use crate::target::PixelRect;
use std::collections::HashMap;

/// Unicode codepoint for each tile of a CP437-ordered tileset.
#[rustfmt::skip]
const CP437_UNICODE: [u32; 256] = [
    0x0000, 0x263A, 0x263B, 0x2665, 0x2666, 0x2663, 0x2660, 0x2022,
    0x25D8, 0x25CB, 0x25D9, 0x2642, 0x2640, 0x266A, 0x266B, 0x263C,
    0x25BA, 0x25C4, 0x2195, 0x203C, 0x00B6, 0x00A7, 0x25AC, 0x21A8,
    0x2191, 0x2193, 0x2192, 0x2190, 0x221F, 0x2194, 0x25B2, 0x25BC,
    0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027,
    0x0028, 0x0029, 0x002A, 0x002B, 0x002C, 0x002D, 0x002E, 0x002F,
    0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037,
    0x0038, 0x0039, 0x003A, 0x003B, 0x003C, 0x003D, 0x003E, 0x003F,
    0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047,
    0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F,
    0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057,
    0x0058, 0x0059, 0x005A, 0x005B, 0x005C, 0x005D, 0x005E, 0x005F,
    0x0060, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067,
    0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F,
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077,
    0x0078, 0x0079, 0x007A, 0x007B, 0x007C, 0x007D, 0x007E, 0x2302,
    0x00C7, 0x00FC, 0x00E9, 0x00E2, 0x00E4, 0x00E0, 0x00E5, 0x00E7,
    0x00EA, 0x00EB, 0x00E8, 0x00EF, 0x00EE, 0x00EC, 0x00C4, 0x00C5,
    0x00C9, 0x00E6, 0x00C6, 0x00F4, 0x00F6, 0x00F2, 0x00FB, 0x00F9,
    0x00FF, 0x00D6, 0x00DC, 0x00A2, 0x00A3, 0x00A5, 0x20A7, 0x0192,
    0x00E1, 0x00ED, 0x00F3, 0x00FA, 0x00F1, 0x00D1, 0x00AA, 0x00BA,
    0x00BF, 0x2310, 0x00AC, 0x00BD, 0x00BC, 0x00A1, 0x00AB, 0x00BB,
    0x2591, 0x2592, 0x2593, 0x2502, 0x2524, 0x2561, 0x2562, 0x2556,
    0x2555, 0x2563, 0x2551, 0x2557, 0x255D, 0x255C, 0x255B, 0x2510,
    0x2514, 0x2534, 0x252C, 0x251C, 0x2500, 0x253C, 0x255E, 0x255F,
    0x255A, 0x2554, 0x2569, 0x2566, 0x2560, 0x2550, 0x256C, 0x2567,
    0x2568, 0x2564, 0x2565, 0x2559, 0x2558, 0x2552, 0x2553, 0x256B,
    0x256A, 0x2518, 0x250C, 0x2588, 0x2584, 0x258C, 0x2590, 0x2580,
    0x03B1, 0x00DF, 0x0393, 0x03C0, 0x03A3, 0x03C3, 0x00B5, 0x03C4,
    0x03A6, 0x0398, 0x03A9, 0x03B4, 0x221E, 0x03C6, 0x03B5, 0x2229,
    0x2261, 0x00B1, 0x2265, 0x2264, 0x2320, 0x2321, 0x00F7, 0x2248,
    0x00B0, 0x2219, 0x00B7, 0x221A, 0x207F, 0x00B2, 0x25A0, 0x00A0,
];

/// A glyph tile atlas: tile metrics, the coverage image, and the
/// charcode-to-tile lookup.
///
/// Tiles are packed left-to-right, top-to-bottom with `columns` tiles per
/// image row. Charcodes without a mapping resolve to the fallback tile
/// (tile 0 unless changed), never to an error.
#[derive(Debug, Clone)]
pub struct TileAtlas {
    tile_width: u32,
    tile_height: u32,
    columns: u32,
    rows: u32,
    coverage: Vec<u8>,
    charmap: HashMap<u32, u32>,
    fallback_tile: u32,
}

impl TileAtlas {
    /// Creates an atlas of `columns × rows` tiles with a fully transparent
    /// coverage image and an empty charcode map.
    pub fn new(tile_width: u32, tile_height: u32, columns: u32, rows: u32) -> Self {
        let len = (tile_width * columns) as usize * (tile_height * rows) as usize;
        Self {
            tile_width,
            tile_height,
            columns,
            rows,
            coverage: vec![0; len],
            charmap: HashMap::new(),
            fallback_tile: 0,
        }
    }

    /// Replaces the coverage image. One byte per pixel, row-major over the
    /// full `image_width() × image_height()` atlas image.
    ///
    /// # Panics
    /// Panics if `coverage` does not match the atlas image size.
    pub fn with_coverage(mut self, coverage: Vec<u8>) -> Self {
        assert_eq!(
            coverage.len(),
            (self.image_width() as usize) * (self.image_height() as usize),
            "coverage bitmap does not match atlas image size"
        );
        self.coverage = coverage;
        self
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Width of the backing image in pixels.
    pub fn image_width(&self) -> u32 {
        self.columns * self.tile_width
    }

    /// Height of the backing image in pixels.
    pub fn image_height(&self) -> u32 {
        self.rows * self.tile_height
    }

    /// The monochrome coverage bitmap backing this atlas.
    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// Maps a charcode to a tile index, replacing any previous mapping.
    pub fn map_charcode(&mut self, ch: u32, tile: u32) {
        self.charmap.insert(ch, tile);
    }

    /// Sets the tile used for charcodes with no mapping.
    pub fn set_fallback_tile(&mut self, tile: u32) {
        self.fallback_tile = tile;
    }

    /// Installs the classic CP437 layout: tile `i` is the glyph for the
    /// CP437 codepoint `i`, addressed by its Unicode value. ASCII codes map
    /// to themselves under this layout. Mappings beyond the atlas's actual
    /// tile count are skipped.
    pub fn assign_cp437(&mut self) {
        let count = self.tile_count();
        for (tile, &ch) in CP437_UNICODE.iter().enumerate() {
            let tile = tile as u32;
            if tile < count {
                self.charmap.insert(ch, tile);
            }
        }
    }

    /// Resolves a charcode to its tile index, falling back for unmapped
    /// codes.
    pub fn tile_for_charcode(&self, ch: u32) -> u32 {
        self.charmap.get(&ch).copied().unwrap_or(self.fallback_tile)
    }

    /// Destination pixel rectangle for the console cell at `(x, y)`.
    /// No bounds checking; the caller guarantees the cell is in the grid.
    pub fn dest_rect(&self, cell_x: usize, cell_y: usize) -> PixelRect {
        PixelRect::new(
            cell_x as u32 * self.tile_width,
            cell_y as u32 * self.tile_height,
            self.tile_width,
            self.tile_height,
        )
    }

    /// Source pixel rectangle for `tile` inside the atlas image.
    /// An out-of-range index yields a geometrically valid but meaningless
    /// rectangle; supplying one is a caller contract violation.
    pub fn tile_rect(&self, tile: u32) -> PixelRect {
        PixelRect::new(
            tile % self.columns * self.tile_width,
            tile / self.columns * self.tile_height,
            self.tile_width,
            self.tile_height,
        )
    }
}
