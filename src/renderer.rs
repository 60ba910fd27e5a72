// src/renderer.rs

//! The console render pass.
//!
//! [`render_console`] turns one [`Console`] snapshot into pixels on a
//! [`RenderTarget`] by compositing tiles from a [`TileAtlas`], and keeps the
//! cost of repeated calls low by diffing every cell against the previous
//! frame held in a [`ConsoleCache`]. Cells that match the cached frame are
//! skipped outright; their destination pixels are left exactly as the
//! previous call drew them.
//!
//! Dirty detection is an optimization, never a semantic filter: rendering
//! with the cache disabled produces pixel-identical output to rendering
//! every cell.

use crate::atlas::TileAtlas;
use crate::console::{Cell, Console};
use crate::error::RenderError;
use crate::target::{BlendMode, GlyphSource, RenderTarget};
use log::debug;

/// Charcode that never produces a glyph composite.
const NULL_CHAR: u32 = 0;
/// Space also never produces a glyph composite.
const SPACE: u32 = 0x20;

/// The previous rendered frame, owned across render calls.
///
/// Empty until the first successful cached render. The held frame always
/// matches the dimensions of the console it was rendered from; a render
/// call with a differently shaped console discards it and allocates a
/// replacement rather than mutating it in place.
#[derive(Debug, Default)]
pub struct ConsoleCache {
    frame: Option<Console>,
}

impl ConsoleCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered frame, if any.
    pub fn frame(&self) -> Option<&Console> {
        self.frame.as_ref()
    }

    /// Drops the held frame, forcing the next render call to treat every
    /// cell as dirty.
    pub fn invalidate(&mut self) {
        self.frame = None;
    }

    fn invalidate_if_resized(&mut self, size: (usize, usize)) {
        if let Some(frame) = &self.frame {
            if frame.size() != size {
                debug!(
                    "console cache {:?} does not match console {:?}; discarding",
                    frame.size(),
                    size
                );
                self.frame = None;
            }
        }
    }
}

/// Whether a cell needs repainting, given its cached counterpart.
///
/// Always dirty when no cached cell exists. Otherwise dirty unless the
/// charcode and all six color channels compare exactly equal. Pure.
pub fn cell_is_dirty(current: Cell, cached: Option<Cell>) -> bool {
    match cached {
        Some(prev) => current != prev,
        None => true,
    }
}

/// Renders one console snapshot onto `target`, diffing against `cache`.
///
/// Passing `None` for `cache` disables caching entirely: every cell is
/// treated as dirty and nothing is allocated or consulted. Passing an empty
/// [`ConsoleCache`] renders the same way but records the frame for the next
/// call.
///
/// # Errors
///
/// * [`RenderError::TextureUnavailable`] — the atlas's glyph texture could
///   not be obtained for this target; no cells were drawn and the cache was
///   not modified.
/// * [`RenderError::CacheAllocationFailed`] — a replacement cache frame
///   could not be allocated (first cached use, or after a resize); the call
///   fails before any cell is drawn rather than silently degrading.
pub fn render_console<T: RenderTarget>(
    target: &mut T,
    atlas: &TileAtlas,
    console: &Console,
    mut cache: Option<&mut ConsoleCache>,
) -> Result<(), RenderError> {
    if let Some(slot) = cache.as_deref_mut() {
        slot.invalidate_if_resized(console.size());
    }

    let mut glyphs = target.glyph_source(atlas)?;

    // The replacement frame is allocated before the cell pass so an
    // allocation failure aborts while the target is still untouched.
    let mut fresh = match cache.as_deref() {
        Some(slot) if slot.frame.is_none() => {
            debug!(
                "allocating console cache {}x{}",
                console.width(),
                console.height()
            );
            Some(Console::try_new(console.width(), console.height())?)
        }
        _ => None,
    };

    // Fills are opaque; composites blend by per-pixel coverage with the
    // whole-texture alpha left wide open.
    target.set_fill_blend_mode(BlendMode::None);
    glyphs.set_blend_mode(BlendMode::Alpha);
    glyphs.set_alpha_mod(255);

    let prev = cache.as_deref().and_then(ConsoleCache::frame);
    let (width, height) = console.size();
    for y in 0..height {
        for x in 0..width {
            render_cell(target, &mut glyphs, atlas, console, prev, x, y);
        }
    }

    if let Some(slot) = cache {
        let mut frame = fresh.take().or_else(|| slot.frame.take());
        if let Some(frame) = frame.as_mut() {
            frame.copy_from(console);
        }
        slot.frame = frame;
    }
    Ok(())
}

/// Renders a single cell: background fill, then the glyph composite unless
/// the cell is clean or the glyph is invisible.
fn render_cell<T: RenderTarget>(
    target: &mut T,
    glyphs: &mut T::Glyphs,
    atlas: &TileAtlas,
    console: &Console,
    prev: Option<&Console>,
    x: usize,
    y: usize,
) {
    let cell = console.cell(x, y);
    if !cell_is_dirty(cell, prev.map(|p| p.cell(x, y))) {
        return;
    }
    let dest = atlas.dest_rect(x, y);
    // The background is always painted for a dirty cell, even when a glyph
    // lands on top of it.
    target.fill_rect(dest, cell.bg);
    // Skip invisible glyphs.
    if cell.fg == cell.bg {
        return;
    }
    if cell.ch == NULL_CHAR || cell.ch == SPACE {
        return;
    }
    let src = atlas.tile_rect(atlas.tile_for_charcode(cell.ch));
    // The tint is shared by every tile of the glyph texture; set it
    // immediately before the composite and never assume it persists.
    glyphs.set_tint(cell.fg);
    glyphs.composite_to(target, src, dest);
}
