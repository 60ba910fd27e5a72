//! Backend seam: the drawing capabilities the renderer needs.
//!
//! The renderer is backend-agnostic. It draws through two small trait
//! interfaces instead of talking to any concrete graphics API:
//!
//! - [`RenderTarget`]: an already-initialized 2D surface that can fill
//!   rectangles and hand out a [`GlyphSource`] for a given atlas.
//! - [`GlyphSource`]: the atlas's backing glyph texture bound to that
//!   target. Its tint is a single shared value for every tile, so the
//!   renderer sets it immediately before each composite and never assumes
//!   it persists.
//!
//! Drawing primitives are infallible by contract: the only failures a
//! render call can report are glyph-texture acquisition and cache
//! allocation. Backends resolve out-of-range geometry by clipping.

use crate::atlas::TileAtlas;
use crate::color::Rgb;
use crate::error::RenderError;

/// An axis-aligned pixel rectangle on a surface or inside the atlas image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// How pixels combine with existing surface content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Source pixels overwrite the destination.
    None,
    /// Source pixels blend over the destination using per-pixel alpha.
    Alpha,
}

/// A 2D drawing surface the console is rendered onto.
pub trait RenderTarget {
    type Glyphs: GlyphSource<Target = Self>;

    /// Obtains the atlas's backing glyph texture bound to this target,
    /// creating it if necessary.
    ///
    /// Returns [`RenderError::TextureUnavailable`] if the texture cannot be
    /// produced; the renderer propagates that before drawing any cell.
    fn glyph_source(&mut self, atlas: &TileAtlas) -> Result<Self::Glyphs, RenderError>;

    /// Sets the blend mode for subsequent [`fill_rect`](Self::fill_rect)
    /// calls. The renderer fills backgrounds with [`BlendMode::None`].
    fn set_fill_blend_mode(&mut self, mode: BlendMode);

    /// Fills `dest` with a flat, fully opaque color.
    fn fill_rect(&mut self, dest: PixelRect, color: Rgb);
}

/// The atlas's glyph texture: tiles composited onto a target with a tint.
///
/// The tint and blend state are shared across all tiles of the texture.
/// Callers must set the tint immediately before each
/// [`composite_to`](Self::composite_to) call.
pub trait GlyphSource {
    type Target: ?Sized;

    /// Sets the blend mode for subsequent composites.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Sets the whole-texture alpha modulation (255 = per-pixel coverage
    /// alone decides opacity).
    fn set_alpha_mod(&mut self, alpha: u8);

    /// Sets the foreground tint applied to subsequent composites.
    fn set_tint(&mut self, tint: Rgb);

    /// Composites the `src` region of the glyph texture onto `dest` of the
    /// target, using per-pixel coverage and the current tint.
    fn composite_to(&mut self, target: &mut Self::Target, src: PixelRect, dest: PixelRect);
}
