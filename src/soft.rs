//! Software reference backend.
//!
//! `SoftTarget` is a plain RGB framebuffer implementing [`RenderTarget`],
//! with `SoftGlyphs` colorizing the atlas's monochrome coverage bitmap at
//! composite time. It exists so rendering behavior can be verified down to
//! exact pixel values without a windowing system, and doubles as a
//! reference for what hardware backends must produce.

use crate::atlas::TileAtlas;
use crate::color::Rgb;
use crate::error::RenderError;
use crate::target::{BlendMode, GlyphSource, PixelRect, RenderTarget};
use log::trace;

/// An owned RGB framebuffer.
#[derive(Debug, Clone)]
pub struct SoftTarget {
    width_px: u32,
    height_px: u32,
    pixels: Vec<Rgb>,
    fill_blend: BlendMode,
}

impl SoftTarget {
    /// Creates a black framebuffer of the given pixel size.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        trace!("SoftTarget::new {}x{}", width_px, height_px);
        Self {
            width_px,
            height_px,
            pixels: vec![Rgb::BLACK; width_px as usize * height_px as usize],
            fill_blend: BlendMode::None,
        }
    }

    /// Creates a framebuffer sized to hold `cols × rows` cells of `atlas`.
    pub fn sized_for(atlas: &TileAtlas, cols: usize, rows: usize) -> Self {
        Self::new(
            cols as u32 * atlas.tile_width(),
            rows as u32 * atlas.tile_height(),
        )
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Reads back one pixel.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the framebuffer.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width_px && y < self.height_px);
        self.pixels[(y * self.width_px + x) as usize]
    }

    /// The full framebuffer, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        // Out-of-bounds writes are clipped, never an error.
        if x < self.width_px && y < self.height_px {
            self.pixels[(y * self.width_px + x) as usize] = color;
        }
    }
}

impl RenderTarget for SoftTarget {
    type Glyphs = SoftGlyphs;

    fn glyph_source(&mut self, atlas: &TileAtlas) -> Result<Self::Glyphs, RenderError> {
        Ok(SoftGlyphs {
            coverage: atlas.coverage().to_vec(),
            image_width: atlas.image_width(),
            image_height: atlas.image_height(),
            blend: BlendMode::Alpha,
            alpha_mod: 255,
            tint: Rgb::WHITE,
        })
    }

    fn set_fill_blend_mode(&mut self, mode: BlendMode) {
        self.fill_blend = mode;
    }

    fn fill_rect(&mut self, dest: PixelRect, color: Rgb) {
        // Fill colors are fully opaque, so both blend modes reduce to an
        // overwrite.
        for dy in 0..dest.h {
            for dx in 0..dest.w {
                self.put_pixel(dest.x + dx, dest.y + dy, color);
            }
        }
    }
}

/// The atlas coverage bitmap bound to a [`SoftTarget`], plus the shared
/// tint/blend state every composite goes through.
#[derive(Debug, Clone)]
pub struct SoftGlyphs {
    coverage: Vec<u8>,
    image_width: u32,
    image_height: u32,
    blend: BlendMode,
    alpha_mod: u8,
    tint: Rgb,
}

impl SoftGlyphs {
    fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x < self.image_width && y < self.image_height {
            self.coverage[(y * self.image_width + x) as usize]
        } else {
            0
        }
    }
}

/// Integer alpha blend of one channel: `src` over `dst` at opacity `a`.
fn blend_channel(src: u8, dst: u8, a: u8) -> u8 {
    let src = src as u32;
    let dst = dst as u32;
    let a = a as u32;
    ((src * a + dst * (255 - a) + 127) / 255) as u8
}

impl GlyphSource for SoftGlyphs {
    type Target = SoftTarget;

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn set_alpha_mod(&mut self, alpha: u8) {
        self.alpha_mod = alpha;
    }

    fn set_tint(&mut self, tint: Rgb) {
        self.tint = tint;
    }

    fn composite_to(&mut self, target: &mut SoftTarget, src: PixelRect, dest: PixelRect) {
        let w = src.w.min(dest.w);
        let h = src.h.min(dest.h);
        for dy in 0..h {
            for dx in 0..w {
                let tx = dest.x + dx;
                let ty = dest.y + dy;
                if tx >= target.width_px || ty >= target.height_px {
                    continue;
                }
                let cov = self.coverage_at(src.x + dx, src.y + dy);
                let a = (cov as u32 * self.alpha_mod as u32 / 255) as u8;
                let out = match self.blend {
                    // Blend-less copy ignores coverage, like a raw texture
                    // copy of the tinted tile.
                    BlendMode::None => self.tint,
                    BlendMode::Alpha => {
                        if a == 0 {
                            continue;
                        }
                        let dst = target.pixel(tx, ty);
                        Rgb::new(
                            blend_channel(self.tint.r, dst.r, a),
                            blend_channel(self.tint.g, dst.g, a),
                            blend_channel(self.tint.b, dst.b, a),
                        )
                    }
                };
                target.put_pixel(tx, ty, out);
            }
        }
    }
}
