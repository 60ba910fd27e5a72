// src/lib.rs

//! tileblit: a cached tile-console renderer.
//!
//! A [`Console`] is a grid of colored character cells. [`render_console`]
//! turns one console snapshot into pixels on a [`RenderTarget`] by
//! compositing glyph tiles from a [`TileAtlas`], filling each cell's
//! background and alpha-blending its tinted glyph on top. A [`ConsoleCache`]
//! holds the previously rendered frame so unchanged cells are skipped
//! entirely, keeping redraw cost proportional to what actually changed.
//!
//! The renderer is backend-agnostic: anything implementing [`RenderTarget`]
//! (and handing out a [`GlyphSource`] for the atlas) can be drawn to. A
//! software framebuffer backend is provided in [`soft`] as the reference
//! implementation and for headless testing.
//!
//! ```
//! use tileblit::{render_console, Console, ConsoleCache, Rgb, SoftTarget, TileAtlas};
//!
//! let mut atlas = TileAtlas::new(8, 8, 16, 16);
//! atlas.assign_cp437();
//!
//! let mut console = Console::new(80, 25);
//! console.put(1, 1, '@' as u32, Rgb::BRIGHT_WHITE, Rgb::BLACK);
//!
//! let mut target = SoftTarget::sized_for(&atlas, 80, 25);
//! let mut cache = ConsoleCache::new();
//! render_console(&mut target, &atlas, &console, Some(&mut cache)).unwrap();
//! // A second call with the same console draws nothing.
//! render_console(&mut target, &atlas, &console, Some(&mut cache)).unwrap();
//! ```

pub mod atlas;
pub mod color;
pub mod console;
pub mod error;
pub mod renderer;
pub mod soft;
pub mod target;

pub use atlas::TileAtlas;
pub use color::Rgb;
pub use console::{Cell, Console};
pub use error::RenderError;
pub use renderer::{cell_is_dirty, render_console, ConsoleCache};
pub use soft::{SoftGlyphs, SoftTarget};
pub use target::{BlendMode, GlyphSource, PixelRect, RenderTarget};
