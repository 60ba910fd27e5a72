//! Error types for console rendering.

use std::collections::TryReserveError;
use thiserror::Error;

/// Failures that abort a render call.
///
/// Both variants are fatal to the current call and nothing is retried.
/// Every other condition a render pass can hit (unmapped charcodes,
/// zero-sized consoles, out-of-range geometry) is resolved by fallback or
/// elision rather than reported as an error.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The atlas could not supply its backing glyph texture for the given
    /// render target. No cells were drawn and the cache was not modified.
    #[error("glyph texture unavailable for render target: {0}")]
    TextureUnavailable(String),

    /// A new cache frame could not be allocated when first needed (or after
    /// a resize). The call fails outright rather than silently degrading to
    /// uncached rendering, so callers observe the failure instead of a
    /// mysteriously slow frame.
    #[error("failed to allocate console cache: {0}")]
    CacheAllocationFailed(#[from] TryReserveError),
}
