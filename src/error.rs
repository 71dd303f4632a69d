//! Error types for the icon generation pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating an icon set.
///
/// Every variant is terminal for the stage that raised it; nothing in the
/// pipeline retries. The `Io` variant names the catalog entry whose file
/// could not be written, since earlier entries may already be on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Input or environment rejected before any expensive work.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Malformed UTF-8 input or corrupt fetched glyph bytes.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The remote glyph fetch failed or returned an empty payload.
    #[error("emoji asset not found: {0}")]
    AssetNotFound(String),

    /// Writing one output file failed.
    #[error("failed to write icon \"{entry}\": {source}")]
    Io {
        /// Name of the catalog entry that failed.
        entry: String,
        #[source]
        source: std::io::Error,
    },
}
