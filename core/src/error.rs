use thiserror::Error;

/// Errors surfaced by the console API.
///
/// Geometry that falls outside the screen is clipped and undersized bitmaps
/// are zero-padded; neither is reported here.
#[derive(Debug, Error)]
pub enum Error {
    /// The emulated firmware call has no desktop equivalent.
    #[error("{0} is not supported in this environment")]
    Unsupported(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A font was requested with a zero-sized glyph cell.
    #[error("invalid font geometry {width}x{height}")]
    InvalidFont { width: usize, height: usize },

    /// Masked drawing requires the sprite and the mask to share geometry.
    #[error(
        "mask is {mask_width}x{mask_height} but sprite is {sprite_width}x{sprite_height}"
    )]
    MaskGeometryMismatch {
        sprite_width: usize,
        sprite_height: usize,
        mask_width: usize,
        mask_height: usize,
    },

    #[error("no save item named {0:?}")]
    MissingItem(String),

    #[error("save data has no name; call set_name first")]
    SaveNameUnset,

    /// Save names become a directory name and must be a single path component.
    #[error("invalid save name {0:?}")]
    InvalidSaveName(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
