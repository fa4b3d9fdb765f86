// File: crates/chart-core/src/error.rs
// Summary: Error type for the rendering pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("failed to create raster surface")]
    Surface,

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("encode PNG failed")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
