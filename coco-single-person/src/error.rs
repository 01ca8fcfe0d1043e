//! Failures of a dataset building run.

use crate::common::*;
use thiserror::Error;

/// The image operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOp {
    Read,
    Write,
}

impl fmt::Display for ImageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("annotations file '{}' does not exist", .path.display())]
    MissingFile { path: PathBuf },
    #[error("failed to {op} image '{}'", .path.display())]
    ImageIo {
        op: ImageOp,
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error(
        "annotation {} has an invalid bounding box {bbox:?}",
        .annotation_id.map_or_else(|| "without id".to_string(), |id| id.to_string())
    )]
    InvalidBBox {
        annotation_id: Option<u64>,
        bbox: [f64; 4],
    },
}
