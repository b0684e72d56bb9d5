use displaydoc::Display;
use thiserror::Error;

use crate::types::ClusterID;

#[derive(Debug, Display, Error)]
pub enum Error {
    /// Truncated image, {required} bytes required but only {actual} present
    TruncatedImage { required: usize, actual: usize },
    /// Read of {width} bytes at offset {offset:#06X} out of range, image size {length}
    OutOfRange { offset: usize, width: usize, length: usize },
    /// Invalid text encoding at offset {offset:#06X}
    InvalidEncoding { offset: usize },
    /// Invalid geometry: {0}
    InvalidGeometry(&'static str),
    /// Path not found
    PathNotFound,
    /// File not found
    FileNotFound,
    /// Duplicate file found, {0} entries share the same name
    DuplicateFileFound(usize),
    /// Corrupted cluster chain at cluster {0}
    CorruptChain(ClusterID),
}

#[cfg(feature = "std")]
#[derive(Debug, Display, Error)]
pub enum LoadError {
    /// IO: {0}
    IO(#[from] std::io::Error),
    /// {0}
    Image(#[from] Error),
}
