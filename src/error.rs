use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting an asset.
#[derive(Debug)]
pub enum AssetError {
    /// Source image could not be opened or decoded
    Load { path: PathBuf, source: image::ImageError },
    /// Image could not be encoded or written in the requested format
    Encode { path: PathBuf, source: image::ImageError },
    /// Icon container could not be written to disk
    Write { path: PathBuf, source: io::Error },
    /// A single icon entry failed to encode
    IconEncode { size: u32, source: io::Error },
    /// Requested output size has a zero dimension
    InvalidSize { width: u32, height: u32 },
    /// Source is too thin to crop to the target ratio
    DegenerateCrop { width: u32, height: u32 },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Load { path, source } => {
                write!(f, "failed to load {}: {}", path.display(), source)
            }
            AssetError::Encode { path, source } => {
                write!(f, "failed to save {}: {}", path.display(), source)
            }
            AssetError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            AssetError::IconEncode { size, source } => {
                write!(f, "failed to encode {size}x{size} icon: {}", source)
            }
            AssetError::InvalidSize { width, height } => {
                write!(f, "invalid output size: {}x{}", width, height)
            }
            AssetError::DegenerateCrop { width, height } => write!(
                f,
                "cannot crop a {}x{} image to the target aspect ratio",
                width, height
            ),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Load { source, .. } => Some(source),
            AssetError::Encode { source, .. } => Some(source),
            AssetError::Write { source, .. } => Some(source),
            AssetError::IconEncode { source, .. } => Some(source),
            _ => None,
        }
    }
}
