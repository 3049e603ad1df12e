//! Loading and saving images, mapping failures onto `AssetError`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ico::IconDir;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};

use crate::error::AssetError;

/// Load an image, detecting its format from the file contents rather than
/// the extension.
pub fn load(path: &Path) -> Result<DynamicImage, AssetError> {
    let load_err = |source: ImageError| AssetError::Load {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_err(ImageError::IoError(e)))?
        .decode()
        .map_err(load_err)
}

/// Encode `image` in `format` and write it to `path`, replacing any
/// existing file.
pub fn save(image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<(), AssetError> {
    image
        .save_with_format(path, format)
        .map_err(|source| AssetError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Write an icon container to `path`, replacing any existing file.
pub fn save_ico(icon_dir: &IconDir, path: &Path) -> Result<(), AssetError> {
    let write_err = |source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    icon_dir.write(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)
}
