//! Convert a source image into a Windows ICO plus a companion PNG.

use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::AssetError;
use crate::utils::image_io;
use crate::utils::paths::png_sibling;

/// Square renditions embedded in every icon, largest first.
pub const ICON_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

/// Files written by a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutputs {
    pub png: PathBuf,
    pub ico: PathBuf,
}

/// Write `src` as a PNG next to `dst_ico`, then as a multi-size icon at
/// `dst_ico`.
///
/// The PNG is written first and is left in place if the icon fails.
pub fn run(src: &Path, dst_ico: &Path) -> Result<IconOutputs, AssetError> {
    let png = png_sibling(dst_ico);
    let image = image_io::load(src)?;

    image_io::save(&image, &png, ImageFormat::Png)?;

    let icon_dir = encode_ico(&image, &ICON_SIZES)?;
    image_io::save_ico(&icon_dir, dst_ico)?;

    Ok(IconOutputs {
        png,
        ico: dst_ico.to_path_buf(),
    })
}

/// Build an icon container with one square RGBA entry per size.
///
/// Each rendition keeps the source aspect ratio: it is fitted inside the
/// square with Lanczos3 and centered on a transparent canvas.
pub fn encode_ico(image: &DynamicImage, sizes: &[u32]) -> Result<IconDir, AssetError> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        if size == 0 {
            return Err(AssetError::InvalidSize {
                width: size,
                height: size,
            });
        }
        let icon_image = IconImage::from_rgba_data(size, size, letterbox(image, size).into_raw());
        let entry = IconDirEntry::encode(&icon_image)
            .map_err(|source| AssetError::IconEncode { size, source })?;
        icon_dir.add_entry(entry);
    }

    Ok(icon_dir)
}

/// Fit `image` inside a `size` x `size` transparent square.
fn letterbox(image: &DynamicImage, size: u32) -> RgbaImage {
    let fitted = image.resize(size, size, FilterType::Lanczos3).to_rgba8();
    let mut canvas = RgbaImage::new(size, size);
    let x = (size - fitted.width()) / 2;
    let y = (size - fitted.height()) / 2;
    imageops::overlay(&mut canvas, &fitted, i64::from(x), i64::from(y));
    canvas
}
