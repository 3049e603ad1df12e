//! Build the wizard sidebar bitmap shown by an installer.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::error::AssetError;
use crate::utils::crop::centered_crop;
use crate::utils::image_io;

/// Output size of a sidebar bitmap. Its aspect ratio is the crop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarGeometry {
    pub width: u32,
    pub height: u32,
}

impl SidebarGeometry {
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Standard installer sidebar size.
pub const SIDEBAR_GEOMETRY: SidebarGeometry = SidebarGeometry {
    width: 164,
    height: 314,
};

/// Double-density variant of [`SIDEBAR_GEOMETRY`].
pub const SIDEBAR_GEOMETRY_HIDPI: SidebarGeometry = SidebarGeometry {
    width: 328,
    height: 628,
};

/// Crop `src` to the geometry's aspect ratio, resize it and write it to
/// `dst` as a 24-bit BMP.
pub fn run(src: &Path, dst: &Path, geometry: SidebarGeometry) -> Result<(), AssetError> {
    let image = image_io::load(src)?;
    let sidebar = build(&image, geometry)?;

    // BMP sidebars carry no alpha channel
    let rgb = DynamicImage::ImageRgb8(sidebar.to_rgb8());
    image_io::save(&rgb, dst, ImageFormat::Bmp)
}

/// Centered crop followed by a Lanczos3 resize to exactly the geometry.
pub fn build(image: &DynamicImage, geometry: SidebarGeometry) -> Result<DynamicImage, AssetError> {
    if geometry.width == 0 || geometry.height == 0 {
        return Err(AssetError::InvalidSize {
            width: geometry.width,
            height: geometry.height,
        });
    }

    let rect = centered_crop(image.width(), image.height(), geometry.width, geometry.height);
    if rect.width == 0 || rect.height == 0 {
        return Err(AssetError::DegenerateCrop {
            width: image.width(),
            height: image.height(),
        });
    }

    let cropped = image.crop_imm(rect.x, rect.y, rect.width, rect.height);
    Ok(cropped.resize_exact(geometry.width, geometry.height, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    /// 1000x500 image: red margin, green band of the expected crop, blue margin.
    fn banded_landscape() -> RgbaImage {
        RgbaImage::from_fn(1000, 500, |x, _| match x {
            0..369 => RED,
            369..630 => GREEN,
            _ => BLUE,
        })
    }

    fn write_source(dir: &TempDir, image: &RgbaImage) -> PathBuf {
        let path = dir.path().join("source.png");
        image.save_with_format(&path, ImageFormat::Png).unwrap();
        path
    }

    #[test]
    fn standard_geometry_ratio() {
        assert!((SIDEBAR_GEOMETRY.ratio() - 164.0 / 314.0).abs() < f64::EPSILON);
        assert_eq!(SIDEBAR_GEOMETRY.ratio(), SIDEBAR_GEOMETRY_HIDPI.ratio());
    }

    #[test]
    fn landscape_source_becomes_sidebar_bitmap() {
        let dir = TempDir::new().unwrap();
        let src = write_source(&dir, &banded_landscape());
        let dst = dir.path().join("sidebar.bmp");

        run(&src, &dst, SIDEBAR_GEOMETRY).unwrap();

        let bytes = fs::read(&dst).unwrap();
        assert_eq!(&bytes[..2], b"BM");

        let written = image::open(&dst).unwrap();
        assert_eq!((written.width(), written.height()), (164, 314));
    }

    #[test]
    fn keeps_the_center_band() {
        let sidebar = build(&DynamicImage::ImageRgba8(banded_landscape()), SIDEBAR_GEOMETRY)
            .unwrap()
            .to_rgba8();

        for (x, y) in [(0, 0), (82, 157), (163, 313)] {
            let Rgba([r, g, b, _]) = *sidebar.get_pixel(x, y);
            assert!(g > 200 && r < 50 && b < 50, "pixel ({}, {}) = {:?}", x, y, (r, g, b));
        }
    }

    #[test]
    fn exact_ratio_source_is_only_resized() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_fn(656, 1256, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        }));

        let sidebar = build(&source, SIDEBAR_GEOMETRY).unwrap();
        let uncropped = source.resize_exact(164, 314, FilterType::Lanczos3);

        assert_eq!(sidebar.to_rgba8(), uncropped.to_rgba8());
    }

    #[test]
    fn portrait_source_is_resized_to_geometry() {
        let source = RgbaImage::from_pixel(600, 2400, GREEN);

        let sidebar = build(&DynamicImage::ImageRgba8(source), SIDEBAR_GEOMETRY).unwrap();

        assert_eq!((sidebar.width(), sidebar.height()), (164, 314));
    }

    #[test]
    fn hidpi_geometry_doubles_output() {
        let dir = TempDir::new().unwrap();
        let src = write_source(&dir, &banded_landscape());
        let dst = dir.path().join("sidebar@2x.bmp");

        run(&src, &dst, SIDEBAR_GEOMETRY_HIDPI).unwrap();

        let written = image::open(&dst).unwrap();
        assert_eq!((written.width(), written.height()), (328, 628));
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let dir = TempDir::new().unwrap();
        let src = write_source(&dir, &banded_landscape());
        let dst = dir.path().join("sidebar.bmp");

        run(&src, &dst, SIDEBAR_GEOMETRY).unwrap();
        let first = fs::read(&dst).unwrap();
        run(&src, &dst, SIDEBAR_GEOMETRY).unwrap();
        let second = fs::read(&dst).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn thin_source_is_degenerate_crop() {
        let source = RgbaImage::from_pixel(1000, 1, RED);

        let result = build(&DynamicImage::ImageRgba8(source), SIDEBAR_GEOMETRY);

        assert!(matches!(
            result,
            Err(AssetError::DegenerateCrop {
                width: 1000,
                height: 1
            })
        ));
    }

    #[test]
    fn zero_geometry_is_rejected() {
        let source = RgbaImage::from_pixel(10, 10, RED);
        let geometry = SidebarGeometry { width: 0, height: 314 };

        let result = build(&DynamicImage::ImageRgba8(source), geometry);

        assert!(matches!(result, Err(AssetError::InvalidSize { .. })));
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let dst = dir.path().join("sidebar.bmp");

        let result = run(&dir.path().join("missing.png"), &dst, SIDEBAR_GEOMETRY);

        assert!(matches!(result, Err(AssetError::Load { .. })));
        assert!(!dst.exists());
    }
}
