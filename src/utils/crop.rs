//! Centered aspect-ratio crop arithmetic.
//!
//! Ratios are compared by cross-multiplication in 64-bit integers, so an
//! image that already has the target ratio is kept whole.

/// Region of the source image kept by a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Largest region of a `width` x `height` image with the ratio
/// `target_width / target_height`, centered on the trimmed axis.
///
/// Wider images lose columns, taller (or equal) images lose rows. Sizes
/// are floored, so the kept region can be empty for very thin sources;
/// callers must check for that. `target_width` must be non-zero.
pub fn centered_crop(width: u32, height: u32, target_width: u32, target_height: u32) -> CropRect {
    let (w, h) = (u64::from(width), u64::from(height));
    let (tw, th) = (u64::from(target_width), u64::from(target_height));

    if w * th > h * tw {
        // new_width <= width since h * tw < w * th
        let new_width = (h * tw / th) as u32;
        CropRect {
            x: (width - new_width) / 2,
            y: 0,
            width: new_width,
            height,
        }
    } else {
        let new_height = (w * th / tw) as u32;
        CropRect {
            x: 0,
            y: (height - new_height) / 2,
            width,
            height: new_height,
        }
    }
}
