use std::path::{Path, PathBuf};

/// Path of the PNG written next to an icon: the icon path with its last
/// extension replaced by `png`.
pub fn png_sibling(icon_path: &Path) -> PathBuf {
    icon_path.with_extension("png")
}
