pub mod icon_convert;
pub mod sidebar;
