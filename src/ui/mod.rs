mod image_view;
pub mod main;
mod menu_overlay;
