// Submodules for main UI functionality
pub mod main_ui;
pub mod message_processing;
pub mod keyboard_input;
pub mod theme;
