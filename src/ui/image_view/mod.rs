mod input_handling;
pub mod single_view;
