pub mod state;
pub mod navigation;
pub mod preloading;

pub use state::*;
