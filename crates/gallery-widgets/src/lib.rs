pub mod grid;

pub use grid::{ImageGrid, image_grid};
