pub mod nav;
pub mod search;

pub use nav::{EXTENSIONS, NavState, get_image_dir, is_supported_image, scan_dir};
pub use search::SearchState;
