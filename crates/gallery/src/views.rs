pub mod gallery;
pub mod zoom;

pub use gallery::GalleryView;
pub use zoom::ZoomState;
