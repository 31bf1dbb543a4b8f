pub mod cache;
pub mod loader;
pub mod metadata;

pub use cache::{CachedImage, ImageCache};
pub use loader::{LoadError, LoadedImage, load_image, load_thumbnail};
pub use metadata::{ImageMetadata, read_metadata};
