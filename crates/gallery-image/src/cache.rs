//! Image caching

use cosmic::widget::image::Handle;
use lru::LruCache;
use std::{
    collections::HashSet,
    num::NonZeroUsize,
    path::PathBuf,
    sync::{Arc, Mutex},
};

/// Cached full-resolution image with its natural dimensions
#[derive(Clone)]
pub struct CachedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for CachedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Thread-safe image cache with LRU eviction
#[derive(Clone)]
pub struct ImageCache {
    full_images: Arc<Mutex<LruCache<PathBuf, CachedImage>>>,
    thumbnails: Arc<Mutex<LruCache<PathBuf, Handle>>>,
    pending: Arc<Mutex<HashSet<PathBuf>>>,
    pending_thumbnails: Arc<Mutex<HashSet<PathBuf>>>,
}

impl ImageCache {
    /// Create a new cache with the given capacities
    pub fn new(full_capacity: usize, thumbnail_capacity: usize) -> Self {
        Self {
            full_images: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(full_capacity.max(1)).unwrap(),
            ))),
            thumbnails: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(thumbnail_capacity.max(1)).unwrap(),
            ))),
            pending: Arc::new(Mutex::new(HashSet::new())),
            pending_thumbnails: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Create with default capacities
    pub fn with_defaults() -> Self {
        Self::new(20, 200)
    }

    /// Change the full-image capacity, evicting as needed
    pub fn resize(&self, new_capacity: usize) {
        if let Ok(mut cache) = self.full_images.lock() {
            cache.resize(NonZeroUsize::new(new_capacity.max(1)).unwrap());
        }
    }

    pub fn get_full(&self, path: &PathBuf) -> Option<CachedImage> {
        self.full_images.lock().ok()?.get(path).cloned()
    }

    pub fn insert_full(&self, path: PathBuf, image: CachedImage) {
        if let Ok(mut cache) = self.full_images.lock() {
            cache.put(path.clone(), image);
        }

        self.clear_pending(&path);
    }

    pub fn get_thumbnail(&self, path: &PathBuf) -> Option<Handle> {
        self.thumbnails.lock().ok()?.get(path).cloned()
    }

    pub fn insert_thumbnail(&self, path: PathBuf, handle: Handle) {
        if let Ok(mut cache) = self.thumbnails.lock() {
            cache.put(path.clone(), handle);
        }

        self.clear_pending_thumbnail(&path);
    }

    /// Drop both cache entries for a path, e.g. after deletion
    pub fn remove(&self, path: &PathBuf) {
        if let Ok(mut cache) = self.full_images.lock() {
            cache.pop(path);
        }

        if let Ok(mut cache) = self.thumbnails.lock() {
            cache.pop(path);
        }

        self.clear_pending(path);
        self.clear_pending_thumbnail(path);
    }

    pub fn is_pending(&self, path: &PathBuf) -> bool {
        self.pending
            .lock()
            .map(|set| set.contains(path))
            .unwrap_or(false)
    }

    pub fn set_pending(&self, path: PathBuf) {
        if let Ok(mut set) = self.pending.lock() {
            set.insert(path);
        }
    }

    pub fn clear_pending(&self, path: &PathBuf) {
        if let Ok(mut set) = self.pending.lock() {
            set.remove(path);
        }
    }

    pub fn is_thumbnail_pending(&self, path: &PathBuf) -> bool {
        self.pending_thumbnails
            .lock()
            .map(|set| set.contains(path))
            .unwrap_or(false)
    }

    pub fn set_thumbnail_pending(&self, path: PathBuf) {
        if let Ok(mut set) = self.pending_thumbnails.lock() {
            set.insert(path);
        }
    }

    pub fn clear_pending_thumbnail(&self, path: &PathBuf) {
        if let Ok(mut set) = self.pending_thumbnails.lock() {
            set.remove(path);
        }
    }

    /// Clear thumbnails only, e.g. when the thumbnail size changes
    pub fn clear_thumbnails(&self) {
        if let Ok(mut cache) = self.thumbnails.lock() {
            cache.clear();
        }

        if let Ok(mut set) = self.pending_thumbnails.lock() {
            set.clear();
        }
    }

    /// Clear all caches
    pub fn clear(&self) {
        if let Ok(mut cache) = self.full_images.lock() {
            cache.clear();
        }

        if let Ok(mut cache) = self.thumbnails.lock() {
            cache.clear();
        }

        if let Ok(mut set) = self.pending.lock() {
            set.clear();
        }

        if let Ok(mut set) = self.pending_thumbnails.lock() {
            set.clear();
        }
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn cached() -> CachedImage {
        CachedImage {
            handle: handle(),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn insert_and_retrieve_full_image() {
        let cache = ImageCache::with_defaults();
        let path = PathBuf::from("a.png");

        assert!(cache.get_full(&path).is_none());

        cache.insert_full(path.clone(), cached());
        let stored = cache.get_full(&path).expect("cached image");
        assert_eq!((stored.width, stored.height), (1, 1));
    }

    #[test]
    fn insert_clears_pending_marker() {
        let cache = ImageCache::with_defaults();
        let path = PathBuf::from("a.png");

        cache.set_pending(path.clone());
        assert!(cache.is_pending(&path));

        cache.insert_full(path.clone(), cached());
        assert!(!cache.is_pending(&path));
    }

    #[test]
    fn thumbnail_pending_is_tracked_separately() {
        let cache = ImageCache::with_defaults();
        let path = PathBuf::from("a.png");

        cache.set_thumbnail_pending(path.clone());
        assert!(cache.is_thumbnail_pending(&path));
        assert!(!cache.is_pending(&path));

        cache.insert_thumbnail(path.clone(), handle());
        assert!(!cache.is_thumbnail_pending(&path));
        assert!(cache.get_thumbnail(&path).is_some());
    }

    #[test]
    fn full_cache_evicts_least_recently_used() {
        let cache = ImageCache::new(2, 2);

        cache.insert_full(PathBuf::from("a.png"), cached());
        cache.insert_full(PathBuf::from("b.png"), cached());
        cache.insert_full(PathBuf::from("c.png"), cached());

        assert!(cache.get_full(&PathBuf::from("a.png")).is_none());
        assert!(cache.get_full(&PathBuf::from("b.png")).is_some());
        assert!(cache.get_full(&PathBuf::from("c.png")).is_some());
    }

    #[test]
    fn remove_drops_both_entries() {
        let cache = ImageCache::with_defaults();
        let path = PathBuf::from("a.png");

        cache.insert_full(path.clone(), cached());
        cache.insert_thumbnail(path.clone(), handle());
        cache.remove(&path);

        assert!(cache.get_full(&path).is_none());
        assert!(cache.get_thumbnail(&path).is_none());
    }

    #[test]
    fn clear_thumbnails_keeps_full_images() {
        let cache = ImageCache::with_defaults();
        let path = PathBuf::from("a.png");

        cache.insert_full(path.clone(), cached());
        cache.insert_thumbnail(path.clone(), handle());
        cache.clear_thumbnails();

        assert!(cache.get_thumbnail(&path).is_none());
        assert!(cache.get_full(&path).is_some());
    }
}
