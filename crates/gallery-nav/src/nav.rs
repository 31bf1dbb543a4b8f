//! Navigation state and directory scanning

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use gallery_config::{SortMode, SortOrder};
use tokio::task::spawn_blocking;

/// Supported image file extensions
pub const EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "ico", "avif",
];

/// Tracks the scanned image list, the applied name filter and the active
/// selection.
///
/// Selection indices always refer to the visible (filtered) list; at most one
/// image is selected at a time.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    images: Vec<PathBuf>,
    visible: Vec<usize>,
    cur: Option<usize>,
    filter: Option<String>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current image path, if any
    pub fn current(&self) -> Option<&PathBuf> {
        self.cur
            .and_then(|idx| self.visible.get(idx))
            .and_then(|&img_idx| self.images.get(img_idx))
    }

    /// Index of the active image within the visible list
    pub fn index(&self) -> Option<usize> {
        self.cur
    }

    /// Check if an image is selected, causing the modal to be open
    pub fn is_selected(&self) -> bool {
        self.cur.is_some()
    }

    /// Number of visible images
    pub fn total(&self) -> usize {
        self.visible.len()
    }

    /// Number of scanned images, ignoring the filter
    pub fn total_scanned(&self) -> usize {
        self.images.len()
    }

    /// Check if nav is empty (no visible images)
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Visible image paths, in display order
    pub fn visible_images(&self) -> Vec<PathBuf> {
        self.visible
            .iter()
            .filter_map(|&idx| self.images.get(idx).cloned())
            .collect()
    }

    /// Visible path at a given index
    pub fn path_at(&self, idx: usize) -> Option<&PathBuf> {
        self.visible
            .get(idx)
            .and_then(|&img_idx| self.images.get(img_idx))
    }

    /// Set the image list, optionally selecting a specific path
    pub fn set_images(&mut self, images: Vec<PathBuf>, select: Option<&Path>) {
        self.images = images;
        self.rebuild_visible();
        self.cur = select.and_then(|path| self.position_of(path));
    }

    /// Apply or clear the name filter, keeping the selection when its image
    /// is still visible.
    pub fn set_filter(&mut self, query: Option<&str>) {
        let selected_path = self.current().cloned();
        self.filter = query
            .map(str::to_lowercase)
            .filter(|query| !query.is_empty());
        self.rebuild_visible();
        self.cur = selected_path
            .as_deref()
            .and_then(|path| self.position_of(path));
    }

    /// The applied filter query, if any
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Select an image by visible index
    pub fn select(&mut self, idx: usize) -> Option<&PathBuf> {
        if idx < self.visible.len() {
            self.cur = Some(idx);
            self.current()
        } else {
            None
        }
    }

    /// Deselect the active image
    pub fn deselect(&mut self) {
        self.cur = None;
    }

    /// Nav to the next image, wrapping around
    pub fn go_next(&mut self) -> Option<&PathBuf> {
        if self.visible.is_empty() {
            return None;
        }

        let current = self.cur.unwrap_or_default();
        self.cur = Some((current + 1) % self.visible.len());
        self.current()
    }

    /// Nav to the previous image, wrapping around
    pub fn go_prev(&mut self) -> Option<&PathBuf> {
        if self.visible.is_empty() {
            return None;
        }

        let current = self.cur.unwrap_or_default();
        self.cur = Some(if current == 0 {
            self.visible.len() - 1
        } else {
            current - 1
        });

        self.current()
    }

    /// Jump to the first image
    pub fn first(&mut self) -> Option<&PathBuf> {
        if self.visible.is_empty() {
            return None;
        }

        self.cur = Some(0);
        self.current()
    }

    /// Jump to the last image
    pub fn last(&mut self) -> Option<&PathBuf> {
        if self.visible.is_empty() {
            return None;
        }

        self.cur = Some(self.visible.len() - 1);
        self.current()
    }

    fn rebuild_visible(&mut self) {
        self.visible = self
            .images
            .iter()
            .enumerate()
            .filter(|(_, path)| self.matches_filter(path))
            .map(|(idx, _)| idx)
            .collect();
    }

    fn matches_filter(&self, path: &Path) -> bool {
        let Some(query) = self.filter.as_deref() else {
            return true;
        };

        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.to_lowercase().contains(query))
            .unwrap_or(false)
    }

    fn position_of(&self, path: &Path) -> Option<usize> {
        self.visible
            .iter()
            .position(|&idx| self.images.get(idx).map(PathBuf::as_path) == Some(path))
    }
}

/// Get the dir containing an image file
pub fn get_image_dir(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        path.parent().map(|par| par.to_path_buf())
    } else if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        None
    }
}

/// Async scan a dir for image files
pub async fn scan_dir(
    dir: &Path,
    include_hidden: bool,
    sort_mode: SortMode,
    sort_order: SortOrder,
) -> Vec<PathBuf> {
    let dir = dir.to_path_buf();

    spawn_blocking(move || scan_dir_sync(&dir, include_hidden, sort_mode, sort_order))
        .await
        .unwrap_or_default()
}

fn scan_dir_sync(
    dir: &Path,
    include_hidden: bool,
    sort_mode: SortMode,
    sort_order: SortOrder,
) -> Vec<PathBuf> {
    let mut images: Vec<PathBuf> = fs::read_dir(dir)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            if !include_hidden
                && let Some(name) = path.file_name().and_then(|name| name.to_str())
                && name.starts_with('.')
            {
                return false;
            }
            is_supported_image(path)
        })
        .collect();

    sort_images(&mut images, sort_mode, sort_order);

    images
}

/// Check if a path is a supported image format
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Sort an image list by the configured mode and order
pub fn sort_images(images: &mut [PathBuf], sort_mode: SortMode, sort_order: SortOrder) {
    images.sort_by(|a, b| {
        let ordering = match sort_mode {
            SortMode::Name => {
                let a_name = a.file_name().and_then(|name| name.to_str()).unwrap_or("");
                let b_name = b.file_name().and_then(|name| name.to_str()).unwrap_or("");
                human_sort(a_name, b_name)
            }
            SortMode::Date => modified_time(a).cmp(&modified_time(b)),
            SortMode::Size => file_size(a).cmp(&file_size(b)),
        };

        match sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn modified_time(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

/// Human-friendly sorting that handles numbers properly
fn human_sort(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek(), b_chars.peek()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) => {
                if ac.is_ascii_digit() && bc.is_ascii_digit() {
                    let a_val = take_number(&mut a_chars);
                    let b_val = take_number(&mut b_chars);

                    match a_val.cmp(&b_val) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                } else {
                    let ac = a_chars.next().unwrap().to_lowercase().next().unwrap();
                    let bc = b_chars.next().unwrap().to_lowercase().next().unwrap();

                    match ac.cmp(&bc) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                }
            }
        }
    }
}

/// Consume a run of digits and parse it, saturating on overflow
fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u64 {
    let mut value: u64 = 0;

    while let Some(c) = chars.peek().copied() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        chars.next();
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_sort_orders_numbers_naturally() {
        let mut names = ["img12.png", "img2.png", "img1.png"];
        names.sort_by(|a, b| human_sort(a, b));
        assert_eq!(names, ["img1.png", "img2.png", "img12.png"]);
    }

    #[test]
    fn human_sort_is_case_insensitive() {
        assert_eq!(human_sort("Apple.png", "apple.png"), Ordering::Equal);
        assert_eq!(human_sort("Apple.png", "banana.png"), Ordering::Less);
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
