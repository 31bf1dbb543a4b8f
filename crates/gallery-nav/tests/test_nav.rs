use std::fs;
use std::path::PathBuf;

use gallery_config::{SortMode, SortOrder};
use gallery_nav::{NavState, scan_dir};

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn select_sets_single_active_image() {
    let mut nav = NavState::new();
    nav.set_images(paths(&["a.png", "b.png", "c.png"]), None);

    assert!(!nav.is_selected());

    let selected = nav.select(1).cloned();
    assert_eq!(selected, Some(PathBuf::from("b.png")));
    assert_eq!(nav.index(), Some(1));
    assert_eq!(nav.current(), Some(&PathBuf::from("b.png")));

    // Selecting another image replaces the previous selection
    nav.select(2);
    assert_eq!(nav.index(), Some(2));

    nav.deselect();
    assert!(nav.current().is_none());
}

#[test]
fn select_out_of_range_changes_nothing() {
    let mut nav = NavState::new();
    nav.set_images(paths(&["a.png"]), None);

    assert!(nav.select(5).is_none());
    assert!(!nav.is_selected());
}

#[test]
fn operations_on_empty_list_are_noops() {
    let mut nav = NavState::new();

    assert!(nav.select(0).is_none());
    assert!(nav.go_next().is_none());
    assert!(nav.go_prev().is_none());
    assert!(nav.first().is_none());
    assert!(nav.last().is_none());
    assert!(nav.current().is_none());
    assert_eq!(nav.total(), 0);
}

#[test]
fn navigation_wraps_around() {
    let mut nav = NavState::new();
    nav.set_images(paths(&["a.png", "b.png", "c.png"]), None);

    nav.select(2);
    assert_eq!(nav.go_next(), Some(&PathBuf::from("a.png")));
    assert_eq!(nav.go_prev(), Some(&PathBuf::from("c.png")));

    nav.first();
    assert_eq!(nav.index(), Some(0));
    nav.last();
    assert_eq!(nav.index(), Some(2));
}

#[test]
fn set_images_selects_requested_path() {
    let mut nav = NavState::new();
    let images = paths(&["a.png", "b.png", "c.png"]);

    nav.set_images(images.clone(), Some(&images[1]));
    assert_eq!(nav.index(), Some(1));

    // Unknown target leaves the selection cleared
    nav.set_images(images, Some(&PathBuf::from("missing.png")));
    assert!(!nav.is_selected());
}

#[test]
fn filter_narrows_visible_images() {
    let mut nav = NavState::new();
    nav.set_images(paths(&["sunset.png", "Beach.jpg", "beach_house.png"]), None);

    nav.set_filter(Some("beach"));
    assert_eq!(nav.total(), 2);
    assert_eq!(nav.total_scanned(), 3);
    assert_eq!(
        nav.visible_images(),
        paths(&["Beach.jpg", "beach_house.png"])
    );

    nav.set_filter(None);
    assert_eq!(nav.total(), 3);
}

#[test]
fn filter_is_case_insensitive() {
    let mut nav = NavState::new();
    nav.set_images(paths(&["IMG_0001.png", "holiday.jpg"]), None);

    nav.set_filter(Some("img"));
    assert_eq!(nav.visible_images(), paths(&["IMG_0001.png"]));
}

#[test]
fn filter_keeps_selection_when_still_visible() {
    let mut nav = NavState::new();
    nav.set_images(paths(&["beach.png", "sunset.png", "beach2.png"]), None);

    nav.select(2);
    nav.set_filter(Some("beach"));

    // beach2.png is now at visible index 1
    assert_eq!(nav.index(), Some(1));
    assert_eq!(nav.current(), Some(&PathBuf::from("beach2.png")));
}

#[test]
fn filter_drops_selection_when_hidden() {
    let mut nav = NavState::new();
    nav.set_images(paths(&["beach.png", "sunset.png"]), None);

    nav.select(1);
    nav.set_filter(Some("beach"));
    assert!(!nav.is_selected());
}

#[test]
fn navigation_stays_within_filtered_list() {
    let mut nav = NavState::new();
    nav.set_images(paths(&["a_cat.png", "b_dog.png", "c_cat.png"]), None);

    nav.set_filter(Some("cat"));
    nav.first();
    assert_eq!(nav.current(), Some(&PathBuf::from("a_cat.png")));
    assert_eq!(nav.go_next(), Some(&PathBuf::from("c_cat.png")));
    assert_eq!(nav.go_next(), Some(&PathBuf::from("a_cat.png")));
}

#[tokio::test]
async fn scan_finds_only_supported_images() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("one.png"), b"fake").unwrap();
    fs::write(dir.path().join("two.jpg"), b"fake").unwrap();
    fs::write(dir.path().join("notes.txt"), b"fake").unwrap();
    fs::write(dir.path().join(".hidden.png"), b"fake").unwrap();

    let images = scan_dir(dir.path(), false, SortMode::Name, SortOrder::Ascending).await;
    let names: Vec<_> = images
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .collect();

    assert_eq!(names, ["one.png", "two.jpg"]);
}

#[tokio::test]
async fn scan_can_include_hidden_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("one.png"), b"fake").unwrap();
    fs::write(dir.path().join(".hidden.png"), b"fake").unwrap();

    let images = scan_dir(dir.path(), true, SortMode::Name, SortOrder::Ascending).await;
    assert_eq!(images.len(), 2);
}

#[tokio::test]
async fn scan_sorts_by_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("big.png"), vec![0u8; 512]).unwrap();
    fs::write(dir.path().join("small.png"), vec![0u8; 16]).unwrap();

    let images = scan_dir(dir.path(), false, SortMode::Size, SortOrder::Ascending).await;
    let names: Vec<_> = images
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .collect();
    assert_eq!(names, ["small.png", "big.png"]);

    let images = scan_dir(dir.path(), false, SortMode::Size, SortOrder::Descending).await;
    let names: Vec<_> = images
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .collect();
    assert_eq!(names, ["big.png", "small.png"]);
}

#[tokio::test]
async fn scan_of_missing_dir_is_empty() {
    let images = scan_dir(
        std::path::Path::new("/nonexistent/rotunda-test"),
        false,
        SortMode::Name,
        SortOrder::Ascending,
    )
    .await;

    assert!(images.is_empty());
}
