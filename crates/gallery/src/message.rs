use cosmic::widget::image::Handle;
use gallery_config::{AppTheme, SortMode, SortOrder, ThumbnailSize};
use std::path::PathBuf;

pub use crate::key_binds::MenuAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPage {
    About,
    Settings,
    ImageInfo,
}

#[derive(Debug, Clone)]
pub enum Message {
    Image(ImageMessage),
    Nav(NavMessage),
    View(ViewMessage),
    Search(SearchMessage),
    Settings(SettingsMessage),
    KeyBind(MenuAction),
    ToggleContextPage(ContextPage),
    OpenFileDialog,
    OpenFolderDialog,
    Cancelled,
    FilesSelected(Vec<PathBuf>),
    OpenPath(PathBuf),
    WatcherEvent(crate::watcher::WatcherEvent),
    RequestDelete,
    ConfirmDelete(PathBuf),
    CloseDeleteDialog,
    DeleteResult(Result<(), String>),
    Quit,
    Surface(cosmic::surface::Action),
}

#[derive(Debug, Clone)]
pub enum ImageMessage {
    Loaded {
        path: PathBuf,
        handle: Handle,
        width: u32,
        height: u32,
    },
    LoadFailed {
        path: PathBuf,
        error: String,
    },
    ThumbnailReady {
        path: PathBuf,
        handle: Handle,
    },
}

#[derive(Debug, Clone)]
pub enum NavMessage {
    Next,
    Prev,
    First,
    Last,
    Select(usize),
    DirectoryScanned {
        images: Vec<PathBuf>,
        target: PathBuf,
    },
    DirectoryRefreshed {
        images: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleFullscreen,
    CloseModal,
    FocusUp,
    FocusDown,
    SelectFocused,
    ColumnsChanged(usize),
}

#[derive(Debug, Clone)]
pub enum SearchMessage {
    InputChanged(String),
    Submitted(String),
    Cleared,
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    AppTheme(AppTheme),
    ThumbnailSize(ThumbnailSize),
    SortMode(SortMode),
    SortOrder(SortOrder),
    ShowHiddenFiles(bool),
    RememberLastDir(bool),
    CacheSize(usize),
}
