//! Main app state

use crate::{
    fl,
    key_binds::{self, MenuAction},
    message::{
        ContextPage, ImageMessage, Message, NavMessage, SearchMessage, SettingsMessage,
        ViewMessage,
    },
    views::{GalleryView, ZoomState},
    watcher,
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    app::context_drawer,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::{
        Length,
        keyboard::{Key, Modifiers},
        window,
    },
    iced_widget::toggler,
    task::future,
    widget::{
        Id, button, column, container, dropdown,
        menu::key_bind::{KeyBind, Modifier},
        mouse_area, radio, search_input, settings, spin_button, text,
    },
};
use gallery_config::{AppTheme, GalleryConfig, SortMode, SortOrder, ThumbnailSize};
use gallery_image::{CachedImage, ImageCache, ImageMetadata};
use gallery_nav::{EXTENSIONS, NavState, SearchState};
use rfd::AsyncFileDialog;
use std::{collections::HashMap, path::PathBuf};

/// Main app state
pub struct ImageGallery {
    core: Core,
    config: GalleryConfig,
    config_handler: Option<Config>,
    key_binds: HashMap<KeyBind, MenuAction>,
    nav: NavState,
    search: SearchState,
    cache: ImageCache,
    zoom: ZoomState,
    gallery: GalleryView,
    context_page: Option<ContextPage>,
    image_info: Option<ImageMetadata>,
    is_loading: bool,
    is_fullscreen: bool,
    /// Path awaiting trash confirmation
    delete_dialog: Option<PathBuf>,
}

impl ImageGallery {
    pub const APP_ID: &'static str = "org.codeberg.bhh32.Rotunda";

    /// Load an image async
    fn load_image(&mut self, path: PathBuf) -> Task<Action<Message>> {
        if self.cache.get_full(&path).is_some() || self.cache.is_pending(&path) {
            return Task::none();
        }

        self.cache.set_pending(path.clone());
        self.is_loading = true;

        cosmic::task::future(async move {
            match gallery_image::load_image(path.clone()).await {
                Ok(img) => Message::Image(ImageMessage::Loaded {
                    path,
                    handle: img.handle,
                    width: img.width,
                    height: img.height,
                }),
                Err(e) => Message::Image(ImageMessage::LoadFailed {
                    path,
                    error: e.to_string(),
                }),
            }
        })
    }

    /// Load the current image in nav
    fn load_current_image(&mut self) -> Task<Action<Message>> {
        if let Some(path) = self.nav.current().cloned() {
            self.load_image(path)
        } else {
            Task::none()
        }
    }

    /// Count how many visible thumbnails still need to be loaded
    fn thumbnails_remaining(&self) -> usize {
        self.nav
            .visible_images()
            .iter()
            .filter(|path| {
                self.cache.get_thumbnail(path).is_none() && !self.cache.is_thumbnail_pending(path)
            })
            .count()
    }

    /// Load thumbnails for the gallery (chunked to avoid overwhelming the system)
    fn load_thumbnails(&mut self) -> Task<Action<Message>> {
        let thumbnail_size = self.config.thumbnail_size.pixels();
        let mut tasks = Vec::new();

        const BATCH_SIZE: usize = 100;

        for path in self.nav.visible_images() {
            // Skip if already cached or already loading
            if self.cache.get_thumbnail(&path).is_some() || self.cache.is_thumbnail_pending(&path) {
                continue;
            }

            if tasks.len() >= BATCH_SIZE {
                break;
            }

            // Mark as pending before spawning the task
            self.cache.set_thumbnail_pending(path.clone());

            tasks.push(cosmic::task::future(async move {
                match gallery_image::load_thumbnail(path.clone(), thumbnail_size).await {
                    Ok(img) => Message::Image(ImageMessage::ThumbnailReady {
                        path,
                        handle: img.handle,
                    }),
                    Err(e) => {
                        tracing::warn!("Thumbnail failed to load: {e}");
                        Message::Image(ImageMessage::LoadFailed {
                            path,
                            error: e.to_string(),
                        })
                    }
                }
            }));
        }

        Task::batch(tasks)
    }

    /// Scan a directory and navigate to the requested image
    fn scan_and_nav(&mut self, path: PathBuf) -> Task<Action<Message>> {
        let dir = gallery_nav::get_image_dir(&path);
        let include_hidden = self.config.show_hidden_files;
        let sort_mode = self.config.sort_mode;
        let sort_order = self.config.sort_order;
        let target = path.clone();

        cosmic::task::future(async move {
            let images = if let Some(dir) = dir {
                gallery_nav::scan_dir(&dir, include_hidden, sort_mode, sort_order).await
            } else {
                Vec::new()
            };

            Message::Nav(NavMessage::DirectoryScanned { images, target })
        })
    }

    /// Reload the image list from the current directory
    fn reload_image_list(&mut self) -> Task<Action<Message>> {
        let include_hidden = self.config.show_hidden_files;
        let sort_mode = self.config.sort_mode;
        let sort_order = self.config.sort_order;

        // If an image is selected, use its parent directory
        let dir_option: Option<PathBuf> = if let Some(current) = self.nav.current() {
            gallery_nav::get_image_dir(current)
        } else if let Some(dir_str) = self.config.last_dir.as_ref() {
            Some(PathBuf::from(dir_str.clone()))
        } else {
            None
        };

        if let Some(dir) = dir_option {
            return cosmic::task::future(async move {
                let images = gallery_nav::scan_dir(&dir, include_hidden, sort_mode, sort_order).await;
                Message::Nav(NavMessage::DirectoryRefreshed { images })
            });
        }

        Task::none()
    }

    /// Update the window title based on the current image
    fn update_title(&mut self) -> Task<Action<Message>> {
        let title = if let Some(path) = self.nav.current()
            && let Some(name) = path.file_name().and_then(|name| name.to_str())
        {
            format!("{} - {}", name, fl!("app-title"))
        } else {
            fl!("app-title")
        };

        if let Some(window_id) = self.core.main_window_id() {
            self.set_window_title(title, window_id)
        } else {
            Task::none()
        }
    }

    /// Re-read EXIF data while the info page is open
    fn refresh_image_info(&mut self) {
        if self.context_page == Some(ContextPage::ImageInfo) {
            self.image_info = self
                .nav
                .current()
                .map(|path| gallery_image::read_metadata(path));
        }
    }
}

impl Application for ImageGallery {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let mut tasks = vec![];

        let (config, config_handler) = match gallery_config::config() {
            Ok(handler) => {
                let config = match GalleryConfig::get_entry(&handler) {
                    Ok(c) => c,
                    Err((_, c)) => c,
                };
                (config, Some(handler))
            }
            Err(_) => (GalleryConfig::default(), None),
        };

        let cache_size = config.cache_size;

        let mut app = Self {
            core,
            config,
            config_handler,
            key_binds: key_binds::init_key_binds(),
            nav: NavState::new(),
            search: SearchState::new(),
            cache: ImageCache::new(cache_size, 200),
            zoom: ZoomState::new(),
            gallery: GalleryView::new(),
            context_page: None,
            image_info: None,
            is_loading: false,
            is_fullscreen: false,
            delete_dialog: None,
        };

        let startup_path = if let Some(path) = flags {
            Some(path)
        } else if app.config.remember_last_dir {
            app.config.last_dir.as_ref().map(PathBuf::from)
        } else {
            None
        };

        let startup_path = startup_path.or_else(dirs::picture_dir);

        // Apply the saved theme on startup
        tasks.push(cosmic::command::set_theme(
            app.config.app_theme.to_cosmic_theme(),
        ));

        tasks.push(app.update_title());
        if let Some(path) = startup_path {
            tasks.push(app.scan_and_nav(path));
        }

        (app, Task::batch(tasks))
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![crate::menu::menu_bar(&self.core, &self.key_binds).into()]
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            search_input(fl!("search-placeholder"), self.search.input())
                .width(Length::Fixed(240.0))
                .on_input(|text| Message::Search(SearchMessage::InputChanged(text)))
                .on_clear(Message::Search(SearchMessage::Cleared))
                .on_submit(|value| Message::Search(SearchMessage::Submitted(value)))
                .into(),
        ]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let gallery = self.gallery.view(
            &self.nav,
            &self.cache,
            self.config.thumbnail_size.pixels(),
            &self.zoom,
            self.is_loading,
        );

        // Overlay the trash confirmation dialog if active
        if let Some(path) = &self.delete_dialog {
            let dialog = self.delete_dialog_view(path);

            let backdrop = mouse_area(
                container(cosmic::widget::Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .class(cosmic::theme::Container::Transparent),
            )
            .on_press(Message::CloseDeleteDialog);

            cosmic::iced_widget::stack![gallery, backdrop, dialog].into()
        } else {
            gallery
        }
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        let mut tasks = Vec::new();

        match message {
            Message::Image(img_msg) => match img_msg {
                ImageMessage::Loaded {
                    path,
                    handle,
                    width,
                    height,
                } => {
                    self.is_loading = false;
                    self.cache.insert_full(
                        path,
                        CachedImage {
                            handle,
                            width,
                            height,
                        },
                    );
                    tasks.push(self.update_title());
                }
                ImageMessage::LoadFailed { path, error } => {
                    self.is_loading = false;
                    self.cache.clear_pending(&path);
                    self.cache.clear_pending_thumbnail(&path);
                    tracing::error!("Failed to load {}: {error}", path.display());
                    // Continue loading more thumbnails if there are more to load
                    if self.thumbnails_remaining() > 0 {
                        tasks.push(self.load_thumbnails());
                    }
                }
                ImageMessage::ThumbnailReady { path, handle } => {
                    self.cache.insert_thumbnail(path, handle);
                    // Continue loading more thumbnails if there are more to load
                    if self.thumbnails_remaining() > 0 {
                        tasks.push(self.load_thumbnails());
                    }
                }
            },
            Message::Nav(nav_msg) => match nav_msg {
                NavMessage::Next => {
                    if self.nav.is_selected() {
                        // Modal open: show the next image, back at 100%
                        self.nav.go_next();
                        self.zoom.reset();
                        self.refresh_image_info();
                        tasks.push(self.load_current_image());
                        tasks.push(self.update_title());
                    } else {
                        // Gallery view: move focus right
                        let total = self.nav.total();
                        if total > 0 {
                            let new_idx = match self.gallery.focused_index {
                                Some(idx) if idx + 1 < total => idx + 1,
                                Some(idx) => idx,
                                None => 0,
                            };

                            self.gallery.focused_index = Some(new_idx);

                            return button::focus(Id::new(format!("thumbnail-{new_idx}")));
                        }
                    }
                }
                NavMessage::Prev => {
                    if self.nav.is_selected() {
                        self.nav.go_prev();
                        self.zoom.reset();
                        self.refresh_image_info();
                        tasks.push(self.load_current_image());
                        tasks.push(self.update_title());
                    } else {
                        // Gallery view: move focus left
                        let total = self.nav.total();
                        if total > 0 {
                            let new_idx = match self.gallery.focused_index {
                                Some(idx) if idx > 0 => idx - 1,
                                Some(idx) => idx,
                                None => 0,
                            };

                            self.gallery.focused_index = Some(new_idx);

                            return button::focus(Id::new(format!("thumbnail-{new_idx}")));
                        }
                    }
                }
                NavMessage::First => {
                    if self.nav.first().is_some() {
                        self.zoom.reset();
                        self.refresh_image_info();
                        tasks.push(self.load_current_image());
                        tasks.push(self.update_title());
                    }
                }
                NavMessage::Last => {
                    if self.nav.last().is_some() {
                        self.zoom.reset();
                        self.refresh_image_info();
                        tasks.push(self.load_current_image());
                        tasks.push(self.update_title());
                    }
                }
                NavMessage::Select(idx) => {
                    // Without images there is nothing to show
                    if self.nav.is_empty() {
                        return Task::none();
                    }

                    if self.nav.select(idx).is_some() {
                        self.gallery.focused_index = Some(idx);
                        self.zoom.reset();
                        self.refresh_image_info();
                        tasks.push(self.load_current_image());
                        tasks.push(self.update_title());
                    }
                }
                NavMessage::DirectoryScanned { images, target } => {
                    // A fresh directory starts with an empty search
                    self.search.clear();
                    self.nav.set_filter(None);
                    self.nav.set_images(images, Some(&target));

                    // Save the last directory if enabled
                    if self.config.remember_last_dir {
                        let dir = if target.is_file() {
                            target.parent().map(|parent| parent.to_path_buf())
                        } else {
                            Some(target.clone())
                        };

                        if let Some(dir) = dir {
                            self.config.last_dir = Some(dir.to_string_lossy().to_string());
                        }
                    }

                    if self.nav.is_selected() {
                        // A specific image file was requested; open it
                        self.zoom.reset();
                        self.gallery.focused_index = self.nav.index();
                    } else if self.nav.total() > 0 {
                        self.gallery.focused_index = Some(0);
                    }

                    tasks.push(self.load_thumbnails());
                    tasks.push(self.load_current_image());
                    tasks.push(self.update_title());
                }
                NavMessage::DirectoryRefreshed { images } => {
                    let was_selected = self.nav.is_selected();
                    let prev_path = self.nav.current().cloned();
                    let prev_idx = self.nav.index().unwrap_or(0);

                    // Update the image list, clearing the selection
                    self.nav.set_images(images.clone(), None);

                    if was_selected {
                        if self.nav.total() > 0 {
                            // Restore the selection to the same image or its
                            // nearest neighbor
                            let new_idx = prev_path
                                .as_ref()
                                .and_then(|path| {
                                    self.nav
                                        .visible_images()
                                        .iter()
                                        .position(|pos| pos == path)
                                });

                            let idx = new_idx.unwrap_or_else(|| {
                                // Image was deleted; clamp to the valid range
                                prev_idx.min(self.nav.total() - 1)
                            });

                            self.nav.select(idx);
                            self.gallery.focused_index = Some(idx);

                            // A different image is now showing
                            if new_idx.is_none() {
                                self.zoom.reset();
                            }

                            self.refresh_image_info();
                            tasks.push(self.load_current_image());
                            tasks.push(self.update_title());
                        }
                        // With no images left the selection stays cleared and
                        // the modal closes.
                    } else {
                        // Background update: refresh thumbnails
                        tasks.push(self.load_thumbnails());
                    }
                }
            },
            Message::View(view_msg) => match view_msg {
                ViewMessage::ZoomIn => {
                    // No image on screen, nothing to scale
                    if self.nav.is_selected() {
                        self.zoom.zoom_in();
                    }
                }
                ViewMessage::ZoomOut => {
                    if self.nav.is_selected() {
                        self.zoom.zoom_out();
                    }
                }
                ViewMessage::ZoomReset => {
                    if self.nav.is_selected() {
                        self.zoom.reset();
                    }
                }
                ViewMessage::ToggleFullscreen => {
                    // Without a window there is nothing to present
                    if let Some(window_id) = self.core.main_window_id() {
                        self.is_fullscreen = !self.is_fullscreen;

                        let mode = if self.is_fullscreen {
                            window::Mode::Fullscreen
                        } else {
                            window::Mode::Windowed
                        };

                        return window::change_mode::<Message>(window_id, mode).map(Action::from);
                    }
                }
                ViewMessage::CloseModal => {
                    self.nav.deselect();
                    self.zoom.reset();
                    self.refresh_image_info();
                    tasks.push(self.update_title());
                }
                ViewMessage::FocusUp => {
                    if self.nav.is_selected() {
                        return Task::none();
                    }

                    let total = self.nav.total();
                    if total == 0 {
                        return Task::none();
                    }

                    let cols = self.gallery.cols;
                    let new_idx = match self.gallery.focused_index {
                        Some(idx) if idx >= cols => idx - cols,
                        Some(idx) => idx, // Already on the top row
                        None => 0,
                    };

                    self.gallery.focused_index = Some(new_idx);

                    return button::focus(Id::new(format!("thumbnail-{new_idx}")));
                }
                ViewMessage::FocusDown => {
                    if self.nav.is_selected() {
                        return Task::none();
                    }

                    let total = self.nav.total();
                    if total == 0 {
                        return Task::none();
                    }

                    let cols = self.gallery.cols;
                    let new_idx = match self.gallery.focused_index {
                        Some(idx) if idx + cols < total => idx + cols,
                        Some(idx) => idx, // Already on the bottom row
                        None => 0,
                    };

                    self.gallery.focused_index = Some(new_idx);

                    return button::focus(Id::new(format!("thumbnail-{new_idx}")));
                }
                ViewMessage::SelectFocused => {
                    if !self.nav.is_selected()
                        && let Some(idx) = self.gallery.focused_index
                    {
                        tasks.push(self.update(Message::Nav(NavMessage::Select(idx))));
                    }
                }
                ViewMessage::ColumnsChanged(cols) => {
                    self.gallery.cols = cols;
                }
            },
            Message::Search(search_msg) => match search_msg {
                SearchMessage::InputChanged(text) => self.search.set_input(text),
                SearchMessage::Submitted(value) => {
                    self.search.set_input(value);
                    // Whitespace-only submissions change nothing
                    if let Some(query) = self.search.submit() {
                        tracing::debug!("Applying gallery filter: {query}");
                        self.nav.set_filter(Some(query.as_str()));
                        self.gallery.focused_index = (self.nav.total() > 0).then_some(0);
                        tasks.push(self.load_thumbnails());
                        tasks.push(self.update_title());
                    }
                }
                SearchMessage::Cleared => {
                    self.search.clear();
                    self.nav.set_filter(None);
                    tasks.push(self.load_thumbnails());
                }
            },
            Message::Settings(msg) => {
                match msg {
                    SettingsMessage::AppTheme(theme) => {
                        self.config.app_theme = theme;
                        if let Some(ref handler) = self.config_handler {
                            let _ = self.config.write_entry(handler);
                        }
                        return cosmic::command::set_theme(theme.to_cosmic_theme());
                    }
                    SettingsMessage::ThumbnailSize(size) => {
                        self.config.thumbnail_size = size;
                        // Regenerate thumbnails at the new size
                        self.cache.clear_thumbnails();
                        tasks.push(self.load_thumbnails());
                    }
                    SettingsMessage::SortMode(mode) => {
                        self.config.sort_mode = mode;
                        tasks.push(self.reload_image_list());
                    }
                    SettingsMessage::SortOrder(order) => {
                        self.config.sort_order = order;
                        tasks.push(self.reload_image_list());
                    }
                    SettingsMessage::ShowHiddenFiles(show) => {
                        self.config.show_hidden_files = show;
                        tasks.push(self.reload_image_list());
                    }
                    SettingsMessage::RememberLastDir(remem) => {
                        self.config.remember_last_dir = remem;
                    }
                    SettingsMessage::CacheSize(size) => {
                        self.config.cache_size = size;
                        self.cache.resize(size);
                    }
                }

                // Save config changes
                if let Some(ref handler) = self.config_handler {
                    let _ = self.config.write_entry(handler);
                }
            }
            Message::KeyBind(action) => tasks.push(self.update(action.message())),
            Message::Surface(action) => {
                return cosmic::task::message(Action::Cosmic(cosmic::app::Action::Surface(action)));
            }
            Message::ToggleContextPage(page) => {
                if self.context_page == Some(page) {
                    self.context_page = None;
                } else {
                    self.context_page = Some(page);

                    if page == ContextPage::ImageInfo {
                        self.image_info = self
                            .nav
                            .current()
                            .map(|path| gallery_image::read_metadata(path));
                    }
                }
            }
            Message::OpenFileDialog => {
                return future(async {
                    let mut dialog = AsyncFileDialog::new()
                        .set_title(fl!("menu-open"))
                        .add_filter("All", &["*"]);

                    for ext in EXTENSIONS {
                        dialog = dialog.add_filter(format!("*.{ext}"), &[*ext]);
                    }

                    match dialog.pick_file().await {
                        Some(handle) => {
                            let path = handle.path().to_path_buf();
                            Message::FilesSelected(vec![path])
                        }
                        None => Message::Cancelled,
                    }
                });
            }
            Message::OpenFolderDialog => {
                return future(async {
                    let dialog = AsyncFileDialog::new().set_title(fl!("menu-open-folder"));

                    match dialog.pick_folder().await {
                        Some(handle) => {
                            let dir = handle.path().to_path_buf();
                            Message::OpenPath(dir)
                        }
                        None => Message::Cancelled,
                    }
                });
            }
            Message::Cancelled => {}
            Message::FilesSelected(paths) => {
                if let Some(path) = paths.first() {
                    tasks.push(self.scan_and_nav(path.clone()));
                }
            }
            Message::OpenPath(path) => tasks.push(self.scan_and_nav(path)),
            Message::WatcherEvent(evt) => {
                tracing::debug!("Watcher event: {evt:?}");
                match evt {
                    watcher::WatcherEvent::Created(_) => {
                        tasks.push(self.reload_image_list());
                    }
                    watcher::WatcherEvent::Modified(path) => {
                        // On some systems external deletion reports as Modified
                        if !path.exists() {
                            self.cache.remove(&path);
                            if self.nav.current() == Some(&path) {
                                self.nav.deselect();
                            }

                            tasks.push(self.reload_image_list());
                        }
                    }
                    watcher::WatcherEvent::Removed(path) => {
                        self.cache.remove(&path);
                        // If the deleted image is the one in the modal,
                        // deselect it so the reload falls back to last_dir
                        if self.nav.current() == Some(&path) {
                            self.nav.deselect();
                        }

                        tasks.push(self.reload_image_list());
                    }
                    watcher::WatcherEvent::Error(err) => tracing::warn!("Watcher error: {err}"),
                }
            }
            Message::RequestDelete => {
                if let Some(path) = self.nav.current().cloned() {
                    self.delete_dialog = Some(path);
                }
            }
            Message::ConfirmDelete(path) => {
                self.delete_dialog = None;
                self.cache.remove(&path);

                return future(async move {
                    let result = tokio::task::spawn_blocking(move || trash::delete(&path))
                        .await
                        .map_err(|e| e.to_string())
                        .and_then(|res| res.map_err(|e| e.to_string()));

                    Message::DeleteResult(result)
                });
            }
            Message::CloseDeleteDialog => {
                self.delete_dialog = None;
            }
            Message::DeleteResult(result) => match result {
                Ok(()) => tasks.push(self.reload_image_list()),
                Err(err) => tracing::error!("Failed to move image to trash: {err}"),
            },
            Message::Quit => {
                std::process::exit(0);
            }
        }

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        let page = self.context_page?;
        let content = match page {
            ContextPage::About => self.about_page(),
            ContextPage::Settings => self.settings_page(),
            ContextPage::ImageInfo => self.image_info_page(),
        };

        Some(context_drawer::context_drawer(
            content,
            Message::ToggleContextPage(page),
        ))
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        // Watch the open directory for external changes
        let watcher_sub =
            watcher::watch_directory(self.config.last_dir.as_ref().map(PathBuf::from))
                .map(Message::WatcherEvent);

        cosmic::iced::Subscription::batch([
            cosmic::iced::keyboard::on_key_press(key_press_handler),
            watcher_sub,
        ])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        if let Some(ref handler) = self.config_handler {
            let _ = self.config.write_entry(handler);
        }

        None
    }
}

impl ImageGallery {
    fn about_page(&self) -> Element<'_, Message> {
        column()
            .push(text::title3(fl!("app-title")))
            .push(text::body(fl!("app-description")))
            .push(text::caption(format!(
                "Version {}",
                env!("CARGO_PKG_VERSION")
            )))
            .spacing(cosmic::theme::active().cosmic().spacing.space_s)
            .into()
    }

    fn delete_dialog_view(&self, path: &PathBuf) -> Element<'_, Message> {
        let spacing = cosmic::theme::active().cosmic().spacing;

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        let confirm_btn = button::destructive(fl!("delete-confirm"))
            .on_press(Message::ConfirmDelete(path.clone()));

        let cancel_btn = button::text(fl!("delete-cancel")).on_press(Message::CloseDeleteDialog);

        let content = column()
            .push(text::title4(fl!("delete-dialog-title")))
            .push(text::body(fl!("delete-dialog-body", name = name)))
            .push(
                cosmic::widget::row()
                    .push(cancel_btn)
                    .push(confirm_btn)
                    .spacing(spacing.space_s),
            )
            .spacing(spacing.space_m)
            .align_x(cosmic::iced::Alignment::Center);

        let dialog_container = container(content)
            .padding(spacing.space_m)
            .class(cosmic::theme::Container::Dialog);

        // Center the dialog on screen
        container(
            container(dialog_container)
                .width(Length::Shrink)
                .height(Length::Shrink),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(cosmic::iced::alignment::Horizontal::Center)
        .align_y(cosmic::iced::alignment::Vertical::Center)
        .into()
    }

    fn settings_page(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::active().cosmic().spacing;

        let sections = vec![
            // Appearance section
            settings::section()
                .title(fl!("settings-appearance"))
                .add(settings::item(
                    fl!("settings-theme"),
                    dropdown(
                        AppTheme::ALL
                            .iter()
                            .map(|t| t.to_string())
                            .collect::<Vec<_>>(),
                        AppTheme::ALL
                            .iter()
                            .position(|t| *t == self.config.app_theme),
                        |idx| Message::Settings(SettingsMessage::AppTheme(AppTheme::ALL[idx])),
                    ),
                ))
                .into(),
            // Gallery section
            settings::section()
                .title(fl!("settings-gallery"))
                .add(settings::item(
                    fl!("settings-thumbnail-size"),
                    column()
                        .push(radio(
                            text::body(fl!("settings-thumbnail-small")),
                            ThumbnailSize::Small,
                            Some(self.config.thumbnail_size),
                            |size| Message::Settings(SettingsMessage::ThumbnailSize(size)),
                        ))
                        .push(radio(
                            text::body(fl!("settings-thumbnail-medium")),
                            ThumbnailSize::Medium,
                            Some(self.config.thumbnail_size),
                            |size| Message::Settings(SettingsMessage::ThumbnailSize(size)),
                        ))
                        .push(radio(
                            text::body(fl!("settings-thumbnail-large")),
                            ThumbnailSize::Large,
                            Some(self.config.thumbnail_size),
                            |size| Message::Settings(SettingsMessage::ThumbnailSize(size)),
                        ))
                        .push(radio(
                            text::body(fl!("settings-thumbnail-xlarge")),
                            ThumbnailSize::XLarge,
                            Some(self.config.thumbnail_size),
                            |size| Message::Settings(SettingsMessage::ThumbnailSize(size)),
                        ))
                        .spacing(spacing.space_xxs),
                ))
                .add(settings::item(
                    fl!("settings-show-hidden"),
                    toggler(self.config.show_hidden_files).on_toggle(|show| {
                        Message::Settings(SettingsMessage::ShowHiddenFiles(show))
                    }),
                ))
                .into(),
            // Sorting section
            settings::section()
                .title(fl!("settings-sorting"))
                .add(settings::item(
                    fl!("settings-sort-mode"),
                    dropdown(
                        SortMode::ALL
                            .iter()
                            .map(|m| m.to_string())
                            .collect::<Vec<_>>(),
                        SortMode::ALL
                            .iter()
                            .position(|m| *m == self.config.sort_mode),
                        |idx| Message::Settings(SettingsMessage::SortMode(SortMode::ALL[idx])),
                    ),
                ))
                .add(settings::item(
                    fl!("settings-sort-order"),
                    dropdown(
                        SortOrder::ALL
                            .iter()
                            .map(|o| o.to_string())
                            .collect::<Vec<_>>(),
                        SortOrder::ALL
                            .iter()
                            .position(|o| *o == self.config.sort_order),
                        |idx| Message::Settings(SettingsMessage::SortOrder(SortOrder::ALL[idx])),
                    ),
                ))
                .into(),
            // Directory section
            settings::section()
                .title(fl!("settings-directory"))
                .add(settings::item(
                    fl!("settings-remember-dir"),
                    toggler(self.config.remember_last_dir).on_toggle(|remem| {
                        Message::Settings(SettingsMessage::RememberLastDir(remem))
                    }),
                ))
                .into(),
            // Performance section
            settings::section()
                .title(fl!("settings-performance"))
                .add(settings::item(
                    fl!("settings-cache-size"),
                    spin_button(
                        format!("{}", self.config.cache_size),
                        fl!("settings-cache-size"),
                        self.config.cache_size,
                        5,
                        5,
                        100,
                        |size| Message::Settings(SettingsMessage::CacheSize(size)),
                    ),
                ))
                .into(),
        ];

        settings::view_column(sections).into()
    }

    fn image_info_page(&self) -> Element<'_, Message> {
        let mut content = column()
            .push(text::title3(fl!("info-title")))
            .spacing(cosmic::theme::active().cosmic().spacing.space_s);

        if let Some(path) = self.nav.current() {
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                content = content.push(text::body(fl!("info-name", name = name.to_string())));
            }

            content = content.push(text::body(fl!(
                "info-path",
                path = path.display().to_string()
            )));

            if let Some(cached) = self.cache.get_full(path) {
                content = content.push(text::body(fl!(
                    "info-dimensions",
                    width = cached.width,
                    height = cached.height
                )));
            }

            if let Some(meta) = &self.image_info {
                if let Some(captured) = &meta.captured {
                    content = content
                        .push(text::body(fl!("info-captured", date = captured.clone())));
                }

                let camera = match (&meta.camera_make, &meta.camera_model) {
                    (Some(make), Some(model)) => Some(format!("{make} {model}")),
                    (Some(make), None) => Some(make.clone()),
                    (None, Some(model)) => Some(model.clone()),
                    (None, None) => None,
                };

                if let Some(camera) = camera {
                    content = content.push(text::body(fl!("info-camera", camera = camera)));
                }
            }
        } else {
            content = content.push(text::body(fl!("info-none")));
        }

        content.into()
    }
}

fn key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    if modifiers.shift() {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    let key_bind = KeyBind {
        modifiers: mods,
        key: key.clone(),
    };

    let bindings = key_binds::init_key_binds();
    bindings
        .get(&key_bind)
        .map(|action| Message::KeyBind(*action))
}
