use crate::{
    fl,
    message::{Message, NavMessage, ViewMessage},
    views::ZoomState,
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::{
        scrollable::{Direction, Scrollbar},
        stack,
    },
    theme,
    widget::{
        Id, Space, button, column, container, horizontal_space, icon, image, mouse_area,
        responsive, row, scrollable, text,
    },
};
use gallery_image::{CachedImage, ImageCache};
use gallery_nav::NavState;

/// Gallery grid view with the modal single-image viewer layered on top.
#[derive(Debug, Clone, Default)]
pub struct GalleryView {
    pub focused_index: Option<usize>,
    pub cols: usize,
}

impl GalleryView {
    pub const SCROLL_ID: &'static str = "gallery-scroll";

    pub fn new() -> Self {
        Self {
            focused_index: None,
            cols: 4,
        }
    }

    fn empty_state(hint: String) -> Element<'static, Message> {
        let spacing = theme::active().cosmic().spacing;

        container(
            column()
                .push(icon::from_name("folder-pictures-symbolic").size(64))
                .push(text(fl!("status-no-images")).size(16))
                .push(text(hint).size(12))
                .spacing(spacing.space_m)
                .align_x(Alignment::Center),
        )
        .center(Length::Fill)
        .into()
    }

    fn modal_loading(&self) -> Element<'static, Message> {
        let spacing = theme::active().cosmic().spacing;

        let close_btn = button::icon(icon::from_name("window-close-symbolic"))
            .on_press(Message::View(ViewMessage::CloseModal))
            .padding(spacing.space_xs)
            .class(theme::Button::Destructive);

        let header = row()
            .push(horizontal_space())
            .push(close_btn)
            .width(Length::Fill)
            .padding(spacing.space_xs);

        let loading = container(
            column()
                .push(icon::from_name("content-loading-symbolic").size(48))
                .push(text(fl!("loading")).size(14))
                .spacing(spacing.space_s)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill);

        container(
            container(
                column()
                    .push(header)
                    .push(loading)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .class(theme::Container::Dialog),
        )
        .padding([60, 80])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn modal_content(
        &self,
        name: Option<String>,
        cached: &CachedImage,
        zoom: &ZoomState,
    ) -> Element<'static, Message> {
        let spacing = theme::active().cosmic().spacing;

        // Data for the responsive closure
        let handle = cached.handle.clone();
        let img_width = cached.width as f32;
        let img_height = cached.height as f32;
        let scale = zoom.scale();

        let prev_btn = container(
            button::icon(icon::from_name("go-previous-symbolic"))
                .on_press(Message::Nav(NavMessage::Prev)),
        )
        .width(Length::Shrink)
        .height(Length::Fill)
        .center_y(Length::Fill);

        let next_btn = container(
            button::icon(icon::from_name("go-next-symbolic"))
                .on_press(Message::Nav(NavMessage::Next)),
        )
        .width(Length::Shrink)
        .height(Length::Fill)
        .center_y(Length::Fill);

        let close_btn = button::icon(icon::from_name("window-close-symbolic"))
            .on_press(Message::View(ViewMessage::CloseModal))
            .padding(spacing.space_xs)
            .class(theme::Button::Destructive);

        let header = row()
            .push(text::body(name.unwrap_or_default()))
            .push(horizontal_space())
            .push(close_btn)
            .width(Length::Fill)
            .padding(spacing.space_xs)
            .align_y(Alignment::Center);

        // Responsive gives us the viewport size; the image is displayed at
        // its natural size multiplied by the zoom factor.
        let image_area = responsive(move |size| {
            let available_width = size.width - (spacing.space_xs * 2) as f32;
            let available_height = size.height - (spacing.space_xs * 2) as f32;

            let scaled_width = img_width * scale;
            let scaled_height = img_height * scale;

            // Center padding
            let pad_x = ((available_width - scaled_width) / 2.0).max(0.0);
            let pad_y = ((available_height - scaled_height) / 2.0).max(0.0);

            let image_widget = image(handle.clone())
                .content_fit(ContentFit::Fill)
                .width(Length::Fixed(scaled_width))
                .height(Length::Fixed(scaled_height));

            // Scrollable only when zoomed past the viewport
            if scaled_width > available_width || scaled_height > available_height {
                container(
                    scrollable(
                        container(image_widget)
                            .width(Length::Shrink)
                            .height(Length::Shrink)
                            .padding([pad_y, pad_x]),
                    )
                    .direction(Direction::Both {
                        vertical: Scrollbar::default(),
                        horizontal: Scrollbar::default(),
                    })
                    .width(Length::Fill)
                    .height(Length::Fill),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
            } else {
                // Just center it
                container(image_widget)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center(Length::Fill)
                    .into()
            }
        });

        // Zoom controls
        let zoom_ctrls = row()
            .push(
                button::icon(icon::from_name("zoom-out-symbolic"))
                    .on_press(Message::View(ViewMessage::ZoomOut))
                    .padding(spacing.space_xs),
            )
            .push(
                container(
                    button::text(format!("{}%", zoom.percent()))
                        .on_press(Message::View(ViewMessage::ZoomReset)),
                )
                .padding(spacing.space_xs),
            )
            .push(
                button::icon(icon::from_name("zoom-in-symbolic"))
                    .on_press(Message::View(ViewMessage::ZoomIn))
                    .padding(spacing.space_xs),
            )
            .push(
                button::icon(icon::from_name("view-fullscreen-symbolic"))
                    .on_press(Message::View(ViewMessage::ToggleFullscreen))
                    .padding(spacing.space_xs),
            )
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center);

        let footer = row()
            .push(horizontal_space())
            .push(zoom_ctrls)
            .push(horizontal_space())
            .width(Length::Fill)
            .padding(spacing.space_xs);

        let content_row = row()
            .push(prev_btn)
            .push(image_area)
            .push(next_btn)
            .width(Length::Fill)
            .height(Length::Fill);

        // Outer padding lets the gallery peek through
        container(
            container(
                column()
                    .push(header)
                    .push(content_row)
                    .push(footer)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .class(theme::Container::Dialog),
        )
        .padding([60, 80])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn view(
        &self,
        nav: &NavState,
        cache: &ImageCache,
        thumbnail_size: u32,
        zoom: &ZoomState,
        is_loading: bool,
    ) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        if nav.total_scanned() == 0 {
            return Self::empty_state(fl!("status-open-hint"));
        }

        let images = nav.visible_images();

        if images.is_empty() {
            let query = nav.filter().unwrap_or_default().to_string();
            return Self::empty_state(fl!("status-no-matches", query = query));
        }

        let cell_size = thumbnail_size as f32;
        let active = nav.index();

        // One cell per visible image; the active one carries the accent
        // highlight, everything else the neutral border.
        let items: Vec<Element<'_, Message>> = images
            .iter()
            .enumerate()
            .map(|(idx, path)| {
                let content: Element<'_, Message> = match cache.get_thumbnail(path) {
                    Some(handle) => image(handle)
                        .content_fit(ContentFit::Contain)
                        .width(Length::Fixed(cell_size))
                        .height(Length::Fixed(cell_size))
                        .into(),
                    None => container(icon::from_name("image-x-generic-symbolic").size(48))
                        .center(Length::Fixed(cell_size))
                        .into(),
                };

                let class = if active == Some(idx) {
                    theme::Button::Suggested
                } else {
                    theme::Button::Image
                };

                button::custom(content)
                    .id(Id::new(format!("thumbnail-{idx}")))
                    .class(class)
                    .padding(spacing.space_xxs)
                    .on_press(Message::Nav(NavMessage::Select(idx)))
                    .into()
            })
            .collect();

        let grid = gallery_widgets::image_grid(items)
            .cell_width(cell_size + (spacing.space_xxs * 2) as f32)
            .spacing(spacing.space_xs)
            .padding(spacing.space_s)
            .on_columns_changed(|cols| Message::View(ViewMessage::ColumnsChanged(cols)));

        let content = scrollable(grid)
            .id(Id::new(Self::SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill);

        // Status bar
        let mut status = row()
            .push(text(fl!("status-image-count", count = images.len())).size(12))
            .spacing(spacing.space_s)
            .padding([spacing.space_xxs, spacing.space_s])
            .align_y(Alignment::Center);

        if let Some(query) = nav.filter() {
            status = status.push(text(fl!("status-filtered", query = query.to_string())).size(12));
        }

        if is_loading {
            status = status.push(text(fl!("loading")).size(12));
        }

        let gallery: Element<'_, Message> = column()
            .push(content)
            .push(status)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        // If an image is selected, layer the modal over the grid
        if let Some(idx) = nav.index()
            && let Some(path) = nav.path_at(idx)
        {
            // Mouse-area backdrop closes the modal on click
            let backdrop = mouse_area(
                container(Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .class(theme::Container::Transparent),
            )
            .on_press(Message::View(ViewMessage::CloseModal));

            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string);

            // Show the image if cached, a loading state if not
            let modal = if let Some(cached) = cache.get_full(path) {
                self.modal_content(name, &cached, zoom)
            } else {
                self.modal_loading()
            };

            return stack![gallery, backdrop, modal].into();
        }

        gallery
    }
}
