//! Responsive grid for thumbnail cells
//!
//! Lays out uniform-width children in as many columns as the available width
//! allows. Because every cell is the same size, the placement is computed
//! directly from the column count, cell width and spacing; no general layout
//! solver is involved. The column count is reported back to the application
//! so keyboard navigation can move focus by rows.

use std::{cell::Cell, f32};

use cosmic::{
    Element, Renderer,
    iced::{
        Length, Padding, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            overlay, renderer as iced_renderer,
            widget::{Operation, Tree},
        },
        event::{self, Event},
        mouse::{self, Cursor},
    },
};

pub struct ImageGrid<'a, M> {
    children: Vec<Element<'a, M>>,
    cell_width: f32,
    spacing: u16,
    padding: Padding,
    width: Length,
    height: Length,
    last_cols: Cell<usize>,
    on_columns_changed: Option<Box<dyn Fn(usize) -> M + 'a>>,
}

pub fn image_grid<'a, M>(children: Vec<Element<'a, M>>) -> ImageGrid<'a, M> {
    ImageGrid {
        children,
        cell_width: 128.0,
        spacing: 0,
        padding: Padding::ZERO,
        width: Length::Fill,
        height: Length::Shrink,
        last_cols: Cell::new(0),
        on_columns_changed: None,
    }
}

impl<'a, M> ImageGrid<'a, M> {
    pub fn cell_width(mut self, width: f32) -> Self {
        self.cell_width = width;
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Notify when the column count changes on resize
    pub fn on_columns_changed<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> M + 'a,
    {
        self.on_columns_changed = Some(Box::new(f));
        self
    }

    /// Column count for a given available width
    fn columns(&self, available_width: f32) -> usize {
        let spacing = self.spacing as f32;

        if available_width <= 0.0 || self.cell_width <= 0.0 {
            return 1;
        }

        let cols = ((available_width + spacing) / (self.cell_width + spacing)).floor() as usize;

        cols.clamp(1, self.children.len().max(1))
    }
}

impl<'a, M: Clone + 'static> Widget<M, cosmic::Theme, Renderer> for ImageGrid<'a, M> {
    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(&mut self.children);
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        if self.children.is_empty() {
            return Node::new(Size::ZERO);
        }

        let limits = limits.width(self.width).height(self.height);
        let available_width = (limits.max().width - self.padding.horizontal()).max(0.0);

        let cols = self.columns(available_width);
        let rows = self.children.len().div_ceil(cols);
        let spacing = self.spacing as f32;

        // Columns share the available width evenly
        let slot_width = ((available_width - spacing * (cols - 1) as f32) / cols as f32).max(0.0);

        // Measure children against the fixed cell width
        let child_limits = Limits::new(Size::ZERO, Size::new(self.cell_width, f32::INFINITY));

        let mut child_nodes: Vec<Node> = tree
            .children
            .iter_mut()
            .zip(self.children.iter())
            .map(|(child_tree, child)| {
                child
                    .as_widget()
                    .layout(child_tree, renderer, &child_limits)
            })
            .collect();

        // Every row is as tall as the tallest child
        let row_height = child_nodes
            .iter()
            .map(|node| node.size().height)
            .fold(0.0_f32, f32::max);

        // Place each child centered within its slot
        for (idx, node) in child_nodes.iter_mut().enumerate() {
            let row = (idx / cols) as f32;
            let col = (idx % cols) as f32;
            let size = node.size();

            let x = self.padding.left
                + col * (slot_width + spacing)
                + ((slot_width - size.width) / 2.0).max(0.0);
            let y = self.padding.top
                + row * (row_height + spacing)
                + ((row_height - size.height) / 2.0).max(0.0);

            *node = node.clone().move_to(Point::new(x, y));
        }

        let content_height = rows as f32 * row_height + spacing * (rows - 1) as f32;
        let content_size = Size::new(
            available_width + self.padding.horizontal(),
            content_height + self.padding.vertical(),
        );

        let final_size = limits.resolve(self.width, self.height, content_size);

        Node::with_children(final_size, child_nodes)
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        for ((child, state), layout) in self
            .children
            .iter()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            child
                .as_widget()
                .operate(state, layout, renderer, operation);
        }
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        viewport: &Rectangle,
    ) -> event::Status {
        let available_width = (layout.bounds().width - self.padding.horizontal()).max(0.0);
        let cols = self.columns(available_width);

        if let Some(ref on_columns_changed) = self.on_columns_changed
            && cols != self.last_cols.get()
        {
            self.last_cols.set(cols);
            shell.publish((on_columns_changed)(cols));
        }

        let mut captured = false;

        for ((child, state), layout) in self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            captured |= child.as_widget_mut().on_event(
                state,
                event.clone(),
                layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            ) == event::Status::Captured;
        }

        if captured {
            event::Status::Captured
        } else {
            event::Status::Ignored
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .map(|((child, state), layout)| {
                child
                    .as_widget()
                    .mouse_interaction(state, layout, cursor, viewport, renderer)
            })
            .find(|interaction| *interaction != mouse::Interaction::None)
            .unwrap_or(mouse::Interaction::None)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &cosmic::Theme,
        style: &iced_renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        for ((child, state), layout) in self
            .children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
        {
            // Rows scrolled out of view are skipped entirely
            if !layout.bounds().intersects(viewport) {
                continue;
            }

            child
                .as_widget()
                .draw(state, renderer, theme, style, layout, cursor, viewport);
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: cosmic::iced::Vector,
    ) -> Option<overlay::Element<'b, M, cosmic::Theme, Renderer>> {
        overlay::from_children(&mut self.children, tree, layout, renderer, translation)
    }
}

impl<'a, M: Clone + 'static> From<ImageGrid<'a, M>> for Element<'a, M> {
    fn from(grid: ImageGrid<'a, M>) -> Self {
        Element::new(grid)
    }
}
