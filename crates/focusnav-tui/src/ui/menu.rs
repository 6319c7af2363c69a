//! Menu widget rendering a list or grid of entries.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use focusnav_controller::Selectable;
use focusnav_core::Topology;

use crate::item::MenuItem;
use crate::theme::Theme;

/// Rows taken by one grid cell (label plus border).
const GRID_CELL_HEIGHT: u16 = 3;

/// Screen area of the entry at `index`, or `None` if it falls outside `area`.
fn cell_area(area: Rect, topology: Topology, index: usize) -> Option<Rect> {
    match topology.columns() {
        None => {
            let row = u16::try_from(index).ok()?;
            (row < area.height).then(|| Rect::new(area.x, area.y + row, area.width, 1))
        }
        Some(columns) => {
            let width = area.width / u16::try_from(columns).ok()?;
            if width == 0 {
                return None;
            }
            let row = u16::try_from(index / columns).ok()?;
            let column = u16::try_from(index % columns).ok()?;
            let top = row.checked_mul(GRID_CELL_HEIGHT)?;
            if top.saturating_add(GRID_CELL_HEIGHT) > area.height {
                return None;
            }
            Some(Rect::new(
                area.x + column * width,
                area.y + top,
                width,
                GRID_CELL_HEIGHT,
            ))
        }
    }
}

/// Index of the entry drawn under a screen position.
pub fn hit_test(area: Rect, topology: Topology, len: usize, x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    (0..len).find(|&index| {
        cell_area(area, topology, index).is_some_and(|cell| cell.contains(position))
    })
}

/// Bordered menu showing each entry's selection marker.
pub struct MenuView<'a> {
    items: &'a [MenuItem],
    topology: Topology,
    theme: &'a Theme,
    title: String,
}

impl<'a> MenuView<'a> {
    /// Create a menu over `items`.
    pub fn new(items: &'a [MenuItem], topology: Topology, theme: &'a Theme) -> Self {
        let title = match topology.columns() {
            Some(columns) => format!(" Grid ({columns} columns) "),
            None => " List ".to_string(),
        };
        Self {
            items,
            topology,
            theme,
            title,
        }
    }

    /// Area inside the menu border, where entries are laid out.
    pub fn content_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    fn render_entry(&self, item: &MenuItem, cell: Rect, buf: &mut Buffer) {
        let style = if item.is_selected() {
            self.theme.selected
        } else {
            self.theme.item
        };

        if self.topology.is_grid() {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(if item.is_selected() {
                    self.theme.title
                } else {
                    self.theme.border
                });
            Paragraph::new(Line::from(Span::styled(item.label(), style)))
                .alignment(Alignment::Center)
                .block(block)
                .render(cell, buf);
        } else {
            let marker = if item.is_selected() { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, self.theme.title),
                Span::styled(item.label(), style),
            ]);
            buf.set_style(cell, style);
            buf.set_line(cell.x, cell.y, &line, cell.width);
        }
    }
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title.as_str())
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            let line = Line::from(Span::styled("(no items)", self.theme.hint));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        for (index, item) in self.items.iter().enumerate() {
            if let Some(cell) = cell_area(inner, self.topology, index) {
                self.render_entry(item, cell, buf);
            }
        }
    }
}
