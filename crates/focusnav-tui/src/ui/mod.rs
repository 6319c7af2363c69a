//! UI components and widgets.

mod help;
mod menu;

pub use help::HelpOverlay;
pub use menu::{MenuView, hit_test};

use ratatui::layout::{Constraint, Layout, Rect};

/// Layout areas for the demo.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let [header, main, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            main,
            footer,
        }
    }
}

/// Center a rect within an area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_rows() {
        let layout = AppLayout::new(Rect::new(0, 0, 40, 20));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.main.height, 18);
        assert_eq!(layout.footer.y, 19);
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 20, area);
        assert_eq!(popup, Rect::new(20, 10, 60, 20));

        let small = centered_rect(60, 20, Rect::new(0, 0, 30, 10));
        assert_eq!(small.width, 26);
        assert_eq!(small.height, 6);
    }
}
