//! Demo application state and event loop.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use itertools::Itertools;
use ratatui::DefaultTerminal;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use focusnav_controller::{InputListener, NavigationConfig, NavigationController, Observable};
use focusnav_core::{Action, Topology};

use crate::DemoConfig;
use crate::event::KeyAction;
use crate::item::MenuItem;
use crate::theme::Theme;
use crate::ui::{AppLayout, HelpOverlay, MenuView, hit_test};

/// Result type for the demo.
pub type AppResult<T> = color_eyre::Result<T>;

/// Demo application: one menu driven by a mounted controller.
pub struct App {
    listener: InputListener,
    controller: NavigationController<MenuItem>,
    elements: Observable<Vec<Option<MenuItem>>>,
    topology: Topology,
    chosen: Rc<Cell<Option<usize>>>,
    chosen_label: Option<String>,
    theme: Theme,
    show_help: bool,
    should_quit: bool,
    menu_area: Rect,
    next_label: usize,
}

impl App {
    /// Build the menu and its controller. Nothing is bound until [`App::mount`].
    pub fn new(config: DemoConfig) -> Self {
        let listener = InputListener::new();
        let elements = Observable::new(
            config
                .labels
                .iter()
                .map(|label| Some(MenuItem::new(label.as_str())))
                .collect::<Vec<_>>(),
        );
        let chosen = Rc::new(Cell::new(None));
        let on_chosen = Rc::clone(&chosen);
        let topology = config.options.topology;
        let next_label = config.labels.len() + 1;

        let controller = NavigationController::new(
            NavigationConfig::new(config.options)
                .with_elements(elements.clone())
                .with_listener(listener.clone())
                .on_selected(|index| {
                    tracing::debug!(target: "focusnav::tui", index, "selected");
                })
                .on_chosen(move |index| on_chosen.set(Some(index))),
        );

        Self {
            listener,
            controller,
            elements,
            topology,
            chosen,
            chosen_label: None,
            theme: Theme::from_variant(config.theme),
            show_help: false,
            should_quit: false,
            menu_area: Rect::default(),
            next_label,
        }
    }

    /// Bind the controller to the listener and select the first entry.
    pub fn mount(&self) {
        if let Some(bindings) = self.controller.mount() {
            tracing::info!(
                target: "focusnav::tui",
                actions = %bindings.actions().iter().join(" "),
                "menu mounted"
            );
        }
    }

    /// Run the event loop until the user quits or chooses an entry.
    ///
    /// Returns the chosen entry's label, if any.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> AppResult<Option<String>> {
        self.mount();

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_action(KeyAction::from_key_event(key));
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }

        self.controller.disable();
        Ok(self.chosen_label)
    }

    /// Apply one key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        if self.show_help {
            match action {
                KeyAction::ToggleHelp | KeyAction::Quit => self.show_help = false,
                KeyAction::ForceQuit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Press(action) => self.press(action),
            KeyAction::AddItem => {
                let item = MenuItem::new(format!("Item {}", self.next_label));
                self.next_label += 1;
                self.elements.update(|elements| elements.push(Some(item)));
            }
            KeyAction::RemoveItem => {
                self.elements.update(|elements| {
                    elements.pop();
                });
            }
            KeyAction::ToggleHelp => self.show_help = true,
            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::Quit | KeyAction::ForceQuit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Select the entry under a left click.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = hit_test(
            self.menu_area,
            self.topology,
            self.controller.len(),
            mouse.column,
            mouse.row,
        ) {
            self.controller.select(index);
        }
    }

    fn press(&mut self, action: Action) {
        if !self.listener.press(action) {
            tracing::trace!(target: "focusnav::tui", %action, "no handler bound");
        }
        if let Some(index) = self.chosen.take() {
            self.chosen_label = self
                .controller
                .selectables()
                .get(index)
                .map(|item| item.label().to_string());
            self.should_quit = true;
        }
    }

    /// Check if the loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Label of the chosen entry, once one has been chosen.
    pub fn chosen_label(&self) -> Option<&str> {
        self.chosen_label.as_deref()
    }

    /// Controller driving the menu.
    pub fn controller(&self) -> &NavigationController<MenuItem> {
        &self.controller
    }

    /// Check if the help overlay is open.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draw one frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(
                Style::new()
                    .bg(self.theme.background)
                    .fg(self.theme.foreground),
            ),
            area,
        );

        let layout = AppLayout::new(area);
        self.render_header(frame, layout.header);

        let items = self.controller.selectables();
        frame.render_widget(MenuView::new(&items, self.topology, &self.theme), layout.main);
        self.menu_area = MenuView::content_area(layout.main);

        self.render_footer(frame, layout.footer);

        if self.show_help {
            frame.render_widget(HelpOverlay::new(&self.theme), area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.topology.columns() {
            Some(columns) => format!("grid x{columns}"),
            None => "list".to_string(),
        };
        let wrap = match self.controller.options() {
            Some(options) if options.loop_forbidden => "no wrap",
            _ => "wrap",
        };
        let line = Line::from(vec![
            Span::styled(" focusnav ", self.theme.title),
            Span::styled(format!("{mode} · {wrap}"), self.theme.bar),
        ]);
        frame.render_widget(Paragraph::new(line).style(self.theme.bar), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let index = self.controller.selected_index();
        let len = self.controller.len();

        let mut spans = vec![Span::raw(format!(" index {index}"))];
        if index >= len {
            spans.push(Span::styled(" (stale)", Style::new().fg(self.theme.warning)));
        }
        spans.push(Span::raw(format!(
            " · column {} · {len} items · ",
            self.controller.current_column()
        )));
        spans.push(Span::styled(
            self.listener.bound_actions().iter().join(" "),
            Style::new().fg(self.theme.muted),
        ));
        spans.push(Span::styled("  ? help", self.theme.title));

        frame.render_widget(Paragraph::new(Line::from(spans)).style(self.theme.bar), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focusnav_controller::Selectable;
    use focusnav_core::NavigationOptions;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn demo(options: NavigationOptions) -> App {
        let app = App::new(DemoConfig::new(["Play", "Options", "Credits", "Quit"]).with_options(options));
        app.mount();
        app
    }

    fn selected_labels(app: &App) -> Vec<String> {
        app.controller()
            .selectables()
            .iter()
            .filter(|item| item.is_selected())
            .map(|item| item.label().to_string())
            .collect()
    }

    #[test]
    fn test_mount_selects_first() {
        let app = demo(NavigationOptions::list());
        assert_eq!(app.controller().selected_index(), 0);
        assert_eq!(selected_labels(&app), vec!["Play"]);
    }

    #[test]
    fn test_keys_move_selection() {
        let mut app = demo(NavigationOptions::list());
        app.handle_action(KeyAction::Press(Action::Down));
        app.handle_action(KeyAction::Press(Action::Down));
        app.handle_action(KeyAction::Press(Action::Up));
        assert_eq!(selected_labels(&app), vec!["Options"]);

        app.handle_action(KeyAction::Press(Action::Left));
        app.handle_action(KeyAction::Press(Action::Left));
        assert_eq!(selected_labels(&app), vec!["Quit"]);
    }

    #[test]
    fn test_continue_chooses_and_quits() {
        let mut app = demo(NavigationOptions::list());
        app.handle_action(KeyAction::Press(Action::Right));
        app.handle_action(KeyAction::Press(Action::Continue));

        assert!(app.should_quit());
        assert_eq!(app.chosen_label(), Some("Options"));
    }

    #[test]
    fn test_suppressed_confirm_does_not_choose() {
        let options = NavigationOptions::builder()
            .suppress_confirm(true)
            .build()
            .unwrap();
        let mut app = demo(options);
        app.handle_action(KeyAction::Press(Action::Continue));

        assert!(!app.should_quit());
        assert_eq!(app.chosen_label(), None);
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut app = demo(NavigationOptions::list());
        app.handle_action(KeyAction::AddItem);
        assert_eq!(app.controller().len(), 5);
        assert_eq!(app.controller().selectables()[4].label(), "Item 5");

        app.handle_action(KeyAction::RemoveItem);
        app.handle_action(KeyAction::RemoveItem);
        assert_eq!(app.controller().len(), 3);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = demo(NavigationOptions::list());
        app.handle_action(KeyAction::ToggleHelp);
        assert!(app.show_help());

        app.handle_action(KeyAction::Press(Action::Down));
        assert_eq!(app.controller().selected_index(), 0);

        app.handle_action(KeyAction::Quit);
        assert!(!app.show_help());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = demo(NavigationOptions::list());
        let before = app.theme().variant;
        app.handle_action(KeyAction::ToggleTheme);
        assert_ne!(app.theme().variant, before);
    }

    #[test]
    fn test_click_selects_entry() {
        let mut app = demo(NavigationOptions::grid(2).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        // Menu border starts on row 1, so the second grid row spans rows 5..8.
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 30,
            row: 6,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert_eq!(app.controller().selected_index(), 3);
        assert_eq!(selected_labels(&app), vec!["Quit"]);
    }

    #[test]
    fn test_render_shows_entries() {
        let mut app = demo(NavigationOptions::list());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("▸ Play"));
        assert!(text.contains("Credits"));
        assert!(text.contains("index 0"));
    }
}
