//! Terminal demo for focusnav.
//!
//! Renders a list or grid menu whose selection is driven by a mounted
//! [`NavigationController`](focusnav_controller::NavigationController).
//! Keys are turned into `up`/`down`/`left`/`right`/`continue` presses on an
//! [`InputListener`](focusnav_controller::InputListener); the menu highlights
//! whichever entry currently carries the selection marker.
//!
//! # Usage
//!
//! ```rust,no_run
//! use focusnav_core::NavigationOptions;
//! use focusnav_tui::DemoConfig;
//!
//! let config = DemoConfig::new(["Play", "Options", "Quit"])
//!     .with_options(NavigationOptions::list());
//! if let Some(label) = focusnav_tui::run(config).unwrap() {
//!     println!("{label}");
//! }
//! ```
//!
//! # Keyboard Navigation
//!
//! - `k`/`j`/`h`/`l` or arrows - Move
//! - `Enter`/`Space` - Choose
//! - `a`/`x` - Add/remove an entry
//! - `t` - Toggle theme
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod item;
mod theme;
mod ui;

pub use app::{App, AppResult};
pub use event::KeyAction;
pub use item::MenuItem;
pub use theme::{Theme, ThemeVariant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use focusnav_core::NavigationOptions;

/// Settings for one demo run.
#[derive(Debug, Clone, Default)]
pub struct DemoConfig {
    /// Navigation options handed to the controller.
    pub options: NavigationOptions,
    /// Initial entry labels, in order.
    pub labels: Vec<String>,
    /// Starting color theme.
    pub theme: ThemeVariant,
}

impl DemoConfig {
    /// Create a config for `labels` with list navigation.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the navigation options.
    pub fn with_options(mut self, options: NavigationOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the starting theme.
    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = theme;
        self
    }
}

/// Run the demo in the terminal. Returns the chosen entry's label.
pub fn run(config: DemoConfig) -> AppResult<Option<String>> {
    let mut terminal = ratatui::init();
    let result = crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::eyre::Report::from)
        .and_then(|()| App::new(config).run(&mut terminal));
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}
