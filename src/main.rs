//! focusnav - directional focus navigation for list and grid menus.
//!
//! Usage:
//!   focusnav [ITEMS...]              Launch the interactive demo
//!   focusnav demo [ITEMS...]         Same, explicitly
//!   focusnav replay -n 6 SCRIPT      Press a script of actions headlessly
//!   focusnav --help                  Show help

mod replay;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use focusnav_core::{NavigationOptions, Topology};
use focusnav_tui::{DemoConfig, ThemeVariant};

const DEFAULT_ITEM_COUNT: usize = 9;

#[derive(Parser)]
#[command(
    name = "focusnav",
    version,
    about = "Directional focus navigation for list and grid menus",
    long_about = "focusnav moves a selection marker across a list or grid of items \
                  in response to up/down/left/right/continue presses.\n\n\
                  Launch the interactive demo by running `focusnav [ITEMS...]`, or \
                  replay a script of presses with `focusnav replay`.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(flatten)]
    demo: DemoArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the interactive demo
    Demo(DemoArgs),

    /// Press a script of actions against headless elements
    Replay {
        /// Number of elements
        #[arg(short = 'n', long)]
        count: usize,

        #[command(flatten)]
        nav: NavArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Actions separated by commas or spaces (up, down, left, right, continue)
        script: String,
    },
}

#[derive(Args, Default)]
struct DemoArgs {
    #[command(flatten)]
    nav: NavArgs,

    /// Starting color theme
    #[arg(long, default_value = "dark")]
    theme: ThemeVariant,

    /// Write logs to this file (stderr is hidden behind the demo screen)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Menu item labels (defaults to "Item 1" .. "Item 9")
    items: Vec<String>,
}

#[derive(Args, Default)]
struct NavArgs {
    /// Lay items out in a grid with this many columns
    #[arg(short, long, value_name = "COLUMNS")]
    grid: Option<usize>,

    /// Stop at the ends instead of wrapping around
    #[arg(long)]
    no_loop: bool,

    /// Bind only up/down
    #[arg(long, conflicts_with = "only_horizontal")]
    only_vertical: bool,

    /// Bind only left/right
    #[arg(long)]
    only_horizontal: bool,

    /// Do not bind continue
    #[arg(long)]
    no_confirm: bool,

    /// Load navigation options from a JSON file (overrides the flags above)
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
}

impl NavArgs {
    /// Resolve the flags (or options file) into navigation options.
    fn navigation_options(&self) -> Result<NavigationOptions> {
        if let Some(path) = &self.options {
            return load_options(path);
        }

        let mut builder = NavigationOptions::builder();
        if let Some(columns) = self.grid {
            builder.topology(Topology::grid(columns)?);
        }
        let options = builder
            .loop_forbidden(self.no_loop)
            .suppress_horizontal(self.only_vertical)
            .suppress_vertical(self.only_horizontal)
            .suppress_confirm(self.no_confirm)
            .build()?;
        Ok(options)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Demo(args)) => run_demo(args)?,
        Some(Command::Replay {
            count,
            nav,
            format,
            script,
        }) => {
            init_logging(None)?;
            run_replay(count, &nav, format, &script)?;
        }
        None => run_demo(cli.demo)?,
    }

    Ok(())
}

/// Install the global subscriber, filtered by `FOCUSNAV_LOG` (default `warn`).
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env("FOCUSNAV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Read `NavigationOptions` from a JSON file.
fn load_options(path: &Path) -> Result<NavigationOptions> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    NavigationOptions::from_json(&json)
        .with_context(|| format!("Invalid options file {}", path.display()))
}

/// Run the interactive demo and print the chosen item.
fn run_demo(args: DemoArgs) -> Result<()> {
    // Only log to a file: stderr output would tear the demo screen.
    if let Some(path) = &args.log_file {
        init_logging(Some(path))?;
    }

    let options = args.nav.navigation_options()?;
    let items = if args.items.is_empty() {
        (1..=DEFAULT_ITEM_COUNT).map(|n| format!("Item {n}")).collect()
    } else {
        args.items
    };

    let config = DemoConfig::new(items)
        .with_options(options)
        .with_theme(args.theme);

    if let Some(label) = focusnav_tui::run(config)? {
        println!("{label}");
    }
    Ok(())
}

/// Replay a script headlessly and print each step.
fn run_replay(count: usize, nav: &NavArgs, format: OutputFormat, script: &str) -> Result<()> {
    let options = nav.navigation_options()?;
    let actions = replay::parse_script(script)?;
    tracing::debug!(count, steps = actions.len(), ?options, "replaying script");
    let steps = replay::replay(count, options, &actions);

    match format {
        OutputFormat::Text => {
            for step in &steps {
                println!("{step}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&steps)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use focusnav_core::ShrinkPolicy;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_build_options() {
        let nav = NavArgs {
            grid: Some(4),
            no_loop: true,
            only_vertical: true,
            ..NavArgs::default()
        };
        let options = nav.navigation_options().unwrap();

        assert_eq!(options.topology.columns(), Some(4));
        assert!(options.loop_forbidden);
        assert!(options.suppress_horizontal);
        assert!(!options.suppress_vertical);
        assert!(!options.suppress_confirm);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let nav = NavArgs {
            grid: Some(0),
            ..NavArgs::default()
        };
        assert!(nav.navigation_options().is_err());
    }

    #[test]
    fn test_options_file_overrides_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"topology":{{"mode":"grid","columns":2}},"shrink_policy":"clamp"}}"#
        )
        .unwrap();

        let nav = NavArgs {
            no_loop: true,
            options: Some(file.path().to_path_buf()),
            ..NavArgs::default()
        };
        let options = nav.navigation_options().unwrap();

        assert_eq!(options.topology.columns(), Some(2));
        assert_eq!(options.shrink_policy, ShrinkPolicy::Clamp);
        assert!(!options.loop_forbidden);
    }

    #[test]
    fn test_missing_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read options file"));
    }

    #[test]
    fn test_parse_replay_command() {
        let cli = Cli::try_parse_from([
            "focusnav", "replay", "-n", "6", "--grid", "3", "--format", "json", "right,down",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Replay {
                count,
                nav,
                format,
                script,
            }) => {
                assert_eq!(count, 6);
                assert_eq!(nav.grid, Some(3));
                assert!(matches!(format, OutputFormat::Json));
                assert_eq!(script, "right,down");
            }
            _ => panic!("expected replay command"),
        }
    }

    #[test]
    fn test_parse_default_demo() {
        let cli = Cli::try_parse_from(["focusnav", "--no-loop", "Play", "Quit"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.demo.nav.no_loop);
        assert_eq!(cli.demo.items, vec!["Play", "Quit"]);
    }
}
