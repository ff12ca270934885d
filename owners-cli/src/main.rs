//! Owners CLI: inspect component fixtures without a terminal UI.
//!
//! Commands:
//! - `render` draws the owners bar into an off-screen buffer and prints it
//! - `chain` prints the owner chain of one element, root first
//! - `validate` checks a fixture for dangling owners and cycles

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use tracing::{debug, info};

use owners_core::{ElementId, ElementStore, OwnerNavigator, Store, TreeContext};
use owners_tui::config::{self, BarConfig};
use owners_tui::owners_stack::{OwnerStack, OwnerStackState};
use owners_tui::Theme;

#[derive(Parser)]
#[command(name = "owners", about = "Owners CLI: owner chains and the owners-stack bar")]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drill into an element's owners and print the bar as text.
    Render {
        /// JSON fixture with an `elements` array.
        #[arg(long)]
        fixture: PathBuf,

        /// Element whose owners stack is built.
        #[arg(long)]
        owner: u32,

        /// Owner within the stack to select afterwards.
        #[arg(long)]
        select: Option<u32>,

        /// Bar width in cells.
        #[arg(long, default_value_t = 80)]
        width: u16,

        /// Open the dropdown if the bar is collapsed.
        #[arg(long, default_value_t = false)]
        open: bool,

        /// Bar config (TOML). Defaults to <config dir>/owners-stack/config.toml.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the owner chain of an element, root first.
    Chain {
        #[arg(long)]
        fixture: PathBuf,

        #[arg(long)]
        id: u32,
    },
    /// Exit non-zero if an owner reference dangles or forms a cycle.
    Validate {
        #[arg(long)]
        fixture: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.command {
        Commands::Render {
            fixture,
            owner,
            select,
            width,
            open,
            config,
        } => {
            let store = load_store(&fixture)?;
            let bar_config = load_config(config)?;
            let lines = render_bar(
                store,
                ElementId(owner),
                select.map(ElementId),
                width,
                open,
                &bar_config,
            )?;
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Chain { fixture, id } => {
            let store = load_store(&fixture)?;
            for line in chain_lines(&store, ElementId(id))? {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Validate { fixture } => run_validate(&fixture),
    }
}

fn load_store(path: &Path) -> Result<Store> {
    let store = Store::load(path)
        .with_context(|| format!("failed to load fixture {}", path.display()))?;
    info!(elements = store.len(), path = %path.display(), "fixture loaded");
    Ok(store)
}

fn load_config(path: Option<PathBuf>) -> Result<BarConfig> {
    match path.or_else(config::default_path) {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(BarConfig::default()),
    }
}

/// Render the bar for `owner`'s stack and return the buffer rows, right-trimmed.
///
/// With `open` and a collapsed bar, the dropdown is opened and the frame
/// redrawn with room below for the modal.
fn render_bar(
    store: Store,
    owner: ElementId,
    select: Option<ElementId>,
    width: u16,
    open: bool,
    bar_config: &BarConfig,
) -> Result<Vec<String>> {
    if width == 0 {
        bail!("--width must be at least 1");
    }
    let mut tree = TreeContext::new(Rc::new(store));
    tree.select_owner(owner)?;
    if let Some(id) = select {
        if !tree.owner_stack().contains(&id) {
            bail!("{id} is not an owner of {owner}");
        }
        tree.select_owner(id)?;
    }
    debug!(stack = ?tree.owner_stack(), index = ?tree.owner_stack_index(), "stack built");

    let theme = Theme::default();
    let mut state = OwnerStackState::new();
    let mut buf = draw(&tree, &mut state, bar_config, &theme, width, 1);

    if open && state.is_overflowing() {
        // Same key as a press of the toggle shortcut.
        state.handle_key(KeyEvent::from(KeyCode::Char('o')), &tree);
        let height = 1 + bar_config.dropdown_max_rows + 2;
        buf = draw(&tree, &mut state, bar_config, &theme, width, height);
    }

    Ok((0..buf.area.height)
        .map(|y| {
            let line: String = (0..buf.area.width)
                .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                .collect();
            line.trim_end().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect())
}

fn draw(
    tree: &TreeContext,
    state: &mut OwnerStackState,
    bar_config: &BarConfig,
    theme: &Theme,
    width: u16,
    height: u16,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    OwnerStack::new(tree.store(), tree, bar_config, theme).render(
        Rect::new(0, 0, width, 1),
        &mut buf,
        state,
    );
    buf
}

/// `depth  id  label`, one line per owner from the root down.
fn chain_lines(store: &Store, id: ElementId) -> Result<Vec<String>> {
    let chain = store.owner_chain(id)?;
    Ok(chain
        .iter()
        .enumerate()
        .map(|(depth, &owner)| {
            let label = store
                .element_by_id(owner)
                .map(|el| el.label())
                .unwrap_or_else(|| format!("#{owner}"));
            format!("{}{:>4}  {label}", "  ".repeat(depth), owner.0)
        })
        .collect())
}

fn run_validate(path: &Path) -> Result<()> {
    let store = load_store(path)?;
    let problems = store.validate();
    if problems.is_empty() {
        println!("{}: {} elements, ok", path.display(), store.len());
        return Ok(());
    }
    for problem in &problems {
        eprintln!("  {problem}");
    }
    bail!("{}: {} problem(s)", path.display(), problems.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use owners_core::Element;

    fn store() -> Store {
        Store::from_elements([
            Element::new(10, "App"),
            Element::new(20, "Form").owned_by(10),
            Element::new(30, "Input").owned_by(20),
        ])
        .unwrap()
    }

    /// Drill into `Input`, then select `select`.
    fn render(select: Option<u32>, width: u16, open: bool) -> Result<Vec<String>> {
        render_bar(
            store(),
            ElementId(30),
            select.map(ElementId),
            width,
            open,
            &BarConfig::default(),
        )
    }

    #[test]
    fn render_inline() {
        let lines = render(Some(20), 40, false).unwrap();
        assert_eq!(lines, vec![" ✕ │  App   Form   Input".to_string()]);
    }

    #[test]
    fn render_collapsed_open_lists_all() {
        let lines = render(Some(20), 20, true).unwrap();
        assert!(lines[0].contains("⋯"));
        assert!(lines[0].contains("Form"));
        let body = lines[1..].join("\n");
        assert!(body.contains("App"));
        assert!(body.contains("Input"));
    }

    #[test]
    fn render_rejects_select_outside_stack() {
        let err = render_bar(
            store(),
            ElementId(20),
            Some(ElementId(30)),
            40,
            false,
            &BarConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not an owner"));
    }

    #[test]
    fn chain_is_root_first() {
        let lines = chain_lines(&store(), ElementId(30)).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("App"));
        assert!(lines[2].ends_with("Input"));
        assert!(lines[2].starts_with("    "));
    }

    #[test]
    fn validate_reports_dangling_owner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(
            &path,
            r#"{"elements":[{"id":1,"display_name":"App"},{"id":2,"display_name":"Lost","owner_id":9}]}"#,
        )
        .unwrap();
        assert!(run_validate(&path).is_err());

        let ok = dir.path().join("ok.json");
        std::fs::write(&ok, r#"{"elements":[{"id":1,"display_name":"App"}]}"#).unwrap();
        assert!(run_validate(&ok).is_ok());
    }
}
