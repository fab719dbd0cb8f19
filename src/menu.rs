//! Interactive menu driving the report and statistics views.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::output::{report, statistics};
use crate::parser::load_roster;

/// A selection from the gradebook menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Report,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// Parses a trimmed line of user input. Returns `None` for anything that
    /// is not a menu option.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Report),
            "2" => Some(MenuChoice::Statistics),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU_TEXT: &str = "\nGradebook Menu:\n\
                         1. Load and display grades\n\
                         2. Show class statistics\n\
                         3. Exit\n";

/// Runs the menu until the user exits or input ends.
///
/// Each report or statistics choice re-reads the roster at `source`.
pub fn run_menu<R: BufRead, W: Write>(source: &Path, mut input: R, out: &mut W) -> Result<()> {
    info!(source = %source.display(), "Menu started");
    let mut line = String::new();

    loop {
        write!(out, "{MENU_TEXT}Enter choice (1-3): ").context("Failed to write menu")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read menu choice")? == 0 {
            debug!("Input closed, leaving menu");
            writeln!(out)?;
            return Ok(());
        }

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Report) => {
                let snapshot = load_roster(source);
                write!(out, "{}", report(&snapshot))?;
            }
            Some(MenuChoice::Statistics) => {
                let snapshot = load_roster(source);
                write!(out, "{}", statistics(&snapshot))?;
            }
            Some(MenuChoice::Exit) => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            None => {
                debug!(input = %line.trim(), "Invalid menu choice");
                writeln!(out, "Invalid choice. Please try again.")?;
            }
        }
    }
}
