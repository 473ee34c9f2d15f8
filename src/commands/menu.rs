//! The interactive text menu.

use crate::commands::library;
use crate::core::registry::AppRegistry;
use crate::core::selection::Selection;
use crate::models::error::SError;
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Download,
    Update,
    Uninstall,
    Quit,
}

impl MenuChoice {
    fn parse(input: &str, supports_uninstall: bool) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::Download),
            2 => Some(MenuChoice::Update),
            3 if supports_uninstall => Some(MenuChoice::Uninstall),
            4 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Reads one line without the trailing newline. `None` at end of input.
fn prompt<R: BufRead>(input: &mut R, out: &mut dyn Write, text: &str) -> Result<Option<String>, SError> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn print_options(reg: &AppRegistry, out: &mut dyn Write) -> Result<(), SError> {
    writeln!(out, "Would you like to:")?;
    writeln!(out, "1. Download a New Game")?;
    writeln!(out, "2. Update Existing Games")?;
    if reg.settings.supports_uninstall {
        writeln!(out, "3. Uninstall Games")?;
    }
    writeln!(out, "4. Quit")?;
    Ok(())
}

/// Runs the menu until the user quits or input ends, then saves the library.
///
/// Failures of individual actions are reported and the loop continues.
pub fn run<R: BufRead>(reg: &mut AppRegistry, input: &mut R, out: &mut dyn Write) -> Result<(), SError> {
    if reg.library.is_empty() {
        writeln!(out, "No games found.")?;
    }

    let mut running = true;
    while running {
        print_options(reg, out)?;
        let Some(line) = prompt(input, out, "Select an option: ")? else {
            writeln!(out)?;
            break;
        };

        let choice = MenuChoice::parse(&line, reg.settings.supports_uninstall);
        debug!("menu choice {:?} from {:?}", choice, line);

        // Action errors have already been reported to the user
        match choice {
            Some(MenuChoice::Download) => {
                let Some(url) = prompt(input, out, "Enter a URL for a new game (ending in .shredspace): ")? else {
                    break;
                };
                let _ = library::add_game(reg, url.trim(), out);
            }
            Some(MenuChoice::Update) => {
                library::print_games(reg, "Available games for update:", out)?;
                let Some(answer) = prompt(
                    input,
                    out,
                    "\nEnter the numbers of the games you'd like to update, separated by commas (e.g., 1,3): ",
                )?
                else {
                    break;
                };
                let _ = library::update_games(reg, &Selection::parse(&answer), out);
            }
            Some(MenuChoice::Uninstall) => {
                library::print_games(reg, "Available games to uninstall:", out)?;
                let Some(answer) = prompt(input, out, "\nEnter the number of the game you'd like to uninstall: ")? else {
                    break;
                };
                let _ = library::uninstall_game(reg, &Selection::parse(&answer), out);
            }
            Some(MenuChoice::Quit) => running = false,
            None => writeln!(out, "No option selected.")?,
        }

        let _ = library::render_index(reg, out);
        writeln!(out, "\n")?;
    }

    writeln!(out, "Goodbye!")?;
    reg.library.persist()?;
    info!("menu closed with {} games in the library", reg.library.len());
    Ok(())
}
