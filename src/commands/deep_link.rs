//! Handling a single `shredspace://` argument: add the game, install it, exit.

use crate::commands::library;
use crate::core::protocol::rewrite_deep_link;
use crate::core::registry::AppRegistry;
use crate::core::selection::Selection;
use crate::models::error::SError;
use std::io::Write;
use tracing::{info, instrument};

/// Returns whether every step succeeded.
#[instrument(skip(reg, out))]
pub fn run(reg: &mut AppRegistry, link: &str, out: &mut dyn Write) -> Result<bool, SError> {
    if !reg.settings.supports_url_argument {
        let e = SError::Disabled("Opening games from links".into());
        writeln!(out, "{e}")?;
        return Ok(false);
    }

    let url = rewrite_deep_link(link, &reg.settings.scheme);
    info!("installing from link {url}");

    // A game that is already known is reinstalled in place
    let selection = match library::add_game(reg, &url, out) {
        Ok(_) => Selection::Latest,
        Err(SError::DuplicateEntry(index)) => Selection::Positions(vec![index as i64 + 1]),
        Err(_) => return Ok(false),
    };

    let updated = matches!(library::update_games(reg, &selection, out), Ok(0));
    let rendered = library::render_index(reg, out).is_ok();

    writeln!(out, "Goodbye!")?;
    Ok(updated && rendered)
}
