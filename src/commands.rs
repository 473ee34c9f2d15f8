pub mod deep_link;
pub mod library;
pub mod menu;

use crate::cli::{Cli, Command};
use crate::config::AppSettings;
use crate::core::protocol;
use crate::core::registry::AppRegistry;
use crate::core::selection::Selection;
use crate::models::error::SError;
use camino::Utf8PathBuf;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, warn};

/// Resolves settings from the command line, falling back to the per-user file.
pub fn resolve_settings(cli: &Cli) -> Result<AppSettings, SError> {
    let mut settings = match &cli.config {
        Some(path) => AppSettings::load_path(path)?,
        None => AppSettings::load().unwrap_or_else(|e| {
            warn!("using default settings: {e}");
            AppSettings::default()
        }),
    };
    if let Some(home) = &cli.home {
        settings.home = Some(home.clone());
    }
    Ok(settings)
}

fn banner(out: &mut dyn Write) -> Result<(), SError> {
    writeln!(out, "ShredSpace Updator (Text Edition) v{}\n\n", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn dispatch(cli: Cli) -> Result<ExitCode, SError> {
    debug!("{:?}", cli);
    let settings = resolve_settings(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(Command::RegisterProtocol { exe, output }) = &cli.command {
        let exe = match exe {
            Some(exe) => exe.clone(),
            None => Utf8PathBuf::from_path_buf(std::env::current_exe()?)
                .map_err(|p| SError::IOError(format!("non UTF-8 executable path {}", p.display())))?,
        };
        let output = output.clone().unwrap_or_else(|| settings.paths().registry_file);
        protocol::write_registry_file(&settings.scheme, &exe, &output)?;
        writeln!(out, "Wrote {output}")?;
        return Ok(ExitCode::SUCCESS);
    }

    let (mut reg, load_error) = AppRegistry::open(settings)?;
    // Menu and link invocations are what a user launches directly
    if cli.command.is_none() || cli.command == Some(Command::Menu) {
        banner(&mut out)?;
    }
    if let Some(e) = load_error {
        writeln!(out, "Error: {e}")?;
    }

    let ok = match (cli.command, cli.url) {
        (Some(Command::List), _) => library::list_games(&reg, &mut out).is_ok(),
        (Some(Command::Add { url }), _) => library::add_game(&mut reg, &url, &mut out).is_ok(),
        (Some(Command::Update { selection }), _) => {
            matches!(library::update_games(&reg, &Selection::parse(&selection), &mut out), Ok(0))
        }
        (Some(Command::Uninstall { index }), _) => {
            library::uninstall_game(&mut reg, &Selection::parse(&index), &mut out).is_ok()
        }
        (Some(Command::Render), _) => library::render_index(&reg, &mut out).is_ok(),
        (Some(Command::RegisterProtocol { .. }), _) => true,
        (None, Some(link)) => deep_link::run(&mut reg, &link, &mut out)?,
        (Some(Command::Menu), _) | (None, None) => {
            let stdin = io::stdin();
            menu::run(&mut reg, &mut stdin.lock(), &mut out)?;
            true
        }
    };

    Ok(exit_code(ok))
}
