//! Custom URL scheme handling.
//!
//! A link such as `shredspace://example.com/games/foo.json` is the
//! descriptor `https://example.com/games/foo.json`. On Windows the scheme is
//! associated with the executable through a generated `.reg` file.

use crate::models::error::SError;
use camino::Utf8Path;
use std::fs;
use tracing::info;

const HANDLER_LABEL: &str = "ShredSpace";

/// Rewrites a `<scheme>://` link to `https://`. Anything else passes through.
pub fn rewrite_deep_link(arg: &str, scheme: &str) -> String {
    let prefix = format!("{scheme}://");
    match arg.strip_prefix(&prefix) {
        Some(rest) => format!("https://{rest}"),
        None => arg.to_string(),
    }
}

/// Contents of a `.reg` file that opens `<scheme>://` links with `exe_path`.
pub fn registry_file(scheme: &str, exe_path: &str) -> String {
    let exe_path = exe_path.replace('\\', "\\\\");
    format!(
        r#"Windows Registry Editor Version 5.00

[HKEY_CLASSES_ROOT\{scheme}]
@="{HANDLER_LABEL}"
"URL Protocol"=""

[HKEY_CLASSES_ROOT\{scheme}\shell]

[HKEY_CLASSES_ROOT\{scheme}\shell\open]

[HKEY_CLASSES_ROOT\{scheme}\shell\open\command]
@="\"{exe_path}\" \"%1\""
"#
    )
}

pub fn write_registry_file(scheme: &str, exe_path: &Utf8Path, output: &Utf8Path) -> Result<(), SError> {
    fs::write(output, registry_file(scheme, exe_path.as_str()))?;
    info!("wrote protocol registration for {scheme}:// to {output}");
    Ok(())
}
