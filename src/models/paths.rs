use camino::{Utf8Path, Utf8PathBuf};

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

define_paths!(AppPaths {
    manifest: "games.json",
    install_root: "app",
    index: "app/index.html",
    staging: "app/.staging",
    registry_file: "register_protocol.reg",
});

impl AppPaths {
    /// Folder a game is extracted into: `<install_root>/<name>`.
    pub fn install_dir(&self, name: &str) -> Utf8PathBuf {
        self.install_root.join(name)
    }

    /// Whether `name` can hold a game: a safe folder name that is not one of
    /// the updater's own entries under the install root.
    pub fn is_game_folder(&self, name: &str) -> bool {
        let dir = self.install_dir(name);
        is_safe_folder_name(name) && dir != self.staging && dir != self.index
    }
}

/// Whether `name` can be used as a single folder name under the install root.
pub fn is_safe_folder_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }

    if name.ends_with('.') || name.ends_with(' ') {
        return false;
    }

    name.chars().all(|c| {
        !(c == '/' || c == '\\' || c.is_control() || matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|'))
    })
}
