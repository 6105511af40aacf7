// Source viewer platform paths for Linux
// Config: ~/.config/srcviewer

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for the viewer on Linux.
/// Uses `$XDG_CONFIG_HOME/srcviewer` if set, otherwise `~/.config/srcviewer`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("srcviewer")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("srcviewer")
    }
}
