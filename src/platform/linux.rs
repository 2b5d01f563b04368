// TabIntent platform paths for Linux
// Config: ~/.config/tabintent
// Data:   ~/.local/share/tabintent

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for TabIntent on Linux.
/// Uses `$XDG_CONFIG_HOME/tabintent` if set, otherwise `~/.config/tabintent`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("tabintent")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("tabintent")
    }
}

/// Returns the data directory for TabIntent on Linux.
/// Uses `$XDG_DATA_HOME/tabintent` if set, otherwise `~/.local/share/tabintent`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("tabintent")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("tabintent")
    }
}
