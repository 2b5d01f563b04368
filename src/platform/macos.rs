// TabIntent platform paths for macOS
// Config and data both live under ~/Library/Application Support/TabIntent

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for TabIntent on macOS.
pub fn get_config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("TabIntent")
}

/// Returns the data directory for TabIntent on macOS.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
