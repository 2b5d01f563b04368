// TabIntent platform paths for Windows
// Config and data both live under %APPDATA%/TabIntent

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for TabIntent on Windows.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("TabIntent")
}

/// Returns the data directory for TabIntent on Windows.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
