// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "mcprops: Minecraft Server Properties";

pub const EN_BTN_OPEN: &str = "Open Folder...";
pub const EN_BTN_RELOAD: &str = "Reload";
pub const EN_BTN_SAVE: &str = "Save";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_ABOUT_HEADING: &str = "mcprops: Minecraft Server Properties";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_TEXT: &str =
    "Edit the server.properties file via a friendly form or the raw editor.";
pub const EN_ABOUT_LOSSY: &str =
    "Saving rewrites the file: comments and blank lines are not preserved.";

pub const EN_HOME_HEADING: &str = "Minecraft Server Properties";
pub const EN_HOME_NO_ACCESS: &str =
    "server.properties could not be read from this folder. Open a server folder to begin.";
pub const EN_HOME_LOAD_FAILED: &str = "Failed to load server.properties.";

pub const EN_GROUP_BASIC: &str = "Basic";
pub const EN_GROUP_GAMEPLAY: &str = "Gameplay";
pub const EN_GROUP_WORLD: &str = "World";
pub const EN_GROUP_NETWORK: &str = "Network";
pub const EN_GROUP_ADVANCED: &str = "Advanced & Raw";

pub const EN_GROUP_EMPTY: &str = "None of these properties are present in the file.";

pub const EN_LABEL_RAW: &str = "Raw server.properties";
pub const EN_HELPER_RAW: &str = "Advanced: edit the raw file directly";
pub const EN_LABEL_UNMODELED: &str = "Other properties";
pub const EN_HINT_NUMBER_RANGE: &str = "Expected a whole number between";

pub const EN_COL_KEY: &str = "Key";
pub const EN_COL_VALUE: &str = "Value";

pub const EN_BADGE_DIRTY: &str = "unsaved changes";
pub const EN_PREFIX_SERVER: &str = "Server:";

pub const EN_NOTIFY_SAVED: &str = "Saved Properties successfully.";
pub const EN_NOTIFY_INVALID_SERVER: &str = "Invalid server.";
pub const EN_NOTIFY_NOT_LOADED: &str = "Nothing to save: server.properties has not been loaded.";
pub const EN_NOTIFY_SAVE_FAILED: &str =
    "Failed to save server.properties. Please check your configuration and try again.";

// Idle time before raw editor changes are re-parsed into the form.
pub const RAW_SYNC_DEBOUNCE_SECS: f64 = 0.5;
pub const RAW_EDITOR_ROWS: usize = 12;

// server.properties format.
pub const PROPERTIES_FILENAME: &str = "server.properties";
pub const PROPS_COMMENT_PREFIX: &str = "#";
pub const PROPS_HEADER_TITLE: &str = "Minecraft server properties";
pub const PROPS_HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const PROPS_TRUE: &str = "true";
pub const PROPS_FALSE: &str = "false";

pub const BACKUP_INFIX: &str = ".bak.";
pub const BACKUP_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

// Newline constants (used for save formatting).
pub const NL_LF: &str = "\n";
