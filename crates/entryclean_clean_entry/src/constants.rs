/// Name the cleaner taps the compiler hooks with
pub const PLUGIN_NAME: &str = "CleanEntryPlugin";

/// Prefix of every verbose notice
pub const LOG_PREFIX: &str = "clean-entry-plugin";

/// Extension of an entry's emitted script
pub const SCRIPT_EXTENSION: &str = "js";

/// Extension of an entry's emitted source map
pub const MAP_EXTENSION: &str = "map";
