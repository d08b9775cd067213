//! User-facing message and key constants.
//!
//! These strings are a terminal-protocol contract; change them and every
//! serial-monitor script that parses the menu breaks.

/// Printed at a page break while waiting for a keystroke.
pub const CONTINUE_MSG: &str = "[Press any key to continue]";

/// First part of the selection prompt; the registered keys follow.
pub const PROMPT_MSG: &str = "Select debug log";

/// Printed instead of entries when the selected log holds nothing.
pub const EMPTY_LOG_MSG: &str = "<log is empty>";

/// Printed by `run` when no logs were registered.
pub const EMPTY_MENU_MSG: &str = "No logs have been added to the menu";

/// Printed when the typed key matches no registered log.
pub const BAD_SELECTION_MSG: &str = "Unknown command";

/// Printed when the user leaves the menu.
pub const EXIT_MSG: &str = "Exit";

/// Reserved key: exits the menu loop and aborts pagination early.
///
/// Checked before table lookup, so an entry registered under this key is
/// permanently unreachable. Known quirk, kept on purpose.
pub const EXIT_CHAR: u8 = b'x';
