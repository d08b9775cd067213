//! Menu controller: prompt/dispatch loop and paginated printer.
//!
//! ```text
//! SerialInput ──▶ [ run: prompt, one keystroke, dispatch ]
//!                        │
//!                        ▼
//!                 [ print_entries: header + pages ] ──▶ fmt::Write
//! ```
//!
//! Blocking throughout: `run` owns the calling thread until the user types
//! the exit key. Write errors on the serial sink are ignored - there is
//! nobody to report them to.

use core::fmt::Write;

use super::error::MenuError;
use super::messages::{
    BAD_SELECTION_MSG, CONTINUE_MSG, EMPTY_LOG_MSG, EMPTY_MENU_MSG, EXIT_CHAR, EXIT_MSG,
    PROMPT_MSG,
};
use super::registry::{MenuEntry, MenuTable};
use crate::capture::CaptureLog;
use crate::serial::SerialInput;

/// Interactive menu over up to `N` registered capture logs.
///
/// Register every log up front, then hand the terminal to [`run`](Self::run).
pub struct LogMenu<'a, const N: usize> {
    table: MenuTable<'a, N>,
    page_length: u16,
}

impl<'a, const N: usize> LogMenu<'a, N> {
    /// Create an empty menu.
    ///
    /// `page_length` is the number of entries printed between continuation
    /// prompts; 0 disables pagination entirely.
    pub const fn new(page_length: u16) -> Self {
        Self {
            table: MenuTable::new(),
            page_length,
        }
    }

    /// Register a log under a selection key.
    ///
    /// `log` and `header` are borrowed for the life of the menu. Returns
    /// `Err(TableFull)` once `N` logs are registered.
    ///
    /// Registering [`EXIT_CHAR`] works but the entry can never be selected;
    /// the exit check runs before lookup.
    pub fn register(
        &mut self,
        log: &'a dyn CaptureLog,
        key: u8,
        header: &'a str,
    ) -> Result<(), MenuError> {
        self.table.push(MenuEntry::new(log, key, header))
    }

    /// Number of registered logs
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if no logs are registered
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Configured page length (0 = pagination disabled)
    pub fn page_length(&self) -> u16 {
        self.page_length
    }

    /// Run the interactive loop until the user types the exit key.
    ///
    /// Each pass prints the prompt with every registered key, blocks for one
    /// keystroke, discards trailing CR/LF, and dispatches: exit key leaves
    /// the loop, a registered key prints that log, anything else gets an
    /// unknown-command notice. With nothing registered, prints a notice and
    /// returns at once.
    pub fn run<T>(&self, term: &mut T)
    where
        T: SerialInput + Write,
    {
        if self.table.is_empty() {
            let _ = writeln!(term, "{}", EMPTY_MENU_MSG);
            return;
        }

        loop {
            let _ = writeln!(term);
            let _ = write!(term, "{}[ ", PROMPT_MSG);
            for entry in self.table.iter() {
                let _ = write!(term, "{} ", entry.key as char);
            }
            let _ = write!(term, "] >> ");

            let selection = term.wait_byte();
            term.drain();

            if selection == EXIT_CHAR {
                let _ = writeln!(term, "{}", EXIT_MSG);
                return;
            }

            // Echo the keystroke before acting on it
            let _ = writeln!(term, "{}", selection as char);
            let _ = writeln!(term);

            match self.table.find(selection) {
                Some(index) => {
                    // Index comes from a successful lookup, cannot fail
                    let _ = self.print_entries(index, term);
                }
                None => {
                    let _ = writeln!(term, "{}", BAD_SELECTION_MSG);
                }
            }
        }
    }

    /// Print one registered log, page by page.
    ///
    /// Prints the header, then every entry as `[<index>] <text>`. When
    /// pagination is enabled and entries remain past a full page, prints the
    /// continuation notice and blocks for a keystroke: the exit key abandons
    /// the remaining entries, anything else starts the next page under a
    /// fresh header. No prompt follows the final page.
    ///
    /// Returns `Err(BadIndex)` (nothing printed) for an out-of-range index.
    pub fn print_entries<T>(&self, index: usize, term: &mut T) -> Result<(), MenuError>
    where
        T: SerialInput + Write,
    {
        let entry = self.table.get(index).ok_or(MenuError::BadIndex)?;

        let _ = writeln!(term, "{}", entry.header);

        let count = entry.log.entry_count();
        if count == 0 {
            let _ = writeln!(term, "{}", EMPTY_LOG_MSG);
            return Ok(());
        }

        let mut page_count: u16 = 0;
        for n in 0..count {
            let _ = writeln!(term, "[{}] {}", n, entry.log.entry_text(n));
            page_count += 1;

            if self.page_length != 0 && page_count == self.page_length && n + 1 < count {
                page_count = 0;
                let _ = writeln!(term, "{}", CONTINUE_MSG);
                let _ = writeln!(term);

                let key = term.wait_byte();
                term.drain();
                if key == EXIT_CHAR {
                    return Ok(());
                }

                let _ = writeln!(term, "{}", entry.header);
            }
        }

        Ok(())
    }
}
