//! Bounded, insertion-ordered table of registered capture logs.
//!
//! Static capacity via const generic, no heap. Entries are write-once:
//! there is no removal, and the table lives shorter than everything it
//! borrows.

use heapless::Vec;

use super::error::MenuError;
use crate::capture::CaptureLog;

/// One registered log: the log itself, its selection key, and the header
/// printed above each page of its entries.
///
/// Non-owning: log and header are caller-owned and must outlive the menu.
pub struct MenuEntry<'a> {
    /// Log printed when this entry is selected
    pub log: &'a dyn CaptureLog,
    /// Key the user types to select this log
    pub key: u8,
    /// Header line printed at the top of each page
    pub header: &'a str,
}

impl<'a> MenuEntry<'a> {
    /// Create a new entry
    pub const fn new(log: &'a dyn CaptureLog, key: u8, header: &'a str) -> Self {
        Self { log, key, header }
    }
}

/// Insertion-ordered table with capacity `N`.
pub struct MenuTable<'a, const N: usize> {
    entries: Vec<MenuEntry<'a>, N>,
}

impl<'a, const N: usize> MenuTable<'a, N> {
    /// Create empty table
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    ///
    /// Returns `Err(TableFull)` at capacity; the table is unchanged and the
    /// entry is dropped. Callers free to ignore the result get the classic
    /// silent-overflow behavior.
    pub fn push(&mut self, entry: MenuEntry<'a>) -> Result<(), MenuError> {
        self.entries.push(entry).map_err(|_| MenuError::TableFull)
    }

    /// Find the first entry whose key matches, in insertion order.
    ///
    /// First match wins: a duplicate key shadows every later entry
    /// registered under it.
    pub fn find(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Get entry by index
    pub fn get(&self, index: usize) -> Option<&MenuEntry<'a>> {
        self.entries.get(index)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry<'a>> {
        self.entries.iter()
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, const N: usize> Default for MenuTable<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}
