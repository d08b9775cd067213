//! Shared test fixtures: an in-memory capture log and a scripted terminal.

#![allow(dead_code)]

use std::collections::VecDeque;

use capture_log_menu::{CaptureLog, SerialInput};

/// Fixed capture log backed by a Vec of preformatted lines.
pub struct FakeLog {
    entries: Vec<String>,
}

impl FakeLog {
    /// Log with `n` entries reading "entry 0".."entry n-1".
    pub fn with_entries(n: usize) -> Self {
        Self {
            entries: (0..n).map(|i| format!("entry {}", i)).collect(),
        }
    }

    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            entries: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl CaptureLog for FakeLog {
    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn entry_text(&self, index: usize) -> &str {
        &self.entries[index]
    }
}

/// Scripted bidirectional terminal.
///
/// Input is a sequence of bursts, each modeling the bytes that arrive
/// together after one keystroke (e.g. `b"2\r\n"` from a line-buffered
/// monitor). `available` only sees the current burst, so `drain` stops at
/// the burst boundary the way a real serial port runs dry between
/// keystrokes; the next burst arrives when the menu blocks in `wait_byte`.
pub struct ScriptedTerminal {
    bursts: VecDeque<Vec<u8>>,
    current: VecDeque<u8>,
    output: String,
}

impl ScriptedTerminal {
    pub fn new(bursts: &[&[u8]]) -> Self {
        Self {
            bursts: bursts.iter().map(|b| b.to_vec()).collect(),
            current: VecDeque::new(),
            output: String::new(),
        }
    }

    /// Terminal with no scripted input, for output-only paths.
    pub fn output_only() -> Self {
        Self::new(&[])
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Count occurrences of `needle` in everything written so far.
    pub fn count_lines(&self, needle: &str) -> usize {
        self.output.matches(needle).count()
    }
}

impl SerialInput for ScriptedTerminal {
    fn available(&mut self) -> bool {
        !self.current.is_empty()
    }

    fn read_byte(&mut self) -> u8 {
        self.current.pop_front().unwrap_or(0)
    }

    fn wait_byte(&mut self) -> u8 {
        if self.current.is_empty() {
            let burst = self
                .bursts
                .pop_front()
                .expect("menu waited for input but the script is exhausted");
            self.current = burst.into();
        }
        self.read_byte()
    }
}

impl core::fmt::Write for ScriptedTerminal {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}
