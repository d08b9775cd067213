//! # CaptureLogMenu
//!
//! Interactive character-driven menu for selectively printing capture logs
//! over a serial terminal.
//!
//! ## Architecture
//!
//! Three seams, all trait-based:
//! - [`CaptureLog`]: the log collaborator (count + indexed entry text).
//!   Storage, wraparound and eviction live elsewhere; this crate only reads.
//! - [`SerialInput`]: raw byte input with a non-blocking readiness check.
//! - `core::fmt::Write`: line-oriented text output.
//!
//! [`LogMenu`] ties them together: a bounded table of (log, selection key,
//! header) triples, a blocking prompt/dispatch loop, and a paginated printer
//! with a "press any key to continue / x to abort" protocol.
//!
//! Single-threaded by design: `run` blocks the calling thread until the user
//! types the exit key. Registered logs are assumed static while the menu
//! runs; concurrent writers need external synchronization.

#![cfg_attr(not(test), no_std)]

pub mod capture;
pub mod menu;
pub mod serial;

pub use capture::CaptureLog;
pub use menu::{LogMenu, MenuEntry, MenuError, MenuTable, EXIT_CHAR};
pub use serial::SerialInput;
