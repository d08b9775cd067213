//! Character-driven menu over registered capture logs.
//!
//! Bounded table, blocking dispatch loop, paginated printer.
//! Zero heap allocation - capacity is a const generic.

pub mod controller;
pub mod error;
pub mod messages;
pub mod registry;

pub use controller::LogMenu;
pub use error::MenuError;
pub use messages::EXIT_CHAR;
pub use registry::{MenuEntry, MenuTable};
