//! Menu error types.
//!
//! The terminal user never sees these; they exist so embedding code can
//! detect misconfiguration (an overfull table, a bad index) during
//! development instead of silently losing a registration.

/// Menu error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    /// E01: Menu table is at capacity, registration dropped
    TableFull,
    /// E02: Index past the last table entry
    BadIndex,
}

impl MenuError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::TableFull => "E01",
            Self::BadIndex => "E02",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::TableFull => "menu table full",
            Self::BadIndex => "index out of range",
        }
    }
}

impl core::fmt::Display for MenuError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
