//! Error types for graph, display and emulator operations

use core::fmt::Debug;

use thiserror_no_std::Error;

/// Error types for graph operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Logical sample index past the number of stored samples
    #[error("Sample index {index} out of range (length: {length})")]
    IndexOutOfRange {
        /// The requested logical index
        index: usize,
        /// Number of samples currently stored
        length: usize,
    },

    /// No samples available
    #[error("No samples available")]
    NoData,

    /// Graph must be at least one character wide
    #[error("Invalid graph width: {width} characters")]
    InvalidWidth {
        /// The rejected width
        width: u8,
    },

    /// The graph would use glyph slots the display does not have
    #[error("Glyph slots {first}..{end} exceed the {max} available")]
    SlotRangeExceeded {
        /// First requested slot
        first: u8,
        /// One past the last requested slot
        end: usize,
        /// Number of slots on the display
        max: usize,
    },

    /// Sample buffer capacity outside `1..=MAX_SAMPLES`
    #[error("Invalid sample capacity: {capacity} (max: {max})")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
        /// Largest supported capacity
        max: usize,
    },

    /// Stored configuration could not be encoded or decoded
    #[error("Configuration encoding failed")]
    ConfigEncoding,
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while talking to the display driver
#[derive(Debug, Error)]
pub enum DisplayError<E: Debug> {
    /// `publish`/`draw` called before a driver was attached with `begin`
    #[error("No display driver attached")]
    Detached,

    /// The driver rejected a command
    #[error("Display driver error: {0:?}")]
    Driver(E),
}

/// Errors raised by the emulated character LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LcdError {
    /// Custom glyph slot does not exist
    #[error("Glyph slot {slot} out of range (max: {max})")]
    SlotOutOfRange {
        /// The rejected slot
        slot: u8,
        /// Number of slots
        max: usize,
    },

    /// Write or cursor move outside the character grid
    #[error("Cursor ({col}, {row}) outside the display")]
    CursorOutOfBounds {
        /// Column of the rejected position
        col: u8,
        /// Row of the rejected position
        row: u8,
    },
}
