//! Error types for position sets.

use thiserror::Error;

/// Contract violations raised by [`Positions`](crate::Positions) mutation.
///
/// These indicate a defect in the caller, not bad input. The panicking
/// [`add`](crate::Positions::add) and [`remove`](crate::Positions::remove)
/// turn them into a panic; the `try_` variants hand them back.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionsError {
    /// Position was already in the set
    #[error("duplicate position {0}")]
    DuplicateInsertion(i32),

    /// The set already holds `MAX_SIZE` positions
    #[error("overflow, set is at capacity")]
    CapacityExceeded,

    /// Position was not in the set
    #[error("position {0} not found")]
    NotFound(i32),
}

/// Errors from parsing the external position syntax (`*`, `1,3-5,$`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePositionsError {
    /// An item was neither `$`, a number, nor a `lo-hi` range
    #[error("invalid key position item '{0}', use 1,2,3-255,'$' or '*'")]
    InvalidItem(String),

    /// A one-based position fell outside `1..=MAX_KEY_POS`
    #[error("key position {0} out of range 1..=255")]
    OutOfRange(i64),

    /// A range whose low end exceeds its high end
    #[error("invalid range {0}-{1}, low end exceeds high end")]
    InvertedRange(i64, i64),

    /// The same position was selected more than once
    #[error("duplicate key positions selected")]
    Duplicate,

    /// More items than a position set can hold
    #[error("too many key positions selected")]
    TooMany,
}
