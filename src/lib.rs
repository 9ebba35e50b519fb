//! # Key positions and mark arrays for perfect hash search
//!
//! Two primitives from the inner loop of a perfect hash function generator:
//!
//! 1. **[`Positions`]**: the set of character positions whose characters
//!    feed a keyword's hash value. Kept sorted descending in fixed inline
//!    storage, with `*` (all positions) and `$` (last character) as special
//!    members.
//! 2. **[`MarkArray`]**: a "seen this hash value?" array whose clear is
//!    O(1), so each search trial can start fresh without re-zeroing.
//!
//! ## Usage Example
//!
//! ```
//! use keypos::{MarkArray, Positions};
//!
//! let positions: Positions = "1,3,$".parse().unwrap();
//! let mut seen = MarkArray::new(64);
//! let mut collisions = 0;
//! for keyword in ["while", "for", "if", "else"] {
//!     let sum: usize = positions.select(keyword.as_bytes()).map(usize::from).sum();
//!     if seen.set_bit((sum + keyword.len()) % 64) {
//!         collisions += 1;
//!     }
//! }
//! seen.clear();
//! assert_eq!(positions.to_string(), "1,3,$");
//! assert!(collisions <= 3);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;     // Diagnostics flag
pub mod error;      // Contract violations and parse errors
pub mod marks;      // Generation-stamped mark array
pub mod positions;  // Key position sets

pub use config::Options;
pub use error::{ParsePositionsError, PositionsError};
pub use marks::MarkArray;
pub use positions::{
    BulkLoad, PositionIterator, PositionReverseIterator, Positions, SelectedChars, EOS,
    LASTCHAR, MAX_KEY_POS, MAX_SIZE,
};
