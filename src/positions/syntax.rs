//! External syntax for position sets.
//!
//! `*` is the wildcard. Otherwise a comma-separated list of one-based
//! positions, with ascending runs written `low-high` and the last-character
//! position written `$`, e.g. `1-3,5,$`.

use std::fmt;
use std::str::FromStr;

use super::{Positions, LASTCHAR, MAX_KEY_POS};
use crate::error::ParsePositionsError;

impl fmt::Display for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_useall() {
            return f.write_str("*");
        }

        let mut first = true;
        let mut seen_lastchar = false;
        let mut values = self.as_slice().iter().rev().copied().peekable();

        while let Some(low) = values.next() {
            if low == LASTCHAR {
                seen_lastchar = true;
                continue;
            }
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", low + 1)?;

            let mut high = low;
            while values.next_if_eq(&(high + 1)).is_some() {
                high += 1;
            }
            if high != low {
                write!(f, "-{}", high + 1)?;
            }
            first = false;
        }

        if seen_lastchar {
            if !first {
                f.write_str(",")?;
            }
            f.write_str("$")?;
        }
        Ok(())
    }
}

impl FromStr for Positions {
    type Err = ParsePositionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        let mut positions = Positions::new();
        if spec.is_empty() {
            return Ok(positions);
        }
        if spec == "*" {
            positions.set_useall(true);
            return Ok(positions);
        }

        let mut load = positions.bulk_load();
        for item in spec.split(',').map(str::trim) {
            if item == "$" {
                load.push(LASTCHAR)
                    .map_err(|_| ParsePositionsError::TooMany)?;
                continue;
            }

            let (low, high) = match item.split_once('-') {
                Some((low, high)) => (parse_position(low, item)?, parse_position(high, item)?),
                None => {
                    let pos = parse_position(item, item)?;
                    (pos, pos)
                }
            };
            if low > high {
                return Err(ParsePositionsError::InvertedRange(low, high));
            }

            for pos in low..=high {
                // One-based in the syntax, zero-based in the set.
                load.push(pos as i32 - 1)
                    .map_err(|_| ParsePositionsError::TooMany)?;
            }
        }

        if !load.finish() {
            return Err(ParsePositionsError::Duplicate);
        }
        Ok(positions)
    }
}

fn parse_position(text: &str, item: &str) -> Result<i64, ParsePositionsError> {
    let pos: i64 = text
        .trim()
        .parse()
        .map_err(|_| ParsePositionsError::InvalidItem(item.to_string()))?;
    if !(1..=i64::from(MAX_KEY_POS)).contains(&pos) {
        return Err(ParsePositionsError::OutOfRange(pos));
    }
    Ok(pos)
}
