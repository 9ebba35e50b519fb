//! Picking a keyword's characters at the selected positions.

use std::iter::FusedIterator;

use super::{PositionIterator, Positions, LASTCHAR};

/// Bytes of a keyword at the positions of a set, largest position first.
///
/// Positions past the end of the keyword are skipped. [`LASTCHAR`] picks
/// the final byte, and nothing for an empty keyword.
#[derive(Debug, Clone)]
pub struct SelectedChars<'a, 'k> {
    positions: PositionIterator<'a>,
    keyword: &'k [u8],
}

impl Iterator for SelectedChars<'_, '_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            let pos = self.positions.next()?;
            let byte = if pos == LASTCHAR {
                self.keyword.last()
            } else {
                usize::try_from(pos).ok().and_then(|i| self.keyword.get(i))
            };
            if let Some(&byte) = byte {
                return Some(byte);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.positions.remaining()))
    }
}

impl FusedIterator for SelectedChars<'_, '_> {}

impl Positions {
    /// Bytes of `keyword` at this set's positions.
    pub fn select<'a, 'k>(&'a self, keyword: &'k [u8]) -> SelectedChars<'a, 'k> {
        let maxlen = i32::try_from(keyword.len()).unwrap_or(i32::MAX);
        SelectedChars {
            positions: self.iterator_bounded(maxlen),
            keyword,
        }
    }

    /// Selected bytes of `keyword`, sorted ascending.
    ///
    /// Two keywords with equal selections are indistinguishable to any hash
    /// built from these positions.
    pub fn selected_chars(&self, keyword: &[u8]) -> Vec<u8> {
        let mut chars: Vec<u8> = self.select(keyword).collect();
        chars.sort_unstable();
        chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_in_descending_position_order() {
        let set: Positions = "1,3,$".parse().unwrap();
        let picked: Vec<u8> = set.select(b"while").collect();
        assert_eq!(picked, b"iwe".to_vec());
    }

    #[test]
    fn short_keywords_skip_missing_positions() {
        let set: Positions = "1,5".parse().unwrap();
        assert_eq!(set.select(b"if").collect::<Vec<_>>(), b"i".to_vec());
        assert_eq!(set.select(b"").count(), 0);
    }

    #[test]
    fn lastchar_on_empty_keyword_is_skipped() {
        let set = Positions::from_one(LASTCHAR);
        assert_eq!(set.select(b"").count(), 0);
        assert_eq!(set.select(b"do").collect::<Vec<_>>(), b"o".to_vec());
    }

    #[test]
    fn wildcard_selects_every_byte() {
        let mut set = Positions::new();
        set.set_useall(true);
        assert_eq!(set.select(b"abc").collect::<Vec<_>>(), b"cba".to_vec());
        assert_eq!(set.selected_chars(b"cab"), b"abc".to_vec());
    }
}
