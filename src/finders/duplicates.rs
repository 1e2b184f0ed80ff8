use crate::mapping::DomainBase;
use crate::marking::Marked;
use crate::placement::{place, place_with};

use super::misplaced;

/// Every value of `[1, n]` that occurs twice, in slot order. Leaves the
/// buffer permuted.
pub fn all_duplicates(buffer: &mut [i64]) -> Vec<i64> {
    place(buffer, DomainBase::One);
    let len = buffer.len() as i64;
    misplaced(buffer)
        .map(|(_, v)| v)
        .filter(|v| (1..=len).contains(v))
        .collect()
}

/// Same values as [`all_duplicates`], in order of their second sighting. The
/// buffer is unchanged on return.
pub fn all_duplicates_preserving(buffer: &mut [i64]) -> Vec<i64> {
    let mut repeats = Vec::new();
    drop(Marked::with(buffer, |_, value| repeats.push(value)));
    repeats
}

/// `(duplicate, missing)` for a buffer over `[1, n]` where one value
/// replaced another. `None` when the buffer holds no such pair. Leaves the
/// buffer permuted.
pub fn set_mismatch(buffer: &mut [i64]) -> Option<(i64, i64)> {
    let mut duplicate = None;
    place_with(buffer, DomainBase::One, |_, value| {
        duplicate.get_or_insert(value);
    });
    let (slot, _) = misplaced(buffer).next()?;
    Some((duplicate?, slot as i64 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_mismatch_reports_pair() {
        assert_eq!(set_mismatch(&mut [1, 2, 2, 4]), Some((2, 3)));
        assert_eq!(set_mismatch(&mut [3, 2, 3, 4, 6, 5]), Some((3, 1)));
        assert_eq!(set_mismatch(&mut [2, 1]), None);
    }

    #[test]
    fn duplicate_variants_agree() {
        let input = [4, 3, 2, 7, 8, 2, 3, 1];
        let mut preserved = input;
        let mut marked = all_duplicates_preserving(&mut preserved);
        marked.sort_unstable();
        assert_eq!(marked, vec![2, 3]);
        assert_eq!(preserved, input);

        let mut permuted = input;
        let mut placed = all_duplicates(&mut permuted);
        placed.sort_unstable();
        assert_eq!(placed, vec![2, 3]);
    }
}
